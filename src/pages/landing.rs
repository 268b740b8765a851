use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::components::theme::ThemeStyles;
use crate::Route;

struct Partner {
    name: &'static str,
    logo: &'static str,
    gradient: (&'static str, &'static str),
    description: &'static str,
}

const PARTNERS: &[Partner] = &[
    Partner {
        name: "Airalo",
        logo: "A",
        gradient: ("#3b82f6", "#2563eb"),
        description: "Global eSIM marketplace leader",
    },
    Partner {
        name: "eSIM Access",
        logo: "eA",
        gradient: ("#22c55e", "#16a34a"),
        description: "Enterprise eSIM solutions",
    },
    Partner {
        name: "Telnyx",
        logo: "T",
        gradient: ("#a855f7", "#9333ea"),
        description: "Telecom infrastructure platform",
    },
];

// (icon, figure, label)
const STATS: &[(&str, &str, &str)] = &[
    ("🌐", "150+", "Countries"),
    ("🏆", "$90B+", "Valuation"),
    ("👥", "10M+", "Users"),
];

// (icon, title, blurb)
const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🌐",
        "Global Network",
        "Seamless connectivity across 150+ countries with enterprise-grade infrastructure and real-time optimization.",
    ),
    (
        "💳",
        "Crypto Native",
        "Pay with USDC, Bitcoin, Ethereum and other major cryptocurrencies with instant, secure transactions.",
    ),
    (
        "🛡️",
        "DID Security",
        "Your identity and travel data secured by advanced blockchain technology and decentralized protocols.",
    ),
];

const LANDING_CSS: &str = r#"
    .landing-page section {
        padding: 6rem 1.5rem;
    }
    .container {
        max-width: 1100px;
        margin: 0 auto;
    }
    .muted { color: var(--text-muted); }
    .hero-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    @media (max-width: 960px) {
        .hero-grid, .card-grid { grid-template-columns: 1fr !important; }
        .orbit { display: none; }
    }
    .tag-line {
        display: flex;
        gap: 0.75rem;
        font-size: 1.1rem;
        font-weight: 500;
        color: var(--text-muted);
        margin-bottom: 2rem;
    }
    .hero-title {
        font-size: clamp(3rem, 6vw, 4.5rem);
        font-weight: 900;
        line-height: 1.1;
        margin: 0 0 2rem;
    }
    .hero-title .soft {
        font-weight: 300;
        font-style: italic;
        color: var(--text-muted);
    }
    .hero-subtitle {
        font-size: 1.35rem;
        color: var(--text-muted);
        line-height: 1.6;
        margin-bottom: 3rem;
    }
    .cta-row {
        display: flex;
        flex-wrap: wrap;
        gap: 1.5rem;
    }
    .cta {
        padding: 1rem 3rem;
        font-size: 1.1rem;
        font-weight: 600;
        border-radius: 12px;
        text-decoration: none;
        border: 2px solid var(--accent);
        background: var(--accent);
        color: var(--accent-text);
        transition: transform 0.3s ease;
    }
    .cta:hover { transform: scale(1.05); }
    .cta.secondary {
        background: transparent;
        color: var(--text);
        border-color: var(--border);
    }
    .orbit {
        position: relative;
        width: 24rem;
        height: 24rem;
        margin-left: auto;
    }
    .orbit-hub {
        position: absolute;
        inset: 0;
        margin: auto;
        width: 6rem;
        height: 6rem;
        border-radius: 50%;
        background: linear-gradient(135deg, #1e293b, #0f172a);
        display: flex;
        align-items: center;
        justify-content: center;
        color: white;
        font-weight: 700;
        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
    }
    .orbit-ring {
        position: absolute;
        border: 2px dashed rgba(59, 130, 246, 0.3);
        border-radius: 50%;
    }
    .orbit-ring.telecom { inset: 2rem; }
    .orbit-ring.web3 { inset: 3rem; border-color: rgba(168, 85, 247, 0.3); }
    .orbit-track {
        position: absolute;
        inset: 0;
        animation: spin-slow 20s linear infinite;
    }
    .orbit-track.reverse { animation-direction: reverse; }
    .orbit-node {
        position: absolute;
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 16px;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.25);
    }
    .orbit-node.top { top: -1.5rem; left: calc(50% - 1.75rem); background: #1d4ed8; }
    .orbit-node.bottom { bottom: -1.5rem; left: calc(50% - 1.75rem); background: #15803d; }
    .orbit-node.left { left: -1.5rem; top: calc(50% - 1.75rem); background: #7e22ce; }
    .orbit-node.right { right: -1.5rem; top: calc(50% - 1.75rem); background: #0e7490; }
    @keyframes spin-slow { to { transform: rotate(360deg); } }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .card {
        padding: 2rem;
        border-radius: 24px;
        background: var(--surface);
        border: 1px solid var(--border);
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
        transition: transform 0.3s ease;
    }
    .card:hover { transform: scale(1.05); }
    .stat-card { text-align: center; }
    .stat-figure { font-size: 1.9rem; font-weight: 900; }
    .section-title {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-title h2 {
        font-size: 2.5rem;
        margin: 0 0 1rem;
    }
    .partner-logo {
        width: 5rem;
        height: 5rem;
        margin: 0 auto 1.5rem;
        border-radius: 16px;
        display: flex;
        align-items: center;
        justify-content: center;
        color: white;
        font-weight: 700;
        font-size: 1.25rem;
    }
    .feature-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 16px;
        background: var(--accent);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
    }
    .feature-head {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .phone-mock {
        width: 18rem;
        height: 24rem;
        margin: 0 auto 4rem;
        border-radius: 24px;
        padding: 1rem;
        background: var(--surface);
        border: 1px solid var(--border);
        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.2);
    }
    .phone-screen {
        height: 100%;
        border-radius: 16px;
        background: var(--surface-raised);
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
    }
    .pill {
        background: var(--accent);
        color: var(--accent-text);
        padding: 0.4rem 1rem;
        border-radius: 999px;
        font-size: 0.75rem;
        font-weight: 600;
    }
    .waitlist-form {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        max-width: 42rem;
        margin: 0 auto 1.5rem;
    }
    .waitlist-form input {
        flex: 1;
        min-width: 14rem;
        height: 3.5rem;
        padding: 0 1.5rem;
        border-radius: 12px;
        font-size: 1.1rem;
        border: 1px solid var(--border);
        background: var(--surface);
        color: var(--text);
    }
    .wallet-toggle {
        height: 3.5rem;
        padding: 0 2rem;
        border-radius: 12px;
        font-weight: 600;
        border: 1px solid var(--border);
        background: var(--surface-raised);
        color: var(--text);
    }
    .wallet-toggle.connected {
        background: #16a34a;
        border-color: #16a34a;
        color: white;
    }
    .join-button {
        width: 100%;
        max-width: 42rem;
        height: 3.5rem;
        border-radius: 12px;
        border: none;
        font-size: 1.1rem;
        font-weight: 600;
        background: var(--accent);
        color: var(--accent-text);
    }
    .joined-note { color: #16a34a; font-weight: 600; }
    .site-footer {
        padding: 4rem 1.5rem;
        text-align: center;
        border-top: 1px solid var(--border);
        background: var(--surface);
    }
"#;

fn render_hero() -> Html {
    html! {
        <section class="hero">
            <div class="container hero-grid">
                <div>
                    <div class="tag-line">{"⚡ One eSIM for the world"}</div>
                    <h1 class="hero-title">
                        {"Global"}<br />
                        <span class="soft">{"Connectivity"}</span><br />
                        {"Reimagined"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Revolutionizing global connectivity with crypto-powered eSIM technology. Pay once, roam everywhere, own your data."}
                    </p>
                    <div class="cta-row">
                        <Link<Route> to={Route::BuyData} classes="cta">{"→ Start Your Journey"}</Link<Route>>
                        <a href="#app" class="cta secondary">{"📱 Watch Demo"}</a>
                    </div>
                </div>

                <div class="orbit">
                    <div class="orbit-ring telecom"></div>
                    <div class="orbit-ring web3"></div>
                    <div class="orbit-track">
                        <div class="orbit-node top">{"📻"}</div>
                        <div class="orbit-node bottom">{"📶"}</div>
                    </div>
                    <div class="orbit-track reverse">
                        <div class="orbit-node left">{"💳"}</div>
                        <div class="orbit-node right">{"🛡️"}</div>
                    </div>
                    <div class="orbit-hub">{"GeSIM"}</div>
                </div>
            </div>
        </section>
    }
}

fn render_stats() -> Html {
    html! {
        <div class="container card-grid" style="max-width: 56rem;">
            { for STATS.iter().map(|(icon, figure, label)| html! {
                <div class="card stat-card" key={*label}>
                    <div class="stat-figure">{format!("{} {}", icon, figure)}</div>
                    <div class="muted">{*label}</div>
                </div>
            }) }
        </div>
    }
}

fn render_partners() -> Html {
    html! {
        <section id="partners">
            <div class="container">
                <div class="section-title">
                    <h2>{"🏢 Strategic Partners"}</h2>
                    <p class="muted">{"⭐ Leading the telecom revolution together"}</p>
                </div>
                <div class="card-grid">
                    { for PARTNERS.iter().map(|partner| html! {
                        <div class="card" key={partner.name} style="text-align: center;">
                            <div
                                class="partner-logo"
                                style={format!("background: linear-gradient(135deg, {}, {});", partner.gradient.0, partner.gradient.1)}
                            >
                                {partner.logo}
                            </div>
                            <h3>{partner.name}</h3>
                            <p class="muted">{partner.description}</p>
                        </div>
                    }) }
                </div>
                <div style="text-align: center; margin-top: 4rem;">
                    <a href="#waitlist" class="cta secondary">{"🏢 Become a Partner"}</a>
                </div>
            </div>
        </section>
    }
}

fn render_features() -> Html {
    html! {
        <section id="features">
            <div class="container">
                <div class="section-title">
                    <h2>{"⚡ Revolutionary Features"}</h2>
                    <p class="muted">{"The future of global connectivity is here"}</p>
                </div>
                <div class="card-grid">
                    { for FEATURES.iter().map(|(icon, title, blurb)| html! {
                        <div class="card" key={*title}>
                            <div class="feature-head">
                                <div class="feature-icon">{*icon}</div>
                                <h3>{*title}</h3>
                            </div>
                            <p class="muted">{*blurb}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_app_teaser() -> Html {
    html! {
        <section id="app" style="text-align: center;">
            <div class="container">
                <div class="phone-mock">
                    <div class="phone-screen">
                        <div class="feature-icon">{"📱"}</div>
                        <h3>{"GeSIM"}</h3>
                        <p class="muted">{"⚡ Coming Q2 2025"}</p>
                        <span class="pill">{"⭐ Beta Access"}</span>
                    </div>
                </div>
                <h2 style="font-size: 2.5rem;">{"📱 Your Digital Passport"}</h2>
                <p class="muted" style="font-size: 1.25rem; max-width: 48rem; margin: 0 auto;">
                    {"Manage global connectivity, track usage in real-time, and pay with crypto from one elegant mobile application."}
                </p>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let is_dark = use_state(|| false);
    let email = use_state(String::new);
    let wallet_connected = use_state(|| false);
    let joined = use_state(|| false);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_toggle_theme = {
        let is_dark = is_dark.clone();
        Callback::from(move |_| is_dark.set(!*is_dark))
    };

    let on_email = {
        let email = email.clone();
        let joined = joined.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            joined.set(false);
        })
    };

    let on_wallet = {
        let wallet_connected = wallet_connected.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Landing wallet toggled to {}", !*wallet_connected);
            wallet_connected.set(!*wallet_connected);
        })
    };

    let on_join = {
        let email = email.clone();
        let joined = joined.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Waitlist join requested for {}", *email);
            joined.set(true);
        })
    };

    html! {
        <div class="landing-page">
            <ThemeStyles is_dark={*is_dark} />
            <style>{LANDING_CSS}</style>

            <SiteHeader is_dark={*is_dark} on_toggle_theme={on_toggle_theme} />

            { render_hero() }
            { render_stats() }
            { render_partners() }
            { render_features() }
            { render_app_teaser() }

            <section id="waitlist" style="text-align: center;">
                <div class="container" style="max-width: 48rem;">
                    <h2 style="font-size: 2.5rem;">{"✉️ Join the Revolution"}</h2>
                    <p class="muted" style="font-size: 1.25rem; margin-bottom: 3rem;">
                        {"👥 Join thousands of digital nomads already using GeSIM"}
                    </p>

                    <div class="waitlist-form">
                        <input
                            type="email"
                            placeholder="Enter your email address"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                        <button
                            class={classes!("wallet-toggle", (*wallet_connected).then(|| "connected"))}
                            onclick={on_wallet}
                        >
                            { if *wallet_connected { "👛 Connected" } else { "👛 Connect Wallet" } }
                        </button>
                    </div>

                    <button class="join-button" onclick={on_join} disabled={email.is_empty()}>
                        {"→ Join the Revolution"}
                    </button>

                    {
                        if *joined {
                            html! { <p class="joined-note">{"You're on the list. We'll be in touch."}</p> }
                        } else {
                            html! {}
                        }
                    }

                    <p class="muted" style="font-size: 0.875rem; margin-top: 2rem;">
                        {"🛡️ No spam, ever. Be the first to know when we launch."}
                    </p>
                </div>
            </section>

            <footer class="site-footer">
                <div style="font-size: 1.5rem; font-weight: 700; margin-bottom: 1.5rem;">{"GeSIM"}</div>
                <p class="muted" style="font-size: 0.875rem;">
                    {"🌐 © 2025 GeSIM. Revolutionizing global connectivity with blockchain technology."}
                </p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partners_are_listed_in_order() {
        let names: Vec<&str> = PARTNERS.iter().map(|p| p.name).collect();
        assert_eq!(names, ["Airalo", "eSIM Access", "Telnyx"]);
        assert!(PARTNERS.iter().all(|p| !p.logo.is_empty()));
    }

    #[test]
    fn headline_figures() {
        let figures: Vec<(&str, &str)> = STATS.iter().map(|(_, f, l)| (*f, *l)).collect();
        assert_eq!(figures, [("150+", "Countries"), ("$90B+", "Valuation"), ("10M+", "Users")]);
        assert_eq!(FEATURES.len(), 3);
    }
}
