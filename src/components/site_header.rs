use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::theme::ThemeToggle;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub is_dark: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let scroll_callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > 80.0);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        padding: 1.5rem;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: var(--surface);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                    }
                    .header-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--text);
                        text-decoration: none;
                    }
                    .brand-mark {
                        width: 40px;
                        height: 40px;
                        border-radius: 12px;
                        background: linear-gradient(135deg, #1e293b, #0f172a);
                        color: white;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.9rem;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        font-size: 0.9rem;
                        font-weight: 500;
                    }
                    .nav-links a {
                        color: var(--text-muted);
                        text-decoration: none;
                    }
                    .nav-links a:hover {
                        color: var(--text);
                    }
                    .header-actions {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .waitlist-button {
                        background: var(--accent);
                        color: var(--accent-text);
                        padding: 0.5rem 1.5rem;
                        border-radius: 12px;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: var(--text);
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-links {
                            display: none;
                        }
                        .nav-links.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 80px;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: var(--surface-raised);
                        }
                    }
                "#}
            </style>
            <div class="header-content">
                <Link<Route> to={Route::Landing} classes="brand">
                    <span class="brand-mark">{"Ge"}</span>
                    {"GeSIM"}
                </Link<Route>>

                <nav class={menu_class}>
                    <a href="#features" onclick={close_menu.clone()}>{"⚡ Features"}</a>
                    <a href="#partners" onclick={close_menu.clone()}>{"🏢 Partners"}</a>
                    <a href="#app" onclick={close_menu.clone()}>{"📱 App"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::BuyData}>{"🌐 Buy Data"}</Link<Route>>
                    </div>
                </nav>

                <div class="header-actions">
                    <ThemeToggle is_dark={props.is_dark} on_toggle={props.on_toggle_theme.clone()} />
                    <a href="#waitlist" class="waitlist-button">{"✉️ Join Waitlist"}</a>
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
