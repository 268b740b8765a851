use log::warn;
use stylist::css;
use stylist::yew::Global;
use web_sys::window;
use yew::prelude::*;

/// Colours shared by every page, exposed to CSS as custom properties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_raised: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
}

impl Palette {
    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            Palette {
                background: "#020617",
                surface: "rgba(30, 41, 59, 0.5)",
                surface_raised: "#334155",
                border: "#334155",
                text: "#ffffff",
                text_muted: "#94a3b8",
                accent: "#1e293b",
                accent_text: "#ffffff",
            }
        } else {
            Palette {
                background: "linear-gradient(135deg, #f8fafc, #ffffff, #f1f5f9)",
                surface: "rgba(255, 255, 255, 0.7)",
                surface_raised: "#f1f5f9",
                border: "#e2e8f0",
                text: "#0f172a",
                text_muted: "#475569",
                accent: "#0f172a",
                accent_text: "#ffffff",
            }
        }
    }
}

fn mirror_dark_class(is_dark: bool) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Err(e) = root.class_list().toggle_with_force("dark", is_dark) {
            warn!("Could not set dark class: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProps {
    pub is_dark: bool,
}

#[function_component(ThemeStyles)]
pub fn theme_styles(props: &ThemeProps) -> Html {
    let is_dark = props.is_dark;

    use_effect_with_deps(
        move |is_dark| {
            mirror_dark_class(*is_dark);
            || ()
        },
        is_dark,
    );

    let palette = Palette::for_theme(is_dark);

    html! {
        <Global css={css!(
            r#"
                :root {
                    --background: ${background};
                    --surface: ${surface};
                    --surface-raised: ${surface_raised};
                    --border: ${border};
                    --text: ${text};
                    --text-muted: ${text_muted};
                    --accent: ${accent};
                    --accent-text: ${accent_text};
                }
                body {
                    margin: 0;
                    min-height: 100vh;
                    background: var(--background);
                    color: var(--text);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    transition: background 0.7s ease, color 0.7s ease;
                }
                button {
                    font-family: inherit;
                    cursor: pointer;
                }
                .theme-toggle {
                    background: none;
                    border: none;
                    font-size: 1.2rem;
                    padding: 0.5rem;
                    border-radius: 12px;
                }
                button:disabled {
                    cursor: not-allowed;
                    opacity: 0.5;
                }
            "#,
            background = palette.background,
            surface = palette.surface,
            surface_raised = palette.surface_raised,
            border = palette.border,
            text = palette.text,
            text_muted = palette.text_muted,
            accent = palette.accent,
            accent_text = palette.accent_text,
        )} />
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub is_dark: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button class="theme-toggle" {onclick} title="Toggle theme">
            { if props.is_dark { "☀️" } else { "🌙" } }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_differ_in_text_and_background() {
        let dark = Palette::for_theme(true);
        let light = Palette::for_theme(false);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text, light.text);
        assert_eq!(dark.accent_text, light.accent_text);
    }
}
