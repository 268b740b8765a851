use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::catalog::models::{Country, Region};
use crate::checkout::session::{BuyDataAction, BuyDataState};

const PROVIDER_ICONS_SHOWN: usize = 3;

#[derive(Properties, PartialEq)]
pub struct CountryBrowserProps {
    pub state: UseReducerHandle<BuyDataState>,
}

#[derive(Properties, PartialEq)]
struct CountryCardProps {
    country: Country,
    selected: bool,
    on_select: Callback<Country>,
}

#[function_component(CountryCard)]
fn country_card(props: &CountryCardProps) -> Html {
    let country = &props.country;
    let onclick = {
        let on_select = props.on_select.clone();
        let country = country.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(country.clone()))
    };

    let (shown, hidden) = country.provider_preview(PROVIDER_ICONS_SHOWN);
    let reliability = country
        .best_reliability()
        .map(|r| format!("{}%", r))
        .unwrap_or_else(|| "–".to_string());
    let latency = country
        .lowest_latency()
        .map(|l| format!("{}ms", l))
        .unwrap_or_else(|| "–".to_string());

    html! {
        <div class={classes!("country-card", props.selected.then(|| "selected"))} {onclick}>
            <div class="country-card-top">
                <div class="country-title">
                    <span class="flag">{&country.flag}</span>
                    <div>
                        <h3>{&country.name}</h3>
                        <p class="muted">{format!("From {} USDC / 1 GB", country.starting_price)}</p>
                    </div>
                </div>
                <span class="badge">{format!("{}% popular", country.popularity)}</span>
            </div>

            <div class="provider-icons">
                { for shown.iter().map(|provider| html! {
                    <div class="provider-icon" key={provider.id.clone()} title={provider.name.clone()}>
                        {&provider.logo}
                    </div>
                }) }
                {
                    if hidden > 0 {
                        html! { <span class="muted small">{format!("+{} more", hidden)}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="quick-stats">
                <div class="stats-left">
                    <span class="stat"><span class="signal">{"📶"}</span>{reliability}</span>
                    <span class="stat"><span class="speed">{"⚡"}</span>{latency}</span>
                </div>
                <div class="tags">
                    { for country.best_for.iter().map(|tag| html! {
                        <span class="badge small" key={tag.clone()}>{tag}</span>
                    }) }
                </div>
            </div>

            <button class={classes!("view-plans", props.selected.then(|| "active"))}>
                {"View Plans"}
            </button>
        </div>
    }
}

#[function_component(CountryBrowser)]
pub fn country_browser(props: &CountryBrowserProps) -> Html {
    let state = props.state.clone();
    let visible = state.visible_countries();

    let on_search = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(BuyDataAction::SetQuery(input.value()));
        })
    };

    let on_sort = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(BuyDataAction::CycleSort))
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |country: Country| state.dispatch(BuyDataAction::SelectCountry(country)))
    };

    let selected_code = state.selected_country.as_ref().map(|c| c.code.clone());

    html! {
        <div class="country-browser">
            <div class="region-chips">
                { for Region::ALL.iter().map(|&region| {
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| state.dispatch(BuyDataAction::SelectRegion(region)))
                    };
                    html! {
                        <button
                            key={region.id()}
                            class={classes!("chip", (state.region == region).then(|| "active"))}
                            {onclick}
                        >
                            <span class="chip-icon">{region.icon()}</span>
                            {region.display_name()}
                        </button>
                    }
                }) }
            </div>

            <div class="search-row">
                <input
                    class="search-input"
                    placeholder="🔍 Find country or carrier"
                    value={state.query.clone()}
                    oninput={on_search}
                />
                <button class="sort-button" onclick={on_sort}>
                    {format!("⇅ {}", state.sort.label())}
                </button>
            </div>

            <div class="country-grid">
                { for visible.iter().map(|country| html! {
                    <CountryCard
                        key={country.code.clone()}
                        country={country.clone()}
                        selected={selected_code.as_deref() == Some(country.code.as_str())}
                        on_select={on_select.clone()}
                    />
                }) }
            </div>

            {
                if visible.is_empty() {
                    html! {
                        <div class="empty-state">
                            <div class="empty-icon">{"🌐"}</div>
                            <h3>{"No countries found"}</h3>
                            <p class="muted">{"Try adjusting your search or region filter"}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <p class="hint">{"Tap a country to explore plans. Select region to compare."}</p>
        </div>
    }
}
