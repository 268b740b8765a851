use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::catalog::models::{Country, Plan};
use crate::checkout::deposit::{format_usdc, parse_days, parse_mb_per_day, MAX_DAYS, MAX_MB_PER_DAY, MIN_DAYS, MIN_MB_PER_DAY};
use crate::checkout::gateway::PurchaseMode;
use crate::checkout::session::{BuyDataAction, BuyDataState};
use crate::components::deposit_chart::DepositChart;

#[derive(Properties, PartialEq)]
pub struct PurchasePanelProps {
    pub state: UseReducerHandle<BuyDataState>,
}

fn render_plan(plan: &Plan, selected: bool, on_select: Callback<Plan>) -> Html {
    let onclick = {
        let plan = plan.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(plan.clone()))
    };

    html! {
        <div key={plan.id.clone()} class={classes!("plan-option", selected.then(|| "selected"))} {onclick}>
            <div class="plan-head">
                <h4>{&plan.name}</h4>
                <div class="plan-price">
                    <div class="price">{format!("{} USDC", plan.price_usdc)}</div>
                    <div class="muted small">{format!("{} days", plan.validity_days)}</div>
                </div>
            </div>
            <ul class="plan-features">
                { for plan.features.iter().take(3).map(|feature| html! {
                    <li>{"✅ "}{feature}</li>
                }) }
            </ul>
            <button class={classes!("choose", selected.then(|| "active"))}>{"Choose"}</button>
        </div>
    }
}

fn render_country_header(country: &Country) -> Html {
    html! {
        <div class="panel-header">
            <span class="flag">{&country.flag}</span>
            <div>
                <h2>{&country.name}</h2>
                <div class="provider-badges">
                    { for country.providers.iter().map(|provider| html! {
                        <span class="badge small" key={provider.id.clone()}>
                            {format!("{} {}", provider.logo, provider.name)}
                        </span>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(PurchasePanel)]
pub fn purchase_panel(props: &PurchasePanelProps) -> Html {
    let state = props.state.clone();

    let on_connect = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(BuyDataAction::ConnectWallet))
    };

    let on_purchase = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            if state.can_purchase() {
                state.dispatch(BuyDataAction::BeginPurchase);
            }
        })
    };

    let Some(country) = state.selected_country.clone() else {
        return html! {
            <div class="panel-card placeholder">
                <div class="empty-icon">{"📍"}</div>
                <h3>{"Select a country"}</h3>
                <p class="muted">{"Choose a country from the left to view available plans"}</p>
            </div>
        };
    };

    let on_select_plan = {
        let state = state.clone();
        Callback::from(move |plan: Plan| state.dispatch(BuyDataAction::SelectPlan(plan)))
    };
    let selected_id = state.selected_plan.as_ref().map(|p| p.id.clone());

    let wallet_block = |purchase_label: &str| -> Html {
        if !state.wallet.connected {
            return html! {
                <button class="primary full" onclick={on_connect.clone()}>{"👛 Connect Wallet"}</button>
            };
        }
        let shortfall = state.shortfall();
        html! {
            <div class="wallet-block">
                <div class="balance-row">
                    <span class="muted">{"Wallet Balance:"}</span>
                    <span class="strong">{format!("{} USDC", state.wallet.balance_usdc)}</span>
                </div>
                <button
                    class="primary full"
                    onclick={on_purchase.clone()}
                    disabled={shortfall.is_some() || state.is_pending()}
                >
                    {purchase_label.to_string()}
                </button>
                {
                    if let Some(missing) = shortfall {
                        html! {
                            <p class="error-text">
                                {format!("Insufficient balance. Need {:.2} more USDC", missing)}
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    };

    let purchase_options = match state.selected_plan.as_ref() {
        None => html! {},
        Some(plan) => {
            let tab = |mode: PurchaseMode, label: &'static str| {
                let state = state.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    state.dispatch(BuyDataAction::SetPurchaseMode(mode))
                });
                html! {
                    <button class={classes!("tab", (props.state.purchase_mode == mode).then(|| "active"))} {onclick}>
                        {label}
                    </button>
                }
            };

            let body = match state.purchase_mode {
                PurchaseMode::Prepaid => html! {
                    <div class="tab-body">
                        <div class="prepaid-summary">
                            <h3>{"Prepaid. One payment. Zero surprises."}</h3>
                            <div class="big-price">{format!("{} USDC", plan.price_usdc)}</div>
                            <p class="muted small">
                                {format!("{}GB • {} days • Instant activation", plan.gb, plan.validity_days)}
                            </p>
                        </div>
                        { wallet_block("💲 Buy Prepaid (USDC)") }
                    </div>
                },
                PurchaseMode::PayOnUsage => {
                    let calc = state.deposit();
                    let on_days = {
                        let state = state.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            state.dispatch(BuyDataAction::SetDays(parse_days(&input.value())));
                        })
                    };
                    let on_mb = {
                        let state = state.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            state.dispatch(BuyDataAction::SetMbPerDay(parse_mb_per_day(&input.value())));
                        })
                    };
                    html! {
                        <div class="tab-body">
                            <h3 class="centered">{"Pay only for what you use. With a safety buffer."}</h3>

                            <label class="field-label">{"Days active"}</label>
                            <input
                                type="range"
                                class="full"
                                min={MIN_DAYS.to_string()}
                                max={MAX_DAYS.to_string()}
                                value={state.days.to_string()}
                                oninput={on_days}
                            />
                            <div class="range-labels">
                                <span>{"1 day"}</span>
                                <span class="strong">{format!("{} days", state.days)}</span>
                                <span>{"90 days"}</span>
                            </div>

                            <label class="field-label">{"Est. MB / day"}</label>
                            <input
                                type="number"
                                class="number-input"
                                min={MIN_MB_PER_DAY.to_string()}
                                max={MAX_MB_PER_DAY.to_string()}
                                value={state.mb_per_day.to_string()}
                                oninput={on_mb}
                            />

                            <div class="breakdown">
                                <h4>{"Deposit required"}</h4>
                                <div class="breakdown-row">
                                    <span class="muted">{"Days:"}</span>
                                    <span>{calc.days}</span>
                                </div>
                                <div class="breakdown-row">
                                    <span class="muted">{"Expected usage:"}</span>
                                    <span>{format!("{} MB/day → {} MB total", calc.mb_per_day, calc.total_mb)}</span>
                                </div>
                                <div class="breakdown-row">
                                    <span class="muted">{"Price per MB:"}</span>
                                    <span>{format!("{:.4} USDC", calc.price_per_mb)}</span>
                                </div>
                                <div class="breakdown-row">
                                    <span class="muted">{"Raw cost:"}</span>
                                    <span>{format_usdc(calc.raw_cost)}</span>
                                </div>
                                <div class="breakdown-row total">
                                    <span>{"Required deposit (85% consumption buffer):"}</span>
                                    <span class="accent">{format_usdc(calc.required_deposit)}</span>
                                </div>
                                <p class="muted small">
                                    {"We require a 15% buffer. Only 85% of your deposit will be used for billing. Unused funds are refunded on-chain after the billing cycle."}
                                </p>
                            </div>

                            <DepositChart calculation={calc.clone()} />

                            { wallet_block("🔒 Deposit & Activate") }
                        </div>
                    }
                }
            };

            html! {
                <div class="purchase-options">
                    <div class="tabs">
                        { tab(PurchaseMode::Prepaid, "Prepaid") }
                        { tab(PurchaseMode::PayOnUsage, "Pay-on-Usage") }
                    </div>
                    { body }
                </div>
            }
        }
    };

    html! {
        <div class="panel-card">
            { render_country_header(&country) }
            <div class="plan-list">
                { for country.plans.iter().map(|plan| {
                    render_plan(plan, selected_id.as_deref() == Some(plan.id.as_str()), on_select_plan.clone())
                }) }
            </div>
            { purchase_options }
        </div>
    }
}
