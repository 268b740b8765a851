use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::checkout::gateway::GatewayHandle;
use crate::checkout::session::{BuyDataAction, BuyDataState};
use crate::components::theme::{ThemeStyles, ThemeToggle};
use crate::storefront::country_browser::CountryBrowser;
use crate::storefront::purchase_panel::PurchasePanel;
use crate::storefront::transaction_dialogs::TransactionDialogs;
use crate::Route;

const BUY_DATA_CSS: &str = r#"
    .buy-page {
        min-height: 100vh;
    }
    .buy-header {
        position: sticky;
        top: 0;
        z-index: 40;
        border-bottom: 1px solid var(--border);
        background: var(--surface);
        backdrop-filter: blur(8px);
    }
    .buy-header-inner, .buy-layout {
        max-width: 1280px;
        margin: 0 auto;
        padding: 1rem 1.5rem;
    }
    .breadcrumbs {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.875rem;
        color: var(--text-muted);
    }
    .breadcrumbs a {
        color: var(--text-muted);
        text-decoration: none;
    }
    .breadcrumbs .current {
        color: var(--text);
        font-weight: 500;
    }
    .buy-header h1 {
        font-size: 1.875rem;
        margin: 0.5rem 0 0;
    }
    .buy-layout {
        display: grid;
        grid-template-columns: 3fr 2fr;
        gap: 2rem;
        padding-top: 2rem;
    }
    @media (max-width: 1100px) {
        .buy-layout {
            grid-template-columns: 1fr;
        }
    }
    .muted { color: var(--text-muted); }
    .small { font-size: 0.75rem; }
    .strong { font-weight: 600; }
    .centered { text-align: center; }
    .full { width: 100%; }
    .flex-1 { flex: 1; }
    .accent { color: #3b82f6; font-weight: 600; }
    .error-text { color: #ef4444; font-size: 0.875rem; text-align: center; }
    .badge {
        border: 1px solid var(--border);
        border-radius: 999px;
        padding: 0.1rem 0.5rem;
        font-size: 0.75rem;
        white-space: nowrap;
    }
    .region-chips {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .chip {
        border: 1px solid var(--border);
        background: transparent;
        color: var(--text-muted);
        border-radius: 999px;
        padding: 0.35rem 0.9rem;
    }
    .chip.active {
        background: #2563eb;
        border-color: #2563eb;
        color: white;
    }
    .chip-icon { margin-right: 0.5rem; }
    .search-row {
        display: flex;
        gap: 1rem;
        margin: 1.5rem 0;
    }
    .search-input, .number-input {
        flex: 1;
        padding: 0.6rem 1rem;
        border-radius: 10px;
        border: 1px solid var(--border);
        background: var(--surface);
        color: var(--text);
    }
    .number-input { width: 100%; text-align: center; box-sizing: border-box; }
    .sort-button, .outline {
        border: 1px solid var(--border);
        background: transparent;
        color: var(--text);
        border-radius: 10px;
        padding: 0.5rem 1rem;
        text-decoration: none;
        text-align: center;
    }
    .country-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
        gap: 1rem;
    }
    .country-card, .panel-card, .plan-option {
        border: 1px solid var(--border);
        background: var(--surface);
        border-radius: 14px;
        padding: 1rem;
        cursor: pointer;
        transition: transform 0.2s ease, box-shadow 0.2s ease;
    }
    .country-card:hover { transform: scale(1.02); box-shadow: 0 8px 20px rgba(0, 0, 0, 0.15); }
    .country-card.selected, .plan-option.selected {
        border-color: #1d4ed8;
        background: rgba(37, 99, 235, 0.12);
    }
    .country-card-top, .plan-head, .quick-stats, .breakdown-row, .balance-row {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        gap: 0.75rem;
    }
    .country-title, .panel-header {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .country-title h3, .panel-header h2, .plan-head h4 { margin: 0; }
    .country-title p { margin: 0.2rem 0 0; font-size: 0.875rem; }
    .flag { font-size: 1.6rem; }
    .provider-icons { display: flex; gap: 0.5rem; align-items: center; margin: 0.75rem 0; }
    .provider-icon {
        width: 24px;
        height: 24px;
        border-radius: 50%;
        background: var(--surface-raised);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 0.75rem;
    }
    .quick-stats { font-size: 0.75rem; color: var(--text-muted); }
    .stats-left, .tags { display: flex; gap: 0.75rem; }
    .tags { gap: 0.25rem; }
    .view-plans, .choose, .tab {
        width: 100%;
        margin-top: 0.75rem;
        padding: 0.45rem;
        border-radius: 10px;
        border: 1px solid var(--border);
        background: transparent;
        color: var(--text);
    }
    .view-plans.active, .choose.active, .tab.active, .primary {
        background: var(--accent);
        color: var(--accent-text);
        border: 1px solid var(--accent);
    }
    .primary {
        padding: 0.65rem 1rem;
        border-radius: 10px;
        font-weight: 600;
    }
    .empty-state, .placeholder { text-align: center; padding: 3rem 1rem; }
    .empty-icon { font-size: 3rem; margin-bottom: 1rem; }
    .hint { text-align: center; font-size: 0.875rem; color: var(--text-muted); }
    .purchase-column { position: sticky; top: 7rem; align-self: start; }
    .provider-badges { display: flex; gap: 0.5rem; margin-top: 0.25rem; }
    .plan-list { display: flex; flex-direction: column; gap: 0.75rem; margin-top: 1rem; }
    .plan-price { text-align: right; }
    .price { font-weight: 700; }
    .plan-features { list-style: none; padding: 0; margin: 0.5rem 0 0; font-size: 0.75rem; color: var(--text-muted); }
    .purchase-options { margin-top: 1rem; padding-top: 1rem; border-top: 1px solid var(--border); }
    .tabs { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; }
    .tabs .tab { margin-top: 0; }
    .tab-body { display: flex; flex-direction: column; gap: 0.9rem; margin-top: 1rem; }
    .prepaid-summary { text-align: center; padding: 1rem 0; }
    .big-price { font-size: 1.5rem; font-weight: 700; }
    .field-label { font-size: 0.875rem; font-weight: 500; }
    .range-labels { display: flex; justify-content: space-between; font-size: 0.75rem; color: var(--text-muted); }
    .breakdown, .wallet-block .balance-row, .modal-box {
        background: var(--surface-raised);
        border-radius: 12px;
        padding: 1rem;
    }
    .breakdown h4 { margin: 0 0 0.75rem; }
    .breakdown-row { font-size: 0.875rem; margin-bottom: 0.5rem; }
    .breakdown-row.total { border-top: 1px solid var(--border); padding-top: 0.5rem; font-weight: 600; }
    .wallet-block { display: flex; flex-direction: column; gap: 0.75rem; }
    .modal-backdrop {
        position: fixed;
        inset: 0;
        z-index: 100;
        background: rgba(2, 6, 23, 0.7);
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .modal {
        position: relative;
        width: min(28rem, 92vw);
        max-height: 92vh;
        overflow-y: auto;
        background: var(--surface-raised);
        border: 1px solid var(--border);
        border-radius: 16px;
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .modal h2 { margin: 0; font-size: 1.25rem; }
    .modal-close { position: absolute; top: 1rem; right: 1rem; background: none; border: none; color: var(--text-muted); }
    .modal-actions { display: flex; gap: 0.5rem; }
    .spinner {
        width: 32px;
        height: 32px;
        margin: 0 auto 1rem;
        border: 3px solid rgba(59, 130, 246, 0.3);
        border-top-color: #3b82f6;
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    .success-icon { font-size: 3.5rem; }
    .qr-placeholder { font-size: 3rem; color: var(--text-muted); }
    .hash { display: flex; align-items: center; gap: 0.5rem; }
    .ghost { background: none; border: none; padding: 0; }
    .hash-source { position: absolute; left: -9999px; width: 1px; opacity: 0; }
"#;

#[function_component(BuyData)]
pub fn buy_data() -> Html {
    let state = use_reducer(BuyDataState::default);
    let gateway = use_context::<GatewayHandle>();

    // Submits once per accepted purchase, keyed on the pending purchase id.
    {
        let state = state.clone();
        let pending_id = state.pending_id();
        use_effect_with_deps(
            move |pending_id| {
                if pending_id.is_some() {
                    match (state.pending_request(), gateway) {
                        (Some((id, request)), Some(GatewayHandle(gateway))) => {
                            info!(
                                "Submitting purchase {} of {} for {:.2} USDC via {}",
                                id,
                                request.plan_id,
                                request.amount_usdc,
                                gateway.name()
                            );
                            let dispatcher = state.dispatcher();
                            spawn_local(async move {
                                match gateway.submit(request).await {
                                    Ok(settlement) => {
                                        dispatcher.dispatch(BuyDataAction::PurchaseSettled { id, settlement })
                                    }
                                    Err(e) => {
                                        error!("Purchase {} failed: {}", id, e);
                                        dispatcher.dispatch(BuyDataAction::PurchaseFailed {
                                            id,
                                            message: e.to_string(),
                                        });
                                    }
                                }
                            });
                        }
                        (_, None) => error!("No payment gateway available"),
                        (None, _) => error!("Pending purchase has no plan selected"),
                    }
                }
                || ()
            },
            pending_id,
        );
    }

    let on_toggle_theme = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(BuyDataAction::ToggleTheme))
    };

    html! {
        <div class="buy-page">
            <ThemeStyles is_dark={state.is_dark} />
            <style>{BUY_DATA_CSS}</style>

            <div class="buy-header">
                <div class="buy-header-inner">
                    <div class="breadcrumbs">
                        <Link<Route> to={Route::Landing}>{"Home"}</Link<Route>>
                        <span>{"→"}</span>
                        <span>{"App"}</span>
                        <span>{"→"}</span>
                        <span class="current">{"Buy Data"}</span>
                        <span style="margin-left: auto;">
                            <ThemeToggle is_dark={state.is_dark} on_toggle={on_toggle_theme} />
                        </span>
                    </div>
                    <h1>{"Buy Data — Simple. Predictable. Global."}</h1>
                </div>
            </div>

            <div class="buy-layout">
                <CountryBrowser state={state.clone()} />
                <div class="purchase-column">
                    <PurchasePanel state={state.clone()} />
                </div>
            </div>

            <TransactionDialogs state={state.clone()} />
        </div>
    }
}
