use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlInputElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::checkout::gateway::{PurchaseMode, Settlement};
use crate::checkout::session::{BuyDataAction, BuyDataState, TxPhase};

#[derive(Properties, PartialEq)]
pub struct TransactionDialogsProps {
    pub state: UseReducerHandle<BuyDataState>,
}

fn amount_label(settlement: &Settlement) -> String {
    match settlement.request.mode {
        PurchaseMode::Prepaid => format!("{} USDC", settlement.request.amount_usdc),
        PurchaseMode::PayOnUsage => format!("{:.2} USDC", settlement.request.amount_usdc),
    }
}

const COPIED_RESET_MS: u32 = 2_000;

/// Selects the hash field and asks the document to copy it.
fn copy_from(input: &HtmlInputElement) -> bool {
    input.select();
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false)
}

fn pending_dialog() -> Html {
    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{"Authorize capped withdrawal"}</h2>
                <p class="muted">
                    {"You approve a capped withdrawal for postpaid usage. Withdrawals only occur after invoice confirmation and dispute window."}
                </p>
                <div class="modal-box centered">
                    <div class="spinner"></div>
                    <p class="strong">{"Processing transaction..."}</p>
                    <p class="muted small">{"Please confirm in your wallet"}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ReceiptProps {
    settlement: Settlement,
    on_close: Callback<MouseEvent>,
}

#[function_component(ReceiptDialog)]
fn receipt_dialog(props: &ReceiptProps) -> Html {
    let hash_ref = use_node_ref();
    let copied = use_state(|| false);
    let settlement = &props.settlement;

    let reset_copied = {
        let copied = copied.clone();
        use_timeout(move || copied.set(false), COPIED_RESET_MS)
    };

    let on_copy = {
        let copied = copied.clone();
        let hash_ref = hash_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(input) = hash_ref.cast::<HtmlInputElement>() else {
                return;
            };
            if copy_from(&input) {
                copied.set(true);
                reset_copied.reset();
            } else {
                warn!("Clipboard copy was refused");
            }
        })
    };

    let download = match settlement.download_href() {
        Ok(href) => html! {
            <a class="outline flex-1" href={href} download={format!("gesim-receipt-{}.json", settlement.short_hash())}>
                {"⬇️ Download receipt"}
            </a>
        },
        Err(e) => {
            warn!("Could not serialize receipt: {}", e);
            html! {}
        }
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <button class="modal-close" onclick={props.on_close.clone()}>{"✕"}</button>
                <h2>{"Purchase Complete"}</h2>
                <p class="muted">{"Your eSIM plan has been activated successfully"}</p>

                <div class="centered">
                    <div class="success-icon">{"✅"}</div>
                    <h3>{"Activation Successful"}</h3>
                </div>

                <div class="modal-box">
                    <div class="breakdown-row">
                        <span class="muted">{"Plan:"}</span>
                        <span>{&settlement.request.plan_name}</span>
                    </div>
                    <div class="breakdown-row">
                        <span class="muted">{"Country:"}</span>
                        <span>{&settlement.request.country_name}</span>
                    </div>
                    <div class="breakdown-row">
                        <span class="muted">{"Amount:"}</span>
                        <span>{amount_label(settlement)}</span>
                    </div>
                    <div class="breakdown-row">
                        <span class="muted">{"Transaction:"}</span>
                        <span class="hash">
                            <code>{settlement.short_hash()}</code>
                            <input
                                ref={hash_ref}
                                class="hash-source"
                                readonly=true
                                value={settlement.tx_hash.clone()}
                            />
                            <button class="ghost" onclick={on_copy} title="Copy transaction hash">
                                { if *copied { "✔️" } else { "📋" } }
                            </button>
                        </span>
                    </div>
                    <div class="breakdown-row">
                        <span class="muted">{"Settled:"}</span>
                        <span>{settlement.settled_at.format("%B %d, %Y %H:%M UTC").to_string()}</span>
                    </div>
                </div>

                <div class="modal-actions">
                    { download }
                    <a class="outline flex-1" href={settlement.explorer_url()} target="_blank" rel="noopener noreferrer">
                        {"↗️ View on Explorer"}
                    </a>
                </div>

                <div class="centered">
                    <div class="qr-placeholder">{"▦"}</div>
                    <p class="muted small">{"Scan QR code to activate on your device"}</p>
                </div>

                <p class="muted small centered">
                    {"By depositing, you authorize capped on-chain withdrawal for billed usage. Dispute window: 24–48 hrs. Unused funds returned."}
                </p>
            </div>
        </div>
    }
}

fn failure_dialog(message: &str, on_close: Callback<MouseEvent>) -> Html {
    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{"Transaction failed"}</h2>
                <p class="error-text">{message}</p>
                <p class="muted small">{"Nothing was withdrawn from your wallet."}</p>
                <button class="primary full" onclick={on_close}>{"Close"}</button>
            </div>
        </div>
    }
}

#[function_component(TransactionDialogs)]
pub fn transaction_dialogs(props: &TransactionDialogsProps) -> Html {
    let on_close = {
        let state = props.state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(BuyDataAction::DismissTransaction))
    };

    match &props.state.tx {
        TxPhase::Idle => html! {},
        TxPhase::Pending(_) => pending_dialog(),
        TxPhase::Settled(settlement) => html! {
            <ReceiptDialog settlement={settlement.clone()} {on_close} />
        },
        TxPhase::Failed(message) => failure_dialog(message, on_close),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::gateway::{MockGateway, PaymentRequest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settlement(mode: PurchaseMode, amount_usdc: f64) -> Settlement {
        let request = PaymentRequest {
            country_code: "GB".to_string(),
            country_name: "United Kingdom".to_string(),
            plan_id: "uk-tourist-2gb".to_string(),
            plan_name: "14-day Tourist — 2GB".to_string(),
            mode,
            amount_usdc,
        };
        MockGateway::new(0).settle(request, &mut StdRng::seed_from_u64(9))
    }

    #[test]
    fn receipt_amount_depends_on_mode() {
        assert_eq!(amount_label(&settlement(PurchaseMode::Prepaid, 12.0)), "12 USDC");
        assert_eq!(amount_label(&settlement(PurchaseMode::PayOnUsage, 4.0353)), "4.04 USDC");
    }
}
