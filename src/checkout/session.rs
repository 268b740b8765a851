use std::rc::Rc;

use log::{debug, info, warn};
use yew::functional::Reducible;

use crate::catalog::filter::filter_countries;
use crate::catalog::fixtures::sample_countries;
use crate::catalog::models::{Country, Plan, Region, SortKey};
use crate::checkout::deposit::{calculate_deposit, shortfall, suggested_mb_per_day, DepositCalculation};
use crate::checkout::gateway::{PaymentRequest, PurchaseMode, Settlement};
use crate::config::MOCK_WALLET_BALANCE_USDC;

const DEFAULT_DAYS: u32 = 14;
const DEFAULT_MB_PER_DAY: u32 = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct Wallet {
    pub connected: bool,
    pub balance_usdc: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TxPhase {
    Idle,
    /// Carries the id of the purchase being submitted.
    Pending(u64),
    Settled(Settlement),
    Failed(String),
}

pub enum BuyDataAction {
    ToggleTheme,
    SelectRegion(Region),
    SetQuery(String),
    CycleSort,
    SelectCountry(Country),
    SelectPlan(Plan),
    SetPurchaseMode(PurchaseMode),
    SetDays(u32),
    SetMbPerDay(u32),
    ConnectWallet,
    BeginPurchase,
    PurchaseSettled { id: u64, settlement: Settlement },
    PurchaseFailed { id: u64, message: String },
    DismissTransaction,
}

/// Everything the buy-data page knows about the current session.
#[derive(Clone, Debug, PartialEq)]
pub struct BuyDataState {
    pub catalog: Rc<Vec<Country>>,
    pub is_dark: bool,
    pub region: Region,
    pub query: String,
    pub sort: SortKey,
    pub selected_country: Option<Country>,
    pub selected_plan: Option<Plan>,
    pub purchase_mode: PurchaseMode,
    pub days: u32,
    pub mb_per_day: u32,
    pub wallet: Wallet,
    pub tx: TxPhase,
    last_purchase_id: u64,
}

impl Default for BuyDataState {
    fn default() -> Self {
        Self::with_catalog(sample_countries())
    }
}

impl BuyDataState {
    pub fn with_catalog(catalog: Vec<Country>) -> Self {
        Self {
            catalog: Rc::new(catalog),
            is_dark: true,
            region: Region::Global,
            query: String::new(),
            sort: SortKey::default(),
            selected_country: None,
            selected_plan: None,
            purchase_mode: PurchaseMode::default(),
            days: DEFAULT_DAYS,
            mb_per_day: DEFAULT_MB_PER_DAY,
            wallet: Wallet {
                connected: false,
                balance_usdc: MOCK_WALLET_BALANCE_USDC,
            },
            tx: TxPhase::Idle,
            last_purchase_id: 0,
        }
    }

    pub fn visible_countries(&self) -> Vec<Country> {
        filter_countries(&self.catalog, self.region, &self.query, self.sort)
    }

    pub fn deposit(&self) -> DepositCalculation {
        calculate_deposit(self.selected_plan.as_ref(), self.days, self.mb_per_day)
    }

    /// What the selected mode charges up front: the plan price or the deposit.
    pub fn purchase_target(&self) -> Option<f64> {
        let plan = self.selected_plan.as_ref()?;
        Some(match self.purchase_mode {
            PurchaseMode::Prepaid => plan.price_usdc,
            PurchaseMode::PayOnUsage => self.deposit().required_deposit,
        })
    }

    pub fn shortfall(&self) -> Option<f64> {
        shortfall(self.wallet.balance_usdc, self.purchase_target()?)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.tx, TxPhase::Pending(_))
    }

    pub fn pending_id(&self) -> Option<u64> {
        match self.tx {
            TxPhase::Pending(id) => Some(id),
            _ => None,
        }
    }

    /// The purchase waiting to be handed to the gateway, if any.
    pub fn pending_request(&self) -> Option<(u64, PaymentRequest)> {
        Some((self.pending_id()?, self.payment_request()?))
    }

    pub fn can_purchase(&self) -> bool {
        self.tx == TxPhase::Idle
            && self.wallet.connected
            && self.purchase_target().is_some()
            && self.shortfall().is_none()
    }

    pub fn payment_request(&self) -> Option<PaymentRequest> {
        let country = self.selected_country.as_ref()?;
        let plan = self.selected_plan.as_ref()?;
        Some(PaymentRequest {
            country_code: country.code.clone(),
            country_name: country.name.clone(),
            plan_id: plan.id.clone(),
            plan_name: plan.name.clone(),
            mode: self.purchase_mode,
            amount_usdc: self.purchase_target()?,
        })
    }
}

impl Reducible for BuyDataState {
    type Action = BuyDataAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BuyDataAction::ToggleTheme => next.is_dark = !next.is_dark,
            BuyDataAction::SelectRegion(region) => next.region = region,
            BuyDataAction::SetQuery(query) => next.query = query,
            BuyDataAction::CycleSort => next.sort = next.sort.next(),
            BuyDataAction::SelectCountry(country) => {
                debug!("Selected country {}", country.code);
                next.selected_country = Some(country);
                next.selected_plan = None;
            }
            BuyDataAction::SelectPlan(plan) => {
                next.mb_per_day = suggested_mb_per_day(&plan);
                next.selected_plan = Some(plan);
            }
            BuyDataAction::SetPurchaseMode(mode) => next.purchase_mode = mode,
            BuyDataAction::SetDays(days) => next.days = days,
            BuyDataAction::SetMbPerDay(mb) => next.mb_per_day = mb,
            BuyDataAction::ConnectWallet => {
                info!("Wallet connected");
                next.wallet.connected = true;
            }
            BuyDataAction::BeginPurchase => {
                if !self.can_purchase() {
                    warn!("Ignoring purchase request in state {:?}", self.tx);
                    return self;
                }
                next.last_purchase_id += 1;
                next.tx = TxPhase::Pending(next.last_purchase_id);
            }
            BuyDataAction::PurchaseSettled { id, settlement } => {
                if self.pending_id() != Some(id) {
                    debug!("Dropping settlement for purchase {}", id);
                    return self;
                }
                next.tx = TxPhase::Settled(settlement);
            }
            BuyDataAction::PurchaseFailed { id, message } => {
                if self.pending_id() != Some(id) {
                    debug!("Dropping failure for purchase {}", id);
                    return self;
                }
                next.tx = TxPhase::Failed(message);
            }
            BuyDataAction::DismissTransaction => {
                if self.is_pending() {
                    return self;
                }
                next.tx = TxPhase::Idle;
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::gateway::MockGateway;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn country(state: &BuyDataState, code: &str) -> Country {
        state.catalog.iter().find(|c| c.code == code).unwrap().clone()
    }

    fn ready_to_buy() -> Rc<BuyDataState> {
        let state = Rc::new(BuyDataState::default());
        let us = country(&state, "US");
        let business = us.plans[1].clone();
        state
            .reduce(BuyDataAction::SelectCountry(us))
            .reduce(BuyDataAction::SelectPlan(business))
            .reduce(BuyDataAction::ConnectWallet)
    }

    fn settlement(state: &BuyDataState) -> Settlement {
        MockGateway::new(0).settle(state.payment_request().unwrap(), &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn default_session() {
        let state = BuyDataState::default();
        assert!(state.is_dark);
        assert_eq!(state.region, Region::Global);
        assert_eq!(state.sort, SortKey::Popularity);
        assert_eq!((state.days, state.mb_per_day), (14, 50));
        assert!(!state.wallet.connected);
        assert_eq!(state.wallet.balance_usdc, 150.75);
        assert_eq!(state.tx, TxPhase::Idle);
        assert_eq!(state.visible_countries().len(), 6);
        assert_eq!(state.purchase_target(), None);
        assert!(!state.can_purchase());
    }

    #[test]
    fn picking_a_country_clears_the_plan() {
        let state = ready_to_buy();
        assert!(state.selected_plan.is_some());
        let jp = country(&state, "JP");
        let state = state.reduce(BuyDataAction::SelectCountry(jp));
        assert_eq!(state.selected_country.as_ref().unwrap().code, "JP");
        assert!(state.selected_plan.is_none());
    }

    #[test]
    fn picking_a_plan_suggests_daily_usage() {
        let state = ready_to_buy();
        assert_eq!(state.mb_per_day, 171);
        let calc = state.deposit();
        assert_eq!(calc.total_mb, 14 * 171);
    }

    #[test]
    fn filters_flow_through_the_reducer() {
        let state = Rc::new(BuyDataState::default())
            .reduce(BuyDataAction::SelectRegion(Region::Europe))
            .reduce(BuyDataAction::CycleSort);
        assert_eq!(state.sort, SortKey::Price);
        let codes: Vec<String> = state.visible_countries().into_iter().map(|c| c.code).collect();
        assert_eq!(codes, ["GB", "DE"]);

        let state = state.reduce(BuyDataAction::SetQuery("telekom".to_string()));
        assert_eq!(state.visible_countries().len(), 1);
    }

    #[test]
    fn target_follows_purchase_mode() {
        let state = ready_to_buy().reduce(BuyDataAction::SetMbPerDay(50));
        assert_eq!(state.purchase_target(), Some(24.99));
        let state = state.reduce(BuyDataAction::SetPurchaseMode(PurchaseMode::PayOnUsage));
        let deposit = state.purchase_target().unwrap();
        assert!((deposit - 4.0353).abs() < 1e-4);
        assert_eq!(state.payment_request().unwrap().mode, PurchaseMode::PayOnUsage);
    }

    #[test]
    fn short_balance_blocks_purchase() {
        let mut short = (*ready_to_buy()).clone();
        short.wallet.balance_usdc = 10.0;
        let state = Rc::new(short);
        assert_eq!(format!("{:.2}", state.shortfall().unwrap()), "14.99");
        assert!(!state.can_purchase());

        let after = state.clone().reduce(BuyDataAction::BeginPurchase);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn purchase_runs_idle_pending_settled() {
        let state = ready_to_buy();
        assert!(state.can_purchase());
        let pending = state.reduce(BuyDataAction::BeginPurchase);
        assert_eq!(pending.tx, TxPhase::Pending(1));
        assert!(!pending.can_purchase());

        let again = pending.clone().reduce(BuyDataAction::BeginPurchase);
        assert!(Rc::ptr_eq(&pending, &again));

        let receipt = settlement(&pending);
        let settled = pending.reduce(BuyDataAction::PurchaseSettled { id: 1, settlement: receipt.clone() });
        assert_eq!(settled.tx, TxPhase::Settled(receipt));

        let idle = settled.reduce(BuyDataAction::DismissTransaction);
        assert_eq!(idle.tx, TxPhase::Idle);
        assert!(idle.can_purchase());
    }

    #[test]
    fn each_accepted_purchase_is_submitted_once() {
        let state = ready_to_buy();
        assert_eq!(state.pending_request(), None);

        let first = state.reduce(BuyDataAction::BeginPurchase);
        let (id, request) = first.pending_request().unwrap();
        assert_eq!(id, 1);
        assert_eq!(request.plan_id, "us-business-5gb");

        // A repeated click while pending keeps the same purchase id.
        let repeat = first.clone().reduce(BuyDataAction::BeginPurchase);
        assert_eq!(repeat.pending_id(), Some(1));

        let second = first
            .reduce(BuyDataAction::PurchaseFailed { id: 1, message: "HTTP 502".to_string() })
            .reduce(BuyDataAction::DismissTransaction)
            .reduce(BuyDataAction::BeginPurchase);
        assert_eq!(second.pending_id(), Some(2));

        let receipt = settlement(&second);
        let stale = second.clone().reduce(BuyDataAction::PurchaseSettled { id: 1, settlement: receipt });
        assert!(Rc::ptr_eq(&second, &stale));
    }

    #[test]
    fn stray_results_are_ignored() {
        let state = ready_to_buy();
        let receipt = settlement(&state);
        let after = state.clone().reduce(BuyDataAction::PurchaseSettled { id: 1, settlement: receipt });
        assert!(Rc::ptr_eq(&state, &after));
        let after = state.clone().reduce(BuyDataAction::PurchaseFailed { id: 1, message: "late".to_string() });
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn pending_cannot_be_dismissed_but_failures_can() {
        let pending = ready_to_buy().reduce(BuyDataAction::BeginPurchase);
        let still = pending.clone().reduce(BuyDataAction::DismissTransaction);
        assert!(still.is_pending());

        let failed = pending.reduce(BuyDataAction::PurchaseFailed { id: 1, message: "HTTP 502".to_string() });
        assert_eq!(failed.tx, TxPhase::Failed("HTTP 502".to_string()));
        assert_eq!(failed.reduce(BuyDataAction::DismissTransaction).tx, TxPhase::Idle);
    }
}
