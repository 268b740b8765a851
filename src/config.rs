use std::rc::Rc;

use crate::checkout::gateway::PaymentGateway;

#[cfg(debug_assertions)]
#[cfg_attr(not(feature = "live-settlement"), allow(dead_code))]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
#[cfg_attr(not(feature = "live-settlement"), allow(dead_code))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const EXPLORER_URL: &str = "https://basescan.org";

/// Balance the mock wallet reports once connected.
pub const MOCK_WALLET_BALANCE_USDC: f64 = 150.75;

pub const CONFIRMATION_DELAY_MS: u32 = 3_000;

/// Share of a pay-on-usage deposit that may be billed; the rest is refunded.
pub const CONSUMPTION_RATE: f64 = 0.85;

#[cfg(not(feature = "live-settlement"))]
pub fn payment_gateway() -> Rc<dyn PaymentGateway> {
    Rc::new(crate::checkout::gateway::MockGateway::new(CONFIRMATION_DELAY_MS))
}

#[cfg(feature = "live-settlement")]
pub fn payment_gateway() -> Rc<dyn PaymentGateway> {
    Rc::new(crate::checkout::gateway::RealGateway::new(get_backend_url()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_endpoint_joins_cleanly() {
        assert!(!get_backend_url().ends_with('/'));
        assert!(CONSUMPTION_RATE > 0.0 && CONSUMPTION_RATE < 1.0);
    }
}
