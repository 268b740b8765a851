use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PurchaseMode {
    #[default]
    Prepaid,
    PayOnUsage,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentRequest {
    pub country_code: String,
    pub country_name: String,
    pub plan_id: String,
    pub plan_name: String,
    pub mode: PurchaseMode,
    pub amount_usdc: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settlement {
    pub request: PaymentRequest,
    pub tx_hash: String,
    pub settled_at: DateTime<Utc>,
}

impl Settlement {
    pub fn short_hash(&self) -> String {
        shorten_hash(&self.tx_hash)
    }

    pub fn explorer_url(&self) -> String {
        format!("{}/tx/{}", crate::config::EXPLORER_URL, urlencoding::encode(&self.tx_hash))
    }

    /// The settlement as a downloadable `data:` URL holding pretty JSON.
    pub fn download_href(&self) -> Result<String, serde_json::Error> {
        let body = serde_json::to_string_pretty(self)?;
        Ok(format!("data:application/json;charset=utf-8,{}", urlencoding::encode(&body)))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
    #[error("could not reach the settlement service: {0}")]
    Network(String),
    #[error("settlement was rejected (HTTP {status})")]
    Rejected { status: u16 },
    #[error("unexpected settlement response: {0}")]
    Decode(String),
}

/// Anything that can turn a purchase into a settled transaction.
#[async_trait(?Send)]
pub trait PaymentGateway {
    fn name(&self) -> &'static str;

    async fn submit(&self, request: PaymentRequest) -> Result<Settlement, PaymentError>;
}

/// Shared gateway handed to components through a context provider.
#[derive(Clone)]
pub struct GatewayHandle(pub Rc<dyn PaymentGateway>);

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// `0x` followed by 40 lowercase hex characters.
pub fn fabricate_tx_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 20] = rng.gen();
    format!("0x{}", hex::encode(bytes))
}

/// First 10 and last 8 characters, for display.
pub fn shorten_hash(hash: &str) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= 18 {
        return hash.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Waits a fixed delay and then "settles" with a made-up hash. Never fails.
pub struct MockGateway {
    delay_ms: u32,
}

impl MockGateway {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    pub fn settle<R: Rng + ?Sized>(&self, request: PaymentRequest, rng: &mut R) -> Settlement {
        Settlement {
            request,
            tx_hash: fabricate_tx_hash(rng),
            settled_at: Utc::now(),
        }
    }
}

#[async_trait(?Send)]
impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn submit(&self, request: PaymentRequest) -> Result<Settlement, PaymentError> {
        TimeoutFuture::new(self.delay_ms).await;
        let settlement = self.settle(request, &mut rand::thread_rng());
        info!("Mock settlement {} for {}", settlement.tx_hash, settlement.request.plan_id);
        Ok(settlement)
    }
}

#[derive(Deserialize)]
struct SettleResponse {
    tx_hash: String,
}

/// Hands the purchase to the settlement backend.
pub struct RealGateway {
    base_url: String,
}

impl RealGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn settle_url(&self) -> String {
        format!("{}/api/payments/settle", self.base_url)
    }
}

#[async_trait(?Send)]
impl PaymentGateway for RealGateway {
    fn name(&self) -> &'static str {
        "settlement-backend"
    }

    async fn submit(&self, request: PaymentRequest) -> Result<Settlement, PaymentError> {
        let response = Request::post(&self.settle_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .map_err(|e| PaymentError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        if !response.ok() {
            warn!("Settlement rejected with status {}", response.status());
            return Err(PaymentError::Rejected { status: response.status() });
        }

        let body = response
            .json::<SettleResponse>()
            .await
            .map_err(|e| PaymentError::Decode(e.to_string()))?;

        Ok(Settlement {
            request,
            tx_hash: body.tx_hash,
            settled_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request() -> PaymentRequest {
        PaymentRequest {
            country_code: "US".to_string(),
            country_name: "United States".to_string(),
            plan_id: "us-business-5gb".to_string(),
            plan_name: "30-day Business — 5GB".to_string(),
            mode: PurchaseMode::PayOnUsage,
            amount_usdc: 4.0353,
        }
    }

    #[test]
    fn fabricated_hashes_look_like_addresses() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let hash = fabricate_tx_hash(&mut rng);
            assert_eq!(hash.len(), 42);
            assert!(hash.starts_with("0x"));
            assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
        let a = fabricate_tx_hash(&mut rng);
        let b = fabricate_tx_hash(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn short_hash_keeps_both_ends() {
        let hash = "0x0123456789abcdef0123456789abcdef01234567";
        assert_eq!(shorten_hash(hash), "0x01234567...01234567");
        assert_eq!(shorten_hash("0xabc"), "0xabc");
    }

    #[test]
    fn mock_settlement_carries_the_request() {
        let gateway = MockGateway::new(0);
        let settlement = gateway.settle(request(), &mut StdRng::seed_from_u64(1));
        assert_eq!(settlement.request, request());
        assert_eq!(settlement.tx_hash.len(), 42);
        assert_eq!(gateway.name(), "mock");
        assert!(settlement.explorer_url().ends_with(&settlement.tx_hash));
    }

    #[test]
    fn receipt_download_is_encoded_json() {
        let settlement = MockGateway::new(0).settle(request(), &mut StdRng::seed_from_u64(2));
        let href = settlement.download_href().unwrap();
        let encoded = href.strip_prefix("data:application/json;charset=utf-8,").unwrap();
        let json = urlencoding::decode(encoded).unwrap();
        let parsed: Settlement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.tx_hash, settlement.tx_hash);
        assert!(json.contains("\"pay-on-usage\""));
    }

    #[test]
    fn settle_url_has_no_double_slash() {
        assert_eq!(
            RealGateway::new("http://localhost:3001/").settle_url(),
            "http://localhost:3001/api/payments/settle"
        );
    }

    #[test]
    fn errors_read_well() {
        assert_eq!(
            PaymentError::Rejected { status: 402 }.to_string(),
            "settlement was rejected (HTTP 402)"
        );
    }
}
