use crate::catalog::models::{Activation, Country, Plan, Provider, Refund, Region};

// (id, name, logo, reliability %, latency ms)
type ProviderRow = (&'static str, &'static str, &'static str, f64, u32);

fn providers(rows: &[ProviderRow]) -> Vec<Provider> {
    rows.iter()
        .map(|&(id, name, logo, reliability, latency_ms)| Provider {
            id: id.to_string(),
            name: name.to_string(),
            logo: logo.to_string(),
            reliability,
            latency_ms,
        })
        .collect()
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn plan(
    id: &str,
    name: &str,
    gb: u32,
    mb: u32,
    validity_days: u32,
    price_usdc: f64,
    price_per_mb_usdc: f64,
    features: &[&str],
    refund: Refund,
) -> Plan {
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        gb,
        mb,
        validity_days,
        price_usdc,
        price_per_mb_usdc,
        features: labels(features),
        activation: Activation::Instant,
        refund,
        compatibility: labels(&["iOS", "Android"]),
    }
}

/// The sample catalog shown on the buy-data page.
pub fn sample_countries() -> Vec<Country> {
    vec![
        Country {
            code: "US".to_string(),
            name: "United States".to_string(),
            flag: "🇺🇸".to_string(),
            region: Region::NorthAmerica,
            providers: providers(&[
                ("att", "AT&T", "📶", 99.9, 12),
                ("verizon", "Verizon", "📡", 99.8, 14),
            ]),
            plans: vec![
                plan(
                    "us-travel-1gb",
                    "7-day Traveler — 1GB",
                    1,
                    1024,
                    7,
                    8.5,
                    0.0083,
                    &["Instant activation", "Prorated refund", "5G ready"],
                    Refund::Prorated,
                ),
                plan(
                    "us-business-5gb",
                    "30-day Business — 5GB",
                    5,
                    5120,
                    30,
                    24.99,
                    0.0049,
                    &["Priority network", "Hotspot enabled", "24/7 support"],
                    Refund::Prorated,
                ),
            ],
            starting_price: 8.5,
            best_for: labels(&["travel", "business"]),
            popularity: 95,
        },
        Country {
            code: "GB".to_string(),
            name: "United Kingdom".to_string(),
            flag: "🇬🇧".to_string(),
            region: Region::Europe,
            providers: providers(&[
                ("ee", "EE", "📶", 99.7, 15),
                ("vodafone", "Vodafone", "📡", 99.5, 18),
            ]),
            plans: vec![plan(
                "uk-tourist-2gb",
                "14-day Tourist — 2GB",
                2,
                2048,
                14,
                12.0,
                0.0059,
                &["EU roaming", "Instant activation", "Unlimited calls"],
                Refund::Prorated,
            )],
            starting_price: 12.0,
            best_for: labels(&["travel", "roaming"]),
            popularity: 88,
        },
        Country {
            code: "JP".to_string(),
            name: "Japan".to_string(),
            flag: "🇯🇵".to_string(),
            region: Region::Asia,
            providers: providers(&[
                ("docomo", "NTT Docomo", "📶", 99.9, 10),
                ("softbank", "SoftBank", "📡", 99.6, 12),
            ]),
            plans: vec![plan(
                "jp-unlimited-7d",
                "7-day Unlimited",
                999, // unlimited sentinel
                999_999,
                7,
                18.5,
                0.0001,
                &["Truly unlimited", "5G speeds", "No throttling"],
                Refund::None,
            )],
            starting_price: 18.5,
            best_for: labels(&["travel", "unlimited"]),
            popularity: 92,
        },
        Country {
            code: "DE".to_string(),
            name: "Germany".to_string(),
            flag: "🇩🇪".to_string(),
            region: Region::Europe,
            providers: providers(&[
                ("telekom", "Deutsche Telekom", "📶", 99.8, 13),
                ("vodafone-de", "Vodafone DE", "📡", 99.4, 16),
            ]),
            plans: vec![plan(
                "de-europe-3gb",
                "21-day Europe — 3GB",
                3,
                3072,
                21,
                15.75,
                0.0051,
                &["EU roaming", "5G ready", "Hotspot enabled"],
                Refund::Prorated,
            )],
            starting_price: 15.75,
            best_for: labels(&["travel", "business", "roaming"]),
            popularity: 85,
        },
        Country {
            code: "BR".to_string(),
            name: "Brazil".to_string(),
            flag: "🇧🇷".to_string(),
            region: Region::Latam,
            providers: providers(&[
                ("vivo", "Vivo", "📶", 98.9, 22),
                ("tim", "TIM", "📡", 98.5, 25),
            ]),
            plans: vec![plan(
                "br-carnival-4gb",
                "30-day Carnival — 4GB",
                4,
                4096,
                30,
                16.99,
                0.0041,
                &["Festival optimized", "Social media free", "Music streaming"],
                Refund::Prorated,
            )],
            starting_price: 16.99,
            best_for: labels(&["travel", "social"]),
            popularity: 78,
        },
        Country {
            code: "AE".to_string(),
            name: "United Arab Emirates".to_string(),
            flag: "🇦🇪".to_string(),
            region: Region::Mena,
            providers: providers(&[
                ("etisalat", "Etisalat", "📶", 99.6, 18),
                ("du", "du", "📡", 99.3, 20),
            ]),
            plans: vec![plan(
                "ae-business-6gb",
                "14-day Business — 6GB",
                6,
                6144,
                14,
                22.5,
                0.0037,
                &["Premium speeds", "Business priority", "VPN friendly"],
                Refund::Prorated,
            )],
            starting_price: 22.5,
            best_for: labels(&["business", "premium"]),
            popularity: 82,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_country_starts_at_its_cheapest_plan() {
        for country in sample_countries() {
            let cheapest = country
                .plans
                .iter()
                .map(|p| p.price_usdc)
                .fold(f64::INFINITY, f64::min);
            assert_eq!(country.starting_price, cheapest, "{}", country.code);
            assert_eq!(country.providers.len(), 2);
            assert!(!country.plans.is_empty() && country.plans.len() <= 2);
            assert_ne!(country.region, Region::Global);
        }
    }

    #[test]
    fn megabytes_follow_gigabytes_except_unlimited() {
        for plan in sample_countries().iter().flat_map(|c| c.plans.iter()) {
            if plan.gb == 999 {
                assert_eq!(plan.mb, 999_999);
            } else {
                assert_eq!(plan.mb, plan.gb * 1024, "{}", plan.id);
                let derived = plan.price_usdc / plan.mb as f64;
                assert!((derived - plan.price_per_mb_usdc).abs() < 0.0005, "{}", plan.id);
            }
        }
    }
}
