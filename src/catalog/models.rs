use serde::{Deserialize, Serialize};

/// Region tags used by the country browser. `Global` doubles as the
/// "no filter" wildcard; no country is ever tagged with it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Global,
    Europe,
    Asia,
    Latam,
    Mena,
    Africa,
    NorthAmerica,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Global,
        Region::Europe,
        Region::Asia,
        Region::Latam,
        Region::Mena,
        Region::Africa,
        Region::NorthAmerica,
        Region::Oceania,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Region::Global => "global",
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::Latam => "latam",
            Region::Mena => "mena",
            Region::Africa => "africa",
            Region::NorthAmerica => "north-america",
            Region::Oceania => "oceania",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Global => "Global",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Latam => "LATAM",
            Region::Mena => "MENA",
            Region::Africa => "Africa",
            Region::NorthAmerica => "North America",
            Region::Oceania => "Oceania",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Region::Global => "🌍",
            Region::Europe => "🇪🇺",
            Region::Asia => "🌏",
            Region::Latam => "🌎",
            Region::Mena => "🕌",
            Region::Africa => "🌍",
            Region::NorthAmerica => "🇺🇸",
            Region::Oceania => "🇦🇺",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Instant,
    Manual,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Refund {
    Prorated,
    None,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub gb: u32,
    pub mb: u32,
    pub validity_days: u32,
    pub price_usdc: f64,
    pub price_per_mb_usdc: f64, // precomputed, roughly price_usdc / mb
    pub features: Vec<String>,
    pub activation: Activation,
    pub refund: Refund,
    pub compatibility: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub reliability: f64, // percent
    pub latency_ms: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub region: Region,
    pub providers: Vec<Provider>,
    pub plans: Vec<Plan>,
    pub starting_price: f64,
    pub best_for: Vec<String>,
    pub popularity: u32,
}

impl Country {
    /// Highest reliability among the country's providers.
    pub fn best_reliability(&self) -> Option<f64> {
        self.providers
            .iter()
            .map(|p| p.reliability)
            .max_by(|a, b| a.total_cmp(b))
    }

    /// Lowest latency among the country's providers.
    pub fn lowest_latency(&self) -> Option<u32> {
        self.providers.iter().map(|p| p.latency_ms).min()
    }

    /// The providers shown on a country card and how many were left out.
    pub fn provider_preview(&self, limit: usize) -> (&[Provider], usize) {
        let shown = self.providers.len().min(limit);
        (&self.providers[..shown], self.providers.len() - shown)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortKey {
    Price,
    Name,
    #[default]
    Popularity,
}

impl SortKey {
    /// Order in which the sort button steps through the keys.
    pub fn next(&self) -> SortKey {
        match self {
            SortKey::Popularity => SortKey::Price,
            SortKey::Price => SortKey::Name,
            SortKey::Name => SortKey::Popularity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Price => "Price",
            SortKey::Name => "Name",
            SortKey::Popularity => "Popular",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_countries;

    #[test]
    fn region_serializes_with_kebab_case_tags() {
        let json = serde_json::to_string(&Region::NorthAmerica).unwrap();
        assert_eq!(json, "\"north-america\"");
        for region in Region::ALL {
            assert_eq!(serde_json::to_string(&region).unwrap(), format!("\"{}\"", region.id()));
        }
    }

    #[test]
    fn card_stats_pick_best_provider_figures() {
        let countries = sample_countries();
        let us = countries.iter().find(|c| c.code == "US").unwrap();
        assert_eq!(us.best_reliability(), Some(99.9));
        assert_eq!(us.lowest_latency(), Some(12));

        let (shown, hidden) = us.provider_preview(3);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 0);

        let (shown, hidden) = us.provider_preview(1);
        assert_eq!(shown[0].name, "AT&T");
        assert_eq!(hidden, 1);
    }

    #[test]
    fn sort_button_cycles_through_every_key() {
        let start = SortKey::default();
        assert_eq!(start, SortKey::Popularity);
        assert_eq!(start.next(), SortKey::Price);
        assert_eq!(start.next().next(), SortKey::Name);
        assert_eq!(start.next().next().next(), start);
    }
}
