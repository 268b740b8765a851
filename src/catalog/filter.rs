use std::cmp::Ordering;

use crate::catalog::models::{Country, Region, SortKey};

fn matches_region(country: &Country, region: Region) -> bool {
    region == Region::Global || country.region == region
}

fn matches_query(country: &Country, needle: &str) -> bool {
    needle.is_empty()
        || country.name.to_lowercase().contains(needle)
        || country
            .providers
            .iter()
            .any(|p| p.name.to_lowercase().contains(needle))
}

fn compare(a: &Country, b: &Country, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Price => a.starting_price.total_cmp(&b.starting_price),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Popularity => b.popularity.cmp(&a.popularity),
    }
}

/// Countries visible for the given region, search text and sort key.
///
/// The sort is stable, so countries that compare equal keep their
/// catalog order.
pub fn filter_countries(countries: &[Country], region: Region, query: &str, sort: SortKey) -> Vec<Country> {
    let needle = query.to_lowercase();
    let mut visible: Vec<Country> = countries
        .iter()
        .filter(|c| matches_region(c, region) && matches_query(c, &needle))
        .cloned()
        .collect();
    visible.sort_by(|a, b| compare(a, b, sort));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_countries;

    fn codes(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(|c| c.code.as_str()).collect()
    }

    #[test]
    fn popularity_is_the_default_order() {
        let visible = filter_countries(&sample_countries(), Region::Global, "", SortKey::default());
        assert_eq!(codes(&visible), ["US", "JP", "GB", "DE", "AE", "BR"]);
    }

    #[test]
    fn price_sorts_by_starting_price() {
        let visible = filter_countries(&sample_countries(), Region::Global, "", SortKey::Price);
        assert_eq!(codes(&visible), ["US", "GB", "DE", "BR", "JP", "AE"]);
    }

    #[test]
    fn name_sort_is_idempotent() {
        let once = filter_countries(&sample_countries(), Region::Global, "", SortKey::Name);
        assert_eq!(codes(&once), ["BR", "DE", "JP", "AE", "GB", "US"]);
        let twice = filter_countries(&once, Region::Global, "", SortKey::Name);
        assert_eq!(once, twice);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let mut countries = sample_countries();
        for c in countries.iter_mut() {
            c.popularity = 50;
        }
        let visible = filter_countries(&countries, Region::Global, "", SortKey::Popularity);
        assert_eq!(codes(&visible), ["US", "GB", "JP", "DE", "BR", "AE"]);
    }

    #[test]
    fn region_filter_narrows_the_list() {
        let visible = filter_countries(&sample_countries(), Region::Europe, "", SortKey::Popularity);
        assert_eq!(codes(&visible), ["GB", "DE"]);
    }

    #[test]
    fn region_without_countries_is_empty() {
        assert!(filter_countries(&sample_countries(), Region::Africa, "", SortKey::Price).is_empty());
        assert!(filter_countries(&sample_countries(), Region::Oceania, "", SortKey::Name).is_empty());
    }

    #[test]
    fn query_matches_country_or_provider_case_insensitively() {
        let by_provider = filter_countries(&sample_countries(), Region::Global, "vodafone", SortKey::Popularity);
        assert_eq!(codes(&by_provider), ["GB", "DE"]);

        let by_name = filter_countries(&sample_countries(), Region::Global, "UNITED", SortKey::Popularity);
        assert_eq!(codes(&by_name), ["US", "GB", "AE"]);

        let combined = filter_countries(&sample_countries(), Region::Asia, "vodafone", SortKey::Popularity);
        assert!(combined.is_empty());
    }
}
