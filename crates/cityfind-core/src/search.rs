// crates/cityfind-core/src/search.rs

//! Case-insensitive prefix lookup over a sorted slice.
//!
//! Every key that starts with a given prefix sits in one contiguous run of a
//! sorted sequence. Two binary searches find the edges of that run, so a
//! lookup costs `O(log n)` comparisons plus `O(k)` to hand out `k` matches.
//!
//! **Precondition:** `items` must be sorted ascending by
//! `fold_key(key(item))`. This is not checked; an unsorted slice gives
//! incomplete results. [`sort_by_search_key`](crate::model::convert::sort_by_search_key)
//! produces the right order for [`City`](crate::City).

use crate::text::{fold_key, is_blank};
use std::ops::Range;

/// Returns the sub-slice of `items` whose folded key starts with the folded
/// `query`, in the original order.
///
/// A blank query (empty or whitespace only) matches everything. The query is
/// not trimmed otherwise.
///
/// ```rust
/// use cityfind_core::search::prefix_search;
///
/// let names = ["alabama", "albuquerque", "anaheim", "arizona", "sydney"];
/// assert_eq!(prefix_search(&names, "AL", |s| *s), ["alabama", "albuquerque"]);
/// assert!(prefix_search(&names, "z", |s| *s).is_empty());
/// ```
pub fn prefix_search<'a, T, K, F>(items: &'a [T], query: &str, key: F) -> &'a [T]
where
    F: Fn(&T) -> K,
    K: AsRef<str>,
{
    &items[prefix_range(items, query, key)]
}

/// Like [`prefix_search`], but returns the index window instead of a slice.
/// An empty range means no match.
pub fn prefix_range<T, K, F>(items: &[T], query: &str, key: F) -> Range<usize>
where
    F: Fn(&T) -> K,
    K: AsRef<str>,
{
    if is_blank(query) {
        return 0..items.len();
    }

    let prefix = fold_key(query);
    let key_at = |i: usize| fold_key(key(&items[i]).as_ref());

    let Some(first) = first_match(items.len(), &prefix, &key_at) else {
        return 0..0;
    };
    let end = end_of_matches(items.len(), &prefix, first, &key_at);

    tracing::trace!(query, first, end, "prefix window");
    first..end
}

/// Smallest index whose key starts with `prefix`, if any.
///
/// On a match the window narrows left to find an earlier one; otherwise it
/// narrows by ordinary key comparison.
fn first_match(len: usize, prefix: &str, key_at: &impl Fn(usize) -> String) -> Option<usize> {
    let (mut low, mut high) = (0, len);
    let mut found = None;

    while low < high {
        let mid = low + (high - low) / 2;
        let key = key_at(mid);
        if key.starts_with(prefix) {
            found = Some(mid);
            high = mid;
        } else if key.as_str() < prefix {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    found
}

/// First index in `[start, len]` whose key no longer starts with `prefix`.
fn end_of_matches(
    len: usize,
    prefix: &str,
    start: usize,
    key_at: &impl Fn(usize) -> String,
) -> usize {
    let (mut low, mut high) = (start, len);

    while low < high {
        let mid = low + (high - low) / 2;
        if key_at(mid).starts_with(prefix) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::convert::sort_by_search_key;
    use crate::model::{City, Coordinates, ImageHandle};

    fn city(id: i64, name: &str, country: &str) -> City {
        City {
            id,
            name: name.to_string(),
            country: country.to_string(),
            image: ImageHandle::Placeholder,
            coordinates: Coordinates::new(0.0, 0.0),
        }
    }

    fn sample() -> Vec<City> {
        sort_by_search_key(vec![
            city(1, "Alabama", "US"),
            city(2, "Albuquerque", "US"),
            city(3, "Anaheim", "US"),
            city(4, "Arizona", "US"),
            city(5, "Sydney", "AU"),
        ])
    }

    fn names(cities: &[City]) -> Vec<&str> {
        cities.iter().map(|c| c.name.as_str()).collect()
    }

    fn search<'a>(cities: &'a [City], query: &str) -> &'a [City] {
        prefix_search(cities, query, City::search_key)
    }

    #[test]
    fn prefix_a_returns_all_but_sydney() {
        let cities = sample();
        assert_eq!(
            names(search(&cities, "A")),
            ["Alabama", "Albuquerque", "Anaheim", "Arizona"]
        );
    }

    #[test]
    fn prefix_al_returns_alabama_and_albuquerque() {
        let cities = sample();
        assert_eq!(names(search(&cities, "Al")), ["Alabama", "Albuquerque"]);
        assert_eq!(names(search(&cities, "Alb")), ["Albuquerque"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let cities = sample();
        assert_eq!(search(&cities, "AL"), search(&cities, "al"));
        assert_eq!(names(search(&cities, "aLa")), ["Alabama"]);
        assert_eq!(names(search(&cities, "s")), ["Sydney"]);
    }

    #[test]
    fn blank_query_passes_everything_through() {
        let cities = sample();
        assert_eq!(search(&cities, ""), cities.as_slice());
        assert_eq!(search(&cities, "   "), cities.as_slice());
    }

    #[test]
    fn no_match_is_empty() {
        let cities = sample();
        assert!(search(&cities, "Z").is_empty());
        assert!(search(&cities, "Alz").is_empty());
        assert!(search(&cities, "Alabamazzz").is_empty());
    }

    #[test]
    fn matches_at_both_ends_and_in_the_middle() {
        let cities = sample();
        assert_eq!(names(search(&cities, "Alabama")), ["Alabama"]);
        assert_eq!(names(search(&cities, "An")), ["Anaheim"]);
        assert_eq!(names(search(&cities, "Sydney")), ["Sydney"]);
        assert_eq!(names(search(&cities, "Albuquerque")), ["Albuquerque"]);
    }

    #[test]
    fn query_can_run_into_the_country_code() {
        let cities = sample();
        assert_eq!(names(search(&cities, "sydney, a")), ["Sydney"]);
        assert!(search(&cities, "sydney, us").is_empty());
    }

    #[test]
    fn single_element_dataset() {
        let single = vec![city(99, "Cairo", "EG")];
        assert_eq!(names(search(&single, "Ca")), ["Cairo"]);
        assert_eq!(names(search(&single, "cairo, eg")), ["Cairo"]);
        assert!(search(&single, "Cb").is_empty());
    }

    #[test]
    fn duplicate_keys_are_all_returned_in_order() {
        let cities = sort_by_search_key(vec![
            city(1, "Sydney", "AU"),
            city(2, "Sydney", "AU"),
            city(3, "Anaheim", "US"),
        ]);
        let found = search(&cities, "Sydney");
        assert_eq!(found.iter().map(|c| c.id).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn empty_dataset() {
        let none: Vec<City> = Vec::new();
        assert!(search(&none, "a").is_empty());
        assert!(search(&none, "").is_empty());
    }

    #[test]
    fn range_reports_window() {
        let cities = sample();
        assert_eq!(prefix_range(&cities, "al", City::search_key), 0..2);
        assert_eq!(prefix_range(&cities, "zzz", City::search_key), 0..0);
        assert_eq!(prefix_range(&cities, " ", City::search_key), 0..5);
    }

    #[test]
    fn agrees_with_linear_scan_for_every_key_prefix() {
        let raw = [
            "Paris", "Parma", "Paramaribo", "Pari", "parís", "Perth", "Porto", "Pune", "Puno",
            "Oslo", "osaka", "Ottawa", "Ohio", "Berlin", "Bern", "Bergen", "Berlin", "Bremen",
            "Bree", "B", "Ba", "Baku", "Bamako", "Zagreb", "Zürich", "Zug", "a", "ab", "abc",
        ];
        let cities = sort_by_search_key(
            raw.iter()
                .enumerate()
                .map(|(i, name)| city(i as i64, name, if i % 3 == 0 { "FR" } else { "DE" }))
                .collect(),
        );

        let mut queries: Vec<String> = Vec::new();
        for c in &cities {
            let key = c.search_key();
            for (end, _) in key.char_indices().skip(1) {
                queries.push(key[..end].to_string());
            }
            queries.push(key.to_uppercase());
            queries.push(format!("{key}x"));
        }
        queries.extend(["q", "bz", "aa", "Pz", "ZZ", "0"].map(String::from));

        for q in &queries {
            let expected: Vec<i64> = cities
                .iter()
                .filter(|c| c.search_key().starts_with(&fold_key(q)))
                .map(|c| c.id)
                .collect();
            let got: Vec<i64> = search(&cities, q).iter().map(|c| c.id).collect();
            assert_eq!(got, expected, "query {q:?}");
        }
    }
}
