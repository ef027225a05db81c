// crates/cityfind-core/src/text.rs

/// Convert a string into the folded form used for keys, sorting and queries.
///
/// Without the `ascii_fold` feature this is plain Unicode lowercasing. With
/// it, the string is first transliterated to ASCII using `deunicode`
/// (e.g. `Łódź` -> `lodz`).
///
/// Every comparison in the crate goes through this function, so the sort
/// order of a snapshot and the order the search engine assumes always agree.
///
/// # Examples
///
/// ```rust
/// use cityfind_core::text::fold_key;
///
/// assert_eq!(fold_key("Sydney"), "sydney");
/// assert_eq!(fold_key("AU"), "au");
/// ```
pub fn fold_key(s: &str) -> String {
    #[cfg(feature = "ascii_fold")]
    {
        deunicode::deunicode(s).to_lowercase()
    }
    #[cfg(not(feature = "ascii_fold"))]
    {
        s.to_lowercase()
    }
}

/// `true` for the empty string and strings made only of whitespace.
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}
