//! Unique scheme name generation.

use crate::scheme::names_match;

/// Returns `base` if no name in `existing` matches it case-insensitively,
/// otherwise `"base N"` with the smallest unused `N >= 1`.
pub fn make_unique_name<'a, I>(base: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = existing.into_iter().collect();
    let is_taken = |candidate: &str| taken.iter().any(|name| names_match(name, candidate));

    if !is_taken(base) {
        return base.to_string();
    }

    // Terminates: at most `taken.len()` suffixes can collide.
    (1..)
        .map(|n: usize| format!("{} {}", base, n))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| base.to_string())
}
