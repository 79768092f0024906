//! Case-insensitive name comparison with a deterministic tie-break.

use std::cmp::Ordering;

/// Compares two entry names case-insensitively.
///
/// The primary key is the lowercase-folded name. When two names fold to the
/// same key but differ in case, the original names are compared by code
/// point, so uppercase variants sort before lowercase ones (`Cat.png`
/// before `cat.png`). Files and directories are not treated differently;
/// the comparator only sees names.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use treescope::sort::compare_names;
///
/// assert_eq!(compare_names("Apple.txt", "banana.txt"), Ordering::Less);
/// assert_eq!(compare_names("Cat.png", "cat.png"), Ordering::Less);
/// ```
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sorts a list of entry names in place using [`compare_names`].
///
/// Sorting never fails; an empty slice is left untouched.
pub fn sort_names(names: &mut [String]) {
    names.sort_by(|a, b| compare_names(a, b));
}
