//! Locale-style string ordering for the text sort columns.
//!
//! Wraps a root-locale ICU collator at its default (tertiary) strength.
//! Accents and case are secondary and tertiary differences, so `"Éclair"`
//! sorts between `"Apple"` and `"Fig"` and lower case precedes upper case
//! only when the letters are otherwise equal. Strings the collator considers
//! equal fall back to code-point order, so the ordering is total.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

thread_local! {
    static ROOT: Option<CollatorBorrowed<'static>> =
        Collator::try_new(CollatorPreferences::default(), CollatorOptions::default()).ok();
}

/// Compares two strings the way the catalogue's text columns are sorted.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use product_catalogue::collation::compare;
///
/// assert_eq!(compare("apple juice", "Banana"), Ordering::Less);
/// assert_eq!(compare("Éclair", "Fig"), Ordering::Less);
/// assert_eq!(compare("milk", "Milk"), Ordering::Less);
/// assert_eq!(compare("Eggs", "Eggs"), Ordering::Equal);
/// ```
#[must_use]
pub fn compare(left: &str, right: &str) -> Ordering {
    ROOT.with(|collator| {
        collator
            .as_ref()
            .map_or(Ordering::Equal, |root| root.compare(left, right))
    })
    .then_with(|| left.cmp(right))
}
