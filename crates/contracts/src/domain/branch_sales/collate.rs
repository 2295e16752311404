use std::cmp::Ordering;

/// Locale-sensitive ordering of product names.
///
/// The sorter takes its collator as an explicit dependency; the browser
/// frontend supplies an `Intl.Collator`-backed implementation, everything
/// else uses [`CaseInsensitiveCollator`].
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Default collation outside the browser: Unicode lowercase comparison,
/// with the raw strings as tiebreak so equal-folding names keep one
/// deterministic order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveCollator;

impl Collator for CaseInsensitiveCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }
}
