//! Browser-side collation and number formatting.
//!
//! Both services wrap their `Intl` counterpart once at construction and keep
//! the bound function, so per-row calls stay cheap. The handles are plain JS
//! values; hold them in `StoredValue::new_local`.

use std::cmp::Ordering;

use contracts::domain::branch_sales::{format_revenue, Collator, RevenueFormat};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsValue;

/// Linguistic name comparison under the browser's default locale.
pub struct IntlCollator {
    compare: Function,
}

impl IntlCollator {
    pub fn new() -> Self {
        let collator = js_sys::Intl::Collator::new(&Array::new(), &Object::new());
        Self {
            compare: collator.compare(),
        }
    }
}

impl Collator for IntlCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let outcome = self
            .compare
            .call2(
                &JsValue::UNDEFINED,
                &JsValue::from_str(a),
                &JsValue::from_str(b),
            )
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);

        outcome.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }
}

/// `Intl.NumberFormat("en", { minimumFractionDigits: 2 })`.
pub struct IntlNumberFormat {
    format: Function,
}

impl IntlNumberFormat {
    pub fn new() -> Self {
        let options = Object::new();
        _ = Reflect::set(
            &options,
            &JsValue::from_str("minimumFractionDigits"),
            &JsValue::from_f64(2.0),
        );

        let formatter =
            js_sys::Intl::NumberFormat::new(&Array::of1(&JsValue::from_str("en")), &options);
        Self {
            format: formatter.format(),
        }
    }
}

impl RevenueFormat for IntlNumberFormat {
    fn format(&self, value: f64) -> String {
        self.format
            .call1(&JsValue::UNDEFINED, &JsValue::from_f64(value))
            .ok()
            .and_then(|formatted| formatted.as_string())
            .unwrap_or_else(|| format_revenue(value))
    }
}
