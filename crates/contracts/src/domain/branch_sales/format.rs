//! Revenue formatting for the totals table.

/// Formats a revenue value for display.
///
/// Injected into the row/total building next to the collator; the browser
/// frontend wraps `Intl.NumberFormat`, everything else uses
/// [`GroupedDecimalFormat`].
pub trait RevenueFormat {
    fn format(&self, value: f64) -> String;
}

/// Default formatter: thousands grouped with commas, minimum two fraction
/// digits, a third kept when the value carries more precision. Midpoints
/// round away from zero; non-finite values render as `NaN` and `∞`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedDecimalFormat;

impl RevenueFormat for GroupedDecimalFormat {
    fn format(&self, value: f64) -> String {
        format_revenue(value)
    }
}

/// Formats a revenue with at least two fraction digits and a thousands
/// separator. A third fraction digit survives when the value carries more
/// precision; decimal midpoints round away from zero.
///
/// # Examples
///
/// ```
/// use contracts::domain::branch_sales::format_revenue;
/// assert_eq!(format_revenue(40.0), "40.00");
/// assert_eq!(format_revenue(1234567.89), "1,234,567.89");
/// assert_eq!(format_revenue(1234.567), "1,234.567");
/// assert_eq!(format_revenue(0.0625), "0.063");
/// ```
pub fn format_revenue(value: f64) -> String {
    if value.is_nan() {
        // NaN revenue (record without numbers) renders as "NaN"
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-∞" } else { "∞" }.to_string();
    }

    // `{:.3}` alone rounds midpoints to even; scale so they round away
    // from zero instead. Values past 1e12 skip the scaling, where
    // multiplying by 1000 is no longer exact.
    let value = if value.abs() < 1e12 {
        (value * 1000.0).round() / 1000.0
    } else {
        value
    };

    let mut rendered = format!("{:.3}", value);
    // Two fraction digits minimum; keep the third only when it is significant
    if rendered.ends_with('0') {
        rendered.pop();
    }

    match rendered.split_once('.') {
        Some((integer, fraction)) => {
            let (sign, digits) = match integer.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("", integer),
            };
            format!("{}{}.{}", sign, group_thousands(digits), fraction)
        }
        None => rendered,
    }
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}
