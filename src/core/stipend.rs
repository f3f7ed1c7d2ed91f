use crate::models::{StipendAmount, StipendPeriod};

/// Parse free-form stipend text into a structured amount
///
/// Handles the shapes found in listing tables:
/// - `"₹ 30,000 /month"` single amount with currency and period
/// - `"₹ 5,000-10,000 /month"` range, lower bound first
/// - `"Unpaid"`
/// - empty or non-numeric text such as `"Not specified"`
///
/// Never fails; anything without a usable number is `Unspecified`.
pub fn parse_stipend(text: &str) -> StipendAmount {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        return StipendAmount::Unspecified;
    }
    if lower.contains("unpaid") {
        return StipendAmount::Unpaid;
    }

    let amounts = leading_amounts(&lower);
    let (min, max) = match amounts.as_slice() {
        [] => return StipendAmount::Unspecified,
        [only] => (*only, *only),
        [first, second, ..] => (first.min(*second), first.max(*second)),
    };

    StipendAmount::Paid {
        min,
        max,
        period: detect_period(&lower),
    }
}

/// Extract the first amount and, when a range separator follows it, the
/// second amount of the range.
fn leading_amounts(text: &str) -> Vec<f64> {
    let mut amounts = Vec::with_capacity(2);
    let mut rest = text;

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let end = rest[start..]
            .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
            .map_or(rest.len(), |offset| start + offset);

        let cleaned: String = rest[start..end]
            .trim_end_matches(|c: char| c == ',' || c == '.')
            .chars()
            .filter(|c| *c != ',')
            .collect();

        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() => amounts.push(value),
            _ => break,
        }

        rest = &rest[end..];
        if amounts.len() == 2 || !starts_range(rest) {
            break;
        }
    }

    amounts
}

fn starts_range(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.starts_with('-') || rest.starts_with('–') || rest.starts_with("to ")
}

fn detect_period(text: &str) -> StipendPeriod {
    if text.contains("lump") {
        StipendPeriod::LumpSum
    } else if text.contains("week") {
        StipendPeriod::Week
    } else if text.contains("year") || text.contains("annum") {
        StipendPeriod::Year
    } else {
        StipendPeriod::Month
    }
}
