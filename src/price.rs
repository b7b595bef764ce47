//! Site-specific price parsing. Each retailer renders prices differently;
//! the traversal only ever sees the normalized `f64` or nothing at all.

/// Fraction fragment the sites render for whole-euro prices.
pub const NO_FRACTION: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRule {
    /// Integer part and fraction arrive as two separate fragments,
    /// joined with a dot ("299" + "99" -> 299.99).
    SplitFraction,
    /// Single token with "." as thousands separator and "," before the
    /// fraction ("1.299,99" -> 1299.99, "299,-" -> 299).
    CommaDecimal,
    /// Whole euros with "." as thousands separator ("1.299" -> 1299).
    WholeEuros,
}

/// Returns `None` for anything that cannot be coerced to a non-negative
/// number; callers treat that as "skip this item".
pub fn normalize(primary: &str, fragment: Option<&str>, rule: PriceRule) -> Option<f64> {
    let parsed = match rule {
        PriceRule::SplitFraction => {
            let euros = primary.trim();
            match fragment.map(str::trim) {
                None => euros.parse::<f64>().ok(),
                Some(frac) if frac == NO_FRACTION => euros.parse::<f64>().ok(),
                Some(frac) => format!("{}.{}", euros, frac).parse::<f64>().ok(),
            }
        }
        PriceRule::CommaDecimal => {
            let text = primary.trim().replace('.', "");
            let (euros, cents) = text.split_once(',')?;
            if cents == NO_FRACTION {
                euros.parse::<f64>().ok()
            } else {
                format!("{}.{}", euros, cents).parse::<f64>().ok()
            }
        }
        PriceRule::WholeEuros => primary.trim().replace('.', "").parse::<f64>().ok(),
    };
    parsed.filter(|price| *price >= 0.0)
}
