//! Currency rendering for insight text and milestone labels.
//!
//! Amounts render in Indian-market conventions: the short form abbreviates
//! to thousands (K), lakhs (L), and crores (Cr); the full form applies
//! Indian digit grouping (1,23,45,678). Richer locale handling is a
//! presentation concern and stays out of the engine.

const RUPEE: &str = "\u{20b9}";

/// Abbreviated amount: ₹1.2Cr, ₹4.5L, ₹12.0K, or the grouped value when
/// below a thousand.
pub fn format_amount_short(amount: f64) -> String {
    if amount >= 10_000_000.0 {
        format!("{}{:.1}Cr", RUPEE, amount / 10_000_000.0)
    } else if amount >= 100_000.0 {
        format!("{}{:.1}L", RUPEE, amount / 100_000.0)
    } else if amount >= 1_000.0 {
        format!("{}{:.1}K", RUPEE, amount / 1_000.0)
    } else {
        format_amount_full(amount)
    }
}

/// Whole-rupee amount with Indian digit grouping.
pub fn format_amount_full(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let grouped = group_indian(&whole.to_string());
    if negative {
        format!("-{}{}", RUPEE, grouped)
    } else {
        format!("{}{}", RUPEE, grouped)
    }
}

// Indian grouping keeps the last three digits together and pairs the rest:
// 12345678 -> 1,23,45,678.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::new();
    let mut count = 0;
    for ch in head.chars().rev() {
        if count != 0 && count % 2 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    format!("{},{}", grouped, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_uses_indian_abbreviations() {
        assert_eq!(format_amount_short(25_000_000.0), "₹2.5Cr");
        assert_eq!(format_amount_short(450_000.0), "₹4.5L");
        assert_eq!(format_amount_short(12_000.0), "₹12.0K");
        assert_eq!(format_amount_short(999.0), "₹999");
    }

    #[test]
    fn full_form_groups_indian_style() {
        assert_eq!(format_amount_full(12_345_678.0), "₹1,23,45,678");
        assert_eq!(format_amount_full(100_000.0), "₹1,00,000");
        assert_eq!(format_amount_full(1_234.0), "₹1,234");
        assert_eq!(format_amount_full(500.0), "₹500");
        assert_eq!(format_amount_full(-42_000.0), "-₹42,000");
    }

    #[test]
    fn full_form_rounds_to_whole_rupees() {
        assert_eq!(format_amount_full(999.6), "₹1,000");
    }
}
