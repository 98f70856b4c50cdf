//! Locale rendering of amounts for the bn-BD audience: Bengali numerals,
//! Indian-system digit grouping, no fractional digits.

/// Bengali numerals indexed by their ASCII value.
pub const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Suffix appended to mahr amounts on the board.
pub const TAKA_SUFFIX: &str = " টাকা";

/// Currency sign prefix used on the share card's per-gram line.
pub const TAKA_SIGN_PREFIX: &str = "৳ ";

/// Format a number the way `Intl.NumberFormat("bn-BD", {maximumFractionDigits: 0})`
/// renders it: rounded to the nearest whole unit, grouped last-three-then-pairs,
/// Bengali digits. Display-only rounding; stored values keep full precision.
pub fn format_bengali_int(value: f64) -> String {
    let rounded = value.round() as i64;
    let grouped = group_indian(&rounded.unsigned_abs().to_string());
    let localized: String = grouped
        .chars()
        .map(|c| match c {
            '0'..='9' => BENGALI_DIGITS[(c as u8 - b'0') as usize],
            other => other,
        })
        .collect();

    if rounded < 0 { format!("-{}", localized) } else { localized }
}

/// A formatted amount with the টাকা suffix, as written into the result slots.
pub fn format_taka(value: f64) -> String {
    format!("{}{}", format_bengali_int(value), TAKA_SUFFIX)
}

/// Indian-system grouping over an ASCII digit string: the last three digits
/// form one group, everything before it is grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_last_three_then_pairs() {
        assert_eq!(group_indian("107813"), "1,07,813");
        assert_eq!(group_indian("1234567"), "12,34,567");
        assert_eq!(group_indian("813"), "813");
    }

    #[test]
    fn rounds_and_localizes() {
        assert_eq!(format_bengali_int(107_813.4), "১,০৭,৮১৩");
        assert_eq!(format_bengali_int(0.4), "০");
    }
}
