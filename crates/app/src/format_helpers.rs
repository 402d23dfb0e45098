//! Display formatting for prices, dates and shares.

use chrono::NaiveDateTime;

/// Tugrik sign used on every price.
pub const CURRENCY: &str = "₮";

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `2500000` → `₮2,500,000`.
pub fn format_mnt(amount: u64) -> String {
    format!("{CURRENCY}{}", group_thousands(amount))
}

/// Short form for stat tiles: `45200000` → `₮45.2M`, `1500` → `₮1.5K`.
/// The unit is picked after rounding, so `999950` reads `₮1.0M`.
pub fn format_mnt_compact(amount: u64) -> String {
    // (scale, smallest amount that rounds to 1.0 in that unit, suffix)
    const UNITS: [(u64, u64, &str); 3] = [
        (1_000_000_000, 999_950_000, "B"),
        (1_000_000, 999_950, "M"),
        (1_000, 1_000, "K"),
    ];

    for (scale, threshold, suffix) in UNITS {
        if amount >= threshold {
            return format!("{CURRENCY}{:.1}{suffix}", amount as f64 / scale as f64);
        }
    }
    format!("{CURRENCY}{amount}")
}

/// "Jan 15, 2024".
pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// "Jan 15, 2024 10:30".
pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format("%b %-d, %Y %H:%M").to_string()
}

/// `12.5` → `12.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Comma-grouped plain count, used for listing totals.
pub fn format_count(n: u64) -> String {
    group_thousands(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_mnt(0), "₮0");
        assert_eq!(format_mnt(999), "₮999");
        assert_eq!(format_mnt(2_500_000), "₮2,500,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn compact_prices() {
        assert_eq!(format_mnt_compact(45_200_000), "₮45.2M");
        assert_eq!(format_mnt_compact(1_800_000), "₮1.8M");
        assert_eq!(format_mnt_compact(1_500), "₮1.5K");
        assert_eq!(format_mnt_compact(750), "₮750");
    }

    #[test]
    fn compact_prices_roll_over_to_next_unit() {
        assert_eq!(format_mnt_compact(999), "₮999");
        assert_eq!(format_mnt_compact(1_000), "₮1.0K");
        assert_eq!(format_mnt_compact(999_949), "₮999.9K");
        assert_eq!(format_mnt_compact(999_950), "₮1.0M");
        assert_eq!(format_mnt_compact(999_999_999), "₮1.0B");
        assert_eq!(format_mnt_compact(2_760_000_000), "₮2.8B");
    }

    #[test]
    fn human_dates() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(9, 3, 0)
            .unwrap();
        assert_eq!(format_date(&dt), "Jan 5, 2024");
        assert_eq!(format_date_time(&dt), "Jan 5, 2024 09:03");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
