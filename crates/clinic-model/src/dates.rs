//! Date shape handling for import cells.
//!
//! The import format accepts two shapes: ISO (`YYYY-MM-DD`) and day-first
//! (`DD/MM/YYYY`). These checks are on shape only; calendar validity is the
//! record store's concern once a procedure is created.

/// True when `value` is exactly `YYYY-MM-DD`.
pub fn is_iso_date(value: &str) -> bool {
    matches_digit_pattern(value, &[4, 2, 2], '-')
}

/// True when `value` is exactly `DD/MM/YYYY`.
pub fn is_day_first_date(value: &str) -> bool {
    matches_digit_pattern(value, &[2, 2, 4], '/')
}

/// Rewrite a day-first date to ISO. ISO input passes through unchanged, and
/// so does anything unrecognized (validation rejects it later).
pub fn normalize_date(value: &str) -> String {
    if is_day_first_date(value) {
        let mut parts = value.split('/');
        // Split cannot fail after the shape check.
        let day = parts.next().unwrap_or_default();
        let month = parts.next().unwrap_or_default();
        let year = parts.next().unwrap_or_default();
        return format!("{year}-{month}-{day}");
    }
    value.to_string()
}

fn matches_digit_pattern(value: &str, groups: &[usize], separator: char) -> bool {
    let mut parts = value.split(separator);
    for expected_len in groups {
        let Some(part) = parts.next() else {
            return false;
        };
        if part.len() != *expected_len || !part.chars().all(|ch| ch.is_ascii_digit()) {
            return false;
        }
    }
    parts.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_shape() {
        assert!(is_iso_date("2024-03-15"));
        assert!(!is_iso_date("2024-3-15"));
        assert!(!is_iso_date("15/03/2024"));
        assert!(!is_iso_date("2024-03-15 "));
        assert!(!is_iso_date(""));
    }

    #[test]
    fn day_first_shape() {
        assert!(is_day_first_date("15/03/2024"));
        assert!(!is_day_first_date("2024-03-15"));
        assert!(!is_day_first_date("15/3/2024"));
    }

    #[test]
    fn normalize_rewrites_day_first_only() {
        assert_eq!(normalize_date("15/03/2024"), "2024-03-15");
        assert_eq!(normalize_date("2024-03-15"), "2024-03-15");
        assert_eq!(normalize_date("15-03-2024"), "15-03-2024");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn normalized_output_passes_iso_check() {
        assert!(is_iso_date(&normalize_date("01/12/2024")));
    }
}
