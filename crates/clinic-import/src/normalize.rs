//! Name normalization for entity identity.
//!
//! Doctors, patients, and procedure types have no natural key besides their
//! name, so identity is decided on a normalized form: trimmed, inner
//! whitespace collapsed, case-folded. `"Dr. Ana"` and `" dr. ana "` are the
//! same doctor.

/// Identity key for a name-based entity.
pub fn normalize_name(name: &str) -> String {
    display_name(name).to_lowercase()
}

/// Display form kept when an entity is first created: trimmed and
/// whitespace-collapsed, original casing preserved.
pub fn display_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_whitespace_variants_share_a_key() {
        assert_eq!(normalize_name("Dr. Ana"), normalize_name(" dr. ana "));
        assert_eq!(normalize_name("Dr.  Ana"), normalize_name("Dr. Ana"));
    }

    #[test]
    fn distinct_names_keep_distinct_keys() {
        assert_ne!(normalize_name("Dr. Ana"), normalize_name("Dr. Ana Paula"));
    }

    #[test]
    fn display_form_keeps_casing() {
        assert_eq!(display_name("  Dr.  Ana  "), "Dr. Ana");
    }
}
