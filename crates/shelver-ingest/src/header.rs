//! Header normalization and column aliases.
//!
//! The rule CSVs in the wild use varying spellings ("Sub-section",
//! "Activity / Step", "fn"). Headers are folded to lowercase snake case and
//! then mapped through a small alias table so the rest of the crate can
//! address columns by one canonical name.

/// Fold a raw header to lowercase with non-alphanumeric runs collapsed
/// to a single underscore. Strips a UTF-8 BOM if present.
pub fn normalize_header(raw: &str) -> String {
    let cleaned = raw.trim_matches('\u{feff}').trim().to_ascii_lowercase();
    let mut normalized = String::with_capacity(cleaned.len());
    let mut pending_separator = false;
    for ch in cleaned.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !normalized.is_empty() {
                normalized.push('_');
            }
            pending_separator = false;
            normalized.push(ch);
        } else {
            pending_separator = true;
        }
    }
    normalized
}

/// Map a normalized header to its canonical column name.
pub fn canonical_column(normalized: &str) -> &str {
    match normalized {
        "fn" | "file" | "filename" | "orig_filename" => "orig_filename",
        "sub_section" => "subsection",
        "activity" | "activity_step" => "activity_step",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Sub-section"), "sub_section");
        assert_eq!(normalize_header("Activity / Step"), "activity_step");
        assert_eq!(normalize_header("  Unit "), "unit");
        assert_eq!(normalize_header("\u{feff}book"), "book");
    }

    #[test]
    fn test_canonical_column_aliases() {
        assert_eq!(canonical_column("fn"), "orig_filename");
        assert_eq!(canonical_column("filename"), "orig_filename");
        assert_eq!(canonical_column("sub_section"), "subsection");
        assert_eq!(canonical_column("question"), "question");
    }
}
