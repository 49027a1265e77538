//! Canonical forms for free-form attribute input.
//!
//! Table keys are stored in canonical form. Lookups never normalise on their
//! own, so anything that accepts user input (forms, the CLI) runs it through
//! one of these first.

/// Trim, upper-case and collapse internal whitespace runs to one space.
///
/// `" land   rover "` becomes `"LAND ROVER"`.
pub fn canonical_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_ascii_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical form for enumerated tokens such as colors and modifications.
///
/// Like [`canonical_name`], with spaces and hyphens folded to `_`:
/// `"light green"` and `"Light-Green"` both become `"LIGHT_GREEN"`.
pub fn canonical_token(raw: &str) -> String {
    canonical_name(raw)
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_collapses_whitespace() {
        assert_eq!(canonical_name("  3 series\te46  "), "3 SERIES E46");
        assert_eq!(canonical_name(""), "");
    }

    #[test]
    fn canonical_name_keeps_punctuation() {
        assert_eq!(canonical_name("c-crosser"), "C-CROSSER");
        assert_eq!(canonical_name("80 iii/iv sedan"), "80 III/IV SEDAN");
    }

    #[test]
    fn canonical_token_folds_separators() {
        assert_eq!(canonical_token("light green"), "LIGHT_GREEN");
        assert_eq!(canonical_token("Solar-Control"), "SOLAR_CONTROL");
        assert_eq!(canonical_token("blue"), "BLUE");
    }
}
