/// Characters stripped from both ends of every field and line.
pub const TRIM_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

/// One course as read from a catalog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Upper-cased course code, unique within a catalog.
    pub number: String,
    pub title: String,
    /// Prerequisite codes in file order; not checked against the catalog.
    pub prereqs: Vec<String>,
}

pub fn trim_field(value: &str) -> &str {
    value.trim_matches(&TRIM_CHARS[..])
}

/// Normalizes a course code for identity and comparison.
pub fn normalize_code(code: &str) -> String {
    trim_field(code).to_ascii_uppercase()
}
