//! Static configuration for section detection and contact-line classification.
//!
//! The header list and the phone pattern are data, not control flow: tests
//! enumerate them, and extending coverage means appending an entry here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Label for content that precedes the first recognized section header.
pub const HEADER_LABEL: &str = "HEADER";

/// Known section-header phrases, checked in declared order with first match
/// winning. Order matters only for ambiguous near-duplicates ("experience" vs
/// "work experience"); matching is whole-line, so collisions are rare, but the
/// declared order is kept stable on purpose.
pub const SECTION_HEADERS: &[&str] = &[
    "education",
    "academic background",
    "qualifications",
    "experience",
    "work experience",
    "employment",
    "projects",
    "personal projects",
    "technical skills",
    "skills",
    "key skills",
    "contact",
    "contact information",
    "references",
    "hackathons",
    "extracurricular activities",
    "activities",
];

/// Phone-shaped substring: optional `+`, a digit, then 7+ of digits, spaces,
/// hyphens, or parens, ending on a digit (9 characters minimum overall).
pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s\-\(\)]{7,}\d").unwrap());

/// Tests a single line against the header vocabulary.
///
/// The line must equal a vocabulary phrase case-insensitively after trimming
/// surrounding whitespace and at most one trailing colon. Returns the matched
/// phrase (the canonical lowercase form), or `None` for ordinary content.
pub fn match_header(line: &str) -> Option<&'static str> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
    SECTION_HEADERS
        .iter()
        .find(|phrase| trimmed.eq_ignore_ascii_case(phrase))
        .copied()
}
