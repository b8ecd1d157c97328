//! Splits a raw line stream into labeled sections.
//!
//! A single forward scan with one piece of cursor state (the current label):
//! header lines move the cursor, everything else appends to the current
//! section. Blank lines are dropped.

use crate::parser::vocabulary::{match_header, HEADER_LABEL};

/// Ordered mapping from section label to its content lines.
///
/// Iteration order is the order of *first* encounter in the source document,
/// and that order drives rendering. The `HEADER` sentinel always exists and
/// is always first, even when it ends up with no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, Vec<String>)>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self {
            entries: vec![(HEADER_LABEL.to_string(), Vec::new())],
        }
    }

    /// Opens a fresh, empty content list under `label`.
    ///
    /// If the label was already seen, its content is *replaced*, not merged,
    /// and it keeps its original position in iteration order. The replacement
    /// is an intentional quirk of the segmentation contract, not a bug.
    pub fn open(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, lines)) => lines.clear(),
            None => self.entries.push((label.to_string(), Vec::new())),
        }
    }

    /// Appends a content line to `label`, creating the section if needed.
    pub fn push_line(&mut self, label: &str, line: &str) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, lines)) => lines.push(line.to_string()),
            None => self
                .entries
                .push((label.to_string(), vec![line.to_string()])),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, lines)| lines.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(label, lines)| (label.as_str(), lines.as_slice()))
    }

    /// Number of labels present (including the `HEADER` sentinel).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SectionMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Partitions `lines` into labeled sections.
///
/// Each non-blank line either switches the current section (whole-line header
/// match, see [`match_header`]) or is appended to it. A document with no
/// recognized headers comes back as a single `HEADER` section.
pub fn segment<I, S>(lines: I) -> SectionMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sections = SectionMap::new();
    let mut current = HEADER_LABEL.to_string();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        match match_header(line) {
            Some(phrase) => {
                current = phrase.to_ascii_uppercase();
                sections.open(&current);
            }
            None => sections.push_line(&current, line),
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(sections: &SectionMap) -> Vec<&str> {
        sections.iter().map(|(l, _)| l).collect()
    }

    #[test]
    fn test_basic_resume_segmentation() {
        let sections = segment([
            "John Doe",
            "Contact:",
            "john@example.com",
            "555-123-4567",
            "Skills",
            "Python",
            "SQL",
        ]);

        assert_eq!(labels(&sections), vec!["HEADER", "CONTACT", "SKILLS"]);
        assert_eq!(sections.get("HEADER").unwrap(), ["John Doe"]);
        assert_eq!(
            sections.get("CONTACT").unwrap(),
            ["john@example.com", "555-123-4567"]
        );
        assert_eq!(sections.get("SKILLS").unwrap(), ["Python", "SQL"]);
    }

    #[test]
    fn test_no_headers_keeps_everything_under_header() {
        let sections = segment(["line one", "line two", "line three"]);
        assert!(!sections.is_empty());
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections.get("HEADER").unwrap(),
            ["line one", "line two", "line three"]
        );
    }

    #[test]
    fn test_header_sentinel_exists_even_when_empty() {
        let sections = segment(["Education", "BSc Computer Science"]);
        assert_eq!(labels(&sections), vec!["HEADER", "EDUCATION"]);
        assert!(sections.get("HEADER").unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let sections = segment(["", "   ", "John Doe", "", "Skills", "", "Rust"]);
        assert_eq!(sections.get("HEADER").unwrap(), ["John Doe"]);
        assert_eq!(sections.get("SKILLS").unwrap(), ["Rust"]);
    }

    #[test]
    fn test_reopened_header_replaces_content_and_keeps_position() {
        // Known intentional quirk: a repeated header truncates what was
        // collected earlier under that label instead of merging, while the
        // label stays at its first-encounter position.
        let sections = segment([
            "Skills",
            "Python",
            "Education",
            "BSc",
            "Skills",
            "Rust",
        ]);

        assert_eq!(labels(&sections), vec!["HEADER", "SKILLS", "EDUCATION"]);
        assert_eq!(sections.get("SKILLS").unwrap(), ["Rust"]);
        assert_eq!(sections.get("EDUCATION").unwrap(), ["BSc"]);
    }

    #[test]
    fn test_labels_are_uppercased_phrases() {
        let sections = segment(["Work Experience:", "Engineer at Acme"]);
        assert_eq!(
            sections.get("WORK EXPERIENCE").unwrap(),
            ["Engineer at Acme"]
        );
    }

    #[test]
    fn test_segment_from_text_lines() {
        let text = "John Doe\n\nContact\njohn@example.com\n";
        let sections = segment(text.lines());
        assert_eq!(labels(&sections), vec!["HEADER", "CONTACT"]);
    }

    #[test]
    fn test_garbage_lines_are_kept_as_content() {
        // OCR noise is ordinary content at this layer.
        let sections = segment(["Skills", "###$%^ garbled ocr ###"]);
        assert_eq!(sections.get("SKILLS").unwrap(), ["###$%^ garbled ocr ###"]);
    }
}
