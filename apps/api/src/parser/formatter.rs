//! Renders a `SectionMap` back into a single displayable text document.

use crate::parser::segmenter::SectionMap;
use crate::parser::vocabulary::{HEADER_LABEL, PHONE_RE};

/// Assembles the formatted document: sections in map order, empty sections
/// skipped, surrounding whitespace trimmed.
///
/// Rendering rules per section:
/// - `HEADER`: first line promoted as a title, remaining lines as body,
///   no visible label.
/// - labels containing "contact": each line classified and prefixed
///   (`Phone:` / `Email:` / `LinkedIn:` / `GitHub:`), see
///   [`classify_contact_line`].
/// - everything else: a `\n\n<LABEL>\n\n` banner followed by bulleted lines.
pub fn format_sections(sections: &SectionMap) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for (label, content) in sections.iter() {
        if content.is_empty() {
            continue;
        }

        if label == HEADER_LABEL {
            blocks.push(format!("{}\n\n", content[0]));
            if content.len() > 1 {
                blocks.push(format!("{}\n", content[1..].join("\n")));
            }
            continue;
        }

        blocks.push(format!("\n\n{label}\n\n"));

        if label.to_lowercase().contains("contact") {
            let classified: Vec<String> =
                content.iter().map(|line| classify_contact_line(line)).collect();
            blocks.push(classified.join("\n"));
        } else {
            let bulleted: Vec<String> =
                content.iter().map(|line| format!("• {line}")).collect();
            blocks.push(bulleted.join("\n"));
        }
    }

    blocks.concat().trim().to_string()
}

/// Prefixes a contact-section line by the first matching pattern:
/// phone shape, then `@`, then `linkedin.com`, then `github.com`.
/// Lines matching none stay unprefixed.
fn classify_contact_line(line: &str) -> String {
    let lower = line.to_lowercase();
    if PHONE_RE.is_match(line) {
        format!("Phone: {line}")
    } else if line.contains('@') {
        format!("Email: {line}")
    } else if lower.contains("linkedin.com") {
        format!("LinkedIn: {line}")
    } else if lower.contains("github.com") {
        format!("GitHub: {line}")
    } else {
        line.to_string()
    }
}
