//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output is an inventory of the page, not of the content directory. Every
//! entry is shown by its semantic identity (positional index + title) with
//! secondary detail on indented lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Profile
//!     Ada Example · Web Developer
//!     3 phrases
//!
//! About Me
//!     I'm a web developer who enjoys turning ideas into fast...
//!
//! Skills
//! 001 Front-End (5 skills)
//! 002 Back-End (3 skills)
//!
//! Education
//! 001 Bachelor of Science in Computer Science & Engineering
//!     2025 - 2028
//!
//! Certifications
//! 001 Responsive Web Design
//!     Issuer: freeCodeCamp
//!
//! Projects (3 shown of 4)
//! 001 Event Hub
//! 004 Hero Apps (hidden)
//!
//! Contact
//!     Relay: https://api.emailjs.com/api/v1.0/email/send
//!     Credentials: configured
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//!     site.css
//!     site.js
//!
//! Assets
//!     favicon.svg
//!
//! Generated 1 page, 2 files, 1 asset
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::contact::{MissingCredential, RelayCredentials};
use crate::content::Content;
use crate::generate::GenerateReport;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Front-End (5 skills)
/// 001 Event Hub
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(
    content: &Content,
    credentials: Result<&RelayCredentials, &MissingCredential>,
) -> Vec<String> {
    let mut lines = Vec::new();
    let profile = &content.profile;

    lines.push("Profile".to_string());
    lines.push(format!("{}{} · {}", indent(1), profile.name, profile.role));
    lines.push(format!(
        "{}{}",
        indent(1),
        plural(profile.phrases.len(), "phrase", "phrases")
    ));

    if let Some(about) = &content.about_html {
        let plain = strip_html_tags(about);
        let first = plain.split_whitespace().collect::<Vec<_>>().join(" ");
        lines.push(String::new());
        lines.push("About Me".to_string());
        lines.push(format!("{}{}", indent(1), truncate_desc(&first, 60)));
    }

    lines.push(String::new());
    lines.push("Skills".to_string());
    for (i, group) in content.skills.iter().enumerate() {
        let count = plural(group.skills.len(), "skill", "skills");
        lines.push(entity_header(i + 1, &group.title, Some(&count)));
    }

    lines.push(String::new());
    lines.push("Education".to_string());
    for (i, entry) in content.education.iter().enumerate() {
        lines.push(entity_header(i + 1, &entry.degree, None));
        lines.push(format!("{}{}", indent(1), entry.period));
    }

    lines.push(String::new());
    lines.push("Certifications".to_string());
    for (i, cert) in content.certifications.iter().enumerate() {
        lines.push(entity_header(i + 1, &cert.title, None));
        lines.push(format!("{}Issuer: {}", indent(1), cert.issuer));
    }

    let preview = content.config.projects.preview;
    let total = content.projects.len();
    lines.push(String::new());
    lines.push(format!(
        "Projects ({} shown of {})",
        preview.min(total),
        total
    ));
    for (i, project) in content.projects.iter().enumerate() {
        let detail = (i >= preview).then_some("hidden");
        lines.push(entity_header(i + 1, &project.title, detail));
    }

    lines.push(String::new());
    lines.push("Contact".to_string());
    lines.push(format!("{}Relay: {}", indent(1), content.config.contact.endpoint));
    match credentials {
        Ok(_) => lines.push(format!("{}Credentials: configured", indent(1))),
        Err(missing) => lines.push(format!("{}Credentials: {}", indent(1), missing)),
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(
    content: &Content,
    credentials: Result<&RelayCredentials, &MissingCredential>,
) {
    for line in format_check_output(content, credentials) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pages = report.pages.iter();

    if let Some(index) = pages.next() {
        lines.push(format!("Home → {}", index));
    }
    let files: Vec<&String> = pages.collect();
    for file in &files {
        lines.push(format!("{}{}", indent(1), file));
    }

    if !report.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("{}{}", indent(1), asset));
        }
    }

    if !report.relay_configured {
        lines.push(String::new());
        lines.push(
            "Contact form will report a configuration error (relay credentials missing)"
                .to_string(),
        );
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 page, {}, {}",
        plural(files.len(), "file", "files"),
        plural(report.assets.len(), "asset", "assets")
    ));
    lines
}

pub fn print_build_output(report: &GenerateReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
