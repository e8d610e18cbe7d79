// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.
//!
//! Only the structure the rules look at is extracted: header fields, body
//! and footer. Headers that do not follow the `type(scope)!: subject` shape
//! still parse; they simply carry no type, scope or subject.

use crate::error::{CommitError, LintError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Regex for the conventional commit header. The type is ASCII-only;
    /// the scope is everything between the first `(` and the last `)`.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[A-Za-z0-9_]*)(?:\((?P<scope>.*)\))?(?P<breaking>!)?: (?P<subject>.*)$"
    ).unwrap();

    /// Regex for the first line of a footer paragraph (git trailer style).
    static ref TRAILER_REGEX: Regex = Regex::new(
        r"^(?:BREAKING[ -]CHANGE|[\w-]+)(?:: | #)"
    ).unwrap();
}

/// Marker git writes above the diff in verbose commit messages.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// Fields of a commit message that rules can inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitField {
    Type,
    Scope,
    Subject,
    Body,
    Footer,
}

impl CommitField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitField::Type => "type",
            CommitField::Scope => "scope",
            CommitField::Subject => "subject",
            CommitField::Body => "body",
            CommitField::Footer => "footer",
        }
    }
}

impl fmt::Display for CommitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed commit message.
///
/// `Some("")` and `None` are different: `feat(): x` has an empty scope,
/// `feat: x` has none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line of the message.
    pub header: String,
    /// Commit type (feat, fix, etc.).
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line after the colon.
    pub subject: Option<String>,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer (references, breaking changes, etc.).
    pub footer: Option<String>,
    /// Whether this is a breaking change.
    pub is_breaking: bool,
}

impl CommitMessage {
    /// Create a new commit message.
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        let mut message = Self {
            commit_type: Some(commit_type.into()),
            subject: Some(subject.into()),
            ..Self::default()
        };
        message.refresh_header();
        message
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self.refresh_header();
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body_str = body.into();
        if !body_str.is_empty() {
            self.body = Some(body_str);
        }
        self
    }

    /// Set the footer.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        let footer_str = footer.into();
        if !footer_str.is_empty() {
            self.footer = Some(footer_str);
        }
        self
    }

    /// Set the breaking flag.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.is_breaking = breaking;
        self.refresh_header();
        self
    }

    /// Value of a field, if present.
    pub fn field(&self, field: CommitField) -> Option<&str> {
        match field {
            CommitField::Type => self.commit_type.as_deref(),
            CommitField::Scope => self.scope.as_deref(),
            CommitField::Subject => self.subject.as_deref(),
            CommitField::Body => self.body.as_deref(),
            CommitField::Footer => self.footer.as_deref(),
        }
    }

    /// Parse a commit message from a string.
    ///
    /// Git comment lines are dropped first, as is everything below the
    /// scissors line of a verbose commit.
    pub fn parse(message: &str) -> Result<Self> {
        let cleaned = strip_comments(message);
        let cleaned = cleaned.trim();

        if cleaned.is_empty() {
            return Err(LintError::Commit(CommitError::EmptyMessage));
        }

        let mut lines = cleaned.lines();
        let header = lines.next().unwrap_or_default().trim_end().to_string();
        let rest: Vec<&str> = lines.collect();
        let (body, footer) = split_sections(&rest);

        let mut parsed = Self {
            header,
            body,
            footer,
            ..Self::default()
        };

        if let Some(captures) = HEADER_REGEX.captures(&parsed.header) {
            parsed.commit_type = captures.name("type").map(|m| m.as_str().to_string());
            parsed.scope = captures.name("scope").map(|m| m.as_str().to_string());
            parsed.subject = captures.name("subject").map(|m| m.as_str().to_string());
            parsed.is_breaking = captures.name("breaking").is_some();
        } else {
            tracing::debug!("Header is not conventional: {:?}", parsed.header);
        }

        parsed.is_breaking |= parsed
            .footer
            .as_deref()
            .map(|f| f.contains("BREAKING CHANGE") || f.contains("BREAKING-CHANGE"))
            .unwrap_or(false);

        Ok(parsed)
    }

    /// Format the commit message as a string.
    pub fn format(&self) -> String {
        let mut result = self.header.clone();

        if let Some(ref body) = self.body {
            result.push_str("\n\n");
            result.push_str(body);
        }

        if let Some(ref footer) = self.footer {
            result.push_str("\n\n");
            result.push_str(footer);
        }

        result
    }

    /// Rebuild the header from the structured fields.
    fn refresh_header(&mut self) {
        let mut header = String::new();

        if let Some(ref commit_type) = self.commit_type {
            header.push_str(commit_type);

            if let Some(ref scope) = self.scope {
                header.push('(');
                header.push_str(scope);
                header.push(')');
            }

            if self.is_breaking {
                header.push('!');
            }

            header.push_str(": ");
        }

        if let Some(ref subject) = self.subject {
            header.push_str(subject);
        }

        self.header = header;
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Drop git comment lines and any verbose diff below the scissors line.
fn strip_comments(message: &str) -> String {
    message
        .lines()
        .take_while(|line| *line != SCISSORS)
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split the lines after the header into body and footer.
///
/// The footer starts at the first paragraph that opens with a trailer.
fn split_sections(lines: &[&str]) -> (Option<String>, Option<String>) {
    let mut footer_start = None;
    let mut at_paragraph_start = true;

    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            at_paragraph_start = true;
            continue;
        }
        if at_paragraph_start && TRAILER_REGEX.is_match(line) {
            footer_start = Some(i);
            break;
        }
        at_paragraph_start = false;
    }

    let (body_lines, footer_lines) = match footer_start {
        Some(i) => lines.split_at(i),
        None => (lines, &[][..]),
    };

    (join_section(body_lines), join_section(footer_lines))
}

fn join_section(lines: &[&str]) -> Option<String> {
    let text = lines.join("\n");
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
