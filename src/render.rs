//! Result rendering: the validity banner and the two truncated lists.

use serde::{Deserialize, Serialize};

use crate::protocol::{Banner, BannerStyle, ListView, ResultView};
use crate::submission::ValidationResult;

/// Number of items a collapsed list shows.
pub const MAX_SHOWN: usize = 10;

/// Which list of the result a toggle or view refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    #[serde(rename = "errors")]
    Error,
    #[serde(rename = "warnings")]
    Warning,
}

impl ListKind {
    fn noun(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Expand/collapse state of one list. Starts collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruncatedList {
    expanded: bool,
}

impl TruncatedList {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between collapsed and expanded.
    ///
    /// Lists at or under the cap have no control, so the toggle is refused
    /// and `false` is returned.
    pub fn toggle(&mut self, len: usize) -> bool {
        if len <= MAX_SHOWN {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }

    /// Render `items`, or nothing when the list is empty.
    pub fn render(&self, kind: ListKind, items: &[String]) -> Option<ListView> {
        if items.is_empty() {
            return None;
        }

        let count = items.len();
        let noun = kind.noun();
        let plural = if count == 1 { "" } else { "s" };
        let truncated = count > MAX_SHOWN && !self.expanded;

        let shown = if truncated { &items[..MAX_SHOWN] } else { items };
        let summary = if truncated {
            format!("{count} {noun}{plural}, showing first {MAX_SHOWN}.")
        } else {
            format!("{count} {noun}{plural}.")
        };
        let toggle = (count > MAX_SHOWN).then(|| {
            if self.expanded {
                "Show fewer".to_string()
            } else {
                "Show more".to_string()
            }
        });

        Some(ListView {
            kind,
            summary,
            items: shown.to_vec(),
            expanded: self.expanded,
            toggle,
        })
    }
}

/// The displayed result together with its per-list display state.
///
/// Replacing the displayed result replaces this value, so expansion never
/// carries over from one result to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDisplay {
    result: ValidationResult,
    errors: TruncatedList,
    warnings: TruncatedList,
}

impl ResultDisplay {
    pub fn new(result: ValidationResult) -> Self {
        Self {
            result,
            errors: TruncatedList::default(),
            warnings: TruncatedList::default(),
        }
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn list(&self, kind: ListKind) -> &TruncatedList {
        match kind {
            ListKind::Error => &self.errors,
            ListKind::Warning => &self.warnings,
        }
    }

    pub fn toggle(&mut self, kind: ListKind) -> bool {
        match kind {
            ListKind::Error => self.errors.toggle(self.result.errors.len()),
            ListKind::Warning => self.warnings.toggle(self.result.warnings.len()),
        }
    }

    pub fn render(&self) -> ResultView {
        let valid = self.result.valid;
        let verdict = if valid { "valid" } else { "not valid" };
        ResultView {
            banner: Banner {
                valid,
                schema: self.result.schema.clone(),
                year: self.result.year,
                text: format!("This document is {verdict} {} JSON.", self.result.schema),
                style: if valid {
                    BannerStyle::Success
                } else {
                    BannerStyle::Danger
                },
            },
            errors: self.errors.render(ListKind::Error, &self.result.errors),
            warnings: self.warnings.render(ListKind::Warning, &self.result.warnings),
        }
    }
}

/// Render the displayed result, if any.
pub fn render(display: Option<&ResultDisplay>) -> Option<ResultView> {
    display.map(ResultDisplay::render)
}
