use std::fmt;

use serde::Serialize;

use crate::render::ListKind;

// ---------------------------------------------------------------------------
// Outbound frames
// ---------------------------------------------------------------------------

/// One outbound frame, written as a single line of JSON (or as text).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Frame {
    View(View),
    Links(Links),
    Error { message: String },
}

impl Frame {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Full page snapshot: both panels plus the displayed result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub file: PanelView,
    pub textarea: PanelView,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub schema: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_bytes: Option<usize>,
    pub busy: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub banner: Banner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ListView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<ListView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerStyle {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub valid: bool,
    pub schema: String,
    pub year: i64,
    pub text: String,
    pub style: BannerStyle,
}

/// One rendered error or warning list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub kind: ListKind,
    pub summary: String,
    pub items: Vec<String>,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle: Option<String>,
}

/// Navigation links: raw schema dumps and the documentation page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Links {
    pub schemas: Vec<SchemaLink>,
    pub docs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaLink {
    pub value: String,
    pub label: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(view) => fmt::Display::fmt(view, f),
            Self::Links(links) => fmt::Display::fmt(links, f),
            Self::Error { message } => writeln!(f, "error: {message}"),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== file ==")?;
        fmt::Display::fmt(&self.file, f)?;
        writeln!(f, "== textarea ==")?;
        fmt::Display::fmt(&self.textarea, f)?;
        if let Some(result) = &self.result {
            writeln!(f, "== result ==")?;
            fmt::Display::fmt(result, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.errors.is_empty() {
            writeln!(f, "Please correct these error(s):")?;
            for err in &self.errors {
                writeln!(f, "  - {err}")?;
            }
        }
        writeln!(f, "schema: {}", self.schema)?;
        writeln!(f, "year: {}", self.year)?;
        if let Some(selected) = &self.selected_file {
            writeln!(f, "{selected}")?;
        }
        if let Some(bytes) = self.json_bytes {
            writeln!(f, "json: {bytes} bytes")?;
        }
        if self.busy {
            writeln!(f, "validating...")?;
        }
        Ok(())
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.banner.text)?;
        if let Some(errors) = &self.errors {
            fmt::Display::fmt(errors, f)?;
        }
        if let Some(warnings) = &self.warnings {
            fmt::Display::fmt(warnings, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        for item in &self.items {
            writeln!(f, "  - {item}")?;
        }
        if let Some(toggle) = &self.toggle {
            writeln!(f, "{toggle}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Links {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dump schemas:")?;
        for link in &self.schemas {
            writeln!(f, "  {}: {}", link.label, link.url)?;
        }
        writeln!(f, "Docs: {}", self.docs)
    }
}
