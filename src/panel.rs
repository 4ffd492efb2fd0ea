use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::{DEFAULT_SCHEMA, DEFAULT_YEAR};
use crate::protocol::PanelView;
use crate::submission::{SubmitPayload, SubmitRequest};
use crate::validator::{valid_file, valid_json, valid_schema, valid_year};

/// Which of the two input panels an event addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    File,
    Textarea,
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Textarea => f.write_str("textarea"),
        }
    }
}

/// Editable panel field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Schema,
    Year,
    File,
    Json,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema => f.write_str("schema"),
            Self::Year => f.write_str("year"),
            Self::File => f.write_str("file"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("field `{field}` does not belong to the {panel} panel")]
    WrongPanel { panel: PanelId, field: Field },
}

/// Messages collected by a failed local check, in check order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} local validation error(s)", .0.len())]
pub struct LocalErrors(pub Vec<String>);

/// What a panel submits: a file selection or pasted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Files(Vec<PathBuf>),
    Text(String),
}

/// State owned by one input panel.
///
/// `schema` and `year` hold the raw control values; they only become typed
/// once a submit attempt passes the local checks.
#[derive(Debug, Clone)]
pub struct PanelState {
    id: PanelId,
    pub schema: String,
    pub year: String,
    pub payload: Payload,
    in_flight: usize,
    errors: Vec<String>,
}

impl PanelState {
    pub fn new(id: PanelId) -> Self {
        let payload = match id {
            PanelId::File => Payload::Files(Vec::new()),
            PanelId::Textarea => Payload::Text(String::new()),
        };
        Self {
            id,
            schema: DEFAULT_SCHEMA.to_string(),
            year: DEFAULT_YEAR.to_string(),
            payload,
            in_flight: 0,
            errors: Vec::new(),
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Update a single field. Allowed while a submission is in flight.
    ///
    /// An empty `file` value clears the selection.
    pub fn set(&mut self, field: Field, value: String) -> Result<(), FieldError> {
        match (field, &mut self.payload) {
            (Field::Schema, _) => self.schema = value,
            (Field::Year, _) => self.year = value,
            (Field::File, Payload::Files(files)) => {
                files.clear();
                if !value.is_empty() {
                    files.push(PathBuf::from(value));
                }
            }
            (Field::Json, Payload::Text(text)) => *text = value,
            (field, _) => {
                return Err(FieldError::WrongPanel {
                    panel: self.id,
                    field,
                })
            }
        }
        Ok(())
    }

    /// Run the local checks against the owned state.
    ///
    /// Previous errors are dropped first. All failing checks are reported,
    /// year before schema before payload.
    pub fn check(&mut self) -> Result<SubmitRequest, LocalErrors> {
        self.errors.clear();

        let mut errors = Vec::new();
        if !valid_year(&self.year) {
            errors.push(format!("invalid year: {}", self.year));
        }
        if !valid_schema(&self.schema) {
            errors.push(format!("invalid schema: {}", self.schema));
        }
        match &self.payload {
            Payload::Files(files) if !valid_file(files) => {
                errors.push("must select a file to validate".to_string());
            }
            Payload::Text(text) if !valid_json(text) => {
                errors.push("invalid JSON".to_string());
            }
            _ => {}
        }

        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(LocalErrors(errors));
        }

        let payload = match &self.payload {
            Payload::Files(files) => SubmitPayload::File(files[0].clone()),
            Payload::Text(text) => SubmitPayload::Text(text.clone()),
        };
        let year = self
            .year
            .parse::<u16>()
            .map_err(|_| LocalErrors(vec![format!("invalid year: {}", self.year)]))?;

        Ok(SubmitRequest {
            panel: self.id,
            schema: self.schema.clone(),
            year,
            payload,
        })
    }

    pub(crate) fn begin_submission(&mut self) {
        self.in_flight += 1;
    }

    pub(crate) fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn view(&self) -> PanelView {
        let (selected_file, json_bytes) = match &self.payload {
            Payload::Files(files) => (
                files.first().map(|path| {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    format!("Selected \u{201c}{name}\u{201d}")
                }),
                None,
            ),
            Payload::Text(text) => (None, Some(text.len())),
        };
        PanelView {
            schema: self.schema.clone(),
            year: self.year.clone(),
            selected_file,
            json_bytes,
            busy: self.busy(),
            errors: self.errors.clone(),
        }
    }
}
