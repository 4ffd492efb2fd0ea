use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::panel::PanelId;

/// The service's verdict for one submitted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub schema: String,
    #[serde(default)]
    pub year: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub warnings: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A submit request built from a panel that passed its local checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub panel: PanelId,
    pub schema: String,
    pub year: u16,
    pub payload: SubmitPayload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPayload {
    File(PathBuf),
    Text(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("validation service answered HTTP {status}")]
    Status { status: u16 },
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("cannot read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed validation result: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("example document is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Multipart body of `POST /validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateForm {
    pub schema: String,
    pub schema_year: String,
    pub json: JsonPart,
}

/// The `json` field: a file part or plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonPart {
    File { file_name: String, bytes: Vec<u8> },
    Text(String),
}

/// Status and body of an HTTP exchange, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network boundary of the client.
#[async_trait]
pub trait ValidationTransport: Send + Sync {
    /// Send one validation form and return the raw response.
    async fn post_validate(&self, form: ValidateForm) -> Result<RawResponse, SubmitError>;

    /// Fetch the example document as raw text.
    async fn fetch_example(&self) -> Result<RawResponse, SubmitError>;
}

/// Turns submit requests into validation calls and interprets the answers.
#[derive(Clone)]
pub struct SubmissionCoordinator {
    transport: Arc<dyn ValidationTransport>,
}

impl SubmissionCoordinator {
    pub fn new(transport: Arc<dyn ValidationTransport>) -> Self {
        Self { transport }
    }

    /// Submit one request.
    ///
    /// Only a 2xx answer whose body decodes as a [`ValidationResult`] is a
    /// success. A result with `valid: false` is still a success.
    pub async fn submit(&self, request: SubmitRequest) -> Result<ValidationResult, SubmitError> {
        let panel = request.panel;
        let form = build_form(request).await?;
        info!(%panel, schema = %form.schema, year = %form.schema_year, "submitting document");

        let response = self.transport.post_validate(form).await?;
        if !response.is_success() {
            return Err(SubmitError::Status {
                status: response.status,
            });
        }

        let result: ValidationResult = serde_json::from_slice(&response.body)?;
        debug!(
            %panel,
            valid = result.valid,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "validation result received"
        );
        Ok(result)
    }

    /// Fetch the example document used by the "load example" action.
    pub async fn load_example(&self) -> Result<String, SubmitError> {
        let response = self.transport.fetch_example().await?;
        if !response.is_success() {
            return Err(SubmitError::Status {
                status: response.status,
            });
        }
        Ok(String::from_utf8(response.body)?)
    }
}

/// Build the multipart form for a request, reading the selected file if any.
pub async fn build_form(request: SubmitRequest) -> Result<ValidateForm, SubmitError> {
    let json = match request.payload {
        SubmitPayload::Text(text) => JsonPart::Text(text),
        SubmitPayload::File(path) => {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|source| SubmitError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "document.json".to_string());
            JsonPart::File { file_name, bytes }
        }
    };

    Ok(ValidateForm {
        schema: request.schema,
        schema_year: request.year.to_string(),
        json,
    })
}
