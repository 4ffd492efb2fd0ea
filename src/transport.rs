use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use tracing::debug;

use crate::catalog::VALIDATE_PATH;
use crate::config::ClientConfig;
use crate::submission::{JsonPart, RawResponse, SubmitError, ValidateForm, ValidationTransport};

/// reqwest-backed transport talking to the validator service.
///
/// No client-side timeout is set: validating a large document can take
/// several minutes.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    validate_url: Url,
    example_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .user_agent(concat!("coverage-validator-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;
        let validate_url = config
            .base_url
            .join(VALIDATE_PATH)
            .map_err(|e| SubmitError::Transport(Box::new(e)))?;
        Ok(Self {
            client,
            validate_url,
            example_url: config.example_url.clone(),
        })
    }

    pub fn validate_url(&self) -> &Url {
        &self.validate_url
    }
}

#[async_trait]
impl ValidationTransport for HttpTransport {
    async fn post_validate(&self, form: ValidateForm) -> Result<RawResponse, SubmitError> {
        let json = match form.json {
            JsonPart::Text(text) => Part::text(text),
            JsonPart::File { file_name, bytes } => Part::bytes(bytes)
                .file_name(file_name)
                .mime_str("application/json")
                .map_err(transport_error)?,
        };
        let body = Form::new()
            .text("schema", form.schema)
            .text("schemaYear", form.schema_year)
            .part("json", json);

        debug!(url = %self.validate_url, "POST validate");
        let response = self
            .client
            .post(self.validate_url.clone())
            .multipart(body)
            .send()
            .await
            .map_err(transport_error)?;
        read_response(response).await
    }

    async fn fetch_example(&self) -> Result<RawResponse, SubmitError> {
        debug!(url = %self.example_url, "GET example");
        let response = self
            .client
            .get(self.example_url.clone())
            .send()
            .await
            .map_err(transport_error)?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<RawResponse, SubmitError> {
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(transport_error)?;
    Ok(RawResponse {
        status,
        body: body.to_vec(),
    })
}

fn transport_error(err: reqwest::Error) -> SubmitError {
    SubmitError::Transport(Box::new(err))
}
