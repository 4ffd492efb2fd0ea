//! Shared fixtures: a scripted transport and result builders.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coverage_validator_client::config::ClientConfig;
use coverage_validator_client::submission::{
    RawResponse, SubmissionCoordinator, SubmitError, ValidateForm, ValidationResult,
    ValidationTransport,
};

/// Transport answering from a queue of canned responses and recording
/// every form it is sent.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<RawResponse, SubmitError>>>,
    example: Mutex<Option<Result<RawResponse, SubmitError>>>,
    forms: Mutex<Vec<ValidateForm>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, response: Result<RawResponse, SubmitError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn push_result(&self, result: &ValidationResult) {
        self.push(Ok(ok_json(result)));
    }

    pub fn set_example(&self, response: Result<RawResponse, SubmitError>) {
        *self.example.lock().unwrap() = Some(response);
    }

    pub fn forms(&self) -> Vec<ValidateForm> {
        self.forms.lock().unwrap().clone()
    }
}

#[async_trait]
impl ValidationTransport for ScriptedTransport {
    async fn post_validate(&self, form: ValidateForm) -> Result<RawResponse, SubmitError> {
        self.forms.lock().unwrap().push(form);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SubmitError::Transport("no scripted response".into())))
    }

    async fn fetch_example(&self) -> Result<RawResponse, SubmitError> {
        self.example
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(SubmitError::Transport("no scripted example".into())))
    }
}

pub fn coordinator(transport: &Arc<ScriptedTransport>) -> SubmissionCoordinator {
    SubmissionCoordinator::new(transport.clone())
}

pub fn ok_json(result: &ValidationResult) -> RawResponse {
    RawResponse {
        status: 200,
        body: serde_json::to_vec(result).unwrap(),
    }
}

pub fn status(code: u16) -> RawResponse {
    RawResponse {
        status: code,
        body: b"Internal Server Error".to_vec(),
    }
}

pub fn result_with(valid: bool, errors: usize, warnings: usize) -> ValidationResult {
    ValidationResult {
        valid,
        schema: "plans".to_string(),
        year: 2017,
        errors: (1..=errors).map(|i| format!("error {i}")).collect(),
        warnings: (1..=warnings).map(|i| format!("warning {i}")).collect(),
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig::from_vars(|_| None).unwrap()
}
