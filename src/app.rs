use tracing::{info, warn};

use crate::catalog::{EXAMPLE_SCHEMA, EXAMPLE_YEAR};
use crate::panel::{Field, FieldError, LocalErrors, PanelId, PanelState, Payload};
use crate::protocol::View;
use crate::render::{self, ListKind, ResultDisplay};
use crate::submission::{SubmitError, SubmitRequest, ValidationResult};

/// Page state: both input panels and the single displayed result.
#[derive(Debug, Clone)]
pub struct AppShell {
    file: PanelState,
    textarea: PanelState,
    result: Option<ResultDisplay>,
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new()
    }
}

impl AppShell {
    pub fn new() -> Self {
        Self {
            file: PanelState::new(PanelId::File),
            textarea: PanelState::new(PanelId::Textarea),
            result: None,
        }
    }

    pub fn panel(&self, id: PanelId) -> &PanelState {
        match id {
            PanelId::File => &self.file,
            PanelId::Textarea => &self.textarea,
        }
    }

    fn panel_mut(&mut self, id: PanelId) -> &mut PanelState {
        match id {
            PanelId::File => &mut self.file,
            PanelId::Textarea => &mut self.textarea,
        }
    }

    pub fn result(&self) -> Option<&ResultDisplay> {
        self.result.as_ref()
    }

    pub fn update_field(
        &mut self,
        panel: PanelId,
        field: Field,
        value: String,
    ) -> Result<(), FieldError> {
        self.panel_mut(panel).set(field, value)
    }

    /// Run the panel's local checks and, if they pass, mark it busy.
    pub fn begin_submit(&mut self, panel: PanelId) -> Result<SubmitRequest, LocalErrors> {
        let in_flight_elsewhere = self.file.busy() || self.textarea.busy();
        let state = self.panel_mut(panel);
        let request = state.check()?;
        state.begin_submission();
        if in_flight_elsewhere {
            // Both answers will land in the same result slot; the later one wins.
            info!(%panel, "submitting while another validation is still in flight");
        }
        Ok(request)
    }

    /// Apply the outcome of one submission from `panel`.
    pub fn settle(&mut self, panel: PanelId, outcome: Result<ValidationResult, SubmitError>) {
        match outcome {
            Ok(result) => self.result = Some(ResultDisplay::new(result)),
            Err(err) => {
                warn!(%panel, error = %err, "validation request failed");
                self.result = None;
            }
        }
        self.panel_mut(panel).settle();
    }

    /// Flip one list of the displayed result. Returns whether anything changed.
    pub fn toggle(&mut self, kind: ListKind) -> bool {
        match self.result.as_mut() {
            Some(display) => display.toggle(kind),
            None => false,
        }
    }

    /// Fill the textarea panel with the example selection and document.
    pub fn apply_example(&mut self, example: String) {
        let textarea = &mut self.textarea;
        textarea.schema = EXAMPLE_SCHEMA.to_string();
        textarea.year = EXAMPLE_YEAR.to_string();
        textarea.payload = Payload::Text(example);
    }

    pub fn view(&self) -> View {
        View {
            file: self.file.view(),
            textarea: self.textarea.view(),
            result: render::render(self.result.as_ref()),
        }
    }
}
