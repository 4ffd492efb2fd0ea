use crate::app::AppShell;
use crate::handlers::{submit, Effect};
use crate::panel::PanelId;

/// Handle `load_example`: the document is fetched first.
pub fn request() -> Effect {
    Effect::FetchExample
}

/// Fill the textarea panel with the fetched example and submit it the same
/// way a user submission would.
pub fn apply(app: &mut AppShell, example: String) -> Option<Effect> {
    app.apply_example(example);
    submit::handle(app, PanelId::Textarea)
}
