use tracing::debug;

use crate::app::AppShell;
use crate::handlers::Effect;
use crate::panel::PanelId;

/// Handle a `submit` event.
///
/// Local check failures stay on the panel and produce no effect.
pub fn handle(app: &mut AppShell, panel: PanelId) -> Option<Effect> {
    match app.begin_submit(panel) {
        Ok(request) => Some(Effect::Submit(request)),
        Err(errors) => {
            debug!(%panel, "submit blocked: {errors}");
            None
        }
    }
}
