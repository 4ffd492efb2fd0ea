use tracing::debug;

use crate::app::AppShell;
use crate::render::ListKind;

/// Handle a `toggle` event on the displayed result.
pub fn handle(app: &mut AppShell, list: ListKind) {
    if !app.toggle(list) {
        debug!(?list, "nothing to toggle");
    }
}
