use tracing::{debug, warn};

use crate::app::AppShell;
use crate::panel::{Field, FieldError, PanelId};

/// Handle a `change` event: update one field of one panel.
pub fn handle(
    app: &mut AppShell,
    panel: PanelId,
    field: Field,
    value: String,
) -> Result<(), FieldError> {
    debug!(%panel, %field, "field changed");
    app.update_field(panel, field, value).map_err(|err| {
        warn!("rejected change: {err}");
        err
    })
}
