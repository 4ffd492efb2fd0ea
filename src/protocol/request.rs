use serde::Deserialize;

use crate::panel::{Field, PanelId};
use crate::render::ListKind;

/// One inbound UI event, read as a single line of JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Change {
        panel: PanelId,
        field: Field,
        value: String,
    },
    Submit {
        panel: PanelId,
    },
    Toggle {
        list: ListKind,
    },
    LoadExample,
    Render,
    Links,
}
