pub mod change;
pub mod example;
pub mod links;
pub mod submit;
pub mod toggle;

use crate::app::AppShell;
use crate::protocol::Event;
use crate::submission::SubmitRequest;

/// Work an event asks the shell to run off the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Submit(SubmitRequest),
    FetchExample,
}

/// Which frame answers an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    View,
    Links,
    Error(String),
}

/// Result of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub reply: Reply,
    pub effect: Option<Effect>,
}

impl Dispatch {
    fn view(effect: Option<Effect>) -> Self {
        Self {
            reply: Reply::View,
            effect,
        }
    }
}

/// Apply an event to the page state.
///
/// Runs to completion without awaiting; network work is returned as an
/// [`Effect`] for the caller to spawn.
pub fn dispatch(event: Event, app: &mut AppShell) -> Dispatch {
    match event {
        Event::Change {
            panel,
            field,
            value,
        } => match change::handle(app, panel, field, value) {
            Ok(()) => Dispatch::view(None),
            Err(err) => Dispatch {
                reply: Reply::Error(err.to_string()),
                effect: None,
            },
        },

        Event::Submit { panel } => Dispatch::view(submit::handle(app, panel)),

        Event::Toggle { list } => {
            toggle::handle(app, list);
            Dispatch::view(None)
        }

        Event::LoadExample => Dispatch::view(Some(example::request())),

        Event::Render => Dispatch::view(None),

        Event::Links => Dispatch {
            reply: Reply::Links,
            effect: None,
        },
    }
}
