use reqwest::Url;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::AppShell;
use crate::config::{ClientConfig, RenderFormat};
use crate::handlers::{self, example, Dispatch, Effect, Reply};
use crate::panel::PanelId;
use crate::protocol::{Event, Frame};
use crate::submission::{SubmissionCoordinator, SubmitError, ValidationResult};

/// Maximum bytes per inbound event line (16 MiB).
pub const MAX_EVENT_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode frame: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Work finished off the event loop, applied back on it.
#[derive(Debug)]
enum Completion {
    Submitted {
        panel: PanelId,
        outcome: Result<ValidationResult, SubmitError>,
    },
    ExampleLoaded(Result<String, SubmitError>),
}

/// Single-threaded event loop over newline-delimited JSON events.
///
/// Every state change happens here, one event or completion at a time.
/// Network calls run as spawned tasks and report back over a channel; none
/// of them block further events.
pub struct Shell {
    app: AppShell,
    coordinator: SubmissionCoordinator,
    base_url: Url,
    render: RenderFormat,
}

impl Shell {
    pub fn new(config: &ClientConfig, coordinator: SubmissionCoordinator) -> Self {
        Self {
            app: AppShell::new(),
            coordinator,
            base_url: config.base_url.clone(),
            render: config.render,
        }
    }

    pub fn app(&self) -> &AppShell {
        &self.app
    }

    /// Process events until `input` ends and all in-flight work has settled.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), ShellError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(input);
        let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
        let mut raw = Vec::new();
        let mut oversized = false;
        let mut pending = 0usize;
        let mut eof = false;

        loop {
            if eof && pending == 0 {
                break;
            }

            // One byte past the limit is enough to tell an oversized line apart.
            let limit = (MAX_EVENT_BYTES + 1).saturating_sub(raw.len()) as u64;
            let mut limited = (&mut reader).take(limit);

            tokio::select! {
                read = limited.read_until(b'\n', &mut raw), if !eof => {
                    let n = read?;
                    let ended = n == 0 || raw.ends_with(b"\n");
                    if oversized || raw.len() > MAX_EVENT_BYTES {
                        oversized = true;
                        raw.clear();
                    }
                    if !ended {
                        continue;
                    }
                    if n == 0 {
                        eof = true;
                    }

                    let frame = if std::mem::take(&mut oversized) {
                        warn!("event too large (limit {MAX_EVENT_BYTES} bytes)");
                        Some(Frame::error(format!("event exceeds {MAX_EVENT_BYTES} bytes")))
                    } else {
                        let line = std::mem::take(&mut raw);
                        self.handle_line(&line, &tx, &mut pending)
                    };
                    if let Some(frame) = frame {
                        self.write_frame(&mut output, &frame).await?;
                    }
                }

                Some(done) = rx.recv(), if pending > 0 => {
                    pending -= 1;
                    self.complete(done, &tx, &mut pending);
                    let frame = Frame::View(self.app.view());
                    self.write_frame(&mut output, &frame).await?;
                }
            }
        }

        Ok(())
    }

    fn handle_line(
        &mut self,
        raw: &[u8],
        tx: &mpsc::UnboundedSender<Completion>,
        pending: &mut usize,
    ) -> Option<Frame> {
        let trimmed = match std::str::from_utf8(raw) {
            Ok(s) => s.trim(),
            Err(_) => return Some(Frame::error("event is not valid UTF-8")),
        };
        if trimmed.is_empty() {
            return None;
        }

        let event: Event = match serde_json::from_str(trimmed) {
            Ok(e) => e,
            Err(e) => {
                warn!("malformed event: {e}");
                return Some(Frame::error(format!("malformed event: {e}")));
            }
        };

        let Dispatch { reply, effect } = handlers::dispatch(event, &mut self.app);
        if let Some(effect) = effect {
            self.spawn(effect, tx, pending);
        }

        Some(match reply {
            Reply::View => Frame::View(self.app.view()),
            Reply::Links => Frame::Links(handlers::links::handle(&self.base_url)),
            Reply::Error(message) => Frame::error(message),
        })
    }

    fn complete(
        &mut self,
        done: Completion,
        tx: &mpsc::UnboundedSender<Completion>,
        pending: &mut usize,
    ) {
        match done {
            Completion::Submitted { panel, outcome } => self.app.settle(panel, outcome),
            Completion::ExampleLoaded(Ok(text)) => {
                if let Some(effect) = example::apply(&mut self.app, text) {
                    self.spawn(effect, tx, pending);
                }
            }
            Completion::ExampleLoaded(Err(err)) => {
                warn!(error = %err, "cannot load example document");
            }
        }
    }

    fn spawn(
        &self,
        effect: Effect,
        tx: &mpsc::UnboundedSender<Completion>,
        pending: &mut usize,
    ) {
        let coordinator = self.coordinator.clone();
        let tx = tx.clone();
        *pending += 1;
        match effect {
            Effect::Submit(request) => {
                let panel = request.panel;
                debug!(%panel, "spawning submission");
                tokio::spawn(async move {
                    let outcome = coordinator.submit(request).await;
                    let _ = tx.send(Completion::Submitted { panel, outcome });
                });
            }
            Effect::FetchExample => {
                tokio::spawn(async move {
                    let outcome = coordinator.load_example().await;
                    let _ = tx.send(Completion::ExampleLoaded(outcome));
                });
            }
        }
    }

    async fn write_frame<W>(&self, output: &mut W, frame: &Frame) -> Result<(), ShellError>
    where
        W: AsyncWrite + Unpin,
    {
        let out = match self.render {
            RenderFormat::Json => {
                let mut line = serde_json::to_string(frame)?;
                line.push('\n');
                line
            }
            RenderFormat::Text => format!("{frame}\n"),
        };
        output.write_all(out.as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }
}
