use std::io::{self, Write};
use std::sync::Arc;

use kanal::AsyncReceiver;
use serde::Serialize;
use tango_config::Config;
use tango_config::ui::{UiConfig, UiLanguage};
use tango_types::{AppEvent, SearchOutcome};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

struct Messages {
    searching: &'static str,
    no_images: &'static str,
    failure_prefix: &'static str,
}

impl Messages {
    fn for_language(language: UiLanguage) -> Self {
        match language {
            UiLanguage::Ja => Self {
                searching: "検索中...",
                no_images: "イメージが見つかりませんでした。",
                failure_prefix: "検索中にエラーが発生しました",
            },
            UiLanguage::En => Self {
                searching: "Searching...",
                no_images: "No images found.",
                failure_prefix: "Search failed",
            },
        }
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    query: &'a str,
    #[serde(flatten)]
    outcome: &'a SearchOutcome,
}

/// Terminal front end: English line, Japanese line, then one row per image
pub struct Renderer<W: Write> {
    out: W,
    messages: Messages,
    json: bool,
    interactive: bool,
    prompt_text: String,
    /// Highest ticket already announced or shown
    last_ticket: u64,
}

impl<W: Write> Renderer<W> {
    pub fn new(ui: &UiConfig, out: W, interactive: bool) -> Self {
        Self {
            out,
            messages: Messages::for_language(ui.language),
            json: ui.json,
            interactive,
            prompt_text: ui.prompt.clone(),
            last_ticket: 0,
        }
    }

    /// Returns false once the UI should stop
    pub fn handle(&mut self, event: AppEvent) -> io::Result<bool> {
        match event {
            AppEvent::BackendReady => self.prompt()?,
            AppEvent::Phase { ticket, phase } => {
                // One notice per search; phases of searches already shown are late echoes
                if ticket > self.last_ticket && phase.is_busy() {
                    self.last_ticket = ticket;
                    if self.interactive && !self.json {
                        writeln!(self.out, "{}", self.messages.searching)?;
                    }
                }
            }
            AppEvent::ShowOutcome {
                ticket,
                query,
                outcome,
            } => {
                self.last_ticket = self.last_ticket.max(ticket);
                self.render_outcome(&query, &outcome)?;
                self.prompt()?;
            }
            AppEvent::SearchSkipped => self.prompt()?,
            AppEvent::Status(status) => {
                writeln!(self.out, "{}", status)?;
                self.prompt()?;
            }
            AppEvent::Quit => return Ok(false),
            AppEvent::Search(_) => {}
        }

        self.out.flush()?;
        Ok(true)
    }

    pub fn render_outcome(&mut self, query: &str, outcome: &SearchOutcome) -> io::Result<()> {
        if self.json {
            let line = JsonLine { query, outcome };
            let json = serde_json::to_string(&line).map_err(io::Error::other)?;
            return writeln!(self.out, "{}", json);
        }

        match outcome {
            SearchOutcome::Success { pair, results } => {
                writeln!(self.out, "{}", pair.english)?;
                writeln!(self.out, "{}", pair.japanese)?;
                if results.is_empty() {
                    writeln!(self.out, "{}", self.messages.no_images)?;
                }
                for entry in results {
                    writeln!(self.out, "  {}  {}", entry.name, entry.image_url)?;
                }
            }
            SearchOutcome::Failure { reason } => {
                writeln!(self.out, "{}: {}", self.messages.failure_prefix, reason)?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        if self.interactive && !self.json {
            write!(self.out, "{}", self.prompt_text)?;
            self.out.flush()?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

pub async fn ui_loop<W>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
    out: W,
    interactive: bool,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    W: Write + Send,
{
    let ui = {
        let config = config.read().await;
        config.ui.clone()
    };
    let mut renderer = Renderer::new(&ui, out, interactive);

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    break;
                };
                if !renderer.handle(event)? {
                    break;
                }
            }
            _ = cancel.cancelled() => break,
        }
    }

    Ok(())
}
