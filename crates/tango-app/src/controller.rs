use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tango_types::AppEvent;
use tokio::io::AsyncBufRead;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{event_loop, forward_phases};
use crate::io::watch_input;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskKind {
    Events,
    Phases,
    Input,
    Ui,
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    fn spawn_tasks<R, W>(
        &self,
        input: R,
        out: W,
        interactive: bool,
    ) -> JoinSet<(TaskKind, anyhow::Result<()>)>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: Write + Send + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop
        let events = event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        );
        tasks.spawn(async move { (TaskKind::Events, events.await) });

        // Phase notifications
        let phases = forward_phases(
            self.state.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        );
        tasks.spawn(async move { (TaskKind::Phases, phases.await) });

        // Input
        let input = watch_input(
            input,
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        );
        tasks.spawn(async move { (TaskKind::Input, input.await) });

        // UI loop
        let ui = ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.state.config.clone(),
            out,
            interactive,
            self.cancel_token.child_token(),
        );
        tasks.spawn(async move { (TaskKind::Ui, ui.await) });

        tasks
    }

    /// Run until the UI stops, a task fails, or `shutdown` resolves
    pub async fn run<R, W>(
        self,
        input: R,
        out: W,
        interactive: bool,
        shutdown: impl Future<Output = ()>,
    ) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: Write + Send + 'static,
    {
        let mut tasks = self.spawn_tasks(input, out, interactive);

        let result = tokio::select! {
            _ = shutdown => {
                tracing::info!("Shutdown requested");
                Ok(())
            }
            result = wait_for_ui(&mut tasks) => result,
        };

        self.shutdown();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((kind, Err(e))) => tracing::warn!("{kind:?} task exited with error: {e}"),
                Ok((kind, Ok(()))) => tracing::debug!("{kind:?} task stopped"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }

        result
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

async fn wait_for_ui(tasks: &mut JoinSet<(TaskKind, anyhow::Result<()>)>) -> anyhow::Result<()> {
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((TaskKind::Ui, result)) => return result,
            Ok((kind, Ok(()))) => tracing::debug!("{kind:?} task finished"),
            Ok((kind, Err(e))) => {
                tracing::error!("{kind:?} task failed: {e}");
                return Err(e);
            }
            Err(e) => {
                tracing::error!("task panicked: {e}");
                return Err(e.into());
            }
        }
    }
    Ok(())
}
