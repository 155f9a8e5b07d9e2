use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tango_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// App's main loop.
///
/// Every search runs in its own task and searches are not serialized.
/// `SearchState` tickets decide which outcome reaches the UI. On `Quit` the
/// loop waits for searches still running, then tells the UI to stop.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut searches = JoinSet::new();

    app_to_ui_tx.send(AppEvent::BackendReady).await?;
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");

    loop {
        tokio::select! {
            event = ui_to_app_rx.recv() => {
                let Ok(event) = event else {
                    tracing::debug!("[EVENT_LOOP] input channel closed");
                    break;
                };

                match event {
                    AppEvent::Search(text) => {
                        searches.spawn(handle_search(state.clone(), text, app_to_ui_tx.clone()));
                    }
                    AppEvent::Quit => break,
                    // UI-only events, ignore in backend
                    other => tracing::debug!("[EVENT_LOOP] ignoring {:?}", other),
                }
            }
            Some(result) = searches.join_next(), if !searches.is_empty() => {
                report_search_task(result, &app_to_ui_tx).await;
            }
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] cancelled");
                return Ok(());
            }
        }
    }

    while let Some(result) = searches.join_next().await {
        report_search_task(result, &app_to_ui_tx).await;
    }

    let _ = app_to_ui_tx.send(AppEvent::Quit).await;
    Ok(())
}

async fn handle_search(state: Arc<AppState>, text: String, app_to_ui_tx: AsyncSender<AppEvent>) {
    let event = match state.searcher.search_tracked(&text, &state.search).await {
        None => AppEvent::SearchSkipped,
        Some(tracked) if tracked.accepted => AppEvent::ShowOutcome {
            ticket: tracked.ticket,
            query: text,
            outcome: tracked.outcome,
        },
        Some(tracked) => {
            tracing::debug!("search {} for {:?} superseded", tracked.ticket, text);
            return;
        }
    };

    if let Err(e) = app_to_ui_tx.send(event).await {
        tracing::error!("Failed to send search result to ui: {}", e);
    }
}

async fn report_search_task(
    result: Result<(), tokio::task::JoinError>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) {
    if let Err(e) = result {
        tracing::error!("search task panicked: {e}");
        let _ = app_to_ui_tx
            .send(AppEvent::Status(format!("internal error: {e}")))
            .await;
    }
}

/// Mirror `SearchState` phase changes to the UI as `Phase` events
pub async fn forward_phases(
    state: Arc<AppState>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut rx = state.search.subscribe();

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let (ticket, phase) = {
                    let snapshot = rx.borrow_and_update();
                    (snapshot.ticket, snapshot.phase)
                };
                if phase.is_busy() {
                    app_to_ui_tx.send(AppEvent::Phase { ticket, phase }).await?;
                }
            }
            _ = cancel.cancelled() => break,
        }
    }

    Ok(())
}
