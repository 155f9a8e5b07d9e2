use kanal::AsyncSender;
use tango_types::AppEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

const QUIT_COMMANDS: [&str; 3] = [":q", ":quit", ":exit"];

/// Forward each input line as a search. EOF or a quit command ends input.
pub async fn watch_input<R>(
    reader: R,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("input closed");
                    break;
                };

                if QUIT_COMMANDS.contains(&line.trim()) {
                    break;
                }

                event_tx.send(AppEvent::Search(line)).await?;
            }
            _ = cancel.cancelled() => {
                tracing::info!("Input watcher stopping");
                return Ok(());
            }
        }
    }

    event_tx.send(AppEvent::Quit).await?;
    Ok(())
}
