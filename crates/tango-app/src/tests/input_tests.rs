use std::time::Duration;

use tango_types::AppEvent;
use tokio::io::BufReader;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::io::watch_input;

async fn collect(input: &'static [u8]) -> Vec<AppEvent> {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    timeout(
        Duration::from_secs(2),
        watch_input(BufReader::new(input), tx.clone(), CancellationToken::new()),
    )
    .await
    .expect("input watcher hung")
    .expect("input watcher failed");

    let mut events = Vec::new();
    while let Ok(Some(event)) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_lines_become_searches_then_quit_on_eof() {
    let events = collect(b"dog\r\n \n\xe7\x8a\xac\n").await;

    assert_eq!(events.len(), 4);
    assert!(matches!(&events[0], AppEvent::Search(text) if text == "dog"));
    assert!(matches!(&events[1], AppEvent::Search(text) if text == " "));
    assert!(matches!(&events[2], AppEvent::Search(text) if text == "犬"));
    assert!(matches!(events[3], AppEvent::Quit));
}

#[tokio::test]
async fn test_quit_command_stops_reading() {
    let events = collect(b"dog\n:q\ncat\n").await;

    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], AppEvent::Search(text) if text == "dog"));
    assert!(matches!(events[1], AppEvent::Quit));
}

#[tokio::test]
async fn test_cancel_stops_without_quit_event() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let (_writer, reader) = tokio::io::duplex(64);
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(watch_input(BufReader::new(reader), tx.clone(), cancel.clone()));
    cancel.cancel();

    let result = timeout(Duration::from_secs(2), handle).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
    assert!(matches!(rx.try_recv(), Ok(None)));
}
