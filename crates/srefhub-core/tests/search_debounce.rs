//! Search-box debouncing under paused tokio time

use std::time::Duration;

use srefhub_core::debounce::{Debouncer, DEFAULT_SEARCH_DEBOUNCE};

#[tokio::test(start_paused = true)]
async fn test_typing_burst_emits_final_value_once() {
    let (debouncer, mut rx) = Debouncer::new(DEFAULT_SEARCH_DEBOUNCE);

    for text in ["c", "ca", "cat"] {
        debouncer.push(text.to_string());
        tokio::time::sleep(Duration::from_millis(120)).await;
    }
    assert!(rx.try_recv().is_err(), "nothing settles mid-burst");

    tokio::time::sleep(DEFAULT_SEARCH_DEBOUNCE).await;
    assert_eq!(rx.recv().await.as_deref(), Some("cat"));

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(rx.try_recv().is_err(), "exactly one value per burst");
}

#[tokio::test(start_paused = true)]
async fn test_clearing_the_box_is_forwarded() {
    let (debouncer, mut rx) = Debouncer::new(DEFAULT_SEARCH_DEBOUNCE);

    debouncer.push("sunset".to_string());
    tokio::time::sleep(Duration::from_millis(500)).await;
    debouncer.push(String::new());
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(rx.recv().await.as_deref(), Some("sunset"));
    assert_eq!(rx.recv().await.as_deref(), Some(""));
}

#[tokio::test(start_paused = true)]
async fn test_dropping_debouncer_discards_pending_value() {
    let (debouncer, mut rx) = Debouncer::new(DEFAULT_SEARCH_DEBOUNCE);
    debouncer.push("unfinished".to_string());
    drop(debouncer);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(rx.recv().await, None);
}
