use crate::app::events::AppEvent;
use crate::recipients::source::load_recipients;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Poll a recipients file and push the list whenever it changes.
///
/// `pinned` recipients (from the command line) always lead the pushed list.
/// Read errors (e.g. the file is mid-rewrite) are logged and the last good list
/// is kept. Returns once the receiving side is gone.
pub async fn watch_recipients(
    path: PathBuf,
    pinned: Vec<String>,
    mut last: Vec<String>,
    tx: mpsc::Sender<AppEvent>,
    interval: Duration,
) {
    loop {
        tokio::time::sleep(interval).await;

        let current = match load_recipients(&path) {
            Ok(list) => pinned.iter().cloned().chain(list).collect::<Vec<_>>(),
            Err(e) => {
                warn!(error = %e, "recipients file unreadable");
                continue;
            }
        };

        if current != last {
            last = current.clone();
            if tx.send(AppEvent::RecipientsUpdate(current)).await.is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_changed_file_is_pushed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("to.txt");
        fs::write(&path, "Ada\nGrace\n").unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        let initial = vec!["Eve".to_string(), "Ada".to_string(), "Grace".to_string()];
        let task = tokio::spawn(watch_recipients(
            path.clone(),
            vec!["Eve".to_string()],
            initial,
            tx,
            Duration::from_millis(10),
        ));

        fs::write(&path, "Ada\nGrace\nAlan\n").unwrap();

        // A poll can land mid-write, so wait for the settled list
        let expected = vec!["Eve", "Ada", "Grace", "Alan"];
        let settled = tokio::time::timeout(Duration::from_secs(2), async {
            while let Some(event) = rx.recv().await {
                if let AppEvent::RecipientsUpdate(list) = event {
                    if list == expected {
                        return true;
                    }
                }
            }
            false
        })
        .await
        .unwrap();
        assert!(settled);

        drop(rx);
        task.abort();
    }
}
