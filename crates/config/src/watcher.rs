use notify::{Event, EventKind};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Events closer together than this collapse into one reload.
const SETTLE: Duration = Duration::from_millis(150);

/// Watches the dashboard config file and sends a notification once per
/// burst of writes.
///
/// The parent directory is watched rather than the file itself so that
/// editors which save by rename, and a file created after start-up, are
/// both picked up.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path` on the current Tokio runtime.
    /// Returns the watcher handle and a receiver that fires after each change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Whether `event` touches the watched config file.
fn concerns(event: &Event, path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p.file_name() == path.file_name())
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("Cannot create config directory '{}': {e}", dir.display());
    }

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) if concerns(&e, &path) => {
                // Drain the rest of the burst before notifying.
                while let Ok(Some(_)) = tokio::time::timeout(SETTLE, sync_rx.recv()).await {}
                debug!("Config change detected: {:?}", e.kind);
                if tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn writes_to_config_file_count() {
        let cfg = Path::new("/home/u/.config/sensordash/sensordash.toml");
        let e = event(
            EventKind::Modify(ModifyKind::Any),
            "/home/u/.config/sensordash/sensordash.toml",
        );
        assert!(concerns(&e, cfg));

        let e = event(
            EventKind::Create(CreateKind::File),
            "/home/u/.config/sensordash/sensordash.toml",
        );
        assert!(concerns(&e, cfg));
    }

    #[test]
    fn other_files_and_reads_are_ignored() {
        let cfg = Path::new("/home/u/.config/sensordash/sensordash.toml");
        let e = event(
            EventKind::Modify(ModifyKind::Any),
            "/home/u/.config/sensordash/sensordash.toml.swp",
        );
        assert!(!concerns(&e, cfg));

        let e = event(
            EventKind::Access(AccessKind::Any),
            "/home/u/.config/sensordash/sensordash.toml",
        );
        assert!(!concerns(&e, cfg));
    }
}
