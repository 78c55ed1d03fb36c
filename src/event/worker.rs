//! Background execution of console effects.
//!
//! Every effect runs in its own tokio task and reports back through the app
//! event channel. Nothing is awaited on the UI task, so a slow command never
//! freezes the screen. Results arrive in completion order.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{JoinError, spawn_blocking};
use tracing::{debug, error};

use crate::console::Effect;
use crate::context::TabId;
use crate::event::AppEvent;
use crate::shell::{Executor, WriteStatus, fs};

#[derive(Clone)]
pub struct Worker {
    executor: Executor,
    sink: UnboundedSender<AppEvent>,
}

impl Worker {
    pub fn new(executor: Executor, sink: UnboundedSender<AppEvent>) -> Self {
        Self { executor, sink }
    }

    /// Start `effect` in the background.
    ///
    /// `LaunchGame` is not background work; the app handles it and it is
    /// ignored here.
    pub fn spawn(&self, effect: Effect) {
        let worker = self.clone();
        match effect {
            Effect::Execute { tab, command, cwd } => {
                tokio::spawn(async move {
                    let text = worker.execute(command, cwd).await;
                    worker.send(AppEvent::Output { tab, text });
                });
            }
            Effect::LoadEditor {
                tab,
                path,
                resolved,
            } => {
                tokio::spawn(async move {
                    let file = resolved.clone();
                    let content = spawn_blocking(move || fs::read_file(file))
                        .await
                        .unwrap_or_else(|e| {
                            error!("Reading {} panicked: {}", resolved.display(), e);
                            String::new()
                        });
                    worker.send(AppEvent::EditorLoaded {
                        tab,
                        path,
                        resolved,
                        content,
                    });
                });
            }
            Effect::Probe { entry, candidate } => {
                tokio::spawn(async move {
                    let dir = candidate.clone();
                    let listing = list_blocking(dir).await;
                    worker.send(AppEvent::Probed {
                        entry,
                        candidate,
                        listing,
                    });
                });
            }
            Effect::Refresh { dir } => {
                tokio::spawn(async move {
                    let entries = list_blocking(dir.clone()).await;
                    worker.send(AppEvent::Listed { dir, entries });
                });
            }
            Effect::Save {
                tab,
                path,
                resolved,
                content,
            } => {
                tokio::spawn(async move {
                    let status = write_blocking(resolved, content).await;
                    let text = match status {
                        WriteStatus::Saved => format!("Saved: {}", path),
                        failed => failed.to_string(),
                    };
                    worker.send(AppEvent::Output { tab, text });
                });
            }
            Effect::SaveAndRun {
                tab,
                path,
                resolved,
                content,
                cwd,
            } => {
                tokio::spawn(async move {
                    let status = write_blocking(resolved, content).await;
                    if !status.is_saved() {
                        worker.send(AppEvent::Output {
                            tab,
                            text: status.to_string(),
                        });
                    }
                    let text = worker.execute(format!("bash {}", path), cwd).await;
                    worker.send(AppEvent::Output { tab, text });
                });
            }
            Effect::LaunchGame { .. } => {}
        }
    }

    /// Deliver `text` to `tab` after `delay`.
    pub fn notify_later(&self, tab: TabId, text: impl Into<String>, delay: Duration) {
        let worker = self.clone();
        let text = text.into();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            worker.send(AppEvent::Output { tab, text });
        });
    }

    /// Run a command in its own task so a panic inside it still produces a line.
    async fn execute(&self, command: String, cwd: String) -> String {
        debug!("Executing {:?} in {:?}", command, cwd);
        let executor = self.executor.clone();
        let task = tokio::spawn(async move { executor.run_command(&command, &cwd).await });
        match task.await {
            Ok(text) => text,
            Err(e) => execution_error(&e),
        }
    }

    fn send(&self, event: AppEvent) {
        if let Err(e) = self.sink.send(event) {
            error!("Failed to deliver app event, UI is gone: {:?}", e.0);
        }
    }
}

fn execution_error(e: &JoinError) -> String {
    format!("Error running command: {}", e)
}

async fn list_blocking(dir: String) -> Vec<String> {
    spawn_blocking(move || fs::list_files(&dir))
        .await
        .unwrap_or_else(|e| {
            error!("Listing task panicked: {}", e);
            Vec::new()
        })
}

async fn write_blocking(path: PathBuf, content: String) -> WriteStatus {
    spawn_blocking(move || fs::write_file(&path, &content))
        .await
        .unwrap_or_else(|e| WriteStatus::Failed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use crate::event::init_app_eventsource;

    #[tokio::test]
    async fn test_execute_reports_to_issuing_tab() {
        let (tx, mut rx) = init_app_eventsource();
        let worker = Worker::new(Executor::default(), tx);
        let mut console = Console::default();
        let first = console.session().active_id();

        for effect in console.submit("echo from-first") {
            worker.spawn(effect);
        }
        console.new_tab();

        let event = rx.recv().await.unwrap();
        let AppEvent::Output { tab, text } = event else {
            panic!("expected Output, got {event:?}");
        };
        assert_eq!(tab, first);
        console.deliver(tab, text);

        let lines = console.session().get(first).unwrap().history();
        assert_eq!(lines.last().unwrap(), "from-first\n");
        assert!(console.session().active_tab().history().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip_through_events() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = init_app_eventsource();
        let worker = Worker::new(Executor::default(), tx);
        let tab = Console::default().session().active_id();
        let resolved = dir.path().join("note.txt");

        worker.spawn(Effect::Save {
            tab,
            path: "note.txt".to_string(),
            resolved: resolved.clone(),
            content: "hello".to_string(),
        });
        assert_eq!(
            rx.recv().await.unwrap(),
            AppEvent::Output {
                tab,
                text: "Saved: note.txt".to_string()
            }
        );

        worker.spawn(Effect::LoadEditor {
            tab,
            path: "note.txt".to_string(),
            resolved: resolved.clone(),
        });
        let AppEvent::EditorLoaded { content, .. } = rx.recv().await.unwrap() else {
            panic!("expected EditorLoaded");
        };
        assert_eq!(content, "hello");
    }

    #[tokio::test]
    async fn test_save_and_run_writes_before_running() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = init_app_eventsource();
        let worker = Worker::new(Executor::default(), tx);
        let tab = Console::default().session().active_id();

        worker.spawn(Effect::SaveAndRun {
            tab,
            path: "go.sh".to_string(),
            resolved: dir.path().join("go.sh"),
            content: "echo ran".to_string(),
            cwd: dir.path().to_str().unwrap().to_string(),
        });

        let AppEvent::Output { text, .. } = rx.recv().await.unwrap() else {
            panic!("expected Output");
        };
        assert_eq!(text, "ran\n");
    }

    #[tokio::test]
    async fn test_refresh_lists_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        let (tx, mut rx) = init_app_eventsource();
        let worker = Worker::new(Executor::default(), tx);
        let path = dir.path().to_str().unwrap().to_string();

        worker.spawn(Effect::Refresh { dir: path.clone() });
        assert_eq!(
            rx.recv().await.unwrap(),
            AppEvent::Listed {
                dir: path,
                entries: vec!["a.txt".to_string()]
            }
        );
    }

    #[tokio::test]
    async fn test_notify_later() {
        let (tx, mut rx) = init_app_eventsource();
        let worker = Worker::new(Executor::default(), tx);
        let tab = Console::default().session().active_id();

        worker.notify_later(tab, "later", Duration::from_millis(10));
        assert_eq!(
            rx.recv().await.unwrap(),
            AppEvent::Output {
                tab,
                text: "later".to_string()
            }
        );
    }
}
