//! Executes side effects returned by the reducer.
//!
//! Clipboard and export work is blocking, so each runs on the blocking pool
//! and reports its outcome back through the action channel.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::ports::{ClipboardWriter, Renderer, SqlExporter};
use crate::app::state::AppState;

pub struct EffectRunner {
    clipboard: Arc<dyn ClipboardWriter>,
    exporter: Arc<dyn SqlExporter>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(
        clipboard: Arc<dyn ClipboardWriter>,
        exporter: Arc<dyn SqlExporter>,
        action_tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            clipboard,
            exporter,
            action_tx,
        }
    }

    pub async fn run(
        &self,
        effects: Vec<Effect>,
        renderer: &mut impl Renderer,
        state: &AppState,
    ) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Render => renderer.draw(state)?,
                Effect::CopyToClipboard { content } => self.spawn_copy(content),
                Effect::ExportSql { file_name, content } => self.spawn_export(file_name, content),
                Effect::DispatchActions(actions) => {
                    for action in actions {
                        self.action_tx.send(action).await?;
                    }
                }
            }
        }
        Ok(())
    }

    fn spawn_copy(&self, content: String) {
        let clipboard = Arc::clone(&self.clipboard);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || clipboard.write(&content)).await;

            let action = match result {
                Ok(Ok(())) => {
                    tracing::debug!("copied generated SQL to clipboard");
                    Action::CopySucceeded
                }
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "clipboard copy failed");
                    Action::CopyFailed(e.to_string())
                }
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard task panicked");
                    Action::CopyFailed(format!("Task panicked: {}", e))
                }
            };
            let _ = tx.send(action).await;
        });
    }

    fn spawn_export(&self, file_name: String, content: String) {
        let exporter = Arc::clone(&self.exporter);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result =
                tokio::task::spawn_blocking(move || exporter.export(&file_name, &content)).await;

            let action = match result {
                Ok(Ok(path)) => {
                    tracing::info!(path = %path.display(), "exported SQL");
                    Action::ExportSucceeded(path)
                }
                Ok(Err(e)) => {
                    tracing::error!(error = %e, "SQL export failed");
                    Action::ExportFailed(e.to_string())
                }
                Err(e) => {
                    tracing::error!(error = %e, "export task panicked");
                    Action::ExportFailed(format!("Task panicked: {}", e))
                }
            };
            let _ = tx.send(action).await;
        });
    }
}
