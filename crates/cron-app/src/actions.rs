//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every task reports back through `msg_tx`. A closed channel means the event
//! loop has exited, so send failures are only logged.

use chrono::Utc;
use cron_core::prelude::*;
use tokio::sync::mpsc;

use crate::config::save_settings;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::SimulateAnalysis { mount_id, delay } => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                send(&msg_tx, Message::AnalysisCompleted { mount_id }).await;
            });
        }

        UpdateAction::CreateProject { draft, delay } => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let project = draft.into_project(Utc::now());
                send(
                    &msg_tx,
                    Message::ProjectCreated {
                        project: Box::new(project),
                    },
                )
                .await;
            });
        }

        UpdateAction::SaveSettings {
            config_dir,
            settings,
        } => {
            tokio::spawn(async move {
                let result = tokio::task::spawn_blocking(move || {
                    save_settings(&config_dir, &settings)
                        .context("Saving settings")
                        .map_err(|e| e.to_string())
                })
                .await;

                let error = match result {
                    Ok(Ok(())) => None,
                    Ok(Err(e)) => Some(e),
                    Err(e) => Some(format!("Save task failed: {}", e)),
                };
                send(&msg_tx, Message::SettingsSaved { error }).await;
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("{}; dropping action result", Error::ChannelClosed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_settings, Settings, Theme};
    use crate::new_project::ProjectDraft;
    use cron_core::ProjectStatus;
    use std::time::Duration;
    use tempfile::tempdir;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_analysis_reports_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        handle_action(
            UpdateAction::SimulateAnalysis {
                mount_id: 7,
                delay: Duration::from_millis(2000),
            },
            tx,
        );

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        let msg = rx.recv().await.unwrap();
        assert_eq!(msg, Message::AnalysisCompleted { mount_id: 7 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_project_builds_pending_project() {
        let (tx, mut rx) = mpsc::channel(4);
        let draft = ProjectDraft {
            name: "Demo".into(),
            path: "/tmp/demo".into(),
            language: "Rust".into(),
            description: None,
            git_repository: None,
        };
        handle_action(
            UpdateAction::CreateProject {
                draft,
                delay: Duration::from_millis(1000),
            },
            tx,
        );

        match rx.recv().await.unwrap() {
            Message::ProjectCreated { project } => {
                assert_eq!(project.name, "Demo");
                assert_eq!(project.status, ProjectStatus::Pending);
                assert_eq!(project.last_analyzed, "Never");
                assert_eq!(project.issues_found, 0);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_settings_writes_file() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.appearance.theme = Theme::DarkMatter;

        let (tx, mut rx) = mpsc::channel(4);
        handle_action(
            UpdateAction::SaveSettings {
                config_dir: dir.path().to_path_buf(),
                settings: Box::new(settings),
            },
            tx,
        );

        assert_eq!(
            rx.recv().await.unwrap(),
            Message::SettingsSaved { error: None }
        );
        assert_eq!(load_settings(dir.path()).appearance.theme, Theme::DarkMatter);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_channel_is_ignored() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        handle_action(
            UpdateAction::SimulateAnalysis {
                mount_id: 1,
                delay: Duration::from_millis(10),
            },
            tx,
        );
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
