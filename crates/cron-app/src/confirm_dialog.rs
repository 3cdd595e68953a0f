//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in cron-tui's widgets/confirm_dialog.rs.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Quit confirmation listing the simulated work still in flight.
    pub fn quit_confirmation(pending: &[&str]) -> Self {
        let message = match pending {
            [] => "Are you sure you want to quit?".to_string(),
            [one] => format!("{one} is still in progress."),
            many => format!("{} are still in progress.", many.join(" and ")),
        };
        Self {
            title: "Quit CRON?".to_string(),
            message,
            options: vec![
                ("Quit".to_string(), Message::ConfirmQuit),
                ("Cancel".to_string(), Message::CancelQuit),
            ],
        }
    }
}
