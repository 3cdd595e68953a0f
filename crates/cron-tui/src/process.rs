//! Message processing through the TEA update loop

use cron_app::actions::handle_action;
use cron_app::{handler, AppState, Message};
use tokio::sync::mpsc;

/// Run `message` and every follow-up through `update`, dispatching actions.
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone());
        }

        msg = result.message;
    }
}
