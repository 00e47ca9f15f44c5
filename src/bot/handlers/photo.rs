use teloxide::prelude::*;
use teloxide::types::Me;
use crate::bot::commands::{tokenize, upload};
use crate::bot::handlers::{HandlerResult, UploadDialogue};
use crate::database::connection::DatabaseManager;
use crate::utils::{
    feedback::{CommandFeedback, Reply},
    logging::{log_command_error, log_command_start, log_command_success, log_validation_error},
};

/// Any incoming photo. A `/upload <id>` caption wins; otherwise the photo goes
/// to the chat's pending upload target, if any.
pub async fn photo_handler(
    bot: Bot,
    msg: Message,
    me: Me,
    dialogue: UploadDialogue,
    db: DatabaseManager,
) -> HandlerResult {
    let Some(file_id) = msg
        .photo()
        .and_then(upload::largest_photo)
        .map(|size| size.file.id.clone())
    else {
        return Ok(());
    };

    let chat_id = msg.chat.id.0;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.as_ref()).map_or("unknown", |v| v);

    log_command_start("photo", username, user_id, chat_id, msg.caption());

    let result = match upload::caption_target(msg.caption(), me.username()) {
        Some(args) => upload::handle_upload(&db, &tokenize(&args), Some(&file_id)).await,
        None => {
            let state = dialogue.get().await?.unwrap_or_default();
            upload::handle_pending_photo(&db, &state, &file_id).await
        }
    };

    let reply = match result {
        Ok(outcome) => {
            dialogue.update(outcome.next_state()).await?;
            log_command_success("photo", username, user_id, chat_id, None);
            outcome.reply()
        }
        Err(e) => {
            if e.is_user_error() {
                log_validation_error("photo", &e.to_string(), username, user_id, chat_id);
            } else {
                log_command_error("photo", username, user_id, chat_id, &e.to_string());
            }
            Reply::from_error(&e)
        }
    };

    CommandFeedback::new(bot, msg.chat.id).reply(&reply).await?;
    Ok(())
}
