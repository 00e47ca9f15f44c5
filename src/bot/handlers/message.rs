use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use crate::bot::commands::{general, people, tokenize, upload, Command};
use crate::bot::handlers::{HandlerResult, UploadDialogue};
use crate::database::connection::DatabaseManager;
use crate::error::BotError;
use crate::utils::{
    feedback::{CommandFeedback, Reply},
    logging::{log_command_error, log_command_start, log_command_success, log_validation_error},
};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: UploadDialogue,
    db: DatabaseManager,
) -> HandlerResult {
    let chat_id = msg.chat.id.0;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.as_ref()).map_or("unknown", |v| v);
    let command = cmd.name();

    log_command_start(command, username, user_id, chat_id, msg.text());

    let result: Result<Reply, BotError> = match cmd {
        Command::Help => Ok(Reply::info(Command::descriptions().to_string())),
        Command::Start => Ok(general::handle_start()),
        Command::Add { args } => people::handle_add(&db, &tokenize(&args)).await,
        Command::Delete { args } => people::handle_delete(&db, &tokenize(&args)).await,
        Command::Edit { args } => people::handle_edit(&db, &tokenize(&args)).await,
        Command::SetText { args } => people::handle_set_text(&db, &tokenize(&args)).await,
        Command::List => people::handle_list(&db).await,
        Command::MyId => Ok(general::handle_my_id(msg.from().map(|u| u.id.0))),
        // Text commands never carry a photo; captioned photos go to the photo handler
        Command::Upload { args } => {
            match upload::handle_upload(&db, &tokenize(&args), None).await {
                Ok(outcome) => {
                    dialogue.update(outcome.next_state()).await?;
                    Ok(outcome.reply())
                }
                Err(e) => Err(e),
            }
        }
    };

    let reply = match result {
        Ok(reply) => {
            log_command_success(command, username, user_id, chat_id, None);
            reply
        }
        Err(e) => {
            if e.is_user_error() {
                log_validation_error(command, &e.to_string(), username, user_id, chat_id);
            } else {
                log_command_error(command, username, user_id, chat_id, &e.to_string());
            }
            Reply::from_error(&e)
        }
    };

    CommandFeedback::new(bot, msg.chat.id).reply(&reply).await?;
    Ok(())
}
