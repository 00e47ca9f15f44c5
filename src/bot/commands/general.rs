use crate::utils::feedback::Reply;

pub const GREETING: &str = "Привет! Я бот для поздравлений с днём рождения.";

pub fn handle_start() -> Reply {
    Reply::info(GREETING)
}

/// Identifier of whoever sent the command, straight from message metadata.
pub fn handle_my_id(user_id: Option<u64>) -> Reply {
    match user_id {
        Some(id) => Reply::info(format!("Ваш ID: {id}")),
        None => Reply::info("Не удалось определить ваш ID."),
    }
}
