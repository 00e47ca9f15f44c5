//! Error classification shared by command handlers and the announcer.

use thiserror::Error;

/// Everything that can go wrong while serving a command or sending greetings.
#[derive(Debug, Error)]
pub enum BotError {
    /// Too few arguments; carries the usage hint for the command
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid record id: {0}")]
    InvalidId(String),

    #[error("invalid birthday: {0}")]
    InvalidDate(String),

    #[error("photo expected but none attached")]
    MissingPhoto,

    /// A required text field was empty or blank
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("telegram error: {0}")]
    Transport(#[from] teloxide::RequestError),
}

impl BotError {
    /// Text shown to the chat. Internal failures get a generic message; the
    /// detail only goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            BotError::Usage(usage) => usage.to_string(),
            BotError::InvalidId(value) => {
                format!("Некорректный ID: {value}. ID должен быть числом.")
            }
            BotError::InvalidDate(value) => {
                format!("Некорректная дата: {value}. Используйте формат YYYY-MM-DD.")
            }
            BotError::MissingPhoto => "Пожалуйста, отправьте фото.".to_string(),
            BotError::EmptyField(field) => format!("Поле «{field}» не может быть пустым."),
            BotError::Storage(_) => "Ошибка базы данных. Попробуйте позже.".to_string(),
            BotError::Transport(_) => "Ошибка связи с Telegram. Попробуйте позже.".to_string(),
        }
    }

    /// Whether the error is the caller's fault rather than ours.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BotError::Usage(_)
                | BotError::InvalidId(_)
                | BotError::InvalidDate(_)
                | BotError::MissingPhoto
                | BotError::EmptyField(_)
        )
    }
}
