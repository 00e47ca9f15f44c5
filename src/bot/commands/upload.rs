//! Greeting card intake, shared by `/upload` and the photo listener.

use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::database::{connection::DatabaseManager, models::Person};
use crate::error::BotError;
use crate::utils::{
    feedback::Reply,
    logging::log_missing_record,
    validation::{require_args, validate_record_id},
};

pub const UPLOAD_USAGE: &str = "Используйте: /upload ID_пользователя";

/// Per-chat dialogue state: which record the next bare photo belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    AwaitingPhoto { person_id: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Saved { person_id: i64 },
    /// `/upload <id>` arrived without a photo; the id is kept for the next one
    AwaitingPhoto { person_id: i64 },
}

impl UploadOutcome {
    pub fn reply(&self) -> Reply {
        match self {
            UploadOutcome::Saved { person_id } => Reply::success(format!(
                "Открытка для пользователя с ID {person_id} загружена."
            )),
            UploadOutcome::AwaitingPhoto { person_id } => Reply::info(format!(
                "{} Следующее фото будет открыткой для пользователя с ID {person_id}.",
                BotError::MissingPhoto.user_message()
            )),
        }
    }

    /// Dialogue state to keep after this outcome.
    pub fn next_state(&self) -> UploadState {
        match self {
            UploadOutcome::Saved { .. } => UploadState::Idle,
            UploadOutcome::AwaitingPhoto { person_id } => UploadState::AwaitingPhoto {
                person_id: *person_id,
            },
        }
    }
}

/// Explicit path: `/upload <id>` as a command or as a photo caption.
pub async fn handle_upload(
    db: &DatabaseManager,
    args: &[&str],
    photo_file_id: Option<&str>,
) -> Result<UploadOutcome, BotError> {
    require_args(args, 1, UPLOAD_USAGE)?;
    let person_id = validate_record_id(args[0])?;

    match photo_file_id {
        Some(file_id) => {
            save_photo(db, person_id, file_id).await?;
            Ok(UploadOutcome::Saved { person_id })
        }
        None => Ok(UploadOutcome::AwaitingPhoto { person_id }),
    }
}

/// Passive path: a photo without an `/upload` caption.
pub async fn handle_pending_photo(
    db: &DatabaseManager,
    state: &UploadState,
    photo_file_id: &str,
) -> Result<UploadOutcome, BotError> {
    match state {
        UploadState::AwaitingPhoto { person_id } => {
            save_photo(db, *person_id, photo_file_id).await?;
            Ok(UploadOutcome::Saved { person_id: *person_id })
        }
        UploadState::Idle => Err(BotError::Usage(UPLOAD_USAGE)),
    }
}

async fn save_photo(db: &DatabaseManager, person_id: i64, file_id: &str) -> Result<(), BotError> {
    if Person::set_photo(&db.pool, person_id, file_id).await? == 0 {
        log_missing_record("upload", person_id);
    }
    Ok(())
}

/// Arguments of an `/upload` photo caption addressed to this bot. Any other
/// caption, including other commands, leaves the photo for the pending target.
pub fn caption_target(caption: Option<&str>, bot_name: &str) -> Option<String> {
    match Command::parse(caption?, bot_name) {
        Ok(Command::Upload { args }) => Some(args),
        _ => None,
    }
}

/// Telegram lists photo sizes smallest first; the last one is the original.
pub fn largest_photo<T>(sizes: &[T]) -> Option<&T> {
    sizes.last()
}
