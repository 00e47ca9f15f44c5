use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use teloxide::{prelude::*, types::InputFile};

use crate::database::{connection::DatabaseManager, models::*};
use crate::error::BotError;
use crate::utils::datetime::month_day;

/// Telegram rejects photo captions longer than this (UTF-16 code units).
pub const CAPTION_LIMIT: usize = 1024;

/// Outbound side of the chat transport used for greetings.
#[async_trait]
pub trait GreetingSender: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: String) -> Result<(), BotError>;

    async fn send_photo(
        &self,
        chat_id: ChatId,
        file_id: String,
        caption: Option<String>,
    ) -> Result<(), BotError>;
}

#[async_trait]
impl GreetingSender for Bot {
    async fn send_text(&self, chat_id: ChatId, text: String) -> Result<(), BotError> {
        self.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        file_id: String,
        caption: Option<String>,
    ) -> Result<(), BotError> {
        let request = Requester::send_photo(self, chat_id, InputFile::file_id(file_id));
        match caption {
            Some(caption) => request.caption(caption).await?,
            None => request.await?,
        };
        Ok(())
    }
}

/// Result of a scheduled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyRun {
    Announced(usize),
    /// The date was already announced earlier
    AlreadyDone,
}

pub struct Announcer<S> {
    sender: S,
    db: Arc<DatabaseManager>,
    chat_id: ChatId,
}

impl<S: GreetingSender> Announcer<S> {
    pub fn new(sender: S, db: Arc<DatabaseManager>, chat_id: ChatId) -> Self {
        Self { sender, db, chat_id }
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Sends one greeting per person born on `date`'s month and day.
    /// Stops at the first failed send.
    pub async fn announce(&self, date: NaiveDate) -> Result<usize, BotError> {
        let key = month_day(date);
        let people = Person::find_by_month_day(&self.db.pool, &key).await?;
        tracing::info!("Found {} birthday(s) for {}", people.len(), key);

        for person in &people {
            let message = compose_message(person);
            match &person.photo_file_id {
                Some(file_id) if fits_caption(&message) => {
                    self.sender
                        .send_photo(self.chat_id, file_id.clone(), Some(message))
                        .await?;
                }
                Some(file_id) => {
                    self.sender
                        .send_photo(self.chat_id, file_id.clone(), None)
                        .await?;
                    self.sender.send_text(self.chat_id, message).await?;
                }
                None => {
                    self.sender.send_text(self.chat_id, message).await?;
                }
            }
            tracing::info!("Congratulated {} (id {})", person.full_name(), person.id);
        }

        Ok(people.len())
    }

    /// `announce` guarded by the announcement log, so a date is congratulated
    /// once even across restarts. Failed runs are not recorded.
    pub async fn run_daily(&self, date: NaiveDate) -> Result<DailyRun, BotError> {
        if Announcement::exists(&self.db.pool, date).await? {
            tracing::info!("Birthdays for {} already announced, skipping", date);
            return Ok(DailyRun::AlreadyDone);
        }

        let sent = self.announce(date).await?;
        Announcement::record(&self.db.pool, date, sent as i64).await?;
        Ok(DailyRun::Announced(sent))
    }
}

pub fn fits_caption(message: &str) -> bool {
    message.encode_utf16().count() <= CAPTION_LIMIT
}

pub fn default_greeting(person: &Person) -> String {
    format!(
        "🎉🎂 Поздравляем {} {} с днём рождения! 🎂🎉",
        person.first_name, person.last_name
    )
}

/// Custom text if set, else the default greeting; plus an @mention when the
/// person has a Telegram handle.
pub fn compose_message(person: &Person) -> String {
    let mut message = person
        .congratulation_text
        .clone()
        .unwrap_or_else(|| default_greeting(person));

    if let Some(handle) = &person.telegram_id {
        message.push_str(&format!(" @{}", handle.trim_start_matches('@')));
    }

    message
}
