use teloxide::prelude::*;

use crate::error::BotError;

/// Feedback types for different command outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
}

impl FeedbackType {
    fn emoji(&self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Warning => "⚠️",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
        }
    }
}

/// Plain-text reply prefixed with the feedback emoji.
pub fn format_feedback(feedback_type: FeedbackType, message: &str) -> String {
    format!("{} {}", feedback_type.emoji(), message)
}

/// Reply produced by a command before it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: FeedbackType,
    pub text: String,
}

impl Reply {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: FeedbackType::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: FeedbackType::Info, text: text.into() }
    }

    /// User mistakes read as warnings, our own failures as errors.
    pub fn from_error(error: &BotError) -> Self {
        let kind = if error.is_user_error() {
            FeedbackType::Warning
        } else {
            FeedbackType::Error
        };
        Self { kind, text: error.user_message() }
    }

    pub fn render(&self) -> String {
        format_feedback(self.kind, &self.text)
    }
}

/// Centralized feedback system for bot commands
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Send immediate feedback message
    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, format_feedback(feedback_type, message))
            .await
    }

    pub async fn reply(&self, reply: &Reply) -> ResponseResult<Message> {
        self.send(reply.kind, &reply.text).await
    }
}
