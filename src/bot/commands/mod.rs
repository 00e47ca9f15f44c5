pub mod general;
pub mod people;
pub mod upload;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Команды бота дней рождения:")]
pub enum Command {
    #[command(description = "показать это сообщение")]
    Help,
    #[command(description = "запустить бота")]
    Start,
    #[command(description = "добавить: /add Имя Фамилия YYYY-MM-DD [текст]")]
    Add { args: String },
    #[command(description = "удалить: /delete ID")]
    Delete { args: String },
    #[command(description = "изменить: /edit ID Имя Фамилия YYYY-MM-DD")]
    Edit { args: String },
    #[command(description = "текст поздравления: /settext ID текст")]
    SetText { args: String },
    #[command(description = "открытка: /upload ID (с фото или перед фото)")]
    Upload { args: String },
    #[command(description = "список всех людей")]
    List,
    #[command(description = "показать ваш Telegram ID")]
    MyId,
}

impl Command {
    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Start => "start",
            Command::Add { .. } => "add",
            Command::Delete { .. } => "delete",
            Command::Edit { .. } => "edit",
            Command::SetText { .. } => "settext",
            Command::Upload { .. } => "upload",
            Command::List => "list",
            Command::MyId => "myid",
        }
    }
}

/// Splits raw command text into whitespace-separated tokens.
pub fn tokenize(args: &str) -> Vec<&str> {
    args.split_whitespace().collect()
}
