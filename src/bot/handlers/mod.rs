pub mod message;
pub mod photo;

use teloxide::{
    dispatching::{dialogue::{self, InMemStorage}, UpdateHandler},
    prelude::*,
    types::Me,
};
use crate::bot::commands::{upload::UploadState, Command};
use crate::database::connection::DatabaseManager;

pub type UploadDialogue = Dialogue<UploadState, InMemStorage<UploadState>>;
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub struct BotHandler {
    pub db: DatabaseManager,
}

impl BotHandler {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    /// Dispatch tree. Expects an `Arc<InMemStorage<UploadState>>` dependency.
    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let db = self.db.clone();
        let db_photo = self.db.clone();

        dialogue::enter::<Update, InMemStorage<UploadState>, UploadState, _>()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command, dialogue: UploadDialogue| {
                        let db = db.clone();
                        async move { message::command_handler(bot, msg, cmd, dialogue, db).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| msg.photo().is_some())
                    .endpoint(move |bot: Bot, msg: Message, me: Me, dialogue: UploadDialogue| {
                        let db = db_photo.clone();
                        async move { photo::photo_handler(bot, msg, me, dialogue, db).await }
                    }),
            )
    }
}
