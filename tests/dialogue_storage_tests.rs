use birthday_bot::bot::commands::upload::UploadState;
use birthday_bot::bot::handlers::BotHandler;
use birthday_bot::database::connection::DatabaseManager;
use teloxide::dispatching::dialogue::{InMemStorage, Storage};
use teloxide::types::ChatId;
use tempfile::TempDir;

#[tokio::test]
async fn test_dialogue_storage_setup() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let db = DatabaseManager::new(&db_url)
        .await
        .expect("Failed to create test database");
    db.run_migrations().await.expect("Failed to run migrations");

    // Building the dispatch tree must not panic
    let handler = BotHandler::new(db);
    let _schema = handler.schema();
}

#[tokio::test]
async fn test_pending_upload_is_per_chat() {
    let storage = InMemStorage::<UploadState>::new();
    let group = ChatId(-100);
    let private = ChatId(7);

    storage
        .clone()
        .update_dialogue(group, UploadState::AwaitingPhoto { person_id: 3 })
        .await
        .expect("update dialogue");

    let group_state = storage.clone().get_dialogue(group).await.expect("get dialogue");
    let private_state = storage.clone().get_dialogue(private).await.expect("get dialogue");

    assert_eq!(group_state, Some(UploadState::AwaitingPhoto { person_id: 3 }));
    assert_eq!(private_state, None);
}
