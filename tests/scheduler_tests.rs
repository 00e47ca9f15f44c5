use anyhow::Result;
use async_trait::async_trait;
use birthday_bot::{
    database::{connection::DatabaseManager, models::*},
    error::BotError,
    services::announcer::{Announcer, GreetingSender},
    services::scheduler::spawn_catch_up,
    utils::datetime::month_day,
};
use chrono::Local;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use teloxide::types::ChatId;
use tempfile::tempdir;
use tokio::sync::Notify;

/// Holds every send until the test opens the gate.
#[derive(Default)]
struct GatedSender {
    gate: Notify,
    sent: AtomicUsize,
}

impl GatedSender {
    async fn pass(&self) -> Result<(), BotError> {
        self.gate.notified().await;
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl GreetingSender for GatedSender {
    async fn send_text(&self, _chat_id: ChatId, _text: String) -> Result<(), BotError> {
        self.pass().await
    }

    async fn send_photo(
        &self,
        _chat_id: ChatId,
        _file_id: String,
        _caption: Option<String>,
    ) -> Result<(), BotError> {
        self.pass().await
    }
}

#[tokio::test]
async fn test_catch_up_runs_in_background() -> Result<()> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let db = DatabaseManager::new(&format!("sqlite:{}", db_path.display())).await?;
    db.run_migrations().await?;
    let db = Arc::new(db);

    let today = Local::now().date_naive();
    Person::create(&db.pool, "Anna", "Lee", &format!("1990-{}", month_day(today)), None).await?;

    let announcer = Arc::new(Announcer::new(GatedSender::default(), db.clone(), ChatId(-100)));

    // Returns while the greeting is still blocked on the transport
    let handle = spawn_catch_up(announcer.clone());
    tokio::task::yield_now().await;
    assert!(!handle.is_finished());
    assert_eq!(announcer.sender().sent.load(Ordering::SeqCst), 0);

    announcer.sender().gate.notify_one();
    handle.await?;

    assert_eq!(announcer.sender().sent.load(Ordering::SeqCst), 1);
    assert!(Announcement::exists(&db.pool, today).await?);
    Ok(())
}
