use chrono::{Local, NaiveTime};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::services::announcer::{Announcer, DailyRun, GreetingSender};
use crate::utils::datetime::{daily_cron_expression, is_past_trigger, local_offset};

/// Local wall-clock time of the daily birthday check.
pub fn announce_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub struct BirthdayScheduler<S> {
    announcer: Arc<Announcer<S>>,
    scheduler: JobScheduler,
    job_id: Option<Uuid>,
}

impl<S: GreetingSender + 'static> BirthdayScheduler<S> {
    pub async fn new(announcer: Arc<Announcer<S>>) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            announcer,
            scheduler,
            job_id: None,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let cron = daily_cron_expression(announce_time(), local_offset());
        let announcer = self.announcer.clone();

        let birthday_job = Job::new_async(cron.as_str(), move |_uuid, _l| {
            let announcer = announcer.clone();
            Box::pin(async move {
                run_for_today(&announcer).await;
            })
        })?;

        self.job_id = Some(self.scheduler.add(birthday_job).await?);
        self.scheduler.start().await?;

        tracing::info!(
            "Birthday scheduler started - checking daily at {} local (cron '{}' UTC)",
            announce_time().format("%H:%M"),
            cron
        );

        // Catch up when started after today's trigger time
        if is_past_trigger(&Local::now(), announce_time()) {
            tracing::info!("Started after {}, running today's check now", announce_time().format("%H:%M"));
            spawn_catch_up(self.announcer.clone());
        }

        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(job_id) = self.job_id.take() {
            self.scheduler.remove(&job_id).await?;
        }
        self.scheduler.shutdown().await?;
        Ok(())
    }

    pub fn job_id(&self) -> Option<Uuid> {
        self.job_id
    }
}

/// Runs today's check on its own task so slow sends never hold up startup.
pub fn spawn_catch_up<S: GreetingSender + 'static>(announcer: Arc<Announcer<S>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        run_for_today(&announcer).await;
    })
}

async fn run_for_today<S: GreetingSender>(announcer: &Announcer<S>) {
    let today = Local::now().date_naive();
    match announcer.run_daily(today).await {
        Ok(DailyRun::Announced(count)) => {
            tracing::info!("Birthday check for {} done, {} congratulation(s) sent", today, count);
        }
        Ok(DailyRun::AlreadyDone) => {}
        Err(e) => {
            tracing::error!("Failed to send birthday congratulations: {}", e);
        }
    }
}
