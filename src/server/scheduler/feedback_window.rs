use chrono::Local;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::session_window::SessionWindowService};

/// Starts the feedback window scheduler
///
/// This scheduler runs every minute and moves scheduled bookings whose session has ended
/// into `waiting_for_feedback`.
///
/// # Arguments
/// - `db`: Database connection
///
/// # Returns
/// - `Ok(JobScheduler)`: The running scheduler; it stops when dropped or shut down
/// - `Err(AppError::SchedulerErr)`: The job could not be created or started
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            let now = Local::now().naive_local();

            if let Err(e) = SessionWindowService::new(&db)
                .open_feedback_windows(now)
                .await
            {
                tracing::error!("Error opening feedback windows: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Feedback window scheduler started");

    Ok(scheduler)
}
