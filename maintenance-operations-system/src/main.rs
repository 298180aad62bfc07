mod infrastructure;

use std::sync::Arc;
use std::time::Duration;

use infrastructure::config::BoardConfig;
use infrastructure::notification::run_notification_consumer;
use infrastructure::poller::SnapshotPoller;
use infrastructure::report::ReconciliationReporter;
use infrastructure_memory::{
    MemoryDb, MemoryOrderTrackingRepo, MemoryReleaseRecordRepo, MemoryTicketRepo,
    MemoryWeeklyScheduleRepo,
};
use service_schedule::ReconcileServiceImpl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = BoardConfig::load()?;
    tracing::info!(
        poll_interval_secs = config.poll.interval_secs,
        report_assets = config.report.assets.len(),
        "maintenance operations board starting"
    );

    let db = Arc::new(MemoryDb::default());
    let ticket_repo = Arc::new(MemoryTicketRepo::new(db.clone()));
    let reconcile_service = ReconcileServiceImpl::builder()
        .schedule_repo(Arc::new(MemoryWeeklyScheduleRepo::new(db.clone())))
        .tracking_repo(Arc::new(MemoryOrderTrackingRepo::new(db.clone())))
        .ticket_repo(ticket_repo.clone())
        .release_record_repo(Arc::new(MemoryReleaseRecordRepo::new(db.clone())))
        .build();

    let (notification_tx, notification_rx) = flume::unbounded();
    tokio::spawn(run_notification_consumer(notification_rx));

    let poller = SnapshotPoller::new(
        ticket_repo,
        notification_tx,
        Duration::from_secs(config.poll.interval_secs),
    );
    let reporter = ReconciliationReporter::new(
        Arc::new(reconcile_service),
        config.report.assets,
        Duration::from_secs(config.report.interval_secs),
    );

    tokio::join!(poller.run(), reporter.run());
    Ok(())
}
