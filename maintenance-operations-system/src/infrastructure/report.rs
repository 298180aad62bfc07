use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Days, NaiveDate, Utc};
use domain_schedule::model::vo::OrderDisplayStatus;
use domain_schedule::service::ReconcileService;

/// Periodically logs the reconciled week of the configured assets.
pub struct ReconciliationReporter {
    reconcile_service: Arc<dyn ReconcileService>,
    assets: Vec<String>,
    interval: Duration,
}

impl ReconciliationReporter {
    pub fn new(
        reconcile_service: Arc<dyn ReconcileService>,
        assets: Vec<String>,
        interval: Duration,
    ) -> Self {
        Self {
            reconcile_service,
            assets,
            interval,
        }
    }

    pub async fn run(self) {
        if self.assets.is_empty() {
            tracing::info!("no assets configured for reconciliation reports");
            return;
        }
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            let week_start = current_week_monday();
            for asset in self.assets.iter() {
                match self.reconcile_service.asset_week(asset, week_start).await {
                    Ok(days) => {
                        let orders: Vec<_> =
                            days.iter().flat_map(|el| el.orders.iter()).collect();
                        let done = orders
                            .iter()
                            .filter(|el| el.status == OrderDisplayStatus::Realizado)
                            .count();
                        let missed = orders
                            .iter()
                            .filter(|el| el.status == OrderDisplayStatus::NaoRealizado)
                            .count();
                        tracing::info!(
                            %asset,
                            %week_start,
                            total = orders.len(),
                            done,
                            missed,
                            "reconciled schedule week"
                        );
                    }
                    Err(error) => {
                        tracing::error!(%error, %asset, "schedule reconciliation failed");
                    }
                }
            }
        }
    }
}

fn current_week_monday() -> NaiveDate {
    let today = Utc::now().date_naive();
    let offset = today.weekday().num_days_from_monday() as u64;
    today.checked_sub_days(Days::new(offset)).unwrap_or(today)
}
