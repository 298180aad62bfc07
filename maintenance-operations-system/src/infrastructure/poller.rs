use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use domain_maintenance::model::vo::msg::{TicketChange, TicketSnapshot};
use domain_maintenance::repository::TicketRepo;
use infrastructure_command::NotificationCommand;
use kernel::ReadOnlyRepository;
use service_maintenance::ChangeClassifier;

/// Feeds successive ticket snapshots to the change classifier and forwards
/// each event to the notification channel.
pub struct SnapshotPoller {
    ticket_repo: Arc<dyn TicketRepo>,
    notifications: flume::Sender<NotificationCommand>,
    interval: Duration,
}

impl SnapshotPoller {
    pub fn new(
        ticket_repo: Arc<dyn TicketRepo>,
        notifications: flume::Sender<NotificationCommand>,
        interval: Duration,
    ) -> Self {
        Self {
            ticket_repo,
            notifications,
            interval,
        }
    }

    pub async fn run(self) {
        let mut previous_open: Option<Vec<TicketSnapshot>> = None;
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            let all: Vec<TicketSnapshot> = match self.ticket_repo.get_all().await {
                Ok(tickets) => tickets.iter().map(TicketSnapshot::from).collect(),
                Err(error) => {
                    tracing::error!(%error, "ticket snapshot failed; keeping the previous one");
                    continue;
                }
            };
            let open: Vec<TicketSnapshot> =
                all.iter().filter(|el| !el.status.is_completed()).cloned().collect();

            // The first poll only primes the baseline.
            if let Some(previous) = previous_open.as_deref() {
                if let Some(change) = ChangeClassifier::classify(previous, &open, &all) {
                    let observed_at = Utc::now();
                    let command = match change {
                        TicketChange::NewlyOpened { ticket } => NotificationCommand::TicketOpened {
                            ticket_id: ticket.id,
                            asset_tag: ticket.asset_tag,
                            observed_at,
                        },
                        TicketChange::NewlyClosed { ticket } => NotificationCommand::TicketClosed {
                            ticket_id: ticket.id,
                            asset_tag: ticket.asset_tag,
                            observed_at,
                        },
                    };
                    if self.notifications.send_async(command).await.is_err() {
                        tracing::warn!("notification consumer is gone; stopping poller");
                        return;
                    }
                }
            }
            previous_open = Some(open);
        }
    }
}
