use infrastructure_command::NotificationCommand;

/// Terminal consumer of the notification channel. Delivery beyond the log
/// line belongs to the messaging integration, not to this engine.
pub async fn run_notification_consumer(rx: flume::Receiver<NotificationCommand>) {
    while let Ok(command) = rx.recv_async().await {
        match command {
            NotificationCommand::TicketOpened {
                ticket_id,
                asset_tag,
                observed_at,
            } => {
                tracing::info!(%ticket_id, %asset_tag, %observed_at, "ticket newly opened");
            }
            NotificationCommand::TicketClosed {
                ticket_id,
                asset_tag,
                observed_at,
            } => {
                tracing::info!(%ticket_id, %asset_tag, %observed_at, "ticket newly closed");
            }
        }
    }
}
