//! Commands to interact with infrastructure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Command to the notification fan-out consumer.
#[derive(Debug, Serialize, Deserialize)]
pub enum NotificationCommand {
    /// Announce a ticket opened since the last poll.
    TicketOpened {
        /// Ticket id.
        ticket_id: Uuid,
        /// Asset code.
        asset_tag: String,
        /// When the poll saw it.
        observed_at: DateTime<Utc>,
    },

    /// Announce a ticket released since the last poll.
    TicketClosed {
        /// Ticket id.
        ticket_id: Uuid,
        /// Asset code.
        asset_tag: String,
        /// When the poll saw it.
        observed_at: DateTime<Utc>,
    },
}
