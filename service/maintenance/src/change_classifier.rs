use domain_maintenance::model::vo::msg::{TicketChange, TicketSnapshot};

/// Stateless diff between two polled ticket snapshots.
pub struct ChangeClassifier;

impl ChangeClassifier {
    /// `previous_open` and `current_open` hold only non-completed tickets;
    /// `current_all` is the full set, needed to tell a release apart from an
    /// outright delete. At most one event per poll; opens win ties.
    pub fn classify(
        previous_open: &[TicketSnapshot],
        current_open: &[TicketSnapshot],
        current_all: &[TicketSnapshot],
    ) -> Option<TicketChange> {
        let opened = current_open
            .iter()
            .find(|el| previous_open.iter().all(|prev| prev.id != el.id));
        if let Some(ticket) = opened {
            return Some(TicketChange::NewlyOpened {
                ticket: ticket.clone(),
            });
        }

        // Only a genuine transition to completed counts as a close; a ticket
        // deleted outright is gone from the full set and reports nothing.
        let closed = previous_open.iter().find_map(|prev| {
            current_all.iter().find(|el| el.id == prev.id && el.status.is_completed())
        });
        closed.map(|el| TicketChange::NewlyClosed { ticket: el.clone() })
    }
}
