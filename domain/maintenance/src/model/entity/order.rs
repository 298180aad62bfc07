use serde::{Deserialize, Serialize};

/// One scheduled work order (OM) inside a preventive ticket's checklist.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceOrderItem {
    pub order_number: String,
    pub order_type: String,
    pub description: String,
    #[serde(default)]
    pub completion_state: CompletionState,
    pub not_completed_reason: Option<String>,
    pub not_completed_recommendation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    #[default]
    Pending,
    /// Transient marker while the ticket is open; a release turns it into the
    /// permanent `Completed`.
    CompletedThisShift,
    Completed,
    NotCompleted,
}

impl MaintenanceOrderItem {
    /// A not-completed order must carry both reason and recommendation.
    pub fn has_complete_justification(&self) -> bool {
        let filled = |value: &Option<String>| {
            value.as_deref().map(|el| !el.trim().is_empty()).unwrap_or(false)
        };
        filled(&self.not_completed_reason) && filled(&self.not_completed_recommendation)
    }

    pub fn is_done(&self) -> bool {
        matches!(
            self.completion_state,
            CompletionState::CompletedThisShift | CompletionState::Completed
        )
    }
}
