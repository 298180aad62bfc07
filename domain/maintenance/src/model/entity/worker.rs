use kernel::AggregateRoot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Directory row for one maintenance worker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub role: String,
    pub home_shift_letter: String,
    pub is_present: bool,
    pub is_available: bool,
    /// Set when the worker is present but tied up outside the board.
    pub occupation_reason: Option<String>,
}

impl Worker {
    pub fn is_allocatable(&self) -> bool {
        self.is_present && self.is_available
    }
}

impl AggregateRoot for Worker {
    fn id(&self) -> Uuid {
        self.id
    }
}
