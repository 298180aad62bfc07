use async_trait::async_trait;
use kernel::ReadOnlyRepository;

use crate::model::entity::Worker;

/// Read-only directory view; presence and availability are maintained
/// outside this engine.
#[async_trait]
pub trait WorkerRepo: ReadOnlyRepository<Worker> + Send + Sync {
    /// Workers on the given shift that can take an allocation.
    async fn get_allocatable(&self, shift_letter: &str) -> anyhow::Result<Vec<Worker>>;
}
