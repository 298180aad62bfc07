use async_trait::async_trait;
use kernel::{DBRepository, MutableRepository, ReadOnlyRepository};
use mockall::mock;
use uuid::Uuid;

use crate::model::entity::{Allocation, EquipmentTicket, ReleaseRecord, Worker};
use crate::repository::{AllocationRepo, ReleaseRecordRepo, TicketRepo, WorkerRepo};

mock! {
    pub TicketRepo {}
    #[async_trait]
    impl TicketRepo for TicketRepo {
        async fn get_open_by_asset(&self, asset_tag: &str) -> anyhow::Result<Vec<EquipmentTicket>>;
        async fn get_all_open(&self) -> anyhow::Result<Vec<EquipmentTicket>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<EquipmentTicket> for TicketRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<EquipmentTicket>;
        async fn get_all(&self) -> anyhow::Result<Vec<EquipmentTicket>>;
    }
    #[async_trait]
    impl MutableRepository<EquipmentTicket> for TicketRepo {
        async fn insert(&self, entity: &EquipmentTicket) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &EquipmentTicket) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<EquipmentTicket> for TicketRepo {}
}

mock! {
    pub AllocationRepo {}
    #[async_trait]
    impl AllocationRepo for AllocationRepo {
        async fn get_by_worker_id(&self, worker_id: Uuid) -> anyhow::Result<Vec<Allocation>>;
        async fn get_by_ticket_id(&self, ticket_id: Uuid) -> anyhow::Result<Vec<Allocation>>;
        async fn get_by_worker_and_ticket(
            &self,
            worker_id: Uuid,
            ticket_id: Uuid,
        ) -> anyhow::Result<Option<Allocation>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Allocation> for AllocationRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Allocation>;
    }
    #[async_trait]
    impl MutableRepository<Allocation> for AllocationRepo {
        async fn insert(&self, entity: &Allocation) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &Allocation) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Allocation> for AllocationRepo {}
}

mock! {
    pub WorkerRepo {}
    #[async_trait]
    impl WorkerRepo for WorkerRepo {
        async fn get_allocatable(&self, shift_letter: &str) -> anyhow::Result<Vec<Worker>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Worker> for WorkerRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Worker>;
        async fn get_all(&self) -> anyhow::Result<Vec<Worker>>;
    }
}

mock! {
    pub ReleaseRecordRepo {}
    #[async_trait]
    impl ReleaseRecordRepo for ReleaseRecordRepo {
        async fn get_by_ticket_id(&self, ticket_id: Uuid) -> anyhow::Result<Option<ReleaseRecord>>;
        async fn get_by_asset(&self, asset_tag: &str) -> anyhow::Result<Vec<ReleaseRecord>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<ReleaseRecord> for ReleaseRecordRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<ReleaseRecord>;
    }
    #[async_trait]
    impl MutableRepository<ReleaseRecord> for ReleaseRecordRepo {
        async fn insert(&self, entity: &ReleaseRecord) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<ReleaseRecord> for ReleaseRecordRepo {}
}
