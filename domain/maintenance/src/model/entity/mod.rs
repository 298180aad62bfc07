pub mod allocation;
pub mod order;
pub mod release_record;
pub mod ticket;
pub mod worker;

#[rustfmt::skip]
pub use {
    allocation::Allocation,
    order::MaintenanceOrderItem,
    release_record::ReleaseRecord,
    ticket::EquipmentTicket,
    worker::Worker,
};
