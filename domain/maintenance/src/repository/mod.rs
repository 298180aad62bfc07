mod allocation;
mod release_record;
mod ticket;
mod worker;

#[rustfmt::skip]
pub use {
    allocation::AllocationRepo,
    release_record::ReleaseRecordRepo,
    ticket::TicketRepo,
    worker::WorkerRepo,
};
