mod allocation;
mod change_classifier;
mod release;
mod ticket;

#[rustfmt::skip]
pub use {
    allocation::AllocationServiceImpl,
    change_classifier::ChangeClassifier,
    release::ReleaseServiceImpl,
    ticket::TicketServiceImpl,
};
