mod allocation;
mod release;
mod shift;
mod ticket;

#[rustfmt::skip]
pub use {
    allocation::AllocationService,
    release::ReleaseService,
    shift::ShiftContextProvider,
    ticket::TicketService,
};
