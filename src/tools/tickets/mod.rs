pub mod dto;
pub mod handler;

pub use dto::{
    CreateTicketInput, GetTicketInput, SearchTicketsInput, TicketPriority, TicketStatus,
    TicketType, UpdateTicketInput,
};
pub use handler::{create_ticket, get_ticket, search_tickets, update_ticket};
