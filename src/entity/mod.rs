mod assignee;
mod history;
mod master;
mod ticket;

pub use assignee::AssigneeMapping;
pub use history::{ActionType, HistoryDraft, HistoryEntry};
pub use master::{Category, Company, HodMapping, Location, Subcategory};
pub use ticket::{NewTicket, Priority, Status, Ticket, TicketType};
