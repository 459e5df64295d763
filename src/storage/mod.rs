mod json_store;

pub use json_store::{JsonStore, TicketUpdate, AUTO_CLOSE_AFTER_DAYS, SYSTEM_ACTOR};
