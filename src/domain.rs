pub mod contact;
pub mod manager;
pub mod search;

pub use contact::{Contact, ContactMap, sorted_contacts};
pub use manager::ContactManager;
pub use search::search_contacts;
