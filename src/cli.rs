pub mod command;
pub mod run;

pub use run::run_app;

use crate::prelude::Contact;

pub const EMPTY_LISTING: &str = "No contacts saved yet or no results found.";

/// One block per contact, or a notice when there is nothing to show.
pub fn display_contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return EMPTY_LISTING.to_string();
    }

    contacts
        .iter()
        .map(Contact::to_string)
        .collect::<Vec<String>>()
        .join("\n")
}
