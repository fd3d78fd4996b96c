use crate::prelude::{Contact, ContactMap, sorted_contacts};

/// Case-insensitive substring match on the name, plain substring match on the
/// number. A blank query matches every contact. Results are ordered by name.
pub fn search_contacts(contacts: &ContactMap, query: &str) -> Vec<Contact> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return sorted_contacts(contacts);
    }

    let mut matches: Vec<Contact> = contacts
        .iter()
        .filter(|(name, number)| name.to_lowercase().contains(&query) || number.contains(&query))
        .map(Contact::from)
        .collect();

    matches.sort();
    matches
}
