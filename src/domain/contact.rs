use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name -> number. Names are unique by construction of the map.
pub type ContactMap = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            number: number.into(),
        }
    }
}

impl From<(&String, &String)> for Contact {
    fn from((name, number): (&String, &String)) -> Self {
        Contact::new(name.as_str(), number.as_str())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\nNumber: {}\n{}", self.name, self.number, "-".repeat(30))
    }
}

/// Contacts of `map` ordered by name.
pub fn sorted_contacts(map: &ContactMap) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = map.iter().map(Contact::from).collect();
    contacts.sort();
    contacts
}
