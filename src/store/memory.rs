use std::cell::RefCell;

use super::*;

/// Store that never touches the disk. Contacts live as long as the process.
#[derive(Debug)]
pub struct MemStore {
    pub medium: String,
    data: RefCell<ContactMap>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(ContactMap::new()),
        }
    }

    pub fn with_contacts(contacts: ContactMap) -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(contacts),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<ContactMap, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn append_record(&self, name: &str, number: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(name.to_string(), number.to_string());
        Ok(())
    }

    fn rewrite_all(&self, contacts: &ContactMap) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
