use tracing::{info, warn};

use crate::helper::SEPARATOR;
use crate::prelude::{
    AppError, Contact, ContactMap, ContactStore, DuplicateError, search_contacts,
    sorted_contacts,
};
use crate::validation::{check_duplicate, validate_new};

/// Owns the in-memory contact book and the store that persists it.
///
/// Every mutation is written through `storage` first. The in-memory map only
/// changes once the write has succeeded, so a failed write leaves the map as
/// it was before the call.
pub struct ContactManager {
    mem: ContactMap,
    storage: Box<dyn ContactStore>,
}

impl ContactManager {
    /// Builds a manager with the contacts currently held by `storage`.
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mem = storage.load()?;
        Ok(Self { mem, storage })
    }

    /// Throws away the in-memory map and reads it back from storage.
    pub fn reload(&mut self) -> Result<(), AppError> {
        self.mem = self.storage.load()?;
        Ok(())
    }

    pub fn get_mem(&self) -> &ContactMap {
        &self.mem
    }

    pub fn get_medium(&self) -> &str {
        self.storage.get_medium()
    }

    pub fn get_number(&self, name: &str) -> Option<&str> {
        self.mem.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn load_all(&self) -> Vec<Contact> {
        sorted_contacts(&self.mem)
    }

    pub fn search(&self, query: &str) -> Vec<Contact> {
        search_contacts(&self.mem, query)
    }

    pub fn add(&mut self, name: &str, number: &str) -> Result<Contact, AppError> {
        let name = name.trim();
        let number = number.trim();

        validate_new(name, number)?;
        if let Some(duplicate) = check_duplicate(&self.mem, name, number, None) {
            return Err(duplicate.into());
        }
        warn_on_separator(name);

        self.storage.append_record(name, number)?;
        self.mem.insert(name.to_string(), number.to_string());

        info!(name, "contact added");
        Ok(Contact::new(name, number))
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        let name = name.trim();

        let Some(number) = self.mem.get(name) else {
            return Err(AppError::NotFound(format!("Contact '{name}'")));
        };
        let removed = Contact::new(name, number.as_str());

        let mut next = self.mem.clone();
        next.remove(name);
        self.storage.rewrite_all(&next)?;
        self.mem = next;

        info!(name, "contact deleted");
        Ok(removed)
    }

    /// Replaces `old_name` with `new_name -> new_number`.
    ///
    /// Number uniqueness is not enforced here: a number already held by
    /// another contact is accepted and only logged.
    pub fn update(
        &mut self,
        old_name: &str,
        new_name: &str,
        new_number: &str,
    ) -> Result<Contact, AppError> {
        let old_name = old_name.trim();
        let new_name = new_name.trim();
        let new_number = new_number.trim();

        validate_new(new_name, new_number)?;

        if !self.mem.contains_key(old_name) {
            return Err(AppError::NotFound(format!("Contact '{old_name}'")));
        }

        if new_name != old_name && self.mem.contains_key(new_name) {
            return Err(DuplicateError::DuplicateName(new_name.to_string()).into());
        }

        if let Some(holder) = self
            .mem
            .iter()
            .find(|(name, number)| *number == new_number && name.as_str() != old_name)
            .map(|(name, _)| name)
        {
            warn!(
                name = new_name,
                number = new_number,
                holder = holder.as_str(),
                "number already belongs to another contact"
            );
        }
        warn_on_separator(new_name);

        let mut next = self.mem.clone();
        next.remove(old_name);
        next.insert(new_name.to_string(), new_number.to_string());
        self.storage.rewrite_all(&next)?;
        self.mem = next;

        info!(old_name, new_name, "contact updated");
        Ok(Contact::new(new_name, new_number))
    }
}

fn warn_on_separator(name: &str) {
    if name.contains(SEPARATOR) {
        warn!(name, "name contains the record separator and will not reload intact");
    }
}
