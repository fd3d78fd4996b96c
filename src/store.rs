pub mod memory;
pub mod storage_port;
pub mod txt;

use crate::prelude::{AppError, ContactMap};
use std::fs;
use std::path::Path;

pub use memory::MemStore;
pub use txt::TxtStore;

pub const DEFAULT_CONTACT_FILE: &str = "friendsContact.txt";

/// Persistence seam of the contact manager.
///
/// `append_record` is only ever asked to add a brand new name, so the file
/// content before the call is already valid. Anything that changes or
/// removes existing records goes through `rewrite_all`.
pub trait ContactStore {
    fn load(&self) -> Result<ContactMap, AppError>;

    fn append_record(&self, name: &str, number: &str) -> Result<(), AppError>;

    fn rewrite_all(&self, contacts: &ContactMap) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Txt,
    Mem,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "txt" => Ok(StorageMediums::Txt),
            "mem" => Ok(StorageMediums::Mem),
            other => Err(AppError::ParseStorage(other.to_string())),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: &Path,
) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMediums::Txt => Ok(Box::new(TxtStore::new(path))),
        StorageMediums::Mem => Ok(Box::new(MemStore::new())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
