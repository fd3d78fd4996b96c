pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactMap, sorted_contacts},
    manager::ContactManager,
    search::search_contacts,
};
pub use crate::errors::{AppError, DuplicateError, ValidationError};
pub use crate::store::{
    self, ContactStore, MemStore, StorageMediums, TxtStore, parse_storage_type,
};
