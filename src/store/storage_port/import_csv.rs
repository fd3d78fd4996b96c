use std::path::PathBuf;

use csv::Reader;
use tracing::warn;

use super::*;
use crate::prelude::{Contact, ContactManager};

pub const IMPORT_PATH: &str = "./import_export/contacts.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub path: PathBuf,
    pub imported: u64,
    pub skipped: u64,
}

/// Adds every `name,number` row of a csv file through the manager, so rows
/// that fail validation or collide with an existing contact are skipped.
pub fn import_contacts_from_csv(
    manager: &mut ContactManager,
    src: Option<&str>,
) -> Result<ImportReport, AppError> {
    let file_path = PathBuf::from(src.unwrap_or(IMPORT_PATH));

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if !is_csv(&file_path) {
        return Err(AppError::UnsupportedFile("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut imported: u64 = 0;
    let mut skipped: u64 = 0;
    for result in reader.deserialize() {
        let record: Contact = result?;

        match manager.add(&record.name, &record.number) {
            Ok(_) => imported += 1,
            Err(AppError::Validation(e)) => {
                warn!(name = record.name.as_str(), error = %e, "skipping invalid row");
                skipped += 1;
            }
            Err(AppError::Duplicate(e)) => {
                warn!(name = record.name.as_str(), error = %e, "skipping duplicate row");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(ImportReport {
        path: file_path,
        imported,
        skipped,
    })
}
