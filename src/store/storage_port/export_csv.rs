use std::path::PathBuf;

use csv::Writer;

use super::*;
use crate::prelude::Contact;

pub const EXPORT_PATH: &str = "./import_export/exported.csv";

/// Writes `contacts` to a csv file with a `name,number` header.
///
/// `des` may be a `.csv` file or an existing directory, in which case the
/// file is `exported.csv` inside it.
pub fn export_contacts_to_csv(
    contacts: &[Contact],
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = PathBuf::from(des.unwrap_or(EXPORT_PATH));

    if file_path.is_dir() {
        file_path = file_path.join("exported.csv");
    } else if !is_csv(&file_path) {
        return Err(AppError::UnsupportedFile(
            "Export file must be a .csv file".to_string(),
        ));
    }

    create_file_parent(&file_path)?;
    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    Ok((file_path, counter))
}
