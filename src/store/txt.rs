use std::fs::{self, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::*;
use crate::helper;

/// `name!number` lines in a plain text file.
#[derive(Debug, Clone)]
pub struct TxtStore {
    pub medium: String,
    pub path: PathBuf,
}

impl TxtStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            medium: "txt".to_string(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Whether the file has content whose last byte is not a line break.
    fn ends_without_newline(file: &mut fs::File) -> Result<bool, AppError> {
        if file.metadata()?.len() == 0 {
            return Ok(false);
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}

impl ContactStore for TxtStore {
    fn load(&self) -> Result<ContactMap, AppError> {
        // A missing file is just an empty contact book
        if !fs::exists(&self.path)? {
            debug!(path = %self.path.display(), "no contact file yet");
            return Ok(ContactMap::new());
        }

        let file = OpenOptions::new().read(true).open(&self.path)?;
        let reader = BufReader::new(file);
        let contacts = helper::deserialize_contacts_from_txt_buffer(reader)?;

        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn append_record(&self, name: &str, number: &str) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut record = String::new();
        if Self::ends_without_newline(&mut file)? {
            record.push('\n');
        }
        record.push_str(&helper::serialize_record(name, number));

        file.write_all(record.as_bytes())?;
        file.flush()?;

        debug!(path = %self.path.display(), name, "appended contact");
        Ok(())
    }

    fn rewrite_all(&self, contacts: &ContactMap) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = helper::serialize_contacts(contacts);
        file.write_all(data.as_bytes())?;
        file.flush()?;

        debug!(path = %self.path.display(), count = contacts.len(), "rewrote contact file");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
