use std::io::BufRead;

use tracing::debug;

use crate::prelude::{AppError, ContactMap};

/// Reserved character between the name and the number of a stored record.
pub const SEPARATOR: char = '!';

pub fn serialize_record(name: &str, number: &str) -> String {
    format!("{name}{SEPARATOR}{number}\n")
}

pub fn serialize_contacts(contacts: &ContactMap) -> String {
    let mut entries: Vec<(&String, &String)> = contacts.iter().collect();
    entries.sort();

    let mut data = String::new();
    for (name, number) in entries {
        data.push_str(&serialize_record(name, number));
    }
    data
}

/// Parses `name!number` lines. Blank lines and lines without a separator are
/// skipped, and a name seen twice keeps the number from its last line.
pub fn deserialize_contacts_from_txt_buffer<R: BufRead>(
    buffer: R,
) -> Result<ContactMap, AppError> {
    let mut contacts = ContactMap::new();

    for (line_no, line) in buffer.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match line.split_once(SEPARATOR) {
            Some((name, number)) => {
                contacts.insert(name.trim().to_string(), number.trim().to_string());
            }
            None => {
                debug!(line = line_no + 1, "skipping record without separator");
            }
        }
    }

    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn check_serialize_contacts_sorted_by_name() {
        let mut contacts = ContactMap::new();
        contacts.insert("Bob".to_string(), "456".to_string());
        contacts.insert("Alice".to_string(), "123".to_string());

        assert_eq!(serialize_contacts(&contacts), "Alice!123\nBob!456\n");
    }

    #[test]
    fn parse_skips_blank_and_malformed_lines() -> Result<(), AppError> {
        let data = "Alice!123\n\n   \nno separator here\nBob ! 456 \n";
        let contacts = deserialize_contacts_from_txt_buffer(Cursor::new(data))?;

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts.get("Alice").map(String::as_str), Some("123"));
        assert_eq!(contacts.get("Bob").map(String::as_str), Some("456"));
        Ok(())
    }

    #[test]
    fn parse_splits_on_first_separator() -> Result<(), AppError> {
        let contacts = deserialize_contacts_from_txt_buffer(Cursor::new("Hey!You!123\n"))?;

        assert_eq!(contacts.get("Hey").map(String::as_str), Some("You!123"));
        Ok(())
    }

    #[test]
    fn parse_last_duplicate_name_wins() -> Result<(), AppError> {
        let contacts =
            deserialize_contacts_from_txt_buffer(Cursor::new("Alice!123\nAlice!999\n"))?;

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts.get("Alice").map(String::as_str), Some("999"));
        Ok(())
    }
}
