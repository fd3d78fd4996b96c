pub mod export_csv;
pub mod import_csv;

use super::*;
pub use export_csv::export_contacts_to_csv;
pub use import_csv::{ImportReport, import_contacts_from_csv};

fn is_csv(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "csv")
}
