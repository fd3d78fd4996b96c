use std::path::Path;

use clap::Parser;
use dotenv::dotenv;
use tracing::debug;

use super::display_contacts;
use crate::prelude::{
    AppError, ContactManager, StorageMediums,
    command::{Cli, Commands},
    parse_storage_type,
    store::storage_port::{export_contacts_to_csv, import_contacts_from_csv},
};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();
    run_cli(cli)
}

pub fn run_cli(cli: Cli) -> Result<(), AppError> {
    let medium = StorageMediums::from(&cli.storage_choice)?;
    let storage = parse_storage_type(medium, Path::new(&cli.file))?;
    let mut manager = ContactManager::new(storage)?;

    debug!(
        medium = manager.get_medium(),
        file = cli.file.as_str(),
        count = manager.len(),
        "contact book opened"
    );

    match cli.command {
        Commands::Add { name, number } => {
            let contact = manager.add(&name, &number)?;
            println!("Contact '{}' added successfully", contact.name);
            Ok(())
        }

        Commands::List { reverse } => {
            let mut contacts = manager.load_all();
            if reverse {
                contacts.reverse();
            }
            println!("{}", display_contacts(&contacts));
            Ok(())
        }

        Commands::Search { query } => {
            println!("{}", display_contacts(&manager.search(&query)));
            Ok(())
        }

        Commands::Delete { name } => {
            let contact = manager.delete(&name)?;
            println!("Contact '{}' deleted successfully", contact.name);
            Ok(())
        }

        Commands::Edit {
            name,
            new_name,
            new_number,
        } => {
            let Some(current_number) = manager.get_number(name.trim()).map(str::to_string) else {
                return Err(AppError::NotFound(format!("Contact '{}'", name.trim())));
            };

            let new_name = new_name.unwrap_or_else(|| name.clone());
            let new_number = new_number.unwrap_or(current_number);

            let contact = manager.update(&name, &new_name, &new_number)?;
            println!("Contact '{}' updated successfully", contact.name);
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let report = import_contacts_from_csv(&mut manager, src.as_deref())?;

            println!(
                "Successfully imported {} contacts from {:?}, skipped {}.",
                report.imported, report.path, report.skipped
            );
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = export_contacts_to_csv(&manager.load_all(), des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}
