use clap::{Parser, Subcommand};

use crate::store::DEFAULT_CONTACT_FILE;

#[derive(Parser, Debug)]
#[command(name = "friends-contact", version, about = "Simple friends contact book")]
pub struct Cli {
    /// Contact file, relative to the working directory
    #[arg(long, env = "CONTACT_FILE", default_value_t = String::from(DEFAULT_CONTACT_FILE))]
    pub file: String,

    /// Storage choice (txt, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("txt"))]
    pub storage_choice: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number, digits only
        #[arg(long)]
        number: String,
    },
    /// List all contacts sorted by name
    List {
        /// Reverse order
        #[arg(short, long)]
        reverse: bool,
    },
    /// Search contacts by a fragment of their name or number
    Search {
        /// Text to look for, empty lists everything
        #[arg(default_value_t = String::new())]
        query: String,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
    /// Edit the name or number of an existing contact
    /// Fields left out keep their current value
    Edit {
        /// Contact current name
        #[arg(long)]
        name: String,

        /// Update name
        #[arg(long)]
        new_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_number: Option<String>,
    },

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
