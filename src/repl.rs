//! Interactive session for phonebook
//!
//! Shows the command menu, reads one command per iteration and dispatches it
//! to a handler. Every handler re-reads the Record File, works on the
//! in-memory list and rewrites the file; nothing is kept between commands.
//!
//! No handler error ends the loop. Problems are printed and the menu is shown
//! again. Only the quit command or the end of input stop the session.

use std::collections::HashSet;
use std::str::FromStr;

use log::debug;

use crate::config::AppConfig;
use crate::contact::{validate_field, Contact, Field};
use crate::error::{PhonebookError, PhonebookResult};
use crate::operations::{append_contact, copy_rows, delete_rows, parse_row_numbers, search};
use crate::prompt::Prompter;
use crate::record_store::RecordStore;

const MENU: &str = "
1. Quit - 'q'
2. Write a record - 'w'
3. Read records - 'r'
4. Delete records - 'd'
5. Copy - 'c'
6. Find records - 'f'";

const COMMAND_PROMPT: &str = "Enter command: ";

/// Extension appended to file names typed for copy destinations
const COPY_EXTENSION: &str = ".csv";

/// Commands offered by the menu
#[derive(Debug, PartialEq, Eq)]
enum MenuCommand {
    /// Leave the session
    Quit,
    /// Append one record
    Write,
    /// List all records
    Read,
    /// Delete records by row number
    Delete,
    /// Copy the whole file or selected rows
    Copy,
    /// Search records by one field
    Find,
    /// Anything else
    Unknown(String),
}

impl MenuCommand {
    fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "q" => MenuCommand::Quit,
            "w" => MenuCommand::Write,
            "r" => MenuCommand::Read,
            "d" => MenuCommand::Delete,
            "c" => MenuCommand::Copy,
            "f" => MenuCommand::Find,
            other => MenuCommand::Unknown(other.to_string()),
        }
    }
}

/// The two flavours of the copy command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyMode {
    /// `cf`: duplicate the whole Record File under a new name
    File,
    /// `cr`: append selected rows to another Record File
    Rows,
}

impl FromStr for CopyMode {
    type Err = PhonebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cf" => Ok(CopyMode::File),
            "cr" => Ok(CopyMode::Rows),
            _ => Err(PhonebookError::InvalidCopyMode(s.to_string())),
        }
    }
}

/// REPL-style interface over one phonebook Record File
pub struct Repl {
    /// Where answers come from
    prompter: Box<dyn Prompter>,
    /// The phonebook the menu commands operate on
    store: RecordStore,
    /// Whether the session is running
    running: bool,
}

impl Repl {
    /// Create a new session
    pub fn new(prompter: Box<dyn Prompter>, config: &AppConfig) -> Self {
        Self {
            prompter,
            store: RecordStore::new(config.phonebook_file()),
            running: true,
        }
    }

    /// Run the session until the user quits or input ends
    ///
    /// # Returns
    /// * `Ok(())` after `q` or end of input
    /// * `Err` only if the input stream itself fails
    pub fn run(&mut self) -> PhonebookResult<()> {
        debug!("Session started on {}", self.store.path().display());

        while self.running {
            println!("{}", MENU);

            let input = match self.prompter.prompt(COMMAND_PROMPT) {
                Ok(input) => input,
                Err(e) if e.ends_session() => {
                    println!();
                    debug!("Stopping: {}", e);
                    break;
                }
                Err(e) => return Err(e),
            };

            let command = MenuCommand::parse(&input);
            debug!("Dispatching {:?}", command);

            if let Err(e) = self.execute_command(command) {
                if e.ends_session() {
                    println!();
                    debug!("Stopping: {}", e);
                    break;
                }
                eprintln!("Error: {}", e);
            }
        }

        Ok(())
    }

    /// Execute a command
    fn execute_command(&mut self, command: MenuCommand) -> PhonebookResult<()> {
        match command {
            MenuCommand::Quit => {
                println!("Goodbye!");
                self.running = false;
                Ok(())
            }
            MenuCommand::Write => self.write_record(),
            MenuCommand::Read => self.print_records(),
            MenuCommand::Delete => self.remove_rows(),
            MenuCommand::Copy => self.copy_data(),
            MenuCommand::Find => self.find_records(),
            MenuCommand::Unknown(input) => {
                debug!("Unrecognized command {:?}", input);
                println!("Invalid command, please try again.");
                Ok(())
            }
        }
    }

    /// Ask for a new contact and append it to the phonebook
    fn write_record(&mut self) -> PhonebookResult<()> {
        if !validate_files(self.prompter.as_mut(), &[&self.store])? {
            return Ok(());
        }

        let contact = read_contact_info(self.prompter.as_mut())?;
        let mut contacts = self.store.read_all()?;
        let number = append_contact(&mut contacts, contact);
        self.store.write_all(&contacts)?;

        println!("Record {} saved.", number);
        Ok(())
    }

    /// List every record
    fn print_records(&mut self) -> PhonebookResult<()> {
        if !validate_files(self.prompter.as_mut(), &[&self.store])? {
            return Ok(());
        }

        let contacts = self.store.read_all()?;
        if contacts.is_empty() {
            println!("File is empty.");
        } else {
            for contact in &contacts {
                println!("{}", contact);
            }
        }
        Ok(())
    }

    /// Delete records by their row numbers and renumber the rest
    fn remove_rows(&mut self) -> PhonebookResult<()> {
        if !validate_files(self.prompter.as_mut(), &[&self.store])? {
            return Ok(());
        }

        let contacts = self.store.read_all()?;
        let input = self
            .prompter
            .prompt("Enter row numbers to delete, separated by spaces: ")?;

        let mut rows = parse_row_numbers(&input, contacts.len());
        if rows.is_empty() {
            println!("No valid row numbers to delete.");
            return Ok(());
        }

        let mut seen = HashSet::new();
        rows.retain(|row| seen.insert(*row));

        let remaining = delete_rows(contacts, &rows);
        self.store.write_all(&remaining)?;

        let listed: Vec<String> = rows.iter().map(|row| row.to_string()).collect();
        println!("Rows {} deleted.", listed.join(", "));
        Ok(())
    }

    /// Ask for a copy mode and run it
    fn copy_data(&mut self) -> PhonebookResult<()> {
        if !validate_files(self.prompter.as_mut(), &[&self.store])? {
            return Ok(());
        }

        let answer = self
            .prompter
            .prompt("Enter 'cf' to copy the file or 'cr' to copy rows: ")?;

        match answer.parse::<CopyMode>() {
            Ok(CopyMode::File) => self.copy_file(),
            Ok(CopyMode::Rows) => self.copy_selected_rows(),
            Err(e) => {
                debug!("{}", e);
                println!("Invalid command, please try again.");
                Ok(())
            }
        }
    }

    /// Duplicate the phonebook under a new name
    fn copy_file(&mut self) -> PhonebookResult<()> {
        let name = self.prompter.prompt("Enter a name for the new file: ")?;
        let Some(destination) = destination_store(&name) else {
            println!("File name must not be empty.");
            return Ok(());
        };

        let contacts = self.store.read_all()?;
        destination.write_all(&contacts)?;

        println!(
            "Records copied from {} to {}.",
            self.store.path().display(),
            destination.path().display()
        );
        Ok(())
    }

    /// Append selected rows of the phonebook to another Record File
    fn copy_selected_rows(&mut self) -> PhonebookResult<()> {
        let name = self
            .prompter
            .prompt("Enter the name of the file to copy rows into: ")?;
        let Some(destination) = destination_store(&name) else {
            println!("File name must not be empty.");
            return Ok(());
        };

        if !validate_files(self.prompter.as_mut(), &[&self.store, &destination])? {
            return Ok(());
        }

        let source = self.store.read_all()?;
        let mut target = destination.read_all()?;

        let input = self.prompter.prompt(&format!(
            "Enter row numbers to copy from {} to {}, separated by spaces: ",
            self.store.path().display(),
            destination.path().display()
        ))?;

        let rows = parse_row_numbers(&input, source.len());
        if rows.is_empty() {
            println!("No valid row numbers to copy.");
            return Ok(());
        }

        let copied = copy_rows(&source, &rows, &mut target);
        destination.write_all(&target)?;

        println!("{} rows copied.", copied);
        Ok(())
    }

    /// Print the records whose chosen field matches any entered value
    fn find_records(&mut self) -> PhonebookResult<()> {
        if !validate_files(self.prompter.as_mut(), &[&self.store])? {
            return Ok(());
        }

        let criterion = self.prompter.prompt(
            "Enter the field to search by (№, first_name, second_name, phone_number): ",
        )?;
        let field = match criterion.trim().parse::<Field>() {
            Ok(field) => field,
            Err(e) => {
                debug!("{}", e);
                println!("Invalid search field.");
                return Ok(());
            }
        };

        let values = self.prompter.prompt(&format!(
            "Enter values to search for in {}: ",
            field.column_name()
        ))?;
        let targets: Vec<&str> = values.split_whitespace().collect();

        let contacts = self.store.read_all()?;
        let results = search(&contacts, field, &targets);

        if results.is_empty() {
            println!("Record not found.");
        } else {
            for contact in results {
                println!("{}", contact);
            }
        }
        Ok(())
    }
}

/// Make sure every given Record File exists
///
/// Each missing file is announced and the user is offered to create it with
/// just the header row. All files are visited even after a refusal.
///
/// # Returns
/// * `Ok(true)` if every file exists afterwards
/// * `Ok(false)` if the user declined to create at least one of them
/// * `Err` if reading the answer or creating a file failed
pub fn validate_files<P: Prompter + ?Sized>(
    prompter: &mut P,
    stores: &[&RecordStore],
) -> PhonebookResult<bool> {
    let mut all_exist = true;

    for store in stores {
        if store.exists() {
            continue;
        }

        let path = store.path().display();
        println!("File {} does not exist, please create it.", path);
        let answer = prompter.prompt(&format!(
            "Do you want to create file {}? Type yes or no: ",
            path
        ))?;

        if is_yes(&answer) {
            store.create_empty()?;
            println!("File {} created.", path);
        } else {
            all_exist = false;
        }
    }

    Ok(all_exist)
}

/// Ask for first name, last name and phone number until all are valid
///
/// A value that is too short is reported and entry restarts from the first
/// name. Any other error is returned.
///
/// # Returns
/// * `Ok(Contact)` - The entered contact, numbered 0 until it is appended
pub fn read_contact_info<P: Prompter + ?Sized>(prompter: &mut P) -> PhonebookResult<Contact> {
    loop {
        match prompt_contact(prompter) {
            Ok(contact) => return Ok(contact),
            Err(e @ PhonebookError::FieldTooShort { .. }) => println!("{}", e),
            Err(e) => return Err(e),
        }
    }
}

fn prompt_contact<P: Prompter + ?Sized>(prompter: &mut P) -> PhonebookResult<Contact> {
    let first_name = prompter.prompt("Enter first name: ")?;
    validate_field(Field::FirstName, &first_name)?;

    let second_name = prompter.prompt("Enter last name: ")?;
    validate_field(Field::SecondName, &second_name)?;

    let phone_number = prompter.prompt("Enter phone number: ")?;
    validate_field(Field::PhoneNumber, &phone_number)?;

    Contact::new(0, &first_name, &second_name, &phone_number)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y" | "да")
}

/// Record File for a typed destination name, relative to the working directory
fn destination_store(name: &str) -> Option<RecordStore> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(RecordStore::new(format!("{}{}", name, COPY_EXTENSION)))
}
