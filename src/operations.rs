//! Record list operations for phonebook
//!
//! Pure functions over in-memory record lists. The interactive session reads a
//! Record File, calls one of these and writes the result back; nothing here
//! touches the file system or the terminal.

use std::collections::HashSet;

use crate::contact::{renumber, Contact, Field};

/// Parse 1-based row numbers typed by the user
///
/// Tokens are separated by whitespace. A token is kept only if it consists of
/// ASCII digits and names an existing row (`1..=row_count`); everything else
/// is silently dropped. Order and duplicates are preserved.
///
/// # Arguments
/// * `input` - Raw line entered by the user
/// * `row_count` - Number of rows in the file the numbers refer to
///
/// # Returns
/// * The valid row numbers, possibly empty
pub fn parse_row_numbers(input: &str, row_count: usize) -> Vec<usize> {
    input
        .split_whitespace()
        .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|token| token.parse::<usize>().ok())
        .filter(|&n| (1..=row_count).contains(&n))
        .collect()
}

/// Append `contact` at the end of the list with the next sequence number
///
/// # Returns
/// * The sequence number assigned to the new record
pub fn append_contact(contacts: &mut Vec<Contact>, mut contact: Contact) -> usize {
    contact.number = contacts.len() + 1;
    let number = contact.number;
    contacts.push(contact);
    number
}

/// Remove the rows at the given 1-based positions and renumber the rest
///
/// Positions out of range are ignored and repeated positions count once.
pub fn delete_rows(contacts: Vec<Contact>, rows: &[usize]) -> Vec<Contact> {
    let doomed: HashSet<usize> = rows.iter().copied().collect();

    let mut remaining: Vec<Contact> = contacts
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !doomed.contains(&(i + 1)))
        .map(|(_, contact)| contact)
        .collect();

    renumber(&mut remaining);
    remaining
}

/// Append copies of source rows onto the end of `destination`
///
/// Rows are copied in the order given, so a row listed twice is copied twice.
/// Each copy gets the next sequence number of the destination. The numbering
/// of the source is not consulted.
///
/// # Returns
/// * How many records were appended
pub fn copy_rows(source: &[Contact], rows: &[usize], destination: &mut Vec<Contact>) -> usize {
    let mut copied = 0;
    for &row in rows {
        if let Some(contact) = row.checked_sub(1).and_then(|i| source.get(i)) {
            append_contact(destination, contact.clone());
            copied += 1;
        }
    }
    copied
}

/// Records whose `field` equals any of `targets` exactly
pub fn search<'a>(contacts: &'a [Contact], field: Field, targets: &[&str]) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|contact| {
            let value = contact.field_value(field);
            targets.iter().any(|target| *target == value)
        })
        .collect()
}
