//! Contact record module for phonebook
//!
//! This module provides the in-memory representation of one line of a Record
//! File and the rules for values a user may enter:
//!
//! - `Contact` maps one-to-one onto the CSV columns through serde renames
//! - `Field` names the four columns and parses the names users type
//! - `validate_*` enforce the minimum lengths of entered values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PhonebookError, PhonebookResult};

/// Header row written at the top of every Record File
pub const HEADER: [&str; 4] = ["№", "first_name", "second_name", "phone_number"];

/// Minimum length of a first name, in characters
pub const MIN_FIRST_NAME_LEN: usize = 2;

/// Minimum length of a last name, in characters
pub const MIN_SECOND_NAME_LEN: usize = 4;

/// Minimum length of a phone number, in characters
pub const MIN_PHONE_NUMBER_LEN: usize = 11;

/// One row of a Record File
///
/// The sequence number is kept contiguous (1..=N) by every operation that
/// changes the shape of a file, see [`renumber`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "№")]
    pub number: usize,
    pub first_name: String,
    pub second_name: String,
    pub phone_number: String,
}

impl Contact {
    /// Create a contact, checking every entered value
    ///
    /// Fields are checked in column order and the first violation is returned.
    ///
    /// # Arguments
    /// * `number` - Sequence number to assign
    /// * `first_name` - At least two characters
    /// * `second_name` - At least four characters
    /// * `phone_number` - At least eleven characters
    pub fn new(
        number: usize,
        first_name: &str,
        second_name: &str,
        phone_number: &str,
    ) -> PhonebookResult<Self> {
        validate_field(Field::FirstName, first_name)?;
        validate_field(Field::SecondName, second_name)?;
        validate_field(Field::PhoneNumber, phone_number)?;

        Ok(Contact {
            number,
            first_name: first_name.to_string(),
            second_name: second_name.to_string(),
            phone_number: phone_number.to_string(),
        })
    }

    /// Text of one column, as it appears in the file
    pub fn field_value(&self, field: Field) -> String {
        match field {
            Field::Number => self.number.to_string(),
            Field::FirstName => self.first_name.clone(),
            Field::SecondName => self.second_name.clone(),
            Field::PhoneNumber => self.phone_number.clone(),
        }
    }
}

/// Listing format: `1. Ann Smith: +100000000000`
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {}: {}",
            self.number, self.first_name, self.second_name, self.phone_number
        )
    }
}

/// The four columns of a Record File
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sequence number column (`№`)
    Number,
    /// `first_name`
    FirstName,
    /// `second_name`
    SecondName,
    /// `phone_number`
    PhoneNumber,
}

impl Field {
    /// All fields in column order
    pub const ALL: [Field; 4] = [
        Field::Number,
        Field::FirstName,
        Field::SecondName,
        Field::PhoneNumber,
    ];

    /// Header name of the column
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Number => HEADER[0],
            Field::FirstName => HEADER[1],
            Field::SecondName => HEADER[2],
            Field::PhoneNumber => HEADER[3],
        }
    }

    /// Minimum accepted length for entered values, if the field has one
    pub fn min_len(&self) -> Option<usize> {
        match self {
            Field::Number => None,
            Field::FirstName => Some(MIN_FIRST_NAME_LEN),
            Field::SecondName => Some(MIN_SECOND_NAME_LEN),
            Field::PhoneNumber => Some(MIN_PHONE_NUMBER_LEN),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Number => "Number",
            Field::FirstName => "First name",
            Field::SecondName => "Last name",
            Field::PhoneNumber => "Phone number",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Field {
    type Err = PhonebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.column_name() == s)
            .ok_or_else(|| PhonebookError::UnknownField(s.to_string()))
    }
}

/// Check an entered value against the minimum length of its field
///
/// Length is counted in characters, so Cyrillic names are measured the same
/// way as Latin ones.
pub fn validate_field(field: Field, value: &str) -> PhonebookResult<()> {
    match field.min_len() {
        Some(min) if value.chars().count() < min => {
            Err(PhonebookError::FieldTooShort { field, min })
        }
        _ => Ok(()),
    }
}

/// Reassign sequence numbers 1..=N in current order
pub fn renumber(contacts: &mut [Contact]) {
    for (i, contact) in contacts.iter_mut().enumerate() {
        contact.number = i + 1;
    }
}
