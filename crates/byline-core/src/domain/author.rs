use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Required length of a phone number, in digits.
pub const PHONE_NUMBER_LEN: usize = 10;

/// Author entity - a stored writer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    /// `None` until the row is first updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A validated author that has not been stored yet.
///
/// Only the format rules are checked here. Name uniqueness needs the store and
/// is enforced by [`AuthorService`](crate::services::AuthorService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    name: String,
    phone_number: String,
}

impl NewAuthor {
    /// Validate and build a new author. Fields are checked in declaration
    /// order and the first failure is returned.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name.into())?;
        let phone_number = validate_phone_number(phone_number.into())?;
        Ok(Self { name, phone_number })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn into_parts(self) -> (String, String) {
        (self.name, self.phone_number)
    }
}

/// A validated partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorChanges {
    name: Option<String>,
    phone_number: Option<String>,
}

impl AuthorChanges {
    pub fn new(
        name: Option<String>,
        phone_number: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.map(validate_name).transpose()?,
            phone_number: phone_number.map(validate_phone_number).transpose()?,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none()
    }

    /// Apply the changes to a stored author in place.
    pub fn apply(self, author: &mut Author) {
        if let Some(name) = self.name {
            author.name = name;
        }
        if let Some(phone_number) = self.phone_number {
            author.phone_number = phone_number;
        }
    }
}

/// Reject empty or whitespace-only names.
pub fn validate_name(value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("name", "Author name cannot be empty."));
    }
    Ok(value)
}

/// Accept exactly ten ASCII decimal digits.
pub fn validate_phone_number(value: String) -> Result<String, ValidationError> {
    let valid = value.chars().count() == PHONE_NUMBER_LEN
        && value.chars().all(|c| c.is_ascii_digit());

    if !valid {
        return Err(ValidationError::new(
            "phone_number",
            "Phone number must be exactly 10 digits.",
        ));
    }
    Ok(value)
}
