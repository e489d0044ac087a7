use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum length of a post body, in characters.
pub const MIN_CONTENT_LEN: usize = 250;

/// Maximum length of a post summary, in characters.
pub const MAX_SUMMARY_LEN: usize = 250;

/// A title must contain at least one of these (case-sensitive).
pub const CLICKBAIT_KEYWORDS: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// Post entity - a stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editorial category of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fiction" => Ok(Category::Fiction),
            "Non-Fiction" => Ok(Category::NonFiction),
            _ => Err(ValidationError::new(
                "category",
                "Post category must be either 'Fiction' or 'Non-Fiction'.",
            )),
        }
    }
}

/// A validated post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    summary: String,
    category: Category,
}

impl NewPost {
    /// Validate and build a new post. The first failing field is reported,
    /// in the order title, content, summary, category.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        summary: impl Into<String>,
        category: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: validate_title(title.into())?,
            content: validate_content(content.into())?,
            summary: validate_summary(summary.into())?,
            category: validate_category(category)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn into_parts(self) -> (String, String, String, Category) {
        (self.title, self.content, self.summary, self.category)
    }
}

/// A validated partial update of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    title: Option<String>,
    content: Option<String>,
    summary: Option<String>,
    category: Option<Category>,
}

impl PostChanges {
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        summary: Option<String>,
        category: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: title.map(validate_title).transpose()?,
            content: content.map(validate_content).transpose()?,
            summary: summary.map(validate_summary).transpose()?,
            category: category.map(validate_category).transpose()?,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.summary.is_none()
            && self.category.is_none()
    }

    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(summary) = self.summary {
            post.summary = summary;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
    }
}

pub fn validate_content(value: String) -> Result<String, ValidationError> {
    if value.chars().count() < MIN_CONTENT_LEN {
        return Err(ValidationError::new(
            "content",
            "Post content must be at least 250 characters long.",
        ));
    }
    Ok(value)
}

pub fn validate_summary(value: String) -> Result<String, ValidationError> {
    if value.chars().count() > MAX_SUMMARY_LEN {
        return Err(ValidationError::new(
            "summary",
            "Post summary must be a maximum of 250 characters.",
        ));
    }
    Ok(value)
}

pub fn validate_category(value: &str) -> Result<Category, ValidationError> {
    value.parse()
}

pub fn validate_title(value: String) -> Result<String, ValidationError> {
    if !CLICKBAIT_KEYWORDS.iter().any(|kw| value.contains(kw)) {
        return Err(ValidationError::new(
            "title",
            "Post title must contain one of the following clickbait keywords: \
             'Won't Believe', 'Secret', 'Top', 'Guess'.",
        ));
    }
    Ok(value)
}
