use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Book,
    Movie,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Book => "book",
            MediaType::Movie => "movie",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "book" => Ok(MediaType::Book),
            "movie" => Ok(MediaType::Movie),
            other => Err(format!("Unknown media type '{}' (expected book or movie)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBook {
    pub media_type: MediaType,
    pub title: String,
    pub author: String,
    pub serial_no: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookUpdate {
    pub book_id: i32,
    pub media_type: MediaType,
    pub title: String,
    pub author: String,
    pub serial_no: String,
    pub category: String,
    pub available: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookCreated {
    pub message: String,
    pub book_id: i32,
}

/// A row of `/transactions/book-available`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableBook {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub serial_no: String,
    pub media_type: MediaType,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Query parameters for the availability search; absent fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
}
