// Item attributes that can be extracted per vertex and compared for equality
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::vertex::Vertex;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    #[serde(alias = "release year")]
    ReleaseYear,
    Rating,
    Duration,
    Genre,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    ReleaseYear(i32),
    Rating(f64),
    Duration(String),
    Genre(BTreeSet<String>),
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::ReleaseYear,
        Attribute::Rating,
        Attribute::Duration,
        Attribute::Genre,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::ReleaseYear => "release year",
            Attribute::Rating => "rating",
            Attribute::Duration => "duration",
            Attribute::Genre => "genre",
        }
    }

    /// The value of this attribute on `vertex`, `None` for viewers
    pub fn value_of(self, vertex: &Vertex) -> Option<AttributeValue> {
        let item = vertex.as_item()?;
        Some(match self {
            Attribute::ReleaseYear => AttributeValue::ReleaseYear(item.release_year),
            Attribute::Rating => AttributeValue::Rating(item.rating),
            Attribute::Duration => AttributeValue::Duration(item.duration.clone()),
            Attribute::Genre => AttributeValue::Genre(item.genres.clone()),
        })
    }
}

impl AttributeValue {
    pub fn attribute(&self) -> Attribute {
        match self {
            AttributeValue::ReleaseYear(_) => Attribute::ReleaseYear,
            AttributeValue::Rating(_) => Attribute::Rating,
            AttributeValue::Duration(_) => Attribute::Duration,
            AttributeValue::Genre(_) => Attribute::Genre,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "release year" | "release_year" | "year" => Ok(Attribute::ReleaseYear),
            "rating" => Ok(Attribute::Rating),
            "duration" => Ok(Attribute::Duration),
            "genre" | "genres" => Ok(Attribute::Genre),
            other => Err(Error::InvalidAttribute(other.to_string())),
        }
    }
}
