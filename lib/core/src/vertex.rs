use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

pub type VertexId = String;

/// The kind of a vertex, fixed when the vertex is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    Movie,
    Series,
    #[serde(alias = "user")]
    Viewer,
}

impl VertexKind {
    /// Movies and series are items, viewers are not
    #[inline]
    pub fn is_item(self) -> bool {
        !matches!(self, VertexKind::Viewer)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VertexKind::Movie => "movie",
            VertexKind::Series => "series",
            VertexKind::Viewer => "viewer",
        }
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VertexKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(VertexKind::Movie),
            "series" => Ok(VertexKind::Series),
            "viewer" | "user" => Ok(VertexKind::Viewer),
            other => Err(Error::InvalidAttribute(format!("vertex kind '{}'", other))),
        }
    }
}

/// The kind of an item vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Movie,
    Series,
}

impl From<ItemKind> for VertexKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Movie => VertexKind::Movie,
            ItemKind::Series => VertexKind::Series,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        VertexKind::from(*self).fmt(f)
    }
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.parse::<VertexKind>()? {
            VertexKind::Movie => Ok(ItemKind::Movie),
            VertexKind::Series => Ok(ItemKind::Series),
            VertexKind::Viewer => Err(Error::InvalidAttribute("item kind 'viewer'".to_string())),
        }
    }
}

/// Attributes carried by a movie or series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    /// Review score, usually in 0..=10
    pub rating: f64,
    pub release_year: i32,
    /// Content classification tag such as `PG` or `TV-14`
    pub content_rating: String,
    pub genres: BTreeSet<String>,
    /// Compared by exact value only, never parsed
    pub duration: String,
}

impl Item {
    pub fn new(title: impl Into<String>, rating: f64, release_year: i32) -> Self {
        Self {
            title: title.into(),
            rating,
            release_year,
            content_rating: String::new(),
            genres: BTreeSet::new(),
            duration: String::new(),
        }
    }

    #[must_use]
    pub fn with_content_rating(mut self, tag: impl Into<String>) -> Self {
        self.content_rating = tag.into();
        self
    }

    #[must_use]
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Attributes {
    Item(Item),
    Viewer,
}

/// A movie, series or viewer record.
///
/// Adjacency is not stored here; the owning [`crate::Graph`] keeps the
/// neighbour sets keyed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: VertexId,
    kind: VertexKind,
    attributes: Attributes,
}

impl Vertex {
    #[inline]
    #[must_use]
    pub fn item(kind: ItemKind, id: impl Into<VertexId>, item: Item) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            attributes: Attributes::Item(item),
        }
    }

    #[inline]
    #[must_use]
    pub fn movie(id: impl Into<VertexId>, item: Item) -> Self {
        Self::item(ItemKind::Movie, id, item)
    }

    #[inline]
    #[must_use]
    pub fn series(id: impl Into<VertexId>, item: Item) -> Self {
        Self::item(ItemKind::Series, id, item)
    }

    #[inline]
    #[must_use]
    pub fn viewer(id: impl Into<VertexId>) -> Self {
        Self {
            id: id.into(),
            kind: VertexKind::Viewer,
            attributes: Attributes::Viewer,
        }
    }

    pub fn id(&self) -> &VertexId {
        &self.id
    }

    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn as_item(&self) -> Option<&Item> {
        match &self.attributes {
            Attributes::Item(item) => Some(item),
            Attributes::Viewer => None,
        }
    }

    /// Item attributes, or `NotAnItem` for a viewer
    pub fn require_item(&self) -> Result<&Item> {
        self.as_item().ok_or_else(|| Error::NotAnItem(self.id.clone()))
    }

    pub fn title(&self) -> Option<&str> {
        self.as_item().map(|item| item.title.as_str())
    }
}

/// One materialized row handed over by an ingestion collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: VertexId,
    pub kind: ItemKind,
    pub title: String,
    pub rating: f64,
    pub release_year: i32,
    pub content_rating: String,
    #[serde(default)]
    pub genres: BTreeSet<String>,
    #[serde(default)]
    pub duration: String,
}

impl From<ItemRecord> for Vertex {
    fn from(record: ItemRecord) -> Self {
        let item = Item {
            title: record.title,
            rating: record.rating,
            release_year: record.release_year,
            content_rating: record.content_rating,
            genres: record.genres,
            duration: record.duration,
        };
        Vertex::item(record.kind, record.id, item)
    }
}
