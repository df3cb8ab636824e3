//! Blog entries and the read-only repository that serves them.
//!
//! DESIGN
//! ======
//! Entries ship as a bundled JSON document. Pages depend on
//! [`BlogRepository`] through [`BlogSource`], never on the bundle itself.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use std::ops::Deref;
use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of entries shown by the home page teaser (one featured + three recent).
pub const TEASER_LEN: usize = 4;

const BUNDLED_BLOGS: &str = include_str!("blogs.json");

/// A single blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogEntry {
    /// Route key for `/blog/{id}`; numeric ids are accepted and stringified.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub image: String,
    pub highlight: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub detail: BlogDetail,
}

/// Body of a blog post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogDetail {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// One block of post content, discriminated by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Markdown paragraph(s).
    Text { value: String },
    Heading { value: String },
    Image {
        src: String,
        #[serde(default)]
        alt: String,
    },
    #[serde(other)]
    Unknown,
}

/// Label shown above compact teaser entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Article,
    News,
}

impl EntryKind {
    /// An entry whose first block is text is an article; anything else is news.
    pub fn of(entry: &BlogEntry) -> Self {
        match entry.detail.content.first() {
            Some(ContentBlock::Text { .. }) => Self::Article,
            _ => Self::News,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::News => "News",
        }
    }
}

/// Detail route for an entry.
pub fn blog_href(id: &str) -> String {
    format!("/blog/{id}")
}

/// Home page projection: first entry featured, next three listed.
#[derive(Clone, Debug, PartialEq)]
pub struct BlogTeaser {
    pub featured: BlogEntry,
    pub recent: Vec<BlogEntry>,
}

impl BlogTeaser {
    /// Build from entries in source order. Returns `None` for an empty list.
    pub fn from_entries(entries: &[BlogEntry]) -> Option<Self> {
        let latest = &entries[..entries.len().min(TEASER_LEN)];
        let (featured, recent) = latest.split_first()?;
        Some(Self { featured: featured.clone(), recent: recent.to_vec() })
    }
}

/// Read-only access to blog entries.
pub trait BlogRepository {
    /// All entries, newest first.
    fn entries(&self) -> &[BlogEntry];

    fn find(&self, id: &str) -> Option<&BlogEntry> {
        self.entries().iter().find(|entry| entry.id == id)
    }
}

/// In-memory repository, normally loaded from the bundled JSON.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticBlogRepository {
    entries: Vec<BlogEntry>,
}

impl StaticBlogRepository {
    pub fn new(entries: Vec<BlogEntry>) -> Self {
        Self { entries }
    }

    /// Parse a `{"blogLists": [...]}` document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct Document {
            #[serde(rename = "blogLists")]
            blog_lists: Vec<BlogEntry>,
        }
        let doc: Document = serde_json::from_str(json)?;
        Ok(Self::new(doc.blog_lists))
    }

    /// Entries compiled into the bundle.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the bundled file is malformed.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_BLOGS)
    }
}

impl BlogRepository for StaticBlogRepository {
    fn entries(&self) -> &[BlogEntry] {
        &self.entries
    }
}

/// Context handle for the blog repository.
#[derive(Clone)]
pub struct BlogSource(Arc<dyn BlogRepository + Send + Sync>);

impl BlogSource {
    pub fn new(repository: impl BlogRepository + Send + Sync + 'static) -> Self {
        Self(Arc::new(repository))
    }
}

impl Deref for BlogSource {
    type Target = dyn BlogRepository + Send + Sync;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
