use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One validated feed entry. An `Item` only exists with a non-empty title,
/// a parsed publication date and a link; everything else is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub description: Option<String>,
    pub published: DateTime<Utc>,
    pub link: String,
    pub image_url: Option<String>,
    pub source: Option<String>,
}

/// Candidate item as extracted from a raw feed node, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

impl ItemDraft {
    /// Promotes the draft to an [`Item`] when the required fields are
    /// present. A `None` result is a per-item skip, not an error.
    pub fn validate(self) -> Option<Item> {
        let title = self.title.filter(|title| !title.is_empty())?;
        let published = self.published?;
        let link = self.link.filter(|link| !link.is_empty())?;

        Some(Item {
            title,
            description: self.description,
            published,
            link,
            image_url: self.image_url,
            source: None,
        })
    }
}
