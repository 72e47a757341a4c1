//! JSDoc blocks attached to declarations and members

use serde::{Deserialize, Serialize};

/// One `/** ... */` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsDoc {
    /// Normalized description text (`None` when the block has no description)
    pub comment: Option<String>,
    /// Block tags in source order
    pub tags: Vec<JsDocTag>,
}

/// One `@tag` inside a JSDoc block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsDocTag {
    /// Tag name without the leading `@`
    pub name: String,
    /// Normalized tag text; empty when the tag carries no text
    pub comment: String,
}

impl JsDoc {
    pub fn new(comment: Option<String>) -> Self {
        Self {
            comment,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, name: impl Into<String>, comment: impl Into<String>) -> Self {
        self.tags.push(JsDocTag {
            name: name.into(),
            comment: comment.into(),
        });
        self
    }

    /// First tag with the given name
    pub fn tag(&self, name: &str) -> Option<&JsDocTag> {
        self.tags.iter().find(|t| t.name == name)
    }

    pub fn is_deprecated(&self) -> bool {
        self.tag("deprecated").is_some()
    }
}
