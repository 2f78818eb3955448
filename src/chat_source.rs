use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use log::debug;

use crate::errors::ChatError;

// @module: Chat export model (TwitchDownloader JSON)

// @struct: Author of a chat comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commenter {
    // @field: Display name
    #[serde(default)]
    pub name: String,

    // @field: Platform user id
    #[serde(rename = "_id", default)]
    pub id: String,
}

// @struct: Comment body wrapper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    // @field: Raw comment text
    #[serde(default)]
    pub body: String,
}

/// A single chat comment as exported by the chat downloader.
///
/// Only the fields needed for rendering are modelled; everything else in the
/// export is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Playback offset at which the comment was posted
    #[serde(rename = "content_offset_seconds")]
    pub offset_seconds: f64,

    pub commenter: Commenter,

    pub message: Message,
}

impl Comment {
    /// Create a comment from its parts
    pub fn new(offset_seconds: f64, body: &str, commenter_name: &str, commenter_id: &str) -> Self {
        Comment {
            offset_seconds,
            commenter: Commenter {
                name: commenter_name.to_string(),
                id: commenter_id.to_string(),
            },
            message: Message {
                body: body.to_string(),
            },
        }
    }

    pub fn body(&self) -> &str {
        &self.message.body
    }

    pub fn commenter_name(&self) -> &str {
        &self.commenter.name
    }

    pub fn commenter_id(&self) -> &str {
        &self.commenter.id
    }
}

/// The whole chat export, fully materialized in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatLog {
    pub comments: Vec<Comment>,
}

impl ChatLog {
    /// Parse a chat export from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load a chat export from disk.
    ///
    /// A missing file or a document that does not have the export shape is
    /// fatal for the whole run.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChatError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.is_file() {
            return Err(ChatError::NotFound(display));
        }

        let content = fs::read_to_string(path).map_err(|e| ChatError::InvalidJson {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let log = Self::from_json_str(&content).map_err(|e| ChatError::InvalidJson {
            path: display.clone(),
            message: e.to_string(),
        })?;

        debug!("Loaded {} comments from {}", log.comments.len(), display);
        Ok(log)
    }
}
