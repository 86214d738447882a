use serde::Deserialize;

use crate::error::PageError;

const TRANSCRIPT_JSON: &str = include_str!("../../assets/transcript.json");

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    Client,
    Developer,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FileAttachment {
    pub name: String,
    #[serde(default)]
    pub size: Option<String>,
}

/// One bubble of the scripted conversation.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MessageDescriptor {
    pub author: Author,
    pub content: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub file: Option<FileAttachment>,
    /// Overrides the default index-based spacing.
    #[serde(default)]
    pub delay_ms: Option<u32>,
}

impl MessageDescriptor {
    pub fn is_developer(&self) -> bool {
        self.author == Author::Developer
    }

    pub fn is_file(&self) -> bool {
        self.file.is_some()
    }
}

pub fn parse_transcript(json: &str) -> Result<Vec<MessageDescriptor>, PageError> {
    Ok(serde_json::from_str(json)?)
}

/// The conversation bundled with the page.
pub fn bundled_transcript() -> Result<Vec<MessageDescriptor>, PageError> {
    parse_transcript(TRANSCRIPT_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_transcript_parses() {
        let messages = bundled_transcript().unwrap();
        assert!(!messages.is_empty());
        assert_eq!(messages[0].author, Author::Client);
        assert!(messages.iter().any(|m| m.is_file() && m.is_developer()));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let messages =
            parse_transcript(r#"[{"author": "developer", "content": "hello"}]"#).unwrap();
        assert_eq!(messages[0].delay_ms, None);
        assert_eq!(messages[0].file, None);
        assert_eq!(messages[0].time, None);
        assert!(messages[0].is_developer());
    }

    #[test]
    fn unknown_author_is_rejected() {
        let result = parse_transcript(r#"[{"author": "bot", "content": "beep"}]"#);
        assert!(matches!(result, Err(PageError::Transcript(_))));
    }
}
