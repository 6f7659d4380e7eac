//! Shared Gemini payload types used across text and image modules.

use serde::{Deserialize, Serialize};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload carried by image responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or `None` when the
    /// response holds no text at all.
    pub fn first_candidate_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| match p {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Base64 payload of the first inline-data part of the first candidate.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates.first().and_then(|c| {
            c.content.parts.iter().find_map(|p| match p {
                Part::InlineData { inline_data } => Some(inline_data),
                _ => None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_candidate_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [
                {"text": "grounded "},
                {"text": "answer"}
            ]}}]}"#,
        )
        .unwrap();

        assert_eq!(
            response.first_candidate_text(),
            Some("grounded answer".to_string())
        );
    }

    #[test]
    fn test_first_candidate_text_none_for_image_only_response() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [
                {"inlineData": {"mimeType": "image/png", "data": "aGk="}}
            ]}}]}"#,
        )
        .unwrap();

        assert_eq!(response.first_candidate_text(), None);
        assert_eq!(response.first_inline_data().unwrap().data, "aGk=");
    }

    #[test]
    fn test_empty_candidates_yield_nothing() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert_eq!(response.first_candidate_text(), None);
        assert!(response.first_inline_data().is_none());
    }
}
