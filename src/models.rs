//! Data models and structures
//!
//! Defines the core data structures for blog-post generation, image
//! outcomes, color themes, and keyword/SEO research artifacts exchanged
//! with the Gemini API.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Requested shape of a text-generation response.
///
/// Schema constraint and search grounding are mutually exclusive by
/// construction: the Gemini search tool cannot be combined with an
/// enforced response schema.
#[derive(Debug, Clone)]
pub enum ResponseMode {
    /// Plain text, no output constraints.
    FreeText,
    /// Ask the service to conform its output to the given response schema.
    JsonSchema(serde_json::Value),
    /// Ground the answer with Google Search; output is free text.
    SearchGrounded,
}

/// Aspect ratio for generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// 16:9, used for featured and in-post images.
    Wide,
    /// 1:1, used for thumbnails.
    Square,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Wide => "16:9",
            AspectRatio::Square => "1:1",
        }
    }
}

/// Outcome of one image slot in a generation batch.
///
/// `Skipped` means no request was issued (gating flag off or empty prompt);
/// `Failed` means a request was issued and did not yield an image. Keeping
/// the two apart lets callers render a retry affordance only where a retry
/// could help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum ImageOutcome {
    Skipped,
    /// Base64-encoded image bytes as returned inline by the service.
    Generated(String),
    /// Human-readable failure reason.
    Failed(String),
}

impl ImageOutcome {
    /// Base64 payload when an image was generated.
    pub fn data(&self) -> Option<&str> {
        match self {
            ImageOutcome::Generated(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, ImageOutcome::Generated(_))
    }
}

/// Named color theme applied to generated HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorTheme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Palette referenced by the blog-post instruction template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub primary_dark: String,
    pub text: String,
    pub info_box_bg: String,
    pub info_box_border: String,
    pub warning_box_bg: String,
    pub warning_box_border: String,
    pub table_header_bg: String,
    pub table_even_row_bg: String,
    pub table_border: String,
    pub highlight_bg: String,
}

impl ColorTheme {
    /// Built-in default theme used by the CLI when no theme file is given.
    pub fn classic_blue() -> Self {
        Self {
            name: "클래식 블루".to_string(),
            colors: ThemeColors {
                primary: "#3b82f6".to_string(),
                primary_dark: "#1d4ed8".to_string(),
                text: "#333333".to_string(),
                info_box_bg: "#eff6ff".to_string(),
                info_box_border: "#3b82f6".to_string(),
                warning_box_bg: "#fffbeb".to_string(),
                warning_box_border: "#f59e0b".to_string(),
                table_header_bg: "#dbeafe".to_string(),
                table_even_row_bg: "#eff6ff".to_string(),
                table_border: "#bfdbfe".to_string(),
                highlight_bg: "#eff6ff".to_string(),
            },
        }
    }
}

/// Prompt and alt text for one in-post sub image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubImagePrompt {
    pub prompt: String,
    pub alt_text: String,
}

/// SEO metadata produced alongside the post body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementaryInfo {
    pub keywords: Vec<String>,
    pub image_prompt: String,
    pub alt_text: String,
    pub seo_titles: Vec<String>,
    pub sub_image_prompts: Vec<SubImagePrompt>,
}

/// Platform-specific promotional posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMediaPosts {
    pub threads: String,
    pub instagram: String,
    pub facebook: String,
    pub x: String,
}

/// Wire shape of the schema-constrained blog-post response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub blog_post_html: String,
    pub supplementary_info: SupplementaryInfo,
    pub social_media_posts: SocialMediaPosts,
}

/// Wire shape of the revision response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionResponse {
    pub blog_post_html: String,
}

/// One sub image with its generation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubImage {
    pub prompt: String,
    pub alt_text: String,
    pub image: ImageOutcome,
}

/// Fully assembled blog-post generation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub blog_post_html: String,
    pub supplementary_info: SupplementaryInfo,
    pub social_media_posts: SocialMediaPosts,
    pub image: ImageOutcome,
    pub sub_images: Vec<SubImage>,
}

/// Wire shape of the schema-constrained topic-list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicListResponse {
    pub topics: Vec<String>,
}

// Keyword research artifacts. These records come back through the tolerant
// extractor from free-form model output, so fields are lenient: anything
// the model omits defaults instead of failing the whole call.

/// Autocomplete source the keyword list should emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Google,
    Naver,
}

impl SearchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSource::Google => "Google",
            SearchSource::Naver => "Naver",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub wind: String,
    #[serde(default)]
    pub humidity: String,
}

/// Numbered related-keyword entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordData {
    pub id: usize,
    pub keyword: String,
}

/// One blog search result (dummy data modeled after the Naver search API).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostData {
    #[serde(default)]
    pub id: usize,
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub blogger_name: String,
    #[serde(default)]
    pub post_date: String,
}

/// One news search result (dummy data modeled after the Naver news API).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaverNewsData {
    #[serde(default)]
    pub id: usize,
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pub_date: String,
}

/// "People also ask" entry from a SERP snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaaItem {
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// Google SERP snapshot for one keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSerpData {
    #[serde(default)]
    pub related_searches: Vec<String>,
    #[serde(default)]
    pub people_also_ask: Vec<PaaItem>,
}

/// Competition analysis for one keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMetrics {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub monthly_search_volume: String,
    #[serde(default)]
    pub competition_level: String,
    #[serde(default)]
    pub difficulty_score: u8,
    #[serde(default)]
    pub recommendation: String,
}

/// Suggested blog topic with its rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTopic {
    pub title: String,
    #[serde(default)]
    pub rationale: String,
}

/// Strategy report derived from competitor blog titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStrategyReportData {
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub suggested_topics: Vec<GeneratedTopic>,
}

/// Trending keyword recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedKeyword {
    pub keyword: String,
    #[serde(default)]
    pub reason: String,
}

/// Evergreen topic cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SustainableTopicCategory {
    pub category: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Strategy report derived from a SERP snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerpStrategyReportData {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content_gaps: Vec<String>,
    #[serde(default)]
    pub suggested_topics: Vec<GeneratedTopic>,
}

/// Post idea derived from a news headline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsStrategyIdea {
    pub title: String,
    #[serde(default)]
    pub angle: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

// Configuration

pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
    pub keystore_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let keystore_path = PathBuf::from(
            std::env::var("BLOGSMITH_KEYSTORE")
                .unwrap_or_else(|_| "data/keystore.json".to_string()),
        );

        // An unresolved key is passed through empty so the failure surfaces
        // as an auth rejection from the API rather than here.
        let api_key = crate::credentials::resolve_api_key(&keystore_path).unwrap_or_else(|| {
            tracing::warn!("No API key resolved; Gemini calls will be rejected");
            String::new()
        });

        Self {
            api_key,
            text_model: std::env::var("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            image_model: std::env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            keystore_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blog_post_response_round_trip_uses_camel_case() {
        let json = r#"{
            "blogPostHtml": "<div>본문</div>",
            "supplementaryInfo": {
                "keywords": ["단풍"],
                "imagePrompt": "autumn leaves",
                "altText": "가을 단풍",
                "seoTitles": ["제목1", "제목2", "제목3", "제목4", "제목5"],
                "subImagePrompts": [{"prompt": "path", "altText": "산책로"}]
            },
            "socialMediaPosts": {
                "threads": "t",
                "instagram": "i",
                "facebook": "f",
                "x": "[BLOG_POST_LINK]"
            }
        }"#;

        let parsed: BlogPostResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.supplementary_info.seo_titles.len(), 5);
        assert_eq!(
            parsed.supplementary_info.sub_image_prompts[0].alt_text,
            "산책로"
        );

        let reserialized = serde_json::to_string(&parsed).unwrap();
        assert!(reserialized.contains("\"blogPostHtml\""));
        assert!(reserialized.contains("\"subImagePrompts\""));
    }

    #[test]
    fn test_image_outcome_serializes_tagged() {
        let generated = ImageOutcome::Generated("aGVsbG8=".to_string());
        let json = serde_json::to_string(&generated).unwrap();
        assert!(json.contains("\"status\":\"generated\""));
        assert_eq!(generated.data(), Some("aGVsbG8="));

        let skipped: ImageOutcome = serde_json::from_str("{\"status\":\"skipped\"}").unwrap();
        assert_eq!(skipped, ImageOutcome::Skipped);
        assert_eq!(skipped.data(), None);
    }

    #[test]
    fn test_research_records_tolerate_missing_fields() {
        let metrics: KeywordMetrics = serde_json::from_str("{\"keyword\": \"캠핑\"}").unwrap();
        assert_eq!(metrics.keyword, "캠핑");
        assert_eq!(metrics.difficulty_score, 0);
        assert!(metrics.recommendation.is_empty());

        let serp: GoogleSerpData =
            serde_json::from_str("{\"relatedSearches\": [\"캠핑장 추천\"]}").unwrap();
        assert_eq!(serp.related_searches.len(), 1);
        assert!(serp.people_also_ask.is_empty());
    }

    #[test]
    fn test_aspect_ratio_wire_strings() {
        assert_eq!(AspectRatio::Wide.as_str(), "16:9");
        assert_eq!(AspectRatio::Square.as_str(), "1:1");
    }
}
