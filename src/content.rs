//! Blog-post generation and topic-suggestion use cases
//!
//! Composes prompt builders, the Gemini text service, and the image
//! fan-out into the typed operations the publishing UI consumes. Every
//! operation is atomic: any failure aborts the whole call.

use crate::ai::{ImageGenerationService, TextGenerationService};
use crate::images::{generate_image_batch, generate_single_image};
use crate::models::{
    AspectRatio, BlogPostResponse, ColorTheme, GeneratedContent, ResponseMode, RevisionResponse,
    SubImage, TopicListResponse,
};
use crate::{prompts, schema, Error, Result};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Parameters for one blog-post generation call.
pub struct BlogPostRequest<'a> {
    pub topic: &'a str,
    pub theme: &'a ColorTheme,
    pub should_generate_image: bool,
    pub should_generate_sub_images: bool,
    pub interactive_element_idea: Option<&'a str>,
    pub raw_content: Option<&'a str>,
    pub additional_request: Option<&'a str>,
    pub aspect_ratio: AspectRatio,
    pub current_date: NaiveDate,
}

/// Content-generation facade over the text and image services.
///
/// Both services are injected at construction with their credential already
/// resolved, so individual calls carry no hidden credential lookup.
pub struct ContentStudio {
    text: Arc<dyn TextGenerationService>,
    image: Arc<dyn ImageGenerationService>,
}

impl ContentStudio {
    pub fn new(
        text: Arc<dyn TextGenerationService>,
        image: Arc<dyn ImageGenerationService>,
    ) -> Self {
        Self { text, image }
    }

    /// Generate a complete blog post: HTML body, SEO metadata, social-media
    /// posts, and optionally the featured image and sub images.
    ///
    /// Sub-image prompts and alt texts are always produced by the content
    /// call; their pixels are only fetched when `should_generate_sub_images`
    /// is set. The featured image is gated independently.
    pub async fn generate_blog_post(&self, request: &BlogPostRequest<'_>) -> Result<GeneratedContent> {
        info!("Generating blog post for topic: {}", request.topic);

        let prompt = prompts::blog_post_prompt(&prompts::BlogPromptParams {
            topic: request.topic,
            theme: request.theme,
            interactive_element_idea: request.interactive_element_idea,
            raw_content: request.raw_content,
            additional_request: request.additional_request,
            current_date: request.current_date,
        });

        let raw = self
            .text
            .generate(&prompt, &ResponseMode::JsonSchema(schema::blog_post_schema()))
            .await?;
        let parsed = shape_from_str::<BlogPostResponse>(&raw)?;

        let image = generate_single_image(
            self.image.as_ref(),
            &parsed.supplementary_info.image_prompt,
            request.aspect_ratio,
            request.should_generate_image,
        )
        .await;

        // Sub images are always rendered wide regardless of the featured
        // image's aspect ratio.
        let sub_prompts: Vec<String> = parsed
            .supplementary_info
            .sub_image_prompts
            .iter()
            .map(|p| p.prompt.clone())
            .collect();
        let sub_outcomes = generate_image_batch(
            Arc::clone(&self.image),
            &sub_prompts,
            AspectRatio::Wide,
            request.should_generate_sub_images,
        )
        .await;

        let sub_images = parsed
            .supplementary_info
            .sub_image_prompts
            .iter()
            .zip(sub_outcomes)
            .map(|(p, outcome)| SubImage {
                prompt: p.prompt.clone(),
                alt_text: p.alt_text.clone(),
                image: outcome,
            })
            .collect();

        info!(
            "Blog post generated ({} chars of HTML, {} sub images)",
            parsed.blog_post_html.len(),
            parsed.supplementary_info.sub_image_prompts.len()
        );

        Ok(GeneratedContent {
            blog_post_html: parsed.blog_post_html,
            supplementary_info: parsed.supplementary_info,
            social_media_posts: parsed.social_media_posts,
            image,
            sub_images,
        })
    }

    /// Revise existing post HTML according to user feedback, returning the
    /// revised HTML only.
    pub async fn regenerate_blog_post_html(
        &self,
        original_html: &str,
        feedback: &str,
        theme: &ColorTheme,
        current_date: NaiveDate,
    ) -> Result<String> {
        let prompt = prompts::revision_prompt(original_html, feedback, theme, current_date);
        let raw = self
            .text
            .generate(&prompt, &ResponseMode::JsonSchema(schema::revision_schema()))
            .await?;
        let parsed = shape_from_str::<RevisionResponse>(&raw)?;
        Ok(parsed.blog_post_html)
    }

    /// Ten topic suggestions following E-E-A-T principles.
    pub async fn generate_eeat_topic_suggestions(
        &self,
        category: &str,
        sub_category: &str,
        current_date: NaiveDate,
    ) -> Result<Vec<String>> {
        self.generate_topics(
            prompts::eeat_topics_prompt(category, sub_category, current_date),
            false,
        )
        .await
    }

    /// Ten topic suggestions for a category.
    pub async fn generate_category_topic_suggestions(
        &self,
        category: &str,
        current_date: NaiveDate,
    ) -> Result<Vec<String>> {
        self.generate_topics(prompts::category_topics_prompt(category, current_date), false)
            .await
    }

    /// Ten evergreen topic suggestions.
    pub async fn generate_evergreen_topic_suggestions(
        &self,
        category: &str,
        sub_category: &str,
        current_date: NaiveDate,
    ) -> Result<Vec<String>> {
        self.generate_topics(
            prompts::evergreen_topics_prompt(category, sub_category, current_date),
            false,
        )
        .await
    }

    /// Ten long-tail topic suggestions grounded in live search trends.
    pub async fn generate_longtail_topic_suggestions(
        &self,
        category: &str,
        current_date: NaiveDate,
    ) -> Result<Vec<String>> {
        self.generate_topics(prompts::longtail_topics_prompt(category, current_date), true)
            .await
    }

    /// Ten topic suggestions derived from a user memo.
    pub async fn generate_topics_from_memo(
        &self,
        memo: &str,
        current_date: NaiveDate,
    ) -> Result<Vec<String>> {
        self.generate_topics(prompts::memo_topics_prompt(memo, current_date), false)
            .await
    }

    /// One-sentence idea for an interactive element fitting the topic.
    pub async fn suggest_interactive_element(&self, topic: &str) -> Result<String> {
        let raw = self
            .text
            .generate(
                &prompts::interactive_element_prompt(topic),
                &ResponseMode::FreeText,
            )
            .await?;
        Ok(raw.trim().to_string())
    }

    async fn generate_topics(&self, prompt: String, use_search: bool) -> Result<Vec<String>> {
        if use_search {
            // Search grounding precludes an enforced schema; the reply is a
            // numbered free-text list.
            let raw = self.text.generate(&prompt, &ResponseMode::SearchGrounded).await?;
            Ok(raw
                .lines()
                .map(strip_list_prefix)
                .filter(|line| !line.is_empty())
                .collect())
        } else {
            let raw = self
                .text
                .generate(&prompt, &ResponseMode::JsonSchema(schema::topic_list_schema()))
                .await?;
            let parsed = shape_from_str::<TopicListResponse>(&raw)?;
            Ok(parsed.topics)
        }
    }
}

/// Parse a schema-constrained reply into its wire type.
///
/// Invalid JSON is a serialization error; valid JSON of the wrong shape is
/// a first-class shape error.
fn shape_from_str<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    serde_json::from_value(value).map_err(|e| Error::Shape(e.to_string()))
}

/// Strip a leading `N. ` list marker from one suggestion line.
fn strip_list_prefix(line: &str) -> String {
    let trimmed = line.trim();
    let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < trimmed.len() {
        if let Some(stripped) = rest.strip_prefix('.') {
            return stripped.trim_start().to_string();
        }
    }
    trimmed.to_string()
}
