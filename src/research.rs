//! Keyword and SEO research use cases
//!
//! Each operation feeds free-form (often search-grounded) model output
//! through the tolerant extractor into a loosely-typed research record.

use crate::ai::TextGenerationService;
use crate::extract::extract_typed;
use crate::models::{
    BlogPostData, BlogStrategyReportData, GeneratedTopic, GoogleSerpData, KeywordData,
    KeywordMetrics, NaverNewsData, NewsStrategyIdea, RecommendedKeyword, ResponseMode,
    SearchSource, SerpStrategyReportData, SustainableTopicCategory, WeatherData,
};
use crate::{prompts, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Research facade over the text service.
pub struct KeywordResearcher {
    text: Arc<dyn TextGenerationService>,
}

impl KeywordResearcher {
    pub fn new(text: Arc<dyn TextGenerationService>) -> Self {
        Self { text }
    }

    async fn extract<T: DeserializeOwned>(&self, prompt: String, mode: ResponseMode) -> Result<T> {
        let raw = self.text.generate(&prompt, &mode).await?;
        extract_typed(&raw)
    }

    /// Current Seoul weather, grounded in live search.
    pub async fn fetch_current_weather(&self) -> Result<WeatherData> {
        self.extract(prompts::weather_prompt(), ResponseMode::SearchGrounded)
            .await
    }

    /// Three topic suggestions for one main keyword.
    pub async fn generate_topics_from_main_keyword(
        &self,
        main_keyword: &str,
    ) -> Result<Vec<GeneratedTopic>> {
        self.extract(
            prompts::main_keyword_topics_prompt(main_keyword),
            ResponseMode::FreeText,
        )
        .await
    }

    /// Three topic suggestions combining the main and related keywords.
    pub async fn generate_topics_from_all_keywords(
        &self,
        main_keyword: &str,
        related_keywords: &[String],
    ) -> Result<Vec<GeneratedTopic>> {
        self.extract(
            prompts::all_keywords_topics_prompt(main_keyword, related_keywords),
            ResponseMode::FreeText,
        )
        .await
    }

    /// Strategy report derived from competitor blog titles.
    pub async fn generate_blog_strategy(
        &self,
        main_keyword: &str,
        blog_posts: &[BlogPostData],
    ) -> Result<BlogStrategyReportData> {
        let titles: Vec<String> = blog_posts.iter().map(|p| p.title.clone()).collect();
        self.extract(
            prompts::blog_strategy_prompt(main_keyword, &titles),
            ResponseMode::FreeText,
        )
        .await
    }

    /// Four trending keyword recommendations, grounded in live search.
    pub async fn fetch_recommended_keywords(&self) -> Result<Vec<RecommendedKeyword>> {
        self.extract(
            prompts::recommended_keywords_prompt(),
            ResponseMode::SearchGrounded,
        )
        .await
    }

    /// Evergreen topic clusters for one keyword.
    pub async fn generate_sustainable_topics(
        &self,
        keyword: &str,
    ) -> Result<Vec<SustainableTopicCategory>> {
        self.extract(
            prompts::sustainable_topics_prompt(keyword),
            ResponseMode::FreeText,
        )
        .await
    }

    /// Content strategy derived from a SERP snapshot.
    pub async fn generate_serp_strategy(
        &self,
        main_keyword: &str,
        serp_data: &GoogleSerpData,
    ) -> Result<SerpStrategyReportData> {
        self.extract(
            prompts::serp_strategy_prompt(main_keyword, serp_data),
            ResponseMode::FreeText,
        )
        .await
    }

    /// Post ideas derived from news headlines.
    pub async fn generate_strategy_from_news(
        &self,
        news: &[NaverNewsData],
    ) -> Result<Vec<NewsStrategyIdea>> {
        let titles: Vec<String> = news.iter().map(|n| n.title.clone()).collect();
        self.extract(prompts::news_strategy_prompt(&titles), ResponseMode::FreeText)
            .await
    }

    /// Related searches and "people also ask" for one keyword, grounded in
    /// live search.
    pub async fn generate_related_keywords(&self, keyword: &str) -> Result<GoogleSerpData> {
        self.extract(
            prompts::serp_analysis_prompt(keyword),
            ResponseMode::SearchGrounded,
        )
        .await
    }

    /// Ten autocomplete-style related keywords, numbered from 1.
    pub async fn fetch_related_keywords(
        &self,
        keyword: &str,
        source: SearchSource,
    ) -> Result<Vec<KeywordData>> {
        let keywords: Vec<String> = self
            .extract(
                prompts::autocomplete_prompt(keyword, source),
                ResponseMode::FreeText,
            )
            .await?;
        Ok(keywords
            .into_iter()
            .enumerate()
            .map(|(index, keyword)| KeywordData {
                id: index + 1,
                keyword,
            })
            .collect())
    }

    /// Ten dummy Naver blog search results, renumbered from 1.
    pub async fn fetch_naver_blog_posts(&self, keyword: &str) -> Result<Vec<BlogPostData>> {
        let mut posts: Vec<BlogPostData> = self
            .extract(
                prompts::naver_blog_dummy_prompt(keyword),
                ResponseMode::FreeText,
            )
            .await?;
        for (index, post) in posts.iter_mut().enumerate() {
            post.id = index + 1;
        }
        Ok(posts)
    }

    /// Deep competition analysis for one keyword, grounded in live search.
    pub async fn analyze_keyword_competition(&self, keyword: &str) -> Result<KeywordMetrics> {
        self.extract(
            prompts::keyword_competition_prompt(keyword),
            ResponseMode::SearchGrounded,
        )
        .await
    }

    /// Five dummy Naver news results, renumbered from 1.
    pub async fn fetch_naver_news(&self, keyword: &str) -> Result<Vec<NaverNewsData>> {
        let mut news: Vec<NaverNewsData> = self
            .extract(
                prompts::naver_news_dummy_prompt(keyword),
                ResponseMode::SearchGrounded,
            )
            .await?;
        for (index, item) in news.iter_mut().enumerate() {
            item.id = index + 1;
        }
        Ok(news)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockTextClient;
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn researcher(text: MockTextClient) -> KeywordResearcher {
        KeywordResearcher::new(Arc::new(text))
    }

    #[tokio::test]
    async fn test_weather_extracted_from_prose_wrapped_reply() {
        let text = MockTextClient::new().with_response(
            "오늘 서울 날씨입니다:\n```json\n{\"temperature\": \"29°C\", \"condition\": \"맑음\", \"wind\": \"남서풍 2m/s\", \"humidity\": \"65%\"}\n```"
                .to_string(),
        );

        let weather = researcher(text).fetch_current_weather().await.unwrap();
        assert_eq!(weather.temperature, "29°C");
        assert_eq!(weather.condition, "맑음");
    }

    #[tokio::test]
    async fn test_related_keywords_are_numbered_from_one() {
        let text = MockTextClient::new()
            .with_response("[\"캠핑장 추천\", \"캠핑 준비물\", \"캠핑 요리\"]".to_string());

        let keywords = researcher(text)
            .fetch_related_keywords("캠핑", SearchSource::Naver)
            .await
            .unwrap();

        assert_eq!(keywords.len(), 3);
        assert_eq!(keywords[0].id, 1);
        assert_eq!(keywords[2].id, 3);
        assert_eq!(keywords[1].keyword, "캠핑 준비물");
    }

    #[tokio::test]
    async fn test_naver_blog_posts_renumbered() {
        let text = MockTextClient::new().with_response(
            r#"[
                {"title": "첫 포스트", "link": "https://blog.example/1"},
                {"title": "둘째 포스트", "link": "https://blog.example/2"}
            ] 참고하세요"#
                .to_string(),
        );

        let posts = researcher(text).fetch_naver_blog_posts("캠핑").await.unwrap();
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].id, 2);
        assert_eq!(posts[1].title, "둘째 포스트");
    }

    #[tokio::test]
    async fn test_competition_metrics_tolerate_partial_fields() {
        let text = MockTextClient::new().with_response(
            "{\"keyword\": \"캠핑\", \"competitionLevel\": \"높음\", \"difficultyScore\": 72}"
                .to_string(),
        );

        let metrics = researcher(text)
            .analyze_keyword_competition("캠핑")
            .await
            .unwrap();
        assert_eq!(metrics.difficulty_score, 72);
        assert!(metrics.recommendation.is_empty());
    }

    #[tokio::test]
    async fn test_blog_strategy_parses_report() {
        let text = MockTextClient::new().with_response(
            r#"{"analysis": "경쟁이 치열함", "suggestedTopics": [
                {"title": "차별화 주제", "rationale": "검색량 대비 경쟁 낮음"}
            ]}"#
            .to_string(),
        );

        let posts = vec![BlogPostData {
            id: 1,
            title: "기존 인기 포스트".to_string(),
            link: String::new(),
            description: String::new(),
            blogger_name: String::new(),
            post_date: String::new(),
        }];

        let report = researcher(text)
            .generate_blog_strategy("캠핑", &posts)
            .await
            .unwrap();
        assert_eq!(report.analysis, "경쟁이 치열함");
        assert_eq!(report.suggested_topics[0].title, "차별화 주제");
    }

    #[tokio::test]
    async fn test_unextractable_reply_is_extraction_error() {
        let text = MockTextClient::new().with_response("검색 결과가 없습니다".to_string());

        let err = researcher(text).fetch_current_weather().await.unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }
}
