//! Prompt templates and builders
//!
//! Pure template assembly: typed parameters in, a single prompt string out.
//! Templates live under `data/prompts/` and use `{{key}}` placeholders.
//! Optional parameters toggle whole instructional blocks in or out.

use crate::models::{ColorTheme, GoogleSerpData, SearchSource};
use chrono::{Datelike, NaiveDate};

pub const BLOG_POST: &str = include_str!("../data/prompts/blog_post.txt");
pub const BLOG_TASK_TOPIC: &str = include_str!("../data/prompts/blog_task_topic.txt");
pub const BLOG_TASK_NOTES: &str = include_str!("../data/prompts/blog_task_notes.txt");
pub const BLOG_INTERACTIVE: &str = include_str!("../data/prompts/blog_interactive.txt");
pub const BLOG_RAW_NOTES: &str = include_str!("../data/prompts/blog_raw_notes.txt");
pub const BLOG_ADDITIONAL_REQUEST: &str =
    include_str!("../data/prompts/blog_additional_request.txt");
pub const BLOG_REVISION: &str = include_str!("../data/prompts/blog_revision.txt");

pub const TOPICS_EEAT: &str = include_str!("../data/prompts/topics_eeat.txt");
pub const TOPICS_CATEGORY: &str = include_str!("../data/prompts/topics_category.txt");
pub const TOPICS_EVERGREEN: &str = include_str!("../data/prompts/topics_evergreen.txt");
pub const TOPICS_LONGTAIL: &str = include_str!("../data/prompts/topics_longtail.txt");
pub const TOPICS_MEMO: &str = include_str!("../data/prompts/topics_memo.txt");
pub const INTERACTIVE_ELEMENT: &str = include_str!("../data/prompts/interactive_element.txt");

pub const WEATHER: &str = include_str!("../data/prompts/weather.txt");
pub const TOPICS_MAIN_KEYWORD: &str = include_str!("../data/prompts/topics_main_keyword.txt");
pub const TOPICS_ALL_KEYWORDS: &str = include_str!("../data/prompts/topics_all_keywords.txt");
pub const BLOG_STRATEGY: &str = include_str!("../data/prompts/blog_strategy.txt");
pub const RECOMMENDED_KEYWORDS: &str = include_str!("../data/prompts/recommended_keywords.txt");
pub const SUSTAINABLE_TOPICS: &str = include_str!("../data/prompts/sustainable_topics.txt");
pub const SERP_STRATEGY: &str = include_str!("../data/prompts/serp_strategy.txt");
pub const NEWS_STRATEGY: &str = include_str!("../data/prompts/news_strategy.txt");
pub const SERP_ANALYSIS: &str = include_str!("../data/prompts/serp_analysis.txt");
pub const AUTOCOMPLETE: &str = include_str!("../data/prompts/autocomplete.txt");
pub const NAVER_BLOG_DUMMY: &str = include_str!("../data/prompts/naver_blog_dummy.txt");
pub const NAVER_NEWS_DUMMY: &str = include_str!("../data/prompts/naver_news_dummy.txt");
pub const KEYWORD_COMPETITION: &str = include_str!("../data/prompts/keyword_competition.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parameters for the blog-post generation prompt.
pub struct BlogPromptParams<'a> {
    pub topic: &'a str,
    pub theme: &'a ColorTheme,
    /// Idea for an embedded interactive HTML/JS element.
    pub interactive_element_idea: Option<&'a str>,
    /// User notes/draft the post should be expanded from.
    pub raw_content: Option<&'a str>,
    /// Free-text extra instructions.
    pub additional_request: Option<&'a str>,
    pub current_date: NaiveDate,
}

/// Assemble the full blog-post generation prompt.
///
/// The current date is injected verbatim; the year is derived from it for
/// the year-only recency phrasing rule. Each optional parameter toggles its
/// whole instructional block.
pub fn blog_post_prompt(params: &BlogPromptParams) -> String {
    let colors = &params.theme.colors;
    let theme_colors_json =
        serde_json::to_string(colors).expect("theme colors serialize to JSON");
    let current_date = iso_date(params.current_date);
    let current_year = params.current_date.year().to_string();

    let task_description = if params.raw_content.is_some() {
        render(BLOG_TASK_NOTES, &[("topic", params.topic)])
    } else {
        render(BLOG_TASK_TOPIC, &[("topic", params.topic)])
    };

    let interactive_block = match params.interactive_element_idea {
        Some(idea) => render(
            BLOG_INTERACTIVE,
            &[
                ("idea", idea),
                ("themeName", &params.theme.name),
                ("primary", &colors.primary),
                ("primaryDark", &colors.primary_dark),
                ("highlightBg", &colors.highlight_bg),
                ("textColor", &colors.text),
            ],
        ),
        None => String::new(),
    };

    let content_block = match params.raw_content {
        Some(notes) => render(BLOG_RAW_NOTES, &[("topic", params.topic), ("notes", notes)]),
        None => String::new(),
    };

    let additional_block = match params.additional_request {
        Some(request) => {
            let request_title = if params.raw_content.is_some() {
                "메모 기반 생성 추가 요청사항"
            } else {
                "기사에 반영할 추가 요청사항"
            };
            render(
                BLOG_ADDITIONAL_REQUEST,
                &[("requestTitle", request_title), ("request", request)],
            )
        }
        None => String::new(),
    };

    render(
        BLOG_POST,
        &[
            ("taskDescription", &task_description),
            ("themeName", &params.theme.name),
            ("themeColors", &theme_colors_json),
            ("currentDate", &current_date),
            ("currentYear", &current_year),
            ("primary", &colors.primary),
            ("primaryDark", &colors.primary_dark),
            ("textColor", &colors.text),
            ("infoBoxBg", &colors.info_box_bg),
            ("infoBoxBorder", &colors.info_box_border),
            ("warningBoxBg", &colors.warning_box_bg),
            ("warningBoxBorder", &colors.warning_box_border),
            ("tableHeaderBg", &colors.table_header_bg),
            ("tableEvenRowBg", &colors.table_even_row_bg),
            ("tableBorder", &colors.table_border),
            ("interactiveBlock", &interactive_block),
            ("contentBlock", &content_block),
            ("additionalBlock", &additional_block),
        ],
    )
}

/// Prompt for revising existing post HTML from user feedback.
pub fn revision_prompt(
    original_html: &str,
    feedback: &str,
    theme: &ColorTheme,
    current_date: NaiveDate,
) -> String {
    render(
        BLOG_REVISION,
        &[
            ("currentDate", &iso_date(current_date)),
            ("themeName", &theme.name),
            ("feedback", feedback),
            ("originalHtml", original_html),
        ],
    )
}

pub fn eeat_topics_prompt(category: &str, sub_category: &str, current_date: NaiveDate) -> String {
    render(
        TOPICS_EEAT,
        &[
            ("category", category),
            ("subCategory", sub_category),
            ("currentDate", &iso_date(current_date)),
        ],
    )
}

pub fn category_topics_prompt(category: &str, current_date: NaiveDate) -> String {
    render(
        TOPICS_CATEGORY,
        &[
            ("category", category),
            ("currentDate", &iso_date(current_date)),
        ],
    )
}

pub fn evergreen_topics_prompt(
    category: &str,
    sub_category: &str,
    current_date: NaiveDate,
) -> String {
    render(
        TOPICS_EVERGREEN,
        &[
            ("category", category),
            ("subCategory", sub_category),
            ("currentDate", &iso_date(current_date)),
        ],
    )
}

pub fn longtail_topics_prompt(category: &str, current_date: NaiveDate) -> String {
    render(
        TOPICS_LONGTAIL,
        &[
            ("category", category),
            ("currentDate", &iso_date(current_date)),
        ],
    )
}

pub fn memo_topics_prompt(memo: &str, current_date: NaiveDate) -> String {
    render(
        TOPICS_MEMO,
        &[("memo", memo), ("currentDate", &iso_date(current_date))],
    )
}

pub fn interactive_element_prompt(topic: &str) -> String {
    render(INTERACTIVE_ELEMENT, &[("topic", topic)])
}

pub fn weather_prompt() -> String {
    WEATHER.to_string()
}

pub fn main_keyword_topics_prompt(keyword: &str) -> String {
    render(TOPICS_MAIN_KEYWORD, &[("keyword", keyword)])
}

pub fn all_keywords_topics_prompt(main_keyword: &str, related_keywords: &[String]) -> String {
    render(
        TOPICS_ALL_KEYWORDS,
        &[
            ("mainKeyword", main_keyword),
            ("relatedKeywords", &related_keywords.join(", ")),
        ],
    )
}

pub fn blog_strategy_prompt(keyword: &str, titles: &[String]) -> String {
    render(
        BLOG_STRATEGY,
        &[("keyword", keyword), ("titles", &titles.join("\n"))],
    )
}

pub fn recommended_keywords_prompt() -> String {
    RECOMMENDED_KEYWORDS.to_string()
}

pub fn sustainable_topics_prompt(keyword: &str) -> String {
    render(SUSTAINABLE_TOPICS, &[("keyword", keyword)])
}

pub fn serp_strategy_prompt(keyword: &str, serp_data: &GoogleSerpData) -> String {
    let serp_json = serde_json::to_string(serp_data).expect("SERP data serializes to JSON");
    render(
        SERP_STRATEGY,
        &[("keyword", keyword), ("serpData", &serp_json)],
    )
}

pub fn news_strategy_prompt(titles: &[String]) -> String {
    render(NEWS_STRATEGY, &[("titles", &titles.join("\n"))])
}

pub fn serp_analysis_prompt(keyword: &str) -> String {
    render(SERP_ANALYSIS, &[("keyword", keyword)])
}

pub fn autocomplete_prompt(keyword: &str, source: SearchSource) -> String {
    render(
        AUTOCOMPLETE,
        &[("keyword", keyword), ("source", source.as_str())],
    )
}

pub fn naver_blog_dummy_prompt(keyword: &str) -> String {
    render(NAVER_BLOG_DUMMY, &[("keyword", keyword)])
}

pub fn naver_news_dummy_prompt(keyword: &str) -> String {
    render(NAVER_NEWS_DUMMY, &[("keyword", keyword)])
}

pub fn keyword_competition_prompt(keyword: &str) -> String {
    render(KEYWORD_COMPETITION, &[("keyword", keyword)])
}
