//! Gemini response schemas
//!
//! Schema values sent as `generationConfig.responseSchema` when a call uses
//! the schema-constrained JSON mode. The service is asked to conform; this
//! layer does not validate conformance itself, so a non-conforming response
//! surfaces as a shape error when the use-case function deserializes it.

use serde_json::{json, Value};

/// Full blog-post generation schema: HTML body, supplementary SEO info,
/// and social-media posts.
pub fn blog_post_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "blogPostHtml": {
                "type": "STRING",
                "description": "The full HTML content of the blog post with inline styles."
            },
            "supplementaryInfo": {
                "type": "OBJECT",
                "properties": {
                    "keywords": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "An array of 10 relevant SEO keywords."
                    },
                    "imagePrompt": {
                        "type": "STRING",
                        "description": "A detailed image-generation prompt in English for the featured image."
                    },
                    "altText": {
                        "type": "STRING",
                        "description": "A concise, descriptive alt text in Korean for the featured image, optimized for SEO and accessibility."
                    },
                    "seoTitles": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "블로그 썸네일에 사용하기 적합한, 강력하고 요약된 제목 5개의 배열입니다. 제목은 간결하고 시선을 사로잡아야 합니다. 썸네일에서의 더 나은 시각적 구성을 위해, 제안하는 줄바꿈 위치에 슬래시('/')를 사용해주세요."
                    },
                    "subImagePrompts": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "prompt": {
                                    "type": "STRING",
                                    "description": "A detailed image-generation prompt in English for a sub-image."
                                },
                                "altText": {
                                    "type": "STRING",
                                    "description": "A concise, descriptive alt text in Korean for the sub-image, optimized for SEO and accessibility. It should be directly related to the topic."
                                }
                            },
                            "required": ["prompt", "altText"]
                        },
                        "description": "An array of 2-3 objects, each containing a detailed image prompt and a corresponding Korean alt text for sub-images placed sequentially within the blog post, corresponding to <!--SUB_IMAGE_PLACEHOLDER_N--> placeholders. Should be an empty array if sub-images are not requested."
                    }
                },
                "required": ["keywords", "imagePrompt", "altText", "seoTitles", "subImagePrompts"]
            },
            "socialMediaPosts": {
                "type": "OBJECT",
                "properties": {
                    "threads": {
                        "type": "STRING",
                        "description": "A short, engaging post for Threads in Korean, written in an informal 'ban-mal' tone. Must include emojis, encourage conversation, contain exactly one relevant hashtag, and use line breaks for readability."
                    },
                    "instagram": {
                        "type": "STRING",
                        "description": "A visually-focused caption for Instagram in Korean with line breaks for readability. It must include 5-10 relevant hashtags and a call-to-action."
                    },
                    "facebook": {
                        "type": "STRING",
                        "description": "A slightly longer post for Facebook in Korean that summarizes the blog post, using line breaks to separate paragraphs. It should encourage shares and comments."
                    },
                    "x": {
                        "type": "STRING",
                        "description": "A concise post for X (formerly Twitter) in Korean, under 280 characters, with line breaks for readability. It must include 2-3 key hashtags and a link placeholder [BLOG_POST_LINK]."
                    }
                },
                "required": ["threads", "instagram", "facebook", "x"]
            }
        },
        "required": ["blogPostHtml", "supplementaryInfo", "socialMediaPosts"]
    })
}

/// Revision schema: the revised HTML body only.
pub fn revision_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "blogPostHtml": {
                "type": "STRING",
                "description": "The full, revised HTML content of the blog post with inline styles, based on the user's feedback."
            }
        },
        "required": ["blogPostHtml"]
    })
}

/// Topic-suggestion schema: a flat list of 10 topics.
pub fn topic_list_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "topics": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "An array of 10 creative blog topics."
            }
        },
        "required": ["topics"]
    })
}
