use anyhow::Result;
use base64::Engine as _;
use blogsmith::ai::{mime, GeminiImageClient, GeminiTextClient};
use blogsmith::content::{BlogPostRequest, ContentStudio};
use blogsmith::models::{AspectRatio, ColorTheme, Config, GeneratedContent, ImageOutcome};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "blogsmith")]
#[command(about = "Generate a styled Korean blog post with images")]
struct CliArgs {
    /// Blog post topic.
    topic: String,

    /// Publication date in YYYY-MM-DD format (defaults to today).
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    date: Option<NaiveDate>,

    /// JSON file holding a custom color theme.
    #[arg(long, value_name = "FILE")]
    theme_file: Option<PathBuf>,

    /// File with raw notes to expand into the post.
    #[arg(long, value_name = "FILE")]
    notes_file: Option<PathBuf>,

    /// Additional free-text instructions.
    #[arg(long)]
    request: Option<String>,

    /// Idea for an embedded interactive element.
    #[arg(long)]
    interactive: Option<String>,

    /// Render the featured image square (1:1) instead of wide (16:9).
    #[arg(long)]
    square: bool,

    /// Skip featured-image generation.
    #[arg(long)]
    no_image: bool,

    /// Skip sub-image generation (prompts are still produced).
    #[arg(long)]
    no_sub_images: bool,
}

fn parse_date_arg(input: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Expected format: YYYY-MM-DD", input))
}

fn load_theme(path: Option<&Path>) -> Result<ColorTheme> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(ColorTheme::classic_blue()),
    }
}

/// Write the generated post, metadata, and decoded images into `dir`.
fn write_outputs(dir: &Path, content: &GeneratedContent) -> Result<()> {
    fs::create_dir_all(dir)?;

    fs::write(dir.join("post.html"), &content.blog_post_html)?;
    fs::write(
        dir.join("meta.json"),
        serde_json::to_string_pretty(content)?,
    )?;

    write_image(dir, "featured", &content.image)?;
    for (index, sub) in content.sub_images.iter().enumerate() {
        write_image(dir, &format!("sub_{}", index + 1), &sub.image)?;
    }

    Ok(())
}

fn write_image(dir: &Path, base_name: &str, outcome: &ImageOutcome) -> Result<()> {
    let Some(data) = outcome.data() else {
        return Ok(());
    };

    match base64::engine::general_purpose::STANDARD.decode(data) {
        Ok(bytes) => {
            let filename = format!("{}.{}", base_name, mime::image_file_extension(&bytes));
            fs::write(dir.join(&filename), &bytes)?;
            info!("Saved image: {}", filename);
        }
        Err(e) => {
            warn!("Could not decode {} image payload: {}", base_name, e);
        }
    }
    Ok(())
}

async fn run(args: CliArgs) -> Result<()> {
    let config = Config::from_env();
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let theme = load_theme(args.theme_file.as_deref())?;

    let notes = match &args.notes_file {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    // One connection pool shared across both Gemini clients.
    let http_client = reqwest::Client::new();
    let studio = ContentStudio::new(
        Arc::new(GeminiTextClient::new_with_client(
            config.api_key.clone(),
            config.text_model.clone(),
            http_client.clone(),
        )),
        Arc::new(GeminiImageClient::new_with_client(
            config.api_key,
            config.image_model,
            http_client,
        )),
    );

    let content = studio
        .generate_blog_post(&BlogPostRequest {
            topic: &args.topic,
            theme: &theme,
            should_generate_image: !args.no_image,
            should_generate_sub_images: !args.no_sub_images,
            interactive_element_idea: args.interactive.as_deref(),
            raw_content: notes.as_deref(),
            additional_request: args.request.as_deref(),
            aspect_ratio: if args.square {
                AspectRatio::Square
            } else {
                AspectRatio::Wide
            },
            current_date: date,
        })
        .await?;

    let session_id = Uuid::new_v4();
    let output_dir = PathBuf::from("output").join(format!("{}_{}", date, session_id));
    write_outputs(&output_dir, &content)?;
    info!("Post written to {}", output_dir.display());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogsmith=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    info!("Generating blog post for topic: {}", args.topic);

    match run(args).await {
        Ok(_) => {
            info!("Generation completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_date_arg, write_outputs};
    use blogsmith::models::{
        GeneratedContent, ImageOutcome, SocialMediaPosts, SubImage, SupplementaryInfo,
    };

    #[test]
    fn test_parse_date_arg_valid() {
        let parsed = parse_date_arg("2026-08-06").unwrap();
        assert_eq!(parsed.to_string(), "2026-08-06");
    }

    #[test]
    fn test_parse_date_arg_invalid() {
        let err = parse_date_arg("08/06/2026").unwrap_err();
        assert!(err.contains("YYYY-MM-DD"));
    }

    fn sample_content() -> GeneratedContent {
        GeneratedContent {
            blog_post_html: "<div><!--IMAGE_PLACEHOLDER--></div>".to_string(),
            supplementary_info: SupplementaryInfo {
                keywords: vec!["단풍".to_string()],
                image_prompt: "autumn".to_string(),
                alt_text: "가을".to_string(),
                seo_titles: vec!["제목".to_string()],
                sub_image_prompts: vec![],
            },
            social_media_posts: SocialMediaPosts {
                threads: "t".to_string(),
                instagram: "i".to_string(),
                facebook: "f".to_string(),
                x: "x".to_string(),
            },
            // 1x1 PNG
            image: ImageOutcome::Generated(
                "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAIAAACQd1PeAAAADElEQVQImWP4z8AAAAMBAQDJ/pLvAAAAAElFTkSuQmCC".to_string(),
            ),
            sub_images: vec![SubImage {
                prompt: "sub".to_string(),
                alt_text: "서브".to_string(),
                image: ImageOutcome::Skipped,
            }],
        }
    }

    #[test]
    fn test_write_outputs_saves_post_meta_and_images() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("session");

        write_outputs(&out, &sample_content()).unwrap();

        assert!(out.join("post.html").exists());
        assert!(out.join("meta.json").exists());
        assert!(out.join("featured.png").exists());
        // Skipped sub image produces no file.
        assert!(!out.join("sub_1.png").exists());

        let meta = std::fs::read_to_string(out.join("meta.json")).unwrap();
        assert!(meta.contains("\"blogPostHtml\""));
    }

    #[test]
    fn test_write_outputs_tolerates_corrupt_image_payload() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("session");

        let mut content = sample_content();
        content.image = ImageOutcome::Generated("!!!not-base64!!!".to_string());

        write_outputs(&out, &content).unwrap();
        assert!(out.join("post.html").exists());
        assert!(!out.join("featured.png").exists());
    }
}
