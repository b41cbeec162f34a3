use crate::prelude::{println, *};
use colored::Colorize;
use serde::Serialize;
use wikirand::{Extracted, LangLink, Selection, Transport, WikiRand};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct RandomOptions {
    /// Number of random articles to load
    #[arg(short, long, env = "WIKIRAND_COUNT", default_value = "1")]
    pub count: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ArticleOptions {
    /// Number of random articles to load first
    #[arg(short, long, env = "WIKIRAND_COUNT", default_value = "1")]
    pub count: u32,

    /// Report only on the article at this position (0-indexed)
    #[arg(short, long, conflicts_with = "all")]
    pub index: Option<usize>,

    /// Report on every loaded article, keyed by page id
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ArticleOptions {
    pub fn selection(&self) -> Selection {
        match (self.index, self.all) {
            (Some(index), _) => Selection::Index(index),
            (None, true) => Selection::All,
            (None, false) => Selection::Default,
        }
    }
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SentencesOptions {
    #[clap(flatten)]
    pub article: ArticleOptions,

    /// Number of sentences per article
    #[arg(long, default_value = "1")]
    pub sentences: u32,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ExcerptOptions {
    #[clap(flatten)]
    pub article: ArticleOptions,

    /// Number of characters per excerpt
    #[arg(long, default_value = "200")]
    pub chars: u32,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ImagesOptions {
    #[clap(flatten)]
    pub article: ArticleOptions,

    /// Skip images smaller than this many bytes
    #[arg(long, default_value = "0")]
    pub min_size: u64,
}

/// Per-article field a subcommand reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Link,
    Sentences(u32),
    Text,
    Excerpt(u32),
    Categories,
    LangLinks,
    Images(u64),
}

impl Field {
    fn label(&self) -> &'static str {
        match self {
            Field::Title => "TITLE",
            Field::Link => "LINK",
            Field::Sentences(_) => "FIRST SENTENCES",
            Field::Text => "PLAIN TEXT",
            Field::Excerpt(_) => "EXCERPT",
            Field::Categories => "CATEGORIES",
            Field::LangLinks => "OTHER LANGUAGES",
            Field::Images(_) => "IMAGES",
        }
    }
}

pub async fn run_random<T: Transport>(wiki: &mut WikiRand<T>, options: RandomOptions) -> Result<()> {
    let ids = wiki.fetch_random_articles(options.count).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
    } else {
        println!("{}", format_ids_text(&ids));
    }

    Ok(())
}

pub async fn run<T: Transport>(
    wiki: &mut WikiRand<T>,
    field: Field,
    options: ArticleOptions,
) -> Result<()> {
    wiki.fetch_random_articles(options.count).await?;
    let selection = options.selection();
    let label = field.label();

    let output = match field {
        Field::Title => render(wiki.title(selection).await?, label, options.json, text_value)?,
        Field::Link => render(wiki.link(selection).await?, label, options.json, link_value)?,
        Field::Sentences(count) => render(
            wiki.first_sentences(count, selection).await?,
            label,
            options.json,
            text_value,
        )?,
        Field::Text => render(wiki.plain_text(selection).await?, label, options.json, text_value)?,
        Field::Excerpt(chars) => render(
            wiki.excerpt_by_chars(chars, selection).await?,
            label,
            options.json,
            text_value,
        )?,
        Field::Categories => render(
            wiki.categories(selection).await?,
            label,
            options.json,
            list_value,
        )?,
        Field::LangLinks => render(
            wiki.other_language_links(selection).await?,
            label,
            options.json,
            lang_links_value,
        )?,
        Field::Images(min_size) => render(
            wiki.article_images(selection, min_size).await?,
            label,
            options.json,
            list_value,
        )?,
    };

    println!("{output}");
    Ok(())
}

fn render<V: Serialize>(
    extracted: Extracted<V>,
    label: &str,
    json: bool,
    value: fn(&V) -> String,
) -> Result<String> {
    if json {
        format_extracted_json(&extracted)
    } else {
        Ok(format_extracted_text(&extracted, label, value))
    }
}

/// Convert an extracted value to a JSON string
fn format_extracted_json<V: Serialize>(extracted: &Extracted<V>) -> Result<String> {
    serde_json::to_string_pretty(extracted).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert an extracted value to formatted text with colors
fn format_extracted_text<V>(extracted: &Extracted<V>, label: &str, value: fn(&V) -> String) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", label.bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    match extracted {
        Extracted::One(v) => result.push_str(&format!("\n{}\n", value(v))),
        Extracted::All(values) if values.is_empty() => {
            result.push_str(&format!("\n{}\n", "Nothing found.".yellow()));
        }
        Extracted::All(values) => {
            for (page_id, v) in values {
                result.push_str(&format!(
                    "\n{} {}\n",
                    format!("[{page_id}]").yellow().bold(),
                    value(v)
                ));
            }
        }
    }

    result
}

fn format_ids_text(ids: &[u64]) -> String {
    if ids.is_empty() {
        return "No articles returned.".yellow().to_string();
    }

    let mut result = format!("{}\n", "Loaded article ids:".green());
    for id in ids {
        result.push_str(&format!("  {}\n", id.to_string().bright_white()));
    }
    result
}

fn text_value(text: &String) -> String {
    if text.is_empty() {
        "(empty)".bright_black().to_string()
    } else {
        text.white().bold().to_string()
    }
}

fn link_value(link: &String) -> String {
    link.cyan().underline().to_string()
}

fn list_value(items: &Vec<String>) -> String {
    if items.is_empty() {
        return "(none)".bright_black().to_string();
    }

    items
        .iter()
        .map(|item| format!("\n    - {item}"))
        .collect::<String>()
}

fn lang_links_value(links: &Vec<LangLink>) -> String {
    if links.is_empty() {
        return "(none)".bright_black().to_string();
    }

    links
        .iter()
        .map(|link| {
            format!(
                "\n    {}: {} {}",
                link.lang.green(),
                link.title.bright_white(),
                link.url.cyan()
            )
        })
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn create_test_options(index: Option<usize>, all: bool) -> ArticleOptions {
        ArticleOptions {
            count: 2,
            index,
            all,
            json: false,
        }
    }

    #[test]
    fn test_selection_from_options() {
        assert_eq!(create_test_options(None, false).selection(), Selection::Default);
        assert_eq!(create_test_options(None, true).selection(), Selection::All);
        assert_eq!(create_test_options(Some(1), false).selection(), Selection::Index(1));
    }

    #[test]
    fn test_format_extracted_json_one() {
        let json = format_extracted_json(&Extracted::One("Seven".to_string())).unwrap();
        assert_eq!(json, "\"Seven\"");
    }

    #[test]
    fn test_format_extracted_json_all() {
        let mut values = BTreeMap::new();
        values.insert(7u64, vec!["Cats".to_string()]);
        let json = format_extracted_json(&Extracted::All(values)).unwrap();
        assert!(json.contains("\"7\""));
        assert!(json.contains("\"Cats\""));
    }

    #[test]
    fn test_format_extracted_text_all() {
        let mut values = BTreeMap::new();
        values.insert(7u64, "Seven".to_string());
        values.insert(8u64, "Eight".to_string());
        let text = format_extracted_text(&Extracted::All(values), "TITLE", text_value);
        assert!(text.contains("TITLE"));
        assert!(text.contains("[7]"));
        assert!(text.contains("Eight"));
    }

    #[test]
    fn test_format_extracted_text_empty_map() {
        let text = format_extracted_text::<Vec<String>>(
            &Extracted::All(BTreeMap::new()),
            "IMAGES",
            list_value,
        );
        assert!(text.contains("Nothing found."));
    }

    #[test]
    fn test_list_value() {
        let text = list_value(&vec!["Living people".to_string(), "1970 births".to_string()]);
        assert!(text.contains("- Living people"));
        assert!(text.contains("- 1970 births"));
    }

    #[test]
    fn test_format_ids_text() {
        let text = format_ids_text(&[12, 34]);
        assert!(text.contains("12"));
        assert!(text.contains("34"));
        assert!(format_ids_text(&[]).contains("No articles returned."));
    }
}
