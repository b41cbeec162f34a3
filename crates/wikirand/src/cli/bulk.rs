use crate::prelude::{println, *};
use colored::Colorize;
use wikirand::{BulkOptions, BulkRecord, Transport, WikiRand};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct BulkArgs {
    /// Number of random articles
    #[arg(short, long, env = "WIKIRAND_LIMIT", default_value = "1")]
    pub limit: u32,

    /// Sentences per extract (0 to limit by characters instead)
    #[arg(long, default_value = "5")]
    pub sentences: u32,

    /// Characters per extract, used when --sentences is 0
    #[arg(long, default_value = "200")]
    pub chars: u32,

    /// Also collect image URLs for every article
    #[arg(long)]
    pub images: bool,

    /// Skip images smaller than this many bytes
    #[arg(long, default_value = "102400")]
    pub min_image_size: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&BulkArgs> for BulkOptions {
    fn from(args: &BulkArgs) -> Self {
        BulkOptions {
            limit: args.limit,
            sentences: args.sentences,
            chars: args.chars,
            with_images: args.images,
            min_image_size: args.min_image_size,
        }
    }
}

pub async fn run<T: Transport>(wiki: &mut WikiRand<T>, args: BulkArgs) -> Result<()> {
    let records = wiki
        .fetch_bulk(BulkOptions::from(&args))
        .await
        .context("Failed to fetch bulk articles")?;

    if args.json {
        println!("{}", format_bulk_json(&records)?);
    } else {
        println!("{}", format_bulk_text(&records));
    }

    Ok(())
}

/// Convert bulk records to JSON string
fn format_bulk_json(records: &[BulkRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert bulk records to formatted text with colors
fn format_bulk_text(records: &[BulkRecord]) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("RANDOM ARTICLES ({})", records.len())
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if records.is_empty() {
        result.push_str(&format!("\n{}\n", "No articles returned.".yellow()));
        return result;
    }

    for (idx, record) in records.iter().enumerate() {
        result.push_str(&format!(
            "\n{} {}\n",
            format!("[{}]", idx + 1).yellow().bold(),
            record.title.white().bold()
        ));
        result.push_str(&format!(
            "    {}: {}\n",
            "URL".green(),
            record.url.cyan().underline()
        ));
        result.push_str(&format!(
            "    {}: {} | {}: {}\n",
            "ID".green(),
            record.page_id.to_string().bright_white(),
            "Length".green(),
            record.length.to_string().bright_yellow()
        ));

        if !record.text.is_empty() {
            result.push_str(&format!("    {}\n", record.text));
        }

        if let Some(images) = &record.images {
            result.push_str(&format!(
                "    {}: {}\n",
                "Images".green(),
                images.len().to_string().bright_magenta()
            ));
            for url in images {
                result.push_str(&format!("      {}\n", url.cyan()));
            }
        }
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["ID", "Title", "Length"]);
    for record in records {
        table.add_row(prettytable::row![record.page_id, record.title, record.length]);
    }

    result.push_str(&format!("\n{}\n", "SUMMARY".bright_yellow().bold()));
    result.push_str(&table.to_string());

    result
}
