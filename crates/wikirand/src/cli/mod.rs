use crate::prelude::{println, *};
use wikirand::{WikiConfig, WikiRand};

pub mod article;
pub mod bulk;

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Load random article ids
    #[clap(name = "random")]
    Random(article::RandomOptions),

    /// Titles of random articles
    #[clap(name = "title")]
    Title(article::ArticleOptions),

    /// Links to random articles
    #[clap(name = "link")]
    Link(article::ArticleOptions),

    /// First sentences of random articles
    #[clap(name = "sentences")]
    Sentences(article::SentencesOptions),

    /// Full plain text of random articles
    #[clap(name = "text")]
    Text(article::ArticleOptions),

    /// Excerpts of random articles cut to a number of characters
    #[clap(name = "excerpt")]
    Excerpt(article::ExcerptOptions),

    /// Categories of random articles
    #[clap(name = "categories")]
    Categories(article::ArticleOptions),

    /// Links to the same articles in other languages
    #[clap(name = "langlinks")]
    Langlinks(article::ArticleOptions),

    /// Image URLs of random articles
    #[clap(name = "images")]
    Images(article::ImagesOptions),

    /// Fetch a batch of random articles with titles, links and extracts
    #[clap(name = "bulk")]
    Bulk(bulk::BulkArgs),
}

pub async fn run(command: Commands, global: crate::Global) -> Result<()> {
    let config = WikiConfig::default()
        .with_overrides(global.language.as_deref(), global.engine.as_deref())?;

    if global.verbose {
        println!("Wiki API endpoint: {}", config.endpoint());
        println!();
    }

    let mut wiki = WikiRand::new(config)?;

    use article::Field;
    match command {
        Commands::Random(options) => article::run_random(&mut wiki, options).await,
        Commands::Title(options) => article::run(&mut wiki, Field::Title, options).await,
        Commands::Link(options) => article::run(&mut wiki, Field::Link, options).await,
        Commands::Sentences(options) => {
            article::run(&mut wiki, Field::Sentences(options.sentences), options.article).await
        }
        Commands::Text(options) => article::run(&mut wiki, Field::Text, options).await,
        Commands::Excerpt(options) => {
            article::run(&mut wiki, Field::Excerpt(options.chars), options.article).await
        }
        Commands::Categories(options) => {
            article::run(&mut wiki, Field::Categories, options).await
        }
        Commands::Langlinks(options) => article::run(&mut wiki, Field::LangLinks, options).await,
        Commands::Images(options) => {
            article::run(&mut wiki, Field::Images(options.min_size), options.article).await
        }
        Commands::Bulk(options) => bulk::run(&mut wiki, options).await,
    }
}
