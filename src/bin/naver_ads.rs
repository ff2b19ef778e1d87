//! Command line front end: fetch or read a Naver ad search page and print the
//! parsed ads as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use naver_ad_parser::extractor::{extract_linear_text, extract_raw_text};
use naver_ad_parser::{parse_html_bytes, FetchOptions, Options, ParseOutput, SearchClient};

#[derive(Parser)]
#[command(name = "naver_ads", about = "Naver search-ad page parser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the ad search page for a keyword and parse it
    Fetch {
        /// Search keyword
        keyword: String,
        /// What to print
        #[arg(short, long, value_enum, default_value_t = Output::Records)]
        output: Output,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 15)]
        timeout_secs: u64,
        /// Override the search endpoint
        #[arg(long)]
        endpoint: Option<String>,
        /// Also write the fetched HTML to this file
        #[arg(long)]
        save_html: Option<PathBuf>,
    },
    /// Parse a saved search page ("-" reads stdin)
    Parse {
        /// HTML file
        input: PathBuf,
        /// Keyword copied into every record
        #[arg(short, long, default_value = "")]
        keyword: String,
        /// What to print
        #[arg(short, long, value_enum, default_value_t = Output::Records)]
        output: Output,
        /// Minimum promotion text length in characters
        #[arg(long)]
        promotion_min_chars: Option<usize>,
    },
    /// Print the rendered inner text of a saved page
    Text {
        /// HTML file ("-" reads stdin)
        input: PathBuf,
        /// Print the raw text variant instead
        #[arg(long)]
        raw: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Ranked ad records
    Records,
    /// Records plus text, thumbnails and warnings
    Full,
    /// Text handed to the segmenter
    Text,
    /// Raw text variant
    Raw,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            keyword,
            output,
            timeout_secs,
            endpoint,
            save_html,
        } => {
            let mut fetch_options = FetchOptions {
                timeout: Duration::from_secs(timeout_secs),
                ..FetchOptions::default()
            };
            if let Some(endpoint) = endpoint {
                fetch_options.endpoint = endpoint;
            }
            let client = SearchClient::new(fetch_options).context("building HTTP client")?;
            let (page, parsed) = client
                .fetch_and_parse(&keyword, &Options::default())
                .with_context(|| format!("fetching ads for {keyword:?}"))?;
            if let Some(path) = save_html {
                fs::write(&path, &page.html)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
            print_output(&parsed, output)?;
        }
        Commands::Parse {
            input,
            keyword,
            output,
            promotion_min_chars,
        } => {
            let html = read_input(&input)?;
            let parsed = match promotion_min_chars {
                Some(promotion_min_chars) => {
                    let options = Options {
                        promotion_min_chars,
                        ..Options::default()
                    };
                    let html = naver_ad_parser::encoding::transcode_to_utf8(&html);
                    naver_ad_parser::parse_html_with_options(&html, &keyword, &options)
                }
                None => parse_html_bytes(&html, &keyword),
            };
            print_output(&parsed, output)?;
        }
        Commands::Text { input, raw } => {
            let html = naver_ad_parser::encoding::transcode_to_utf8(&read_input(&input)?);
            let text = if raw {
                extract_raw_text(&html)
            } else {
                extract_linear_text(&html)
            };
            println!("{text}");
        }
    }

    tracing::debug!(elapsed = ?t0.elapsed(), "done");
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("reading stdin")?;
        Ok(buffer)
    } else {
        fs::read(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn print_output(parsed: &ParseOutput, output: Output) -> anyhow::Result<()> {
    match output {
        Output::Records => println!("{}", serde_json::to_string_pretty(&parsed.records)?),
        Output::Full => println!("{}", serde_json::to_string_pretty(parsed)?),
        Output::Text => println!("{}", parsed.text),
        Output::Raw => println!("{}", parsed.raw_text),
    }
    Ok(())
}
