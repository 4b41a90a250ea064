use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use item_core::{ItemNameExtractor, RepresentationMode, SelectionConfig, DEFAULT_MAX_TOKENS};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "item-cli")]
#[command(about = "Extract item names from Spanish product descriptions")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, short, default_value = "false")]
    debug: bool,

    #[command(flatten)]
    selection: SelectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct SelectionArgs {
    /// Maximum number of tokens in the item name
    #[arg(
        long,
        short = 'n',
        global = true,
        default_value_t = DEFAULT_MAX_TOKENS,
        allow_negative_numbers = true
    )]
    max_tokens: i64,

    /// Use lemmas instead of surface text
    #[arg(long, global = true, default_value = "false")]
    lemmatize: bool,

    /// Use stems instead of surface text (wins over --lemmatize)
    #[arg(long, global = true, default_value = "false")]
    stem: bool,
}

impl SelectionArgs {
    fn to_config(&self) -> SelectionConfig {
        SelectionConfig::new(
            self.max_tokens,
            RepresentationMode::from_flags(self.lemmatize, self.stem),
        )
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Extract the item name of a single description
    Extract {
        /// Product description
        text: String,
    },
    /// Extract item names line by line from a file or stdin
    Batch {
        /// Input file, one description per line (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Ask a running item-server instead of extracting locally
    Remote {
        /// Product description
        text: String,

        #[arg(long, default_value = "http://localhost:8000")]
        server_url: String,
    },
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ItemRequest<'a> {
    text: &'a str,
    max_tokens: i64,
    use_lemmatization: bool,
    use_stemming: bool,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ItemNameResponse {
    item_name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.selection.to_config();

    if cli.debug {
        eprintln!("{}", "[DEBUG] Debug mode enabled".dimmed());
        eprintln!("{}", format!("[DEBUG] Selection: {:?}", config).dimmed());
    }

    match cli.command {
        Commands::Extract { text } => extract_one(&text, &config, cli.debug),
        Commands::Batch { file } => extract_batch(file, &config, cli.debug),
        Commands::Remote { text, server_url } => {
            extract_remote(&server_url, &text, &cli.selection, cli.debug).await
        }
    }
}

fn extract_one(text: &str, config: &SelectionConfig, debug: bool) -> anyhow::Result<()> {
    let extractor = ItemNameExtractor::spanish(None);
    let start = Instant::now();
    let name = extractor.extract(text, config)?;

    if debug {
        eprintln!(
            "{}",
            format!("[DEBUG] Extracted in {:?}", start.elapsed()).dimmed()
        );
    }

    if name.is_unknown() {
        println!("{}", name.as_str().yellow());
    } else {
        println!("{}", name.as_str().green());
    }
    Ok(())
}

fn extract_batch(
    file: Option<PathBuf>,
    config: &SelectionConfig,
    debug: bool,
) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(File::open(&path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let extractor = ItemNameExtractor::spanish(None);
    let start = Instant::now();
    let mut processed = 0usize;
    let mut unknown = 0usize;

    for line in reader.lines() {
        let line = line?;
        let name = extractor.extract(line.trim(), config)?;
        if name.is_unknown() {
            unknown += 1;
        }
        processed += 1;
        println!("{}\t{}", line, name);
    }

    if debug {
        eprintln!(
            "{}",
            format!(
                "[DEBUG] {} lines ({} unknown) in {:?}",
                processed,
                unknown,
                start.elapsed()
            )
            .dimmed()
        );
    }
    Ok(())
}

async fn extract_remote(
    server_url: &str,
    text: &str,
    selection: &SelectionArgs,
    debug: bool,
) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let request = ItemRequest {
        text,
        max_tokens: selection.max_tokens,
        use_lemmatization: selection.lemmatize,
        use_stemming: selection.stem,
    };

    let url = format!("{}/extract_item_name", server_url.trim_end_matches('/'));

    if debug {
        eprintln!("{}", format!("[DEBUG] POST {}", url).dimmed());
        eprintln!(
            "{}",
            format!("[DEBUG] Request body: {}", serde_json::to_string(&request)?).dimmed()
        );
    }

    let start = Instant::now();
    let response = client.post(&url).json(&request).send().await?;

    if debug {
        eprintln!(
            "{}",
            format!("[DEBUG] Response: {} in {:?}", response.status(), start.elapsed()).dimmed()
        );
    }

    if response.status().is_success() {
        let body: ItemNameResponse = response.json().await?;
        println!("{}", body.item_name.green());
    } else {
        let status = response.status();
        let text = response.text().await?;
        println!("{}", format!("❌ Error: {}", status).red());
        println!("{}", text.red());
        anyhow::bail!("server returned {}", status);
    }

    Ok(())
}
