//! PageFetch CLI - fetch a URL and print it as markdown, text, or raw HTML

use std::time::Duration;

use clap::Parser;
use pagefetch::Tool;

/// PageFetch - fetch a web page and convert it
#[derive(Parser, Debug)]
#[command(name = "pagefetch")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL to fetch (required)
    #[arg(long)]
    url: Option<String>,

    /// Output format (markdown, text, or html)
    #[arg(long, default_value = "markdown")]
    format: String,

    /// Custom User-Agent
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Require URL
    let url = match args.url {
        Some(url) => url,
        None => {
            eprintln!("Error: Missing required parameter: url");
            eprintln!("Usage: pagefetch --url <URL>");
            std::process::exit(1);
        }
    };

    // Validate format
    let format = args.format.to_lowercase();
    if !matches!(format.as_str(), "markdown" | "text" | "html") {
        eprintln!("Error: Invalid format: must be markdown, text, or html");
        std::process::exit(1);
    }

    // Build tool
    let mut builder = Tool::builder();

    if let Some(ua) = args.user_agent {
        builder = builder.user_agent(ua);
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    let tool = builder.build();

    // Execute: the result is always a string; failures carry the prefix
    let result = tool.execute(&url, &format).await;
    let failed = result.starts_with("Error: ");

    println!("{result}");

    if failed {
        std::process::exit(1);
    }
}
