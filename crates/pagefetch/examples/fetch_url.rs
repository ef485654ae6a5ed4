//! Example: fetch one page in each output format
//!
//! Run with: cargo run -p pagefetch --example fetch_url
//!
//! Demonstrates format selection, URL normalization, and the error contract.

use pagefetch::{normalize, Tool};

const FORMATS: &[&str] = &["markdown", "text", "html"];

#[tokio::main]
async fn main() {
    let tool = Tool::default();
    let url = "https://httpbin.org/html";

    println!("PageFetch examples");
    println!("==================\n");

    for format in FORMATS {
        println!("--- {url} as {format} ---");
        let result = tool.execute(url, format).await;
        println!("{}\n", preview(&result, 300));
    }

    println!("--- URL normalization ---");
    for raw in ["http://httpbin.org/html", "httpbin.org/html", "  https://httpbin.org/html  "] {
        println!("{raw:35} -> {}", normalize(raw));
    }

    println!("\n--- Error contract ---");
    let result = tool.execute("not-a-valid-url", "text").await;
    println!("not-a-valid-url -> {}", preview(&result, 120));
}

fn preview(s: &str, limit: usize) -> String {
    let short: String = s.chars().take(limit).collect();
    let short = short.replace('\n', " ");
    if s.chars().count() > limit {
        format!("{short}...")
    } else {
        short
    }
}
