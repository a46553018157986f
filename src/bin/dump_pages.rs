use anyhow::Result;
use kenyavax::{
    extract::{extract_pages, fetch_pages},
    fetch::resolve_pdf_link,
    Config,
};
use serde::Serialize;
use std::{env, path::Path, process::exit};

/// Normalized text of one bulletin page, as the parsers see it.
#[derive(Serialize)]
struct PageDump {
    page: usize,
    text: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Optional argument: PDF URL or local path. Without it, follow the landing page.
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [PDF_URL_OR_PATH]", args[0]);
        exit(1);
    }

    let config = Config::from_env();
    let pages = match args.get(1) {
        Some(arg) if arg.starts_with("http://") || arg.starts_with("https://") => {
            fetch_pages(&config.http_client()?, arg).await?
        }
        Some(arg) => extract_pages(Path::new(arg))?,
        None => {
            let client = config.http_client()?;
            let url = resolve_pdf_link(&client, &config.landing_url).await?;
            eprintln!("bulletin: {}", url);
            fetch_pages(&client, &url).await?
        }
    };

    let dump: Vec<PageDump> = pages
        .into_iter()
        .enumerate()
        .map(|(i, text)| PageDump { page: i + 1, text })
        .collect();
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}
