mod config;
mod definitions;
mod errors;
mod mediawiki_api;
mod page;
mod render;
mod reqwest_client;
mod wikitext;

use std::{error::Error, process::ExitCode};

use clap::Parser;
use dotenv::dotenv;

use crate::{
    config::{
        Config, ConfigBuilder, ConfigBuilderError, DEFAULT_MAX_REDIRECTS, DEFAULT_PREVIEW_CHARS,
        DEFAULT_TITLE,
    },
    errors::ProcessError,
    mediawiki_api::WIKIPEDIA_API,
    page::parse_page,
    render::render_page,
    reqwest_client::DEFAULT_USER_AGENT,
};

#[derive(Debug, Parser)]
#[command(
    name = "wiki_knowledge_synth",
    version,
    about = "Fetch the raw wikitext of a Wikipedia article"
)]
struct Cli {
    /// Page to fetch.
    #[arg(env = "WIKI_TITLE", default_value = DEFAULT_TITLE)]
    title: String,
    /// MediaWiki api.php to query.
    #[arg(long, env = "WIKI_API_URL", default_value = WIKIPEDIA_API)]
    endpoint: String,
    #[arg(long, env = "WIKI_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// How many characters of wikitext to print.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_CHARS)]
    chars: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    max_redirects: u8,
    /// Follow redirects, clean the page up and print it section by section.
    #[arg(long, conflicts_with = "json")]
    parse: bool,
    /// Like `--parse`, but print JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Preview,
    Rendered,
    Json,
}

impl Cli {
    fn config(&self) -> Result<Config, ConfigBuilderError> {
        ConfigBuilder::default()
            .title(self.title.as_str())
            .endpoint(self.endpoint.as_str())
            .user_agent(self.user_agent.as_str())
            .preview_chars(self.chars)
            .max_redirects(self.max_redirects)
            .build()
    }

    fn output(&self) -> Output {
        match (self.parse, self.json) {
            (_, true) => Output::Json,
            (true, false) => Output::Rendered,
            (false, false) => Output::Preview,
        }
    }
}

/// The first `chars` characters of `text`, never splitting a character.
fn preview(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.config()?;
    let fetcher = config.fetcher()?;
    log::info!("Fetching {:?} from {}", config.title, fetcher.endpoint());

    match cli.output() {
        Output::Preview => {
            let wikitext = fetcher.fetch_wikitext(&config.title).await?;
            println!("{}", preview(&wikitext, config.preview_chars));
        }
        Output::Rendered => {
            let page = parse_page(&fetcher, &config.title, config.max_redirects).await?;
            println!("{}", render_page(&page));
        }
        Output::Json => {
            let page = parse_page(&fetcher, &config.title, config.max_redirects).await?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ProcessError>() {
                Some(process) => log::error!("[{}] {}", process.kind(), process),
                None => log::error!("{}", e),
            }
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_counts_characters() {
        assert_eq!(preview("héllo wörld", 4), "héll");
        assert_eq!(preview("short", 500), "short");
        assert_eq!(preview("", 3), "");
    }

    #[test]
    fn cli_defaults() {
        // title, endpoint and user agent may come from the environment
        let from_env = |key: &str, default: &str| std::env::var(key).unwrap_or(default.into());

        let cli = Cli::try_parse_from(["wiki_knowledge_synth"]).unwrap();
        assert_eq!(cli.output(), Output::Preview);

        let config = cli.config().unwrap();
        assert_eq!(config.title, from_env("WIKI_TITLE", DEFAULT_TITLE));
        assert_eq!(config.endpoint, from_env("WIKI_API_URL", WIKIPEDIA_API));
        assert_eq!(config.user_agent, from_env("WIKI_USER_AGENT", DEFAULT_USER_AGENT));
        assert_eq!(config.preview_chars, DEFAULT_PREVIEW_CHARS);
        assert_eq!(config.max_redirects, DEFAULT_MAX_REDIRECTS);
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli::try_parse_from([
            "wiki_knowledge_synth",
            "Dog",
            "--endpoint",
            "http://localhost/w/api.php",
            "--chars",
            "80",
            "--max-redirects",
            "2",
            "--parse",
        ])
        .unwrap();
        assert_eq!(cli.output(), Output::Rendered);

        let config = cli.config().unwrap();
        assert_eq!(config.title, "Dog");
        assert_eq!(config.endpoint, "http://localhost/w/api.php");
        assert_eq!(config.preview_chars, 80);
        assert_eq!(config.max_redirects, 2);
    }

    #[test]
    fn parse_and_json_conflict() {
        assert!(Cli::try_parse_from(["wiki_knowledge_synth", "--parse", "--json"]).is_err());
        let cli = Cli::try_parse_from(["wiki_knowledge_synth", "--json"]).unwrap();
        assert_eq!(cli.output(), Output::Json);
    }
}
