use clap::Parser;
use tracing::level_filters::LevelFilter;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Parser)]
#[command(version, about = "Show a GitHub user's recent public activity")]
pub struct Opts {
    /// GitHub username whose public events should be listed
    #[arg(allow_hyphen_values = true)]
    pub username: Option<String>,

    /// Anything after the username is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = DEFAULT_API_URL, value_parser = parse_api_url)]
    pub api_url: Url,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Opts {
    /// The requested username, if one was given and isn't empty.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Parses the API base URL, rejecting URLs that can't have path segments appended to them
/// (`mailto:`, `data:`, ...).
fn parse_api_url(s: &str) -> Result<Url, String> {
    let url = Url::parse(s).map_err(|e| format!("invalid URL `{}`: {}", s, e))?;
    if url.cannot_be_a_base() {
        return Err(format!("`{}` can't be used as a base URL", s));
    }

    Ok(url)
}
