use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    StatusCode,
};
use thiserror::Error;
use tracing::{debug, info, trace};
use url::Url;

pub mod events;
pub use events::{Event, EventKind};

const GITHUB_JSON: &str = "application/vnd.github+json";
const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("User not found. Please check the username.")]
    UserNotFound,
    #[error("Error fetching data: {}", .0.as_u16())]
    RemoteError(StatusCode),
    #[error("An unknown error occurred.")]
    UnknownError(#[source] reqwest::Error),
}

pub struct GitHubClient {
    api_url: Url,
    client: reqwest::Client,
}

impl GitHubClient {
    /// Builds a client talking to the GitHub REST API rooted at `api_url`.
    pub fn new(api_url: Url) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        // the API refuses requests without a user agent
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FetchError::UnknownError)?;

        Ok(Self { api_url, client })
    }

    /// Fetches the public events of `username`, in the order the API returns them (most recent
    /// first).
    pub async fn user_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        let url = events_url(&self.api_url, username);
        info!("fetching events for `{}`", username);
        trace!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            debug!("request failed: {}", e);
            FetchError::UnknownError(e)
        })?;

        let status = response.status();
        debug!("API answered with status {}", status);
        match status {
            StatusCode::NOT_FOUND => return Err(FetchError::UserNotFound),
            status if !status.is_success() => return Err(FetchError::RemoteError(status)),
            _ => {}
        }

        let events: Vec<Event> = response.json().await.map_err(|e| {
            debug!("couldn't decode event list: {}", e);
            FetchError::UnknownError(e)
        })?;
        debug!("received {} events", events.len());

        Ok(events)
    }
}

/// `{api_url}/users/{username}/events`, with `username` kept as a single path segment.
fn events_url(api_url: &Url, username: &str) -> Url {
    let mut url = api_url.clone();
    // `api_url` is checked to be a base URL when parsing options, so this always succeeds
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(["users", username, "events"]);
    }

    url
}
