use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One entry of the `/users/{username}/events` listing.
#[derive(Debug, Deserialize)]
pub struct Event {
    pub r#type: String,
    pub repo: Repository,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: Payload,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    /// Full name, `owner/name`
    pub name: String,
}

/// Fields of the event payload we care about. Their presence depends on the event type, so all
/// of them are optional.
#[derive(Debug, Default, Deserialize)]
pub struct Payload {
    pub action: Option<String>,
    pub ref_type: Option<String>,
    pub commits: Option<Vec<Value>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum EventKind<'a> {
    Push { commits: usize },
    Issues { action: Option<&'a str> },
    Watch,
    Fork,
    Create { ref_type: Option<&'a str> },
    Other(&'a str),
}

impl Event {
    pub fn kind(&self) -> EventKind<'_> {
        match self.r#type.as_str() {
            "PushEvent" => EventKind::Push {
                commits: self.payload.commits.as_ref().map_or(0, Vec::len),
            },
            "IssuesEvent" => EventKind::Issues {
                action: self.payload.action.as_deref(),
            },
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            "CreateEvent" => EventKind::Create {
                ref_type: self.payload.ref_type.as_deref(),
            },
            other => EventKind::Other(other),
        }
    }
}
