//! Talking to the Mainline API, which serves recent posts of an account.

use std::fmt::Display;

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::{
    config::Config,
    types::{Handle, PostTexts},
};

pub const API_KEY_HEADER: &str = "Api-Key";

/// Why we didn't get any posts. Never fatal, see [`post_texts`].
#[derive(Debug)]
pub enum RemoteError {
    /// No sensible request URL for this base URL and handle.
    BadUrl(Url, Handle),
    /// Connection failed, timed out, or the status wasn't a success.
    Http(reqwest::Error),
    /// The body wasn't JSON.
    Json(serde_json::Error),
    /// The API said something went wrong. Holds whatever it put in `error`.
    Api(Value),
    /// JSON, but not shaped like a list of posts.
    Malformed(&'static str),
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadUrl(url, handle) => {
                write!(f, "Can't build a request URL from {} and {:?}", url, handle.as_str())
            }
            Self::Http(e) => write!(f, "Request failed: {}", e),
            Self::Json(e) => write!(f, "Response is not JSON: {}", e),
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Malformed(why) => write!(f, "Malformed response: {}", why),
        }
    }
}

impl std::error::Error for RemoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// What the API body can look like. Usually it's the wrapped form,
/// but a bare list of posts is taken as-is too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    // Has to go first, or arrays get read as a wrapped struct.
    Bare(Vec<Value>),
    Wrapped {
        #[serde(default)]
        error: Value,
        #[serde(default)]
        data: Value,
    },
}

/// `https://<api>/api/tweets/handle/<handle>`, with the handle as one
/// escaped path segment.
///
/// Returns [`None`] if `base` can't have a path, or if the handle is `.`
/// or `..`, which would end up pointing somewhere else entirely.
pub fn posts_url(base: &Url, handle: &Handle) -> Option<Url> {
    if matches!(handle.as_str(), "." | "..") {
        return None;
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(["api", "tweets", "handle", handle.as_str()]);
    Some(url)
}

/// Fetch recent posts of the account and return their texts.
///
/// Never fails: if anything goes wrong, it's logged and no posts are returned.
pub async fn post_texts(config: &Config, api_key: &str, handle: &Handle) -> PostTexts {
    match fetch_post_texts(config, api_key, handle).await {
        Ok(texts) => texts,
        Err(e @ RemoteError::Api(_)) => {
            log::warn!("Mainline Error for {}: {}", handle, e);
            Vec::new()
        }
        Err(e) => {
            log::warn!("Could not get posts of {}: {}", handle, e);
            Vec::new()
        }
    }
}

/// Same as [`post_texts`], but tells you what went wrong.
pub async fn fetch_post_texts(
    config: &Config,
    api_key: &str,
    handle: &Handle,
) -> Result<PostTexts, RemoteError> {
    let url = posts_url(&config.api_base_url, handle)
        .ok_or_else(|| RemoteError::BadUrl(config.api_base_url.clone(), handle.clone()))?;

    // No retries. One shot at it.
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.timeout)
        .build()?;

    log::debug!("Requesting {}", url);

    let response = client
        .get(url)
        .header(API_KEY_HEADER, api_key)
        .send()
        .await?;

    let status = response.status();
    let status_error = response.error_for_status_ref().err();
    let body = response.text().await?;

    log::debug!("Mainline responded with {}: {}", status, body);

    if let Some(e) = status_error {
        // Prefer the API's own complaint, if it made one.
        if let Ok(payload) = serde_json::from_str(&body) {
            normalize(payload)?;
        }
        return Err(e.into());
    }

    normalize(serde_json::from_str(&body)?)
}

/// Turn an already parsed body into post texts, one per record, in order.
///
/// Records without a string `tweet` field come out as [`None`].
fn normalize(payload: Payload) -> Result<PostTexts, RemoteError> {
    let records = match payload {
        Payload::Wrapped { error, .. } if is_truthy(&error) => {
            return Err(RemoteError::Api(error));
        }
        Payload::Wrapped {
            data: Value::Array(records),
            ..
        } => records,
        Payload::Wrapped { data: Value::Null, .. } => {
            return Err(RemoteError::Malformed("no post list in response"));
        }
        Payload::Wrapped { .. } => {
            return Err(RemoteError::Malformed("post list is not a list"));
        }
        Payload::Bare(records) => records,
    };

    let texts: PostTexts = records
        .iter()
        .map(|record| record.get("tweet").and_then(Value::as_str).map(str::to_string))
        .collect();

    let malformed = texts.iter().filter(|x| x.is_none()).count();
    if malformed > 0 {
        log::debug!("{} of {} posts had no text", malformed, texts.len());
    }

    Ok(texts)
}

/// Whether a JSON value would pass for `true` in a loosely typed language.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
