use std::time::Duration;

use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://app.getmainline.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the Mainline API lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("URL will always be valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Defaults, overridden by `MAINLINE_API_URL` and `MAINLINE_TIMEOUT_SECS`
    /// if those are set. Values that don't parse are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("MAINLINE_API_URL") {
            match Url::parse(&url) {
                Ok(url) => config.api_base_url = url,
                Err(e) => log::warn!("Ignoring bad MAINLINE_API_URL {url:?}: {e}"),
            }
        }

        if let Ok(secs) = std::env::var("MAINLINE_TIMEOUT_SECS") {
            match secs.parse::<f64>() {
                Ok(secs) if secs.is_finite() && secs > 0.0 => {
                    config.timeout = Duration::from_secs_f64(secs);
                }
                _ => log::warn!("Ignoring bad MAINLINE_TIMEOUT_SECS {secs:?}"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn defaults() {
        let config = super::Config::default();
        assert_eq!(config.api_base_url.as_str(), "https://app.getmainline.com/");
        assert_eq!(config.timeout.as_secs(), 10);
    }
}
