use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordsFound {
    No = 0,
    Yes = 1,
}

impl From<bool> for KeywordsFound {
    fn from(value: bool) -> Self {
        match value {
            true => KeywordsFound::Yes,
            false => KeywordsFound::No,
        }
    }
}

impl From<KeywordsFound> for bool {
    fn from(value: KeywordsFound) -> Self {
        value == KeywordsFound::Yes
    }
}

impl From<KeywordsFound> for u8 {
    fn from(value: KeywordsFound) -> Self {
        value as u8
    }
}

/// A single account handle, without the leading `@`.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Handle(String);

impl Handle {
    /// Strip exactly one leading `@`, if there is one.
    ///
    /// Returns [`None`] if nothing is left after that.
    pub fn from_str(string: &str) -> Option<Self> {
        let handle = string.strip_prefix('@').unwrap_or(string);

        if handle.is_empty() {
            return None;
        }

        Some(Self(handle.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// What to look for and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    pub handle: Handle,
    /// In the order they were given. Never empty.
    pub keywords: Vec<String>,
}

/// Text of each post as returned by the API, in order.
/// [`None`] for posts that came back without usable text.
pub type PostTexts = Vec<Option<String>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_sign_is_stripped_once() {
        assert_eq!(Handle::from_str("@abc"), Handle::from_str("abc"));
        assert_eq!(Handle::from_str("@abc").unwrap().as_str(), "abc");
        assert_eq!(Handle::from_str("@@abc").unwrap().as_str(), "@abc");
        // Only a leading one.
        assert_eq!(Handle::from_str("a@bc").unwrap().as_str(), "a@bc");
    }

    #[test]
    fn empty_handle_is_rejected() {
        assert!(Handle::from_str("").is_none());
        assert!(Handle::from_str("@").is_none());
    }

    #[test]
    fn keywords_found_conversions() {
        assert_eq!(KeywordsFound::from(true), KeywordsFound::Yes);
        assert_eq!(u8::from(KeywordsFound::from(true)), 1);
        assert_eq!(u8::from(KeywordsFound::from(false)), 0);
        assert!(!bool::from(KeywordsFound::No));
    }
}
