use crate::{
    error::ArgumentError,
    types::{Handle, RequestParams},
};

/// Position of the account handle in the argument list.
/// The two before it belong to the caller and are ignored.
pub const HANDLE_ARG: usize = 2;
/// Position of the comma separated keywords.
pub const KEYWORDS_ARG: usize = 3;

/// Pull the handle and keywords out of positional arguments
/// laid out as `[_, _, handle, keywords]`.
///
/// Keywords are split on `,` as-is. Whitespace around them is kept
/// and empty ones are not dropped, so an empty argument is one empty
/// keyword, which matches any post with text.
///
/// # Errors
/// Errors if either argument is missing, or if the handle is empty.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<RequestParams, ArgumentError> {
    let handle = args
        .get(HANDLE_ARG)
        .ok_or(ArgumentError::MissingHandle)?
        .as_ref();
    let handle = Handle::from_str(handle).ok_or(ArgumentError::EmptyHandle)?;

    let keywords = args
        .get(KEYWORDS_ARG)
        .ok_or(ArgumentError::MissingKeywords)?
        .as_ref();

    let keywords = keywords.split(',').map(str::to_string).collect();

    Ok(RequestParams { handle, keywords })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_and_keywords() {
        let params = parse_args(&["", "", "@kol1", "airdrop,launch"]).unwrap();
        assert_eq!(params.handle.as_str(), "kol1");
        assert_eq!(params.keywords, ["airdrop", "launch"]);

        let params = parse_args(&["", "", "kol1", "moon"]).unwrap();
        assert_eq!(params.handle.as_str(), "kol1");
        assert_eq!(params.keywords, ["moon"]);
    }

    #[test]
    fn keywords_are_not_normalized() {
        let params = parse_args(&["", "", "kol", " Moon, ,,lambo "]).unwrap();
        assert_eq!(params.keywords, [" Moon", " ", "", "lambo "]);
    }

    #[test]
    fn reserved_args_are_ignored() {
        let params = parse_args(&["whatever", "@nope", "kol", "x"]).unwrap();
        assert_eq!(params.handle.as_str(), "kol");
    }

    #[test]
    fn extra_args_are_ignored() {
        assert!(parse_args(&["", "", "kol", "x", "y", "z"]).is_ok());
    }

    #[test]
    fn missing_or_empty() {
        let none: [&str; 0] = [];
        assert_eq!(parse_args(&none), Err(ArgumentError::MissingHandle));
        assert_eq!(
            parse_args(&["", "", "kol"]),
            Err(ArgumentError::MissingKeywords)
        );
        assert_eq!(
            parse_args(&["", "", "@", "x"]),
            Err(ArgumentError::EmptyHandle)
        );
    }

    #[test]
    fn empty_keywords_argument_is_one_empty_keyword() {
        let params = parse_args(&["", "", "kol", ""]).unwrap();
        assert_eq!(params.keywords, [""]);

        let params = parse_args(&["", "", "kol", ","]).unwrap();
        assert_eq!(params.keywords, ["", ""]);
    }
}
