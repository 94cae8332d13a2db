use std::process::ExitCode;

use oracle_commons::SecretMap;

use crate::{
    args::parse_args,
    config::Config,
    encoding::{encode_result, to_hex, Uint256},
    error::InvokeError,
    keyword_checker::contains_any_keyword,
    mainline,
    types::KeywordsFound,
    API_KEY_ENV_VAR, API_KEY_SECRET,
};

/// Check if the account in `args` posted any of the keywords in `args`
/// lately, and encode the answer for the on-chain consumer.
///
/// `args` is laid out as `[_, _, handle, keywords]`, see [`parse_args`].
/// The API key is taken from `secrets` under [`API_KEY_SECRET`].
///
/// # Errors
/// Errors on bad arguments or a missing API key, before any request is
/// made. Failing to get posts from the API is not an error: that's just
/// no keywords found.
pub async fn invoke<S: AsRef<str>>(
    args: &[S],
    secrets: &SecretMap,
    config: &Config,
) -> Result<Uint256, InvokeError> {
    let params = parse_args(args)?;

    let api_key = secrets
        .get(API_KEY_SECRET)
        .ok_or_else(|| InvokeError::Configuration(API_KEY_SECRET.to_string()))?;

    log::info!(
        "Checking posts of {} for {} keywords",
        params.handle,
        params.keywords.len()
    );

    let texts = mainline::post_texts(config, api_key, &params.handle).await;

    let found = KeywordsFound::from(contains_any_keyword(&texts, &params.keywords));

    log::info!(
        "Got {} posts from {}, keywords found: {:?}",
        texts.len(),
        params.handle,
        found
    );

    Ok(encode_result(found))
}

/// Run [`invoke`] with the process arguments and environment, and print the
/// result as hex to stdout.
///
/// Usage: `kol_keyword_oracle <handle> <keywords>`
pub async fn entry() -> ExitCode {
    // The first two slots are reserved for the caller. The program name
    // takes one, pad the other.
    let args: Vec<String> = std::iter::once(String::new())
        .chain(std::env::args())
        .collect();

    let secrets = SecretMap::load(API_KEY_SECRET, API_KEY_ENV_VAR);
    let config = Config::from_env();

    match invoke(&args, &secrets, &config).await {
        Ok(word) => {
            println!("{}", to_hex(&word));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            if e.is_argument_error() {
                eprintln!("Usage: kol_keyword_oracle <handle> <keyword,keyword,...>");
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
