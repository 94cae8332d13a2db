use std::process::ExitCode;

use kol_keyword_oracle::{config::Config, mainline, Handle, API_KEY_ENV_VAR, API_KEY_SECRET};
use oracle_commons::*;

/// Fetches posts of the account given as the only argument and prints
/// them the way the keyword checker sees them. Useful to figure out why
/// a keyword did or did not match.
async fn dump_posts() -> ExitCode {
    let Some(handle) = std::env::args().nth(1).as_deref().and_then(Handle::from_str) else {
        eprintln!("Usage: dump_posts <handle>");
        return ExitCode::from(2);
    };

    let secrets = SecretMap::load(API_KEY_SECRET, API_KEY_ENV_VAR);
    let Some(api_key) = secrets.get(API_KEY_SECRET) else {
        log::error!("No API key. Set ${API_KEY_ENV_VAR} or put it in the key file.");
        return ExitCode::FAILURE;
    };

    match mainline::fetch_post_texts(&Config::from_env(), api_key, &handle).await {
        Ok(texts) => {
            println!("{:#?}", texts);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "WARN,kol_keyword_oracle=debug,dump_posts=debug");
    }
    start_everything(dump_posts())
}
