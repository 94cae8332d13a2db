use std::process::ExitCode;

use oracle_commons::*;

fn main() -> ExitCode {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "WARN,kol_keyword_oracle=debug");
    }
    start_everything(kol_keyword_oracle::entry())
}
