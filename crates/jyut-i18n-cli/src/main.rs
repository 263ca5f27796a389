#![forbid(unsafe_code)]

fn main() {
    if let Err(jyut_i18n_cli::Failure { error, json }) = jyut_i18n_cli::run_from_env() {
        if json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                })
            );
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}
