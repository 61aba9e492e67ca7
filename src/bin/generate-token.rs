use b64_token::{
    DEFAULT_TOKEN_LENGTH,
    cli::{Invocation, exit_with_usage},
    generate_secure_token, logger,
    report::Report,
    token,
};
use serde_json::Value;

const USAGE: &str = "[length] [--json]";

fn main() -> anyhow::Result<()> {
    logger::setup_logger();

    let invocation = Invocation::from_env_or_exit(USAGE);

    if invocation.json {
        let report = match invocation.value.as_deref() {
            Some(raw) => Report::token_from_arg(raw),
            None => Report::token(DEFAULT_TOKEN_LENGTH),
        };
        let failed = !report.is_ok();
        println!("{}", Value::from(report));
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    let length = match invocation.value.as_deref() {
        Some(raw) => token::parse_length(raw)
            .unwrap_or_else(|e| exit_with_usage(USAGE, &e.to_string(), false)),
        None => DEFAULT_TOKEN_LENGTH,
    };

    let secure_token = generate_secure_token(length)?;
    println!("Secure Token: {secure_token}");

    Ok(())
}
