use b64_token::{cli::Invocation, encode_base64, logger, report::Report};
use serde_json::Value;

const USAGE: &str = "<plaintext> [--json]";

fn main() -> anyhow::Result<()> {
    logger::setup_logger();

    let invocation = Invocation::from_env_or_exit(USAGE);
    let plaintext = invocation.value_or_exit(USAGE);

    if invocation.json {
        println!("{}", Value::from(Report::encode(plaintext)));
    } else {
        println!("Input String: {plaintext}");
        println!("Encoded Result: {}", encode_base64(plaintext));
    }

    Ok(())
}
