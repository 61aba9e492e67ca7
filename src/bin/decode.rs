use b64_token::{cli::Invocation, decode_base64_message, logger, report::Report};
use serde_json::Value;

const USAGE: &str = "<base64 string> [--json]";

fn main() -> anyhow::Result<()> {
    logger::setup_logger();

    let invocation = Invocation::from_env_or_exit(USAGE);
    let encoded = invocation.value_or_exit(USAGE);

    if invocation.json {
        println!("{}", Value::from(Report::decode(encoded)));
    } else {
        println!("解码结果: {}", decode_base64_message(encoded));
    }

    Ok(())
}
