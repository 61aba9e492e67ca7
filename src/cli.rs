use std::ffi::OsString;

use anyhow::{Result, anyhow, bail};
use serde_json::Value;

use crate::report::Report;

pub const JSON_FLAG: &str = "--json";

/// Arguments shared by the `decode`, `encode` and `generate-token` binaries:
/// one optional positional value and an optional `--json` switch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub value: Option<String>,
    pub json: bool,
}

impl Invocation {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut invocation = Invocation::default();

        for arg in args {
            if arg == JSON_FLAG {
                invocation.json = true;
            } else if arg.starts_with("--") {
                bail!("Unknown option: {arg}");
            } else if invocation.value.is_some() {
                bail!("Unexpected extra argument: {arg}");
            } else {
                invocation.value = Some(arg);
            }
        }

        Ok(invocation)
    }

    /// Same as [`Invocation::parse`] for raw OS arguments; non UTF-8 input is
    /// an error.
    pub fn parse_os<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|arg| {
                arg.into_string().map_err(|raw| {
                    anyhow!("Argument is not valid UTF-8: {}", raw.to_string_lossy())
                })
            })
            .collect::<Result<Vec<String>>>()?;
        Self::parse(args)
    }

    /// Parse the process arguments. On failure print the reason (a JSON
    /// envelope when `--json` was given, otherwise the usage line on stderr)
    /// and exit with status 1.
    pub fn from_env_or_exit(usage: &str) -> Self {
        let args: Vec<OsString> = std::env::args_os().skip(1).collect();
        let json = args.iter().any(|a| a.to_str() == Some(JSON_FLAG));

        match Self::parse_os(args) {
            Ok(invocation) => invocation,
            Err(e) => exit_with_usage(usage, &e.to_string(), json),
        }
    }

    /// The positional value, or a usage failure when it is missing.
    pub fn value_or_exit(&self, usage: &str) -> &str {
        match self.value.as_deref() {
            Some(value) => value,
            None => exit_with_usage(usage, "Missing argument", self.json),
        }
    }
}

pub fn exit_with_usage(usage: &str, message: &str, json: bool) -> ! {
    if json {
        println!("{}", Value::from(Report::invalid_arguments(message)));
    } else {
        eprintln!("{message}");
        eprintln!("Usage: {} {usage}", program_name());
    }
    std::process::exit(1);
}

pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
