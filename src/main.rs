use std::process::ExitCode;

use cb58_decode::{decode_cb58, Cb58Error};
use clap::Parser;

/// Decode a CB58 string and print its payload as hex.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "cb58-decode", version)]
struct Cli {
    /// CB58 string to decode. Nothing is printed when omitted.
    cb58: Option<String>,
}

/// Returns the line to print, if any.
fn run(cli: &Cli) -> Result<Option<String>, Cb58Error> {
    let Some(input) = cli.cb58.as_deref() else {
        log::debug!("no input given");
        return Ok(None);
    };
    let hex = decode_cb58(input)?;
    Ok(Some(format!("0x{}", hex)))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(Some(line)) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
