use std::path::Path;
use std::process::ExitCode;

use repng::{convert, ConvertOptions, Error};

const SOURCE: &str = "public/laliga_symbol.png";
const DEST: &str = "public/laliga_symbol_converted.png";

fn main() -> ExitCode {
    setup_logging();

    match convert(
        Path::new(SOURCE),
        Path::new(DEST),
        &ConvertOptions::default(),
    ) {
        Ok(()) => {
            println!("Conversion successful");
            ExitCode::SUCCESS
        }
        Err(err @ Error::MissingCodec { .. }) => {
            log::debug!("{err}");
            println!("Image codec not available");
            ExitCode::from(4)
        }
        Err(err) => {
            println!("Error: {err}");
            exit_code(&err)
        }
    }
}

// Exit codes: 2 decode, 3 encode/write, 4 missing codec.
fn exit_code(err: &Error) -> ExitCode {
    match err {
        Error::Decode { .. } => ExitCode::from(2),
        Error::Encode { .. } | Error::Write { .. } => ExitCode::from(3),
        Error::MissingCodec { .. } => ExitCode::from(4),
    }
}

fn setup_logging() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
