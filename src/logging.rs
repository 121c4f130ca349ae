use env_logger::{Target, WriteStyle};
use std::env;
use std::fs::OpenOptions;
use std::path::Path;

const FILE_FILTER: &str = "info";
const STDERR_FILTER: &str = "warn";

/// Initialise logging, appending to `log_file`.
///
/// Falls back to stderr (warnings only, unless RUST_LOG says otherwise) when the
/// file can't be opened.
pub fn init(log_file: &Path) {
    let mut builder = pretty_env_logger::formatted_builder();

    let to_file = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            builder
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never);
            true
        }
        Err(err) => {
            eprintln!(
                "warning: unable to open log file {}: {err}",
                log_file.display()
            );
            false
        }
    };

    builder.parse_filters(&filters(env::var("RUST_LOG").ok(), to_file));

    if let Err(err) = builder.try_init() {
        eprintln!("warning: logger already initialised: {err}");
    }
}

fn filters(rust_log: Option<String>, to_file: bool) -> String {
    match rust_log {
        Some(filter) if !filter.trim().is_empty() => filter,
        _ if to_file => FILE_FILTER.to_string(),
        _ => STDERR_FILTER.to_string(),
    }
}
