pub mod calculate;

use crate::core::{read_record_json, GainsError, TransactionRecord};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read the transaction record (JSON) from a file, or from stdin with "-"
pub fn read_record(path: &Path) -> anyhow::Result<TransactionRecord> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        Ok(read_from_file(path)?)
    }
}

fn read_from_file(path: &Path) -> Result<TransactionRecord, GainsError> {
    let file = File::open(path).map_err(|err| GainsError::from_io(path, err))?;
    read_record_json(BufReader::new(file))
}

fn read_from_stdin() -> anyhow::Result<TransactionRecord> {
    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .map_err(|err| GainsError::from_io("-", err))?;
    anyhow::ensure!(
        !input.is_empty(),
        "stdin was empty, expected a JSON transactions record"
    );
    Ok(read_record_json(input.as_slice())?)
}
