pub mod error;
pub mod gains;
pub mod parse;
pub mod record;

// Flat public surface for domain types and functions.
pub use error::GainsError;
pub use gains::{GainCalculator, Gains};
pub use record::{read_record_json, TransactionRecord};
