use super::error::GainsError;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Input root for the transaction record JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionRecord {
    pub transactions: Vec<Transaction>,
}

/// A sale event, made up of one or more vested lots
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    /// Date of the sale (MM/DD/YYYY)
    pub date: String,
    pub transaction_details: Vec<DetailEntry>,
}

/// Wrapper object around each lot, as exported by the brokerage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailEntry {
    pub details: TransactionDetail,
}

/// One vested lot sold as part of a transaction.
///
/// Only `kind` is required up front. Lots of other plan types may carry a
/// different set of fields, so the rest are checked when the lot is priced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionDetail {
    /// Plan category, e.g. "RS" or "ESPP"
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(default)]
    pub vest_date: Option<String>,
    #[serde(default)]
    pub shares: Option<Shares>,
    #[serde(default)]
    pub sale_price: Option<String>,
    #[serde(default)]
    pub vest_fair_market_value: Option<String>,
}

/// Share quantity, which exports write either as a JSON string or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shares {
    Text(String),
    Number(serde_json::Number),
}

impl TransactionDetail {
    pub fn vest_date(&self) -> Result<&str, GainsError> {
        required(self.vest_date.as_deref(), "VestDate")
    }

    pub fn shares(&self) -> Result<&Shares, GainsError> {
        self.shares
            .as_ref()
            .ok_or(GainsError::MissingField { field: "Shares" })
    }

    pub fn sale_price(&self) -> Result<&str, GainsError> {
        required(self.sale_price.as_deref(), "SalePrice")
    }

    pub fn vest_fair_market_value(&self) -> Result<&str, GainsError> {
        required(
            self.vest_fair_market_value.as_deref(),
            "VestFairMarketValue",
        )
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, GainsError> {
    value.ok_or(GainsError::MissingField { field })
}

/// Read the transaction record from JSON
pub fn read_record_json<R: Read>(reader: R) -> Result<TransactionRecord, GainsError> {
    let record: TransactionRecord = serde_json::from_reader(reader)?;
    log::info!("Total of {} transactions", record.transactions.len());
    Ok(record)
}
