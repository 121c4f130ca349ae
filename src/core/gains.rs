use super::error::GainsError;
use super::parse::{parse_date, parse_money, parse_shares};
use super::record::{Transaction, TransactionDetail, TransactionRecord};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

/// Plan type of restricted stock lots, the only lots that count towards gains
pub const RESTRICTED_STOCK: &str = "RS";

/// Lots held longer than this are long term.
///
/// A fixed 365 day year: leap days are not taken into account.
pub const LONG_TERM_HOLDING_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Which bucket a lot's gain falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldingPeriod {
    LongTerm,
    ShortTerm,
}

impl HoldingPeriod {
    /// Long term only when the sale is strictly more than a year after vesting
    pub fn classify(vest_date: NaiveDate, sale_date: NaiveDate) -> Self {
        let held = sale_date.signed_duration_since(vest_date);
        if held > Duration::seconds(LONG_TERM_HOLDING_SECONDS) {
            HoldingPeriod::LongTerm
        } else {
            HoldingPeriod::ShortTerm
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            HoldingPeriod::LongTerm => "long term",
            HoldingPeriod::ShortTerm => "short term",
        }
    }
}

impl std::fmt::Display for HoldingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Net gains (negative for a net loss) split by holding period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gains {
    pub long_term: Decimal,
    pub short_term: Decimal,
}

impl Gains {
    pub fn new(long_term: Decimal, short_term: Decimal) -> Self {
        Gains {
            long_term,
            short_term,
        }
    }

    /// Add a lot's gain to its bucket
    pub fn record(&mut self, period: HoldingPeriod, gain: Decimal) -> Result<(), GainsError> {
        let bucket = match period {
            HoldingPeriod::LongTerm => &mut self.long_term,
            HoldingPeriod::ShortTerm => &mut self.short_term,
        };
        *bucket = checked(bucket.checked_add(gain), "holding period total")?;
        Ok(())
    }

    /// Elementwise sum of two pairs of totals
    pub fn checked_add(self, other: Gains) -> Result<Gains, GainsError> {
        Ok(Gains::new(
            checked(self.long_term.checked_add(other.long_term), "long term total")?,
            checked(self.short_term.checked_add(other.short_term), "short term total")?,
        ))
    }
}

fn checked(amount: Option<Decimal>, what: &'static str) -> Result<Decimal, GainsError> {
    amount.ok_or(GainsError::AmountOverflow(what))
}

/// Gain on a single lot: `shares * (sale_price - vest_fair_market_value)`
pub fn compute_detail_gain(detail: &TransactionDetail) -> Result<Decimal, GainsError> {
    let shares = parse_shares(detail.shares()?)?;
    let sale_price = parse_money("SalePrice", detail.sale_price()?)?;
    let vest_price = parse_money("VestFairMarketValue", detail.vest_fair_market_value()?)?;
    log::info!(
        "\t[{} shares] Vest: {}, Sale: {}",
        shares,
        vest_price,
        sale_price
    );
    let per_share = checked(sale_price.checked_sub(vest_price), "lot gain")?;
    checked(shares.checked_mul(per_share), "lot gain")
}

/// Classify and sum the restricted stock lots of one transaction.
///
/// Lots of any other plan type are skipped before any of their fields are read.
pub fn classify_and_sum_transaction(txn: &Transaction) -> Result<Gains, GainsError> {
    let sale_date = parse_date("Date", &txn.date)?;
    log::info!("Transaction date: {}", txn.date);

    let mut gains = Gains::default();
    for entry in &txn.transaction_details {
        let detail = &entry.details;
        if detail.kind != RESTRICTED_STOCK {
            log::debug!("\tSkipping {} lot", detail.kind);
            continue;
        }

        let vest_date_str = detail.vest_date()?;
        let vest_date = parse_date("VestDate", vest_date_str)?;
        let gain = compute_detail_gain(detail)?;
        let period = HoldingPeriod::classify(vest_date, sale_date);
        log::info!("\t[Vest {}] {} gain:\t{}", vest_date_str, period, gain);
        gains.record(period, gain)?;
    }
    Ok(gains)
}

/// Computes long and short term totals over a whole transaction record
#[derive(Debug, Clone)]
pub struct GainCalculator {
    record: TransactionRecord,
}

impl GainCalculator {
    pub fn new(record: TransactionRecord) -> Self {
        GainCalculator { record }
    }

    /// Sum every transaction. The first failure aborts the calculation.
    pub fn calculate(&self) -> Result<Gains, GainsError> {
        let totals = self
            .record
            .transactions
            .iter()
            .try_fold(Gains::default(), |totals, txn| {
                totals.checked_add(classify_and_sum_transaction(txn)?)
            })?;

        log::info!("Results:");
        log::info!("Long term:\t{}", totals.long_term);
        log::info!("Short term:\t{}", totals.short_term);
        Ok(totals)
    }
}
