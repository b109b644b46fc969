//! Transaction record models.
//!
//! Records are supplied already parsed by the persistence layer. The
//! analytics code only reads them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::CONTRACT_MULTIPLIER;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Put,
    Call,
}

/// A sold option contract (cash-secured put or covered call).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionRecord {
    pub id: i64,
    pub symbol: String,
    pub option_type: OptionType,
    pub opened: NaiveDate,
    pub closed: Option<NaiveDate>,
    pub strike: Decimal,
    pub expiration: NaiveDate,
    /// Total cash received when the position was opened.
    pub premium: Decimal,
    pub contracts: u32,
    /// Per-share price paid to buy the contracts back, if they were.
    pub exit_price: Option<Decimal>,
    pub commission: Decimal,
}

impl OptionRecord {
    pub fn is_put(&self) -> bool {
        self.option_type == OptionType::Put
    }

    /// Shares covered by this position.
    pub fn shares_covered(&self) -> Decimal {
        Decimal::from(self.contracts).saturating_mul(Decimal::from(CONTRACT_MULTIPLIER))
    }

    /// Cash reserved to secure the position: strike x contracts x 100.
    ///
    /// Only puts reserve cash. Calls are covered by shares, which are
    /// already counted as long positions. Saturates at `Decimal::MAX`.
    pub fn collateral(&self) -> Decimal {
        match self.option_type {
            OptionType::Put => self.strike.saturating_mul(self.shares_covered()),
            OptionType::Call => Decimal::ZERO,
        }
    }

    /// Realized P&L attributed to the month the option was opened.
    ///
    /// Premium counts in full at open; a buy-back and the commission are
    /// subtracted from it.
    pub fn total_profit(&self) -> Decimal {
        let exit_cost = self
            .exit_price
            .map(|price| price.saturating_mul(self.shares_covered()))
            .unwrap_or(Decimal::ZERO);
        self.premium
            .saturating_sub(exit_cost)
            .saturating_sub(self.commission)
    }
}

/// A cash dividend received on a holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    pub id: i64,
    pub symbol: String,
    pub received: NaiveDate,
    pub amount: Decimal,
}

/// Shares held outright, open or closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongPosition {
    pub id: i64,
    pub symbol: String,
    pub opened: NaiveDate,
    pub closed: Option<NaiveDate>,
    pub shares: Decimal,
    pub buy_price: Decimal,
    pub exit_price: Option<Decimal>,
}

impl LongPosition {
    /// Cost basis: buy price x shares. Saturates at `Decimal::MAX`.
    pub fn cost_basis(&self) -> Decimal {
        self.buy_price.saturating_mul(self.shares)
    }

    /// Exit price, or zero when none was recorded.
    pub fn exit_price_value(&self) -> Decimal {
        self.exit_price.unwrap_or(Decimal::ZERO)
    }

    /// Realized gain, `None` while the position is still open.
    pub fn realized_gain(&self) -> Option<Decimal> {
        self.closed
            .map(|_| {
                self.exit_price_value()
                    .saturating_sub(self.buy_price)
                    .saturating_mul(self.shares)
            })
    }
}
