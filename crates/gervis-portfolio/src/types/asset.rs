//! Asset representation with cost and risk disclosure data.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// A single holding in a client portfolio.
///
/// Cost fields are percentage rates as published in the product's KID
/// (e.g. `2.0` for a 2% entry fee). All disclosure fields are optional:
/// absent fees count as zero, while an absent SRI or holding period removes
/// the asset from that particular average.
///
/// Field names serialize in camelCase to match the web client's payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetrics {
    /// Opaque identifier, carried through untouched.
    pub id: i64,

    /// Monetary value of the position. The weighting basis for every average.
    pub value: Decimal,

    /// Asset category (equity fund, bond, ...).
    #[serde(default)]
    pub category: Option<String>,

    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,

    /// ISIN code.
    #[serde(default)]
    pub isin: Option<String>,

    /// Commercial product name.
    #[serde(default)]
    pub product_name: Option<String>,

    // =========================================================================
    // COSTS (percent)
    // =========================================================================
    /// One-off entry fee.
    #[serde(default)]
    pub entry_fee: Option<f64>,

    /// One-off exit fee.
    #[serde(default)]
    pub exit_fee: Option<f64>,

    /// Recurring ongoing charge (annual).
    #[serde(default)]
    pub ongoing_charge: Option<f64>,

    /// Recurring transaction cost (annual).
    #[serde(default)]
    pub transaction_cost: Option<f64>,

    // =========================================================================
    // RISK / HORIZON
    // =========================================================================
    /// Recommended holding period in years.
    #[serde(default)]
    pub recommended_holding_period: Option<f64>,

    /// Synthetic risk indicator, nominally 1-7.
    #[serde(default)]
    pub sri: Option<i32>,
}

impl AssetMetrics {
    /// Creates an asset with the given id and value and no disclosure data.
    #[must_use]
    pub fn new(id: i64, value: Decimal) -> Self {
        Self {
            id,
            value,
            category: None,
            description: None,
            isin: None,
            product_name: None,
            entry_fee: None,
            exit_fee: None,
            ongoing_charge: None,
            transaction_cost: None,
            recommended_holding_period: None,
            sri: None,
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the ISIN.
    #[must_use]
    pub fn with_isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Sets the product name.
    #[must_use]
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Sets the entry fee.
    #[must_use]
    pub fn with_entry_fee(mut self, fee: f64) -> Self {
        self.entry_fee = Some(fee);
        self
    }

    /// Sets the exit fee.
    #[must_use]
    pub fn with_exit_fee(mut self, fee: f64) -> Self {
        self.exit_fee = Some(fee);
        self
    }

    /// Sets the ongoing charge.
    #[must_use]
    pub fn with_ongoing_charge(mut self, charge: f64) -> Self {
        self.ongoing_charge = Some(charge);
        self
    }

    /// Sets the transaction cost.
    #[must_use]
    pub fn with_transaction_cost(mut self, cost: f64) -> Self {
        self.transaction_cost = Some(cost);
        self
    }

    /// Sets the recommended holding period.
    #[must_use]
    pub fn with_recommended_holding_period(mut self, years: f64) -> Self {
        self.recommended_holding_period = Some(years);
        self
    }

    /// Sets the SRI.
    #[must_use]
    pub fn with_sri(mut self, sri: i32) -> Self {
        self.sri = Some(sri);
        self
    }

    /// Returns the value as `f64` for weighting.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.value.to_f64().unwrap_or(0.0)
    }

    /// Returns true if the asset carries positive weight.
    ///
    /// Assets with `value <= 0` are ignored by every calculator.
    #[must_use]
    pub fn has_weight(&self) -> bool {
        self.value > Decimal::ZERO
    }

    /// Returns the SRI if it is present and non-zero.
    ///
    /// An SRI of `0` is treated the same as a missing one.
    #[must_use]
    pub fn risk_indicator(&self) -> Option<i32> {
        self.sri.filter(|&sri| sri != 0)
    }

    /// Returns the recommended holding period if it is present, non-zero and
    /// not NaN.
    ///
    /// Note that a period of `0` is excluded rather than averaged in.
    #[must_use]
    pub fn holding_period(&self) -> Option<f64> {
        self.recommended_holding_period
            .filter(|&years| years != 0.0 && !years.is_nan())
    }

    /// Checks that every numeric disclosure field is finite.
    ///
    /// The calculators do not require this; it is offered to callers that
    /// want to reject bad rows at import time.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidAsset`] naming the first offending field.
    pub fn validate(&self) -> PortfolioResult<()> {
        let fields = [
            ("entryFee", self.entry_fee),
            ("exitFee", self.exit_fee),
            ("ongoingCharge", self.ongoing_charge),
            ("transactionCost", self.transaction_cost),
            ("recommendedHoldingPeriod", self.recommended_holding_period),
        ];

        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(PortfolioError::invalid_asset(
                        self.id,
                        format!("{name} is not finite"),
                    ));
                }
            }
        }

        Ok(())
    }
}
