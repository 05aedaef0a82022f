use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::store::NewDeposit;

use super::errors::{filled, FormErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DepositField {
    Description,
    Amount,
    InterestRate,
    Duration,
    MaturityDate,
}

/// Input of the "Add New Deposit" dialog, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepositForm {
    pub description: String,
    pub amount: String,
    pub interest_rate: String,
    pub duration: String,
    /// `YYYY-MM-DD`
    pub maturity_date: String,
}

impl DepositForm {
    pub fn validate(&self) -> Result<NewDeposit, FormErrors<DepositField>> {
        let mut errors = FormErrors::new();

        let description = filled(&self.description);
        if description.is_none() {
            errors.insert(DepositField::Description, "Description is required");
        }

        let amount = filled(&self.amount)
            .and_then(|s| Decimal::from_str(s).ok())
            .filter(|amount| *amount > Decimal::ZERO);
        if amount.is_none() {
            errors.insert(DepositField::Amount, "Amount must be a positive number");
        }

        let interest_rate = filled(&self.interest_rate)
            .and_then(|s| Decimal::from_str(s).ok())
            .filter(|rate| *rate >= Decimal::ZERO);
        if interest_rate.is_none() {
            errors.insert(DepositField::InterestRate, "Interest rate cannot be negative");
        }

        let duration = filled(&self.duration);
        if duration.is_none() {
            errors.insert(DepositField::Duration, "Duration is required");
        }

        let maturity_date = match filled(&self.maturity_date) {
            None => {
                errors.insert(DepositField::MaturityDate, "Maturity date is required");
                None
            }
            Some(raw) => {
                let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();
                if parsed.is_none() {
                    errors.insert(
                        DepositField::MaturityDate,
                        "Maturity date must be a valid date (YYYY-MM-DD)",
                    );
                }
                parsed
            }
        };

        errors.into_result(|| NewDeposit {
            description: description.unwrap_or_default().to_string(),
            amount: amount.unwrap_or_default(),
            interest_rate: interest_rate.unwrap_or_default(),
            duration: duration.unwrap_or_default().to_string(),
            maturity_date: maturity_date.unwrap_or_default(),
        })
    }
}
