use super::bitcoin::Bitcoin;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Deposit,
    Withdraw,
    Balance,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationType::Deposit => "deposit",
            OperationType::Withdraw => "withdraw",
            OperationType::Balance => "balance",
        };
        f.write_str(name)
    }
}

/// One row of an operation script. `amount` is required for deposits and
/// withdrawals and ignored for balance inquiries.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub struct Operation {
    pub r#type: OperationType,
    pub amount: Option<Bitcoin>,
}

impl Operation {
    pub fn deposit(amount: f64) -> Self {
        Self {
            r#type: OperationType::Deposit,
            amount: Some(Bitcoin(amount)),
        }
    }

    pub fn withdraw(amount: f64) -> Self {
        Self {
            r#type: OperationType::Withdraw,
            amount: Some(Bitcoin(amount)),
        }
    }

    pub fn balance() -> Self {
        Self {
            r#type: OperationType::Balance,
            amount: None,
        }
    }
}
