use thiserror::Error;

/// Reasons a wallet refuses an operation. The balance is left untouched in both cases.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletError {
    #[error("negative input")]
    NegativeInput,
    #[error("insufficient funds in the wallet")]
    InsufficientFunds,
}

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Operation rejected: {0}")]
    Rejected(#[from] WalletError),
    #[error("Operation error: {0}")]
    OperationError(String),
}

pub type Result<T> = std::result::Result<T, ReplayError>;
