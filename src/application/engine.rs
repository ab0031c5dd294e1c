use crate::domain::bitcoin::Bitcoin;
use crate::domain::operation::{Operation, OperationType};
use crate::domain::wallet::Wallet;
use crate::error::{ReplayError, Result};
use std::sync::Arc;
use tracing::debug;

/// What a successfully applied operation produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Applied,
    Balance(Bitcoin),
}

/// Applies operations to a single shared wallet.
///
/// The engine owns the wallet behind an `Arc` so that concurrent replays can
/// hand it to independent tasks. All serialization is done by the wallet's own
/// lock; the engine adds no locking of its own.
pub struct WalletEngine {
    wallet: Arc<Wallet>,
}

impl WalletEngine {
    /// Creates a new `WalletEngine` around `wallet`.
    pub fn new(wallet: Wallet) -> Self {
        Self {
            wallet: Arc::new(wallet),
        }
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Applies one operation and returns its outcome.
    ///
    /// Rejections by the wallet come back as `ReplayError::Rejected`, leaving the
    /// balance as it was.
    pub fn apply(&self, op: Operation) -> Result<Outcome> {
        apply_to(&self.wallet, op)
    }

    /// Spawns one task per operation against the shared wallet and waits for all of them.
    ///
    /// Results are returned in input order. The order in which the wallet sees
    /// the operations is whatever order the tasks acquire its lock in.
    pub async fn apply_concurrently(&self, ops: Vec<Operation>) -> Vec<Result<Outcome>> {
        let handles: Vec<_> = ops
            .into_iter()
            .map(|op| {
                let wallet = Arc::clone(&self.wallet);
                tokio::spawn(async move { apply_to(&wallet, op) })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = handle
                .await
                .unwrap_or_else(|e| Err(ReplayError::OperationError(e.to_string())));
            results.push(result);
        }
        results
    }

    pub fn balance(&self) -> Bitcoin {
        self.wallet.balance()
    }

    /// Consumes the engine and returns the final balance.
    pub fn into_balance(self) -> Bitcoin {
        match Arc::try_unwrap(self.wallet) {
            Ok(wallet) => wallet.into_balance(),
            Err(shared) => shared.balance(),
        }
    }
}

fn apply_to(wallet: &Wallet, op: Operation) -> Result<Outcome> {
    let result = match op.r#type {
        OperationType::Deposit => required_amount(&op)
            .and_then(|amount| wallet.deposit(amount).map_err(ReplayError::from))
            .map(|_| Outcome::Applied),
        OperationType::Withdraw => required_amount(&op)
            .and_then(|amount| wallet.withdraw(amount).map_err(ReplayError::from))
            .map(|_| Outcome::Applied),
        OperationType::Balance => Ok(Outcome::Balance(wallet.balance())),
    };

    if let Err(e) = &result {
        debug!(operation = %op.r#type, amount = ?op.amount, error = %e, "operation not applied");
    }
    result
}

/// The amount of a deposit or withdrawal. Scripts may not carry `NaN` or infinities.
fn required_amount(op: &Operation) -> Result<Bitcoin> {
    let amount = op
        .amount
        .ok_or_else(|| ReplayError::OperationError(format!("{} missing amount", op.r#type)))?;
    if !amount.is_finite() {
        return Err(ReplayError::OperationError(format!(
            "{} amount {} is not a finite number",
            op.r#type, amount
        )));
    }
    Ok(amount)
}
