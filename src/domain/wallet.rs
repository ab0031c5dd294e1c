use super::bitcoin::Bitcoin;
use crate::error::WalletError;
use parking_lot::Mutex;

/// A balance guarded by a lock.
///
/// Every read and every read-modify-write of the balance happens while the lock
/// is held, so concurrent callers sharing one wallet (e.g. through an `Arc`)
/// never observe a partial update. The balance may be negative if the wallet
/// was created that way; withdrawals alone can never push it below zero.
#[derive(Debug, Default)]
pub struct Wallet {
    balance: Mutex<Bitcoin>,
}

impl Wallet {
    /// Creates an empty wallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a wallet holding `balance`, which may be negative.
    pub fn with_balance(balance: Bitcoin) -> Self {
        Self {
            balance: Mutex::new(balance),
        }
    }

    /// Adds `amount` to the balance.
    pub fn deposit(&self, amount: Bitcoin) -> Result<(), WalletError> {
        if amount.is_negative() {
            return Err(WalletError::NegativeInput);
        }

        *self.balance.lock() += amount;
        Ok(())
    }

    /// Takes `amount` out of the balance if the wallet currently holds at least that much.
    pub fn withdraw(&self, amount: Bitcoin) -> Result<(), WalletError> {
        if amount.is_negative() {
            return Err(WalletError::NegativeInput);
        }

        let mut balance = self.balance.lock();
        if *balance < amount {
            return Err(WalletError::InsufficientFunds);
        }
        *balance -= amount;
        Ok(())
    }

    pub fn balance(&self) -> Bitcoin {
        *self.balance.lock()
    }

    /// Consumes the wallet and returns its balance without locking.
    pub fn into_balance(self) -> Bitcoin {
        self.balance.into_inner()
    }
}

impl From<Bitcoin> for Wallet {
    fn from(balance: Bitcoin) -> Self {
        Self::with_balance(balance)
    }
}
