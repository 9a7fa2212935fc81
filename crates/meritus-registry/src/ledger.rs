use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use meritus_core::AccountId;

/// Native-value ledger errors.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("insufficient balance for {account}: balance {balance}, requested {amount}")]
    InsufficientBalance {
        account: AccountId,
        balance: u128,
        amount: u128,
    },

    #[error("balance overflow crediting {0}")]
    BalanceOverflow(AccountId),
}

/// An individual entry in the double-entry bookkeeping ledger.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    /// Unique ID for this entry.
    pub id: Uuid,
    /// The account whose balance is affected.
    pub account: AccountId,
    /// Positive = credit, negative = debit.
    pub delta: i128,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// In-memory ledger for the execution environment's native value.
///
/// Stands in for the host's "transferable numeric amount owned by an
/// identity": the host deposits external value onto an account, and the
/// registry moves value between accounts atomically. Every movement is
/// recorded as a debit/credit entry pair.
pub struct NativeLedger {
    /// Current balance per account, in the smallest native unit.
    balances: DashMap<AccountId, u128>,
    /// Double-entry audit records.
    entries: DashMap<Uuid, LedgerEntry>,
}

impl NativeLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            balances: DashMap::new(),
            entries: DashMap::new(),
        }
    }

    /// Current balance of an account. Unknown accounts hold zero.
    pub fn balance_of(&self, account: &AccountId) -> u128 {
        self.balances.get(account).map(|b| *b).unwrap_or(0)
    }

    /// Number of audit entries recorded so far.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Credit external value onto an account.
    pub fn deposit(&self, account: &AccountId, amount: u128) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let balance = self.balance_of(account);
        let new_balance = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow(account.clone()))?;
        self.balances.insert(account.clone(), new_balance);
        self.record(account, amount as i128);
        tracing::debug!(account = %account, amount, "value deposited");
        Ok(())
    }

    /// Move value between two accounts.
    ///
    /// Fails without any effect if the sender cannot cover the amount.
    pub fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> Result<(), LedgerError> {
        if amount == 0 || from == to {
            return Ok(());
        }
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from.clone(),
                balance: from_balance,
                amount,
            });
        }
        let to_balance = self.balance_of(to);
        let to_after = to_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow(to.clone()))?;

        self.balances.insert(from.clone(), from_balance - amount);
        self.balances.insert(to.clone(), to_after);
        self.record(from, -(amount as i128));
        self.record(to, amount as i128);
        tracing::debug!(from = %from, to = %to, amount, "value transferred");
        Ok(())
    }

    /// Record a single audit entry.
    fn record(&self, account: &AccountId, delta: i128) {
        let id = Uuid::now_v7();
        self.entries.insert(
            id,
            LedgerEntry {
                id,
                account: account.clone(),
                delta,
                recorded_at: Utc::now(),
            },
        );
    }
}

impl Default for NativeLedger {
    fn default() -> Self {
        Self::new()
    }
}
