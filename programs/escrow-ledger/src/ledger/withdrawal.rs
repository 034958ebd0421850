use anchor_lang::prelude::*;

use super::SignerIdentity;
use crate::constants::MAX_MESSAGE_LEN;
use crate::errors::{LedgerError, LedgerResult};
use crate::state::{Asset, LedgerState, WithdrawalRecord};

/// A payout from one of the vaults, released on behalf of `depositor`.
#[derive(Clone, Debug)]
pub struct WithdrawalRequest {
    pub depositor: Pubkey,
    pub source: Pubkey,
    pub destination: Pubkey,
    pub asset: Asset,
    pub amount: u64,
    pub message: String,
}

impl LedgerState {
    /// Validates a withdrawal against the current administrator set and the
    /// vault balance, and builds its record without touching the ledger.
    pub fn stage_withdrawal(
        &self,
        caller: &SignerIdentity,
        request: WithdrawalRequest,
        vault_balance: u64,
    ) -> LedgerResult<WithdrawalRecord> {
        self.authorize(caller)?;

        if request.amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if request.message.len() > MAX_MESSAGE_LEN {
            return Err(LedgerError::MessageTooLong);
        }
        if request.amount > vault_balance {
            return Err(LedgerError::InsufficientVaultBalance);
        }
        self.uid.checked_add(1).ok_or(LedgerError::CounterOverflow)?;

        Ok(WithdrawalRecord {
            uid: self.uid,
            authority: *caller.key(),
            depositor: request.depositor,
            source: request.source,
            destination: request.destination,
            asset: request.asset,
            amount: request.amount,
            message: request.message,
        })
    }

    /// Assigns the current `uid` to a staged record, advances the counter and
    /// returns the record to store in the withdrawal pages. Uids are never
    /// handed out twice, corrections are new withdrawals.
    pub fn append_withdrawal(&mut self, record: WithdrawalRecord) -> LedgerResult<WithdrawalRecord> {
        let next = self.uid.checked_add(1).ok_or(LedgerError::CounterOverflow)?;

        let stored = WithdrawalRecord {
            uid: self.uid,
            ..record
        };
        self.uid = next;
        Ok(stored)
    }
}
