use anchor_lang::prelude::*;

use crate::errors::{LedgerError, LedgerResult};
use crate::state::{Asset, DepositRecord, LedgerState};

/// A value movement from a depositor into one of the vaults.
#[derive(Clone, Debug)]
pub struct DepositRequest {
    pub depositor: Pubkey,
    pub source: Pubkey,
    pub destination: Pubkey,
    pub asset: Asset,
    pub amount: u64,
}

impl LedgerState {
    /// Validates a deposit and builds its record. The ledger is not touched,
    /// so the transfer can run between staging and [`Self::append_deposit`].
    pub fn stage_deposit(&self, request: DepositRequest) -> LedgerResult<DepositRecord> {
        if request.amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        self.deposit_index
            .checked_add(1)
            .ok_or(LedgerError::CounterOverflow)?;

        Ok(DepositRecord {
            depositor: request.depositor,
            index: self.deposit_index,
            source: request.source,
            destination: request.destination,
            asset: request.asset,
            amount: request.amount,
        })
    }

    /// Assigns the current `deposit_index` to a staged record, advances the
    /// index past it and returns the record to store in the deposit pages.
    pub fn append_deposit(&mut self, record: DepositRecord) -> LedgerResult<DepositRecord> {
        let next = self
            .deposit_index
            .checked_add(1)
            .ok_or(LedgerError::CounterOverflow)?;

        let stored = DepositRecord {
            index: self.deposit_index,
            ..record
        };
        self.deposit_index = next;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RECORDS_PER_PAGE;

    fn key(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    fn request(amount: u64) -> DepositRequest {
        DepositRequest {
            depositor: key(1),
            source: key(1),
            destination: key(50),
            asset: Asset::Native,
            amount,
        }
    }

    #[test]
    fn staging_does_not_touch_the_ledger() {
        let ledger = LedgerState::default();

        let record = ledger.stage_deposit(request(100)).unwrap();

        assert_eq!(record.index, 0);
        assert_eq!(record.amount, 100);
        assert_eq!(ledger.deposit_index, 0);
    }

    #[test]
    fn zero_amount_is_rejected() {
        let ledger = LedgerState::default();
        assert!(matches!(
            ledger.stage_deposit(request(0)),
            Err(LedgerError::InvalidAmount)
        ));
    }

    #[test]
    fn append_assigns_consecutive_indices() {
        let mut ledger = LedgerState::default();

        let indices: Vec<u64> = [5, 6, 7]
            .into_iter()
            .map(|amount| {
                let record = ledger.stage_deposit(request(amount)).unwrap();
                ledger.append_deposit(record).unwrap().index
            })
            .collect();

        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(ledger.deposit_index, 3);
    }

    #[test]
    fn index_is_not_bounded_by_a_page() {
        let mut ledger = LedgerState::default();
        for _ in 0..(3 * RECORDS_PER_PAGE) {
            let record = ledger.stage_deposit(request(1)).unwrap();
            ledger.append_deposit(record).unwrap();
        }

        let next = ledger.stage_deposit(request(1)).unwrap();
        assert_eq!(next.index, 3 * RECORDS_PER_PAGE as u64);
    }

    #[test]
    fn exhausted_index_is_an_error() {
        let ledger = LedgerState {
            deposit_index: u64::MAX,
            ..LedgerState::default()
        };
        assert!(matches!(
            ledger.stage_deposit(request(1)),
            Err(LedgerError::CounterOverflow)
        ));
    }
}
