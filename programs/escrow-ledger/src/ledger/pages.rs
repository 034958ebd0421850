//! Append-only record pages.
//!
//! A record sequence (all deposits, all withdrawals, or one depositor's share
//! of either) is split into fixed-size pages. The record at position `n` of a
//! sequence lives in page `n / RECORDS_PER_PAGE`, so a sequence grows by
//! adding pages and never runs out of room.

use anchor_lang::prelude::*;

use crate::constants::{
    DEPOSIT_HISTORY_SEED, DEPOSIT_PAGE_SEED, RECORDS_PER_PAGE, WITHDRAWAL_HISTORY_SEED,
    WITHDRAWAL_PAGE_SEED,
};
use crate::errors::{LedgerError, LedgerResult};
use crate::state::{
    DepositPage, DepositRecord, HistoryHeader, PageHeader, WithdrawalPage, WithdrawalRecord,
};

/// Page number and slot of the record at `position`.
pub fn page_of(position: u64) -> (u64, usize) {
    let per_page = RECORDS_PER_PAGE as u64;
    (position / per_page, (position % per_page) as usize)
}

/// A freshly created account has no owner yet; the first append claims it.
fn check_owner(owner: &Pubkey, expected: &Pubkey) -> LedgerResult<()> {
    if *owner != Pubkey::default() && owner != expected {
        return Err(LedgerError::HistoryOwnerMismatch);
    }
    Ok(())
}

pub trait RecordPage {
    type Record;

    /// Seed of the ledger-wide pages, followed by the page number.
    const LEDGER_SEED: &'static [u8];
    /// Seed of the per-depositor header and pages.
    const HISTORY_SEED: &'static [u8];
    const SPACE: usize;

    fn header(&self) -> &PageHeader;
    fn header_mut(&mut self) -> &mut PageHeader;
    fn records(&self) -> &[Self::Record];
    fn push(&mut self, record: Self::Record);

    /// Checks that this page belongs to `owner` and that its next free slot
    /// is the one `position` lands on.
    fn ensure_slot(&self, owner: &Pubkey, position: u64) -> LedgerResult<()> {
        let (number, slot) = page_of(position);
        let header = self.header();
        check_owner(&header.owner, owner)?;
        if header.owner != Pubkey::default() && header.number != number {
            return Err(LedgerError::RecordOutOfSequence);
        }
        if self.records().len() != slot {
            return Err(LedgerError::RecordOutOfSequence);
        }
        Ok(())
    }

    fn append(&mut self, owner: Pubkey, bump: u8, position: u64, record: Self::Record) -> LedgerResult<()> {
        self.ensure_slot(&owner, position)?;
        *self.header_mut() = PageHeader {
            owner,
            number: page_of(position).0,
            bump,
        };
        self.push(record);
        Ok(())
    }
}

impl RecordPage for DepositPage {
    type Record = DepositRecord;

    const LEDGER_SEED: &'static [u8] = DEPOSIT_PAGE_SEED;
    const HISTORY_SEED: &'static [u8] = DEPOSIT_HISTORY_SEED;
    const SPACE: usize = DepositPage::LEN;

    fn header(&self) -> &PageHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut PageHeader {
        &mut self.header
    }

    fn records(&self) -> &[DepositRecord] {
        &self.records
    }

    fn push(&mut self, record: DepositRecord) {
        self.records.push(record);
    }
}

impl RecordPage for WithdrawalPage {
    type Record = WithdrawalRecord;

    const LEDGER_SEED: &'static [u8] = WITHDRAWAL_PAGE_SEED;
    const HISTORY_SEED: &'static [u8] = WITHDRAWAL_HISTORY_SEED;
    const SPACE: usize = WithdrawalPage::LEN;

    fn header(&self) -> &PageHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut PageHeader {
        &mut self.header
    }

    fn records(&self) -> &[WithdrawalRecord] {
        &self.records
    }

    fn push(&mut self, record: WithdrawalRecord) {
        self.records.push(record);
    }
}

impl HistoryHeader {
    pub fn ensure_owner(&self, depositor: &Pubkey) -> LedgerResult<()> {
        check_owner(&self.depositor, depositor)
    }

    /// Claims the header for `depositor` and returns the position the
    /// depositor's next record takes in their own pages.
    pub fn advance(&mut self, depositor: Pubkey, bump: u8) -> LedgerResult<u64> {
        self.ensure_owner(&depositor)?;
        let position = self.count;
        self.count = position.checked_add(1).ok_or(LedgerError::CounterOverflow)?;
        self.depositor = depositor;
        self.bump = bump;
        Ok(position)
    }
}
