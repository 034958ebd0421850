use anchor_lang::prelude::*;

use crate::state::{Asset, DepositRecord, WithdrawalRecord};

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub administrator: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct AdministratorAdded {
    pub authority: Pubkey,
    pub address: Pubkey,
}

#[event]
pub struct AdministratorRemoved {
    pub authority: Pubkey,
    pub address: Pubkey,
}

#[event]
pub struct TokenVaultOpened {
    pub mint: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct DepositRecorded {
    pub index: u64,
    pub depositor: Pubkey,
    pub source: Pubkey,
    pub destination: Pubkey,
    pub asset: Asset,
    pub amount: u64,
}

#[event]
pub struct WithdrawalRecorded {
    pub uid: u64,
    pub authority: Pubkey,
    pub depositor: Pubkey,
    pub source: Pubkey,
    pub destination: Pubkey,
    pub asset: Asset,
    pub amount: u64,
    pub message: String,
}

impl From<&DepositRecord> for DepositRecorded {
    fn from(record: &DepositRecord) -> Self {
        Self {
            index: record.index,
            depositor: record.depositor,
            source: record.source,
            destination: record.destination,
            asset: record.asset,
            amount: record.amount,
        }
    }
}

impl From<&WithdrawalRecord> for WithdrawalRecorded {
    fn from(record: &WithdrawalRecord) -> Self {
        Self {
            uid: record.uid,
            authority: record.authority,
            depositor: record.depositor,
            source: record.source,
            destination: record.destination,
            asset: record.asset,
            amount: record.amount,
            message: record.message.clone(),
        }
    }
}
