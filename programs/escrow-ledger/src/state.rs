use anchor_lang::prelude::*;

use crate::constants::*;

/// Which vault a record moved value through.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, InitSpace)]
pub enum Asset {
    Native,
    Token { mint: Pubkey },
}

/// Singleton ledger of the escrow, stored at `[LEDGER_STATE_SEED]`.
///
/// Also the token authority of every per-token vault. The records themselves
/// live in [`DepositPage`] and [`WithdrawalPage`] accounts; the counters here
/// are the global sequence that places each record in its page.
#[account]
#[derive(Default, InitSpace)]
pub struct LedgerState {
    /// Authorized administrators, in insertion order. Never empty once initialized.
    #[max_len(MAX_ADMINISTRATORS)]
    pub administrators: Vec<Pubkey>,
    /// Index the next deposit receives
    pub deposit_index: u64,
    /// Uid the next withdrawal receives
    pub uid: u64,
    /// Native-currency vault
    pub vault: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
}

impl LedgerState {
    pub const LEN: usize = 8 + Self::INIT_SPACE;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct DepositRecord {
    pub depositor: Pubkey,
    pub index: u64,
    /// Account the value left (payer wallet or token account)
    pub source: Pubkey,
    pub destination: Pubkey,
    pub asset: Asset,
    pub amount: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct WithdrawalRecord {
    pub uid: u64,
    /// Administrator that signed the withdrawal
    pub authority: Pubkey,
    /// Depositor whose funds were released
    pub depositor: Pubkey,
    pub source: Pubkey,
    pub destination: Pubkey,
    pub asset: Asset,
    pub amount: u64,
    #[max_len(MAX_MESSAGE_LEN)]
    pub message: String,
}

/// Identifies one page of a record sequence.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct PageHeader {
    /// The ledger state for ledger-wide pages, the depositor for per-depositor
    /// pages. Unset until the first record lands.
    pub owner: Pubkey,
    pub number: u64,
    pub bump: u8,
}

/// Up to [`RECORDS_PER_PAGE`] consecutive deposits.
#[account]
#[derive(Default, InitSpace)]
pub struct DepositPage {
    pub header: PageHeader,
    #[max_len(RECORDS_PER_PAGE)]
    pub records: Vec<DepositRecord>,
}

impl DepositPage {
    pub const LEN: usize = 8 + Self::INIT_SPACE;
}

/// Up to [`RECORDS_PER_PAGE`] consecutive withdrawals.
#[account]
#[derive(Default, InitSpace)]
pub struct WithdrawalPage {
    pub header: PageHeader,
    #[max_len(RECORDS_PER_PAGE)]
    pub records: Vec<WithdrawalRecord>,
}

impl WithdrawalPage {
    pub const LEN: usize = 8 + Self::INIT_SPACE;
}

/// How many records one depositor has in a history, stored at
/// `[DEPOSIT_HISTORY_SEED, depositor]` or `[WITHDRAWAL_HISTORY_SEED, depositor]`.
/// The count places the next record in the depositor's own pages.
#[account]
#[derive(Default, InitSpace)]
pub struct HistoryHeader {
    pub depositor: Pubkey,
    pub bump: u8,
    pub count: u64,
}

impl HistoryHeader {
    pub const LEN: usize = 8 + Self::INIT_SPACE;
}
