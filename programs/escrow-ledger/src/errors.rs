use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    // Authorization
    #[msg("Signer is not an authorized administrator")]
    Unauthorized,
    #[msg("The last administrator cannot be removed")]
    CannotRemoveLastAdministrator,

    // Validation
    #[msg("Address is already an authorized administrator")]
    DuplicateAddress,
    #[msg("Address is not an authorized administrator")]
    AddressNotFound,
    #[msg("Vault does not match the derived vault address")]
    InvalidVaultAddress,
    #[msg("Token account mint does not match the requested mint")]
    InvalidVaultMint,
    #[msg("Withdrawal message exceeds the maximum length")]
    MessageTooLong,
    #[msg("Amount should be more than 0")]
    InvalidAmount,
    #[msg("Record account belongs to a different owner")]
    HistoryOwnerMismatch,
    #[msg("Record account does not match its derived address")]
    InvalidRecordAddress,
    #[msg("Record page does not hold the next record of its sequence")]
    RecordOutOfSequence,

    // Resources
    #[msg("Vault balance is lower than the requested amount")]
    InsufficientVaultBalance,
    #[msg("Administrator set is full")]
    AdministratorSetFull,
    #[msg("Ledger counter overflow")]
    CounterOverflow,

    // Initialization
    #[msg("Ledger state is already initialized")]
    AlreadyInitialized,
    #[msg("No bump in [0, 255] yields a valid program address")]
    AddressSpaceExhausted,
}

/// Result type for the host-independent ledger rules.
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
