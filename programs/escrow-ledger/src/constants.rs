//! Seeds and capacity limits shared by the program and off-chain clients.

/// Singleton ledger state: `[LEDGER_STATE_SEED]`
pub const LEDGER_STATE_SEED: &[u8] = b"MY-STATE-SEED";

/// Native-currency vault: `[NATIVE_VAULT_SEED]`
pub const NATIVE_VAULT_SEED: &[u8] = b"VAULT-SEED";

/// Per-token vault: `[TOKEN_VAULT_SEED, mint]`
pub const TOKEN_VAULT_SEED: &[u8] = b"SPL-STATE-SEED";

/// Ledger-wide deposit pages: `[DEPOSIT_PAGE_SEED, page.to_le_bytes()]`
pub const DEPOSIT_PAGE_SEED: &[u8] = b"DEPOSIT-PAGE-SEED";

/// Ledger-wide withdrawal pages: `[WITHDRAWAL_PAGE_SEED, page.to_le_bytes()]`
pub const WITHDRAWAL_PAGE_SEED: &[u8] = b"WITHDRAW-PAGE-SEED";

/// Per-depositor deposit history: `[DEPOSIT_HISTORY_SEED, depositor]` for the
/// header, `[DEPOSIT_HISTORY_SEED, depositor, page.to_le_bytes()]` for its pages
pub const DEPOSIT_HISTORY_SEED: &[u8] = b"DEPOSIT-STATE-SEED";

/// Per-depositor withdrawal history, laid out like the deposit history
pub const WITHDRAWAL_HISTORY_SEED: &[u8] = b"WITHDRAW-STATE-SEED";

pub const MAX_ADMINISTRATORS: usize = 10;

/// Largest withdrawal annotation, in UTF-8 bytes.
pub const MAX_MESSAGE_LEN: usize = 64;

// Record pages are created through a CPI, which caps a new account at
// 10 KiB. A full withdrawal page is about 7.9 KiB.
pub const RECORDS_PER_PAGE: usize = 32;
