//! The native vault is a zero-data system account. The runtime rejects any
//! transaction that leaves it with a balance between zero and its
//! rent-exempt minimum, so that minimum is kept in the vault for good and
//! only what lies above it is ever paid out.

/// Lamports of the native vault available to withdrawals.
pub fn disposable_lamports(balance: u64, reserve: u64) -> u64 {
    balance.saturating_sub(reserve)
}

/// Lamports the vault still needs to reach its reserve.
pub fn reserve_shortfall(balance: u64, reserve: u64) -> u64 {
    reserve.saturating_sub(balance)
}
