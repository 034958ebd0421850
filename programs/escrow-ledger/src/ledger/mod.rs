//! Escrow rules independent of the account plumbing.
//!
//! Instruction handlers gather accounts, call into these methods, and move
//! value between the two halves of every deposit or withdrawal: validation
//! (`stage_*`) runs before the transfer, the append runs after it.

mod deposit;
mod pages;
mod registry;
mod reserve;
mod withdrawal;

use anchor_lang::prelude::*;

pub use deposit::DepositRequest;
pub use pages::{page_of, RecordPage};
pub use reserve::{disposable_lamports, reserve_shortfall};
pub use withdrawal::WithdrawalRequest;

/// Proof that an address signed the current transaction.
///
/// Outside tests the only way to obtain one is from a [`Signer`], so a plain
/// `Pubkey` instruction argument can never pass an authorization check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignerIdentity(Pubkey);

impl SignerIdentity {
    pub fn key(&self) -> &Pubkey {
        &self.0
    }

    
    #[cfg(test)]
    pub(crate) fn assume(key: Pubkey) -> Self {
        Self(key)
    }
}

impl<'info> From<&Signer<'info>> for SignerIdentity {
    fn from(signer: &Signer<'info>) -> Self {
        Self(signer.key())
    }
}
