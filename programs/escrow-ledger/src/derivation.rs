//! Deterministic sub-account addressing.
//!
//! Every account the ledger trusts is located by seeds rather than by an
//! address handed in by the caller. Off-chain clients use the same helpers
//! to compute the accounts of a transaction before submitting it.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::{LedgerError, LedgerResult};

/// Maps an ordered list of seeds to an address that no private key controls,
/// plus the bump that disambiguates it.
///
/// Several bumps may yield a valid address for the same seeds. Which one is
/// returned, and so the order the bumps are tried in, is defined by each
/// scheme; callers only rely on the result being deterministic.
pub trait AddressDeriver {
    fn derive(&self, seeds: &[&[u8]]) -> LedgerResult<(Pubkey, u8)>;

    /// Checks a caller-supplied address against the derived one and returns
    /// the bump on success. `mismatch` is the error reported otherwise.
    fn verify(&self, seeds: &[&[u8]], candidate: &Pubkey, mismatch: LedgerError) -> LedgerResult<u8> {
        let (expected, bump) = self.derive(seeds)?;
        if expected != *candidate {
            return Err(mismatch);
        }
        Ok(bump)
    }
}

/// Program derived addresses of the Solana runtime.
///
/// The canonical bump is the first one, counting down from 255, whose
/// address falls off the ed25519 curve. This is the bump `seeds`/`bump`
/// account constraints and every client library compute.
#[derive(Clone, Copy, Debug)]
pub struct ProgramDeriver {
    program_id: Pubkey,
}

impl ProgramDeriver {
    pub const fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }
}

impl Default for ProgramDeriver {
    fn default() -> Self {
        Self::new(crate::ID)
    }
}

impl AddressDeriver for ProgramDeriver {
    fn derive(&self, seeds: &[&[u8]]) -> LedgerResult<(Pubkey, u8)> {
        Pubkey::try_find_program_address(seeds, &self.program_id)
            .ok_or(LedgerError::AddressSpaceExhausted)
    }
}

pub fn ledger_state_address<D: AddressDeriver>(deriver: &D) -> LedgerResult<(Pubkey, u8)> {
    deriver.derive(&[LEDGER_STATE_SEED])
}

/// Seeds the ledger state signs with, as the token authority of every vault.
pub fn ledger_signer_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [LEDGER_STATE_SEED, bump]
}

pub fn native_vault_address<D: AddressDeriver>(deriver: &D) -> LedgerResult<(Pubkey, u8)> {
    deriver.derive(&[NATIVE_VAULT_SEED])
}

pub fn token_vault_address<D: AddressDeriver>(deriver: &D, mint: &Pubkey) -> LedgerResult<(Pubkey, u8)> {
    deriver.derive(&[TOKEN_VAULT_SEED, mint.as_ref()])
}

pub fn deposit_history_address<D: AddressDeriver>(
    deriver: &D,
    depositor: &Pubkey,
) -> LedgerResult<(Pubkey, u8)> {
    deriver.derive(&[DEPOSIT_HISTORY_SEED, depositor.as_ref()])
}

pub fn withdrawal_history_address<D: AddressDeriver>(
    deriver: &D,
    depositor: &Pubkey,
) -> LedgerResult<(Pubkey, u8)> {
    deriver.derive(&[WITHDRAWAL_HISTORY_SEED, depositor.as_ref()])
}

pub fn deposit_page_address<D: AddressDeriver>(deriver: &D, number: u64) -> LedgerResult<(Pubkey, u8)> {
    deriver.derive(&[DEPOSIT_PAGE_SEED, &number.to_le_bytes()])
}

pub fn withdrawal_page_address<D: AddressDeriver>(deriver: &D, number: u64) -> LedgerResult<(Pubkey, u8)> {
    deriver.derive(&[WITHDRAWAL_PAGE_SEED, &number.to_le_bytes()])
}

pub fn deposit_history_page_address<D: AddressDeriver>(
    deriver: &D,
    depositor: &Pubkey,
    number: u64,
) -> LedgerResult<(Pubkey, u8)> {
    deriver.derive(&[DEPOSIT_HISTORY_SEED, depositor.as_ref(), &number.to_le_bytes()])
}

pub fn withdrawal_history_page_address<D: AddressDeriver>(
    deriver: &D,
    depositor: &Pubkey,
    number: u64,
) -> LedgerResult<(Pubkey, u8)> {
    deriver.derive(&[WITHDRAWAL_HISTORY_SEED, depositor.as_ref(), &number.to_le_bytes()])
}
