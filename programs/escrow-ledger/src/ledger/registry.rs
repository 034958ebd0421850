use anchor_lang::prelude::*;

use super::SignerIdentity;
use crate::constants::MAX_ADMINISTRATORS;
use crate::errors::{LedgerError, LedgerResult};
use crate::state::LedgerState;

impl LedgerState {
    pub fn is_initialized(&self) -> bool {
        !self.administrators.is_empty()
    }

    /// Sets up a fresh ledger with `founder` as its only administrator.
    pub fn open(
        &mut self,
        founder: &SignerIdentity,
        vault: Pubkey,
        bump: u8,
        vault_bump: u8,
    ) -> LedgerResult<()> {
        if self.is_initialized() {
            return Err(LedgerError::AlreadyInitialized);
        }

        self.administrators = vec![*founder.key()];
        self.deposit_index = 0;
        self.uid = 0;
        self.vault = vault;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    pub fn is_administrator(&self, address: &Pubkey) -> bool {
        self.administrators.contains(address)
    }

    /// Membership is read from the current state on every call, never cached.
    pub fn authorize(&self, caller: &SignerIdentity) -> LedgerResult<()> {
        if !self.is_administrator(caller.key()) {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    pub fn add_administrator(&mut self, caller: &SignerIdentity, new_address: Pubkey) -> LedgerResult<()> {
        self.authorize(caller)?;

        if self.is_administrator(&new_address) {
            return Err(LedgerError::DuplicateAddress);
        }
        if self.administrators.len() >= MAX_ADMINISTRATORS {
            return Err(LedgerError::AdministratorSetFull);
        }

        self.administrators.push(new_address);
        Ok(())
    }

    pub fn remove_administrator(&mut self, caller: &SignerIdentity, target: &Pubkey) -> LedgerResult<()> {
        self.authorize(caller)?;

        let index = self
            .administrators
            .iter()
            .position(|address| address == target)
            .ok_or(LedgerError::AddressNotFound)?;

        if self.administrators.len() == 1 {
            return Err(LedgerError::CannotRemoveLastAdministrator);
        }

        // Vec::remove keeps the remaining entries in order
        self.administrators.remove(index);
        Ok(())
    }
}
