//! Record accounts created on first use.
//!
//! Pages and history headers are addressed by seeds that depend on the
//! ledger counters, so they cannot be declared with `init` constraints. The
//! handlers pass them in unchecked and open them here once the operation has
//! been validated, so nothing is created on behalf of a rejected caller.

use std::ops::{Deref, DerefMut};

use anchor_lang::prelude::*;

use crate::derivation::{AddressDeriver, ProgramDeriver};
use crate::errors::LedgerError;
use crate::ledger::{page_of, RecordPage};
use crate::state::HistoryHeader;
use crate::transfer;

/// Who pays rent for the accounts an instruction creates.
pub struct Funding<'a, 'info> {
    pub payer: AccountInfo<'info>,
    pub system_program: &'a Program<'info, System>,
}

/// A program-owned account and its decoded contents.
pub struct Stored<'info, T> {
    info: AccountInfo<'info>,
    bump: u8,
    value: T,
}

impl<'info, T> Stored<'info, T>
where
    T: AccountSerialize + AccountDeserialize + Default,
{
    /// Checks that `info` sits at the address derived from `seeds`, creates
    /// it on first use and decodes it.
    pub fn open(
        info: AccountInfo<'info>,
        seeds: &[&[u8]],
        space: usize,
        deriver: &ProgramDeriver,
        funding: &Funding<'_, 'info>,
    ) -> Result<Self> {
        let bump = deriver.verify(seeds, info.key, LedgerError::InvalidRecordAddress)?;

        if info.owner == deriver.program_id() {
            let value = {
                let data = info.try_borrow_data()?;
                T::try_deserialize(&mut &data[..])?
            };
            return Ok(Self { info, bump, value });
        }

        let bump_seed = [bump];
        let mut signer_seeds: Vec<&[u8]> = seeds.to_vec();
        signer_seeds.push(&bump_seed);
        transfer::create_program_account(
            funding.system_program,
            funding.payer.clone(),
            info.clone(),
            space,
            deriver.program_id(),
            &signer_seeds,
        )?;
        Ok(Self {
            info,
            bump,
            value: T::default(),
        })
    }

    pub fn bump(&self) -> u8 {
        self.bump
    }

    pub fn store(&self) -> Result<()> {
        let mut data = self.info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        self.value.try_serialize(&mut writer)
    }
}

impl<T> Deref for Stored<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Stored<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

/// Unchecked accounts a record is written to.
pub struct JournalAccounts<'info> {
    /// Page of the ledger-wide sequence
    pub ledger_page: AccountInfo<'info>,
    /// Header of the depositor's own sequence
    pub history: AccountInfo<'info>,
    /// Page of the depositor's own sequence
    pub history_page: AccountInfo<'info>,
}

/// One record on its way into the ledger-wide sequence and into the
/// depositor's own sequence.
pub struct Journal<'info, P> {
    ledger: Pubkey,
    depositor: Pubkey,
    position: u64,
    ledger_page: Stored<'info, P>,
    history: Stored<'info, HistoryHeader>,
    history_page: Stored<'info, P>,
}

impl<'info, P> Journal<'info, P>
where
    P: RecordPage + AccountSerialize + AccountDeserialize + Default,
    P::Record: Clone,
{
    /// Opens the pages for the record at `position` of the ledger-wide
    /// sequence and checks each has the record's slot free.
    pub fn open(
        accounts: JournalAccounts<'info>,
        ledger: Pubkey,
        depositor: Pubkey,
        position: u64,
        deriver: &ProgramDeriver,
        funding: &Funding<'_, 'info>,
    ) -> Result<Self> {
        let number = page_of(position).0.to_le_bytes();
        let ledger_page: Stored<P> = Stored::open(
            accounts.ledger_page,
            &[P::LEDGER_SEED, &number],
            P::SPACE,
            deriver,
            funding,
        )?;
        ledger_page.ensure_slot(&ledger, position)?;

        let history: Stored<HistoryHeader> = Stored::open(
            accounts.history,
            &[P::HISTORY_SEED, depositor.as_ref()],
            HistoryHeader::LEN,
            deriver,
            funding,
        )?;
        history.ensure_owner(&depositor)?;

        let own = history.count;
        let own_number = page_of(own).0.to_le_bytes();
        let history_page: Stored<P> = Stored::open(
            accounts.history_page,
            &[P::HISTORY_SEED, depositor.as_ref(), &own_number],
            P::SPACE,
            deriver,
            funding,
        )?;
        history_page.ensure_slot(&depositor, own)?;

        Ok(Self {
            ledger,
            depositor,
            position,
            ledger_page,
            history,
            history_page,
        })
    }

    /// Writes the record staged for this journal's position.
    pub fn append(mut self, record: P::Record) -> Result<()> {
        let bump = self.ledger_page.bump();
        self.ledger_page
            .append(self.ledger, bump, self.position, record.clone())?;

        let bump = self.history.bump();
        let own = self.history.advance(self.depositor, bump)?;

        let bump = self.history_page.bump();
        self.history_page.append(self.depositor, bump, own, record)?;

        self.ledger_page.store()?;
        self.history.store()?;
        self.history_page.store()
    }
}
