//! Boundary to the runtime's transfer primitives.
//!
//! Balance arithmetic and insufficient-funds detection belong to the system
//! and token programs; their errors are returned unchanged.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, Transfer};

/// Moves lamports between two system-owned accounts. Pass the vault seeds
/// as `signer_seeds` when the vault is the source, `&[]` otherwise.
pub fn move_native<'info>(
    system_program: &Program<'info, System>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = system_program::Transfer { from, to };
    let cpi_program = system_program.to_account_info();

    system_program::transfer(
        CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
        amount,
    )
}

/// Moves tokens between two token accounts of the same mint. `authority`
/// is the payer's wallet for deposits and the ledger state for payouts.
pub fn move_tokens<'info>(
    token_program: &Program<'info, Token>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = Transfer {
        from,
        to,
        authority,
    };
    let cpi_program = token_program.to_account_info();

    token::transfer(
        CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
        amount,
    )
}

/// Creates a program-owned account of `space` bytes at a derived address,
/// funded to its rent-exempt minimum by `payer`. `signer_seeds` are the
/// account's own seeds, bump included.
///
/// An address that already holds lamports cannot be created over; it is
/// topped up, allocated and assigned instead.
pub fn create_program_account<'info>(
    system_program: &Program<'info, System>,
    payer: AccountInfo<'info>,
    account: AccountInfo<'info>,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = account.lamports();
    let cpi_program = system_program.to_account_info();

    if current == 0 {
        let cpi_accounts = system_program::CreateAccount {
            from: payer,
            to: account,
        };
        return system_program::create_account(
            CpiContext::new_with_signer(cpi_program, cpi_accounts, &[signer_seeds]),
            required,
            space as u64,
            owner,
        );
    }

    let shortfall = required.saturating_sub(current);
    if shortfall > 0 {
        move_native(system_program, payer, account.clone(), shortfall, &[])?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            cpi_program.clone(),
            system_program::Allocate {
                account_to_allocate: account.clone(),
            },
            &[signer_seeds],
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            cpi_program,
            system_program::Assign {
                account_to_assign: account,
            },
            &[signer_seeds],
        ),
        owner,
    )
}
