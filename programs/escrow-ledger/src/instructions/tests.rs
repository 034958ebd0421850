//! Instructions driven through the program entrypoint with in-memory
//! accounts. Every case here is rejected before the first cross-program
//! call, which the host build cannot perform.

use std::sync::Once;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::solana_program::system_program;
use anchor_lang::InstructionData;
use anchor_spl::token::spl_token;
use solana_program::program_stubs::{set_syscall_stubs, SyscallStubs};

use crate::derivation::{
    deposit_history_address, deposit_history_page_address, deposit_page_address,
    ledger_state_address, native_vault_address, token_vault_address,
    withdrawal_history_address, withdrawal_history_page_address, withdrawal_page_address,
    ProgramDeriver,
};
use crate::errors::LedgerError;
use crate::instruction;
use crate::state::LedgerState;

/// Serves the rent sysvar, which account validation reads on the host.
struct RentSysvar;

impl SyscallStubs for RentSysvar {
    fn sol_get_rent_sysvar(&self, var_addr: *mut u8) -> u64 {
        unsafe { std::ptr::write(var_addr as *mut Rent, Rent::default()) };
        0
    }
}

fn install_rent_sysvar() {
    static RENT: Once = Once::new();
    RENT.call_once(|| {
        set_syscall_stubs(Box::new(RentSysvar));
    });
}

struct TestAccount {
    key: Pubkey,
    owner: Pubkey,
    lamports: u64,
    data: Vec<u8>,
    signer: bool,
    writable: bool,
    executable: bool,
}

impl TestAccount {
    fn wallet(key: Pubkey, lamports: u64) -> Self {
        Self {
            key,
            owner: system_program::ID,
            lamports,
            data: Vec::new(),
            signer: false,
            writable: true,
            executable: false,
        }
    }

    fn signing(mut self) -> Self {
        self.signer = true;
        self
    }

    fn program(key: Pubkey) -> Self {
        Self {
            key,
            owner: Pubkey::default(),
            lamports: 1,
            data: Vec::new(),
            signer: false,
            writable: false,
            executable: true,
        }
    }

    fn ledger(administrators: Vec<Pubkey>) -> Self {
        let deriver = ProgramDeriver::default();
        let (key, bump) = ledger_state_address(&deriver).unwrap();
        let (vault, vault_bump) = native_vault_address(&deriver).unwrap();
        let state = LedgerState {
            administrators,
            deposit_index: 0,
            uid: 0,
            vault,
            bump,
            vault_bump,
        };
        let mut data = vec![0; LedgerState::LEN];
        state.try_serialize(&mut &mut data[..]).unwrap();
        Self {
            key,
            owner: crate::ID,
            lamports: Rent::default().minimum_balance(LedgerState::LEN),
            data,
            signer: false,
            writable: true,
            executable: false,
        }
    }

    fn native_vault(lamports: u64) -> Self {
        let (key, _) = native_vault_address(&ProgramDeriver::default()).unwrap();
        Self::wallet(key, lamports)
    }

    fn mint(key: Pubkey) -> Self {
        let mint = spl_token::state::Mint {
            mint_authority: COption::None,
            supply: 1_000_000,
            decimals: 6,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        let mut data = vec![0; spl_token::state::Mint::LEN];
        spl_token::state::Mint::pack(mint, &mut data).unwrap();
        Self {
            key,
            owner: spl_token::ID,
            lamports: Rent::default().minimum_balance(data.len()),
            data,
            signer: false,
            writable: false,
            executable: false,
        }
    }

    fn token_account(key: Pubkey, mint: Pubkey, holder: Pubkey, amount: u64) -> Self {
        let account = spl_token::state::Account {
            mint,
            owner: holder,
            amount,
            delegate: COption::None,
            state: spl_token::state::AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        let mut data = vec![0; spl_token::state::Account::LEN];
        spl_token::state::Account::pack(account, &mut data).unwrap();
        Self {
            key,
            owner: spl_token::ID,
            lamports: Rent::default().minimum_balance(data.len()),
            data,
            signer: false,
            writable: true,
            executable: false,
        }
    }

    fn ledger_state(&self) -> LedgerState {
        LedgerState::try_deserialize(&mut &self.data[..]).unwrap()
    }
}

fn process(accounts: &mut [TestAccount], data: Vec<u8>) -> ProgramResult {
    install_rent_sysvar();
    let infos: Vec<AccountInfo> = accounts
        .iter_mut()
        .map(|a| {
            AccountInfo::new(
                &a.key,
                a.signer,
                a.writable,
                &mut a.lamports,
                &mut a.data[..],
                &a.owner,
                a.executable,
                0,
            )
        })
        .collect();
    crate::entry(&crate::ID, &infos[..], &data)
}

fn rejected_with(err: LedgerError) -> ProgramResult {
    Err(ProgramError::Custom(u32::from(err)))
}

fn key(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; 32])
}

const ADMIN: u8 = 1;
const OUTSIDER: u8 = 3;
const DEPOSITOR: u8 = 10;
const RECIPIENT: u8 = 11;

/// Unchecked record accounts at their correct, not yet created, addresses.
fn fresh_deposit_records(depositor: Pubkey) -> [TestAccount; 3] {
    let deriver = ProgramDeriver::default();
    [
        TestAccount::wallet(deposit_page_address(&deriver, 0).unwrap().0, 0),
        TestAccount::wallet(deposit_history_address(&deriver, &depositor).unwrap().0, 0),
        TestAccount::wallet(deposit_history_page_address(&deriver, &depositor, 0).unwrap().0, 0),
    ]
}

fn fresh_withdrawal_records(depositor: Pubkey) -> [TestAccount; 3] {
    let deriver = ProgramDeriver::default();
    [
        TestAccount::wallet(withdrawal_page_address(&deriver, 0).unwrap().0, 0),
        TestAccount::wallet(withdrawal_history_address(&deriver, &depositor).unwrap().0, 0),
        TestAccount::wallet(withdrawal_history_page_address(&deriver, &depositor, 0).unwrap().0, 0),
    ]
}

#[test]
fn second_initialize_is_already_initialized_whatever_the_vault() {
    for vault in [TestAccount::native_vault(0), TestAccount::wallet(key(77), 0)] {
        let mut accounts = vec![
            TestAccount::wallet(key(OUTSIDER), 10_000_000).signing(),
            TestAccount::ledger(vec![key(ADMIN)]),
            vault,
            TestAccount::program(system_program::ID),
        ];

        let result = process(&mut accounts, instruction::Initialize {}.data());

        assert_eq!(result, rejected_with(LedgerError::AlreadyInitialized));
        assert_eq!(accounts[1].ledger_state().administrators, vec![key(ADMIN)]);
        assert_eq!(accounts[0].lamports, 10_000_000);
    }
}

#[test]
fn deposit_into_a_foreign_vault_is_rejected() {
    let [page, history, history_page] = fresh_deposit_records(key(DEPOSITOR));
    let mut accounts = vec![
        TestAccount::wallet(key(DEPOSITOR), 1_000_000).signing(),
        TestAccount::ledger(vec![key(ADMIN)]),
        TestAccount::wallet(key(66), 0),
        page,
        history,
        history_page,
        TestAccount::program(system_program::ID),
    ];

    let result = process(&mut accounts, instruction::DepositNative { amount: 100 }.data());

    assert_eq!(result, rejected_with(LedgerError::InvalidVaultAddress));
    assert_eq!(accounts[0].lamports, 1_000_000);
    assert_eq!(accounts[1].ledger_state().deposit_index, 0);
}

#[test]
fn deposit_with_a_misplaced_page_is_rejected() {
    let deriver = ProgramDeriver::default();
    let [_, history, history_page] = fresh_deposit_records(key(DEPOSITOR));
    // page 1 while the next index lands on page 0
    let later_page = TestAccount::wallet(deposit_page_address(&deriver, 1).unwrap().0, 0);
    let mut accounts = vec![
        TestAccount::wallet(key(DEPOSITOR), 1_000_000).signing(),
        TestAccount::ledger(vec![key(ADMIN)]),
        TestAccount::native_vault(Rent::default().minimum_balance(0)),
        later_page,
        history,
        history_page,
        TestAccount::program(system_program::ID),
    ];

    let result = process(&mut accounts, instruction::DepositNative { amount: 100 }.data());

    assert_eq!(result, rejected_with(LedgerError::InvalidRecordAddress));
    assert_eq!(accounts[3].lamports, 0);
    assert_eq!(accounts[3].owner, system_program::ID);
}

#[test]
fn token_deposit_from_another_mint_is_rejected() {
    let mint = key(40);
    let deriver = ProgramDeriver::default();
    let (vault, _) = token_vault_address(&deriver, &mint).unwrap();
    let (ledger, _) = ledger_state_address(&deriver).unwrap();
    let [page, history, history_page] = fresh_deposit_records(key(DEPOSITOR));
    let mut accounts = vec![
        TestAccount::wallet(key(DEPOSITOR), 1_000_000).signing(),
        TestAccount::ledger(vec![key(ADMIN)]),
        TestAccount::mint(mint),
        TestAccount::token_account(key(20), key(41), key(DEPOSITOR), 500),
        TestAccount::token_account(vault, mint, ledger, 0),
        page,
        history,
        history_page,
        TestAccount::program(spl_token::ID),
        TestAccount::program(system_program::ID),
    ];

    let result = process(&mut accounts, instruction::DepositToken { amount: 100 }.data());

    assert_eq!(result, rejected_with(LedgerError::InvalidVaultMint));
    assert_eq!(accounts[1].ledger_state().deposit_index, 0);
}

#[test]
fn token_payout_to_another_mint_is_rejected() {
    let mint = key(40);
    let deriver = ProgramDeriver::default();
    let (vault, _) = token_vault_address(&deriver, &mint).unwrap();
    let (ledger, _) = ledger_state_address(&deriver).unwrap();
    let [page, history, history_page] = fresh_withdrawal_records(key(DEPOSITOR));
    let mut accounts = vec![
        TestAccount::wallet(key(ADMIN), 1_000_000).signing(),
        TestAccount::ledger(vec![key(ADMIN)]),
        TestAccount::mint(mint),
        TestAccount::token_account(vault, mint, ledger, 500),
        TestAccount::token_account(key(21), key(41), key(RECIPIENT), 0),
        page,
        history,
        history_page,
        TestAccount::program(spl_token::ID),
        TestAccount::program(system_program::ID),
    ];

    let result = process(
        &mut accounts,
        instruction::WithdrawToken {
            amount: 100,
            message: "payout".to_string(),
            depositor: key(DEPOSITOR),
        }
        .data(),
    );

    assert_eq!(result, rejected_with(LedgerError::InvalidVaultMint));
    assert_eq!(accounts[1].ledger_state().uid, 0);
}

#[test]
fn outsider_payout_is_refused_before_any_account_is_created() {
    let reserve = Rent::default().minimum_balance(0);
    let [page, history, history_page] = fresh_withdrawal_records(key(DEPOSITOR));
    let mut accounts = vec![
        // no lamports to pay rent with
        TestAccount::wallet(key(OUTSIDER), 0).signing(),
        TestAccount::ledger(vec![key(ADMIN)]),
        TestAccount::native_vault(reserve + 500),
        TestAccount::wallet(key(RECIPIENT), 0),
        page,
        history,
        history_page,
        TestAccount::program(system_program::ID),
    ];

    let result = process(
        &mut accounts,
        instruction::WithdrawNative {
            amount: 100,
            message: "payout".to_string(),
            depositor: key(DEPOSITOR),
        }
        .data(),
    );

    assert_eq!(result, rejected_with(LedgerError::Unauthorized));
    assert_eq!(accounts[2].lamports, reserve + 500);
    for record in &accounts[4..7] {
        assert_eq!((record.lamports, record.owner), (0, system_program::ID));
    }
    assert_eq!(accounts[1].ledger_state().uid, 0);
}

#[test]
fn payout_of_the_vault_reserve_is_refused() {
    let reserve = Rent::default().minimum_balance(0);
    let [page, history, history_page] = fresh_withdrawal_records(key(DEPOSITOR));
    let mut accounts = vec![
        TestAccount::wallet(key(ADMIN), 1_000_000).signing(),
        TestAccount::ledger(vec![key(ADMIN)]),
        TestAccount::native_vault(reserve + 100),
        TestAccount::wallet(key(RECIPIENT), 0),
        page,
        history,
        history_page,
        TestAccount::program(system_program::ID),
    ];

    let result = process(
        &mut accounts,
        instruction::WithdrawNative {
            amount: 101,
            message: String::new(),
            depositor: key(DEPOSITOR),
        }
        .data(),
    );

    assert_eq!(result, rejected_with(LedgerError::InsufficientVaultBalance));
    assert_eq!(accounts[2].lamports, reserve + 100);
}
