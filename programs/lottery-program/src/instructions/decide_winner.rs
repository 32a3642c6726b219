use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, VAULT_SEED},
    error::LotteryError,
    randomness::SlotHashesSelector,
    state::{Lottery, Vault},
    transfer::VaultLedger,
};

/// Event emitted when a round is drawn and paid out
#[event]
pub struct WinnerDecided {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// The winner's position in the entrant list
    pub ticket_index: u64,
    /// Lamports paid to the winner
    pub prize: u64,
    /// Number of entrants in the drawn round
    pub entrant_count: u64,
    /// The round that was drawn
    pub round: u64,
}

/// Draws a winner, pays the whole pot and settles the round.
///
/// Only the admin may call this, and only while the round is Open with at
/// least one entrant. The winner is chosen from SlotHashes entropy mixed with
/// the clock timestamp.
///
/// Every entrant account must be passed as a writable remaining account,
/// since the winner is only known once the draw has run.
///
/// After execution:
/// - The pot is moved from the vault to the winner
/// - The entrant list is empty and the pot is zero
/// - The lottery is Settled until the admin reopens it
///
/// # Errors
/// - `NotAdmin` if the signer is not the lottery admin
/// - `LotteryNotOpen` if the round has already been drawn
/// - `NoEntrants` if nobody bought a ticket
/// - `InvalidSlotHashesAccount` if the provided SlotHashes account is invalid
/// - `WinnerAccountMissing` if the winner's account was not supplied
pub fn decide_winner<'info>(ctx: Context<'_, '_, '_, 'info, DecideWinner<'info>>) -> Result<()> {
    let clock = Clock::get()?;
    let mut selector = SlotHashesSelector::new(
        ctx.accounts.recent_slothashes.to_account_info(),
        clock.unix_timestamp,
    );
    let mut ledger = VaultLedger {
        payer: ctx.accounts.signer.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
        system_program: None,
        recipients: ctx.remaining_accounts,
    };
    let caller = ctx.accounts.signer.key();

    let lottery = &mut ctx.accounts.lottery;
    msg!("Entrants: {}", lottery.entrants.len());
    msg!("Pot: {}", lottery.pot);

    let payout = lottery.decide_winner(caller, &mut selector, &mut ledger)?;

    msg!("Winner: {} (ticket {})", payout.winner, payout.ticket_index);

    emit!(WinnerDecided {
        lottery: lottery.key(),
        winner: payout.winner,
        ticket_index: payout.ticket_index,
        prize: payout.prize,
        entrant_count: payout.entrant_count,
        round: lottery.round,
    });

    Ok(())
}

/// Accounts required for the decide_winner instruction
#[derive(Accounts)]
pub struct DecideWinner<'info> {
    /// The lottery being drawn
    #[account(
        mut,
        seeds = [
            LOTTERY_SEED,
            lottery.admin.as_ref(),
        ],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Vault paying out the pot
    #[account(
        mut,
        seeds = [
            VAULT_SEED,
            lottery.key().as_ref(),
        ],
        bump = vault.bump,
        address = lottery.vault @ LotteryError::InvalidVault,
    )]
    pub vault: Account<'info, Vault>,

    /// Must be the lottery admin
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The SlotHashes sysvar contains the most recent block hashes
    /// CHECK: Validated manually when the winner is selected.
    /// Anchor always throws an error on the SlotHashes sysvar.
    pub recent_slothashes: UncheckedAccount<'info>,
}
