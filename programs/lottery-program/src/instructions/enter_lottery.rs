use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, VAULT_SEED},
    error::LotteryError,
    state::{Lottery, Vault},
    transfer::VaultLedger,
};

/// Event emitted when a ticket is bought
#[event]
pub struct LotteryEntered {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Amount paid in lamports
    pub amount: u64,
    /// Position of the buyer in the entrant list
    pub ticket_index: u64,
    /// Round the ticket belongs to
    pub round: u64,
}

/// Instruction to buy the signer's single ticket for the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports attached to the entry, must equal the ticket price
///
/// # Security Considerations
/// The instruction performs several critical checks before any funds move:
/// 1. The lottery is still Open
/// 2. The signer has not entered this round yet
/// 3. The amount is non-zero and covered by the signer's balance
/// 4. The amount is exactly the ticket price
/// 5. The entrant list has room left
///
/// # Implementation Notes
/// - Lamports move signer -> vault through the System Program
/// - The vault balance is checked after the transfer
/// - The entrant is appended only after the transfer succeeded
pub fn enter_lottery(ctx: Context<EnterLottery>, amount: u64) -> Result<()> {
    let mut ledger = VaultLedger {
        payer: ctx.accounts.signer.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
        system_program: Some(ctx.accounts.system_program.to_account_info()),
        recipients: &[],
    };
    let buyer = ctx.accounts.signer.key();

    let lottery = &mut ctx.accounts.lottery;
    let ticket_index = lottery.enter(buyer, amount, &mut ledger)?;

    emit!(LotteryEntered {
        lottery: lottery.key(),
        buyer,
        amount,
        ticket_index,
        round: lottery.round,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterLottery<'info> {
    /// The lottery being entered
    #[account(
        mut,
        seeds = [
            LOTTERY_SEED,
            lottery.admin.as_ref(),
        ],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Vault receiving the ticket payment
    /// PDA with seeds ["vault", lottery_key]
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

    /// The entrant paying for the ticket
    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
