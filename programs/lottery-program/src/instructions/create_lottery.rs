use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, VAULT_SEED},
    state::{Lottery, Vault, LOTTERY_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when a lottery is created
#[event]
pub struct LotteryCreated {
    /// The pubkey of the created lottery
    pub lottery: Pubkey,
    /// The admin allowed to draw and reopen
    pub admin: Pubkey,
    /// The vault holding ticket payments
    pub vault: Pubkey,
    /// Price per ticket in lamports
    pub ticket_price: u64,
}

/// Instruction to create a lottery owned by the signer
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `ticket_price` - Price of a single ticket in lamports (must be > 0)
///
/// # Account Validations
/// * Lottery - New PDA with seeds ["lottery", admin_key]
/// * Vault - New PDA with seeds ["vault", lottery_key]
/// * Admin - Signer paying for both accounts, becomes the lottery admin
///
/// # Implementation Notes
/// - The lottery starts Open with no entrants and an empty pot
/// - Admin and ticket price never change afterwards
pub fn create_lottery(ctx: Context<CreateLottery>, ticket_price: u64) -> Result<()> {
    let lottery = Lottery::new(
        ctx.accounts.admin.key(),
        ctx.accounts.vault.key(),
        ticket_price,
        ctx.bumps.lottery,
    )?;
    ctx.accounts.lottery.set_inner(lottery);

    ctx.accounts.vault.lottery = ctx.accounts.lottery.key();
    ctx.accounts.vault.bump = ctx.bumps.vault;

    emit!(LotteryCreated {
        lottery: ctx.accounts.lottery.key(),
        admin: ctx.accounts.admin.key(),
        vault: ctx.accounts.vault.key(),
        ticket_price,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateLottery<'info> {
    #[account(
        init,
        payer = admin,
        space = LOTTERY_ACCOUNT_SIZE,
        seeds = [
            LOTTERY_SEED,
            admin.key().as_ref(),
        ],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init,
        payer = admin,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [
            VAULT_SEED,
            lottery.key().as_ref(),
        ],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
