use anchor_lang::prelude::*;

use crate::{constants::LOTTERY_SEED, state::Lottery};

/// Event emitted when a settled lottery starts a new round
#[event]
pub struct LotteryReopened {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The new round number
    pub round: u64,
}

/// Instruction for the admin to start the next round after a draw.
/// A settled lottery stays closed until this is called.
pub fn reopen_lottery(ctx: Context<ReopenLottery>) -> Result<()> {
    let caller = ctx.accounts.signer.key();
    let lottery = &mut ctx.accounts.lottery;
    let round = lottery.reopen(caller)?;

    emit!(LotteryReopened {
        lottery: lottery.key(),
        round,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReopenLottery<'info> {
    #[account(
        mut,
        seeds = [
            LOTTERY_SEED,
            lottery.admin.as_ref(),
        ],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    pub signer: Signer<'info>,
}
