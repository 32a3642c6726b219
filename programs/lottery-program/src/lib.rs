use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod randomness;
pub mod state;
pub mod transfer;

declare_id!("5SUtW7urk5v6fBLqgo4EQZLY5rCHZRZydusxLrQSQWQx");

#[program]
pub mod lottery_program {
    use super::*;

    pub fn create_lottery(ctx: Context<CreateLottery>, ticket_price: u64) -> Result<()> {
        instructions::create_lottery::create_lottery(ctx, ticket_price)
    }

    pub fn enter_lottery(ctx: Context<EnterLottery>, amount: u64) -> Result<()> {
        instructions::enter_lottery::enter_lottery(ctx, amount)
    }

    pub fn decide_winner<'info>(
        ctx: Context<'_, '_, '_, 'info, DecideWinner<'info>>,
    ) -> Result<()> {
        instructions::decide_winner::decide_winner(ctx)
    }

    pub fn reopen_lottery(ctx: Context<ReopenLottery>) -> Result<()> {
        instructions::reopen_lottery::reopen_lottery(ctx)
    }
}
