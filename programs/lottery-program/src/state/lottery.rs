use anchor_lang::prelude::*;

use crate::{
    constants::MAX_ENTRANTS,
    error::LotteryError,
    randomness::WinnerSelector,
    transfer::ValueTransfer,
};

// Space calculation:
// 8 (discriminator) +
// 32 (admin) +
// 32 (vault) +
// 8 (ticket_price) +
// 8 (pot) +
// 4 + 32 * MAX_ENTRANTS (entrants) +
// 1 (lottery_state) +
// 8 (round) +
// 33 (last_winner: Option<Pubkey>) +
// 8 (last_prize) +
// 1 (bump)
pub const LOTTERY_ACCOUNT_SIZE: usize =
    8 + 32 + 32 + 8 + 8 + (4 + 32 * MAX_ENTRANTS) + 1 + 8 + 33 + 8 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub enum LotteryState {
    Open = 0,
    Settled = 1,
}

/// A single sale-and-draw round.
///
/// `pot` mirrors the lamports paid for tickets and held by the vault, so
/// `pot == ticket_price * entrants.len()` for as long as the round is open.
#[account]
pub struct Lottery {
    pub admin: Pubkey,
    pub vault: Pubkey,
    pub ticket_price: u64,
    pub pot: u64,
    pub entrants: Vec<Pubkey>,
    pub lottery_state: LotteryState,
    pub round: u64,
    pub last_winner: Option<Pubkey>,
    pub last_prize: u64,
    pub bump: u8,
}

/// Outcome of a successful draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Payout {
    pub winner: Pubkey,
    pub ticket_index: u64,
    pub prize: u64,
    pub entrant_count: u64,
}

impl Lottery {
    pub fn new(admin: Pubkey, vault: Pubkey, ticket_price: u64, bump: u8) -> Result<Self> {
        require!(ticket_price > 0, LotteryError::TicketPriceTooLow);

        Ok(Self {
            admin,
            vault,
            ticket_price,
            pot: 0,
            entrants: Vec::with_capacity(MAX_ENTRANTS),
            lottery_state: LotteryState::Open,
            round: 0,
            last_winner: None,
            last_prize: 0,
            bump,
        })
    }

    /// True while the round accepts entries.
    pub fn drawing(&self) -> bool {
        self.lottery_state == LotteryState::Open
    }

    pub fn has_entered(&self, identity: &Pubkey) -> bool {
        self.entrants.contains(identity)
    }

    /// Sells one ticket to `caller` for `paid_amount` lamports.
    ///
    /// Every check runs before the transfer, and state is only touched once
    /// the transfer has gone through. Returns the new entrant's ticket index.
    pub fn enter<T: ValueTransfer>(
        &mut self,
        caller: Pubkey,
        paid_amount: u64,
        bank: &mut T,
    ) -> Result<u64> {
        require!(self.drawing(), LotteryError::LotteryNotOpen);
        require!(!self.has_entered(&caller), LotteryError::AlreadyEntered);
        require!(
            paid_amount > 0 && bank.balance_of(&caller) >= paid_amount,
            LotteryError::InsufficientFunds
        );
        require!(
            paid_amount == self.ticket_price,
            LotteryError::WrongAmount
        );
        require!(
            self.entrants.len() < MAX_ENTRANTS,
            LotteryError::LotteryFull
        );

        let pot = self
            .pot
            .checked_add(paid_amount)
            .ok_or(LotteryError::Overflow)?;

        bank.collect(&caller, paid_amount)?;

        let ticket_index = self.entrants.len() as u64;
        self.entrants.push(caller);
        self.pot = pot;

        Ok(ticket_index)
    }

    /// Draws a winner, pays out the whole pot and settles the round.
    pub fn decide_winner<S: WinnerSelector, T: ValueTransfer>(
        &mut self,
        caller: Pubkey,
        selector: &mut S,
        bank: &mut T,
    ) -> Result<Payout> {
        require_keys_eq!(caller, self.admin, LotteryError::NotAdmin);
        require!(self.drawing(), LotteryError::LotteryNotOpen);
        require!(!self.entrants.is_empty(), LotteryError::NoEntrants);

        let winner = selector.select_winner(&self.entrants)?;
        let ticket_index = self
            .entrants
            .iter()
            .position(|entrant| *entrant == winner)
            .ok_or(LotteryError::InvalidWinner)? as u64;

        let prize = self.pot;
        bank.pay_out(&winner, prize)?;

        let entrant_count = self.entrants.len() as u64;
        self.entrants.clear();
        self.pot = 0;
        self.lottery_state = LotteryState::Settled;
        self.last_winner = Some(winner);
        self.last_prize = prize;

        Ok(Payout {
            winner,
            ticket_index,
            prize,
            entrant_count,
        })
    }

    /// Starts the next round after a draw. Admin, price and vault carry over.
    pub fn reopen(&mut self, caller: Pubkey) -> Result<u64> {
        require_keys_eq!(caller, self.admin, LotteryError::NotAdmin);
        require!(
            self.lottery_state == LotteryState::Settled,
            LotteryError::LotteryNotSettled
        );

        self.round = self.round.checked_add(1).ok_or(LotteryError::Overflow)?;
        self.lottery_state = LotteryState::Open;

        Ok(self.round)
    }
}
