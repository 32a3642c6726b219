use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    Overflow,
    #[msg("can only buy one ticket")]
    AlreadyEntered,
    #[msg("balance too low")]
    InsufficientFunds,
    #[msg("have to pay the exact amount for the ticket")]
    WrongAmount,
    #[msg("only admin can decide the winner")]
    NotAdmin,
    #[msg("Ticket price must be greater than zero")]
    TicketPriceTooLow,
    #[msg("Lottery is not accepting entries")]
    LotteryNotOpen,
    #[msg("Lottery has not been settled yet")]
    LotteryNotSettled,
    #[msg("All available tickets have been sold")]
    LotteryFull,
    #[msg("Lottery has no entrants")]
    NoEntrants,
    #[msg("Selected winner is not an entrant")]
    InvalidWinner,
    #[msg("Winner account was not supplied")]
    WinnerAccountMissing,
    #[msg("Payer does not match the signing account")]
    PayerMismatch,
    #[msg("Vault does not belong to this lottery")]
    InvalidVault,
    #[msg("Vault transfer failed")]
    TransferFailed,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
}
