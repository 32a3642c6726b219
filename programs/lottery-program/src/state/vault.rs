use anchor_lang::prelude::*;

// 8 discriminator, 32 lottery, 1 bump
pub const VAULT_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned PDA holding the lamports paid for tickets.
#[account]
pub struct Vault {
    pub lottery: Pubkey,
    pub bump: u8,
}
