/// Seed prefix for the lottery PDA: ["lottery", admin]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Seed prefix for the vault PDA: ["vault", lottery]
pub const VAULT_SEED: &[u8] = b"vault";

/// Every entrant account is passed to `decide_winner`, so the cap is bound
/// by how many accounts fit in a single transaction.
pub const MAX_ENTRANTS: usize = 20;

pub const SLOT_HASHES_SYSVAR: &str = "SysvarS1otHashes111111111111111111111111111";
