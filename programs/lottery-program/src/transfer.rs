use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::LotteryError;

/// Moves value between participants and the lottery's holding balance.
///
/// Implementations must either complete the whole transfer or return an
/// error; the lottery only mutates its own state after a transfer succeeds.
pub trait ValueTransfer {
    /// Lamports currently available to `owner`.
    fn balance_of(&self, owner: &Pubkey) -> u64;

    /// Moves `amount` from `payer` into the holding balance.
    fn collect(&mut self, payer: &Pubkey, amount: u64) -> Result<()>;

    /// Moves `amount` out of the holding balance to `recipient`.
    fn pay_out(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}

/// On-chain ledger backed by the vault PDA.
///
/// Tickets are paid with a System Program transfer signed by `payer`. Payouts
/// debit the vault directly, which only works because the vault is owned by
/// this program. The recipient must be the payer or one of `recipients`, and
/// writable. `system_program` is only needed to collect.
pub struct VaultLedger<'a, 'info> {
    pub payer: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub system_program: Option<AccountInfo<'info>>,
    pub recipients: &'a [AccountInfo<'info>],
}

impl<'a, 'info> VaultLedger<'a, 'info> {
    fn account(&self, key: &Pubkey) -> Option<&AccountInfo<'info>> {
        if self.payer.key == key {
            return Some(&self.payer);
        }
        self.recipients.iter().find(|account| account.key == key)
    }
}

impl<'a, 'info> ValueTransfer for VaultLedger<'a, 'info> {
    fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.account(owner)
            .map(|account| account.lamports())
            .unwrap_or(0)
    }

    fn collect(&mut self, payer: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*payer, self.payer.key(), LotteryError::PayerMismatch);
        let program = self
            .system_program
            .clone()
            .ok_or(LotteryError::TransferFailed)?;

        let pre_transfer_balance = self.vault.lamports();

        system_program::transfer(
            CpiContext::new(
                program,
                system_program::Transfer {
                    from: self.payer.clone(),
                    to: self.vault.clone(),
                },
            ),
            amount,
        )?;

        let post_transfer_balance = self.vault.lamports();
        require!(
            post_transfer_balance
                == pre_transfer_balance
                    .checked_add(amount)
                    .ok_or(LotteryError::Overflow)?,
            LotteryError::TransferFailed
        );

        Ok(())
    }

    fn pay_out(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        let recipient = self
            .account(recipient)
            .ok_or(LotteryError::WinnerAccountMissing)?;

        self.vault.sub_lamports(amount)?;
        recipient.add_lamports(amount)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    struct TestAccount {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl TestAccount {
        fn new(n: u8, lamports: u64) -> Self {
            Self {
                key: key(n),
                owner: crate::ID,
                lamports,
                data: Vec::new(),
            }
        }

        fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                true,
                &mut self.lamports,
                self.data.as_mut_slice(),
                &self.owner,
                false,
                0,
            )
        }
    }

    fn err(code: LotteryError) -> anchor_lang::error::Error {
        code.into()
    }

    #[test]
    fn test_pay_out_moves_amount_from_vault_to_winner() {
        let mut admin = TestAccount::new(1, 100);
        let mut vault = TestAccount::new(2, 1_000);
        let mut winner = TestAccount::new(3, 5);
        let recipients = [winner.info()];

        let mut ledger = VaultLedger {
            payer: admin.info(),
            vault: vault.info(),
            system_program: None,
            recipients: &recipients,
        };
        ledger.pay_out(&key(3), 10).unwrap();

        assert_eq!(ledger.vault.lamports(), 990);
        assert_eq!(recipients[0].lamports(), 15);
        assert_eq!(ledger.payer.lamports(), 100);
    }

    #[test]
    fn test_pay_out_can_reach_the_payer() {
        let mut admin = TestAccount::new(1, 100);
        let mut vault = TestAccount::new(2, 1_000);

        let mut ledger = VaultLedger {
            payer: admin.info(),
            vault: vault.info(),
            system_program: None,
            recipients: &[],
        };
        ledger.pay_out(&key(1), 40).unwrap();

        assert_eq!(ledger.vault.lamports(), 960);
        assert_eq!(ledger.payer.lamports(), 140);
    }

    #[test]
    fn test_pay_out_to_unsupplied_winner_is_rejected() {
        let mut admin = TestAccount::new(1, 100);
        let mut vault = TestAccount::new(2, 1_000);
        let mut other = TestAccount::new(3, 5);
        let recipients = [other.info()];

        let mut ledger = VaultLedger {
            payer: admin.info(),
            vault: vault.info(),
            system_program: None,
            recipients: &recipients,
        };
        let result = ledger.pay_out(&key(9), 10);

        assert_eq!(result.unwrap_err(), err(LotteryError::WinnerAccountMissing));
        assert_eq!(ledger.vault.lamports(), 1_000);
        assert_eq!(recipients[0].lamports(), 5);
        assert_eq!(ledger.payer.lamports(), 100);
    }

    #[test]
    fn test_collect_from_someone_other_than_the_signer_is_rejected() {
        let mut signer = TestAccount::new(1, 100);
        let mut vault = TestAccount::new(2, 1_000);

        let mut ledger = VaultLedger {
            payer: signer.info(),
            vault: vault.info(),
            system_program: None,
            recipients: &[],
        };
        let result = ledger.collect(&key(7), 10);

        assert_eq!(result.unwrap_err(), err(LotteryError::PayerMismatch));
        assert_eq!(ledger.payer.lamports(), 100);
        assert_eq!(ledger.vault.lamports(), 1_000);
    }

    #[test]
    fn test_collect_without_system_program_fails() {
        let mut signer = TestAccount::new(1, 100);
        let mut vault = TestAccount::new(2, 1_000);

        let mut ledger = VaultLedger {
            payer: signer.info(),
            vault: vault.info(),
            system_program: None,
            recipients: &[],
        };
        let result = ledger.collect(&key(1), 10);

        assert_eq!(result.unwrap_err(), err(LotteryError::TransferFailed));
        assert_eq!(ledger.payer.lamports(), 100);
        assert_eq!(ledger.vault.lamports(), 1_000);
    }

    #[test]
    fn test_balance_of_known_and_unknown_accounts() {
        let mut signer = TestAccount::new(1, 100);
        let mut vault = TestAccount::new(2, 1_000);
        let mut entrant = TestAccount::new(3, 25);
        let recipients = [entrant.info()];

        let ledger = VaultLedger {
            payer: signer.info(),
            vault: vault.info(),
            system_program: None,
            recipients: &recipients,
        };

        assert_eq!(ledger.balance_of(&key(1)), 100);
        assert_eq!(ledger.balance_of(&key(3)), 25);
        assert_eq!(ledger.balance_of(&key(9)), 0);
    }
}
