use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey::{MAX_SEEDS, MAX_SEED_LEN};

use crate::{
    constants::{ADMIN_SEED, PROCEEDS_SEED, RAFFLE_SEED},
    error::RaffleError,
};

/// Derives the program address for a record from its namespace seed and the
/// keys of its parent records, in order.
///
/// The result only depends on the inputs and the program id, so every record
/// can be located again without a lookup table.
pub fn derive_address(namespace: &[u8], parents: &[&Pubkey]) -> Result<(Pubkey, u8)> {
    require!(
        !namespace.is_empty() && namespace.len() <= MAX_SEED_LEN,
        RaffleError::InvalidNamespace
    );
    // One seed slot is taken by the bump.
    require!(parents.len() < MAX_SEEDS - 1, RaffleError::InvalidNamespace);

    let mut seeds: Vec<&[u8]> = Vec::with_capacity(parents.len() + 1);
    seeds.push(namespace);
    seeds.extend(parents.iter().map(|parent| parent.as_ref()));

    Pubkey::try_find_program_address(&seeds, &crate::ID)
        .ok_or_else(|| error!(RaffleError::InvalidNamespace))
}

/// PDA `["admin"]`
pub fn admin_settings_address() -> Result<(Pubkey, u8)> {
    derive_address(ADMIN_SEED, &[])
}

/// PDA `["raffle", entrants]`
pub fn raffle_address(entrants: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(RAFFLE_SEED, &[entrants])
}

/// PDA `["proceeds", raffle]`
pub fn proceeds_address(raffle: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(PROCEEDS_SEED, &[raffle])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let entrants = Pubkey::new_unique();
        assert_eq!(raffle_address(&entrants).unwrap(), raffle_address(&entrants).unwrap());
        assert_eq!(admin_settings_address().unwrap(), admin_settings_address().unwrap());
    }

    #[test]
    fn matches_runtime_derivation() {
        let entrants = Pubkey::new_unique();
        let expected = Pubkey::find_program_address(&[b"raffle", entrants.as_ref()], &crate::ID);
        assert_eq!(raffle_address(&entrants).unwrap(), expected);
    }

    #[test]
    fn distinct_inputs_give_distinct_addresses() {
        let parent = Pubkey::new_unique();
        let (raffle, _) = raffle_address(&parent).unwrap();
        let (proceeds, _) = proceeds_address(&parent).unwrap();
        let (other_raffle, _) = raffle_address(&Pubkey::new_unique()).unwrap();
        let (admin, _) = admin_settings_address().unwrap();

        assert_ne!(raffle, proceeds);
        assert_ne!(raffle, other_raffle);
        assert_ne!(raffle, admin);
    }

    #[test]
    fn rejects_bad_namespace() {
        let parent = Pubkey::new_unique();
        assert_eq!(
            derive_address(b"", &[&parent]).unwrap_err(),
            RaffleError::InvalidNamespace.into()
        );
        assert_eq!(
            derive_address(&[7u8; MAX_SEED_LEN + 1], &[]).unwrap_err(),
            RaffleError::InvalidNamespace.into()
        );
        let parents = vec![&parent; MAX_SEEDS];
        assert_eq!(
            derive_address(b"raffle", &parents).unwrap_err(),
            RaffleError::InvalidNamespace.into()
        );
    }
}
