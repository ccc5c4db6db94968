use anchor_lang::prelude::*;

use crate::error::RaffleError;

// 8 discriminator + 32 admin_key
pub const ADMIN_SETTINGS_ACCOUNT_SIZE: usize = 8 + 32;

/// Singleton holding the key allowed to create raffles.
///
/// Only the program upgrade authority may write it, never the current admin,
/// so a lost or leaked admin key can always be replaced.
#[account]
#[derive(Debug)]
pub struct AdminSettings {
    pub admin_key: Pubkey,
}

impl AdminSettings {
    /// A freshly allocated settings account holds the default key.
    pub fn is_initialized(&self) -> bool {
        self.admin_key != Pubkey::default()
    }

    pub fn init(&mut self, admin_key: Pubkey) -> Result<()> {
        require!(!self.is_initialized(), RaffleError::AlreadyInitialized);
        self.set(admin_key)
    }

    pub fn set(&mut self, admin_key: Pubkey) -> Result<()> {
        require_keys_neq!(admin_key, Pubkey::default(), RaffleError::InvalidAdmin);
        self.admin_key = admin_key;
        Ok(())
    }

    /// The deploying authority is the upgrade authority recorded in the
    /// program's `ProgramData`. A program deployed as immutable has none.
    pub fn check_deploying_authority(upgrade_authority: Option<Pubkey>, signer: &Pubkey) -> Result<()> {
        require!(
            upgrade_authority.as_ref() == Some(signer),
            RaffleError::Unauthorized
        );
        Ok(())
    }

    /// Reads settings from raw account parts, reporting a missing or never
    /// assigned record as `NotInitialized`.
    pub fn load(owner: &Pubkey, data: &[u8]) -> Result<Self> {
        require!(
            owner == &crate::ID && data.len() >= ADMIN_SETTINGS_ACCOUNT_SIZE,
            RaffleError::NotInitialized
        );
        let settings = Self::try_deserialize(&mut &data[..])?;
        require!(settings.is_initialized(), RaffleError::NotInitialized);
        Ok(settings)
    }

    pub fn store(&self, mut data: &mut [u8]) -> Result<()> {
        self.try_serialize(&mut data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(admin_key: Pubkey) -> Vec<u8> {
        let mut data = Vec::with_capacity(ADMIN_SETTINGS_ACCOUNT_SIZE);
        AdminSettings { admin_key }.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn init_then_set_overwrites_admin() {
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let mut settings = AdminSettings { admin_key: Pubkey::default() };

        settings.init(first).unwrap();
        assert_eq!(settings.admin_key, first);

        assert_eq!(settings.init(second).unwrap_err(), RaffleError::AlreadyInitialized.into());
        assert_eq!(settings.admin_key, first);

        settings.set(second).unwrap();
        assert_eq!(settings.admin_key, second);
    }

    #[test]
    fn default_key_is_not_an_admin() {
        let mut settings = AdminSettings { admin_key: Pubkey::default() };
        assert_eq!(
            settings.init(Pubkey::default()).unwrap_err(),
            RaffleError::InvalidAdmin.into()
        );
        assert!(!settings.is_initialized());
    }

    #[test]
    fn only_upgrade_authority_may_manage_admin() {
        let deployer = Pubkey::new_unique();
        let admin = Pubkey::new_unique();

        assert!(AdminSettings::check_deploying_authority(Some(deployer), &deployer).is_ok());
        assert_eq!(
            AdminSettings::check_deploying_authority(Some(deployer), &admin).unwrap_err(),
            RaffleError::Unauthorized.into()
        );
        assert_eq!(
            AdminSettings::check_deploying_authority(None, &deployer).unwrap_err(),
            RaffleError::Unauthorized.into()
        );
    }

    #[test]
    fn load_requires_initialized_record() {
        let admin = Pubkey::new_unique();

        assert_eq!(
            AdminSettings::load(&crate::ID, &[]).unwrap_err(),
            RaffleError::NotInitialized.into()
        );
        assert_eq!(
            AdminSettings::load(&Pubkey::new_unique(), &stored(admin)).unwrap_err(),
            RaffleError::NotInitialized.into()
        );
        assert_eq!(
            AdminSettings::load(&crate::ID, &stored(Pubkey::default())).unwrap_err(),
            RaffleError::NotInitialized.into()
        );
        assert_eq!(AdminSettings::load(&crate::ID, &stored(admin)).unwrap().admin_key, admin);
    }

    #[test]
    fn store_round_trips_through_load() {
        let mut data = stored(Pubkey::new_unique());
        let replacement = Pubkey::new_unique();

        let mut settings = AdminSettings::load(&crate::ID, &data).unwrap();
        settings.set(replacement).unwrap();
        settings.store(&mut data).unwrap();

        assert_eq!(AdminSettings::load(&crate::ID, &data).unwrap().admin_key, replacement);
    }
}
