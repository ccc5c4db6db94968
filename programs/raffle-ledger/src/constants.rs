/// Seed of the singleton admin settings PDA.
pub const ADMIN_SEED: &[u8] = b"admin";

/// Seed of a raffle PDA, followed by the entrants account key.
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Seed of a raffle's proceeds escrow, followed by the raffle key.
pub const PROCEEDS_SEED: &[u8] = b"proceeds";

/// Anchor account discriminator length.
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Size of one entrant slot (a raw pubkey).
pub const ENTRANT_SLOT_SIZE: usize = 32;
