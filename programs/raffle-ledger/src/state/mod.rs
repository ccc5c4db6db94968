pub use admin_settings::*;
pub use entrants::*;
pub use raffle::*;

pub mod admin_settings;
pub mod entrants;
pub mod raffle;
