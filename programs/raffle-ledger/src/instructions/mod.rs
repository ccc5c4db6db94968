pub mod buy;
pub mod close;
pub mod init_admin;
pub mod initialize;
pub mod set_admin;

pub use buy::*;
pub use close::*;
pub use init_admin::*;
pub use initialize::*;
pub use set_admin::*;
