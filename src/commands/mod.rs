//! Command implementations

mod init;
mod run;
mod validate;

pub use init::init;
pub use run::run;
pub use validate::validate;
