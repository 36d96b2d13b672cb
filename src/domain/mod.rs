pub mod farmer;
pub mod transaction;

pub use farmer::*;
pub use transaction::*;
