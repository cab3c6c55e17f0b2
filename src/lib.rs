//! Register file of the LR35902 (SM83) CPU used by the Game Boy.

pub mod error;
pub mod logging;
pub mod lr35902;

pub use error::RegisterError;
pub use lr35902::model::{BootState, Model};
pub use lr35902::registers::{Flags, Registers};
pub use lr35902::sm83::{Register, Register16};
