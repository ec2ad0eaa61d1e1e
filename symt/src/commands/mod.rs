//! Command modules for the symt CLI.

pub mod check;
pub mod codec;

pub use check::CheckArgs;
pub use codec::{run_decode, run_encode, run_validate, CodecArgs};
