//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler

pub mod generate;

pub use generate::{build_rng, execute_generate, seed_bits, GenerateOptions};
