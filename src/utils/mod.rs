mod constants;
mod constants_config;
mod errors;

pub use constants::*;
pub use constants_config::*;
pub use errors::*;

#[cfg(test)]
mod constants_config_tests;
