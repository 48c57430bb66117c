mod clock;
#[cfg(feature = "overlay")]
mod frame_rate;
mod simulation;

pub use clock::*;
#[cfg(feature = "overlay")]
pub use frame_rate::*;
pub use simulation::*;

#[cfg(test)]
#[cfg(feature = "overlay")]
mod frame_rate_tests;
