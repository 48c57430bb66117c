mod vector_2d;
mod projectile_state;
mod modes;
mod segment_count;

pub use vector_2d::*;
pub use projectile_state::*;
pub use modes::*;
pub use segment_count::*;

#[cfg(test)]
mod models_tests;
