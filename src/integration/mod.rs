mod integrators;

pub use integrators::*;
