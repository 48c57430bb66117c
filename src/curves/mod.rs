mod parabola;
mod circle;
mod generators;

pub use parabola::*;
pub use circle::*;
pub use generators::*;
