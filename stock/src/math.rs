pub use normal::*;
pub use random::*;

mod normal;
mod random;
