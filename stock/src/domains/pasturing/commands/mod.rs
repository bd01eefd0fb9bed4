pub use begin_time_step::*;
pub use create_forage::*;
pub use create_paddock::*;
pub use feed_supplement::*;
pub use update_forage::*;

mod begin_time_step;
mod create_forage;
mod create_paddock;
mod feed_supplement;
mod update_forage;
