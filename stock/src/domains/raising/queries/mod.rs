pub use get_slot::*;

mod get_slot;
