pub use get_paddock::*;

mod get_paddock;
