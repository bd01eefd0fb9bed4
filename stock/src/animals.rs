pub use genotype::*;
pub use group::*;
pub use ruminant::*;

mod genotype;
mod group;
mod ruminant;
