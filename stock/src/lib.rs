use datamap::Storage;
pub use domains::*;

use crate::animals::{AnimalGroup, Ruminant, Weather};
use crate::config::StockConfig;
pub use crate::data::{DataError, Knowledge};
use crate::math::Random;
use crate::pasturing::PasturingDomain;
use crate::raising::RaisingDomain;

mod actions;
pub mod animals;
pub mod api;
pub mod collections;
pub mod config;
mod data;
mod domains;
mod drafting;
mod dynamics;
mod inspection;
mod instantiation;
pub mod math;
mod staging;

/// Livestock of one simulation: the paddocks, the groups grazing them and
/// the knowledge both are built from.
pub struct Stock<G: AnimalGroup = Ruminant> {
    pub known: Knowledge,
    pub config: StockConfig,
    pub pasturing: PasturingDomain,
    pub raising: RaisingDomain<G>,
    pub weather: Weather,
    random: Random,
    storage: Storage,
}

impl<G: AnimalGroup> Stock<G> {
    pub fn new(storage: Storage) -> Self {
        Self::with_config(storage, StockConfig::default())
    }

    pub fn with_config(storage: Storage, config: StockConfig) -> Self {
        Self {
            known: Knowledge::default(),
            random: Random::with_seed(config.seed),
            config,
            pasturing: PasturingDomain::default(),
            raising: RaisingDomain::default(),
            weather: Weather::default(),
            storage,
        }
    }

    /// Weather of the coming day, handed to every group while staging.
    pub fn set_weather(&mut self, weather: Weather) {
        self.weather = weather;
    }
}
