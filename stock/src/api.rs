use serde::{Deserialize, Serialize};

use crate::animals::AnimalError;
use crate::pasturing::{Pasturing, PasturingError};
use crate::raising::{Raising, RaisingError};

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum Event {
    Raising(Vec<Raising>),
    Pasturing(Vec<Pasturing>),
}

impl From<Vec<Raising>> for Event {
    fn from(events: Vec<Raising>) -> Self {
        Self::Raising(events)
    }
}

impl From<Vec<Pasturing>> for Event {
    fn from(events: Vec<Pasturing>) -> Self {
        Self::Pasturing(events)
    }
}

impl Event {
    pub fn encode_batch(events: &[Event]) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(events, config)
    }

    #[inline]
    pub fn decode_batch(data: &[u8]) -> Result<Vec<Event>, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (events, _) = bincode::decode_from_slice(data, config)?;
        Ok(events)
    }
}

/// Collects domain events of one operation in the order they occurred.
#[macro_export]
macro_rules! occur {
    ($($event:expr),* $(,)?) => {
        vec![$($crate::api::Event::from($event)),*]
    };
}

#[derive(Debug, Serialize, Deserialize)]
pub enum StockError {
    Raising(RaisingError),
    Pasturing(PasturingError),
    Animal(AnimalError),
}

impl From<RaisingError> for StockError {
    fn from(error: RaisingError) -> Self {
        Self::Raising(error)
    }
}

impl From<PasturingError> for StockError {
    fn from(error: PasturingError) -> Self {
        Self::Pasturing(error)
    }
}

impl From<AnimalError> for StockError {
    fn from(error: AnimalError) -> Self {
        Self::Animal(error)
    }
}
