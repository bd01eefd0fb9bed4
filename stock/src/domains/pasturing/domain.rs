use serde::{Deserialize, Serialize};

use crate::collections::Sequence;

pub const DIG_CLASSES: usize = 6;

/// Digestibility at the centre of each herbage class, best first.
pub const CLASS_DIG: [f64; DIG_CLASSES] = [0.8, 0.7, 0.6, 0.5, 0.4, 0.3];

pub const UNRIPE: usize = 0;
pub const RIPE: usize = 1;

#[derive(Default)]
pub struct PasturingDomain {
    pub paddocks_id: Sequence,
    pub paddocks: Vec<Paddock>,
    pub forages_id: Sequence,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct PaddockId(pub usize);

pub struct Paddock {
    pub id: PaddockId,
    pub name: String,
    /// ha
    pub area: f64,
    /// degrees
    pub slope: f64,
    pub steepness: f64,
    pub waterlog: f64,
    pub forages: Vec<Forage>,
    pub supplement: SupplementRation,
    pub feed_supplement_first: bool,
    pub summed_pot_intake: f64,
    /// kg
    pub supplement_removal: f64,
    pub totals: GrazingInputs,
}

impl Paddock {
    pub fn new(id: PaddockId, name: &str, area: f64, slope: f64, waterlog: f64) -> Self {
        Self {
            id,
            name: name.to_lowercase(),
            area,
            slope,
            steepness: steepness(slope),
            waterlog,
            forages: vec![],
            supplement: SupplementRation::default(),
            feed_supplement_first: false,
            summed_pot_intake: 0.0,
            supplement_removal: 0.0,
            totals: GrazingInputs::default(),
        }
    }
}

/// Steepness code in 1..2 derived from slope in degrees.
pub fn steepness(slope: f64) -> f64 {
    1.0 + slope.to_radians().tan().max(0.0).sqrt().min(1.0)
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct ForageId(pub usize);

pub struct Forage {
    pub id: ForageId,
    pub name: String,
    pub available: GrazingInputs,
    pub removal: ForageRemoval,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Herbage {
    /// kg/ha
    pub biomass: f64,
    pub digestibility: f64,
    /// kg/kg DM
    pub crude_protein: f64,
    pub degradability: f64,
}

/// Forage on offer, by digestibility class and by seed ripeness of each
/// contributing forage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrazingInputs {
    pub herbage: [Herbage; DIG_CLASSES],
    pub seeds: Vec<[Herbage; 2]>,
}

/// kg removed from a forage since the beginning of the time step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForageRemoval {
    pub herbage: [f64; DIG_CLASSES],
    pub seeds: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplement {
    pub name: String,
    pub digestibility: f64,
    pub crude_protein: f64,
    pub degradability: f64,
}

impl Default for Supplement {
    fn default() -> Self {
        Self {
            name: String::new(),
            digestibility: 0.8,
            crude_protein: 0.12,
            degradability: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RationItem {
    pub supplement: Supplement,
    /// kg
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplementRation {
    pub items: Vec<RationItem>,
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum Pasturing {
    PaddockCreated {
        id: PaddockId,
        name: String,
        area: f64,
    },
    ForageCreated {
        paddock: PaddockId,
        forage: ForageId,
    },
    ForageUpdated {
        forage: ForageId,
        biomass: f64,
    },
    SupplementPlaced {
        paddock: PaddockId,
        amount: f64,
    },
    TimeStepStarted {
        paddocks: usize,
    },
    PaddockGrazed {
        paddock: PaddockId,
        steps: Vec<f64>,
        iterations: usize,
        rdp_factor: f64,
    },
    ForageRemoved {
        paddock: PaddockId,
        forage: ForageId,
        herbage: f64,
        seeds: f64,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub enum PasturingError {
    PaddockNotFound { name: String },
    PaddockIdNotFound { id: PaddockId },
    PaddockIndexNotFound { index: usize },
    PaddockAlreadyExists { name: String },
    ForageNotFound { id: ForageId },
    UnknownMassUnit { units: String },
}
