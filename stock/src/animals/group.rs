use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::animals::Genotype;
use crate::collections::Shared;
use crate::math::Random;
use crate::pasturing::{GrazingInputs, SupplementRation, DIG_CLASSES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimalKind {
    Sheep,
    Cattle,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub enum ReproType {
    Male,
    Castrated,
    Empty,
    EarlyPregnant,
    LatePregnant,
}

impl ReproType {
    pub fn is_male(&self) -> bool {
        matches!(self, ReproType::Male | ReproType::Castrated)
    }

    pub fn parse(sex: &str) -> Option<ReproType> {
        match sex.to_lowercase().as_str() {
            "ram" | "bull" | "male" => Some(ReproType::Male),
            "wether" | "steer" | "castrate" | "castrated" => Some(ReproType::Castrated),
            "ewe" | "cow" | "heifer" | "female" | "empty" => Some(ReproType::Empty),
            _ => None,
        }
    }
}

/// Initialisation record of a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalInits {
    pub genotype: String,
    pub paddock: String,
    pub tag: i32,
    pub priority: i32,
    pub number: usize,
    pub sex: ReproType,
    pub age_days: f64,
    /// kg, zero means the normal weight for age
    pub weight: f64,
    /// kg, zero means the current base weight
    pub max_prev_weight: f64,
    pub fleece_weight: f64,
    pub mated_to: String,
    /// days, zero when not pregnant
    pub pregnant: u32,
    /// days, zero when not lactating
    pub lactating: u32,
    /// foetuses or suckling young per female
    pub no_young: usize,
    /// kg, zero means birth weight grown for the lactation length
    pub young_weight: f64,
    pub young_fleece_weight: f64,
}

impl Default for AnimalInits {
    fn default() -> Self {
        Self {
            genotype: String::new(),
            paddock: String::new(),
            tag: 0,
            priority: 0,
            number: 0,
            sex: ReproType::Empty,
            age_days: 0.0,
            weight: 0.0,
            max_prev_weight: 0.0,
            fleece_weight: 0.0,
            mated_to: String::new(),
            pregnant: 0,
            lactating: 0,
            no_young: 0,
            young_weight: 0.0,
            young_fleece_weight: 0.0,
        }
    }
}

/// Purchase record; a condition score of zero is not given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseInfo {
    pub inits: AnimalInits,
    pub condition_score: f64,
}

/// Genetic weight differentials applied while splitting a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Differences {
    pub base_weight: f64,
    pub standard_reference_weight: f64,
    pub fleece_weight: f64,
}

impl Differences {
    pub const NONE: Differences = Differences {
        base_weight: 0.0,
        standard_reference_weight: 0.0,
        fleece_weight: 0.0,
    };
}

/// Share of potential intake taken from each food source, 0..1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelativeIntake {
    pub herbage: [f64; DIG_CLASSES],
    /// one pair per forage, unripe and ripe
    pub seeds: Vec<[f64; 2]>,
    pub supplement: f64,
}

impl RelativeIntake {
    pub fn total(&self) -> f64 {
        self.herbage.iter().sum::<f64>()
            + self.seeds.iter().flatten().sum::<f64>()
            + self.supplement
    }
}

/// kg DM per head per day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeRates {
    pub herbage: [f64; DIG_CLASSES],
    pub seeds: Vec<[f64; 2]>,
    pub supplement: f64,
}

impl IntakeRates {
    pub fn herbage_total(&self) -> f64 {
        self.herbage.iter().sum()
    }

    pub fn seed(&self, forage: usize, ripeness: usize) -> f64 {
        self.seeds.get(forage).map(|pair| pair[ripeness]).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Excretion {
    pub faeces_events: f64,
    /// m^2 per event
    pub faeces_area: f64,
    /// m^3 per event
    pub faeces_volume: f64,
    /// kg
    pub faeces_organic: f64,
    pub faeces_nitrogen: f64,
    pub urine_events: f64,
    pub urine_area: f64,
    pub urine_volume: f64,
    pub urine_nitrogen: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// °C
    pub mean_temperature: f64,
    /// mm
    pub rainfall: f64,
    /// m/s
    pub wind_speed: f64,
}

impl Default for Weather {
    fn default() -> Self {
        Self {
            mean_temperature: 15.0,
            rainfall: 0.0,
            wind_speed: 2.0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub enum AnimalError {
    GenotypeNotFound {
        name: String,
    },
    InfeasiblePurchase {
        condition_score: f64,
        low: f64,
        high: f64,
    },
    InvalidInitialisation {
        reason: String,
    },
}

/// A cohort of animals sharing genotype, age class, reproductive state and
/// paddock. The unweaned offspring travel with their mothers as `young`.
pub trait AnimalGroup: Clone + Debug {
    /// Snapshot restored when protein insufficiency forces a second grazing pass.
    type State: Clone + Default + Debug;

    fn create(
        genotype: Shared<Genotype>,
        mated_to: Option<Shared<Genotype>>,
        inits: &AnimalInits,
    ) -> Result<Self, AnimalError>;

    fn genotype(&self) -> &Shared<Genotype>;
    fn kind(&self) -> AnimalKind;
    fn repro(&self) -> ReproType;
    fn age_days(&self) -> f64;

    fn no_animals(&self) -> usize;
    fn set_no_animals(&mut self, number: usize);
    fn male_no(&self) -> usize;
    fn female_no(&self) -> usize;
    fn no_offspring(&self) -> usize;
    /// Days since parturition, zero when dry.
    fn lactation(&self) -> u32;

    fn live_weight(&self) -> f64;
    fn base_weight(&self) -> f64;
    fn standard_reference_weight(&self) -> f64;
    fn fleece_weight(&self) -> f64;
    fn pot_intake(&self) -> f64;
    fn set_pot_intake(&mut self, value: f64);

    fn young(&self) -> Option<&Self>;
    fn young_mut(&mut self) -> Option<&mut Self>;

    fn set_paddock_conditions(&mut self, steepness: f64, waterlog: f64);
    fn set_weather(&mut self, weather: Weather);
    /// Composition of the candidate ration and the kg one animal of the group may eat.
    fn assign_ration(&mut self, ration: &SupplementRation, total: f64);
    fn set_herbage(&mut self, inputs: &GrazingInputs);

    /// Returns groups split off by demographic events.
    fn age(&mut self, days: u32, random: &mut Random) -> Vec<Self>;
    fn calculate_intake_limit(&mut self);
    fn reset_grazing(&mut self);
    fn store_state(&self) -> Self::State;
    fn revert_state(&mut self, state: &Self::State);
    fn relative_intake(&self, feed_supplement_first: bool) -> RelativeIntake;
    fn grazing(&mut self, delta: f64, first: bool, feed_supplement_first: bool) -> IntakeRates;
    fn nutrition(&mut self);
    /// 1.0 means rumen degradable protein does not limit intake.
    fn rdp_intake_factor(&self) -> f64;
    fn complete_growth(&mut self, rdp_factor: f64);

    fn similar(&self, other: &Self) -> bool;
    fn merge(&mut self, other: Self);
    fn split(&mut self, number: usize, by_age: bool, diffs: Differences, young_diffs: Differences)
        -> Self;
    /// Separates mothers by the sex of their young, female side returned.
    fn split_young(&mut self) -> Option<Self>;

    fn wean(&mut self, females: bool, males: bool) -> Vec<Self>;
    fn join(&mut self, mate: Shared<Genotype>, days: u32);
    /// Castrates male young, returns how many were castrated.
    fn castrate(&mut self) -> usize;
    fn dry_off(&mut self);
    /// kg of fleece removed from the whole group.
    fn shear(&mut self) -> f64;
    /// Males and females older than the given age.
    fn older_than(&self, age_days: f64) -> (usize, usize);

    fn excretion(&self) -> Excretion;

    /// Valid base weight range for a body condition at the group's age and sex.
    fn weight_range_for_condition(&self, condition: f64) -> (f64, f64);
    fn set_condition_at_weight(&mut self, condition: f64);
}
