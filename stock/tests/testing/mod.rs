#![allow(dead_code)]

use datamap::Storage;
use std::collections::HashMap;
use stock::animals::{
    AnimalError, AnimalGroup, AnimalInits, AnimalKind, Differences, Excretion, Genotype,
    IntakeRates, RelativeIntake, ReproType, Ruminant, Weather,
};
use stock::api::{Event, StockError};
use stock::collections::Shared;
use stock::math::Random;
use stock::pasturing::Pasturing::PaddockGrazed;
use stock::pasturing::{
    ForageId, GrazingInputs, Herbage, PaddockId, SupplementRation, CLASS_DIG, DIG_CLASSES,
};
use stock::Stock;

pub const KNOWLEDGE: &str = include_str!("../../../assets/knowledge.sql");

pub fn knowledge_storage() -> Storage {
    let storage = Storage::open_in_memory().unwrap();
    storage.execute_script(KNOWLEDGE).unwrap();
    storage
}

pub fn herbage(biomass: [f64; DIG_CLASSES], crude_protein: f64) -> GrazingInputs {
    let mut inputs = GrazingInputs::default();
    for class in 0..DIG_CLASSES {
        inputs.herbage[class] = Herbage {
            biomass: biomass[class],
            digestibility: CLASS_DIG[class],
            crude_protein,
            degradability: 0.8,
        };
    }
    inputs
}

pub fn ewes(number: usize, age_years: f64) -> AnimalInits {
    AnimalInits {
        genotype: "medium merino".into(),
        number,
        sex: ReproType::Empty,
        age_days: age_years * 365.0,
        fleece_weight: 2.0,
        ..AnimalInits::default()
    }
}

pub struct StockTestScenario<G: AnimalGroup = Ruminant> {
    pub stock: Stock<G>,
    forages: HashMap<String, ForageId>,
    events: Vec<Event>,
    result: Result<Vec<Event>, StockError>,
}

impl StockTestScenario<Ruminant> {
    pub fn new() -> Self {
        Self::with_groups()
    }

    pub fn given_flock(mut self, paddock: &str, inits: AnimalInits, tag: i32, priority: i32) -> Self {
        let inits = AnimalInits {
            paddock: paddock.to_string(),
            tag,
            priority,
            ..inits
        };
        self.stock.add_from_inits(&inits).unwrap();
        self
    }
}

impl<G: AnimalGroup> StockTestScenario<G> {
    pub fn with_groups() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut stock = Stock::new(knowledge_storage());
        stock.load_knowledge().unwrap();
        Self {
            stock,
            forages: HashMap::new(),
            events: vec![],
            result: Ok(vec![]),
        }
    }

    pub fn genotype(&self, name: &str) -> Shared<Genotype> {
        self.stock.find_genotype(name).unwrap()
    }

    pub fn paddock(&self, name: &str) -> PaddockId {
        self.stock.pasturing.find_paddock(name).unwrap().id
    }

    pub fn given_paddock(mut self, name: &str, area: f64) -> Self {
        self.stock.create_paddock(name, area, 0.0, 0.0).unwrap();
        self
    }

    /// Adds a forage with the given herbage to a paddock.
    pub fn given_pasture(
        mut self,
        paddock: &str,
        forage: &str,
        biomass: [f64; DIG_CLASSES],
        crude_protein: f64,
    ) -> Self {
        let (id, _) = self.stock.create_forage(paddock, forage).unwrap();
        self.stock
            .update_forage(id, herbage(biomass, crude_protein))
            .unwrap();
        self.forages.insert(forage.to_string(), id);
        self
    }

    pub fn given_group(mut self, group: G, paddock: &str, tag: i32, priority: i32) -> Self {
        self.stock.add(group, paddock, tag, priority).unwrap();
        self
    }

    pub fn when_dynamics(mut self) -> Self {
        self.stock.begin_time_step();
        self.events = self.stock.dynamics();
        self
    }

    pub fn when<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut Stock<G>) -> Result<Vec<Event>, StockError>,
    {
        self.result = action(&mut self.stock);
        self
    }

    /// Steps, iterations and protein factor reported for a paddock by the last dynamics.
    pub fn grazed(&self, paddock: &str) -> (Vec<f64>, usize, f64) {
        let id = self.paddock(paddock);
        for event in &self.events {
            if let Event::Pasturing(events) = event {
                for event in events {
                    if let PaddockGrazed {
                        paddock,
                        steps,
                        iterations,
                        rdp_factor,
                    } = event
                    {
                        if *paddock == id {
                            return (steps.clone(), *iterations, *rdp_factor);
                        }
                    }
                }
            }
        }
        panic!("paddock {} was not grazed", paddock)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events of the last successful action.
    pub fn action_events(&self) -> &[Event] {
        self.result.as_deref().unwrap_or(&[])
    }

    pub fn numbers(&self) -> Vec<usize> {
        self.stock
            .raising
            .slots
            .iter()
            .map(|slot| slot.group.no_animals())
            .collect()
    }

    pub fn occupancy(&self, paddock: &str) -> usize {
        self.stock.raising.occupants(self.paddock(paddock)).len()
    }

    pub fn then_numbers_should_be(self, expected: Vec<usize>) -> Self {
        assert_eq!(self.numbers(), expected);
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        if let Err(error) = &self.result {
            panic!("action failed, {:?}", error);
        }
        self
    }

    pub fn then_action_should_fail<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> StockError,
    {
        let actual = format!("{:?}", self.result.as_ref().err());
        let expected = format!("{:?}", Some(expected(&self)));
        assert_eq!(actual, expected);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedState {
    weight: f64,
    eaten: f64,
}

/// Group whose appetite and protein sufficiency are fixed by the test.
#[derive(Debug, Clone)]
pub struct ScriptedGroup {
    pub genotype: Shared<Genotype>,
    pub repro: ReproType,
    pub cohort: u32,
    pub number: usize,
    pub weight: f64,
    pub base_pot_intake: f64,
    pub pot_intake: f64,
    /// share of the appetite a class satisfies at 1000 kg/ha
    pub appetite: [f64; DIG_CLASSES],
    pub herbage: GrazingInputs,
    /// protein factors reported by successive nutrition calls, the last one repeats
    pub rdp_script: Vec<f64>,
    pub rdp_factor: f64,
    pub nutrition_calls: usize,
    pub age_calls: usize,
    /// kg per head since the first sub-step
    pub eaten: f64,
    pub grown_with: Option<f64>,
    pub spawn: Vec<ScriptedGroup>,
    pub young: Option<Box<ScriptedGroup>>,
    pub weather: Option<Weather>,
}

impl ScriptedGroup {
    pub fn new(genotype: Shared<Genotype>, number: usize, pot_intake: f64) -> Self {
        Self {
            genotype,
            repro: ReproType::Empty,
            cohort: 0,
            number,
            weight: 50.0,
            base_pot_intake: pot_intake,
            pot_intake,
            appetite: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            herbage: GrazingInputs::default(),
            rdp_script: vec![1.0],
            rdp_factor: 1.0,
            nutrition_calls: 0,
            age_calls: 0,
            eaten: 0.0,
            grown_with: None,
            spawn: vec![],
            young: None,
            weather: None,
        }
    }

    pub fn with_rdp(mut self, script: Vec<f64>) -> Self {
        self.rdp_script = script;
        self
    }

    pub fn with_cohort(mut self, cohort: u32) -> Self {
        self.cohort = cohort;
        self
    }
}

impl AnimalGroup for ScriptedGroup {
    type State = ScriptedState;

    fn create(
        genotype: Shared<Genotype>,
        _mated_to: Option<Shared<Genotype>>,
        inits: &AnimalInits,
    ) -> Result<Self, AnimalError> {
        let mut group = ScriptedGroup::new(genotype, inits.number, 1.0);
        group.repro = inits.sex;
        group.weight = inits.weight;
        Ok(group)
    }

    fn genotype(&self) -> &Shared<Genotype> {
        &self.genotype
    }

    fn kind(&self) -> AnimalKind {
        self.genotype.animal
    }

    fn repro(&self) -> ReproType {
        self.repro
    }

    fn age_days(&self) -> f64 {
        1000.0
    }

    fn no_animals(&self) -> usize {
        self.number
    }

    fn set_no_animals(&mut self, number: usize) {
        self.number = number;
    }

    fn male_no(&self) -> usize {
        if self.repro.is_male() {
            self.number
        } else {
            0
        }
    }

    fn female_no(&self) -> usize {
        self.number - self.male_no()
    }

    fn no_offspring(&self) -> usize {
        1
    }

    fn lactation(&self) -> u32 {
        0
    }

    fn live_weight(&self) -> f64 {
        self.weight
    }

    fn base_weight(&self) -> f64 {
        self.weight
    }

    fn standard_reference_weight(&self) -> f64 {
        self.genotype.srw
    }

    fn fleece_weight(&self) -> f64 {
        0.0
    }

    fn pot_intake(&self) -> f64 {
        self.pot_intake
    }

    fn set_pot_intake(&mut self, value: f64) {
        self.pot_intake = value;
    }

    fn young(&self) -> Option<&Self> {
        self.young.as_deref()
    }

    fn young_mut(&mut self) -> Option<&mut Self> {
        self.young.as_deref_mut()
    }

    fn set_paddock_conditions(&mut self, _steepness: f64, _waterlog: f64) {}

    fn set_weather(&mut self, weather: Weather) {
        self.weather = Some(weather);
    }

    fn assign_ration(&mut self, _ration: &SupplementRation, _total: f64) {}

    fn set_herbage(&mut self, inputs: &GrazingInputs) {
        self.herbage = inputs.clone();
    }

    fn age(&mut self, _days: u32, _random: &mut Random) -> Vec<Self> {
        self.age_calls += 1;
        std::mem::take(&mut self.spawn)
    }

    fn calculate_intake_limit(&mut self) {
        self.pot_intake = self.base_pot_intake;
    }

    fn reset_grazing(&mut self) {
        self.eaten = 0.0;
    }

    fn store_state(&self) -> Self::State {
        ScriptedState {
            weight: self.weight,
            eaten: self.eaten,
        }
    }

    fn revert_state(&mut self, state: &Self::State) {
        self.weight = state.weight;
        self.eaten = state.eaten;
    }

    fn relative_intake(&self, _feed_supplement_first: bool) -> RelativeIntake {
        let mut intake = RelativeIntake::default();
        for class in 0..DIG_CLASSES {
            let biomass = self.herbage.herbage[class].biomass;
            intake.herbage[class] = self.appetite[class] * (biomass / 1000.0).min(1.0);
        }
        intake
    }

    fn grazing(&mut self, delta: f64, first: bool, feed_supplement_first: bool) -> IntakeRates {
        if first {
            self.eaten = 0.0;
        }
        let relative = self.relative_intake(feed_supplement_first);
        let mut rates = IntakeRates::default();
        for class in 0..DIG_CLASSES {
            rates.herbage[class] = self.pot_intake * relative.herbage[class];
        }
        self.eaten += rates.herbage_total() * delta;
        rates
    }

    fn nutrition(&mut self) {
        let index = self.nutrition_calls.min(self.rdp_script.len().saturating_sub(1));
        self.rdp_factor = self.rdp_script.get(index).copied().unwrap_or(1.0);
        self.nutrition_calls += 1;
        self.weight += 1.0;
    }

    fn rdp_intake_factor(&self) -> f64 {
        self.rdp_factor
    }

    fn complete_growth(&mut self, rdp_factor: f64) {
        self.grown_with = Some(rdp_factor);
    }

    fn similar(&self, other: &Self) -> bool {
        self.genotype.same(&other.genotype)
            && self.repro == other.repro
            && self.cohort == other.cohort
    }

    fn merge(&mut self, other: Self) {
        let total = self.number + other.number;
        if total > 0 {
            self.weight = (self.weight * self.number as f64 + other.weight * other.number as f64)
                / total as f64;
        }
        self.number = total;
    }

    fn split(
        &mut self,
        number: usize,
        _by_age: bool,
        diffs: Differences,
        _young_diffs: Differences,
    ) -> Self {
        let number = number.min(self.number);
        let share = number as f64 / self.number.max(1) as f64;
        let mut other = self.clone();
        other.number = number;
        other.young = None;
        other.weight += (1.0 - share) * diffs.base_weight;
        self.weight -= share * diffs.base_weight;
        self.number -= number;
        other
    }

    fn split_young(&mut self) -> Option<Self> {
        None
    }

    fn wean(&mut self, _females: bool, _males: bool) -> Vec<Self> {
        self.young.take().map(|young| vec![*young]).unwrap_or_default()
    }

    fn join(&mut self, _mate: Shared<Genotype>, _days: u32) {}

    fn castrate(&mut self) -> usize {
        0
    }

    fn dry_off(&mut self) {}

    fn shear(&mut self) -> f64 {
        0.0
    }

    fn older_than(&self, _age_days: f64) -> (usize, usize) {
        (self.male_no(), self.female_no())
    }

    fn excretion(&self) -> Excretion {
        Excretion {
            faeces_events: self.number as f64 * 10.0,
            faeces_area: 0.01,
            faeces_volume: 0.001,
            faeces_organic: self.number as f64 * 0.3,
            faeces_nitrogen: self.number as f64 * 0.01,
            urine_events: self.number as f64 * 5.0,
            urine_area: 0.03,
            urine_volume: 0.002,
            urine_nitrogen: self.number as f64 * 0.02,
        }
    }

    fn weight_range_for_condition(&self, _condition: f64) -> (f64, f64) {
        (0.0, f64::MAX)
    }

    fn set_condition_at_weight(&mut self, _condition: f64) {}
}
