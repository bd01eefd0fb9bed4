use log::debug;

use crate::animals::{
    AnimalError, AnimalGroup, AnimalInits, AnimalKind, Differences, Excretion, Genotype,
    IntakeRates, RelativeIntake, ReproType, Weather,
};
use crate::collections::Shared;
use crate::math::Random;
use crate::pasturing::{
    GrazingInputs, Herbage, Supplement, SupplementRation, CLASS_DIG, DIG_CLASSES,
};

/// Reference implementation of a group of sheep or cattle with a simple
/// energy and protein balance.
#[derive(Debug, Clone)]
pub struct Ruminant {
    genotype: Shared<Genotype>,
    mated_to: Option<Shared<Genotype>>,
    repro: ReproType,
    males: usize,
    females: usize,
    age_days: f64,
    /// female equivalent, carries genetic differences between groups
    srw: f64,
    base_weight: f64,
    max_prev_weight: f64,
    fleece_weight: f64,
    pregnant: u32,
    foetuses: usize,
    lactation: u32,
    offspring: usize,
    joining: u32,
    suckling: bool,
    young: Option<Box<Ruminant>>,
    steepness: f64,
    waterlog: f64,
    weather: Weather,
    ration: Supplement,
    ration_total: f64,
    herbage: GrazingInputs,
    pot_intake: f64,
    intake: Intake,
    me_intake: f64,
    rdp_intake: f64,
    rdp_required: f64,
    weight_change: f64,
}

/// Per head accumulators of one day of grazing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intake {
    pub herbage: [f64; DIG_CLASSES],
    pub seeds: Vec<[f64; 2]>,
    pub supplement: f64,
    /// MJ
    pub energy: f64,
    pub degradable_protein: f64,
    pub crude_protein: f64,
    pub indigestible: f64,
}

impl Intake {
    pub fn dry_matter(&self) -> f64 {
        self.herbage.iter().sum::<f64>()
            + self.seeds.iter().flatten().sum::<f64>()
            + self.supplement
    }

    fn eat(&mut self, amount: f64, digestibility: f64, crude_protein: f64, degradability: f64) {
        self.energy += amount * energy_density(digestibility);
        self.crude_protein += amount * crude_protein;
        self.degradable_protein += amount * crude_protein * degradability;
        self.indigestible += amount * (1.0 - digestibility);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuminantState {
    base_weight: f64,
    max_prev_weight: f64,
    fleece_weight: f64,
    intake: Intake,
    me_intake: f64,
    rdp_intake: f64,
    rdp_required: f64,
    weight_change: f64,
}

/// MJ of metabolisable energy per kg DM.
pub fn energy_density(digestibility: f64) -> f64 {
    (17.0 * digestibility - 2.0).max(0.0)
}

fn quality_factor(digestibility: f64) -> f64 {
    (1.0 - 1.7 * (CLASS_DIG[0] - digestibility).max(0.0)).clamp(0.0, 1.0)
}

const LACTATION_COST: f64 = 0.06;

impl Ruminant {
    fn blank(genotype: Shared<Genotype>, repro: ReproType) -> Self {
        Self {
            srw: genotype.srw,
            base_weight: genotype.birth_weight,
            max_prev_weight: genotype.birth_weight,
            genotype,
            mated_to: None,
            repro,
            males: 0,
            females: 0,
            age_days: 0.0,
            fleece_weight: 0.0,
            pregnant: 0,
            foetuses: 0,
            lactation: 0,
            offspring: 0,
            joining: 0,
            suckling: false,
            young: None,
            steepness: 1.0,
            waterlog: 0.0,
            weather: Weather::default(),
            ration: Supplement::default(),
            ration_total: 0.0,
            herbage: GrazingInputs::default(),
            pot_intake: 0.0,
            intake: Intake::default(),
            me_intake: 0.0,
            rdp_intake: 0.0,
            rdp_required: 0.0,
            weight_change: 0.0,
        }
    }

    fn offspring_of(mother: &Ruminant, males: usize, females: usize, age_days: f64) -> Self {
        let mut young = Ruminant::blank(mother.genotype.clone(), ReproType::Empty);
        young.males = males;
        young.females = females;
        young.update_young_repro(false);
        young.age_days = age_days;
        young.suckling = true;
        young.base_weight = mother.genotype.growth_curve(age_days, ReproType::Empty);
        young.max_prev_weight = young.base_weight;
        young.steepness = mother.steepness;
        young.waterlog = mother.waterlog;
        young.weather = mother.weather;
        young
    }

    fn update_young_repro(&mut self, castrated: bool) {
        self.repro = if self.males == 0 {
            ReproType::Empty
        } else if castrated {
            ReproType::Castrated
        } else {
            ReproType::Male
        };
    }

    pub fn intake(&self) -> &Intake {
        &self.intake
    }

    pub fn weight_change(&self) -> f64 {
        self.weight_change
    }

    pub fn pregnancy(&self) -> u32 {
        self.pregnant
    }

    pub fn foetuses(&self) -> usize {
        self.foetuses
    }

    pub fn mated_to(&self) -> Option<&Shared<Genotype>> {
        self.mated_to.as_ref()
    }

    pub fn max_normal_weight(&self) -> f64 {
        let srw = self.standard_reference_weight();
        self.genotype.max_normal_weight(srw, self.age_days)
    }

    /// Animals that never reached the growth curve have a lower normal weight.
    pub fn normal_weight(&self) -> f64 {
        let max_normal = self.max_normal_weight();
        if self.max_prev_weight < max_normal {
            let c3 = self.genotype.growth[2];
            c3 * max_normal + (1.0 - c3) * self.max_prev_weight
        } else {
            max_normal
        }
    }

    pub fn condition(&self) -> f64 {
        let normal = self.normal_weight();
        if normal > 0.0 {
            self.base_weight / normal
        } else {
            1.0
        }
    }

    fn conceptus_weight(&self) -> f64 {
        if self.pregnant == 0 || self.genotype.gestation_days == 0 {
            return 0.0;
        }
        let progress = self.pregnant as f64 / self.genotype.gestation_days as f64;
        self.foetuses as f64 * self.genotype.birth_weight * progress.powi(2)
    }

    fn apply_differences(&mut self, diffs: Differences, scale: f64) {
        self.base_weight += scale * diffs.base_weight;
        let scalar = self.standard_reference_weight() / self.srw;
        if scalar > 0.0 {
            self.srw += scale * diffs.standard_reference_weight / scalar;
        }
        self.fleece_weight = (self.fleece_weight + scale * diffs.fleece_weight).max(0.0);
    }

    fn give_birth(&mut self, random: &mut Random) -> Vec<Ruminant> {
        let weaners = self.wean(true, true);
        let number = self.no_animals() * self.foetuses.max(1);
        let males = random.round(number as f64 / 2.0).min(number);
        let young = Ruminant::offspring_of(self, males, number - males, 0.0);
        debug!(
            "{} {} gave birth to {} young",
            self.no_animals(),
            self.genotype.name,
            number
        );
        self.young = Some(Box::new(young));
        self.offspring = self.foetuses.max(1);
        self.foetuses = 0;
        self.pregnant = 0;
        self.lactation = 1;
        self.repro = ReproType::Empty;
        self.mated_to = None;
        weaners
    }

    fn conceive(&mut self, random: &mut Random) -> Vec<Ruminant> {
        let number = self.no_animals();
        let conceived = random
            .round(number as f64 * self.genotype.conception_rate)
            .min(number);
        if conceived == 0 {
            return vec![];
        }
        let mut split_off = vec![];
        if conceived < number {
            let mut empty = self.split(number - conceived, false, Differences::NONE, Differences::NONE);
            empty.mated_to = None;
            empty.joining = 0;
            split_off.push(empty);
        }
        self.pregnant = 1;
        self.joining = 0;
        self.repro = ReproType::EarlyPregnant;
        self.foetuses = random.round(self.genotype.litter_size).max(1);
        split_off
    }

    fn mortality(&mut self, days: u32, random: &mut Random) {
        let mut rate = if self.suckling {
            self.genotype.young_mortality
        } else {
            self.genotype.mortality
        };
        let condition = self.condition();
        if condition < 0.7 {
            rate += 0.01 * (0.7 - condition) / 0.7;
        }
        let number = self.no_animals();
        let deaths = random
            .round(number as f64 * (rate * days as f64).min(1.0))
            .min(number);
        if deaths > 0 {
            self.set_no_animals(number - deaths);
        }
    }
}

impl AnimalGroup for Ruminant {
    type State = RuminantState;

    fn create(
        genotype: Shared<Genotype>,
        mated_to: Option<Shared<Genotype>>,
        inits: &AnimalInits,
    ) -> Result<Self, AnimalError> {
        if inits.number == 0 {
            return Err(AnimalError::InvalidInitialisation {
                reason: "group must contain at least one animal".into(),
            });
        }
        if inits.sex.is_male() && (inits.pregnant > 0 || inits.lactating > 0) {
            return Err(AnimalError::InvalidInitialisation {
                reason: format!("{:?} can not be pregnant or lactating", inits.sex),
            });
        }
        let fleece = if genotype.has_wool() {
            inits.fleece_weight.max(0.0)
        } else {
            0.0
        };
        let mut group = Ruminant::blank(genotype, inits.sex);
        group.age_days = inits.age_days.max(0.0);
        group.fleece_weight = fleece;
        let max_normal = group.max_normal_weight();
        group.base_weight = if inits.weight > 0.0 {
            inits.weight - fleece
        } else {
            max_normal
        };
        if group.base_weight <= 0.0 {
            return Err(AnimalError::InvalidInitialisation {
                reason: format!("live weight {} is below fleece weight", inits.weight),
            });
        }
        group.max_prev_weight = if inits.max_prev_weight > 0.0 {
            inits.max_prev_weight.max(group.base_weight)
        } else {
            max_normal.max(group.base_weight)
        };
        if inits.sex.is_male() {
            group.males = inits.number;
        } else {
            group.females = inits.number;
            group.mated_to = mated_to;
        }

        if inits.pregnant > 0 && !inits.sex.is_male() {
            group.pregnant = inits.pregnant;
            group.repro = if inits.pregnant * 3 > group.genotype.gestation_days * 2 {
                ReproType::LatePregnant
            } else {
                ReproType::EarlyPregnant
            };
            let expected = if inits.lactating > 0 {
                inits.no_young.saturating_sub(1)
            } else {
                inits.no_young
            };
            group.foetuses = expected.clamp(1, 3);
        }
        if inits.lactating > 0 && !inits.sex.is_male() {
            group.lactation = inits.lactating;
            let suckling = if inits.pregnant > 0 {
                1
            } else {
                inits.no_young
            };
            if suckling > 0 {
                let number = inits.number * suckling;
                let males = number / 2;
                let mut young =
                    Ruminant::offspring_of(&group, males, number - males, inits.lactating as f64);
                if inits.young_weight > 0.0 {
                    young.base_weight = inits.young_weight;
                    young.max_prev_weight = young.max_prev_weight.max(inits.young_weight);
                }
                if group.genotype.has_wool() {
                    young.fleece_weight = inits.young_fleece_weight.max(0.0);
                }
                group.offspring = suckling;
                group.young = Some(Box::new(young));
            }
        }
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
        self.age_days
    }

    fn no_animals(&self) -> usize {
        self.males + self.females
    }

    /// Keeps the sex ratio and the number of young per mother.
    fn set_no_animals(&mut self, number: usize) {
        let total = self.no_animals();
        if self.females == 0 {
            self.males = number;
        } else if self.males == 0 {
            self.females = number;
        } else {
            let males = (number as f64 * self.males as f64 / total as f64).round() as usize;
            self.males = males.min(number);
            self.females = number - self.males;
        }
        if let Some(young) = self.young.as_mut() {
            let remaining = if total > 0 {
                (young.no_animals() as f64 * number as f64 / total as f64).round() as usize
            } else {
                0
            };
            young.set_no_animals(remaining);
        }
    }

    fn male_no(&self) -> usize {
        self.males
    }

    fn female_no(&self) -> usize {
        self.females
    }

    fn no_offspring(&self) -> usize {
        if self.young.is_some() {
            self.offspring
        } else {
            0
        }
    }

    fn lactation(&self) -> u32 {
        self.lactation
    }

    fn live_weight(&self) -> f64 {
        self.base_weight + self.fleece_weight + self.conceptus_weight()
    }

    fn base_weight(&self) -> f64 {
        self.base_weight
    }

    fn standard_reference_weight(&self) -> f64 {
        let scalar = match self.repro {
            ReproType::Male => self.genotype.male_srw_scalar,
            ReproType::Castrated => self.genotype.castrate_srw_scalar,
            _ => 1.0,
        };
        self.srw * scalar
    }

    fn fleece_weight(&self) -> f64 {
        self.fleece_weight
    }

    fn pot_intake(&self) -> f64 {
        self.pot_intake
    }

    fn set_pot_intake(&mut self, value: f64) {
        self.pot_intake = value.max(0.0);
    }

    fn young(&self) -> Option<&Self> {
        self.young.as_deref()
    }

    fn young_mut(&mut self) -> Option<&mut Self> {
        self.young.as_deref_mut()
    }

    fn set_paddock_conditions(&mut self, steepness: f64, waterlog: f64) {
        self.steepness = steepness.max(1.0);
        self.waterlog = waterlog.clamp(0.0, 1.0);
    }

    fn set_weather(&mut self, weather: Weather) {
        self.weather = weather;
        if let Some(young) = self.young.as_mut() {
            young.weather = weather;
        }
    }

    fn assign_ration(&mut self, ration: &SupplementRation, total: f64) {
        self.ration = ration.average();
        self.ration_total = total.max(0.0);
    }

    fn set_herbage(&mut self, inputs: &GrazingInputs) {
        self.herbage = inputs.clone();
    }

    fn age(&mut self, days: u32, random: &mut Random) -> Vec<Self> {
        let mut split_off = vec![];
        self.age_days += days as f64;
        self.mortality(days, random);
        if let Some(young) = self.young.as_mut() {
            young.age(days, random);
        }
        if self.young.as_ref().map(|young| young.no_animals()) == Some(0) {
            self.young = None;
            self.offspring = 0;
        }
        if self.lactation > 0 {
            self.lactation += days;
            if self.young.is_none() && self.lactation > self.genotype.lactation_days {
                self.lactation = 0;
            }
        }
        if self.pregnant > 0 {
            self.pregnant += days;
            if self.pregnant >= self.genotype.gestation_days {
                split_off.extend(self.give_birth(random));
            } else if self.pregnant * 3 > self.genotype.gestation_days * 2 {
                self.repro = ReproType::LatePregnant;
            }
        } else if self.joining > 0
            && self.mated_to.is_some()
            && self.repro == ReproType::Empty
            && self.age_days >= self.genotype.puberty_days
        {
            split_off.extend(self.conceive(random));
            if self.pregnant == 0 {
                self.joining = self.joining.saturating_sub(days);
                if self.joining == 0 {
                    self.mated_to = None;
                }
            }
        }
        split_off
    }

    fn calculate_intake_limit(&mut self) {
        let srw = self.standard_reference_weight();
        if srw <= 0.0 {
            self.pot_intake = 0.0;
            return;
        }
        let size = (self.normal_weight() / srw).min(1.0);
        let mut limit = self.genotype.intake_coef * srw * size * (1.7 - size);
        let condition = self.condition();
        if condition > 1.0 {
            limit *= (1.0 - 1.5 * (condition - 1.0)).max(0.1);
        }
        if self.lactation > 0 && self.young.is_some() {
            limit *= 1.3;
        }
        if self.suckling {
            let lactation_days = self.genotype.lactation_days.max(1) as f64;
            limit *= (2.0 * self.age_days / lactation_days).clamp(0.1, 1.0);
        }
        if self.weather.mean_temperature < 5.0 {
            limit *= 1.0 + 0.01 * (5.0 - self.weather.mean_temperature);
        }
        self.pot_intake = limit;
    }

    fn reset_grazing(&mut self) {
        self.intake = Intake::default();
        self.me_intake = 0.0;
        self.rdp_intake = 0.0;
        self.rdp_required = 0.0;
        self.weight_change = 0.0;
    }

    fn store_state(&self) -> Self::State {
        RuminantState {
            base_weight: self.base_weight,
            max_prev_weight: self.max_prev_weight,
            fleece_weight: self.fleece_weight,
            intake: self.intake.clone(),
            me_intake: self.me_intake,
            rdp_intake: self.rdp_intake,
            rdp_required: self.rdp_required,
            weight_change: self.weight_change,
        }
    }

    fn revert_state(&mut self, state: &Self::State) {
        self.base_weight = state.base_weight;
        self.max_prev_weight = state.max_prev_weight;
        self.fleece_weight = state.fleece_weight;
        self.intake = state.intake.clone();
        self.me_intake = state.me_intake;
        self.rdp_intake = state.rdp_intake;
        self.rdp_required = state.rdp_required;
        self.weight_change = state.weight_change;
    }

    /// Herbage fills the rumen from the most digestible class downward.
    fn relative_intake(&self, feed_supplement_first: bool) -> RelativeIntake {
        let mut intake = RelativeIntake {
            seeds: vec![[0.0; 2]; self.herbage.seeds.len()],
            ..RelativeIntake::default()
        };
        let supplement = if self.pot_intake > 0.0 {
            (self.ration_total / self.pot_intake).min(1.0)
        } else {
            0.0
        };
        let mut capacity = 1.0;
        if feed_supplement_first {
            intake.supplement = supplement;
            capacity -= supplement;
        }
        let terrain = (1.0 - 0.5 * self.waterlog) / self.steepness;
        let coef = self.genotype.grazing_coef;
        let graze = |herbage: &Herbage, capacity: &mut f64| -> f64 {
            if herbage.biomass <= 0.0 || *capacity <= 0.0 {
                return 0.0;
            }
            let available = 1.0 - (-coef * terrain * herbage.biomass / 1000.0).exp();
            let filled = *capacity * available;
            *capacity -= filled;
            filled * quality_factor(herbage.digestibility)
        };
        for class in 0..DIG_CLASSES {
            intake.herbage[class] = graze(&self.herbage.herbage[class], &mut capacity);
        }
        for (forage, seeds) in self.herbage.seeds.iter().enumerate() {
            for ripeness in 0..2 {
                intake.seeds[forage][ripeness] = graze(&seeds[ripeness], &mut capacity);
            }
        }
        if !feed_supplement_first {
            intake.supplement = supplement.min(capacity.max(0.0));
        }
        intake
    }

    fn grazing(&mut self, delta: f64, first: bool, feed_supplement_first: bool) -> IntakeRates {
        if first {
            self.intake = Intake::default();
        }
        let relative = self.relative_intake(feed_supplement_first);
        let mut rates = IntakeRates {
            seeds: vec![[0.0; 2]; relative.seeds.len()],
            ..IntakeRates::default()
        };
        if self.intake.seeds.len() < relative.seeds.len() {
            self.intake.seeds.resize(relative.seeds.len(), [0.0; 2]);
        }
        for class in 0..DIG_CLASSES {
            let herbage = self.herbage.herbage[class];
            rates.herbage[class] = self.pot_intake * relative.herbage[class];
            let eaten = rates.herbage[class] * delta;
            self.intake.herbage[class] += eaten;
            self.intake.eat(
                eaten,
                herbage.digestibility,
                herbage.crude_protein,
                herbage.degradability,
            );
        }
        for (forage, pair) in relative.seeds.iter().enumerate() {
            for ripeness in 0..2 {
                let seed = self.herbage.seeds[forage][ripeness];
                rates.seeds[forage][ripeness] = self.pot_intake * pair[ripeness];
                let eaten = rates.seeds[forage][ripeness] * delta;
                self.intake.seeds[forage][ripeness] += eaten;
                self.intake.eat(
                    eaten,
                    seed.digestibility,
                    seed.crude_protein,
                    seed.degradability,
                );
            }
        }
        rates.supplement = self.pot_intake * relative.supplement;
        let eaten = rates.supplement * delta;
        self.intake.supplement += eaten;
        self.intake.eat(
            eaten,
            self.ration.digestibility,
            self.ration.crude_protein,
            self.ration.degradability,
        );
        rates
    }

    fn nutrition(&mut self) {
        self.me_intake = self.intake.energy;
        self.rdp_intake = self.intake.degradable_protein;
        self.rdp_required = self.genotype.rdp_requirement * self.me_intake;
    }

    fn rdp_intake_factor(&self) -> f64 {
        if self.rdp_required <= 0.0 {
            1.0
        } else {
            (self.rdp_intake / self.rdp_required).min(1.0)
        }
    }

    fn complete_growth(&mut self, rdp_factor: f64) {
        let maintenance = self.genotype.maintenance_coef * self.live_weight().max(0.0).powf(0.75);
        let mut energy = self.me_intake * rdp_factor.clamp(0.0, 1.0);
        if self.suckling {
            let lactation_days = self.genotype.lactation_days.max(1) as f64;
            energy += 1.5 * maintenance * (1.0 - self.age_days / lactation_days).max(0.0);
        }
        let mut requirement = maintenance;
        if self.lactation > 0 && self.young.is_some() {
            requirement += LACTATION_COST * self.srw.powf(0.75) * self.offspring as f64;
        }
        self.weight_change = (energy - requirement) / self.genotype.gain_energy;
        self.base_weight = (self.base_weight + self.weight_change).max(0.5 * self.genotype.birth_weight);
        self.max_prev_weight = self.max_prev_weight.max(self.base_weight);
        if self.genotype.has_wool() && maintenance > 0.0 {
            self.fleece_weight += self.genotype.wool_growth * (energy / maintenance).clamp(0.0, 2.0);
        }
    }

    fn similar(&self, other: &Self) -> bool {
        let same_mate = match (&self.mated_to, &other.mated_to) {
            (Some(mate), Some(other)) => mate.same(other),
            (None, None) => true,
            _ => false,
        };
        let same_young = match (&self.young, &other.young) {
            (Some(young), Some(other)) => young.repro == other.repro,
            (None, None) => true,
            _ => false,
        };
        let age_class = |age: f64| {
            if age < 365.0 {
                (age.floor() as i64, false)
            } else {
                ((age / 30.0).floor().min(37.0) as i64, true)
            }
        };
        self.genotype.same(&other.genotype)
            && self.repro == other.repro
            && self.foetuses == other.foetuses
            && self.offspring == other.offspring
            && same_mate
            && self.joining == other.joining
            && self.pregnant == other.pregnant
            && (self.lactation as i64 - other.lactation as i64).abs() < 7
            && same_young
            && self.suckling == other.suckling
            && age_class(self.age_days) == age_class(other.age_days)
    }

    fn merge(&mut self, other: Self) {
        let mine = self.no_animals() as f64;
        let theirs = other.no_animals() as f64;
        let total = mine + theirs;
        if total > 0.0 {
            let mean = |a: f64, b: f64| (a * mine + b * theirs) / total;
            self.age_days = mean(self.age_days, other.age_days);
            self.srw = mean(self.srw, other.srw);
            self.base_weight = mean(self.base_weight, other.base_weight);
            self.max_prev_weight = mean(self.max_prev_weight, other.max_prev_weight);
            self.fleece_weight = mean(self.fleece_weight, other.fleece_weight);
            self.pot_intake = mean(self.pot_intake, other.pot_intake);
        }
        self.males += other.males;
        self.females += other.females;
        match (self.young.as_mut(), other.young) {
            (Some(young), Some(other)) => young.merge(*other),
            (None, Some(other)) => self.young = Some(other),
            _ => {}
        }
    }

    /// Moves `number` animals into a new group. The differences shift mean
    /// weights apart so that total mass is kept.
    fn split(
        &mut self,
        number: usize,
        _by_age: bool,
        diffs: Differences,
        young_diffs: Differences,
    ) -> Self {
        let total = self.no_animals();
        let number = number.min(total);
        let share = if total > 0 {
            number as f64 / total as f64
        } else {
            0.0
        };
        let males = if self.females == 0 {
            number
        } else if self.males == 0 {
            0
        } else {
            ((number as f64 * self.males as f64 / total as f64).round() as usize)
                .min(self.males)
                .max(number.saturating_sub(self.females))
        };
        let mut other = self.clone();
        other.males = males;
        other.females = number - males;
        self.males -= males;
        self.females -= number - males;
        other.young = match self.young.as_mut() {
            Some(young) => {
                let moved = (young.no_animals() as f64 * share).round() as usize;
                Some(Box::new(young.split(moved, false, young_diffs, Differences::NONE)))
            }
            None => None,
        };
        self.apply_differences(diffs, -share);
        other.apply_differences(diffs, 1.0 - share);
        other
    }

    fn split_young(&mut self) -> Option<Self> {
        let young = self.young.as_ref()?;
        if young.males == 0 || young.females == 0 {
            return None;
        }
        let mothers = self.females;
        let with_females = ((mothers as f64 * young.females as f64 / young.no_animals() as f64)
            .round() as usize)
            .min(mothers);
        if with_females == 0 || with_females == mothers {
            return None;
        }
        let castrated = young.repro == ReproType::Castrated;
        let mut other = self.clone();
        other.males = 0;
        other.females = with_females;
        self.females -= with_females;
        if let Some(young) = other.young.as_mut() {
            young.males = 0;
            young.update_young_repro(false);
        }
        if let Some(young) = self.young.as_mut() {
            young.females = 0;
            young.update_young_repro(castrated);
        }
        Some(other)
    }

    fn wean(&mut self, females: bool, males: bool) -> Vec<Self> {
        let mut weaners = vec![];
        let emptied = match self.young.as_mut() {
            Some(young) => {
                if males && young.males > 0 {
                    let mut weaner = (**young).clone();
                    weaner.females = 0;
                    weaner.suckling = false;
                    young.males = 0;
                    weaners.push(weaner);
                }
                if females && young.females > 0 {
                    let mut weaner = (**young).clone();
                    weaner.males = 0;
                    weaner.repro = ReproType::Empty;
                    weaner.suckling = false;
                    young.females = 0;
                    weaners.push(weaner);
                }
                young.no_animals() == 0
            }
            None => false,
        };
        if emptied {
            self.young = None;
            self.offspring = 0;
            if self.kind() == AnimalKind::Sheep {
                self.lactation = 0;
            }
        }
        weaners
    }

    fn join(&mut self, mate: Shared<Genotype>, days: u32) {
        if self.repro == ReproType::Empty && self.females > 0 {
            self.mated_to = Some(mate);
            self.joining = days;
        }
    }

    fn castrate(&mut self) -> usize {
        match self.young.as_mut() {
            Some(young) if young.males > 0 && young.repro == ReproType::Male => {
                young.repro = ReproType::Castrated;
                young.males
            }
            _ => 0,
        }
    }

    fn dry_off(&mut self) {
        if self.young.is_none() {
            self.lactation = 0;
            self.offspring = 0;
        }
    }

    fn shear(&mut self) -> f64 {
        if !self.genotype.has_wool() {
            return 0.0;
        }
        let cut = self.fleece_weight * self.no_animals() as f64;
        self.fleece_weight = 0.0;
        cut
    }

    fn older_than(&self, age_days: f64) -> (usize, usize) {
        if self.age_days > age_days {
            (self.males, self.females)
        } else {
            (0, 0)
        }
    }

    fn excretion(&self) -> Excretion {
        let number = self.no_animals() as f64;
        let nitrogen = self.intake.crude_protein / 6.25;
        let (faeces, urine) = match self.kind() {
            AnimalKind::Sheep => ((10.0, 0.006, 0.00005), (15.0, 0.03, 0.0001)),
            AnimalKind::Cattle => ((12.0, 0.06, 0.002), (10.0, 0.4, 0.002)),
        };
        Excretion {
            faeces_events: number * faeces.0,
            faeces_area: faeces.1,
            faeces_volume: faeces.2,
            faeces_organic: number * self.intake.indigestible,
            faeces_nitrogen: number * 0.3 * nitrogen,
            urine_events: number * urine.0,
            urine_area: urine.1,
            urine_volume: urine.2,
            urine_nitrogen: number * 0.7 * nitrogen,
        }
    }

    fn weight_range_for_condition(&self, condition: f64) -> (f64, f64) {
        self.genotype
            .weight_range_for_condition(self.repro, self.age_days, condition)
    }

    fn set_condition_at_weight(&mut self, condition: f64) {
        let max_normal = self.max_normal_weight();
        if condition >= 1.0 {
            self.max_prev_weight = max_normal.max(self.base_weight);
            return;
        }
        let c3 = self.genotype.growth[2];
        let normal = self.base_weight / condition;
        self.max_prev_weight = ((normal - c3 * max_normal) / (1.0 - c3))
            .clamp(self.base_weight.min(max_normal), max_normal);
    }
}
