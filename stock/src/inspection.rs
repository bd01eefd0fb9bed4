use crate::animals::{AnimalGroup, AnimalKind, Excretion, ReproType};
use crate::api::StockError;
use crate::pasturing::PasturingError;
use crate::Stock;

/// Heifers become cows at two years of age.
const HEIFER_AGE_DAYS: f64 = 730.0;

fn mass_unit_factor(units: &str) -> Option<f64> {
    match units {
        "kg/ha" => Some(1.0),
        "kg/m^2" => Some(0.0001),
        "dse/ha" => Some(0.02),
        "g/m^2" => Some(0.1),
        _ => None,
    }
}

fn weighted_mean(x: f64, x_weight: f64, y: f64, y_weight: f64) -> f64 {
    if x_weight + y_weight > 0.0 {
        (x * x_weight + y * y_weight) / (x_weight + y_weight)
    } else {
        0.0
    }
}

fn accumulate(total: &mut Excretion, part: &Excretion) {
    total.faeces_area = weighted_mean(
        total.faeces_area,
        total.faeces_events,
        part.faeces_area,
        part.faeces_events,
    );
    total.faeces_volume = weighted_mean(
        total.faeces_volume,
        total.faeces_events,
        part.faeces_volume,
        part.faeces_events,
    );
    total.urine_area = weighted_mean(
        total.urine_area,
        total.urine_events,
        part.urine_area,
        part.urine_events,
    );
    total.urine_volume = weighted_mean(
        total.urine_volume,
        total.urine_events,
        part.urine_volume,
        part.urine_events,
    );
    total.faeces_events += part.faeces_events;
    total.urine_events += part.urine_events;
    total.faeces_organic += part.faeces_organic;
    total.faeces_nitrogen += part.faeces_nitrogen;
    total.urine_nitrogen += part.urine_nitrogen;
}

impl<G: AnimalGroup> Stock<G> {
    /// Live weight of every group in the paddock, young included, per unit of area.
    pub fn mass_per_area(&self, paddock: &str, units: &str) -> Result<f64, StockError> {
        let factor = mass_unit_factor(units).ok_or(PasturingError::UnknownMassUnit {
            units: units.to_string(),
        })?;
        if paddock.is_empty() {
            return Ok(0.0);
        }
        let paddock = self.pasturing.find_paddock(paddock)?;
        if paddock.area <= 0.0 {
            return Ok(0.0);
        }
        let mass: f64 = self
            .raising
            .occupants(paddock.id)
            .into_iter()
            .map(|position| {
                let group = &self.raising.slots[position].group;
                let young = group
                    .young()
                    .map(|young| young.no_animals() as f64 * young.live_weight())
                    .unwrap_or(0.0);
                group.no_animals() as f64 * group.live_weight() + young
            })
            .sum();
        Ok(factor * mass / paddock.area)
    }

    /// Dung and urine of the groups in a paddock, or of every group, per ha.
    pub fn excretion(&self, paddock: Option<&str>) -> Result<Excretion, StockError> {
        let (filter, area) = match paddock {
            Some(name) => {
                let paddock = self.pasturing.find_paddock(name)?;
                (Some(paddock.id), paddock.area)
            }
            None => (None, self.pasturing.total_area()),
        };
        let area = if area > 0.0 { area } else { 1.0 };
        let mut total = Excretion::default();
        for slot in &self.raising.slots {
            if filter.map_or(false, |id| id != slot.paddock) {
                continue;
            }
            accumulate(&mut total, &slot.group.excretion());
            if let Some(young) = slot.group.young() {
                accumulate(&mut total, &young.excretion());
            }
        }
        total.faeces_organic /= area;
        total.faeces_nitrogen /= area;
        total.urine_nitrogen /= area;
        Ok(total)
    }

    /// Common name of the animals in a slot or of their young, empty when absent.
    pub fn sex_label(&self, index: usize, young: bool) -> &'static str {
        let group = match self.raising.get_group(index) {
            Ok(group) => group,
            Err(_) => return "",
        };
        let group = if young {
            match group.young() {
                Some(young) => young,
                None => return "",
            }
        } else {
            group
        };
        match (group.kind(), group.repro()) {
            (AnimalKind::Sheep, ReproType::Male) => "ram",
            (AnimalKind::Sheep, ReproType::Castrated) => "wether",
            (AnimalKind::Sheep, _) => "ewe",
            (AnimalKind::Cattle, ReproType::Male) => "bull",
            (AnimalKind::Cattle, ReproType::Castrated) => "steer",
            (AnimalKind::Cattle, _) if group.age_days() < HEIFER_AGE_DAYS => "heifer",
            (AnimalKind::Cattle, _) => "cow",
        }
    }
}
