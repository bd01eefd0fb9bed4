use log::{debug, warn};

use crate::animals::{AnimalGroup, IntakeRates};
use crate::api::Event;
use crate::config::StockConfig;
use crate::math::dim;
use crate::occur;
use crate::pasturing::Pasturing::{ForageRemoved, PaddockGrazed};
use crate::pasturing::{Paddock, PaddockId, Pasturing, DIG_CLASSES, RIPE, UNRIPE};
use crate::raising::{Raising, Slot, MOTHER, YOUNG};
use crate::Stock;

impl<G: AnimalGroup> Stock<G> {
    /// Advances every group by one day: ageing, merging, grazing of each
    /// paddock in sub-steps with a protein retry, then growth.
    pub fn dynamics(&mut self) -> Vec<Event> {
        self.pasturing.compute_totals();
        for position in 0..self.raising.count() {
            self.stage_slot(position);
        }
        let aged = self.age_groups();
        let merged = self.raising.merge_groups();
        self.prepare_nutrition();
        self.sum_pot_intake();
        let paddocks: Vec<PaddockId> = self
            .pasturing
            .paddocks
            .iter()
            .map(|paddock| paddock.id)
            .collect();
        let mut grazed = vec![];
        for paddock in paddocks {
            grazed.extend(self.graze_paddock(paddock));
        }
        let grown = self.complete_growth();
        occur![aged, merged, grazed, grown]
    }

    /// Groups born or split off while ageing follow their source slot and
    /// wait for tomorrow to be aged themselves.
    fn age_groups(&mut self) -> Vec<Raising> {
        let mut events = vec![];
        let count = self.raising.count();
        for position in 0..count {
            let weather = self.weather;
            let slot = &mut self.raising.slots[position];
            let mut spawned = slot.group.age(1, &mut self.random);
            if let Some(young) = slot.group.young_mut() {
                young.set_weather(weather);
            }
            if spawned.is_empty() {
                continue;
            }
            for group in spawned.iter_mut() {
                group.set_weather(weather);
                if let Some(young) = group.young_mut() {
                    young.set_weather(weather);
                }
            }
            let before = self.raising.count();
            events.push(self.raising.group_changed(position));
            events.extend(self.raising.adopt_groups(position, spawned));
            self.stage_new_slots(before);
        }
        events
    }

    fn prepare_nutrition(&mut self) {
        for slot in self.raising.slots.iter_mut() {
            slot.states[MOTHER] = slot.group.store_state();
            slot.group.calculate_intake_limit();
            slot.group.reset_grazing();
            slot.rdp_factors = [1.0; 2];
            if let Some(young) = slot.group.young_mut() {
                slot.states[YOUNG] = young.store_state();
                young.calculate_intake_limit();
                young.reset_grazing();
            }
        }
    }

    fn sum_pot_intake(&mut self) {
        for paddock in self.pasturing.paddocks.iter_mut() {
            paddock.summed_pot_intake = self
                .raising
                .slots
                .iter()
                .filter(|slot| slot.paddock == paddock.id)
                .map(|slot| demand(&slot.group))
                .sum();
        }
    }

    fn graze_paddock(&mut self, id: PaddockId) -> Vec<Pasturing> {
        let feed_first = match self.pasturing.get_paddock(id) {
            Ok(paddock) => paddock.feed_supplement_first,
            Err(error) => {
                warn!("Unable to graze {:?}, {:?}", id, error);
                return vec![];
            }
        };
        let occupants = self.raising.occupants(id);
        let mut steps = vec![];
        let mut iterations = 0;
        let mut rdp_factor;
        loop {
            iterations += 1;
            steps.clear();
            let mut elapsed = 0.0;
            while elapsed < 1.0 - self.config.epsilon {
                for &position in &occupants {
                    self.restage_slot(position);
                }
                let delta = match self.pasturing.get_paddock(id) {
                    Ok(paddock) => {
                        step_length(&self.config, paddock, &self.raising.slots, &occupants)
                    }
                    Err(_) => 1.0,
                }
                .min(1.0 - elapsed);
                let first = elapsed == 0.0;
                for &position in &occupants {
                    let slot = &mut self.raising.slots[position];
                    slot.rates[MOTHER] = slot.group.grazing(delta, first, feed_first);
                    slot.rates[YOUNG] = match slot.group.young_mut() {
                        Some(young) => young.grazing(delta, first, false),
                        None => IntakeRates::default(),
                    };
                }
                self.remove_forage(id, &occupants, delta);
                steps.push(delta);
                elapsed += delta;
            }

            rdp_factor = 1.0;
            for &position in &occupants {
                let slot = &mut self.raising.slots[position];
                slot.group.nutrition();
                slot.rdp_factors[MOTHER] = slot.group.rdp_intake_factor();
                rdp_factor = f64::min(rdp_factor, slot.rdp_factors[MOTHER]);
                if let Some(young) = slot.group.young_mut() {
                    young.nutrition();
                    slot.rdp_factors[YOUNG] = young.rdp_intake_factor();
                    rdp_factor = f64::min(rdp_factor, slot.rdp_factors[YOUNG]);
                }
            }
            if rdp_factor >= 1.0 || iterations >= self.config.max_rdp_iterations {
                break;
            }

            debug!(
                "Paddock {:?} short of degradable protein, factor {:.4}, grazing again",
                id, rdp_factor
            );
            self.pasturing.zero_removal(id);
            for &position in &occupants {
                let slot = &mut self.raising.slots[position];
                slot.group.revert_state(&slot.states[MOTHER]);
                let pot_intake = slot.group.pot_intake() * slot.rdp_factors[MOTHER];
                slot.group.set_pot_intake(pot_intake);
                if let Some(young) = slot.group.young_mut() {
                    young.revert_state(&slot.states[YOUNG]);
                    let pot_intake = young.pot_intake() * slot.rdp_factors[YOUNG];
                    young.set_pot_intake(pot_intake);
                }
                slot.step_inputs = slot.init_inputs.clone();
            }
        }

        debug!(
            "Paddock {:?} grazed by {} slots in {} steps, {} iterations, rdp factor {:.4}",
            id,
            occupants.len(),
            steps.len(),
            iterations,
            rdp_factor
        );
        let mut events = vec![PaddockGrazed {
            paddock: id,
            steps,
            iterations,
            rdp_factor,
        }];
        if let Ok(paddock) = self.pasturing.get_paddock(id) {
            for forage in &paddock.forages {
                if !forage.removal.is_empty() {
                    events.push(ForageRemoved {
                        paddock: id,
                        forage: forage.id,
                        herbage: forage.removal.herbage_total(),
                        seeds: forage.removal.seeds_total(),
                    });
                }
            }
        }
        events
    }

    /// Books what the occupants ate over `delta` against the paddock's forages
    /// and supplement, then depletes every slot's view of the forage.
    fn remove_forage(&mut self, id: PaddockId, occupants: &[usize], delta: f64) {
        let paddock = match self.pasturing.get_paddock_mut(id) {
            Ok(paddock) => paddock,
            Err(_) => return,
        };
        if paddock.area <= 0.0 {
            return;
        }
        for &position in occupants {
            let slot = &self.raising.slots[position];
            let mothers = slot.group.no_animals() as f64;
            let young = slot.group.young().map(G::no_animals).unwrap_or(0) as f64;
            for class in 0..DIG_CLASSES {
                let consumed = (mothers * slot.rates[MOTHER].herbage[class]
                    + young * slot.rates[YOUNG].herbage[class])
                    * delta;
                let available = slot.paddock_inputs.herbage[class].biomass;
                if consumed <= 0.0 || available <= 0.0 {
                    continue;
                }
                for (forage, inputs) in paddock.forages.iter_mut().zip(&slot.step_inputs) {
                    forage.removal.herbage[class] +=
                        consumed * inputs.herbage[class].biomass / available;
                }
            }
            for (index, forage) in paddock.forages.iter_mut().enumerate() {
                for ripeness in [UNRIPE, RIPE] {
                    forage.removal.seeds[ripeness] += (mothers
                        * slot.rates[MOTHER].seed(index, ripeness)
                        + young * slot.rates[YOUNG].seed(index, ripeness))
                        * delta;
                }
            }
            paddock.supplement_removal += (mothers * slot.rates[MOTHER].supplement
                + young * slot.rates[YOUNG].supplement)
                * delta;
        }

        let area = paddock.area;
        for &position in occupants {
            let slot = &mut self.raising.slots[position];
            let snapshots = slot.step_inputs.iter_mut().zip(&slot.init_inputs);
            for ((step, init), forage) in snapshots.zip(&paddock.forages) {
                for class in 0..DIG_CLASSES {
                    step.herbage[class].biomass = dim(
                        init.herbage[class].biomass,
                        forage.removal.herbage[class] / area,
                    );
                }
                if let (Some(step), Some(init)) = (step.seeds.first_mut(), init.seeds.first()) {
                    for ripeness in [UNRIPE, RIPE] {
                        step[ripeness].biomass =
                            dim(init[ripeness].biomass, forage.removal.seeds[ripeness] / area);
                    }
                }
            }
        }
    }

    fn complete_growth(&mut self) -> Vec<Raising> {
        let mut events = vec![];
        for position in 0..self.raising.count() {
            let slot = &mut self.raising.slots[position];
            slot.group.complete_growth(slot.rdp_factors[MOTHER]);
            if let Some(young) = slot.group.young_mut() {
                young.complete_growth(slot.rdp_factors[YOUNG]);
            }
            events.push(self.raising.group_changed(position));
        }
        events
    }
}

/// kg DM the group and its young could eat today.
fn demand<G: AnimalGroup>(group: &G) -> f64 {
    let own = group.no_animals() as f64 * group.pot_intake();
    let young = group
        .young()
        .map(|young| young.no_animals() as f64 * young.pot_intake())
        .unwrap_or(0.0);
    own + young
}

/// Fraction of a day in which the first occupant's appetite would take
/// `max_consumption` of the scarcest herbage class.
pub fn step_length<G: AnimalGroup>(
    config: &StockConfig,
    paddock: &Paddock,
    slots: &[Slot<G>],
    occupants: &[usize],
) -> f64 {
    let first = match occupants.first() {
        Some(&position) => &slots[position],
        None => return 1.0,
    };
    if paddock.area <= 0.0 {
        return 1.0;
    }
    let relative = first.group.relative_intake(false);
    let mut removal_time = 9999.9_f64;
    for class in 0..DIG_CLASSES {
        let biomass = first.paddock_inputs.herbage[class].biomass;
        if biomass > 0.0 {
            let rate = paddock.summed_pot_intake * relative.herbage[class] / paddock.area;
            if rate > 0.0 {
                removal_time = removal_time.min(biomass / rate);
            }
        }
    }
    (config.max_consumption * removal_time)
        .min(1.0)
        .max(config.min_step)
}
