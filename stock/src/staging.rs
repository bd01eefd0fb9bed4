use log::warn;

use crate::animals::{AnimalGroup, Weather};
use crate::api::StockError;
use crate::math::dim;
use crate::pasturing::{GrazingInputs, Paddock};
use crate::raising::Slot;
use crate::Stock;

/// Hands the paddock's terrain, ration and weather to the slot's groups and
/// snapshots the forage of every pasture component.
pub fn stage_initial_inputs<G: AnimalGroup>(slot: &mut Slot<G>, paddock: &Paddock, weather: Weather) {
    let group = &mut slot.group;
    group.set_paddock_conditions(paddock.steepness, paddock.waterlog);
    group.assign_ration(&paddock.supplement, 0.0);
    group.set_weather(weather);
    if let Some(young) = group.young_mut() {
        young.set_paddock_conditions(paddock.steepness, paddock.waterlog);
        young.assign_ration(&paddock.supplement, 0.0);
        young.set_weather(weather);
    }
    slot.init_inputs = paddock
        .forages
        .iter()
        .map(|forage| forage.available.clone())
        .collect();
    slot.step_inputs = slot.init_inputs.clone();
}

/// Recomputes what the slot's groups may eat after the removal recorded so far.
pub fn restage_availability<G: AnimalGroup>(slot: &mut Slot<G>, paddock: &Paddock) {
    slot.paddock_inputs = GrazingInputs::total(slot.step_inputs.iter());
    let remaining = dim(paddock.supplement.total_amount(), paddock.supplement_removal);
    let summed = paddock.summed_pot_intake;
    let entitled = |pot_intake: f64| {
        if summed > 0.0 {
            pot_intake / summed * remaining
        } else {
            0.0
        }
    };
    let group = &mut slot.group;
    group.set_herbage(&slot.paddock_inputs);
    group.assign_ration(&paddock.supplement, entitled(group.pot_intake()));
    if let Some(young) = group.young_mut() {
        young.set_herbage(&slot.paddock_inputs);
        young.assign_ration(&paddock.supplement, entitled(young.pot_intake()));
    }
}

impl<G: AnimalGroup> Stock<G> {
    pub fn stage_initial_inputs(&mut self, index: usize) -> Result<(), StockError> {
        let position = self.raising.position(index)?;
        let slot = &mut self.raising.slots[position];
        let paddock = self.pasturing.get_paddock(slot.paddock)?;
        stage_initial_inputs(slot, paddock, self.weather);
        Ok(())
    }

    pub fn restage_availability(&mut self, index: usize) -> Result<(), StockError> {
        let position = self.raising.position(index)?;
        let slot = &mut self.raising.slots[position];
        let paddock = self.pasturing.get_paddock(slot.paddock)?;
        restage_availability(slot, paddock);
        Ok(())
    }

    pub(crate) fn stage_slot(&mut self, position: usize) {
        if let Err(error) = self.stage_initial_inputs(position + 1) {
            warn!("Unable to stage slot at {}, {:?}", position, error);
        }
    }

    pub(crate) fn restage_slot(&mut self, position: usize) {
        if let Err(error) = self.restage_availability(position + 1) {
            warn!("Unable to restage slot at {}, {:?}", position, error);
        }
    }

    /// Stages every slot appended after the first `count`.
    pub(crate) fn stage_new_slots(&mut self, count: usize) {
        for position in count..self.raising.count() {
            self.stage_slot(position);
        }
    }
}
