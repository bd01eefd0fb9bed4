use log::{debug, warn};
use std::cmp::Ordering;

use crate::animals::{AnimalGroup, AnimalInits, ReproType};
use crate::api::{Event, StockError};
use crate::occur;
use crate::pasturing::{GrazingInputs, Paddock, SupplementRation, CLASS_DIG};
use crate::raising::Raising::GroupMoved;
use crate::Stock;

/// Quality of a paddock for the given group: its relative herbage intake
/// there weighted by class digestibility.
pub fn paddock_rank<G: AnimalGroup>(group: &G, paddock: &Paddock) -> f64 {
    if paddock.area <= 0.0 || paddock.forages.is_empty() {
        return 0.0;
    }
    let mut probe = group.clone();
    probe.set_paddock_conditions(paddock.steepness, paddock.waterlog);
    probe.assign_ration(&SupplementRation::default(), 0.0);
    probe.set_herbage(&GrazingInputs::total(
        paddock.forages.iter().map(|forage| &forage.available),
    ));
    probe
        .relative_intake(false)
        .herbage
        .iter()
        .zip(CLASS_DIG)
        .map(|(intake, digestibility)| intake * digestibility)
        .sum()
}

impl<G: AnimalGroup> Stock<G> {
    /// Moves draftable groups, lowest priority first, into the best paddock
    /// still free. Groups sharing a priority move together.
    pub fn draft(&mut self, excluded: &[&str], tag: Option<i32>) -> Vec<Event> {
        if self.raising.count() == 0 || self.pasturing.paddocks.is_empty() {
            return vec![];
        }
        let mut available = self.draft_availability(excluded);
        let representative = &self.raising.slots[0].group;
        let ranks: Vec<f64> = self
            .pasturing
            .paddocks
            .iter()
            .zip(&available)
            .map(|(paddock, &free)| {
                if free {
                    paddock_rank(representative, paddock)
                } else {
                    0.0
                }
            })
            .collect();

        let mut previous = self
            .pasturing
            .first_named_paddock()
            .and_then(|paddock| self.pasturing.paddock_index(paddock.id))
            .unwrap_or(0);
        let mut assigned = 0;
        let mut events = vec![];
        loop {
            let priority = self
                .raising
                .slots
                .iter()
                .map(|slot| slot.priority)
                .filter(|&priority| priority > assigned)
                .min();
            let priority = match priority {
                Some(priority) => priority,
                None => break,
            };
            let mut best = -1.0;
            let mut choice = None;
            for (index, &rank) in ranks.iter().enumerate() {
                if available[index] && rank > best {
                    best = rank;
                    choice = Some(index);
                }
            }
            let index = choice.unwrap_or(previous);
            let paddock = self.pasturing.paddocks[index].id;
            for (position, slot) in self.raising.slots.iter_mut().enumerate() {
                if slot.priority == priority && tag.map_or(true, |tag| slot.tag == tag) {
                    slot.paddock = paddock;
                    events.push(GroupMoved {
                        index: position + 1,
                        paddock,
                    });
                }
            }
            debug!("Drafted priority {} into {:?}", priority, paddock);
            available[index] = false;
            previous = index;
            assigned = priority;
        }
        occur![events]
    }

    /// Paddocks with forage, not excluded and not held by a group exempt from drafting.
    fn draft_availability(&self, excluded: &[&str]) -> Vec<bool> {
        let mut available: Vec<bool> = self
            .pasturing
            .paddocks
            .iter()
            .map(|paddock| !paddock.forages.is_empty())
            .collect();
        for slot in &self.raising.slots {
            if slot.is_draftable() {
                continue;
            }
            if let Some(index) = self.pasturing.paddock_index(slot.paddock) {
                available[index] = false;
            }
        }
        for name in excluded {
            match self.pasturing.find_paddock(name) {
                Ok(paddock) => {
                    if let Some(index) = self.pasturing.paddock_index(paddock.id) {
                        available[index] = false;
                    }
                }
                Err(error) => warn!("Excluded paddock ignored, {:?}", error),
            }
        }
        available
    }

    /// Paddock names from the best to the worst for the first group, or for
    /// a mature dry female of the reference genotype when there are no groups.
    pub fn rank_paddocks(&self) -> Result<Vec<String>, StockError> {
        let reference;
        let group = match self.raising.slots.first() {
            Some(slot) => &slot.group,
            None => {
                reference = self.reference_group()?;
                &reference
            }
        };
        let mut ranked: Vec<(f64, &Paddock)> = self
            .pasturing
            .paddocks
            .iter()
            .map(|paddock| (paddock_rank(group, paddock), paddock))
            .collect();
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        Ok(ranked
            .into_iter()
            .map(|(_, paddock)| paddock.name.clone())
            .collect())
    }

    fn reference_group(&self) -> Result<G, StockError> {
        let genotype = self.find_genotype(&self.config.reference_genotype)?;
        let inits = AnimalInits {
            genotype: genotype.name.clone(),
            number: 1,
            sex: ReproType::Empty,
            age_days: 4.0 * 365.0,
            weight: 50.0,
            ..AnimalInits::default()
        };
        Ok(G::create(genotype, None, &inits)?)
    }
}
