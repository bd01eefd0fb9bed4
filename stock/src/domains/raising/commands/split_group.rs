use crate::animals::{AnimalGroup, Differences};
use crate::math::cum_normal;
use crate::raising::Raising::GroupChanged;
use crate::raising::{GroupSummary, Raising, RaisingDomain, RaisingError};

/// Shape of the assumed live weight distribution within a group.
#[derive(Debug, Clone, Copy)]
pub struct WeightSpread {
    /// coefficient of variation of live weight
    pub cv: f64,
    /// integration steps over the truncated normal distribution
    pub steps: usize,
}

impl Default for WeightSpread {
    fn default() -> Self {
        Self { cv: 0.10, steps: 20 }
    }
}

impl WeightSpread {
    /// Number of animals lighter than `split_weight` and the weight
    /// differences that give the split-off part their mean live weight.
    pub fn lighter_than<G: AnimalGroup>(&self, group: &G, split_weight: f64) -> (usize, Differences) {
        let number = group.no_animals();
        let live_weight = group.live_weight();
        if number == 0 || live_weight <= 0.0 || self.cv <= 0.0 {
            return (0, Differences::NONE);
        }
        let split_sd = (split_weight - live_weight) / (self.cv * live_weight);
        let proportion = cum_normal(split_sd);
        let remove = (number as f64 * proportion).round() as usize;
        if remove == 0 || remove >= number {
            return (remove.min(number), Differences::NONE);
        }
        let steps = self.steps.max(1);
        let mut right_sd = -5.0;
        let width = (split_sd - right_sd) / steps as f64;
        let mut remove_weight = 0.0;
        let mut previous = 0.0;
        for _ in 0..steps {
            right_sd += width;
            let current = cum_normal(right_sd);
            remove_weight +=
                (current - previous) * live_weight * (1.0 + self.cv * (right_sd - 0.5 * width));
            previous = current;
        }
        remove_weight /= proportion;
        let ratio = number as f64 / (number - remove) as f64 * (remove_weight / live_weight - 1.0);
        let diffs = Differences {
            base_weight: ratio * group.base_weight(),
            standard_reference_weight: ratio * group.standard_reference_weight(),
            fleece_weight: ratio * group.fleece_weight(),
        };
        (remove, diffs)
    }
}

impl<G: AnimalGroup> RaisingDomain<G> {
    /// Keeps `keep` animals and moves the rest into a new slot.
    pub fn split_group(
        &mut self,
        index: usize,
        keep: i32,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let position = self.position(index)?;
        let command = move || {
            let number = self.slots[position].group.no_animals();
            let keep = keep.max(0) as usize;
            self.split_off(position, number.saturating_sub(keep), Differences::NONE, false)
        };
        Ok(command)
    }

    pub fn split_age(
        &mut self,
        index: usize,
        age_days: f64,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let targets = self.targets(index)?;
        let command = move || {
            let mut events = vec![];
            for position in targets {
                let (males, females) = self.slots[position].group.older_than(age_days);
                events.extend(self.split_off(position, males + females, Differences::NONE, true));
            }
            events
        };
        Ok(command)
    }

    pub fn split_weight(
        &mut self,
        index: usize,
        live_weight: f64,
        spread: WeightSpread,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let targets = self.targets(index)?;
        let command = move || {
            let mut events = vec![];
            for position in targets {
                let (lighter, diffs) = spread.lighter_than(&self.slots[position].group, live_weight);
                events.extend(self.split_off(position, lighter, diffs, false));
            }
            events
        };
        Ok(command)
    }

    pub fn split_young(
        &mut self,
        index: usize,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let targets = self.targets(index)?;
        let command = move || {
            let mut events = vec![];
            for position in targets {
                if let Some(group) = self.slots[position].group.split_young() {
                    events.push(self.group_changed(position));
                    events.extend(self.adopt_groups(position, vec![group]));
                }
            }
            events
        };
        Ok(command)
    }

    pub(crate) fn split_off(
        &mut self,
        position: usize,
        number: usize,
        diffs: Differences,
        by_age: bool,
    ) -> Vec<Raising> {
        if number == 0 {
            return vec![];
        }
        let group = self.slots[position]
            .group
            .split(number, by_age, diffs, Differences::NONE);
        let mut events = vec![self.group_changed(position)];
        events.extend(self.adopt_groups(position, vec![group]));
        events
    }

    pub(crate) fn group_changed(&self, position: usize) -> Raising {
        GroupChanged {
            index: position + 1,
            group: GroupSummary::of(&self.slots[position].group),
        }
    }
}
