use crate::animals::{AnimalGroup, Differences};
use crate::raising::Raising::LactationEnded;
use crate::raising::{Raising, RaisingDomain, RaisingError};

impl<G: AnimalGroup> RaisingDomain<G> {
    /// Ends lactation in up to `number` females whose young are weaned.
    pub fn dry_off(
        &mut self,
        index: usize,
        number: i32,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let targets = self.targets(index)?;
        let command = move || {
            let mut remaining = number.max(0) as usize;
            let mut events = vec![];
            for position in targets {
                let group = &self.slots[position].group;
                if group.lactation() == 0 || group.young().is_some() {
                    continue;
                }
                let females = group.female_no();
                let to_dry = remaining.min(females);
                if to_dry == 0 {
                    continue;
                }
                if to_dry < females {
                    let excess = group.no_animals() - to_dry;
                    events.extend(self.split_off(position, excess, Differences::NONE, false));
                }
                let group = &mut self.slots[position].group;
                group.dry_off();
                if group.lactation() > 0 {
                    continue;
                }
                events.push(LactationEnded {
                    index: position + 1,
                    number: to_dry,
                });
                remaining -= to_dry;
            }
            events
        };
        Ok(command)
    }
}
