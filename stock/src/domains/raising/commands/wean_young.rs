use crate::animals::{AnimalGroup, Differences};
use crate::raising::Raising::YoungWeaned;
use crate::raising::{Raising, RaisingDomain, RaisingError};

impl<G: AnimalGroup> RaisingDomain<G> {
    /// Weans up to `number` young of the chosen sexes. Weaners become new
    /// slots in their mothers' paddock.
    pub fn wean(
        &mut self,
        index: usize,
        number: i32,
        females: bool,
        males: bool,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let targets = self.targets(index)?;
        let command = move || {
            let mut remaining = number.max(0) as usize;
            let mut events = vec![];
            for position in targets {
                let group = &self.slots[position].group;
                let young = match group.young() {
                    Some(young) => young,
                    None => continue,
                };
                let available = match (females, males) {
                    (true, true) => young.no_animals(),
                    (false, true) => young.male_no(),
                    (true, false) => young.female_no(),
                    (false, false) => 0,
                };
                let to_wean = remaining.min(available);
                if to_wean == 0 {
                    continue;
                }
                if to_wean == remaining {
                    let offspring = group.no_offspring().max(1) as f64;
                    let share = if females && males {
                        offspring
                    } else {
                        offspring / 2.0
                    };
                    let mothers = (to_wean as f64 / share).round() as usize;
                    let total = group.no_animals();
                    if mothers < total {
                        events.extend(self.split_off(
                            position,
                            total - mothers,
                            Differences::NONE,
                            false,
                        ));
                    }
                }
                let weaners = self.slots[position].group.wean(females, males);
                let weaned = weaners.iter().map(G::no_animals).sum::<usize>();
                events.push(YoungWeaned {
                    index: position + 1,
                    number: weaned,
                });
                events.extend(self.adopt_groups(position, weaners));
                remaining = remaining.saturating_sub(to_wean);
            }
            events
        };
        Ok(command)
    }
}
