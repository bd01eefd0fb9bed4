use crate::animals::{AnimalGroup, Genotype};
use crate::collections::Shared;
use crate::raising::Raising::JoiningStarted;
use crate::raising::{Raising, RaisingDomain, RaisingError};

impl<G: AnimalGroup> RaisingDomain<G> {
    pub fn join(
        &mut self,
        index: usize,
        mate: Shared<Genotype>,
        days: u32,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let targets = self.targets(index)?;
        let command = move || {
            let mut events = vec![];
            for position in targets {
                self.slots[position].group.join(mate.clone(), days);
                events.push(JoiningStarted {
                    index: position + 1,
                    mate: mate.name.clone(),
                    days,
                });
            }
            events
        };
        Ok(command)
    }
}
