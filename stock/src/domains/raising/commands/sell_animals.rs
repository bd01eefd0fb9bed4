use crate::animals::AnimalGroup;
use crate::raising::Raising::AnimalsSold;
use crate::raising::{Raising, RaisingDomain, RaisingError};

impl<G: AnimalGroup> RaisingDomain<G> {
    /// Sells from the addressed slots in index order until `number` is
    /// exhausted. Emptied groups stay until the next merge.
    pub fn sell(
        &mut self,
        index: usize,
        number: i32,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let targets = self.targets(index)?;
        let command = move || self.sell_from(targets, number.max(0) as usize);
        Ok(command)
    }

    pub fn sell_tag(&mut self, tag: i32, number: i32) -> Vec<Raising> {
        let targets = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.tag == tag)
            .map(|(position, _)| position)
            .collect();
        self.sell_from(targets, number.max(0) as usize)
    }

    fn sell_from(&mut self, targets: Vec<usize>, mut remaining: usize) -> Vec<Raising> {
        let mut events = vec![];
        for position in targets {
            if remaining == 0 {
                break;
            }
            let group = &mut self.slots[position].group;
            let available = group.no_animals();
            let sold = remaining.min(available);
            if sold > 0 {
                group.set_no_animals(available - sold);
                remaining -= sold;
                events.push(AnimalsSold {
                    index: position + 1,
                    number: sold,
                });
            }
        }
        events
    }
}
