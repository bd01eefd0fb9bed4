use crate::animals::AnimalGroup;
use crate::raising::Raising::GroupsSorted;
use crate::raising::{Raising, RaisingDomain};

impl<G: AnimalGroup> RaisingDomain<G> {
    /// Ascending by tag, equal tags keep their order.
    pub fn sort_groups(&mut self) -> Vec<Raising> {
        self.slots.sort_by_key(|slot| slot.tag);
        vec![GroupsSorted {
            count: self.slots.len(),
        }]
    }
}
