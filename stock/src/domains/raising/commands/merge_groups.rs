use log::debug;

use crate::animals::AnimalGroup;
use crate::raising::Raising::GroupsMerged;
use crate::raising::{Raising, RaisingDomain, Slot};

impl<G: AnimalGroup> RaisingDomain<G> {
    /// Drops empty groups and folds similar groups sharing paddock, tag and
    /// priority into the earliest of them.
    pub fn merge_groups(&mut self) -> Vec<Raising> {
        let before = self.slots.len();
        let mut slots: Vec<Option<Slot<G>>> = self
            .slots
            .drain(..)
            .map(|slot| Some(slot).filter(|slot| slot.group.no_animals() > 0))
            .collect();
        let emptied = slots.iter().filter(|slot| slot.is_none()).count();
        for i in 0..slots.len() {
            for j in (i + 1)..slots.len() {
                let mergeable = match (&slots[i], &slots[j]) {
                    (Some(target), Some(source)) => {
                        target.paddock == source.paddock
                            && target.tag == source.tag
                            && target.priority == source.priority
                            && target.group.similar(&source.group)
                    }
                    _ => false,
                };
                if mergeable {
                    if let (Some(source), Some(target)) = (slots[j].take(), slots[i].as_mut()) {
                        target.group.merge(source.group);
                    }
                }
            }
        }
        self.slots = slots.into_iter().flatten().collect();
        let removed = before - self.slots.len();
        if removed == 0 {
            return vec![];
        }
        debug!(
            "Merge removed {} empty and {} similar groups, {} remain",
            emptied,
            removed - emptied,
            self.slots.len()
        );
        vec![GroupsMerged { count: removed }]
    }
}
