use crate::animals::AnimalGroup;
use crate::pasturing::PaddockId;
use crate::raising::Raising::GroupAdded;
use crate::raising::{GroupSummary, Raising, RaisingDomain, Slot};

impl<G: AnimalGroup> RaisingDomain<G> {
    /// Appends a group and returns its 1-based index.
    pub fn add_group(
        &mut self,
        mut group: G,
        paddock: PaddockId,
        tag: i32,
        priority: i32,
    ) -> (usize, Vec<Raising>) {
        group.calculate_intake_limit();
        let summary = GroupSummary::of(&group);
        self.slots.push(Slot::new(group, paddock, tag, priority));
        let index = self.slots.len();
        let events = vec![GroupAdded {
            index,
            paddock,
            tag,
            group: summary,
        }];
        (index, events)
    }

    /// Appends groups split off from the slot at `position`, which they follow
    /// into its paddock, tag and priority.
    pub(crate) fn adopt_groups(&mut self, position: usize, groups: Vec<G>) -> Vec<Raising> {
        let source = &self.slots[position];
        let (paddock, tag, priority) = (source.paddock, source.tag, source.priority);
        let mut events = vec![];
        for group in groups {
            let (_, added) = self.add_group(group, paddock, tag, priority);
            events.extend(added);
        }
        events
    }
}
