use crate::animals::AnimalGroup;
use crate::pasturing::PaddockId;
use crate::raising::Raising::{GroupMoved, PriorityChanged, TagChanged};
use crate::raising::{Raising, RaisingDomain, RaisingError};

impl<G: AnimalGroup> RaisingDomain<G> {
    pub fn set_tag(
        &mut self,
        index: usize,
        tag: i32,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let slot = self.get_slot_mut(index)?;
        let command = move || {
            slot.tag = tag;
            vec![TagChanged { index, tag }]
        };
        Ok(command)
    }

    pub fn set_priority(
        &mut self,
        index: usize,
        priority: i32,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let slot = self.get_slot_mut(index)?;
        let command = move || {
            slot.priority = priority;
            vec![PriorityChanged { index, priority }]
        };
        Ok(command)
    }

    pub fn move_group(
        &mut self,
        index: usize,
        paddock: PaddockId,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let slot = self.get_slot_mut(index)?;
        let command = move || {
            slot.paddock = paddock;
            vec![GroupMoved { index, paddock }]
        };
        Ok(command)
    }
}
