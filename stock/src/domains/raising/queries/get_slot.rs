use crate::animals::AnimalGroup;
use crate::pasturing::PaddockId;
use crate::raising::{RaisingDomain, RaisingError, Slot};

impl<G: AnimalGroup> RaisingDomain<G> {
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Zero based position of a 1-based slot index.
    pub fn position(&self, index: usize) -> Result<usize, RaisingError> {
        if index >= 1 && index <= self.slots.len() {
            Ok(index - 1)
        } else {
            Err(RaisingError::SlotNotFound { index })
        }
    }

    /// Positions addressed by an index where 0 means every slot.
    pub fn targets(&self, index: usize) -> Result<Vec<usize>, RaisingError> {
        if index == 0 {
            Ok((0..self.slots.len()).collect())
        } else {
            self.position(index).map(|position| vec![position])
        }
    }

    pub fn get_slot(&self, index: usize) -> Result<&Slot<G>, RaisingError> {
        let position = self.position(index)?;
        Ok(&self.slots[position])
    }

    pub fn get_slot_mut(&mut self, index: usize) -> Result<&mut Slot<G>, RaisingError> {
        let position = self.position(index)?;
        Ok(&mut self.slots[position])
    }

    pub fn get_group(&self, index: usize) -> Result<&G, RaisingError> {
        self.get_slot(index).map(|slot| &slot.group)
    }

    pub fn get_tag(&self, index: usize) -> Result<i32, RaisingError> {
        self.get_slot(index).map(|slot| slot.tag)
    }

    pub fn get_priority(&self, index: usize) -> Result<i32, RaisingError> {
        self.get_slot(index).map(|slot| slot.priority)
    }

    pub fn get_paddock(&self, index: usize) -> Result<PaddockId, RaisingError> {
        self.get_slot(index).map(|slot| slot.paddock)
    }

    pub fn highest_tag(&self) -> i32 {
        self.slots.iter().map(|slot| slot.tag).max().unwrap_or(0)
    }

    /// Positions of the slots occupying a paddock, in registry order.
    pub fn occupants(&self, paddock: PaddockId) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.paddock == paddock)
            .map(|(position, _)| position)
            .collect()
    }

    pub fn total_animals(&self) -> usize {
        self.slots.iter().map(|slot| slot.head_count()).sum()
    }
}
