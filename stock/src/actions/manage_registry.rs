use crate::animals::AnimalGroup;
use crate::api::{Event, StockError};
use crate::{occur, Stock};

impl<G: AnimalGroup> Stock<G> {
    pub fn delete(&mut self, index: usize) -> Result<Vec<Event>, StockError> {
        let delete_group = self.raising.delete_group(index)?;
        let events = occur![delete_group()];
        Ok(events)
    }

    pub fn set_tag(&mut self, index: usize, tag: i32) -> Result<Vec<Event>, StockError> {
        let set_tag = self.raising.set_tag(index, tag)?;
        let events = occur![set_tag()];
        Ok(events)
    }

    pub fn set_priority(&mut self, index: usize, priority: i32) -> Result<Vec<Event>, StockError> {
        let set_priority = self.raising.set_priority(index, priority)?;
        let events = occur![set_priority()];
        Ok(events)
    }

    /// Moves a group into the named paddock; an unknown name is an error.
    pub fn set_paddock(&mut self, index: usize, paddock: &str) -> Result<Vec<Event>, StockError> {
        let paddock = self.pasturing.find_paddock(paddock)?.id;
        let move_group = self.raising.move_group(index, paddock)?;
        let events = occur![move_group()];
        Ok(events)
    }

    /// Name of the paddock a group grazes.
    pub fn paddock_name(&self, index: usize) -> Result<&str, StockError> {
        let paddock = self.raising.get_paddock(index)?;
        let paddock = self.pasturing.get_paddock(paddock)?;
        Ok(&paddock.name)
    }

    pub fn sort(&mut self) -> Vec<Event> {
        occur![self.raising.sort_groups()]
    }

    pub fn merge(&mut self) -> Vec<Event> {
        occur![self.raising.merge_groups()]
    }
}
