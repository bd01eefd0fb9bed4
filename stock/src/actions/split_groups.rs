use crate::animals::AnimalGroup;
use crate::api::{Event, StockError};
use crate::{occur, Stock};

impl<G: AnimalGroup> Stock<G> {
    /// Keeps `keep` animals in the slot, the rest form a new slot at the end.
    pub fn split(&mut self, index: usize, keep: i32) -> Result<Vec<Event>, StockError> {
        let count = self.raising.count();
        let split_group = self.raising.split_group(index, keep)?;
        let events = occur![split_group()];
        self.stage_new_slots(count);
        Ok(events)
    }

    pub fn split_age(&mut self, index: usize, age_days: f64) -> Result<Vec<Event>, StockError> {
        let count = self.raising.count();
        let split_age = self.raising.split_age(index, age_days)?;
        let events = occur![split_age()];
        self.stage_new_slots(count);
        Ok(events)
    }

    /// Splits off the animals lighter than `live_weight`.
    pub fn split_weight(&mut self, index: usize, live_weight: f64) -> Result<Vec<Event>, StockError> {
        let count = self.raising.count();
        let spread = self.config.weight_spread();
        let split_weight = self.raising.split_weight(index, live_weight, spread)?;
        let events = occur![split_weight()];
        self.stage_new_slots(count);
        Ok(events)
    }

    pub fn split_young(&mut self, index: usize) -> Result<Vec<Event>, StockError> {
        let count = self.raising.count();
        let split_young = self.raising.split_young(index)?;
        let events = occur![split_young()];
        self.stage_new_slots(count);
        Ok(events)
    }
}
