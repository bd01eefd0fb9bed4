use crate::animals::AnimalGroup;
use crate::api::{Event, StockError};
use crate::{occur, Stock};

impl<G: AnimalGroup> Stock<G> {
    pub fn sell(&mut self, index: usize, number: i32) -> Result<Vec<Event>, StockError> {
        let sell = self.raising.sell(index, number)?;
        let events = occur![sell()];
        Ok(events)
    }

    pub fn sell_tag(&mut self, tag: i32, number: i32) -> Vec<Event> {
        occur![self.raising.sell_tag(tag, number)]
    }

    pub fn shear(&mut self, index: usize, adults: bool, young: bool) -> Result<Vec<Event>, StockError> {
        let shear = self.raising.shear(index, adults, young)?;
        let events = occur![shear()];
        Ok(events)
    }

    /// Puts males of the `mate` genotype with the females for `days`.
    pub fn join(&mut self, index: usize, mate: &str, days: u32) -> Result<Vec<Event>, StockError> {
        let mate = self.find_genotype(mate)?;
        let join = self.raising.join(index, mate, days)?;
        let events = occur![join()];
        Ok(events)
    }

    pub fn castrate(&mut self, index: usize, number: i32) -> Result<Vec<Event>, StockError> {
        let count = self.raising.count();
        let castrate = self.raising.castrate(index, number)?;
        let events = occur![castrate()];
        self.stage_new_slots(count);
        Ok(events)
    }

    pub fn wean(
        &mut self,
        index: usize,
        number: i32,
        females: bool,
        males: bool,
    ) -> Result<Vec<Event>, StockError> {
        let count = self.raising.count();
        let wean = self.raising.wean(index, number, females, males)?;
        let events = occur![wean()];
        self.stage_new_slots(count);
        Ok(events)
    }

    pub fn dry_off(&mut self, index: usize, number: i32) -> Result<Vec<Event>, StockError> {
        let count = self.raising.count();
        let dry_off = self.raising.dry_off(index, number)?;
        let events = occur![dry_off()];
        self.stage_new_slots(count);
        Ok(events)
    }
}
