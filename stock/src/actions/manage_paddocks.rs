use crate::animals::AnimalGroup;
use crate::api::{Event, StockError};
use crate::pasturing::{ForageId, GrazingInputs, PaddockId, Supplement};
use crate::{occur, Stock};

impl<G: AnimalGroup> Stock<G> {
    pub fn create_paddock(
        &mut self,
        name: &str,
        area: f64,
        slope: f64,
        waterlog: f64,
    ) -> Result<(PaddockId, Vec<Event>), StockError> {
        let (id, create_paddock) = self.pasturing.create_paddock(name, area, slope, waterlog)?;
        let events = occur![create_paddock()];
        Ok((id, events))
    }

    pub fn create_forage(
        &mut self,
        paddock: &str,
        name: &str,
    ) -> Result<(ForageId, Vec<Event>), StockError> {
        let paddock = self.pasturing.find_paddock(paddock)?.id;
        let (id, create_forage) = self.pasturing.create_forage(paddock, name)?;
        let events = occur![create_forage()];
        Ok((id, events))
    }

    pub fn update_forage(
        &mut self,
        forage: ForageId,
        inputs: GrazingInputs,
    ) -> Result<Vec<Event>, StockError> {
        let update_forage = self.pasturing.update_forage(forage, inputs)?;
        let events = occur![update_forage()];
        Ok(events)
    }

    pub fn place_supplement(
        &mut self,
        paddock: &str,
        amount: f64,
        supplement: Supplement,
        feed_first: bool,
    ) -> Result<Vec<Event>, StockError> {
        let paddock = self.pasturing.find_paddock(paddock)?.id;
        let feed_supplement = self
            .pasturing
            .feed_supplement(paddock, amount, supplement, feed_first)?;
        let events = occur![feed_supplement()];
        Ok(events)
    }

    /// Clears yesterday's supplement and removal before the host updates forage.
    pub fn begin_time_step(&mut self) -> Vec<Event> {
        occur![self.pasturing.begin_time_step()]
    }
}
