use crate::animals::AnimalGroup;
use crate::raising::Raising::FleeceShorn;
use crate::raising::{Raising, RaisingDomain, RaisingError};

impl<G: AnimalGroup> RaisingDomain<G> {
    pub fn shear(
        &mut self,
        index: usize,
        adults: bool,
        young: bool,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let targets = self.targets(index)?;
        let command = move || {
            let mut events = vec![];
            for position in targets {
                let group = &mut self.slots[position].group;
                let adults_cut = if adults { group.shear() } else { 0.0 };
                let young_cut = match group.young_mut() {
                    Some(offspring) if young => offspring.shear(),
                    _ => 0.0,
                };
                if adults_cut > 0.0 || young_cut > 0.0 {
                    events.push(FleeceShorn {
                        index: position + 1,
                        adults: adults_cut,
                        young: young_cut,
                    });
                }
            }
            events
        };
        Ok(command)
    }
}
