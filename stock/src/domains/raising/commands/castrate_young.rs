use crate::animals::{AnimalGroup, Differences, ReproType};
use crate::raising::Raising::YoungCastrated;
use crate::raising::{Raising, RaisingDomain, RaisingError};

impl<G: AnimalGroup> RaisingDomain<G> {
    /// Castrates up to `number` entire male young. Mothers of the excess
    /// young are split off first so that the castrated group is exact.
    pub fn castrate(
        &mut self,
        index: usize,
        number: i32,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let targets = self.targets(index)?;
        let command = move || {
            let mut remaining = number.max(0) as usize;
            let mut events = vec![];
            for position in targets {
                if remaining == 0 {
                    break;
                }
                let group = &self.slots[position].group;
                let male_young = match group.young() {
                    Some(young) if young.repro() == ReproType::Male => young.male_no(),
                    _ => 0,
                };
                if male_young == 0 {
                    continue;
                }
                let to_castrate = remaining.min(male_young);
                if to_castrate < male_young {
                    let mothers = group.no_animals();
                    let keep = (to_castrate as f64 / male_young as f64 * mothers as f64).round()
                        as usize;
                    events.extend(self.split_off(
                        position,
                        mothers.saturating_sub(keep),
                        Differences::NONE,
                        false,
                    ));
                }
                let castrated = self.slots[position].group.castrate();
                remaining = remaining.saturating_sub(castrated);
                events.push(YoungCastrated {
                    index: position + 1,
                    number: castrated,
                });
            }
            events
        };
        Ok(command)
    }
}
