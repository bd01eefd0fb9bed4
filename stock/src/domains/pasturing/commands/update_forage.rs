use crate::pasturing::Pasturing::ForageUpdated;
use crate::pasturing::{ForageId, GrazingInputs, Pasturing, PasturingDomain, PasturingError};

impl PasturingDomain {
    /// Replaces the herbage and seed on offer; fed by the host once per day.
    pub fn update_forage(
        &mut self,
        id: ForageId,
        inputs: GrazingInputs,
    ) -> Result<impl FnOnce() -> Vec<Pasturing> + '_, PasturingError> {
        let forage = self.get_forage_mut(id)?;
        let command = move || {
            let biomass = inputs.herbage_biomass();
            forage.available = inputs;
            vec![ForageUpdated { forage: id, biomass }]
        };
        Ok(command)
    }
}
