use crate::pasturing::Pasturing::ForageCreated;
use crate::pasturing::{
    Forage, ForageId, ForageRemoval, GrazingInputs, PaddockId, Pasturing, PasturingDomain,
    PasturingError,
};

impl PasturingDomain {
    pub fn create_forage(
        &mut self,
        paddock: PaddockId,
        name: &str,
    ) -> Result<(ForageId, impl FnOnce() -> Vec<Pasturing> + '_), PasturingError> {
        let id = self.forages_id.peek(ForageId);
        let forages_id = &mut self.forages_id;
        let target = self
            .paddocks
            .iter_mut()
            .find(|candidate| candidate.id == paddock)
            .ok_or(PasturingError::PaddockIdNotFound { id: paddock })?;
        let name = name.to_string();
        let command = move || {
            forages_id.register(id.0);
            target.forages.push(Forage {
                id,
                name,
                available: GrazingInputs::default(),
                removal: ForageRemoval::default(),
            });
            vec![ForageCreated { paddock, forage: id }]
        };
        Ok((id, command))
    }
}
