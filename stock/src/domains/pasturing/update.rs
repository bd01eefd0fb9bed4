use log::warn;

use crate::pasturing::{ForageRemoval, GrazingInputs, PaddockId, PasturingDomain};

impl PasturingDomain {
    /// Recomputes every paddock's forage totals from its forages.
    pub fn compute_totals(&mut self) {
        for paddock in self.paddocks.iter_mut() {
            paddock.totals =
                GrazingInputs::total(paddock.forages.iter().map(|forage| &forage.available));
        }
    }

    pub fn zero_removal(&mut self, id: PaddockId) {
        match self.get_paddock_mut(id) {
            Ok(paddock) => {
                paddock.supplement_removal = 0.0;
                for forage in paddock.forages.iter_mut() {
                    forage.removal = ForageRemoval::default();
                }
            }
            Err(error) => warn!("Unable to zero removal of {id:?}, {error:?}"),
        }
    }
}
