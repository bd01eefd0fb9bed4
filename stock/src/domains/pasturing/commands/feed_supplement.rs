use crate::pasturing::Pasturing::SupplementPlaced;
use crate::pasturing::{PaddockId, Pasturing, PasturingDomain, PasturingError, Supplement};

impl PasturingDomain {
    pub fn feed_supplement(
        &mut self,
        id: PaddockId,
        amount: f64,
        supplement: Supplement,
        feed_first: bool,
    ) -> Result<impl FnOnce() -> Vec<Pasturing> + '_, PasturingError> {
        let paddock = self.get_paddock_mut(id)?;
        let command = move || {
            paddock.supplement.feed(supplement, amount);
            paddock.feed_supplement_first = feed_first;
            vec![SupplementPlaced {
                paddock: id,
                amount: paddock.supplement.total_amount(),
            }]
        };
        Ok(command)
    }
}
