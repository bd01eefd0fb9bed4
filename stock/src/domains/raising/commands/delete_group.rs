use crate::animals::AnimalGroup;
use crate::raising::Raising::GroupRemoved;
use crate::raising::{Raising, RaisingDomain, RaisingError};

impl<G: AnimalGroup> RaisingDomain<G> {
    /// Later slots shift down by one.
    pub fn delete_group(
        &mut self,
        index: usize,
    ) -> Result<impl FnOnce() -> Vec<Raising> + '_, RaisingError> {
        let position = self.position(index)?;
        let command = move || {
            self.slots.remove(position);
            vec![GroupRemoved { index }]
        };
        Ok(command)
    }
}
