use crate::pasturing::{Forage, ForageId, Paddock, PaddockId, PasturingDomain, PasturingError};

impl PasturingDomain {
    pub fn get_paddock(&self, id: PaddockId) -> Result<&Paddock, PasturingError> {
        self.paddocks
            .iter()
            .find(|paddock| paddock.id == id)
            .ok_or(PasturingError::PaddockIdNotFound { id })
    }

    pub fn get_paddock_mut(&mut self, id: PaddockId) -> Result<&mut Paddock, PasturingError> {
        self.paddocks
            .iter_mut()
            .find(|paddock| paddock.id == id)
            .ok_or(PasturingError::PaddockIdNotFound { id })
    }

    /// Case-insensitive; the most recently created paddock wins on duplicates.
    pub fn find_paddock(&self, name: &str) -> Result<&Paddock, PasturingError> {
        let name = name.to_lowercase();
        self.paddocks
            .iter()
            .rev()
            .find(|paddock| paddock.name == name)
            .ok_or(PasturingError::PaddockNotFound { name })
    }

    /// Zero based position in creation order.
    pub fn paddock_at(&self, index: usize) -> Result<&Paddock, PasturingError> {
        self.paddocks
            .get(index)
            .ok_or(PasturingError::PaddockIndexNotFound { index })
    }

    pub fn paddock_index(&self, id: PaddockId) -> Option<usize> {
        self.paddocks.iter().position(|paddock| paddock.id == id)
    }

    /// First paddock with a non-empty name, otherwise the first paddock.
    pub fn first_named_paddock(&self) -> Option<&Paddock> {
        self.paddocks
            .iter()
            .find(|paddock| !paddock.name.is_empty())
            .or_else(|| self.paddocks.first())
    }

    pub fn get_forage_mut(&mut self, id: ForageId) -> Result<&mut Forage, PasturingError> {
        self.paddocks
            .iter_mut()
            .flat_map(|paddock| paddock.forages.iter_mut())
            .find(|forage| forage.id == id)
            .ok_or(PasturingError::ForageNotFound { id })
    }

    pub fn total_area(&self) -> f64 {
        self.paddocks.iter().map(|paddock| paddock.area).sum()
    }
}
