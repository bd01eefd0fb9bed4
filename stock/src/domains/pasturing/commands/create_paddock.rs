use crate::pasturing::Pasturing::PaddockCreated;
use crate::pasturing::{Paddock, PaddockId, Pasturing, PasturingDomain, PasturingError};

impl PasturingDomain {
    pub fn create_paddock(
        &mut self,
        name: &str,
        area: f64,
        slope: f64,
        waterlog: f64,
    ) -> Result<(PaddockId, impl FnOnce() -> Vec<Pasturing> + '_), PasturingError> {
        if self.find_paddock(name).is_ok() {
            return Err(PasturingError::PaddockAlreadyExists {
                name: name.to_string(),
            });
        }
        let id = self.paddocks_id.peek(PaddockId);
        let paddock = Paddock::new(id, name, area, slope, waterlog.clamp(0.0, 1.0));
        let command = move || {
            self.paddocks_id.register(id.0);
            let event = PaddockCreated {
                id,
                name: paddock.name.clone(),
                area: paddock.area,
            };
            self.paddocks.push(paddock);
            vec![event]
        };
        Ok((id, command))
    }
}
