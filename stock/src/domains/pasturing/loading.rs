use crate::pasturing::{Paddock, PasturingDomain};

impl PasturingDomain {
    pub fn load_paddocks(&mut self, paddocks: Vec<Paddock>) {
        for paddock in paddocks {
            self.paddocks_id.register(paddock.id.0);
            for forage in &paddock.forages {
                self.forages_id.register(forage.id.0);
            }
            self.paddocks.push(paddock);
        }
    }
}
