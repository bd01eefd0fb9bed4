use crate::pasturing::Pasturing::TimeStepStarted;
use crate::pasturing::{Pasturing, PasturingDomain};

impl PasturingDomain {
    /// Removes yesterday's supplement and zeroes every removal accumulator.
    pub fn begin_time_step(&mut self) -> Vec<Pasturing> {
        for paddock in self.paddocks.iter_mut() {
            paddock.supplement.clear();
        }
        let ids: Vec<_> = self.paddocks.iter().map(|paddock| paddock.id).collect();
        for id in ids {
            self.zero_removal(id);
        }
        vec![TimeStepStarted {
            paddocks: self.paddocks.len(),
        }]
    }
}
