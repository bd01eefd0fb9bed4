use crate::animals::{
    condition_from_score, AnimalError, AnimalGroup, AnimalInits, Genotype, PurchaseInfo,
};
use crate::api::{Event, StockError};
use crate::collections::Shared;
use crate::occur;
use crate::pasturing::{PaddockId, PasturingError};
use crate::Stock;

const WEIGHT_TOLERANCE: f64 = 1.0e-6;

impl<G: AnimalGroup> Stock<G> {
    pub fn find_genotype(&self, name: &str) -> Result<Shared<Genotype>, AnimalError> {
        self.known
            .genotypes
            .find(name)
            .map_err(|_| AnimalError::GenotypeNotFound {
                name: name.to_string(),
            })
    }

    /// Appends a group and stages its forage; returns the new 1-based index.
    pub fn add(
        &mut self,
        group: G,
        paddock: &str,
        tag: i32,
        priority: i32,
    ) -> Result<(usize, Vec<Event>), StockError> {
        let paddock = self.paddock_or_first(paddock)?;
        let (index, added) = self.raising.add_group(group, paddock, tag, priority);
        self.stage_slot(index - 1);
        Ok((index, occur![added]))
    }

    pub fn add_from_inits(&mut self, inits: &AnimalInits) -> Result<(usize, Vec<Event>), StockError> {
        let group = self.create_group(inits)?;
        self.add(group, &inits.paddock, inits.tag, inits.priority)
    }

    /// Buys animals into the first named paddock. A condition score given
    /// together with a live weight must be attainable at that weight.
    pub fn buy(&mut self, purchase: &PurchaseInfo) -> Result<(usize, Vec<Event>), StockError> {
        let genotype = self.find_genotype(&purchase.inits.genotype)?;
        let condition = if purchase.condition_score > 0.0 {
            condition_from_score(purchase.condition_score)
        } else {
            1.0
        };
        let mut inits = purchase.inits.clone();
        if inits.weight <= 0.0 {
            let fleece = if genotype.has_wool() {
                inits.fleece_weight.max(0.0)
            } else {
                0.0
            };
            inits.weight = genotype.growth_curve(inits.age_days, inits.sex) * condition + fleece;
        }
        let mut group = self.create_group(&inits)?;
        if purchase.condition_score > 0.0 {
            let (low, high) = group.weight_range_for_condition(condition);
            let base_weight = group.base_weight();
            if base_weight < low - WEIGHT_TOLERANCE || base_weight > high + WEIGHT_TOLERANCE {
                return Err(AnimalError::InfeasiblePurchase {
                    condition_score: purchase.condition_score,
                    low,
                    high,
                }
                .into());
            }
            group.set_condition_at_weight(condition);
        }
        let paddock = self
            .pasturing
            .first_named_paddock()
            .map(|paddock| paddock.name.clone())
            .unwrap_or_default();
        self.add(group, &paddock, inits.tag, 0)
    }

    fn create_group(&self, inits: &AnimalInits) -> Result<G, StockError> {
        let genotype = self.find_genotype(&inits.genotype)?;
        let mated_to = if inits.mated_to.is_empty() {
            None
        } else {
            Some(self.find_genotype(&inits.mated_to)?)
        };
        Ok(G::create(genotype, mated_to, inits)?)
    }

    fn paddock_or_first(&self, name: &str) -> Result<PaddockId, PasturingError> {
        match self.pasturing.find_paddock(name) {
            Ok(paddock) => Ok(paddock.id),
            Err(error) => self
                .pasturing
                .paddocks
                .first()
                .map(|paddock| paddock.id)
                .ok_or(error),
        }
    }
}
