use crate::pasturing::{
    ForageRemoval, GrazingInputs, Herbage, RationItem, Supplement, SupplementRation, DIG_CLASSES,
};

fn weight_average(x: f64, x_weight: f64, y: f64, y_weight: f64) -> f64 {
    if x_weight + y_weight > 0.0 {
        (x * x_weight + y * y_weight) / (x_weight + y_weight)
    } else {
        0.0
    }
}

impl Herbage {
    /// Accumulates biomass while keeping quality attributes as biomass weighted means.
    /// Degradability is weighted by protein mass.
    pub fn absorb(&mut self, part: &Herbage) {
        self.degradability = weight_average(
            self.degradability,
            self.biomass * self.crude_protein,
            part.degradability,
            part.biomass * part.crude_protein,
        );
        self.digestibility = weight_average(
            self.digestibility,
            self.biomass,
            part.digestibility,
            part.biomass,
        );
        self.crude_protein = weight_average(
            self.crude_protein,
            self.biomass,
            part.crude_protein,
            part.biomass,
        );
        self.biomass += part.biomass;
    }
}

impl GrazingInputs {
    pub fn with_herbage(herbage: [Herbage; DIG_CLASSES]) -> Self {
        Self {
            herbage,
            seeds: vec![],
        }
    }

    pub fn herbage_biomass(&self) -> f64 {
        self.herbage.iter().map(|class| class.biomass).sum()
    }

    /// Adds inputs of one forage into paddock-wide inputs. Seeds of the forage
    /// keep their own slot so that removal can be traced back.
    pub fn add(&mut self, forage_index: usize, part: &GrazingInputs) {
        for class in 0..DIG_CLASSES {
            self.herbage[class].absorb(&part.herbage[class]);
        }
        if self.seeds.len() <= forage_index {
            self.seeds.resize(forage_index + 1, [Herbage::default(); 2]);
        }
        if let Some(seeds) = part.seeds.first() {
            for ripeness in 0..2 {
                self.seeds[forage_index][ripeness].absorb(&seeds[ripeness]);
            }
        }
    }

    /// Sum of the given forage inputs, one seed pool per forage.
    pub fn total<'a>(inputs: impl Iterator<Item = &'a GrazingInputs>) -> GrazingInputs {
        let mut total = GrazingInputs::default();
        for (index, part) in inputs.enumerate() {
            total.add(index, part);
        }
        total
    }
}

impl ForageRemoval {
    pub fn herbage_total(&self) -> f64 {
        self.herbage.iter().sum()
    }

    pub fn seeds_total(&self) -> f64 {
        self.seeds.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.herbage_total() <= 0.0 && self.seeds_total() <= 0.0
    }
}

impl SupplementRation {
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Merges into an existing item of the same supplement, otherwise appends.
    pub fn feed(&mut self, supplement: Supplement, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        match self
            .items
            .iter_mut()
            .find(|item| item.supplement == supplement)
        {
            Some(item) => item.amount += amount,
            None => self.items.push(RationItem { supplement, amount }),
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Amount weighted mean composition of the ration.
    pub fn average(&self) -> Supplement {
        let total = self.total_amount();
        if total <= 0.0 {
            return Supplement::default();
        }
        let mut average = Supplement {
            name: String::from("ration"),
            digestibility: 0.0,
            crude_protein: 0.0,
            degradability: 0.0,
        };
        for item in &self.items {
            let share = item.amount / total;
            average.digestibility += share * item.supplement.digestibility;
            average.crude_protein += share * item.supplement.crude_protein;
            average.degradability += share * item.supplement.degradability;
        }
        if self.items.len() == 1 {
            average.name = self.items[0].supplement.name.clone();
        }
        average
    }
}
