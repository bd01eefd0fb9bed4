use datamap::{parse_json_value, Entry, JsonColumnError, JsonDeserializer};
use log::{error, info};
use serde_json::Value;

use crate::animals::{AnimalGroup, Genotype, GenotypeKey};
use crate::collections::{Dictionary, DictionaryError};
use crate::config::StockConfig;
use crate::math::Random;
use crate::pasturing::{Forage, ForageId, ForageRemoval, GrazingInputs, Paddock, PaddockId};
use crate::Stock;

#[derive(Default)]
pub struct Knowledge {
    pub genotypes: Dictionary<GenotypeKey, Genotype>,
}

impl<G: AnimalGroup> Stock<G> {
    /// Loads genotypes, paddocks with their forages and engine settings.
    pub fn load_knowledge(&mut self) -> Result<(), DataError> {
        info!("Begin stock knowledge loading");
        let genotypes = self
            .storage
            .find_all(|row| Self::load_genotype(row))
            .map_err(|error| {
                error!("Unable to load genotypes, {:?}", error);
                error
            })?;
        for genotype in genotypes {
            let name = genotype.name.clone();
            self.known.genotypes.insert(genotype.id, &name, genotype);
        }
        info!("Loaded {} genotypes", self.known.genotypes.len());

        let mut paddocks = self.storage.find_all(|row| Self::load_paddock(row))?;
        let mut forages = 0;
        for entry in self.storage.fetch_all::<Forage>()? {
            match Self::load_forage(&entry) {
                Ok((paddock, forage)) => {
                    match paddocks.iter_mut().find(|candidate| candidate.id == paddock) {
                        Some(paddock) => {
                            paddock.forages.push(forage);
                            forages += 1;
                        }
                        None => error!("Forage {:?} refers to unknown {:?}", forage.id, paddock),
                    }
                }
                Err(error) => error!("Unable to load forage, {:?}", error),
            }
        }
        info!("Loaded {} paddocks, {} forages", paddocks.len(), forages);
        self.pasturing.load_paddocks(paddocks);

        self.load_config()?;
        info!("End stock knowledge loading");
        Ok(())
    }

    fn load_config(&mut self) -> Result<(), DataError> {
        if !self.storage.has_table::<StockConfig>()? {
            return Ok(());
        }
        let entries = self.storage.fetch_all::<StockConfig>()?;
        let entry = match entries.first() {
            Some(entry) => entry,
            None => return Ok(()),
        };
        let mut config = self.config.clone();
        config.max_consumption = entry.get_or("max_consumption", config.max_consumption)?;
        config.epsilon = entry.get_or("epsilon", config.epsilon)?;
        config.min_step = entry.get_or("min_step", config.min_step)?;
        config.max_rdp_iterations =
            entry.get_or("max_rdp_iterations", config.max_rdp_iterations)?;
        config.weight_cv = entry.get_or("weight_cv", config.weight_cv)?;
        config.weight_steps = entry.get_or("weight_steps", config.weight_steps)?;
        config.seed = entry.get_or("seed", config.seed)?;
        config.reference_genotype =
            entry.get_or("reference_genotype", config.reference_genotype.clone())?;
        self.known.genotypes.find(&config.reference_genotype)?;
        info!("Loaded stock config {:?}", config);
        self.random = Random::with_seed(config.seed);
        self.config = config;
        Ok(())
    }

    pub(crate) fn load_genotype(row: &rusqlite::Row) -> Result<Genotype, DataError> {
        let animal: String = row.get("animal")?;
        let data = Genotype {
            id: GenotypeKey(row.get("id")?),
            name: row.get("name")?,
            animal: parse_json_value(Value::String(animal))?,
            srw: row.get("srw")?,
            birth_weight: row.get("birth_weight")?,
            growth: row.get_json("growth")?,
            male_srw_scalar: row.get("male_srw_scalar")?,
            castrate_srw_scalar: row.get("castrate_srw_scalar")?,
            intake_coef: row.get("intake_coef")?,
            grazing_coef: row.get("grazing_coef")?,
            maintenance_coef: row.get("maintenance_coef")?,
            gain_energy: row.get("gain_energy")?,
            rdp_requirement: row.get("rdp_requirement")?,
            wool_growth: row.get("wool_growth")?,
            mortality: row.get("mortality")?,
            young_mortality: row.get("young_mortality")?,
            puberty_days: row.get("puberty_days")?,
            gestation_days: row.get("gestation_days")?,
            lactation_days: row.get("lactation_days")?,
            conception_rate: row.get("conception_rate")?,
            litter_size: row.get("litter_size")?,
        };
        Ok(data)
    }

    pub(crate) fn load_paddock(row: &rusqlite::Row) -> Result<Paddock, DataError> {
        let name: String = row.get("name")?;
        let data = Paddock::new(
            PaddockId(row.get("id")?),
            &name,
            row.get("area")?,
            row.get("slope")?,
            row.get("waterlog")?,
        );
        Ok(data)
    }

    pub(crate) fn load_forage(entry: &Entry) -> Result<(PaddockId, Forage), DataError> {
        let paddock = PaddockId(entry.get("paddock")?);
        let data = Forage {
            id: ForageId(entry.get("id")?),
            name: entry.get_string("name")?.to_string(),
            available: GrazingInputs::default(),
            removal: ForageRemoval::default(),
        };
        Ok((paddock, data))
    }
}

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Sql(rusqlite::Error),
    Inconsistency(DictionaryError),
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<rusqlite::Error> for DataError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<JsonColumnError> for DataError {
    fn from(error: JsonColumnError) -> Self {
        match error {
            JsonColumnError::Sql(error) => Self::Sql(error),
            JsonColumnError::Json(error) => Self::Json(error),
        }
    }
}
