/*
Genetics, a toy model of DNA strand manipulation.
    Copyright (C) 2021  Nicolas Levy <nicolaspierrelevy@gmail.com> and Nicolas Schabanel <nicolas.schabanel@ens-lyon.fr>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
//! A named collection of restriction enzymes.
//!
//! The default catalogue holds a few common enzymes. Other catalogues can be read from a json
//! file of the form
//! ```json
//! {"enzymes": [{"name": "EcoRI", "site": "GAATTC", "cut": 1}]}
//! ```

use super::{EnzymeDescriptor, ErrStrand, RestrictionEnzyme};
use std::collections::BTreeMap;
use std::path::Path;

/// Common enzymes as (name, recognition site, cut offset on the leading strand).
const COMMON_ENZYMES: &[(&str, &str, usize)] = &[
    ("EcoRI", "GAATTC", 1),
    ("BamHI", "GGATCC", 1),
    ("HindIII", "AAGCTT", 1),
    ("XhoI", "CTCGAG", 1),
    ("SalI", "GTCGAC", 1),
    ("XbaI", "TCTAGA", 1),
    ("NotI", "GCGGCCGC", 2),
    ("NdeI", "CATATG", 2),
    ("KpnI", "GGTACC", 5),
    ("SacI", "GAGCTC", 5),
    ("PstI", "CTGCAG", 5),
    ("SphI", "GCATGC", 5),
    ("EcoRV", "GATATC", 3),
    ("SmaI", "CCCGGG", 3),
    ("HpaI", "GTTAAC", 3),
];

#[derive(Debug)]
pub enum CatalogueError {
    IOError(std::io::Error),
    JsonError(serde_json::Error),
    Enzyme { name: String, error: ErrStrand },
    UnknownEnzyme(String),
}

impl From<std::io::Error> for CatalogueError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e)
    }
}

impl From<serde_json::Error> for CatalogueError {
    fn from(e: serde_json::Error) -> Self {
        Self::JsonError(e)
    }
}

impl std::fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IOError(e) => write!(f, "Could not read catalogue: {}", e),
            Self::JsonError(e) => write!(f, "Could not parse catalogue: {}", e),
            Self::Enzyme { name, error } => write!(f, "Enzyme {}: {}", name, error),
            Self::UnknownEnzyme(name) => write!(f, "Unknown enzyme {}", name),
        }
    }
}

impl std::error::Error for CatalogueError {}

#[derive(Deserialize, Serialize)]
struct CatalogueFile {
    enzymes: Vec<CatalogueEntry>,
}

#[derive(Deserialize, Serialize)]
struct CatalogueEntry {
    name: String,
    #[serde(flatten)]
    enzyme: EnzymeDescriptor,
}

/// Restriction enzymes indexed by their name. Names are case insensitive.
#[derive(Clone, Debug)]
pub struct EnzymeCatalogue {
    enzymes: BTreeMap<String, (String, RestrictionEnzyme)>,
}

impl EnzymeCatalogue {
    pub fn new() -> Self {
        Self {
            enzymes: BTreeMap::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        let file: CatalogueFile = serde_json::from_str(json)?;
        let mut ret = Self::new();
        for entry in file.enzymes {
            let enzyme = RestrictionEnzyme::try_from(entry.enzyme).map_err(|error| {
                CatalogueError::Enzyme {
                    name: entry.name.clone(),
                    error,
                }
            })?;
            if ret.insert(&entry.name, enzyme).is_some() {
                log::warn!("Enzyme {} is defined more than once", entry.name);
            }
        }
        Ok(ret)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogueError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::info!("Reading enzyme catalogue {}", path.as_ref().to_string_lossy());
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, CatalogueError> {
        let file = CatalogueFile {
            enzymes: self
                .iter()
                .map(|(name, enzyme)| CatalogueEntry {
                    name: name.to_string(),
                    enzyme: enzyme.clone().into(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Add an enzyme to the catalogue, returning the enzyme that had the same name if any.
    pub fn insert(&mut self, name: &str, enzyme: RestrictionEnzyme) -> Option<RestrictionEnzyme> {
        self.enzymes
            .insert(name.to_lowercase(), (name.to_string(), enzyme))
            .map(|(_, e)| e)
    }

    pub fn get(&self, name: &str) -> Option<&RestrictionEnzyme> {
        self.enzymes.get(&name.to_lowercase()).map(|(_, e)| e)
    }

    pub fn require(&self, name: &str) -> Result<&RestrictionEnzyme, CatalogueError> {
        self.get(name)
            .ok_or_else(|| CatalogueError::UnknownEnzyme(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.enzymes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enzymes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RestrictionEnzyme)> {
        self.enzymes.values().map(|(name, e)| (name.as_str(), e))
    }
}

impl Default for EnzymeCatalogue {
    fn default() -> Self {
        let mut ret = Self::new();
        for (name, site, cut) in COMMON_ENZYMES {
            match RestrictionEnzyme::from_text(site, *cut) {
                Ok(enzyme) => {
                    ret.insert(name, enzyme);
                }
                Err(e) => log::error!("Could not add {} to the catalogue: {}", name, e),
            }
        }
        ret
    }
}
