// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! TOML mission catalogs.
//!
//! A catalog is a list of `[[mission]]` tables:
//!
//! ```toml
//! [[mission]]
//! name = "InSight"
//! landing_site = "Elysium Planitia"
//! landing_date = "2018-330T19:44:52.444"
//! solorigin = "2018-330T05:10:50.3356"
//! sol_origin_ref = 0
//! longitude = 224.03
//! latitude = 4.502384
//! ```
//!
//! `landing_site`, `sol_origin_ref` and `latitude` are optional.  Every
//! record is validated through [`MissionConfig`]; the first bad record
//! aborts the load.
//!
//! A path may also name a directory, in which case every `*.toml` file in it
//! is read in lexical order.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use super::error::{MarsTimeError, Result};
use super::mission::{parse_date, MissionConfig};

/// Catalog label used in errors that are not tied to one mission.
const CATALOG: &str = "<catalog>";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    mission: Vec<MissionRecord>,
}

#[derive(Debug, Deserialize)]
struct MissionRecord {
    name: Option<String>,
    #[serde(default)]
    landing_site: Option<String>,
    landing_date: Option<String>,
    #[serde(alias = "origin_date")]
    solorigin: Option<String>,
    #[serde(default)]
    sol_origin_ref: i64,
    longitude: Option<f64>,
    #[serde(default)]
    latitude: f64,
}

impl MissionRecord {
    fn into_config(self, index: usize) -> Result<MissionConfig> {
        let name = self
            .name
            .ok_or_else(|| MarsTimeError::config(format!("#{index}"), "missing field 'name'"))?;
        let missing =
            |field: &str| MarsTimeError::config(&name, format!("missing field '{field}'"));

        let longitude = self.longitude.ok_or_else(|| missing("longitude"))?;
        let landing = self.landing_date.ok_or_else(|| missing("landing_date"))?;
        let origin = self.solorigin.ok_or_else(|| missing("solorigin"))?;

        let landing = parse_date(&name, "landing_date", &landing)?;
        let origin = parse_date(&name, "solorigin", &origin)?;

        let mut config = MissionConfig::new(name, longitude, self.latitude, landing, origin)?
            .with_sol_origin_ref(self.sol_origin_ref)?;
        if let Some(site) = self.landing_site {
            config = config.with_landing_site(site);
        }
        Ok(config)
    }
}

/// Validated missions, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionCatalog {
    missions: Vec<MissionConfig>,
}

impl MissionCatalog {
    /// Parse and validate a catalog held in memory.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)
            .map_err(|e| MarsTimeError::config(CATALOG, format!("invalid TOML: {e}")))?;
        let missions = file
            .mission
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_config(i))
            .collect::<Result<Vec<_>>>()?;
        for m in &missions {
            debug!("mission '{}' at longitude {}", m.name(), m.longitude());
        }
        Ok(Self { missions })
    }

    /// Find a mission by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&MissionConfig> {
        self.missions
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.missions.iter().map(MissionConfig::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MissionConfig> {
        self.missions.iter()
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    pub fn into_vec(self) -> Vec<MissionConfig> {
        self.missions
    }
}

impl IntoIterator for MissionCatalog {
    type Item = MissionConfig;
    type IntoIter = std::vec::IntoIter<MissionConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.missions.into_iter()
    }
}

/// Load every mission from a TOML file or a directory of TOML files.
pub fn load_missions<P: AsRef<Path>>(path: P) -> Result<MissionCatalog> {
    let path = path.as_ref();
    let catalog = if path.is_dir() {
        let mut entries: Vec<PathBuf> = std::fs::read_dir(path)
            .map_err(|e| io_error(path, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().map(|ext| ext == "toml").unwrap_or(false))
            .collect();
        entries.sort();
        let mut missions = Vec::new();
        for entry in entries {
            missions.extend(read_file(&entry)?);
        }
        MissionCatalog { missions }
    } else {
        read_file(path)?
    };
    info!(
        "loaded {} mission(s) from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Load one named mission from a catalog path.
pub fn load_mission<P: AsRef<Path>>(path: P, name: &str) -> Result<MissionConfig> {
    let catalog = load_missions(path.as_ref())?;
    catalog.get(name).cloned().ok_or_else(|| {
        MarsTimeError::config(
            name,
            format!("not found in {}", path.as_ref().display()),
        )
    })
}

fn read_file(path: &Path) -> Result<MissionCatalog> {
    debug!("reading mission catalog {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    MissionCatalog::from_toml_str(&contents)
}

fn io_error(path: &Path, err: std::io::Error) -> MarsTimeError {
    MarsTimeError::config(CATALOG, format!("cannot read {}: {err}", path.display()))
}
