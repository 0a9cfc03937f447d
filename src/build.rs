use crate::catalog::{Catalog, Category, Part};
use crate::error::{RigError, RigResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, error, warn};

pub const PREBUILDS_FILE: &str = "prebuilds.json";

/// The in-progress selection: at most one part per category.
///
/// Parts are copied in from the catalog. Compatibility is not re-checked
/// here; callers pick from `compat::compatible_parts` instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Build {
    parts: BTreeMap<Category, Part>,
}

impl Build {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> Option<&Part> {
        self.parts.get(&category)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.parts.contains_key(&category)
    }

    /// Puts `part` in its slot, returning whatever was there before.
    pub fn set(&mut self, category: Category, part: Part) -> Option<Part> {
        self.parts.insert(category, part)
    }

    /// Looks `id` up in the catalog and selects it.
    pub fn select(&mut self, catalog: &Catalog, category: Category, id: &str) -> RigResult<&Part> {
        let part = catalog
            .find(category, id)
            .ok_or_else(|| RigError::PartNotFound {
                category: category.to_string(),
                id: id.to_string(),
            })?
            .clone();
        self.parts.insert(category, part);
        Ok(&self.parts[&category])
    }

    pub fn remove(&mut self, category: Category) -> Option<Part> {
        self.parts.remove(&category)
    }

    /// Clears every slot. Returns false when there was nothing to clear.
    pub fn reset(&mut self) -> bool {
        if self.parts.is_empty() {
            return false;
        }
        self.parts.clear();
        true
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Selected parts in category order.
    pub fn selected(&self) -> impl Iterator<Item = (Category, &Part)> {
        self.parts.iter().map(|(c, p)| (*c, p))
    }

    pub fn total_price(&self) -> f64 {
        self.parts.values().map(Part::price_or_zero).sum()
    }

    /// Filtering keeps incompatible parts out of a build, so any build
    /// assembled through it reports as compatible.
    pub fn compatibility_status(&self) -> &'static str {
        "Compatible"
    }

    /// Fills slots from a prebuild's `category -> part id` map.
    /// Unknown categories and ids are skipped. Returns how many slots were set.
    pub fn apply_prebuild(&mut self, catalog: &Catalog, prebuild: &Prebuild) -> usize {
        let mut applied = 0;
        for (category_id, part_id) in &prebuild.specs {
            let Ok(category) = Category::parse(category_id) else {
                debug!("Prebuild '{}' names unknown category '{}'", prebuild.id, category_id);
                continue;
            };
            match catalog.find(category, part_id) {
                Some(part) => {
                    self.parts.insert(category, part.clone());
                    applied += 1;
                }
                None => debug!(
                    "Prebuild '{}' references missing {} '{}'",
                    prebuild.id, category, part_id
                ),
            }
        }
        applied
    }
}

/// A shareable preset build, as stored in `prebuilds.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prebuild {
    pub id: String,
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
}

pub fn load_prebuilds<P: AsRef<Path>>(path: P) -> RigResult<Vec<Prebuild>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Resolves a prebuild id against `prebuilds.json` in `data_dir` and
/// applies it. Load failures and unknown ids are logged and leave the
/// build untouched.
pub fn apply_prebuild_from_dir<P: AsRef<Path>>(
    build: &mut Build,
    catalog: &Catalog,
    data_dir: P,
    id: &str,
) -> usize {
    let path = data_dir.as_ref().join(PREBUILDS_FILE);
    let prebuilds = match load_prebuilds(&path) {
        Ok(p) => p,
        Err(e) => {
            error!("Error loading prebuild: {}", e);
            return 0;
        }
    };

    match prebuilds.iter().find(|p| p.id == id) {
        Some(prebuild) => build.apply_prebuild(catalog, prebuild),
        None => {
            warn!("Prebuild '{}' not found in {}", id, path.display());
            0
        }
    }
}
