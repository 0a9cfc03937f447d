pub mod loader;

use crate::error::{RigError, RigResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Hardware kinds, declared in display order. `Ord` follows this order,
/// so ordered maps keyed by `Category` iterate the way the builder lists them.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Motherboard,
    Gpu,
    Ram,
    Storage,
    Psu,
    Case,
    Cooler,
    Monitor,
    Keyboard,
    Mouse,
    Headphones,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub category: Category,
    pub name: &'static str,
    pub icon: &'static str,
    pub file: &'static str,
}

const CATEGORY_TABLE: [CategoryInfo; 12] = [
    CategoryInfo { category: Category::Cpu, name: "CPU", icon: "fa-microchip", file: "cpus.json" },
    CategoryInfo { category: Category::Motherboard, name: "Motherboard", icon: "fa-server", file: "motherboards.json" },
    CategoryInfo { category: Category::Gpu, name: "Graphics Card", icon: "fa-gamepad", file: "gpus.json" },
    CategoryInfo { category: Category::Ram, name: "Memory", icon: "fa-memory", file: "ram.json" },
    CategoryInfo { category: Category::Storage, name: "Storage", icon: "fa-hdd", file: "storage.json" },
    CategoryInfo { category: Category::Psu, name: "Power Supply", icon: "fa-plug", file: "psu.json" },
    CategoryInfo { category: Category::Case, name: "Case", icon: "fa-box", file: "cases.json" },
    CategoryInfo { category: Category::Cooler, name: "CPU Cooler", icon: "fa-fan", file: "cooler.json" },
    CategoryInfo { category: Category::Monitor, name: "Monitor", icon: "fa-desktop", file: "monitor.json" },
    CategoryInfo { category: Category::Keyboard, name: "Keyboard", icon: "fa-keyboard", file: "keyboard.json" },
    CategoryInfo { category: Category::Mouse, name: "Mouse", icon: "fa-mouse", file: "mouse.json" },
    CategoryInfo { category: Category::Headphones, name: "Headphones", icon: "fa-headphones", file: "headphones.json" },
];

impl Category {
    pub fn info(&self) -> &'static CategoryInfo {
        // Table rows are declared in enum order.
        &CATEGORY_TABLE[*self as usize]
    }

    pub fn display_name(&self) -> &'static str {
        self.info().name
    }

    pub fn file_name(&self) -> &'static str {
        self.info().file
    }

    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }

    /// Parses a category id, mapping failure onto the crate error.
    pub fn parse(id: &str) -> RigResult<Self> {
        Category::from_str(id.trim()).map_err(|_| RigError::UnknownCategory(id.to_string()))
    }
}

/// One catalog entry. Only `id` and `name` are required; every attribute a
/// category doesn't use is simply absent. Unknown JSON fields are kept in
/// `extra` so a part survives a cart round-trip intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_type: Option<String>,
    /// Memory generation on RAM kits (`"type"` in the catalog files).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost_clock: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vram: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_gpu_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Part {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Price with "missing" read as zero, used for totals and sorting.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Reads a numeric attribute where absent or zero both mean "use the default".
pub fn attr_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => default,
    }
}

/// Reads a text attribute where an empty string counts as absent.
pub fn text_attr(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// In-memory catalog: one ordered list of parts per category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    parts: BTreeMap<Category, Vec<Part>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, parts: Vec<Part>) {
        self.parts.insert(category, parts);
    }

    pub fn with(mut self, category: Category, parts: Vec<Part>) -> Self {
        self.insert(category, parts);
        self
    }

    /// Parts for a category; an unloaded category reads as empty.
    pub fn parts(&self, category: Category) -> &[Part] {
        self.parts.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find(&self, category: Category, id: &str) -> Option<&Part> {
        self.parts(category).iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.parts.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn categories_loaded(&self) -> usize {
        self.parts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_match_enum_order() {
        for cat in Category::iter() {
            assert_eq!(cat.info().category, cat);
        }
        assert_eq!(Category::Gpu.display_name(), "Graphics Card");
        assert_eq!(Category::Ram.file_name(), "ram.json");
    }

    #[test]
    fn parse_accepts_ids_and_rejects_unknown() {
        assert_eq!(Category::parse("cpu").unwrap(), Category::Cpu);
        assert_eq!(Category::parse("Motherboard").unwrap(), Category::Motherboard);
        assert!(matches!(
            Category::parse("fan"),
            Err(RigError::UnknownCategory(_))
        ));
    }

    #[test]
    fn attr_or_treats_zero_as_missing() {
        assert_eq!(attr_or(None, 4.0), 4.0);
        assert_eq!(attr_or(Some(0.0), 4.0), 4.0);
        assert_eq!(attr_or(Some(8.0), 4.0), 8.0);
    }

    #[test]
    fn part_keeps_unknown_fields() {
        let json = r#"{"id":"c1","name":"Chip","price":1000,"tdp":65,"type":"DDR4"}"#;
        let part: Part = serde_json::from_str(json).unwrap();
        assert_eq!(part.kind.as_deref(), Some("DDR4"));
        assert_eq!(part.extra.get("tdp"), Some(&Value::from(65)));

        let back: Part = serde_json::from_str(&serde_json::to_string(&part).unwrap()).unwrap();
        assert_eq!(back, part);
    }
}
