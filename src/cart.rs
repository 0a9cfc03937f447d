use crate::build::Build;
use crate::catalog::Part;
use crate::error::{RigError, RigResult};
use crate::storage::{KeyValueStore, CART_KEY};
use tracing::{error, info};

/// Ordered list of part copies. Adding the same part twice gives two
/// entries; there is no quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<Part>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Part>) -> Self {
        Self { items }
    }

    /// Reads the saved cart. Corrupt data is logged and yields an empty cart.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(saved) = store.get(CART_KEY) else {
            return Self::new();
        };
        match Self::from_json(&saved) {
            Ok(cart) => cart,
            Err(e) => {
                error!("Failed to parse cart: {}", e);
                Self::new()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> RigResult<()> {
        store.set(CART_KEY, &self.to_json()?)
    }

    pub fn to_json(&self) -> RigResult<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    pub fn from_json(json: &str) -> RigResult<Self> {
        Ok(Self {
            items: serde_json::from_str(json)?,
        })
    }

    pub fn add(&mut self, part: Part, store: &mut dyn KeyValueStore) -> RigResult<()> {
        info!("{} added to cart!", part.name);
        self.items.push(part);
        self.save(store)
    }

    /// Appends every selected part of `build`, in category order.
    pub fn add_build(&mut self, build: &Build, store: &mut dyn KeyValueStore) -> RigResult<usize> {
        if build.is_empty() {
            return Err(RigError::EmptyBuild);
        }
        self.items
            .extend(build.selected().map(|(_, part)| part.clone()));
        self.save(store)?;
        Ok(build.len())
    }

    /// Removes the entry at `index`; out of range leaves the cart as is.
    pub fn remove(&mut self, index: usize, store: &mut dyn KeyValueStore) -> RigResult<Option<Part>> {
        if index >= self.items.len() {
            return Ok(None);
        }
        let removed = self.items.remove(index);
        self.save(store)?;
        Ok(Some(removed))
    }

    pub fn clear(&mut self, store: &mut dyn KeyValueStore) -> RigResult<()> {
        self.items.clear();
        self.save(store)
    }

    pub fn items(&self) -> &[Part] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count for the cart badge, `None` when the badge is hidden.
    pub fn badge(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.items.len())
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(Part::price_or_zero).sum()
    }
}
