use crate::build::{self, Build};
use crate::cart::Cart;
use crate::catalog::{loader, Catalog, Category, Part};
use crate::compat;
use crate::config::Config;
use crate::error::{RigError, RigResult};
use crate::export;
use crate::scorer::{self, PerformanceScore, ScoreDetails};
use crate::shop::{self, CategoryFilter, Listing, Pager, SortMode};
use crate::storage::{FileStore, KeyValueStore, Theme};
use chrono::Local;
use tracing::info;

/// Everything one session works with: the loaded catalog, the build in
/// progress, and the persisted cart.
///
/// The build lives only as long as this value; the cart and theme go
/// through the store.
pub struct AppState<S: KeyValueStore = FileStore> {
    pub config: Config,
    pub catalog: Catalog,
    pub build: Build,
    pub cart: Cart,
    store: S,
}

impl AppState<FileStore> {
    /// Loads the catalog from `config.paths.data_dir` and opens the storage file.
    pub fn open(config: Config) -> RigResult<Self> {
        config.validate()?;
        info!("📂 Loading catalog from: {}", config.paths.data_dir.display());
        let pending = loader::spawn_load(config.paths.data_dir.clone());
        let store = FileStore::open(&config.paths.storage);
        let catalog = pending.wait()?;
        Ok(Self::with_store(config, catalog, store))
    }
}

impl<S: KeyValueStore> AppState<S> {
    pub fn with_store(config: Config, catalog: Catalog, store: S) -> Self {
        let cart = Cart::load(&store);
        Self {
            config,
            catalog,
            build: Build::new(),
            cart,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // === BUILD ===

    pub fn select(&mut self, category: Category, id: &str) -> RigResult<&Part> {
        self.build.select(&self.catalog, category, id)
    }

    /// Selects a part only if it passes every rule against the current build,
    /// the way the picker only ever offers compatible parts.
    pub fn select_compatible(&mut self, category: Category, id: &str) -> RigResult<&Part> {
        let part = self
            .catalog
            .find(category, id)
            .ok_or_else(|| RigError::PartNotFound {
                category: category.to_string(),
                id: id.to_string(),
            })?;
        if let Some(rule) = compat::failed_rules(category, part, &self.build).first() {
            return Err(RigError::Incompatible {
                category: category.to_string(),
                id: id.to_string(),
                rule: rule.name,
            });
        }
        self.build.select(&self.catalog, category, id)
    }

    pub fn remove(&mut self, category: Category) -> Option<Part> {
        self.build.remove(category)
    }

    /// Clears the build. The cart is untouched.
    pub fn reset_build(&mut self) -> bool {
        self.build.reset()
    }

    pub fn apply_prebuild(&mut self, id: &str) -> usize {
        build::apply_prebuild_from_dir(
            &mut self.build,
            &self.catalog,
            &self.config.paths.data_dir,
            id,
        )
    }

    pub fn compatible_parts(&self, category: Category) -> Vec<&Part> {
        compat::compatible_parts(category, self.catalog.parts(category), &self.build)
    }

    /// What the part picker lists: compatible parts, narrowed by name and sorted.
    pub fn part_choices(&self, category: Category, query: &str, sort: SortMode) -> Vec<&Part> {
        let mut parts: Vec<&Part> = self
            .compatible_parts(category)
            .into_iter()
            .filter(|p| shop::matches_query(p, query))
            .collect();
        shop::sort_parts(&mut parts, sort, |p| *p);
        parts
    }

    pub fn performance(&self) -> PerformanceScore {
        scorer::score(&self.build)
    }

    pub fn score_details(&self) -> ScoreDetails {
        scorer::score_debug(&self.build)
    }

    pub fn export(&self) -> RigResult<String> {
        export::export_build(&self.build, &Local::now())
    }

    // === SHOP ===

    pub fn shop(&self, filter: CategoryFilter, query: &str, sort: SortMode) -> Pager<Listing<'_>> {
        let listings = shop::search_and_sort(shop::products(&self.catalog, filter), query, sort);
        Pager::new(listings, self.config.shop.page_size)
    }

    // === CART ===

    pub fn add_to_cart(&mut self, category: Category, id: &str) -> RigResult<()> {
        let part = self
            .catalog
            .find(category, id)
            .cloned()
            .ok_or_else(|| RigError::PartNotFound {
                category: category.to_string(),
                id: id.to_string(),
            })?;
        self.cart.add(part, &mut self.store)
    }

    pub fn add_build_to_cart(&mut self) -> RigResult<usize> {
        self.cart.add_build(&self.build, &mut self.store)
    }

    pub fn remove_from_cart(&mut self, index: usize) -> RigResult<Option<Part>> {
        self.cart.remove(index, &mut self.store)
    }

    pub fn clear_cart(&mut self) -> RigResult<()> {
        self.cart.clear(&mut self.store)
    }

    // === THEME ===

    pub fn theme(&self) -> Theme {
        Theme::load(&self.store)
    }

    pub fn set_theme(&mut self, theme: Theme) -> RigResult<()> {
        theme.save(&mut self.store)
    }

    pub fn toggle_theme(&mut self) -> RigResult<Theme> {
        Theme::toggle(&mut self.store)
    }
}
