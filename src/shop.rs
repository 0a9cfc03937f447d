//! Storefront listing: category views, search, sort and pagination.

use crate::catalog::{Catalog, Category, Part};
use crate::error::RigResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{Display, EnumString};

pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Most page buttons shown at once.
pub const MAX_VISIBLE_PAGES: usize = 7;
pub const NO_RESULTS: &str = "No products found.";

/// A part as the shop shows it, tagged with its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Listing<'a> {
    pub category: Category,
    pub part: &'a Part,
}

impl Listing<'_> {
    pub fn category_name(&self) -> &'static str {
        self.category.display_name()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

/// Which slice of the catalog the shop is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(id: &str) -> RigResult<Self> {
        if id.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Category::parse(id).map(Self::Only)
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::Only(c) => c.display_name(),
        }
    }
}

/// Every part, category by category in table order.
pub fn all_products(catalog: &Catalog) -> Vec<Listing<'_>> {
    Category::all()
        .flat_map(|category| {
            catalog
                .parts(category)
                .iter()
                .map(move |part| Listing { category, part })
        })
        .collect()
}

pub fn category_products(catalog: &Catalog, category: Category) -> Vec<Listing<'_>> {
    catalog
        .parts(category)
        .iter()
        .map(|part| Listing { category, part })
        .collect()
}

pub fn products(catalog: &Catalog, filter: CategoryFilter) -> Vec<Listing<'_>> {
    match filter {
        CategoryFilter::All => all_products(catalog),
        CategoryFilter::Only(category) => category_products(catalog, category),
    }
}

/// Case-insensitive name match; an empty query matches everything.
/// Whitespace in the query is significant.
pub fn matches_query(part: &Part, query: &str) -> bool {
    query.is_empty() || part.name.to_lowercase().contains(&query.to_lowercase())
}

fn price_order(a: &Part, b: &Part) -> Ordering {
    a.price_or_zero()
        .partial_cmp(&b.price_or_zero())
        .unwrap_or(Ordering::Equal)
}

/// Stable sort; missing prices count as zero.
pub fn sort_parts<T>(items: &mut [T], mode: SortMode, part_of: impl Fn(&T) -> &Part) {
    match mode {
        SortMode::Default => {}
        SortMode::PriceAsc => items.sort_by(|a, b| price_order(part_of(a), part_of(b))),
        SortMode::PriceDesc => items.sort_by(|a, b| price_order(part_of(b), part_of(a))),
    }
}

pub fn search_and_sort<'a>(
    mut listings: Vec<Listing<'a>>,
    query: &str,
    sort: SortMode,
) -> Vec<Listing<'a>> {
    listings.retain(|l| matches_query(l.part, query));
    sort_parts(&mut listings, sort, |l| l.part);
    listings
}

/// Page-button model for the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub pages: Vec<usize>,
    pub current: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Current product list plus the page being viewed (1-based).
#[derive(Debug, Clone)]
pub struct Pager<T> {
    items: Vec<T>,
    current: usize,
    page_size: usize,
}

impl<T> Pager<T> {
    /// Starts at page 1, as every new product list does.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            current: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current = 1;
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_items(&self) -> &[T] {
        let start = (self.current - 1) * self.page_size;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Moves to `page` if it exists. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current = page;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.current > 1 && self.go_to(self.current - 1)
    }

    /// `None` when everything fits on one page.
    pub fn controls(&self) -> Option<PageControls> {
        let total = self.total_pages();
        if total <= 1 {
            return None;
        }
        Some(PageControls {
            pages: page_window(self.current, total).collect(),
            current: self.current,
            prev_disabled: self.current == 1,
            next_disabled: self.current == total,
        })
    }
}

/// Page numbers to show, centred on `current` where possible.
pub fn page_window(current: usize, total: usize) -> std::ops::RangeInclusive<usize> {
    if total <= MAX_VISIBLE_PAGES {
        return 1..=total;
    }
    let half = MAX_VISIBLE_PAGES / 2;
    if current <= half + 1 {
        1..=MAX_VISIBLE_PAGES
    } else if current + half >= total {
        (total - MAX_VISIBLE_PAGES + 1)..=total
    } else {
        (current - half)..=(current + half)
    }
}
