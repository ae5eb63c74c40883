//! Facet filters: category, price, size, certification and availability.

use std::collections::BTreeSet;
use std::fmt;

use crate::product::{Product, finite_or_zero};

/// Stock availability facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Any,
    InStock,
    Bulk,
}

impl Availability {
    /// Lenient parse; unknown values mean no restriction.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "inStock" | "in-stock" | "in_stock" => Availability::InStock,
            "bulk" => Availability::Bulk,
            _ => Availability::Any,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Any => "any",
            Availability::InStock => "inStock",
            Availability::Bulk => "bulk",
        }
    }

    pub fn admits(&self, product: &Product) -> bool {
        match self {
            Availability::Any => true,
            Availability::InStock => product.in_stock,
            Availability::Bulk => product.bulk_available,
        }
    }
}

/// Closed price interval; both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// A range with `min > max` is accepted and simply admits nothing.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// A non-finite price is treated as 0.
    pub fn contains(&self, price: f64) -> bool {
        let price = finite_or_zero(price);
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min.is_finite(), self.max.is_finite()) {
            (true, true) => write!(f, "₹{:.2} - ₹{:.2}", self.min, self.max),
            (true, false) => write!(f, "from ₹{:.2}", self.min),
            (false, true) => write!(f, "up to ₹{:.2}", self.max),
            (false, false) => f.write_str("any price"),
        }
    }
}

/// One removable constraint, as shown in the listing's active-filter bar.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveFilter {
    /// Free-text query; lives on the listing query, not on [`FilterState`].
    Search(String),
    Category(String),
    Size(String),
    Certification(String),
    PriceRange(PriceRange),
    Availability(Availability),
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveFilter::Search(query) => write!(f, "Search: \"{query}\""),
            ActiveFilter::Category(category) => f.write_str(category),
            ActiveFilter::Size(size) => write!(f, "Size: {size}"),
            ActiveFilter::Certification(certification) => write!(f, "Certified: {certification}"),
            ActiveFilter::PriceRange(range) => write!(f, "Price: {range}"),
            ActiveFilter::Availability(Availability::Any) => f.write_str("Any availability"),
            ActiveFilter::Availability(Availability::InStock) => f.write_str("In stock"),
            ActiveFilter::Availability(Availability::Bulk) => f.write_str("Bulk orders"),
        }
    }
}

/// The user's facet selection.
///
/// Owned by the UI layer; the engine only reads it. Sets are ordered so that
/// active filters enumerate deterministically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub categories: BTreeSet<String>,
    pub price_range: PriceRange,
    pub sizes: BTreeSet<String>,
    pub certifications: BTreeSet<String>,
    pub availability: Availability,
}

impl FilterState {
    /// Initial state for a listing whose price slider spans `price_range`.
    pub fn with_price_range(price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..Self::default()
        }
    }

    /// Returns `true` if the category is selected after the toggle.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        toggle(&mut self.categories, category)
    }

    pub fn toggle_size(&mut self, size: &str) -> bool {
        toggle(&mut self.sizes, size)
    }

    pub fn toggle_certification(&mut self, certification: &str) -> bool {
        toggle(&mut self.certifications, certification)
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) {
        self.price_range = price_range;
    }

    pub fn set_availability(&mut self, availability: Availability) {
        self.availability = availability;
    }

    /// Drop one active filter. Price and availability revert to `initial`;
    /// a search chip has nothing to drop here.
    pub fn remove(&mut self, filter: &ActiveFilter, initial: &FilterState) {
        match filter {
            ActiveFilter::Search(_) => {}
            ActiveFilter::Category(c) => {
                self.categories.remove(c);
            }
            ActiveFilter::Size(s) => {
                self.sizes.remove(s);
            }
            ActiveFilter::Certification(c) => {
                self.certifications.remove(c);
            }
            ActiveFilter::PriceRange(_) => self.price_range = initial.price_range,
            ActiveFilter::Availability(_) => self.availability = initial.availability,
        }
    }

    pub fn clear(&mut self, initial: &FilterState) {
        *self = initial.clone();
    }

    /// Constraints that differ from `initial`, in facet order.
    pub fn active_filters(&self, initial: &FilterState) -> Vec<ActiveFilter> {
        let mut active: Vec<ActiveFilter> = Vec::new();
        active.extend(self.categories.iter().cloned().map(ActiveFilter::Category));
        if self.price_range != initial.price_range {
            active.push(ActiveFilter::PriceRange(self.price_range));
        }
        active.extend(self.sizes.iter().cloned().map(ActiveFilter::Size));
        active.extend(
            self.certifications
                .iter()
                .cloned()
                .map(ActiveFilter::Certification),
        );
        if self.availability != initial.availability {
            active.push(ActiveFilter::Availability(self.availability));
        }
        active
    }

    pub fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(product.price)
    }

    /// Match-any: one shared size is enough.
    pub fn matches_sizes(&self, product: &Product) -> bool {
        self.sizes.is_empty() || self.sizes.iter().any(|s| product.has_size(s))
    }

    /// Match-all: every selected certification must be present.
    pub fn matches_certifications(&self, product: &Product) -> bool {
        self.certifications
            .iter()
            .all(|c| product.has_certification(c))
    }

    /// Conjunction of every facet, evaluated in pipeline order.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_price(product)
            && self.matches_sizes(product)
            && self.matches_certifications(product)
            && self.availability.admits(product)
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}
