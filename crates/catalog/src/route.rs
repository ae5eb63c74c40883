//! Hash routes and category slugs.
//!
//! The storefront navigates with hash paths such as `#/category/back-and-posture`
//! or `#/product/12`. [`Route::parse`] turns such a path into a tagged route;
//! category listings carry the display category they restrict to.
//!
//! Category slugs are derived from display names by a lossy rule, so the
//! parser prefers an explicit [`CategoryIndex`] built from the catalog and
//! only falls back to reconstructing the name from the slug text.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use storefront_core::ProductId;

/// Page title of every listing that is not restricted to a category.
pub const ALL_PRODUCTS_TITLE: &str = "All Products";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// Listing restricted to one display category.
    Category(String),
    Product(ProductId),
    Cart,
    Wishlist,
    Login,
    About,
    Contact,
    Dealer,
    /// Anything unrecognized; rendered as the full listing.
    NotFound(String),
}

impl Route {
    /// Parse using only the slug heuristic.
    pub fn parse(path: &str) -> Self {
        Self::parse_with(path, &CategoryIndex::default())
    }

    /// Parse, resolving category slugs through `index` first.
    pub fn parse_with(path: &str, index: &CategoryIndex) -> Self {
        let trimmed = path.trim();
        let inner = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let inner = inner.strip_prefix('/').unwrap_or(inner);
        let segments: Vec<&str> = inner.split('/').collect();

        match segments.as_slice() {
            [""] => Route::Home,
            ["category", slug, ..] if !slug.is_empty() => Route::Category(index.resolve(slug)),
            ["product", id, ..] => match id.parse::<ProductId>() {
                Ok(id) => Route::Product(id),
                Err(_) => Route::NotFound(trimmed.to_string()),
            },
            ["cart"] => Route::Cart,
            ["wishlist"] => Route::Wishlist,
            ["login"] => Route::Login,
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["dealer"] => Route::Dealer,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    /// Category a listing on this route is restricted to, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            Route::Category(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn page_title(&self) -> &str {
        self.category().unwrap_or(ALL_PRODUCTS_TITLE)
    }

    /// Whether this route renders the product listing.
    pub fn is_listing(&self) -> bool {
        matches!(self, Route::Home | Route::Category(_) | Route::NotFound(_))
    }

    /// Canonical hash path for this route.
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Category(name) => format!("#/category/{}", slugify(name)),
            Route::Product(id) => format!("#/product/{id}"),
            Route::Cart => "#/cart".to_string(),
            Route::Wishlist => "#/wishlist".to_string(),
            Route::Login => "#/login".to_string(),
            Route::About => "#/about".to_string(),
            Route::Contact => "#/contact".to_string(),
            Route::Dealer => "#/dealer".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

/// Slug of a display category: lowercase, ` & ` → `-and-`, whitespace → `-`.
pub fn slugify(category: &str) -> String {
    category
        .to_lowercase()
        .replace(" & ", " and ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Best-effort display name for a slug without a table entry.
///
/// Hyphens become spaces, the first letter of every word is upper-cased and
/// the first interior `And` becomes `&`. Names with other punctuation, or
/// with more than one `&`, do not survive the round trip.
pub fn deslugify(slug: &str) -> String {
    title_case(&slug.replace('-', " ")).replacen(" And ", " & ", 1)
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !is_word;
    }
    out
}

/// Bidirectional slug ↔ display category table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    by_slug: BTreeMap<String, String>,
}

impl CategoryIndex {
    /// Build from display categories. When two categories share a slug the
    /// first one wins.
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_slug = BTreeMap::new();
        for category in categories {
            let category = category.as_ref();
            if category.trim().is_empty() {
                continue;
            }
            match by_slug.entry(slugify(category)) {
                Entry::Vacant(slot) => {
                    slot.insert(category.to_string());
                }
                Entry::Occupied(slot) if slot.get() != category => {
                    tracing::warn!(
                        slug = %slot.key(),
                        kept = %slot.get(),
                        dropped = %category,
                        "category slug collision"
                    );
                }
                Entry::Occupied(_) => {}
            }
        }
        Self { by_slug }
    }

    /// Display category for `slug`, falling back to [`deslugify`].
    pub fn resolve(&self, slug: &str) -> String {
        match self.by_slug.get(slug) {
            Some(category) => category.clone(),
            None => {
                let guessed = deslugify(slug);
                tracing::debug!(%slug, %guessed, "category slug not in index");
                guessed
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_routes() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#"), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/cart"), Route::Cart);
        assert_eq!(Route::parse("/wishlist"), Route::Wishlist);
        assert_eq!(Route::parse("#/dealer"), Route::Dealer);
    }

    #[test]
    fn parses_product_ids() {
        assert_eq!(Route::parse("#/product/42"), Route::Product(ProductId::new(42)));
        assert_eq!(
            Route::parse("#/product/abc"),
            Route::NotFound("#/product/abc".to_string())
        );
    }

    #[test]
    fn category_slug_uses_heuristic_without_index() {
        let route = Route::parse("#/category/back-and-posture");
        assert_eq!(route, Route::Category("Back & Posture".to_string()));
        assert_eq!(route.page_title(), "Back & Posture");
        assert_eq!(
            Route::parse("#/category/orthopedic-and-mobility").category(),
            Some("Orthopedic & Mobility")
        );
    }

    #[test]
    fn empty_category_slug_is_not_a_category() {
        assert!(matches!(Route::parse("#/category/"), Route::NotFound(_)));
    }

    #[test]
    fn non_category_routes_use_default_title() {
        assert_eq!(Route::Home.page_title(), ALL_PRODUCTS_TITLE);
        assert_eq!(Route::Cart.category(), None);
        assert!(Route::NotFound("#/x".into()).is_listing());
        assert!(!Route::Cart.is_listing());
    }

    #[test]
    fn deslugify_rules() {
        assert_eq!(deslugify("knee-support"), "Knee Support");
        assert_eq!(deslugify("hand-and-wrist-and-elbow"), "Hand & Wrist And Elbow");
        assert_eq!(deslugify("and-more"), "And More");
        assert_eq!(deslugify("mobility-aids-2"), "Mobility Aids 2");
    }

    #[test]
    fn slugify_rules() {
        assert_eq!(slugify("Back & Posture"), "back-and-posture");
        assert_eq!(slugify("Ankle   Support"), "ankle-support");
    }

    #[test]
    fn index_resolves_names_the_heuristic_cannot() {
        let index = CategoryIndex::from_categories(["Post-Op Care", "Back & Posture"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve("post-op-care"), "Post-Op Care");
        assert_eq!(deslugify("post-op-care"), "Post Op Care");
        assert_eq!(
            Route::parse_with("#/category/post-op-care", &index),
            Route::Category("Post-Op Care".to_string())
        );
        assert_eq!(index.resolve("unknown-thing"), "Unknown Thing");
    }

    #[test]
    fn index_recovers_names_with_several_ampersands() {
        let index = CategoryIndex::from_categories(["Hand & Wrist & Elbow"]);
        assert_eq!(index.resolve("hand-and-wrist-and-elbow"), "Hand & Wrist & Elbow");
    }

    #[test]
    fn index_keeps_first_category_on_collision() {
        let index = CategoryIndex::from_categories(["Back & Posture", "Back and Posture"]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("back-and-posture"), "Back & Posture");
    }

    #[test]
    fn category_routes_render_canonical_paths() {
        let route = Route::Category("Back & Posture".into());
        assert_eq!(route.to_path(), "#/category/back-and-posture");
        assert_eq!(Route::parse(&route.to_path()), route);
        assert_eq!(Route::Product(ProductId::new(5)).to_path(), "#/product/5");
    }
}
