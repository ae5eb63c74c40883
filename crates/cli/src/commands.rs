//! Command handlers.
//!
//! [`run`] is pure over an already loaded catalog and session so it can be
//! tested without touching the filesystem; [`execute`] adds the IO around it.

use anyhow::Context;

use storefront_catalog::{Catalog, FilterState, Product};
use storefront_core::ProductId;
use storefront_infra::{FileKeyValueStore, JsonFileSource, ProductSource, load_catalog};
use storefront_session::SessionStore;

use crate::cli::{CartAction, Cli, Command, ListArgs, WishlistAction};
use crate::config::AppConfig;

/// Rendered output of one command.
#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    pub lines: Vec<String>,
    /// Whether the session must be persisted.
    pub session_changed: bool,
}

impl Outcome {
    fn read(lines: Vec<String>) -> Self {
        Self {
            lines,
            session_changed: false,
        }
    }

    fn changed(lines: Vec<String>) -> Self {
        Self {
            lines,
            session_changed: true,
        }
    }
}

/// Load the catalog and session, run the command, persist the session if it
/// changed. Returns the lines to print.
pub async fn execute(cli: &Cli, config: &AppConfig) -> anyhow::Result<Vec<String>> {
    let primary = JsonFileSource::new(config.catalog_path.clone());
    let fallback = config.fallback_path.clone().map(JsonFileSource::new);
    let load = load_catalog(
        &primary,
        fallback.as_ref().map(|s| s as &dyn ProductSource),
        config.query,
    )
    .await;

    let store = FileKeyValueStore::new(config.session_dir.clone());
    let mut session = SessionStore::load(&store).context("failed to load session")?;

    let outcome = run(&cli.command, &load.catalog, &mut session)?;
    if outcome.session_changed {
        session.save(&store).context("failed to save session")?;
    }

    let mut lines = Vec::with_capacity(outcome.lines.len() + 1);
    lines.extend(load.notice);
    lines.extend(outcome.lines);
    Ok(lines)
}

pub fn run(command: &Command, catalog: &Catalog, session: &mut SessionStore) -> anyhow::Result<Outcome> {
    match command {
        Command::List(args) => Ok(Outcome::read(list(catalog, args))),
        Command::Suggest { query } => Ok(Outcome::read(
            catalog.suggestions(query).into_iter().map(product_line).collect(),
        )),
        Command::Related { id } => {
            let id = ProductId::new(*id);
            catalog.require(id)?;
            Ok(Outcome::read(
                catalog.related(id).into_iter().map(product_line).collect(),
            ))
        }
        Command::Cart { action } => cart(action, catalog, session),
        Command::Wishlist { action } => wishlist(action, catalog, session),
    }
}

fn list(catalog: &Catalog, args: &ListArgs) -> Vec<String> {
    let route = catalog.parse_route(&args.route);
    if !route.is_listing() {
        tracing::debug!(route = %route.to_path(), "route has no listing; showing all products");
    }
    let query = args.to_query(route);
    let visible = catalog.visible(&query);

    let mut lines = vec![format!("{} ({})", query.route.page_title(), visible.len())];
    let active = query.active_filters(&FilterState::default());
    if !active.is_empty() {
        let chips: Vec<String> = active.iter().map(ToString::to_string).collect();
        lines.push(format!("filters: {}", chips.join(", ")));
    }
    if visible.is_empty() {
        lines.push("No products match the current filters.".to_string());
    }
    lines.extend(visible.into_iter().map(product_line));
    lines
}

fn cart(action: &CartAction, catalog: &Catalog, session: &mut SessionStore) -> anyhow::Result<Outcome> {
    match action {
        CartAction::Show => {
            let cart = &session.cart;
            let mut lines: Vec<String> = cart
                .items()
                .iter()
                .map(|item| format!("{} x{}", product_line(&item.product), item.quantity))
                .collect();
            lines.push(format!("items: {}", cart.item_count()));
            Ok(Outcome::read(lines))
        }
        CartAction::Add { id, quantity } => {
            let product = catalog.require(ProductId::new(*id))?;
            session.cart.add(product, *quantity)?;
            Ok(Outcome::changed(vec![format!(
                "Added {} x{} to cart (items: {})",
                product.name,
                quantity,
                session.cart.item_count()
            )]))
        }
        CartAction::Set { id, quantity } => {
            let changed = session.cart.update_quantity(ProductId::new(*id), *quantity);
            Ok(Outcome {
                lines: vec![format!("items: {}", session.cart.item_count())],
                session_changed: changed,
            })
        }
        CartAction::Remove { id } => {
            let changed = session.cart.remove(ProductId::new(*id));
            Ok(Outcome {
                lines: vec![format!("items: {}", session.cart.item_count())],
                session_changed: changed,
            })
        }
    }
}

fn wishlist(
    action: &WishlistAction,
    catalog: &Catalog,
    session: &mut SessionStore,
) -> anyhow::Result<Outcome> {
    match action {
        WishlistAction::Show => {
            let mut lines: Vec<String> = session
                .wishlist
                .resolve(catalog.products())
                .into_iter()
                .map(product_line)
                .collect();
            lines.push(format!("saved: {}", session.wishlist.len()));
            Ok(Outcome::read(lines))
        }
        WishlistAction::Toggle { id } => {
            let id = ProductId::new(*id);
            catalog.require(id)?;
            let change = session.wishlist.toggle(id);
            Ok(Outcome::changed(vec![change.message().to_string()]))
        }
    }
}

fn product_line(product: &Product) -> String {
    let mut line = format!(
        "#{:<5} {} [{}] ₹{:.2}",
        product.id.get(),
        product.name,
        product.category,
        product.price
    );
    if product.shows_discount_badge() {
        line.push_str(&format!(
            " (was ₹{:.2}, {}% off)",
            product.original_price,
            product.discount_percent()
        ));
    }
    if !product.in_stock {
        line.push_str(" out of stock");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use storefront_catalog::{QueryConfig, RawProduct};

    const CATALOG: &str = r#"[
        {"id": 1, "name": "Knee Cap", "category": "Knee Support", "price": 349, "inStock": true, "sizes": ["M", "L"]},
        {"id": 2, "name": "LS Belt", "category": "Back & Posture", "price": 1299, "originalPrice": 1599, "inStock": true},
        {"id": 3, "name": "Posture Corrector", "category": "Back & Posture", "price": 899}
    ]"#;

    fn catalog() -> Catalog {
        let raw: Vec<RawProduct> = serde_json::from_str(CATALOG).unwrap();
        Catalog::from_raw(raw, QueryConfig::default())
    }

    fn command(args: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("storefront").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    fn exec(args: &[&str], session: &mut SessionStore) -> Outcome {
        run(&command(args), &catalog(), session).unwrap()
    }

    #[test]
    fn list_renders_title_count_and_products() {
        let out = exec(&["list", "--route", "#/category/back-and-posture", "--sort", "price-asc"], &mut SessionStore::default());
        assert_eq!(out.lines[0], "Back & Posture (2)");
        assert!(out.lines[1].starts_with("#3"));
        assert!(out.lines[2].contains("19% off"));
        assert!(!out.session_changed);
    }

    #[test]
    fn list_reports_active_filters_and_empty_results() {
        let out = exec(&["list", "--size", "XL"], &mut SessionStore::default());
        assert_eq!(out.lines[0], "All Products (0)");
        assert_eq!(out.lines[1], "filters: Size: XL");
        assert_eq!(out.lines[2], "No products match the current filters.");
    }

    #[test]
    fn list_shows_search_and_price_chips() {
        let out = exec(&["list", "-q", "belt", "--max-price", "1500"], &mut SessionStore::default());
        assert_eq!(out.lines[0], "All Products (1)");
        assert_eq!(out.lines[1], "filters: Search: \"belt\", Price: up to ₹1500.00");
    }

    #[test]
    fn suggest_and_related() {
        let out = exec(&["suggest", "post"], &mut SessionStore::default());
        assert_eq!(out.lines.len(), 2);
        assert!(out.lines[0].contains("Posture Corrector"));
        assert!(out.lines[1].contains("LS Belt"));

        let out = exec(&["related", "2"], &mut SessionStore::default());
        assert_eq!(out.lines.len(), 1);
        assert!(out.lines[0].starts_with("#3"));

        assert!(run(&command(&["related", "99"]), &catalog(), &mut SessionStore::default()).is_err());
    }

    #[test]
    fn cart_commands_mutate_the_session() {
        let mut session = SessionStore::default();
        assert!(exec(&["cart", "add", "1", "2"], &mut session).session_changed);
        exec(&["cart", "add", "1"], &mut session);
        assert_eq!(session.cart.item_count(), 3);

        let out = exec(&["cart", "set", "1", "0"], &mut session);
        assert!(out.session_changed);
        assert!(session.cart.is_empty());

        assert!(!exec(&["cart", "remove", "1"], &mut session).session_changed);
        assert!(run(&command(&["cart", "add", "99"]), &catalog(), &mut session).is_err());
        assert!(run(&command(&["cart", "add", "1", "0"]), &catalog(), &mut session).is_err());
    }

    #[test]
    fn wishlist_toggle_reports_change() {
        let mut session = SessionStore::default();
        let out = exec(&["wishlist", "toggle", "2"], &mut session);
        assert_eq!(out.lines, vec!["Added to wishlist!".to_string()]);

        let out = exec(&["wishlist", "show"], &mut session);
        assert_eq!(out.lines.last().map(String::as_str), Some("saved: 1"));

        let out = exec(&["wishlist", "toggle", "2"], &mut session);
        assert_eq!(out.lines, vec!["Removed from wishlist.".to_string()]);
    }

    #[tokio::test]
    async fn execute_persists_session_and_surfaces_fallback_notice() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("bundled.json");
        std::fs::write(&fallback, CATALOG).unwrap();

        let config = AppConfig {
            catalog_path: dir.path().join("missing.json"),
            fallback_path: Some(fallback),
            session_dir: dir.path().join("session"),
            ..AppConfig::default()
        };

        let cli = Cli::try_parse_from(["storefront", "cart", "add", "2"]).unwrap();
        let lines = execute(&cli, &config).await.unwrap();
        assert_eq!(lines[0], storefront_infra::LOAD_FAILURE_NOTICE);

        let cli = Cli::try_parse_from(["storefront", "cart", "show"]).unwrap();
        let lines = execute(&cli, &config).await.unwrap();
        assert_eq!(lines.last().map(String::as_str), Some("items: 1"));
    }
}
