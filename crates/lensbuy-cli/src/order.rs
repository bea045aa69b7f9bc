//! Order commands: build (and optionally submit) a group order from a draft
//! file, and list past orders.
//!
//! A draft mirrors what the ordering form collects:
//!
//! ```yaml
//! user: { lineUid: U123, displayName: Amy }
//! buyers:
//!   - name: Amy
//!     phone: "0912000000"
//!     lines:
//!       - { productId: acu-oasys-clear, quantity: 6, diopter: "-1.75" }
//! ```

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use lensbuy_core::{
    AppConfig, Cart, Catalog, CatalogSource, FileCatalog, Gift, JsonlOutbox, Order, OrderHistory,
    OrderSubmitter, User,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderDraft {
    pub user: User,
    #[serde(default)]
    pub buyers: Vec<BuyerDraft>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BuyerDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub lines: Vec<LineDraft>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineDraft {
    pub product_id: String,
    pub quantity: u32,
    pub diopter: Option<String>,
    #[serde(default)]
    pub gifts: Vec<Gift>,
}

pub(crate) fn parse_draft(content: &str) -> anyhow::Result<OrderDraft> {
    serde_yaml::from_str(content).context("failed to parse order draft")
}

/// Replays a draft into a cart, applying every cart validation.
pub(crate) fn build_cart(
    draft: &OrderDraft,
    catalog: &Catalog,
    max_line_quantity: u32,
) -> anyhow::Result<Cart> {
    let master = lensbuy_rules::master_options();
    let mut cart = Cart::new(max_line_quantity);

    for buyer in &draft.buyers {
        let buyer_id = cart.add_buyer(&buyer.name, &buyer.phone).id.clone();
        for (idx, line) in buyer.lines.iter().enumerate() {
            let product = catalog.get(&line.product_id).with_context(|| {
                format!(
                    "line {} of buyer '{}': unknown product '{}'",
                    idx + 1,
                    buyer.name,
                    line.product_id
                )
            })?;
            let item_id = cart
                .add_item(&buyer_id, product, line.quantity, line.diopter.as_deref(), &master)
                .with_context(|| format!("line {} of buyer '{}'", idx + 1, buyer.name))?
                .id
                .clone();
            if !line.gifts.is_empty() {
                cart.set_gifts(&item_id, line.gifts.clone(), catalog)
                    .with_context(|| {
                        format!("gifts on line {} of buyer '{}'", idx + 1, buyer.name)
                    })?;
            }
        }
    }

    Ok(cart)
}

/// Human-readable per-buyer report with gift allowances and discount hints.
pub(crate) fn render_report(cart: &Cart, catalog: &Catalog) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for buyer in cart.buyers() {
        let summary = cart.buyer_summary(&buyer.id);
        lines.push(format!(
            "{}: {} box(es), {} gift(s), ${}",
            buyer.name, summary.total_qty, summary.gift_qty, summary.total_price
        ));
        for item in cart.items_for(&buyer.id) {
            let allowance = cart.gift_allowance(&item.id, catalog)?;
            lines.push(format!(
                "  {} {} {} ({}) x{} = ${}, gifts {}/{}",
                item.brand,
                item.style,
                item.color,
                item.diopter,
                item.quantity,
                item.line_total(),
                item.gifts.len(),
                allowance
            ));
            for hint in cart.promo_hints(&item.id, catalog)? {
                lines.push(format!("    {}", hint.message));
            }
        }
    }
    lines.push(format!("total: ${}", cart.total_price()));
    Ok(lines)
}

pub(crate) fn run_order(config: &AppConfig, draft_path: &Path, submit: bool) -> anyhow::Result<()> {
    let catalog = FileCatalog::new(&config.catalog_path).catalog()?;
    let content = std::fs::read_to_string(draft_path)
        .with_context(|| format!("failed to read draft {}", draft_path.display()))?;
    let draft = parse_draft(&content)?;

    let cart = build_cart(&draft, &catalog, config.max_line_quantity)?;
    for line in render_report(&cart, &catalog)? {
        println!("{line}");
    }

    let order = cart.build_order(&draft.user, Utc::now())?;
    println!("{}", serde_json::to_string_pretty(&order)?);

    if submit {
        let outbox = JsonlOutbox::new(&config.outbox_path);
        if outbox.submit(&order)? {
            println!("order submitted to {}", outbox.path().display());
        } else {
            anyhow::bail!("order was not accepted");
        }
    }
    Ok(())
}

pub(crate) fn run_history(config: &AppConfig, user_id: &str) -> anyhow::Result<()> {
    let outbox = JsonlOutbox::new(&config.outbox_path);
    let orders = outbox.orders_for(user_id)?;
    if orders.is_empty() {
        println!("no orders for {user_id}");
        return Ok(());
    }
    for order in &orders {
        println!("{}", render_history_line(order));
    }
    Ok(())
}

pub(crate) fn render_history_line(order: &Order) -> String {
    format!(
        "{} {} ${} ({} buyer(s), {} line(s))",
        order.id.as_deref().unwrap_or("-"),
        order.timestamp,
        order.total_price,
        order.buyers.len(),
        order.items.len()
    )
}
