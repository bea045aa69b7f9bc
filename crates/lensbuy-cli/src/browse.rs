//! Read-only commands: rule evaluation, diopter listing and catalog browsing.

use lensbuy_core::{AppConfig, Catalog, CatalogSource, FileCatalog};
use lensbuy_rules::{master_options, PromoEvaluation};

pub(crate) fn run_promo(rules: &str, qty: u32) -> anyhow::Result<()> {
    let result = lensbuy_rules::evaluate_promo(rules, qty);
    for line in render_promo(qty, &result) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_diopters(range: Option<&str>) -> anyhow::Result<()> {
    let master = master_options();
    let options = match range {
        Some(text) => lensbuy_rules::filter_diopters(text, &master),
        None => master,
    };

    if options.is_empty() {
        println!("no diopter options match");
    } else {
        println!("{}", options.join(" "));
    }
    Ok(())
}

/// Prints brands, the styles of `brand`, or the colors of `brand` + `style`
/// together with each product's diopter options and promotion text.
pub(crate) fn run_catalog(
    config: &AppConfig,
    brand: Option<&str>,
    style: Option<&str>,
) -> anyhow::Result<()> {
    let catalog = FileCatalog::new(&config.catalog_path).catalog()?;
    for line in render_catalog(&catalog, brand, style) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn render_promo(qty: u32, result: &PromoEvaluation) -> Vec<String> {
    let mut lines = vec![format!(
        "qty {qty}: {} free box(es) earned",
        result.earned_gift_count
    )];
    lines.extend(result.hints.iter().map(|hint| {
        format!(
            "  {} (threshold {}, saves {})",
            hint.message, hint.next_threshold, hint.savings
        )
    }));
    lines
}

pub(crate) fn render_catalog(
    catalog: &Catalog,
    brand: Option<&str>,
    style: Option<&str>,
) -> Vec<String> {
    match (brand, style) {
        (None, _) => catalog.brands().into_iter().map(str::to_owned).collect(),
        (Some(brand), None) => catalog
            .styles(brand)
            .into_iter()
            .map(str::to_owned)
            .collect(),
        (Some(brand), Some(style)) => {
            let master = master_options();
            catalog
                .products()
                .iter()
                .filter(|p| p.brand == brand && p.style == style)
                .map(|product| {
                    let options = product.diopter_options(&master);
                    let range = match (options.first(), options.last()) {
                        (Some(first), Some(last)) => format!("{first} .. {last}"),
                        _ => "none".to_string(),
                    };
                    format!(
                        "{} [{}] ${} diopters {} ({} options) {}",
                        product.color,
                        product.id,
                        product.price,
                        range,
                        options.len(),
                        product.promo_rules
                    )
                    .trim_end()
                    .to_string()
                })
                .collect()
        }
    }
}
