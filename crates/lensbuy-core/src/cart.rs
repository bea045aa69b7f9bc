//! The shared group-order cart.
//!
//! One cart holds every sub-buyer and every line across them; the order sent
//! to the backend is a snapshot of the whole cart. Promotions are evaluated
//! per line against the line's product, never cached.

use chrono::{DateTime, SecondsFormat, Utc};
use lensbuy_rules::PromoHint;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::products::{CartItem, Gift, Order, Product, SubBuyer, User, DEFAULT_DIOPTER};
use crate::CartError;

/// Per-buyer totals shown next to each sub-buyer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyerSummary {
    /// Number of cart lines.
    pub count: usize,
    /// Paid boxes across all lines.
    pub total_qty: u32,
    /// Gift boxes claimed across all lines.
    pub gift_qty: usize,
    pub total_price: Decimal,
}

#[derive(Debug, Clone)]
pub struct Cart {
    buyers: Vec<SubBuyer>,
    items: Vec<CartItem>,
    max_line_quantity: u32,
}

impl Cart {
    #[must_use]
    pub fn new(max_line_quantity: u32) -> Self {
        Self {
            buyers: Vec::new(),
            items: Vec::new(),
            max_line_quantity,
        }
    }

    /// Reopens a past order for editing.
    #[must_use]
    pub fn from_order(order: &Order, max_line_quantity: u32) -> Self {
        Self {
            buyers: order.buyers.clone(),
            items: order.items.clone(),
            max_line_quantity,
        }
    }

    #[must_use]
    pub fn buyers(&self) -> &[SubBuyer] {
        &self.buyers
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn items_for<'a>(&'a self, buyer_id: &'a str) -> impl Iterator<Item = &'a CartItem> + 'a {
        self.items.iter().filter(move |i| i.buyer_id == buyer_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a sub-buyer. A blank name becomes `訂購人 {n}`, `n` being the
    /// buyer's position in the cart.
    pub fn add_buyer(&mut self, name: &str, phone: &str) -> &SubBuyer {
        let name = name.trim();
        let name = if name.is_empty() {
            format!("訂購人 {}", self.buyers.len() + 1)
        } else {
            name.to_string()
        };

        let idx = self.buyers.len();
        self.buyers.push(SubBuyer {
            id: Uuid::new_v4().to_string(),
            name,
            phone: phone.trim().to_string(),
            email: String::new(),
        });
        &self.buyers[idx]
    }

    /// Adds a line for `buyer_id`.
    ///
    /// `diopter` defaults to [`DEFAULT_DIOPTER`]; whichever value results must
    /// be one the product is made in.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownBuyer`], [`CartError::InvalidQuantity`] or
    /// [`CartError::DiopterNotOffered`].
    pub fn add_item<S: AsRef<str>>(
        &mut self,
        buyer_id: &str,
        product: &Product,
        quantity: u32,
        diopter: Option<&str>,
        master: &[S],
    ) -> Result<&CartItem, CartError> {
        if !self.buyers.iter().any(|b| b.id == buyer_id) {
            return Err(CartError::UnknownBuyer(buyer_id.to_string()));
        }
        self.check_quantity(quantity)?;
        let diopter = diopter.unwrap_or(DEFAULT_DIOPTER);
        check_diopter(product, diopter, master)?;

        let item = CartItem {
            id: Uuid::new_v4().to_string(),
            buyer_id: buyer_id.to_string(),
            product_id: product.id.clone(),
            brand: product.brand.clone(),
            style: product.style.clone(),
            color: product.color.clone(),
            price: product.price,
            quantity,
            diopter: diopter.to_string(),
            gifts: Vec::new(),
        };

        tracing::info!(
            buyer = %buyer_id,
            product = %product.id,
            quantity,
            diopter = %item.diopter,
            "cart line added"
        );

        let idx = self.items.len();
        self.items.push(item);
        Ok(&self.items[idx])
    }

    /// Changes a line's quantity and, when given, its diopter.
    ///
    /// Claimed gifts beyond the allowance at the new quantity are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`], [`CartError::UnknownProduct`],
    /// [`CartError::InvalidQuantity`] or [`CartError::DiopterNotOffered`].
    pub fn update_item<S: AsRef<str>>(
        &mut self,
        item_id: &str,
        quantity: u32,
        diopter: Option<&str>,
        catalog: &Catalog,
        master: &[S],
    ) -> Result<&CartItem, CartError> {
        let idx = self.index_of(item_id)?;
        let product = line_product(&self.items[idx], catalog)?;
        self.check_quantity(quantity)?;
        let diopter = diopter
            .unwrap_or(self.items[idx].diopter.as_str())
            .to_string();
        check_diopter(product, &diopter, master)?;

        let allowance = usize::try_from(product.promo_evaluation(quantity).earned_gift_count)
            .unwrap_or(usize::MAX);

        let item = &mut self.items[idx];
        item.quantity = quantity;
        item.diopter = diopter;
        if item.gifts.len() > allowance {
            tracing::info!(
                item = %item.id,
                dropped = item.gifts.len() - allowance,
                "gifts trimmed to new allowance"
            );
            item.gifts.truncate(allowance);
        }
        Ok(&*item)
    }

    /// Removes and returns a line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if no line has `item_id`.
    pub fn remove_item(&mut self, item_id: &str) -> Result<CartItem, CartError> {
        let idx = self.index_of(item_id)?;
        Ok(self.items.remove(idx))
    }

    /// Gift units a line has earned under its product's promotion.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] or [`CartError::UnknownProduct`].
    pub fn gift_allowance(&self, item_id: &str, catalog: &Catalog) -> Result<u32, CartError> {
        let item = &self.items[self.index_of(item_id)?];
        let product = line_product(item, catalog)?;
        Ok(product.promo_evaluation(item.quantity).earned_gift_count)
    }

    /// Next-discount hints for a line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] or [`CartError::UnknownProduct`].
    pub fn promo_hints(
        &self,
        item_id: &str,
        catalog: &Catalog,
    ) -> Result<Vec<PromoHint>, CartError> {
        let item = &self.items[self.index_of(item_id)?];
        let product = line_product(item, catalog)?;
        Ok(product.promo_evaluation(item.quantity).hints)
    }

    /// Replaces the gifts claimed on a line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::TooManyGifts`] when more gifts are claimed than the
    /// line earned, or [`CartError::UnknownProduct`] when a gift names a
    /// product outside the catalog.
    pub fn set_gifts(
        &mut self,
        item_id: &str,
        gifts: Vec<Gift>,
        catalog: &Catalog,
    ) -> Result<(), CartError> {
        let earned = self.gift_allowance(item_id, catalog)?;
        if gifts.len() > usize::try_from(earned).unwrap_or(usize::MAX) {
            return Err(CartError::TooManyGifts {
                item_id: item_id.to_string(),
                requested: gifts.len(),
                earned,
            });
        }
        if let Some(gift) = gifts.iter().find(|g| catalog.get(&g.product_id).is_none()) {
            return Err(CartError::UnknownProduct(gift.product_id.clone()));
        }

        let idx = self.index_of(item_id)?;
        self.items[idx].gifts = gifts;
        Ok(())
    }

    /// Totals for one sub-buyer; an unknown buyer has an all-zero summary.
    #[must_use]
    pub fn buyer_summary(&self, buyer_id: &str) -> BuyerSummary {
        self.items_for(buyer_id)
            .fold(BuyerSummary::default(), |mut summary, item| {
                summary.count += 1;
                summary.total_qty = summary.total_qty.saturating_add(item.quantity);
                summary.gift_qty += item.gifts.len();
                summary.total_price += item.line_total();
                summary
            })
    }

    /// Sum of every line's paid units.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Snapshots the cart into an order for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyCart`] if there are no lines.
    pub fn build_order(&self, user: &User, now: DateTime<Utc>) -> Result<Order, CartError> {
        if self.items.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let order = Order {
            id: None,
            user_id: user.line_uid.clone(),
            buyers: self.buyers.clone(),
            items: self.items.clone(),
            total_price: self.total_price(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        tracing::info!(
            user = %order.user_id,
            buyers = order.buyers.len(),
            lines = order.items.len(),
            total = %order.total_price,
            "order built"
        );
        Ok(order)
    }

    /// Empties the cart after a successful submission.
    pub fn clear(&mut self) {
        self.buyers.clear();
        self.items.clear();
    }

    fn index_of(&self, item_id: &str) -> Result<usize, CartError> {
        self.items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| CartError::UnknownItem(item_id.to_string()))
    }

    fn check_quantity(&self, quantity: u32) -> Result<(), CartError> {
        if (1..=self.max_line_quantity).contains(&quantity) {
            Ok(())
        } else {
            Err(CartError::InvalidQuantity {
                quantity,
                max: self.max_line_quantity,
            })
        }
    }
}

fn line_product<'c>(item: &CartItem, catalog: &'c Catalog) -> Result<&'c Product, CartError> {
    catalog
        .get(&item.product_id)
        .ok_or_else(|| CartError::UnknownProduct(item.product_id.clone()))
}

fn check_diopter<S: AsRef<str>>(
    product: &Product,
    diopter: &str,
    master: &[S],
) -> Result<(), CartError> {
    if product.diopter_options(master).iter().any(|d| d == diopter) {
        Ok(())
    } else {
        Err(CartError::DiopterNotOffered {
            product_id: product.id.clone(),
            diopter: diopter.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
