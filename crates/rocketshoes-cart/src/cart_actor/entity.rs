//! [`ActorState`] implementation for [`Cart`].
//!
//! Every operation follows the same shape: fetch what it needs from the storefront,
//! compute the next cart from the current snapshot, persist it, and only then hand it to
//! the actor as a [`Transition::Replace`]. Any failure leaves the held cart as it was and
//! shows the matching notice to the shopper.

use super::actions::{CartAction, UpdateProductAmount};
use super::context::CartContext;
use super::error::CartError;
use crate::model::{Cart, CatalogProduct, Product, ProductId};
use async_trait::async_trait;
use state_actor::{ActorState, Transition};
use tracing::{debug, info, warn};

#[async_trait]
impl ActorState for Cart {
    type Action = CartAction;
    type Context = CartContext;
    type Error = CartError;

    fn size(&self) -> usize {
        self.len()
    }

    /// Hydrates the cart from storage and writes it back once.
    ///
    /// An absent key, an unreadable store, or a value that does not decode as a cart
    /// all start an empty cart.
    async fn on_start(&mut self, ctx: &CartContext) -> Result<(), CartError> {
        *self = match ctx.storage.get(&ctx.storage_key).await {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!(key = %ctx.storage_key, error = %e, "Stored cart is unreadable, starting empty");
                Cart::default()
            }),
            Ok(None) => Cart::default(),
            Err(e) => {
                warn!(key = %ctx.storage_key, error = %e, "Storage read failed, starting empty");
                Cart::default()
            }
        };
        info!(lines = self.len(), "Cart loaded");

        if let Err(e) = ctx.persist(self).await {
            warn!(error = %e, "Initial cart write failed");
        }
        Ok(())
    }

    async fn handle_action(
        &self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<Transition<Self>, CartError> {
        let result = match action {
            CartAction::AddProduct(id) => self.add_product(id, ctx).await,
            CartAction::RemoveProduct(id) => self.remove_product(id, ctx).await,
            CartAction::UpdateProductAmount(update) => {
                self.update_product_amount(update, ctx).await
            }
        };

        if let Err(e) = &result {
            if let Some(notice) = e.notice() {
                ctx.notifier.error(notice);
            }
        }
        result
    }
}

impl Cart {
    async fn add_product(
        &self,
        id: ProductId,
        ctx: &CartContext,
    ) -> Result<Transition<Self>, CartError> {
        let stock = ctx
            .storefront
            .stock(id)
            .await
            .map_err(|e| CartError::add_failed(id, e))?;

        let next = match self.find(id) {
            Some(line) => {
                let requested = u64::from(line.amount) + 1;
                if requested > u64::from(stock.amount) {
                    return Err(CartError::OutOfStock {
                        product_id: id,
                        requested,
                        available: stock.amount,
                    });
                }
                self.with_amount(id, line.amount + 1)
            }
            None => {
                if stock.amount < 1 {
                    return Err(CartError::OutOfStock {
                        product_id: id,
                        requested: 1,
                        available: stock.amount,
                    });
                }
                let product = ctx
                    .storefront
                    .product(id)
                    .await
                    .map_err(|e| CartError::add_failed(id, e))?;
                // lines are keyed by the id that was asked for
                let product = CatalogProduct { id, ..product };
                self.with_appended(Product::from_catalog(product, 1))
            }
        };

        ctx.persist(&next)
            .await
            .map_err(|e| CartError::add_failed(id, e))?;
        Ok(Transition::Replace(next))
    }

    async fn remove_product(
        &self,
        id: ProductId,
        ctx: &CartContext,
    ) -> Result<Transition<Self>, CartError> {
        let next = self.without(id);
        if next.len() == self.len() {
            debug!(product_id = %id, "Remove of a product not in the cart");
        }

        ctx.persist(&next)
            .await
            .map_err(|source| CartError::RemoveFailed {
                product_id: id,
                source,
            })?;
        Ok(Transition::Replace(next))
    }

    async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
        ctx: &CartContext,
    ) -> Result<Transition<Self>, CartError> {
        let UpdateProductAmount { product_id: id, amount } = update;
        if amount <= 0 {
            debug!(product_id = %id, amount, "Ignoring non-positive amount");
            return Ok(Transition::Unchanged);
        }

        let stock = ctx
            .storefront
            .stock(id)
            .await
            .map_err(|e| CartError::update_failed(id, e))?;

        let Some(amount) = u32::try_from(amount)
            .ok()
            .filter(|&requested| requested <= stock.amount)
        else {
            return Err(CartError::OutOfStock {
                product_id: id,
                requested: amount.unsigned_abs(),
                available: stock.amount,
            });
        };

        if self.find(id).is_none() {
            debug!(product_id = %id, "Amount update for a product not in the cart");
            return Ok(Transition::Unchanged);
        }

        let next = self.with_amount(id, amount);
        ctx.persist(&next)
            .await
            .map_err(|e| CartError::update_failed(id, e))?;
        Ok(Transition::Replace(next))
    }
}
