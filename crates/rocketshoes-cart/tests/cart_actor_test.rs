use async_trait::async_trait;
use rocketshoes_cart::cart_actor::{self, CartContext, CartError, UpdateProductAmount};
use rocketshoes_cart::clients::{CartClient, InMemoryStorefront};
use rocketshoes_cart::model::{Cart, CatalogProduct, Product, ProductId};
use rocketshoes_cart::notify::{self, RecordingNotifier};
use rocketshoes_cart::storage::{KeyValueStore, MemoryStore, StorageError, CART_KEY};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Real cart actor wired to in-memory collaborators.
struct Harness {
    cart: CartClient,
    storefront: InMemoryStorefront,
    storage: MemoryStore,
    notifier: RecordingNotifier,
}

impl Harness {
    async fn start(storefront: InMemoryStorefront, storage: MemoryStore) -> Self {
        let notifier = RecordingNotifier::new();
        let context = CartContext::new(
            Arc::new(storefront.clone()),
            Arc::new(storage.clone()),
            Arc::new(notifier.clone()),
        );
        let (actor, client) = cart_actor::new(16);
        tokio::spawn(actor.run(context));

        Self {
            cart: CartClient::new(client),
            storefront,
            storage,
            notifier,
        }
    }

    async fn persisted(&self) -> Option<String> {
        self.storage.get(CART_KEY).await.unwrap()
    }
}

fn catalog() -> InMemoryStorefront {
    InMemoryStorefront::new()
        .with_product(CatalogProduct::new(1, "Tênis de Caminhada Leve Confortável", 179.9), 3)
        .with_product(CatalogProduct::new(2, "Tênis VR Caminhada Confortável Detalhes Couro Masculino", 139.9), 5)
        .with_product(CatalogProduct::new(5, "Shoe", 99.9), 10)
        .with_product(CatalogProduct::new(7, "Sold Out Runner", 89.9), 0)
}

fn line(id: u32, amount: u32) -> Product {
    Product::from_catalog(CatalogProduct::new(id, format!("Stored {id}"), 10.0), amount)
}

fn stored(lines: Vec<Product>) -> MemoryStore {
    MemoryStore::with_entry(CART_KEY, serde_json::to_string(&Cart::new(lines)).unwrap())
}

fn amounts(cart: &Cart) -> Vec<(u32, u32)> {
    cart.lines().iter().map(|p| (p.id.0, p.amount)).collect()
}

// --- addProduct ---

#[tokio::test]
async fn test_add_new_product_appends_with_amount_one() {
    let h = Harness::start(catalog(), MemoryStore::new()).await;

    let cart = h.cart.add_product(ProductId(5)).await.unwrap();

    assert_eq!(cart.len(), 1);
    let product = cart.find(ProductId(5)).unwrap();
    assert_eq!(product.title, "Shoe");
    assert_eq!(product.amount, 1);
    assert!(h.notifier.notifications().is_empty());

    let persisted: Cart = serde_json::from_str(&h.persisted().await.unwrap()).unwrap();
    assert_eq!(persisted, cart);
}

#[tokio::test]
async fn test_add_appends_at_the_end() {
    let h = Harness::start(catalog(), stored(vec![line(2, 1)])).await;

    let cart = h.cart.add_product(ProductId(1)).await.unwrap();
    assert_eq!(amounts(&cart), vec![(2, 1), (1, 1)]);
}

#[tokio::test]
async fn test_add_existing_product_increments_only_that_line() {
    let h = Harness::start(catalog(), stored(vec![line(1, 1), line(2, 4)])).await;

    let cart = h.cart.add_product(ProductId(1)).await.unwrap();

    assert_eq!(amounts(&cart), vec![(1, 2), (2, 4)]);
    // display fields of the stored line are kept, not re-fetched
    assert_eq!(cart.find(ProductId(1)).unwrap().title, "Stored 1");
}

#[tokio::test]
async fn test_add_beyond_stock_is_rejected() {
    let storefront = catalog();
    storefront.set_stock(1, 2);
    let h = Harness::start(storefront, stored(vec![line(1, 2)])).await;
    h.cart.cart().await.unwrap();
    let before = h.persisted().await;

    let err = h.cart.add_product(ProductId(1)).await.unwrap_err();

    assert!(matches!(
        err,
        CartError::OutOfStock {
            requested: 3,
            available: 2,
            ..
        }
    ));
    assert_eq!(h.notifier.messages(), vec![notify::STOCK_EXCEEDED.to_string()]);
    assert_eq!(amounts(&h.cart.cart().await.unwrap()), vec![(1, 2)]);
    assert_eq!(h.persisted().await, before);
}

#[tokio::test]
async fn test_add_sold_out_product_is_rejected() {
    let h = Harness::start(catalog(), MemoryStore::new()).await;

    let err = h.cart.add_product(ProductId(7)).await.unwrap_err();

    assert!(matches!(err, CartError::OutOfStock { available: 0, .. }));
    assert_eq!(h.notifier.messages(), vec![notify::STOCK_EXCEEDED.to_string()]);
    assert!(h.cart.cart().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_unknown_product_reports_add_failed() {
    let h = Harness::start(catalog(), MemoryStore::new()).await;

    let err = h.cart.add_product(ProductId(404)).await.unwrap_err();

    assert!(matches!(err, CartError::AddFailed { .. }));
    assert_eq!(h.notifier.messages(), vec![notify::ADD_FAILED.to_string()]);
    assert!(h.cart.cart().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_with_stock_but_no_catalog_entry_commits_nothing() {
    let storefront = catalog();
    storefront.set_stock(9, 5);
    let h = Harness::start(storefront, stored(vec![line(1, 1)])).await;
    h.cart.cart().await.unwrap();
    let before = h.persisted().await;

    let err = h.cart.add_product(ProductId(9)).await.unwrap_err();

    assert!(matches!(
        err,
        CartError::AddFailed {
            product_id: ProductId(9),
            ..
        }
    ));
    assert_eq!(h.notifier.messages(), vec![notify::ADD_FAILED.to_string()]);
    assert_eq!(amounts(&h.cart.cart().await.unwrap()), vec![(1, 1)]);
    assert_eq!(h.persisted().await, before);
}

#[tokio::test]
async fn test_add_while_storefront_is_down_reports_add_failed() {
    let h = Harness::start(catalog(), stored(vec![line(1, 1)])).await;
    h.storefront.set_offline(true);

    assert!(h.cart.add_product(ProductId(1)).await.is_err());
    assert_eq!(h.notifier.messages(), vec![notify::ADD_FAILED.to_string()]);
    assert_eq!(amounts(&h.cart.cart().await.unwrap()), vec![(1, 1)]);
}

#[tokio::test]
async fn test_stock_is_fetched_on_every_call() {
    let h = Harness::start(catalog(), MemoryStore::new()).await;

    h.cart.add_product(ProductId(2)).await.unwrap();
    h.storefront.set_stock(2, 1);

    let err = h.cart.add_product(ProductId(2)).await.unwrap_err();
    assert!(matches!(err, CartError::OutOfStock { .. }));
}

// --- removeProduct ---

#[tokio::test]
async fn test_remove_present_product() {
    let h = Harness::start(catalog(), stored(vec![line(1, 1), line(2, 2), line(5, 3)])).await;

    let cart = h.cart.remove_product(ProductId(2)).await.unwrap();

    assert_eq!(amounts(&cart), vec![(1, 1), (5, 3)]);
    let persisted: Cart = serde_json::from_str(&h.persisted().await.unwrap()).unwrap();
    assert_eq!(persisted, cart);
}

#[tokio::test]
async fn test_remove_absent_product_is_silent() {
    let h = Harness::start(catalog(), stored(vec![line(1, 1)])).await;

    let cart = h.cart.remove_product(ProductId(9)).await.unwrap();

    assert_eq!(amounts(&cart), vec![(1, 1)]);
    assert!(h.notifier.notifications().is_empty());
}

// --- updateProductAmount ---

#[tokio::test]
async fn test_update_non_positive_amount_is_ignored() {
    let h = Harness::start(catalog(), stored(vec![line(1, 2)])).await;
    // let on_start finish its write-back before taking the reference copy
    h.cart.cart().await.unwrap();
    let before = h.persisted().await;
    // a no-op must not even reach the storefront
    h.storefront.set_offline(true);

    for amount in [0, -1, i64::MIN] {
        let cart = h
            .cart
            .update_product_amount(UpdateProductAmount {
                product_id: ProductId(1),
                amount,
            })
            .await
            .unwrap();
        assert_eq!(amounts(&cart), vec![(1, 2)]);
    }

    assert_eq!(h.persisted().await, before);
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_update_sets_exact_amount() {
    let h = Harness::start(catalog(), stored(vec![line(1, 1), line(2, 1)])).await;

    let cart = h
        .cart
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(2),
            amount: 5,
        })
        .await
        .unwrap();

    assert_eq!(amounts(&cart), vec![(1, 1), (2, 5)]);
}

#[tokio::test]
async fn test_update_beyond_stock_is_rejected() {
    let h = Harness::start(catalog(), stored(vec![line(1, 1)])).await;

    let err = h
        .cart
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(1),
            amount: 4,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CartError::OutOfStock {
            requested: 4,
            available: 3,
            ..
        }
    ));
    assert_eq!(h.notifier.messages(), vec![notify::STOCK_EXCEEDED.to_string()]);
    assert_eq!(amounts(&h.cart.cart().await.unwrap()), vec![(1, 1)]);
}

#[tokio::test]
async fn test_update_absent_product_within_stock_is_silent() {
    let h = Harness::start(catalog(), stored(vec![line(1, 1)])).await;

    let cart = h
        .cart
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(2),
            amount: 2,
        })
        .await
        .unwrap();

    assert_eq!(amounts(&cart), vec![(1, 1)]);
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_update_absent_product_beyond_stock_still_notifies() {
    let h = Harness::start(catalog(), MemoryStore::new()).await;

    let result = h
        .cart
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(2),
            amount: 50,
        })
        .await;

    assert!(matches!(result, Err(CartError::OutOfStock { .. })));
    assert_eq!(h.notifier.messages(), vec![notify::STOCK_EXCEEDED.to_string()]);
}

#[tokio::test]
async fn test_update_with_unknown_stock_reports_update_failed() {
    let h = Harness::start(catalog(), stored(vec![line(1, 1)])).await;

    let result = h
        .cart
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(404),
            amount: 1,
        })
        .await;

    assert!(matches!(result, Err(CartError::UpdateFailed { .. })));
    assert_eq!(h.notifier.messages(), vec![notify::UPDATE_FAILED.to_string()]);
}

// --- persistence ---

/// Store whose writes can be switched off.
#[derive(Clone, Default)]
struct FlakyStore {
    inner: MemoryStore,
    broken: Arc<AtomicBool>,
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".into()));
        }
        self.inner.set(key, value).await
    }
}

#[tokio::test]
async fn test_failed_write_keeps_in_memory_cart() {
    let storage = FlakyStore::default();
    let notifier = RecordingNotifier::new();
    let context = CartContext::new(
        Arc::new(catalog()),
        Arc::new(storage.clone()),
        Arc::new(notifier.clone()),
    );
    let (actor, client) = cart_actor::new(8);
    tokio::spawn(actor.run(context));
    let cart = CartClient::new(client);

    cart.add_product(ProductId(1)).await.unwrap();
    storage.broken.store(true, Ordering::SeqCst);

    let add = cart.add_product(ProductId(2)).await;
    let remove = cart.remove_product(ProductId(1)).await;
    let update = cart
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(1),
            amount: 2,
        })
        .await;

    assert!(matches!(add, Err(CartError::AddFailed { .. })));
    assert!(matches!(remove, Err(CartError::RemoveFailed { .. })));
    assert!(matches!(update, Err(CartError::UpdateFailed { .. })));
    assert_eq!(
        notifier.messages(),
        vec![
            notify::ADD_FAILED.to_string(),
            notify::REMOVE_FAILED.to_string(),
            notify::UPDATE_FAILED.to_string(),
        ]
    );
    assert_eq!(amounts(&cart.cart().await.unwrap()), vec![(1, 1)]);
}

#[tokio::test]
async fn test_unreadable_stored_cart_starts_empty() {
    let storage = MemoryStore::with_entry(CART_KEY, "{ not a cart");
    let h = Harness::start(catalog(), storage).await;

    assert!(h.cart.cart().await.unwrap().is_empty());
    // the empty cart was written back over the bad value
    assert_eq!(h.persisted().await.as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_restart_restores_identical_cart() {
    let storage = MemoryStore::new();
    let first = Harness::start(catalog(), storage.clone()).await;
    first.cart.add_product(ProductId(2)).await.unwrap();
    first.cart.add_product(ProductId(1)).await.unwrap();
    let saved = first.cart.add_product(ProductId(2)).await.unwrap();
    drop(first);

    let second = Harness::start(catalog(), storage).await;
    assert_eq!(second.cart.cart().await.unwrap(), saved);
    assert_eq!(amounts(&saved), vec![(2, 2), (1, 1)]);
}

#[tokio::test]
async fn test_concurrent_adds_never_exceed_stock() {
    let h = Harness::start(catalog(), MemoryStore::new()).await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let cart = h.cart.clone();
        handles.push(tokio::spawn(async move { cart.add_product(ProductId(1)).await }));
    }

    let mut successful = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successful += 1;
        }
    }

    // stock of product 1 is 3
    assert_eq!(successful, 3);
    assert_eq!(h.cart.cart().await.unwrap().find(ProductId(1)).unwrap().amount, 3);
    assert_eq!(h.notifier.messages().len(), 7);
}
