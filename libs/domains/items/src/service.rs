//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service layer enforces the name-uniqueness rule and the bulk
/// discount transform on top of the repository. Not-found conditions are
/// reported as `None`, never as errors; the only business-rule failure
/// is [`ItemError::DuplicateName`].
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item
    ///
    /// Fails with [`ItemError::DuplicateName`] if another item already
    /// holds the name under case-insensitive comparison.
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        // Validate input
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        // The unique index on LOWER(name) backs this check: a concurrent
        // create that slips past it still fails inside insert.
        if let Some(existing) = self.repository.find_by_exact_name(&input.name).await? {
            return Err(ItemError::DuplicateName(existing.name));
        }

        self.repository.insert(input).await
    }

    /// Get an item by id, `None` if it does not exist
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<Option<Item>> {
        self.repository.get_by_id(id).await
    }

    /// List all items
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.get_all().await
    }

    /// Case-insensitive substring search over item names
    #[instrument(skip(self))]
    pub async fn search_items(&self, query: &str) -> ItemResult<Vec<Item>> {
        self.repository.find_by_name_contains(query).await
    }

    /// Replace an existing item's name, description, and price
    ///
    /// Returns `None` if the id does not exist. Renaming onto another
    /// item's name is rejected with the same conflict as create.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: i64, input: UpdateItem) -> ItemResult<Option<Item>> {
        // Validate input
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let Some(mut item) = self.repository.get_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(existing) = self.repository.find_by_exact_name(&input.name).await? {
            if existing.id != id {
                return Err(ItemError::DuplicateName(existing.name));
            }
        }

        item.apply_update(input);
        let updated = self.repository.persist(&item).await?;
        Ok(Some(updated))
    }

    /// Delete an item by id. Returns false if it did not exist.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<bool> {
        self.repository.remove(id).await
    }

    /// Discount every item priced strictly above the threshold
    ///
    /// Each matching item's price becomes
    /// `round(price * (1 - discount_percent / 100))` at cent precision,
    /// computed independently per item. The whole batch is written as a
    /// single unit of work. Returns the number of items touched.
    #[instrument(skip(self))]
    pub async fn apply_bulk_discount(
        &self,
        threshold_price: f64,
        discount_percent: f64,
    ) -> ItemResult<u64> {
        let mut items = self.repository.find_by_price_above(threshold_price).await?;
        if items.is_empty() {
            return Ok(0);
        }

        for item in &mut items {
            item.price = item.discounted_price(discount_percent);
        }

        let updated = self.repository.persist_all(&items).await?;
        tracing::info!(updated, threshold_price, discount_percent, "Applied bulk discount");
        Ok(updated)
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use mockall::predicate;

    fn item(id: i64, name: &str, price: f64) -> Item {
        Item {
            id,
            name: name.to_string(),
            description: String::new(),
            price,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let mut mock_repo = MockItemRepository::new();

        mock_repo
            .expect_find_by_exact_name()
            .with(predicate::eq("Widget"))
            .returning(|_| Ok(Some(item(1, "widget", 5.0))));

        let service = ItemService::new(mock_repo);
        let result = service
            .create_item(CreateItem {
                name: "Widget".to_string(),
                description: String::new(),
                price: 9.99,
            })
            .await;

        assert!(matches!(result, Err(ItemError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_create_validation_failure_never_reaches_store() {
        // No expectations set: any repository call would panic
        let mock_repo = MockItemRepository::new();

        let service = ItemService::new(mock_repo);
        let result = service
            .create_item(CreateItem {
                name: String::new(),
                description: String::new(),
                price: 9.99,
            })
            .await;

        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_missing_item_returns_none() {
        let mut mock_repo = MockItemRepository::new();

        mock_repo
            .expect_get_by_id()
            .with(predicate::eq(42))
            .returning(|_| Ok(None));

        let service = ItemService::new(mock_repo);
        let result = service
            .update_item(
                42,
                UpdateItem {
                    name: "anything".to_string(),
                    description: String::new(),
                    price: 1.0,
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_rejects_rename_onto_existing_item() {
        let mut mock_repo = MockItemRepository::new();

        mock_repo
            .expect_get_by_id()
            .with(predicate::eq(1))
            .returning(|_| Ok(Some(item(1, "alpha", 1.0))));
        mock_repo
            .expect_find_by_exact_name()
            .with(predicate::eq("beta"))
            .returning(|_| Ok(Some(item(2, "beta", 2.0))));

        let service = ItemService::new(mock_repo);
        let result = service
            .update_item(
                1,
                UpdateItem {
                    name: "beta".to_string(),
                    description: String::new(),
                    price: 1.0,
                },
            )
            .await;

        assert!(matches!(result, Err(ItemError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_update_allows_keeping_own_name() {
        let mut mock_repo = MockItemRepository::new();

        mock_repo
            .expect_get_by_id()
            .with(predicate::eq(1))
            .returning(|_| Ok(Some(item(1, "alpha", 1.0))));
        // Exact-name lookup finds the item itself, which is not a conflict
        mock_repo
            .expect_find_by_exact_name()
            .with(predicate::eq("ALPHA"))
            .returning(|_| Ok(Some(item(1, "alpha", 1.0))));
        mock_repo
            .expect_persist()
            .returning(|updated| Ok(updated.clone()));

        let service = ItemService::new(mock_repo);
        let updated = service
            .update_item(
                1,
                UpdateItem {
                    name: "ALPHA".to_string(),
                    description: "renamed in case only".to_string(),
                    price: 3.0,
                },
            )
            .await
            .unwrap()
            .expect("item exists");

        assert_eq!(updated.name, "ALPHA");
        assert_eq!(updated.price, 3.0);
    }

    #[tokio::test]
    async fn test_bulk_discount_rounds_each_item_to_cents() {
        let mut mock_repo = MockItemRepository::new();

        mock_repo
            .expect_find_by_price_above()
            .with(predicate::eq(10.0))
            .returning(|_| Ok(vec![item(2, "mid", 15.0), item(3, "dear", 25.0)]));
        mock_repo
            .expect_persist_all()
            .withf(|items| {
                items.len() == 2 && items[0].price == 12.0 && items[1].price == 20.0
            })
            .returning(|items| Ok(items.len() as u64));

        let service = ItemService::new(mock_repo);
        let updated = service.apply_bulk_discount(10.0, 20.0).await.unwrap();

        assert_eq!(updated, 2);
    }

    #[tokio::test]
    async fn test_bulk_discount_with_no_matches_writes_nothing() {
        let mut mock_repo = MockItemRepository::new();

        mock_repo
            .expect_find_by_price_above()
            .returning(|_| Ok(vec![]));
        // persist_all must not be called for an empty selection

        let service = ItemService::new(mock_repo);
        let updated = service.apply_bulk_discount(100.0, 50.0).await.unwrap();

        assert_eq!(updated, 0);
    }
}
