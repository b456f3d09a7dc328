use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item};

/// Repository trait for Item persistence
///
/// This trait defines the data access contract for items. It carries no
/// business rules; uniqueness and discount math live in the service.
/// Implementations can use different storage backends (PostgreSQL, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items in store order (ascending id)
    async fn get_all(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by id
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    /// Case-insensitive exact name lookup
    async fn find_by_exact_name(&self, name: &str) -> ItemResult<Option<Item>>;

    /// Case-insensitive substring match over item names
    async fn find_by_name_contains(&self, substring: &str) -> ItemResult<Vec<Item>>;

    /// Items priced strictly above the threshold
    async fn find_by_price_above(&self, threshold: f64) -> ItemResult<Vec<Item>>;

    /// Insert a new item with a freshly assigned id
    async fn insert(&self, input: CreateItem) -> ItemResult<Item>;

    /// Write back the mutable fields of an existing item
    async fn persist(&self, item: &Item) -> ItemResult<Item>;

    /// Write back a batch of items as a single unit of work: either
    /// every row is updated or none are. Returns the rows written.
    async fn persist_all(&self, items: &[Item]) -> ItemResult<u64>;

    /// Delete an item by id. Returns true if a row existed and was removed.
    async fn remove(&self, id: i64) -> ItemResult<bool>;
}

/// In-memory implementation of ItemRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    items: HashMap<i64, Item>,
    next_id: i64,
}

impl StoreState {
    /// Mirror of the database's unique index on LOWER(name): true if any
    /// item other than `exclude_id` already holds the name.
    fn name_taken(&self, name: &str, exclude_id: Option<i64>) -> bool {
        let folded = name.to_lowercase();
        self.items
            .values()
            .any(|item| Some(item.id) != exclude_id && item.name.to_lowercase() == folded)
    }
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get_all(&self) -> ItemResult<Vec<Item>> {
        let state = self.state.read().await;
        let mut items: Vec<Item> = state.items.values().cloned().collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let state = self.state.read().await;
        Ok(state.items.get(&id).cloned())
    }

    async fn find_by_exact_name(&self, name: &str) -> ItemResult<Option<Item>> {
        let folded = name.to_lowercase();
        let state = self.state.read().await;
        Ok(state
            .items
            .values()
            .find(|item| item.name.to_lowercase() == folded)
            .cloned())
    }

    async fn find_by_name_contains(&self, substring: &str) -> ItemResult<Vec<Item>> {
        let folded = substring.to_lowercase();
        let state = self.state.read().await;
        let mut items: Vec<Item> = state
            .items
            .values()
            .filter(|item| item.name.to_lowercase().contains(&folded))
            .cloned()
            .collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn find_by_price_above(&self, threshold: f64) -> ItemResult<Vec<Item>> {
        let state = self.state.read().await;
        let mut items: Vec<Item> = state
            .items
            .values()
            .filter(|item| item.price > threshold)
            .cloned()
            .collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn insert(&self, input: CreateItem) -> ItemResult<Item> {
        let mut state = self.state.write().await;

        if state.name_taken(&input.name, None) {
            return Err(ItemError::DuplicateName(input.name));
        }

        state.next_id += 1;
        let item = Item {
            id: state.next_id,
            name: input.name,
            description: input.description,
            price: input.price,
        };
        state.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn persist(&self, item: &Item) -> ItemResult<Item> {
        let mut state = self.state.write().await;

        if !state.items.contains_key(&item.id) {
            return Err(ItemError::NotFound(item.id));
        }
        if state.name_taken(&item.name, Some(item.id)) {
            return Err(ItemError::DuplicateName(item.name.clone()));
        }

        state.items.insert(item.id, item.clone());
        Ok(item.clone())
    }

    async fn persist_all(&self, items: &[Item]) -> ItemResult<u64> {
        let mut state = self.state.write().await;

        // Verify the whole batch before touching any row, so a failure
        // leaves the store unchanged.
        for item in items {
            if !state.items.contains_key(&item.id) {
                return Err(ItemError::NotFound(item.id));
            }
            if state.name_taken(&item.name, Some(item.id)) {
                return Err(ItemError::DuplicateName(item.name.clone()));
            }
        }

        for item in items {
            state.items.insert(item.id, item.clone());
        }

        Ok(items.len() as u64)
    }

    async fn remove(&self, id: i64) -> ItemResult<bool> {
        let mut state = self.state.write().await;

        if state.items.remove(&id).is_some() {
            tracing::info!(item_id = id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
