use crate::domain::repository::ItemRepository;
use crate::domain::types::{Item, ItemFields};
use crate::error::ResourceServiceError;

/// Item payload as received; `name` is mandatory for create and update.
pub struct ItemInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ItemInput {
    fn into_fields(self) -> Result<ItemFields, ResourceServiceError> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or(ResourceServiceError::MissingData("name"))?;
        Ok(ItemFields {
            name,
            description: self.description,
        })
    }
}

// ── ListItems ────────────────────────────────────────────────────────────────

pub struct ListItemsUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> ListItemsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Item>, ResourceServiceError> {
        self.repo.list().await
    }
}

// ── GetItem ──────────────────────────────────────────────────────────────────

pub struct GetItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> GetItemUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Item, ResourceServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ResourceServiceError::ItemNotFound)
    }
}

// ── CreateItem ───────────────────────────────────────────────────────────────

pub struct CreateItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> CreateItemUseCase<R> {
    pub async fn execute(&self, input: ItemInput) -> Result<Item, ResourceServiceError> {
        let fields = input.into_fields()?;
        self.repo.create(&fields).await
    }
}

// ── UpdateItem ───────────────────────────────────────────────────────────────

pub struct UpdateItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> UpdateItemUseCase<R> {
    pub async fn execute(&self, id: i32, input: ItemInput) -> Result<Item, ResourceServiceError> {
        let fields = input.into_fields()?;
        self.repo
            .update(id, &fields)
            .await?
            .ok_or(ResourceServiceError::ItemNotFound)
    }
}

// ── DeleteItem ───────────────────────────────────────────────────────────────

pub struct DeleteItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> DeleteItemUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), ResourceServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ResourceServiceError::ItemNotFound);
        }
        Ok(())
    }
}
