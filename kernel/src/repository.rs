use async_trait::async_trait;
use uuid::Uuid;

/// A record stored and retrieved as a whole under one id.
pub trait AggregateRoot: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

#[async_trait]
pub trait ReadOnlyRepository<T: AggregateRoot>: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<T> {
        let _ = id;
        anyhow::bail!("get_by_id is not supported by this repository")
    }

    async fn get_all(&self) -> anyhow::Result<Vec<T>> {
        anyhow::bail!("get_all is not supported by this repository")
    }
}

#[async_trait]
pub trait MutableRepository<T: AggregateRoot>: Send + Sync {
    async fn insert(&self, entity: &T) -> anyhow::Result<Uuid> {
        let _ = entity;
        anyhow::bail!("insert is not supported by this repository")
    }

    /// Batch insert. One failed row fails the batch.
    async fn insert_list(&self, entities: &[T]) -> anyhow::Result<Vec<Uuid>> {
        let mut ids = Vec::with_capacity(entities.len());
        for entity in entities {
            ids.push(self.insert(entity).await?);
        }
        Ok(ids)
    }

    async fn update(&self, entity: &T) -> anyhow::Result<()> {
        let _ = entity;
        anyhow::bail!("update is not supported by this repository")
    }

    async fn delete(&self, entity: &T) -> anyhow::Result<()> {
        self.delete_by_id(entity.id()).await
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()> {
        let _ = id;
        anyhow::bail!("delete_by_id is not supported by this repository")
    }

    /// Flush buffered changes. Stores without a unit of work report true.
    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

pub trait DBRepository<T: AggregateRoot>: ReadOnlyRepository<T> + MutableRepository<T> {}
