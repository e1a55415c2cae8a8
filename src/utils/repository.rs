use async_trait::async_trait;
use tokio::sync::RwLock;

/// A record addressable by a string id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("a record with id '{0}' already exists")]
    DuplicateId(String),
    #[error("refusing to store record '{found}' under id '{expected}'")]
    IdMismatch { expected: String, found: String },
}

/// Outcome of a conditional delete.
#[derive(Debug, PartialEq)]
pub enum Deletion<T> {
    NotFound,
    /// The record exists but failed the predicate; it is left in place.
    Refused(T),
    Deleted(T),
}

/// Storage seam for a resource collection. Handlers only ever see this trait,
/// so a persistent backend can replace [`InMemoryRepository`] without touching them.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn find_many(&self) -> Result<Vec<T>, Error>;

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, Error>;

    async fn create(&self, entity: T) -> Result<T, Error>;

    /// Replaces the record stored under `id`. Returns `None` when there is none.
    async fn update_by_id(&self, id: &str, entity: T) -> Result<Option<T>, Error>;

    /// Removes the record stored under `id` if it satisfies `predicate`.
    /// The check and the removal happen under the same lock.
    async fn delete_by_id_if(
        &self,
        id: &str,
        predicate: for<'p> fn(&'p T) -> bool,
    ) -> Result<Deletion<T>, Error>;
}

/// Insertion-ordered collection held in process memory.
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn find_many(&self) -> Result<Vec<T>, Error> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, Error> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }

    async fn create(&self, entity: T) -> Result<T, Error> {
        let mut records = self.records.write().await;

        if records.iter().any(|record| record.id() == entity.id()) {
            return Err(Error::DuplicateId(entity.id().to_string()));
        }

        records.push(entity.clone());
        Ok(entity)
    }

    async fn update_by_id(&self, id: &str, entity: T) -> Result<Option<T>, Error> {
        if entity.id() != id {
            return Err(Error::IdMismatch {
                expected: id.to_string(),
                found: entity.id().to_string(),
            });
        }

        let mut records = self.records.write().await;

        match records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                *record = entity.clone();
                Ok(Some(entity))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id_if(
        &self,
        id: &str,
        predicate: for<'p> fn(&'p T) -> bool,
    ) -> Result<Deletion<T>, Error> {
        let mut records = self.records.write().await;

        let Some(index) = records.iter().position(|record| record.id() == id) else {
            return Ok(Deletion::NotFound);
        };

        if !predicate(&records[index]) {
            return Ok(Deletion::Refused(records[index].clone()));
        }

        Ok(Deletion::Deleted(records.remove(index)))
    }
}
