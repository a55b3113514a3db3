use async_trait::async_trait;
use log::debug;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tarot_core::model::{CardId, RawRecord};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("permission denied")]
    PermissionDenied,

    #[error("store unavailable")]
    Unavailable,

    #[error("operation cancelled")]
    Cancelled,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    /// Message safe to show to site visitors.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::PermissionDenied => {
                "Acceso denegado. Verifica los permisos de Firestore."
            }
            StorageError::Unavailable => {
                "Servicio no disponible. Comprueba tu conexión a internet."
            }
            StorageError::NotFound => "El documento solicitado no existe.",
            StorageError::Cancelled => "La operación fue cancelada.",
            _ => "Error al conectar con la base de datos. Inténtalo más tarde.",
        }
    }
}

/// A raw document together with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: CardId,
    pub record: RawRecord,
}

/// Repository contract for card documents.
///
/// Implementations hand back raw documents; turning them into typed cards
/// is the caller's job.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Fetch every card document, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be read.
    async fn list_records(&self) -> Result<Vec<StoredRecord>, StorageError>;

    /// Fetch one document by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_record(&self, id: &CardId) -> Result<StoredRecord, StorageError>;

    /// Create or replace a document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be stored.
    async fn upsert_record(&self, id: &CardId, record: &RawRecord) -> Result<(), StorageError>;

    /// Remove a document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn delete_record(&self, id: &CardId) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<BTreeMap<CardId, RawRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    /// Repository pre-filled with the given documents.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = (CardId, RawRecord)>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records.into_iter().collect())),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<CardId, RawRecord>>, StorageError> {
        self.records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl CardRepository for InMemoryRepository {
    async fn list_records(&self) -> Result<Vec<StoredRecord>, StorageError> {
        let guard = self.lock()?;
        debug!("listing {} card records", guard.len());
        Ok(guard
            .iter()
            .map(|(id, record)| StoredRecord {
                id: id.clone(),
                record: record.clone(),
            })
            .collect())
    }

    async fn get_record(&self, id: &CardId) -> Result<StoredRecord, StorageError> {
        let guard = self.lock()?;
        guard
            .get(id)
            .map(|record| StoredRecord {
                id: id.clone(),
                record: record.clone(),
            })
            .ok_or(StorageError::NotFound)
    }

    async fn upsert_record(&self, id: &CardId, record: &RawRecord) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        debug!("upserting card record {id}");
        guard.insert(id.clone(), record.clone());
        Ok(())
    }

    async fn delete_record(&self, id: &CardId) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        debug!("deleting card record {id}");
        guard.remove(id).map(|_| ()).ok_or(StorageError::NotFound)
    }
}

/// Card repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub cards: Arc<dyn CardRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: impl CardRepository + 'static) -> Self {
        Self {
            cards: Arc::new(repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(nombre: &str) -> RawRecord {
        RawRecord {
            nombre: Some(nombre.into()),
            ..RawRecord::default()
        }
    }

    #[tokio::test]
    async fn round_trips_record() {
        let repo = InMemoryRepository::new();
        let id = CardId::new("a00");
        repo.upsert_record(&id, &record("El Loco")).await.unwrap();

        let fetched = repo.get_record(&id).await.unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.record.display_name(), Some("El Loco"));
    }

    #[tokio::test]
    async fn lists_in_id_order() {
        let repo = InMemoryRepository::with_records([
            (CardId::new("b"), record("B")),
            (CardId::new("a"), record("A")),
        ]);
        let ids: Vec<_> = repo
            .list_records()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let repo = InMemoryRepository::new();
        let err = repo.get_record(&CardId::new("nope")).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
        let err = repo.delete_record(&CardId::new("nope")).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = InMemoryRepository::with_records([(CardId::new("x"), record("X"))]);
        repo.delete_record(&CardId::new("x")).await.unwrap();
        assert!(repo.list_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_shares_one_repository() {
        let storage = Storage::in_memory();
        let clone = storage.clone();
        storage
            .cards
            .upsert_record(&CardId::new("s"), &record("El Sol"))
            .await
            .unwrap();
        assert_eq!(clone.cards.list_records().await.unwrap().len(), 1);
    }

    #[test]
    fn user_messages_per_error_kind() {
        assert_eq!(
            StorageError::NotFound.user_message(),
            "El documento solicitado no existe."
        );
        assert_eq!(
            StorageError::Connection("boom".into()).user_message(),
            "Error al conectar con la base de datos. Inténtalo más tarde."
        );
    }
}
