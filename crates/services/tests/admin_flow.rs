use std::sync::Arc;

use async_trait::async_trait;
use services::{CardService, CardServiceError};
use storage::repository::{CardRepository, Storage, StorageError, StoredRecord};
use tarot_core::model::{Arcana, CardId, RawRecord};
use tarot_core::validation::fields;
use tarot_core::{SiteSettings, Submission};

fn minor_form() -> Submission {
    Submission::new()
        .with(fields::NOMBRE, "Tres de Espadas")
        .with(fields::ARCANO, "menor")
        .with(fields::PALO, "espadas")
        .with(fields::VALOR, "3")
        .with(fields::IMAGEM, "https://res.cloudinary.com/x/image/upload/v1/e03.jpg")
        .with(fields::SIGNIFICADO_DIRECTO, "dolor")
        .with(fields::SIGNIFICADO_INVERTIDO, "recuperación")
        .with(fields::SIMBOLOS_PRINCIPALES, "corazón, espadas, nubes")
        .with(fields::KEYWORDS, "pena, , duelo")
}

#[tokio::test]
async fn admin_flow_create_edit_delete() {
    let storage = Storage::in_memory();
    let cards = CardService::new(SiteSettings::default(), Arc::clone(&storage.cards));

    let id = cards.create_card(&minor_form()).await.expect("create card");
    let stored = storage.cards.get_record(&id).await.expect("stored");
    assert_eq!(stored.record.arcano.as_deref(), Some("menor"));
    assert_eq!(stored.record.numero, None);
    assert_eq!(
        stored.record.keywords,
        Some(vec!["pena".to_owned(), "duelo".to_owned()])
    );

    let card = cards.get_card(&id).await.expect("get card");
    assert_eq!(card.arcana(), Arcana::Minor);
    assert_eq!(card.identifier(), "3");
    assert_eq!(card.arcana_label(), "Arcano Menor");

    let edited = minor_form().with(fields::NOMBRE, "Tres de Espadas Invertido");
    cards.update_card(&id, &edited).await.expect("update card");
    let detail = cards.get_card_detail(&id).await.expect("detail");
    assert_eq!(detail.nombre(), "Tres de Espadas Invertido");
    assert_eq!(detail.palo(), Some("espadas"));
    assert_eq!(detail.simbolos().principales.len(), 3);

    cards.delete_card(&id).await.expect("delete card");
    assert!(cards.list_cards().await.expect("list").is_empty());
}

#[tokio::test]
async fn rejected_form_reports_every_field() {
    let cards = CardService::new(SiteSettings::default(), Storage::in_memory().cards);
    let form = Submission::new()
        .with(fields::ARCANO, "mayor")
        .with(fields::NUMERO, "abc")
        .with(fields::IMAGEM, "ftp://x")
        .with(fields::SIGNIFICADO_DIRECTO, "ok");

    let err = cards.create_card(&form).await.expect_err("invalid form");
    let CardServiceError::Invalid(result) = &err else {
        panic!("expected validation failure, got {err:?}");
    };
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            "El nombre es requerido",
            "La URL debe comenzar con http:// o https://",
            "El número debe ser un valor numérico válido",
            "La descripción es requerida",
        ]
    );
}

#[tokio::test]
async fn out_of_range_number_is_rejected_for_any_major_spelling() {
    let storage = Storage::in_memory();
    let cards = CardService::new(SiteSettings::default(), Arc::clone(&storage.cards));
    let sol = |arcano: Option<&str>| {
        let form = Submission::new()
            .with(fields::NOMBRE, "El Sol")
            .with(fields::NUMERO, "99")
            .with(fields::SIGNIFICADO_DIRECTO, "alegría")
            .with(fields::SIGNIFICADO_INVERTIDO, "tristeza");
        match arcano {
            Some(value) => form.with(fields::ARCANO, value),
            None => form,
        }
    };

    for arcano in [None, Some(" mayor"), Some("Mayor"), Some("")] {
        let err = cards
            .create_card(&sol(arcano))
            .await
            .expect_err("number out of range");
        let CardServiceError::Invalid(result) = &err else {
            panic!("expected validation failure, got {err:?}");
        };
        assert_eq!(result.errors, vec!["El número debe estar entre 0 y 22"]);
    }
    assert!(storage.cards.list_records().await.expect("list").is_empty());

    let err = cards
        .create_card(&sol(Some("mayor")).with(fields::NUMERO, ""))
        .await
        .expect_err("number required");
    assert_eq!(
        err.user_message(),
        "El número debe ser un valor numérico válido"
    );
}

struct LockedRepository;

#[async_trait]
impl CardRepository for LockedRepository {
    async fn list_records(&self) -> Result<Vec<StoredRecord>, StorageError> {
        Err(StorageError::PermissionDenied)
    }

    async fn get_record(&self, _id: &CardId) -> Result<StoredRecord, StorageError> {
        Err(StorageError::PermissionDenied)
    }

    async fn upsert_record(&self, _id: &CardId, _record: &RawRecord) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    async fn delete_record(&self, _id: &CardId) -> Result<(), StorageError> {
        Err(StorageError::Cancelled)
    }
}

#[tokio::test]
async fn storage_failures_carry_user_messages() {
    let cards = CardService::new(SiteSettings::default(), Arc::new(LockedRepository));

    let err = cards.catalog().await.expect_err("locked store");
    assert_eq!(
        err.user_message(),
        "Acceso denegado. Verifica los permisos de Firestore."
    );

    let err = cards.create_card(&minor_form()).await.expect_err("write fails");
    assert_eq!(
        err.user_message(),
        "Servicio no disponible. Comprueba tu conexión a internet."
    );

    let err = cards
        .delete_card(&CardId::new("a00"))
        .await
        .expect_err("delete fails");
    assert_eq!(err.user_message(), "La operación fue cancelada.");
}
