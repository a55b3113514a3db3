use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{AppServices, DrawError};
use tarot_core::SiteSettingsDraft;
use tarot_core::model::{Arcana, CardId, SpreadKind};

const EXPORT: &str = include_str!("fixtures/cards.json");

fn app() -> AppServices {
    let draft = SiteSettingsDraft {
        image_width: Some(400),
        ..SiteSettingsDraft::default()
    };
    AppServices::from_json_export(draft, EXPORT).expect("load export")
}

#[tokio::test]
async fn catalog_from_export() {
    let cards = app().card_service();
    let catalog = cards.catalog().await.expect("catalog");

    // "broken" is not an object and never reaches the store.
    assert_eq!(catalog.len(), 9);

    let majors: Vec<_> = catalog.majors.iter().map(|c| c.nombre()).collect();
    assert_eq!(
        majors,
        vec!["El Loco", "El Mago", "La Sacerdotisa", "La Rueda de la Fortuna"]
    );

    let suits: Vec<_> = catalog.suits.iter().map(|g| g.palo.as_str()).collect();
    assert_eq!(suits, vec!["bastos", "copas", "oros", "Sin palo"]);

    let copas: Vec<_> = catalog.suits[1].cards.iter().map(|c| c.valor()).collect();
    assert_eq!(copas, vec!["as", "rey"]);
    assert_eq!(catalog.suits[0].cards[0].valor(), "5");

    let unknown = &catalog.suits[3].cards[0];
    assert_eq!(unknown.nombre(), "Sin nombre");
    assert_eq!(unknown.valor(), "N/A");
}

#[tokio::test]
async fn detail_flattens_nested_fields() {
    let cards = app().card_service();
    let detail = cards
        .get_card_detail(&CardId::new("a10"))
        .await
        .expect("detail");

    assert_eq!(detail.arcana(), Arcana::Major);
    assert_eq!(detail.significado().invertido, "resistencia");
    assert_eq!(detail.simbolos().principales, vec!["rueda", "esfinge"]);
    assert_eq!(detail.keywords(), ["destino", "cambio", "suerte"]);
}

#[tokio::test]
async fn image_urls_follow_settings() {
    let app = app();
    let cards = app.card_service();

    let rueda = cards.get_card(&CardId::new("a10")).await.expect("a10");
    assert_eq!(
        cards.card_image_url(&rueda),
        "https://firebasestorage.googleapis.com/v0/b/tarot/o/a10.jpg?alt=media"
    );

    // Pinned artwork wins over the stored image.
    let loco = cards.get_card(&CardId::new("a00")).await.expect("a00");
    assert!(cards.card_image_url(&loco).ends_with("a22_mbkkkq.jpg"));

    let mago = cards.get_card(&CardId::new("a01")).await.expect("a01");
    assert!(cards.card_image_url(&mago).contains("a01_rxlbr2"));

    let sacerdotisa = cards.get_card(&CardId::new("a02")).await.expect("a02");
    assert_eq!(
        cards.card_image_url(&sacerdotisa),
        app.settings().placeholder_image()
    );
}

#[tokio::test]
async fn draws_respect_spread() {
    let draws = app().draw_service();
    let mut rng = StdRng::seed_from_u64(42);

    let minors = draws
        .draw_with(SpreadKind::from_param("menores"), "5", &mut rng)
        .await
        .expect("draw minors");
    assert_eq!(minors.len(), 5);
    assert!(minors.iter().all(|c| c.arcana() == Arcana::Minor));

    let err = draws
        .draw(SpreadKind::Major, "9")
        .await
        .expect_err("only four majors");
    let DrawError::InvalidCount(check) = &err else {
        panic!("expected count rejection, got {err:?}");
    };
    assert_eq!(check.message, "Máximo 4 cartas disponibles");
    assert_eq!(check.value, 4);
}
