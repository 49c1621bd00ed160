use std::sync::Arc;
use std::time::Duration;

use imagegen::GenerationError;
use sea_orm::EntityTrait;
use server::entity::tryon_result;
use server::config::{GenerationConfig, TryOnConfig};
use server::models::tryon::TryOnRequest;
use server::store::{NewSareeItem, TryOnStore};
use server::tryon::prompt::DEFAULT_GARMENT;
use server::tryon::style::Pose;
use server::tryon::{GenerationSource, Generators, Orchestrator, TryOnError};

use crate::common::{FakeGenerator, Script, TestDb, generators, png_dimensions};

fn request(pose: &str, blouse: &str) -> TryOnRequest {
    serde_json::from_value(serde_json::json!({
        "pose_style": pose,
        "blouse_style": blouse,
    }))
    .unwrap()
}

fn orchestrator(generators: Option<Generators>) -> Orchestrator {
    Orchestrator::new(
        generators,
        &TryOnConfig::default(),
        &GenerationConfig::default(),
    )
    .with_timeout(Duration::from_millis(200))
}

fn scripted(primary: Script, fallback: Script) -> (Arc<FakeGenerator>, Arc<FakeGenerator>) {
    (
        FakeGenerator::new("primary", primary),
        FakeGenerator::new("fallback", fallback),
    )
}

#[tokio::test]
async fn primary_success_skips_fallback() {
    let db = TestDb::new().await;
    let (primary, fallback) = scripted(Script::Image("PRIMARY"), Script::Image("FALLBACK"));

    let outcome = orchestrator(Some(generators(&primary, &fallback)))
        .run(&db.db, request("front", "traditional"))
        .await
        .unwrap();

    assert_eq!(outcome.source, GenerationSource::Primary);
    assert_eq!(outcome.result.result_image_base64, "PRIMARY");
    assert_eq!(primary.calls().len(), 1);
    assert!(fallback.calls().is_empty());

    let call = &primary.calls()[0];
    assert_eq!(call.prompt, outcome.prompts.text_only);
    assert!(call.system_instruction.is_some());
    assert_eq!((call.width, call.height), (1024, 1536));
}

#[tokio::test]
async fn empty_primary_falls_back() {
    let db = TestDb::new().await;
    let (primary, fallback) = scripted(Script::NoImages, Script::Image("FALLBACK"));

    let outcome = orchestrator(Some(generators(&primary, &fallback)))
        .run(&db.db, request("side", "modern"))
        .await
        .unwrap();

    assert_eq!(outcome.source, GenerationSource::Fallback);
    assert_eq!(outcome.result.result_image_base64, "FALLBACK");

    let call = &fallback.calls()[0];
    assert_eq!(call.prompt, outcome.prompts.text_only);
    assert!(call.images.is_empty());
}

#[tokio::test]
async fn failing_primary_falls_back() {
    let db = TestDb::new().await;
    let (primary, fallback) = scripted(Script::Fail, Script::Image("FALLBACK"));

    let outcome = orchestrator(Some(generators(&primary, &fallback)))
        .run(&db.db, request("front", "full_sleeve"))
        .await
        .unwrap();

    assert_eq!(outcome.source, GenerationSource::Fallback);
    assert_eq!(primary.calls().len(), 1);
    assert_eq!(fallback.calls().len(), 1);
}

#[tokio::test]
async fn hanging_primary_times_out_into_fallback() {
    let db = TestDb::new().await;
    let (primary, fallback) = scripted(Script::Hang, Script::Image("FALLBACK"));

    let outcome = orchestrator(Some(generators(&primary, &fallback)))
        .run(&db.db, request("front", "traditional"))
        .await
        .unwrap();

    assert_eq!(outcome.source, GenerationSource::Fallback);
}

#[tokio::test]
async fn fallback_failure_is_fatal_and_nothing_is_stored() {
    let db = TestDb::new().await;
    let (primary, fallback) = scripted(Script::Fail, Script::Fail);

    let err = orchestrator(Some(generators(&primary, &fallback)))
        .run(&db.db, request("front", "traditional"))
        .await
        .err()
        .unwrap();
    assert!(matches!(
        err,
        TryOnError::Generation(GenerationError::Status { status: 503, .. })
    ));

    let (primary, fallback) = scripted(Script::Fail, Script::NoImages);
    let err = orchestrator(Some(generators(&primary, &fallback)))
        .run(&db.db, request("front", "traditional"))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, TryOnError::Generation(GenerationError::Empty)));

    let stored = tryon_result::Entity::find().all(&db.db).await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn uploads_go_to_primary_with_multimodal_prompt() {
    let db = TestDb::new().await;
    let (primary, fallback) = scripted(Script::Image("PRIMARY"), Script::Fail);
    let request: TryOnRequest = serde_json::from_value(serde_json::json!({
        "saree_body_base64": "data:image/jpeg;base64,/9j/4AAQ",
        "saree_border_base64": "iVBORw0KGgo=",
        "saree_pallu_base64": "",
        "session_id": "session-42",
    }))
    .unwrap();

    let outcome = orchestrator(Some(generators(&primary, &fallback)))
        .run(&db.db, request)
        .await
        .unwrap();

    let call = &primary.calls()[0];
    assert_eq!(call.prompt, outcome.prompts.multimodal);
    assert!(call.prompt.contains("session-42"));
    assert_eq!(call.images.len(), 2);
    assert_eq!(call.images[0].mime_type, "image/jpeg");
    assert_eq!(call.images[0].data, "/9j/4AAQ");
    assert_eq!(call.images[1].mime_type, "image/png");

    let result = outcome.result;
    assert!(result.has_body);
    assert!(!result.has_pallu);
    assert!(result.has_border);
    assert_eq!(result.saree_item_id, None);
    assert!(!result.is_favorite);
}

#[tokio::test]
async fn whitespace_image_counts_as_supplied() {
    let db = TestDb::new().await;
    let request: TryOnRequest = serde_json::from_value(serde_json::json!({
        "saree_body_base64": "   ",
        "saree_pallu_base64": "",
    }))
    .unwrap();

    let outcome = orchestrator(None).run(&db.db, request).await.unwrap();

    assert!(outcome.result.has_body);
    assert!(!outcome.result.has_pallu);
    assert!(!outcome.result.has_border);
}

#[tokio::test]
async fn placeholder_without_generators() {
    let db = TestDb::new().await;

    let outcome = orchestrator(None)
        .run(&db.db, request("side", "sleeveless"))
        .await
        .unwrap();

    assert_eq!(outcome.source, GenerationSource::Placeholder);
    assert_eq!(outcome.result.pose_style, Pose::Side);
    assert_eq!(
        png_dimensions(&outcome.result.result_image_base64),
        (1024, 1536)
    );

    let stored = TryOnStore::new(&db.db)
        .find_result_by_id(&outcome.result.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, outcome.result);
}

#[tokio::test]
async fn back_pose_can_be_enabled() {
    let db = TestDb::new().await;
    let tryon = TryOnConfig {
        allowed_poses: vec![Pose::Front, Pose::Side, Pose::Back],
    };
    let orchestrator = Orchestrator::new(None, &tryon, &GenerationConfig::default());

    let outcome = orchestrator
        .run(&db.db, request("back", "traditional"))
        .await
        .unwrap();
    assert_eq!(outcome.result.pose_style, Pose::Back);

    let err = orchestrator
        .run(&db.db, request("sitting", "traditional"))
        .await
        .err()
        .unwrap();
    assert_eq!(
        err.to_string(),
        "Invalid pose_style. Must be one of: front, side, back"
    );
}

#[tokio::test]
async fn catalog_lookup_describes_garment() {
    let db = TestDb::new().await;
    let store = TryOnStore::new(&db.db);
    let item = store
        .insert_catalog_item(NewSareeItem {
            name: "Bandhani".to_string(),
            description: "tie-dyed cotton".to_string(),
            image_base64: String::new(),
            category: "casual".to_string(),
            color: "saffron".to_string(),
            pattern: "dotted".to_string(),
        })
        .await
        .unwrap();
    let orchestrator = orchestrator(None);

    let mut with_item = request("front", "traditional");
    with_item.saree_item_id = Some(item.id.clone());
    let outcome = orchestrator.run(&db.db, with_item).await.unwrap();
    assert!(
        outcome
            .prompts
            .text_only
            .contains("beautiful saffron saree with dotted pattern, tie-dyed cotton")
    );
    assert_eq!(outcome.result.saree_item_id, Some(item.id));

    for _ in 0..2 {
        let mut unknown = request("front", "traditional");
        unknown.saree_item_id = Some("missing-item".to_string());
        let outcome = orchestrator.run(&db.db, unknown).await.unwrap();
        assert!(outcome.prompts.text_only.contains(DEFAULT_GARMENT));
        assert!(outcome.prompts.multimodal.contains(DEFAULT_GARMENT));
    }
}
