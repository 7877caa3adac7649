use roster_domain::{CatalogKind, CharacterId, SkillOptions};

use super::*;
use crate::infrastructure::testing::FakeBackend;
use crate::application::view_models::PlayerSnapshot;

async fn offer_three_skills(backend: &FakeBackend, name: &str) -> CharacterId {
    let gm = logged_in(backend, GM).await;
    for skill in ["Sigilo", "Fuerza", "Sabiduría"] {
        create_entry(&gm, CatalogKind::Skill, skill).await;
    }
    let id = CharacterId::new(backend.seed_character(name));
    let skills: Vec<_> = gm
        .catalog
        .list(CatalogKind::Skill)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    gm.characters
        .set_options(id, &SkillOptions::from_offered(&skills))
        .await
        .unwrap();
    id
}

#[tokio::test]
async fn claim_moves_character_from_pool_to_mine() {
    let backend = backend();
    let id = CharacterId::new(backend.seed_character("Jaina"));
    let player = logged_in(&backend, PLAYER).await;

    let before = PlayerSnapshot::load(&player.characters).await.unwrap();
    assert!(named(&before.available, "Jaina").is_some());
    assert!(before.mine.is_empty());

    player.characters.claim(id).await.unwrap();

    let after = PlayerSnapshot::load(&player.characters).await.unwrap();
    assert!(named(&after.available, "Jaina").is_none());
    let mine = named(&after.mine, "Jaina").unwrap();
    assert_eq!(mine.owner.as_deref(), Some(PLAYER.0));
}

#[tokio::test]
async fn second_claim_is_rejected_with_backend_detail() {
    let backend = backend();
    let id = CharacterId::new(backend.seed_character("Jaina"));
    let player = logged_in(&backend, PLAYER).await;
    player.characters.claim(id).await.unwrap();

    let err = player.characters.claim(id).await.unwrap_err();
    assert_eq!(
        err.backend_message(),
        Some("This character already has an owner.")
    );
}

#[tokio::test]
async fn player_saves_two_of_three_offered_skills() {
    let backend = backend();
    let id = offer_three_skills(&backend, "Jaina").await;
    let player = logged_in(&backend, PLAYER).await;
    player.characters.claim(id).await.unwrap();

    let snapshot = PlayerSnapshot::load(&player.characters).await.unwrap();
    let jaina = named(&snapshot.mine, "Jaina").unwrap().clone();
    let offered = jaina.offered_ids();
    let mut drafts = snapshot.selection_drafts();

    assert!(drafts.toggle(jaina.id, offered[0]));
    assert!(drafts.submission(&jaina).is_err());
    assert!(drafts.toggle(jaina.id, offered[2]));
    assert!(!drafts.toggle(jaina.id, offered[1]));

    let selection = drafts.submission(&jaina).unwrap();
    player.characters.choose_skills(jaina.id, &selection).await.unwrap();

    let snapshot = PlayerSnapshot::load(&player.characters).await.unwrap();
    let jaina = named(&snapshot.mine, "Jaina").unwrap();
    assert!(jaina.selection_is_consistent());
    let names: Vec<_> = jaina.selection.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Sigilo", "Sabiduría"]);
}

#[tokio::test]
async fn released_character_returns_to_the_pool() {
    let backend = backend();
    let id = CharacterId::new(backend.seed_character("Jaina"));
    let player = logged_in(&backend, PLAYER).await;
    player.characters.claim(id).await.unwrap();

    let gm = logged_in(&backend, GM).await;
    gm.characters.release(id).await.unwrap();

    let snapshot = PlayerSnapshot::load(&player.characters).await.unwrap();
    assert!(snapshot.mine.is_empty());
    assert!(named(&snapshot.available, "Jaina").is_some());
}
