use roster_domain::{CatalogKind, CharacterState, SkillOptions};

use super::*;
use crate::application::view_models::{CharacterForm, GmSnapshot};

#[tokio::test]
async fn created_catalog_entries_show_up_in_their_list() {
    let backend = backend();
    let gm = logged_in(&backend, GM).await;

    for (kind, name) in [
        (CatalogKind::Race, "Orco"),
        (CatalogKind::Skill, "Sigilo"),
        (CatalogKind::Power, "Fuego"),
        (CatalogKind::Equipment, "Hacha"),
    ] {
        create_entry(&gm, kind, name).await;
        let listed = gm.catalog.list(kind).await.unwrap();
        assert!(listed.iter().any(|e| e.name == name), "{kind} missing {name}");
    }
}

#[tokio::test]
async fn gm_creates_edits_and_runs_lifecycle_actions() {
    let backend = backend();
    let gm = logged_in(&backend, GM).await;
    create_entry(&gm, CatalogKind::Race, "Humano").await;
    create_entry(&gm, CatalogKind::Race, "Orco").await;

    let snapshot = GmSnapshot::load(&gm.catalog, &gm.characters).await.unwrap();
    let humano = snapshot.catalogs.races[0].id;
    let mut form = CharacterForm {
        name: "Thrall".into(),
        race: Some(humano),
        ..CharacterForm::default()
    };
    gm.characters.create(&form.to_payload().unwrap()).await.unwrap();

    let snapshot = GmSnapshot::load(&gm.catalog, &gm.characters).await.unwrap();
    let thrall = named(&snapshot.roster, "Thrall").unwrap().clone();
    assert_eq!(thrall.level, 1);
    assert_eq!(thrall.state, CharacterState::Alive);
    assert_eq!(thrall.race.display_name(), "Humano");

    // Edit through the shared form: ids come back from the names.
    form.begin_edit(&thrall, &snapshot.catalogs);
    assert_eq!(form.race, Some(humano));
    form.race = Some(snapshot.catalogs.races[1].id);
    gm.characters.update(thrall.id, &form.to_payload().unwrap()).await.unwrap();

    gm.characters.level_up(thrall.id).await.unwrap();
    gm.characters
        .change_state(thrall.id, CharacterState::Frozen)
        .await
        .unwrap();

    let snapshot = GmSnapshot::load(&gm.catalog, &gm.characters).await.unwrap();
    let thrall = named(&snapshot.roster, "Thrall").unwrap();
    assert_eq!(thrall.race.display_name(), "Orco");
    assert_eq!(thrall.level, 2);
    assert_eq!(thrall.state, CharacterState::Frozen);

    gm.characters.delete(thrall.id).await.unwrap();
    let snapshot = GmSnapshot::load(&gm.catalog, &gm.characters).await.unwrap();
    assert!(named(&snapshot.roster, "Thrall").is_none());
}

#[tokio::test]
async fn offered_skills_survive_reload() {
    let backend = backend();
    let gm = logged_in(&backend, GM).await;
    for skill in ["Sigilo", "Fuerza", "Sabiduría"] {
        create_entry(&gm, CatalogKind::Skill, skill).await;
    }
    let id = backend.seed_character("Jaina");

    let snapshot = GmSnapshot::load(&gm.catalog, &gm.characters).await.unwrap();
    let skill_ids: Vec<_> = snapshot.catalogs.skills.iter().map(|s| s.id).collect();
    let jaina = named(&snapshot.roster, "Jaina").unwrap();
    assert_eq!(jaina.id.get(), id);

    let mut drafts = snapshot.option_drafts();
    for (slot, skill) in skill_ids.iter().enumerate() {
        drafts.set_slot(jaina.id, slot, Some(*skill));
    }
    gm.characters
        .set_options(jaina.id, &drafts.get(jaina.id))
        .await
        .unwrap();

    let snapshot = GmSnapshot::load(&gm.catalog, &gm.characters).await.unwrap();
    let jaina = named(&snapshot.roster, "Jaina").unwrap();
    let names: Vec<_> = jaina.options_offered.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Sigilo", "Fuerza", "Sabiduría"]);
    assert_eq!(
        snapshot.option_drafts().get(jaina.id),
        SkillOptions::from_offered(&skill_ids)
    );
}

#[tokio::test]
async fn dead_character_cannot_level_up() {
    let backend = backend();
    let gm = logged_in(&backend, GM).await;
    let id = roster_domain::CharacterId::new(backend.seed_character("Arthas"));

    gm.characters.change_state(id, CharacterState::Dead).await.unwrap();
    let err = gm.characters.level_up(id).await.unwrap_err();
    assert_eq!(err.backend_message(), Some("A dead character cannot level up."));
}
