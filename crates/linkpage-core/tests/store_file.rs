//! Store persistence and rendering through the public API

use std::collections::HashSet;
use std::fs;

use linkpage_core::{
    render, ConfigField, ConfigUpdate, LinkStore, LinkStyle, LinkUpdate, NewLink, StoreError,
    StoreOrigin, ThemeColor,
};
use tempfile::TempDir;

fn edited_store() -> LinkStore {
    let mut store = LinkStore::default();
    store.add(
        NewLink::new("Meetup Mayo", "https://meetup.example/mayo")
            .icon("🎤")
            .style(LinkStyle::Highlight)
            .badge(Some("Hoy".to_string())),
    );
    store.add(NewLink::new("Archivo", "https://archivo.example").enabled(false));
    store.add(NewLink::new("Raro", "https://raro.example").style(LinkStyle::from("neon")));
    store.disable("tiktok");
    store.delete("twitter");
    store.update("evento", &[LinkUpdate::Badge(None)]);
    store
        .update_theme(&[(ThemeColor::Primary, "#123456"), (ThemeColor::LogoBackground, "#abc")])
        .unwrap();
    store.update_config(&[ConfigUpdate::new(ConfigField::Footer, "© Pythonistas")]);

    let mut order: Vec<String> = store.list_ids().iter().map(|(id, _)| id.to_string()).collect();
    order.reverse();
    store.reorder(&order).unwrap();
    store
}

#[test]
fn save_then_load_reproduces_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("linktree_config.json");

    let store = edited_store();
    store.save(&path).unwrap();

    let loaded = LinkStore::load(&path);
    assert_eq!(loaded.origin(), &StoreOrigin::File);
    assert_eq!(loaded.config(), store.config());
    assert_eq!(loaded.links(), store.links());
}

#[test]
fn save_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("linktree_config.json");
    fs::write(&path, "old contents").unwrap();

    LinkStore::default().save(&path).unwrap();

    let loaded = LinkStore::load(&path);
    assert_eq!(loaded.origin(), &StoreOrigin::File);
    assert_eq!(loaded.len(), 11);
}

#[test]
fn load_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store = LinkStore::load(&temp_dir.path().join("nothing.json"));

    assert_eq!(store.origin(), &StoreOrigin::Defaults);
    assert_eq!(store.len(), 11);
    assert_eq!(store.config().output_file, "index.html");
}

#[test]
fn load_corrupt_file_recovers_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("linktree_config.json");
    fs::write(&path, "{\"config\": {\"title\": ").unwrap();

    let store = LinkStore::load(&path);

    assert!(matches!(store.origin(), StoreOrigin::Recovered { .. }));
    assert_eq!(store.len(), 11);
    assert_eq!(store.config().logo_text, "Pythonistas GDL");
}

#[test]
fn load_document_without_links_uses_seed_links() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("linktree_config.json");
    fs::write(&path, r#"{"config": {"title": "Solo config"}}"#).unwrap();

    let store = LinkStore::load(&path);

    assert_eq!(store.origin(), &StoreOrigin::File);
    assert_eq!(store.config().title, "Solo config");
    assert_eq!(store.len(), 11);
}

#[test]
fn generated_ids_stay_unique_for_colliding_titles() {
    let mut store = LinkStore::default();
    let titles = [
        "Discord", "discord", "DISCORD!", "Dïscord", "Discord", "d.i.s.c.o.r.d", "", "",
    ];
    for title in titles {
        store.add(NewLink::new(title, "https://x.example"));
    }

    let ids: Vec<_> = store.list_ids().into_iter().map(|(id, _)| id).collect();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn accented_title_collision_gets_count_suffix() {
    let mut store = LinkStore::default();
    store.add(NewLink::new("Siguenos", "https://a.example"));
    assert_eq!(store.get("siguenos").unwrap().url, "https://a.example");

    let before = store.len();
    let link = store.add(NewLink::new("Síguenos", "https://x.example"));
    assert_eq!(link.id, format!("siguenos_{}", before));
}

#[test]
fn reorder_is_all_or_nothing() {
    let mut store = LinkStore::default();
    let original: Vec<String> = store.list_ids().iter().map(|(id, _)| id.to_string()).collect();

    let mut missing_one = original.clone();
    missing_one.pop();
    assert!(matches!(
        store.reorder(&missing_one),
        Err(StoreError::ReorderMismatch { .. })
    ));

    let mut with_unknown = original.clone();
    with_unknown[3] = "unknown".to_string();
    assert!(store.reorder(&with_unknown).is_err());

    let current: Vec<String> = store.list_ids().iter().map(|(id, _)| id.to_string()).collect();
    assert_eq!(current, original);

    let mut rotated = original.clone();
    rotated.rotate_left(2);
    store.reorder(&rotated).unwrap();
    let current: Vec<String> = store.list_ids().iter().map(|(id, _)| id.to_string()).collect();
    assert_eq!(current, rotated);
}

#[test]
fn rendered_page_contains_only_enabled_links() {
    let store = edited_store();
    let html = render(store.config(), store.links());

    for link in store.links() {
        let anchor = format!("id=\"{}\"", link.id);
        assert_eq!(html.contains(&anchor), link.enabled, "{}", link.id);
    }
    assert_eq!(html.matches("<a href=").count(), store.enabled_count());
    // Only the new meetup link keeps a badge
    assert_eq!(html.matches("<span class=\"badge\">").count(), 1);
    assert!(html.contains("<span class=\"badge\">Hoy</span>"));
    assert!(html.contains("class=\"link neon\""));
}

#[test]
fn render_twice_is_byte_identical() {
    let store = edited_store();
    let first = render(store.config(), store.links());
    let second = render(store.config(), store.links());
    assert_eq!(first, second);
}

#[test]
fn invalid_theme_color_is_rejected() {
    let mut store = LinkStore::default();
    let err = store
        .update_theme(&[(ThemeColor::Background, "bad")])
        .unwrap_err();

    assert!(matches!(err, StoreError::InvalidColor { .. }));
    assert_eq!(store.theme().bg_color.as_str(), "#FFE566");
}

#[test]
fn styles_named_like_built_ins_survive_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("linktree_config.json");

    let mut store = LinkStore::default();
    for name in ["default", "primary", "neon"] {
        store.add(
            NewLink::new(format!("Estilo {}", name), "https://x.example")
                .style(LinkStyle::from(name)),
        );
    }
    store.save(&path).unwrap();

    let loaded = LinkStore::load(&path);
    assert_eq!(loaded.links(), store.links());
    assert_eq!(
        render(loaded.config(), loaded.links()),
        render(store.config(), store.links())
    );
    assert!(!render(loaded.config(), loaded.links()).contains("class=\"link default\""));
}

#[test]
fn load_partial_theme_keeps_persisted_links() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("linktree_config.json");
    fs::write(
        &path,
        r##"{"config": {"theme": {"bg_color": "#fff"}},
            "links": [{"title": "Mine", "url": "https://mine.example", "id": "mine"}]}"##,
    )
    .unwrap();

    let store = LinkStore::load(&path);

    assert_eq!(store.origin(), &StoreOrigin::File);
    assert_eq!(store.len(), 1);
    assert!(store.get("mine").is_some());
    assert_eq!(store.theme().bg_color.as_str(), "#fff");
    assert_eq!(store.theme().text_color.as_str(), "#000000");
}
