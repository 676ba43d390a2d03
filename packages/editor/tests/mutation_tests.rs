//! Mutation behavior on whole documents

use pagecraft_editor::{Direction, Mutation};
use pagecraft_model::{
    parse_config, to_config, Document, SectionBody, SectionKind,
};
use serde_json::json;

fn text_then_button() -> Document {
    parse_config(
        r#"{ "sections": [
            { "id": 1, "type": "text", "title": "Hello" },
            { "id": 2, "type": "button", "label": "Go" }
        ] }"#,
    )
    .unwrap()
}

fn ids(doc: &Document) -> Vec<u64> {
    doc.sections.iter().map(|section| section.id).collect()
}

#[test]
fn test_add_section_ids_are_sequential() {
    let mut doc = Document::empty();
    for (expected, kind) in (1u64..).zip(SectionKind::ALL) {
        let applied = Mutation::AddSection { kind }.apply(&doc);
        assert_eq!(applied.focus, Some(expected));
        doc = applied.document;
    }
    assert_eq!(ids(&doc), (1..=12).collect::<Vec<_>>());
    assert_eq!(doc.sections[9].kind(), Some(SectionKind::Columns));
}

#[test]
fn test_deleted_ids_are_not_renumbered() {
    let mut doc = Document::empty();
    for _ in 0..3 {
        doc = Mutation::AddSection {
            kind: SectionKind::Text,
        }
        .apply(&doc)
        .document;
    }
    doc = Mutation::DeleteSection { id: 2 }.apply(&doc).document;
    doc = Mutation::AddSection {
        kind: SectionKind::Box,
    }
    .apply(&doc)
    .document;

    assert_eq!(ids(&doc), vec![1, 3, 4]);
}

#[test]
fn test_move_boundaries_are_noops() {
    let doc = text_then_button();
    let before = to_config(&doc).unwrap();

    for mutation in [
        Mutation::MoveSection {
            index: 0,
            direction: Direction::Up,
        },
        Mutation::MoveSection {
            index: 1,
            direction: Direction::Down,
        },
        Mutation::MoveSection {
            index: 7,
            direction: Direction::Up,
        },
    ] {
        let applied = mutation.apply(&doc);
        assert!(!applied.changed);
        assert_eq!(to_config(&applied.document).unwrap(), before);
    }
}

#[test]
fn test_move_swaps_neighbours() {
    let doc = text_then_button();

    let down = Mutation::MoveSection {
        index: 0,
        direction: Direction::Down,
    }
    .apply(&doc);
    assert_eq!(ids(&down.document), vec![2, 1]);

    let up = Mutation::MoveSection {
        index: 1,
        direction: Direction::Up,
    }
    .apply(&down.document);
    assert_eq!(up.document, doc);
}

#[test]
fn test_update_field_keeps_identity_and_input() {
    let doc = text_then_button();

    let applied = Mutation::UpdateSectionField {
        id: 1,
        field: "title".to_string(),
        value: json!("Updated"),
    }
    .apply(&doc);
    assert!(applied.changed);
    match &applied.document.sections[0].body {
        SectionBody::Text(body) => assert_eq!(body.title, "Updated"),
        other => panic!("expected text body, got {:?}", other),
    }
    assert_eq!(applied.document.sections[0].id, 1);
    assert_eq!(applied.document.sections[1], doc.sections[1]);

    // input untouched
    match &doc.sections[0].body {
        SectionBody::Text(body) => assert_eq!(body.title, "Hello"),
        other => panic!("expected text body, got {:?}", other),
    }

    for field in ["id", "type"] {
        let applied = Mutation::UpdateSectionField {
            id: 1,
            field: field.to_string(),
            value: json!("image"),
        }
        .apply(&doc);
        assert!(!applied.changed);
        assert_eq!(applied.document, doc);
    }
}

#[test]
fn test_update_unknown_field_is_a_noop() {
    let doc = text_then_button();
    let applied = Mutation::UpdateSectionField {
        id: 1,
        field: "titel".to_string(),
        value: json!("Typo"),
    }
    .apply(&doc);
    assert!(!applied.changed);
    assert_eq!(applied.focus, None);
    assert_eq!(applied.document, doc);
}

#[test]
fn test_update_decoration_field_is_normalized() {
    let doc = text_then_button();
    let applied = Mutation::UpdateSectionField {
        id: 2,
        field: "bgOverlay".to_string(),
        value: json!(5.0),
    }
    .apply(&doc);
    assert_eq!(applied.document.sections[1].decoration.bg_overlay, 0.9);
}

#[test]
fn test_menu_items() {
    let doc = Document::empty();

    let doc = Mutation::AddMenuItem.apply(&doc).document;
    let doc = Mutation::AddMenuItem.apply(&doc).document;
    assert_eq!(
        doc.menu_items.iter().map(|item| item.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(doc.menu_items[0].label, "Menu");
    assert_eq!(doc.menu_items[0].url, "#");

    let doc = Mutation::UpdateMenuItem {
        id: 2,
        label: "Contact".to_string(),
        url: "#section-3".to_string(),
    }
    .apply(&doc)
    .document;
    assert_eq!(doc.menu_item(2).unwrap().label, "Contact");

    let doc = Mutation::DeleteMenuItem { id: 1 }.apply(&doc).document;
    let doc = Mutation::AddMenuItem.apply(&doc).document;
    assert_eq!(
        doc.menu_items.iter().map(|item| item.id).collect::<Vec<_>>(),
        vec![2, 3]
    );
    assert!(doc.sections.is_empty());
}

#[test]
fn test_section_items() {
    let doc = Mutation::AddSection {
        kind: SectionKind::Accordion,
    }
    .apply(&Document::empty())
    .document;

    let applied = Mutation::AddSectionItem { section_id: 1 }.apply(&doc);
    assert_eq!(applied.focus, Some(1));
    let doc = applied.document;
    let item_ids = |doc: &Document| match &doc.sections[0].body {
        SectionBody::Accordion(body) => body.items.iter().map(|item| item.id).collect::<Vec<_>>(),
        other => panic!("expected accordion, got {:?}", other),
    };
    assert_eq!(item_ids(&doc), vec![1, 2, 3]);

    let doc = Mutation::UpdateSectionItem {
        section_id: 1,
        item_id: 3,
        field: "title".to_string(),
        value: json!("Shipping?"),
    }
    .apply(&doc)
    .document;
    match &doc.sections[0].body {
        SectionBody::Accordion(body) => assert_eq!(body.items[2].title, "Shipping?"),
        other => panic!("expected accordion, got {:?}", other),
    }

    let doc = Mutation::DeleteSectionItem {
        section_id: 1,
        item_id: 2,
    }
    .apply(&doc)
    .document;
    assert_eq!(item_ids(&doc), vec![1, 3]);

    let missing = Mutation::DeleteSectionItem {
        section_id: 1,
        item_id: 42,
    }
    .apply(&doc);
    assert!(!missing.changed);
}

#[test]
fn test_update_setting() {
    let doc = Document::default();
    let applied = Mutation::UpdateSetting {
        field: "siteTitle".to_string(),
        value: json!("NORTHWIND"),
    }
    .apply(&doc);
    assert_eq!(applied.document.site_title, "NORTHWIND");
    assert_eq!(applied.document.sections, doc.sections);

    let rejected = Mutation::UpdateSetting {
        field: "sections".to_string(),
        value: json!([]),
    }
    .apply(&doc);
    assert!(!rejected.changed);
    assert_eq!(rejected.document.sections.len(), 3);
}
