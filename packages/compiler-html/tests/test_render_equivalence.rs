//! Both renderers draw from the same evaluated tree, so every section the
//! preview shows serializes to exactly the markup found in the export.

use pagecraft_compiler_html::{compile_fragment, export_to_dir, export_with, ExportOptions};
use pagecraft_evaluator::RenderContext;
use pagecraft_model::{defaults_for, parse_config, Document, Section, SectionKind};
use pagecraft_preview::{Preview, PreviewOptions};

fn every_kind() -> Document {
    let mut doc = Document::default();
    doc.sections.clear();
    for kind in SectionKind::ALL {
        let id = doc.next_section_id();
        doc.sections.push(Section {
            id,
            ..defaults_for(kind)
        });
    }
    doc
}

fn assert_equivalent(doc: &Document) {
    let html = export_with(doc, &ExportOptions::new(2024));
    let frame = Preview::new(RenderContext::new(2024)).render(doc, &PreviewOptions::desktop());

    for section in &doc.sections {
        let anchor = format!("section-{}", section.id);
        let node = frame
            .tree
            .find_by_id(&anchor)
            .unwrap_or_else(|| panic!("{} missing from preview", anchor));
        let markup = compile_fragment(node);
        assert!(html.contains(&markup), "{} differs between renderers", anchor);
    }
}

#[test]
fn test_every_section_type_matches() {
    assert_equivalent(&every_kind());
}

#[test]
fn test_decorated_sections_match() {
    let doc = parse_config(
        r##"{ "sections": [
            { "id": 1, "type": "text", "bgType": "image", "bgValue": "https://example.com/bg.jpg",
              "bgOverlay": 0.5, "dividerTop": "curve", "dividerBottom": "tilt-left", "boxStyle": "stitch" },
            { "id": 2, "type": "box", "pt": "none", "pb": "small", "boxStyle": "fill" },
            { "id": 3, "type": "carousel", "slides": [] }
        ] }"##,
    )
    .unwrap();
    assert_equivalent(&doc);
}

#[test]
fn test_move_changes_order_in_both_renderers() {
    let doc = parse_config(
        r#"{ "sections": [
            { "id": 1, "type": "text", "title": "First" },
            { "id": 2, "type": "text", "title": "Second" }
        ] }"#,
    )
    .unwrap();
    let mut moved = doc.clone();
    moved.sections.swap(0, 1);

    let html = export_with(&moved, &ExportOptions::new(2024));
    assert!(html.find("Second").unwrap() < html.find("First").unwrap());

    let frame = Preview::new(RenderContext::new(2024)).render(&moved, &PreviewOptions::desktop());
    let sections = frame.tree.find_by_id("sections").unwrap();
    let order: Vec<_> = sections.children().iter().filter_map(|node| node.key()).collect();
    assert_eq!(order, vec!["section-2", "section-1"]);
    assert_equivalent(&moved);
}

#[test]
fn test_export_is_deterministic() {
    let doc = every_kind();
    let options = ExportOptions::new(2024);
    assert_eq!(export_with(&doc, &options), export_with(&doc, &options));
}

#[test]
fn test_export_to_dir_writes_index() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dist");
    let path = export_to_dir(&Document::default(), &ExportOptions::new(2024), &out).unwrap();

    assert_eq!(path, out.join("index.html"));
    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, export_with(&Document::default(), &ExportOptions::new(2024)));
}
