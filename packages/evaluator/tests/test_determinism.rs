/// Determinism tests - ensure evaluation is deterministic and reproducible
///
/// These tests validate that:
/// - Same document produces identical trees across evaluations
/// - Attribute and style order never depends on insertion history
/// - Serialized trees are byte-for-byte identical
use pagecraft_evaluator::{diff_vdocument, evaluate, RenderContext, VirtualDomDocument};
use pagecraft_model::{defaults_for, Document, Section, SectionKind};

fn every_kind() -> Document {
    let mut doc = Document::default();
    for kind in SectionKind::ALL {
        let id = doc.next_section_id();
        doc.sections.push(Section {
            id,
            ..defaults_for(kind)
        });
    }
    doc
}

#[test]
fn test_evaluation_determinism_default_document() {
    let doc = Document::default();

    let results: Vec<VirtualDomDocument> = (0..10)
        .map(|_| evaluate(&doc, RenderContext::new(2024)))
        .collect();

    for i in 1..results.len() {
        assert_eq!(results[0], results[i], "Evaluation {} differs from evaluation 0", i);
    }
}

#[test]
fn test_evaluation_determinism_every_section_kind() {
    let doc = every_kind();

    let first = serde_json::to_string(&evaluate(&doc, RenderContext::new(2024))).unwrap();
    for _ in 0..5 {
        let again = serde_json::to_string(&evaluate(&doc.clone(), RenderContext::new(2024))).unwrap();
        assert_eq!(first, again, "Serialized tree should be byte-identical");
    }
}

#[test]
fn test_reloaded_document_evaluates_identically() {
    let doc = every_kind();
    let reloaded = pagecraft_model::parse_config(&pagecraft_model::to_config_string(&doc).unwrap()).unwrap();

    let a = evaluate(&doc, RenderContext::new(2024));
    let b = evaluate(&reloaded, RenderContext::new(2024));
    assert!(diff_vdocument(&a, &b).is_empty());
}

#[test]
fn test_year_is_the_only_context_input() {
    let doc = Document::default();
    let a = evaluate(&doc, RenderContext::new(2024));
    let b = evaluate(&doc, RenderContext::new(2025));

    let patches = diff_vdocument(&a, &b);
    assert_eq!(patches.len(), 1, "only the footer text should change: {:?}", patches);
}
