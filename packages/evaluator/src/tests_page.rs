use crate::evaluator::{evaluate, section_node, RenderContext};
use crate::page::{HERO_ID, MENU_BUTTON_ID, MOBILE_MENU_ID, SECTIONS_ID};
use crate::vdom::{EmbedScript, VNode};
use pagecraft_model::*;

fn ctx() -> RenderContext {
    RenderContext::new(2024)
}

#[test]
fn test_page_chrome() {
    let doc = Document::default();
    let vdoc = evaluate(&doc, ctx());

    assert_eq!(vdoc.title, doc.site_title);
    assert_eq!(vdoc.nodes.len(), 1);
    assert!(vdoc.nodes[0].has_class("font-serif"));

    let button = vdoc.find_by_id(MENU_BUTTON_ID).unwrap();
    assert_eq!(button.tag(), Some("button"));
    assert_eq!(button.children().len(), 3);

    let menu = vdoc.find_by_id(MOBILE_MENU_ID).unwrap();
    assert!(menu.has_class("translate-x-full"));
    assert!(menu.text_content().contains("About"));

    let footer = vdoc.find_by_id("footer").unwrap();
    assert_eq!(
        footer.text_content(),
        format!("\u{a9} 2024 {}. All Rights Reserved.", doc.site_title)
    );
}

#[test]
fn test_page_styles() {
    let mut doc = Document::default();
    doc.page_bg_type = BackgroundKind::Image;
    doc.page_bg_value = "paper.png".to_string();
    doc.font_family = FontFamily::Sans;

    let vdoc = evaluate(&doc, ctx());
    assert_eq!(vdoc.page_styles.get("background-image").map(String::as_str), Some("url('paper.png')"));
    assert_eq!(vdoc.page_styles.get("color"), Some(&doc.text_color));
    assert!(vdoc.page_styles.get("font-family").unwrap().contains("sans-serif"));
    assert_eq!(
        vdoc.find_by_id("footer").unwrap().style("background-color"),
        Some("transparent")
    );
}

#[test]
fn test_hero_geometry() {
    let mut doc = Document::default();
    doc.hero_width = 80.0;
    doc.hero_height = 60.0;
    doc.hero_blur = 2.0;
    doc.hero_url = String::new();

    let vdoc = evaluate(&doc, ctx());
    let hero = vdoc.find_by_id(HERO_ID).unwrap();
    assert_eq!(hero.style("width"), Some("80%"));
    assert_eq!(hero.style("height"), Some("60vh"));
    assert_eq!(hero.style("margin-top"), Some("20px"));
    assert_eq!(hero.style("border-radius"), Some("16px"));

    let img = hero.find(&|n| n.tag() == Some("img")).unwrap();
    assert_eq!(img.attr("src"), Some(doc.hero_image_fallback.as_str()));
    assert_eq!(img.style("filter"), Some("blur(2px)"));
    assert_eq!(img.style("object-position"), Some("50% 50%"));
}

#[test]
fn test_video_hero() {
    let mut doc = Document::default();
    doc.hero_type = HeroType::Video;
    doc.hero_url = "loop.mp4".to_string();

    let vdoc = evaluate(&doc, ctx());
    let hero = vdoc.find_by_id(HERO_ID).unwrap();
    let video = hero.find(&|n| n.tag() == Some("video")).unwrap();
    assert_eq!(video.attr("src"), Some("loop.mp4"));
    assert_eq!(hero.style("margin-top"), Some("0"));
}

#[test]
fn test_sections_keep_document_order_with_unknown_types() {
    let doc = parse_config(
        r#"{ "sections": [
            { "id": 4, "type": "text", "title": "First" },
            { "id": 2, "type": "carousel" },
            { "id": 9, "type": "button", "label": "Last" }
        ] }"#,
    )
    .unwrap();

    let vdoc = evaluate(&doc, ctx());
    let container = vdoc.find_by_id(SECTIONS_ID).unwrap();
    let ids: Vec<&str> = container.children().iter().filter_map(|n| n.attr("id")).collect();
    assert_eq!(ids, vec!["section-4", "section-2", "section-9"]);

    let unknown = section_node(&vdoc, 2).unwrap();
    let marker = unknown
        .descendants()
        .into_iter()
        .find(|n| matches!(n, VNode::Error { .. }))
        .expect("fallback marker");
    assert_eq!(marker.text_content(), "Unknown Section Type: carousel");
}

#[test]
fn test_embeds_only_when_used() {
    let vdoc = evaluate(&Document::default(), ctx());
    assert!(vdoc.embeds.is_empty());

    let mut doc = Document::default();
    doc.sections.push(Section {
        id: 10,
        ..defaults_for(SectionKind::Social)
    });
    let mut columns = Section {
        id: 11,
        ..defaults_for(SectionKind::Columns)
    };
    if let SectionBody::Columns(body) = &mut columns.body {
        body.col_type = ColumnType::Social;
        body.items[0].platform = SocialPlatform::Instagram;
    }
    doc.sections.push(columns);

    let vdoc = evaluate(&doc, ctx());
    assert_eq!(vdoc.embeds, vec![EmbedScript::Twitter, EmbedScript::Instagram]);
}
