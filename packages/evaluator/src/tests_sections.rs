use crate::sections::render_body;
use crate::vdom::VNode;
use pagecraft_model::*;
use serde_json::json;

fn section(record: serde_json::Value) -> Section {
    serde_json::from_value(record).expect("valid section record")
}

fn body(record: serde_json::Value) -> VNode {
    render_body(&section(record), &FontSizes::default())
}

fn find_tag<'a>(node: &'a VNode, tag: &str) -> Option<&'a VNode> {
    node.find(&|n| n.tag() == Some(tag))
}

#[test]
fn test_every_kind_renders_non_empty_seed() {
    for kind in SectionKind::ALL {
        let node = render_body(&defaults_for(kind), &FontSizes::default());
        assert!(
            !matches!(node, VNode::Error { .. }),
            "{} rendered the fallback",
            kind
        );
        assert!(node.descendants().len() > 1, "{} rendered an empty body", kind);
    }
}

#[test]
fn test_text_body() {
    let node = body(json!({
        "id": 1, "type": "text", "title": "About", "content": "Line one\nLine two", "align": "right"
    }));
    assert!(node.has_class("text-right"));
    let title = find_tag(&node, "h3").unwrap();
    assert_eq!(title.text_content(), "About");
    assert_eq!(title.style("font-size"), Some("1.5rem"));
    assert_eq!(find_tag(&node, "p").unwrap().style("font-size"), Some("1rem"));
}

#[test]
fn test_text_body_without_title_omits_heading() {
    let node = body(json!({ "id": 1, "type": "text", "content": "Only body" }));
    assert!(find_tag(&node, "h3").is_none());
    assert!(node.has_class("text-left"));
}

#[test]
fn test_image_width_and_alignment() {
    let node = body(json!({
        "id": 1, "type": "image", "url": "a.jpg", "caption": "Cap", "width": 60, "align": "center"
    }));
    assert_eq!(node.style("width"), Some("60%"));
    assert!(node.has_class("mx-auto"));
    assert_eq!(find_tag(&node, "img").unwrap().attr("src"), Some("a.jpg"));
    assert_eq!(find_tag(&node, "p").unwrap().text_content(), "Cap");
}

#[test]
fn test_image_text_order() {
    let node = body(json!({ "id": 1, "type": "image_text", "imagePosition": "right" }));
    let columns = node.children();
    assert!(columns[0].has_class("md:order-2"));
    assert!(columns[1].has_class("md:order-1"));

    let node = body(json!({ "id": 1, "type": "image_text", "imagePosition": "left" }));
    assert!(!node.children()[0].has_class("md:order-2"));
    assert!(node.children()[1].has_class("md:pl-10"));
}

#[test]
fn test_heading_scale_and_underline() {
    let node = body(json!({
        "id": 1, "type": "heading", "text": "Menu", "design": "underline", "style": "center"
    }));
    assert!(node.has_class("text-center"));
    assert!(node.children()[0].has_class("border-b"));
    let h2 = find_tag(&node, "h2").unwrap();
    assert_eq!(h2.style("font-size"), Some(format!("{}rem", 1.5 * 1.2).as_str()));
}

#[test]
fn test_video_embed_and_file_fallback() {
    let node = body(json!({ "id": 1, "type": "video", "url": "https://youtu.be/LXb3EKWsInQ" }));
    let iframe = find_tag(&node, "iframe").unwrap();
    assert_eq!(iframe.attr("src"), Some("https://www.youtube.com/embed/LXb3EKWsInQ"));
    assert!(find_tag(&node, "video").is_none());

    let node = body(json!({ "id": 1, "type": "video", "url": "https://cdn.example.com/a.mp4" }));
    let video = find_tag(&node, "video").unwrap();
    assert_eq!(video.attr("src"), Some("https://cdn.example.com/a.mp4"));
    assert_eq!(video.attr("muted"), Some(""));
    assert!(find_tag(&node, "iframe").is_none());
}

#[test]
fn test_button_styles() {
    let fill = body(json!({ "id": 1, "type": "button", "label": "Go", "url": "#go", "style": "fill" }));
    let link = find_tag(&fill, "a").unwrap();
    assert_eq!(link.attr("href"), Some("#go"));
    assert!(link.has_class("bg-gray-800"));
    assert_eq!(link.text_content(), "Go");

    let outline = body(json!({ "id": 1, "type": "button", "label": "Go" }));
    assert!(find_tag(&outline, "a").unwrap().has_class("border-current"));
}

#[test]
fn test_social_platforms() {
    let twitter = body(json!({ "id": 1, "type": "social", "platform": "twitter", "url": "https://x.test/1" }));
    let quote = find_tag(&twitter, "blockquote").unwrap();
    assert!(quote.has_class("twitter-tweet"));

    let instagram = body(json!({ "id": 1, "type": "social", "platform": "instagram", "url": "https://ig.test/p/1" }));
    let quote = find_tag(&instagram, "blockquote").unwrap();
    assert!(quote.has_class("instagram-media"));
    assert_eq!(quote.attr("data-instgrm-permalink"), Some("https://ig.test/p/1"));
}

#[test]
fn test_accordion_items_are_keyed_details() {
    let node = body(json!({
        "id": 1, "type": "accordion",
        "items": [
            { "id": 1, "title": "Q1", "content": "A1" },
            { "id": 5, "title": "Q2", "content": "A2" }
        ]
    }));
    let items = node.children();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].tag(), Some("details"));
    assert_eq!(items[1].key(), Some("item-5"));
    assert_eq!(find_tag(&items[0], "summary").unwrap().text_content(), "Q1");
}

#[test]
fn test_post_card_fields() {
    let node = body(json!({
        "id": 1, "type": "post_card", "title": "News", "date": "2024.05.01",
        "excerpt": "Short", "image": "p.jpg", "url": "/news"
    }));
    assert_eq!(node.attr("href"), Some("/news"));
    let text = node.text_content();
    assert!(text.contains("2024.05.01"));
    assert!(text.contains("News"));
    assert!(text.contains("Short"));
}

#[test]
fn test_columns_grid_and_item_shapes() {
    let node = body(json!({
        "id": 1, "type": "columns", "columnCount": 2, "colType": "text",
        "items": [{ "id": 1, "title": "T", "text": "Body" }]
    }));
    assert!(node.has_class("md:grid-cols-2"));
    assert!(find_tag(&node, "h4").unwrap().has_class("font-bold"));

    let node = body(json!({
        "id": 1, "type": "columns", "columnCount": 1, "colType": "video",
        "items": [
            { "id": 1, "url": "https://www.youtube.com/watch?v=LXb3EKWsInQ" },
            { "id": 2, "url": "clip.mp4" }
        ]
    }));
    assert!(!node.has_class("md:grid-cols-3"));
    assert!(find_tag(&node.children()[0], "iframe").is_some());
    assert_eq!(node.children()[1].tag(), Some("video"));

    let node = body(json!({
        "id": 1, "type": "columns", "colType": "social",
        "items": [{ "id": 1, "platform": "instagram", "url": "https://ig.test/p/2" }]
    }));
    assert!(find_tag(&node, "blockquote").unwrap().has_class("instagram-media"));
}

#[test]
fn test_links_subtext_is_optional() {
    let node = body(json!({
        "id": 1, "type": "links",
        "links": [
            { "id": 1, "label": "Shop", "url": "/shop", "subtext": "Open daily" },
            { "id": 2, "label": "Blog", "url": "/blog" }
        ]
    }));
    let cards = node.children();
    assert_eq!(cards.len(), 2);
    assert!(cards[0].text_content().contains("Open daily"));
    assert_eq!(cards[1].text_content(), "Blog");
}

#[test]
fn test_box_body() {
    let node = body(json!({ "id": 1, "type": "box", "title": "Hours", "content": "9-5" }));
    assert_eq!(find_tag(&node, "h3").unwrap().text_content(), "Hours");
    assert_eq!(find_tag(&node, "p").unwrap().text_content(), "9-5");
}

#[test]
fn test_unknown_type_renders_visible_marker() {
    let node = body(json!({ "id": 1, "type": "carousel", "slides": [] }));
    match node {
        VNode::Error { message, .. } => assert_eq!(message, "Unknown Section Type: carousel"),
        other => panic!("Expected error node, got {:?}", other),
    }
}
