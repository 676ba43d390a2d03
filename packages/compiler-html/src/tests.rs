use crate::{compile_fragment, escape_html, export_with, ExportOptions};
use pagecraft_evaluator::VNode;
use pagecraft_model::{parse_config, Divider, Document, DIVIDER_PATHS};

fn options() -> ExportOptions {
    ExportOptions::new(2024)
}

#[test]
fn test_export_head_and_shell() {
    let html = export_with(&Document::default(), &options());

    assert!(html.starts_with("<!DOCTYPE html><html lang=\"ja\"><head>"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("<title>AURORA</title>"));
    assert!(html.contains("<script src=\"https://cdn.tailwindcss.com\"></script>"));
    assert!(html.contains("tailwind.config = {"));
    assert!(html.contains("<link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>"));
    assert!(html.contains("family=Cormorant+Garamond"));
    assert!(html.contains(".animate-fadeInUp { animation: fadeInUp"));
    assert!(html.contains("summary::-webkit-details-marker { display: none; }"));
    assert!(html.contains("<body class=\"antialiased\""));
    assert!(html.contains("id=\"menu-btn\""));
    assert!(html.contains("document.getElementById('mobile-menu')"));
    assert!(html.contains("\u{a9} 2024 AURORA. All Rights Reserved."));
    assert!(html.ends_with("</body></html>"));
}

#[test]
fn test_embed_scripts_only_when_needed() {
    let plain = export_with(&Document::default(), &options());
    assert!(!plain.contains("platform.twitter.com/widgets.js"));
    assert!(!plain.contains("instagram.com/embed.js"));

    let doc = parse_config(
        r#"{ "sections": [
            { "id": 1, "type": "social", "platform": "twitter", "url": "https://twitter.com/x/status/1" },
            { "id": 2, "type": "columns", "colType": "social", "items": [
                { "id": 1, "platform": "instagram", "url": "https://www.instagram.com/p/abc/" }
            ] }
        ] }"#,
    )
    .unwrap();
    let html = export_with(&doc, &options());
    assert!(html.contains(
        "<script async src=\"https://platform.twitter.com/widgets.js\" charset=\"utf-8\"></script>"
    ));
    assert!(html.contains("<script async src=\"//www.instagram.com/embed.js\"></script>"));
    assert!(html.contains("class=\"twitter-tweet\""));
    assert!(html.contains("class=\"instagram-media\""));
}

#[test]
fn test_video_section_markup() {
    let doc = parse_config(
        r#"{ "sections": [
            { "id": 1, "type": "video", "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" },
            { "id": 2, "type": "video", "url": "https://cdn.example.com/clip.mp4" }
        ] }"#,
    )
    .unwrap();
    let html = export_with(&doc, &options());

    println!("Generated HTML:\n{}", html);

    assert!(html.contains("data-video-id=\"dQw4w9WgXcQ\""));
    assert!(html.contains("src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\""));
    assert!(html.contains(" allowfullscreen "));
    assert!(html.contains("<video autoplay class=\"w-full h-auto rounded-lg shadow-lg\" loop muted playsinline src=\"https://cdn.example.com/clip.mp4\""));
}

#[test]
fn test_unknown_section_fallback_block() {
    let doc = parse_config(
        r#"{ "sections": [
            { "id": 1, "type": "text", "title": "Before" },
            { "id": 2, "type": "marquee", "speed": 3 },
            { "id": 3, "type": "text", "title": "After" }
        ] }"#,
    )
    .unwrap();
    let html = export_with(&doc, &options());

    let marker = "<div class=\"text-red-500\">Unknown Section Type: marquee</div>";
    assert!(html.contains(marker));
    let before = html.find("Before").unwrap();
    let fallback = html.find(marker).unwrap();
    let after = html.find("After").unwrap();
    assert!(before < fallback && fallback < after);
    assert!(html.contains("id=\"section-2\""));
}

#[test]
fn test_dividers_use_shared_paths() {
    let doc = parse_config(
        r##"{ "sections": [
            { "id": 1, "type": "text", "dividerTop": "wave", "dividerTopColor": "#abcdef",
              "dividerBottom": "triangle" }
        ] }"##,
    )
    .unwrap();
    let html = export_with(&doc, &options());

    for (shape, path) in DIVIDER_PATHS {
        let expected = format!("d=\"{}\"", path);
        let used = matches!(shape, Divider::Wave | Divider::Triangle);
        assert_eq!(html.contains(&expected), used, "divider {:?}", shape);
    }
    assert!(html.contains("fill=\"#abcdef\""));
}

#[test]
fn test_text_is_escaped() {
    let doc = parse_config(
        r#"{ "siteTitle": "Tom & Jerry", "sections": [
            { "id": 1, "type": "text", "title": "<script>alert(1)</script>", "content": "a \"quote\"" }
        ] }"#,
    )
    .unwrap();
    let html = export_with(&doc, &options());

    assert!(html.contains("<title>Tom &amp; Jerry</title>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert_eq!(escape_html("it's"), "it&#39;s");
}

#[test]
fn test_pretty_output_indents() {
    let html = export_with(&Document::default(), &options().pretty(true));

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"ja\">\n  <head>\n"));
    assert!(html.contains("\n    <meta charset=\"UTF-8\">\n"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn test_fragment_serialization() {
    let node = VNode::element("div")
        .with_class("card")
        .with_style("width", "50%")
        .with_child(VNode::element("img").with_attr("src", "a.png"))
        .with_child(VNode::text("x < y"))
        .with_child(VNode::error("boom"));

    assert_eq!(
        compile_fragment(&node),
        "<div class=\"card\" style=\"width: 50%;\"><img src=\"a.png\">x &lt; y<div class=\"text-red-500\">boom</div></div>"
    );
}
