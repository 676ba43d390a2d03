//! Per-type section bodies.
//!
//! [`render_body`] is the one dispatch table from section type to body
//! renderer. Bodies assume normalized sections: every field is present.

use crate::vdom::VNode;
use crate::video::{youtube_embed_url, VideoSource};
use pagecraft_model::*;
use tracing::{debug, warn};

/// Icon path for the accordion disclosure chevron
const CHEVRON_DOWN: &str = "M6 9l6 6 6-6";
/// Icon path for the link-card arrow
const CHEVRON_RIGHT: &str = "m9 18 6-6-6-6";

pub fn render_body(section: &Section, font_size: &FontSizes) -> VNode {
    debug!(section_id = section.id, section_type = %section.type_name(), "Rendering section body");

    match &section.body {
        SectionBody::Text(body) => text(body, font_size),
        SectionBody::Image(body) => image(body),
        SectionBody::ImageText(body) => image_text(body, font_size),
        SectionBody::Heading(body) => heading(body, font_size),
        SectionBody::Video(body) => video(body),
        SectionBody::Button(body) => button(body),
        SectionBody::Social(body) => social(body),
        SectionBody::Accordion(body) => accordion(body),
        SectionBody::PostCard(body) => post_card(body, font_size),
        SectionBody::Columns(body) => columns(body),
        SectionBody::Links(body) => links(body),
        SectionBody::Box(body) => boxed(body, font_size),
        SectionBody::Unknown { kind, .. } => unknown(kind),
    }
}

/// Visible fallback for a section type this build does not know
pub fn unknown(kind: &str) -> VNode {
    warn!(section_type = %kind, "Unknown section type, rendering fallback");
    VNode::error(format!("Unknown Section Type: {}", kind))
}

fn text_align(align: Align) -> &'static str {
    match align {
        Align::Left => "text-left",
        Align::Center => "text-center",
        Align::Right => "text-right",
    }
}

fn block_align(align: Align) -> &'static str {
    match align {
        Align::Left => "mr-auto",
        Align::Center => "mx-auto",
        Align::Right => "ml-auto",
    }
}

fn rem(size: f64) -> String {
    format!("{}rem", size)
}

fn caption(text: &str) -> Option<VNode> {
    (!text.is_empty()).then(|| {
        VNode::element("p")
            .with_class("text-xs text-center mt-4 opacity-60")
            .with_child(VNode::text(text))
    })
}

fn icon(path: &str, size: &str, stroke_width: &str) -> VNode {
    VNode::element("svg")
        .with_attr("xmlns", "http://www.w3.org/2000/svg")
        .with_attr("width", size)
        .with_attr("height", size)
        .with_attr("viewBox", "0 0 24 24")
        .with_attr("fill", "none")
        .with_attr("stroke", "currentColor")
        .with_attr("stroke-width", stroke_width)
        .with_attr("stroke-linecap", "round")
        .with_attr("stroke-linejoin", "round")
        .with_child(VNode::element("path").with_attr("d", path))
}

fn text(body: &TextBody, font_size: &FontSizes) -> VNode {
    let title = (!body.title.is_empty()).then(|| {
        VNode::element("h3")
            .with_class("font-medium tracking-widest mb-6")
            .with_style("font-size", rem(font_size.section_title))
            .with_child(VNode::text(&body.title))
    });

    VNode::element("div")
        .with_class(format!("max-w-3xl mx-auto {}", text_align(body.align)))
        .with_optional_child(title)
        .with_child(
            VNode::element("p")
                .with_class("leading-loose whitespace-pre-wrap font-light tracking-wide")
                .with_style("font-size", rem(font_size.body))
                .with_child(VNode::text(&body.content)),
        )
}

fn image(body: &ImageBody) -> VNode {
    VNode::element("div")
        .with_class(block_align(body.align))
        .with_style("width", format!("{}%", body.width))
        .with_child(
            VNode::element("img")
                .with_attr("src", &body.url)
                .with_attr("alt", &body.caption)
                .with_class("w-full h-auto rounded-lg shadow-lg"),
        )
        .with_optional_child(caption(&body.caption))
}

fn image_text(body: &ImageTextBody, font_size: &FontSizes) -> VNode {
    let (image_order, text_order) = match body.image_position {
        ImagePosition::Left => ("", "md:pl-10"),
        ImagePosition::Right => ("md:order-2", "md:order-1 md:pr-10"),
    };

    VNode::element("div")
        .with_class("flex flex-col md:flex-row gap-10 items-center")
        .with_child(
            VNode::element("div")
                .with_class(format!("w-full md:w-1/2 {}", image_order))
                .with_child(
                    VNode::element("img")
                        .with_attr("src", &body.image)
                        .with_attr("alt", &body.title)
                        .with_class("w-full h-auto rounded-lg shadow-lg object-cover aspect-[4/3]"),
                ),
        )
        .with_child(
            VNode::element("div")
                .with_class(format!("w-full md:w-1/2 {}", text_order))
                .with_child(
                    VNode::element("h3")
                        .with_class("font-medium tracking-widest mb-6 leading-tight")
                        .with_style("font-size", rem(font_size.section_title))
                        .with_child(VNode::text(&body.title)),
                )
                .with_child(
                    VNode::element("p")
                        .with_class("leading-loose whitespace-pre-wrap font-light")
                        .with_style("font-size", rem(font_size.body))
                        .with_child(VNode::text(&body.content)),
                ),
        )
}

fn heading(body: &HeadingBody, font_size: &FontSizes) -> VNode {
    let border = match body.design {
        HeadingDesign::Simple => "",
        HeadingDesign::Underline => "border-b border-current pb-4",
    };
    let sub_text = (!body.sub_text.is_empty()).then(|| {
        VNode::element("p")
            .with_class("text-sm mt-2 opacity-60 tracking-wider")
            .with_child(VNode::text(&body.sub_text))
    });

    VNode::element("div")
        .with_class(format!("max-w-4xl mx-auto {}", text_align(body.style)))
        .with_child(
            VNode::element("div")
                .with_class(format!("inline-block {} px-4", border))
                .with_child(
                    VNode::element("h2")
                        .with_class("font-medium tracking-widest leading-tight")
                        .with_style("font-size", rem(font_size.section_title * 1.2))
                        .with_child(VNode::text(&body.text)),
                )
                .with_optional_child(sub_text),
        )
}

/// Embedded player for a hosted id, or a raw `<video>` for anything else
fn video_player(url: &str, frame_class: &str, file_class: &str) -> VNode {
    match VideoSource::classify(url) {
        VideoSource::YouTube(id) => VNode::element("div")
            .with_class(frame_class)
            .with_style("aspect-ratio", "16/9")
            .with_attr("data-video-id", id.as_str())
            .with_child(
                VNode::element("iframe")
                    .with_attr("width", "100%")
                    .with_attr("height", "100%")
                    .with_attr("src", youtube_embed_url(&id))
                    .with_attr("title", "YouTube video player")
                    .with_attr("frameborder", "0")
                    .with_attr("allowfullscreen", ""),
            ),
        VideoSource::File(src) => VNode::element("video")
            .with_attr("src", src)
            .with_attr("autoplay", "")
            .with_attr("loop", "")
            .with_attr("muted", "")
            .with_attr("playsinline", "")
            .with_class(file_class)
            .with_style("aspect-ratio", "16/9"),
    }
}

fn video(body: &VideoBody) -> VNode {
    VNode::element("div")
        .with_class(block_align(body.align))
        .with_style("width", format!("{}%", body.width))
        .with_child(video_player(
            &body.url,
            "aspect-video w-full rounded-lg shadow-lg overflow-hidden bg-black",
            "w-full h-auto rounded-lg shadow-lg",
        ))
        .with_optional_child(caption(&body.caption))
}

fn button(body: &ButtonBody) -> VNode {
    let style = match body.style {
        ButtonStyle::Fill => "bg-gray-800 text-white hover:bg-gray-700 border-transparent",
        ButtonStyle::Outline => "bg-transparent text-current border-current hover:bg-gray-500/10",
    };

    VNode::element("div")
        .with_class(format!("max-w-4xl mx-auto {}", text_align(body.align)))
        .with_child(
            VNode::element("a")
                .with_attr("href", &body.url)
                .with_attr("target", "_blank")
                .with_attr("rel", "noopener noreferrer")
                .with_class(format!(
                    "inline-block px-10 py-4 border rounded-full transition-all duration-300 {}",
                    style
                ))
                .with_child(
                    VNode::element("span")
                        .with_class("tracking-widest font-medium")
                        .with_child(VNode::text(&body.label)),
                ),
        )
}

/// Placeholder markup the platform's embed script upgrades in place
fn social_embed(platform: SocialPlatform, url: &str) -> VNode {
    match platform {
        SocialPlatform::Twitter => VNode::element("blockquote")
            .with_class("twitter-tweet")
            .with_attr("data-theme", "light")
            .with_child(VNode::element("a").with_attr("href", url)),
        SocialPlatform::Instagram => VNode::element("blockquote")
            .with_class("instagram-media")
            .with_attr("data-instgrm-permalink", url)
            .with_attr("data-instgrm-version", "14")
            .with_child(
                VNode::element("a")
                    .with_attr("href", url)
                    .with_attr("target", "_blank")
                    .with_attr("rel", "noopener noreferrer")
                    .with_child(VNode::text("View this post on Instagram")),
            ),
    }
}

fn social(body: &SocialBody) -> VNode {
    VNode::element("div")
        .with_class("max-w-xl mx-auto flex justify-center overflow-hidden")
        .with_child(social_embed(body.platform, &body.url))
}

fn accordion(body: &AccordionBody) -> VNode {
    let items = body.items.iter().map(|item| {
        VNode::element("details")
            .with_key(format!("item-{}", item.id))
            .with_class("group border border-current/10 rounded-lg bg-white/5 overflow-hidden")
            .with_child(
                VNode::element("summary")
                    .with_class("flex justify-between items-center font-medium cursor-pointer list-none p-5")
                    .with_child(VNode::element("span").with_child(VNode::text(&item.title)))
                    .with_child(
                        VNode::element("span")
                            .with_class("transition group-open:rotate-180")
                            .with_child(icon(CHEVRON_DOWN, "24", "1.5")),
                    ),
            )
            .with_child(
                VNode::element("div")
                    .with_class("text-sm opacity-80 leading-relaxed p-5 pt-0 border-t border-current/5 whitespace-pre-wrap")
                    .with_child(VNode::text(&item.content)),
            )
    });

    VNode::element("div")
        .with_class("max-w-3xl mx-auto flex flex-col gap-4")
        .with_children(items)
}

fn post_card(body: &PostCardBody, font_size: &FontSizes) -> VNode {
    VNode::element("a")
        .with_attr("href", &body.url)
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener noreferrer")
        .with_class("group block max-w-3xl mx-auto overflow-hidden rounded-lg border border-current/10 bg-white/5 md:flex transition-shadow hover:shadow-lg")
        .with_child(
            VNode::element("div")
                .with_class("md:w-2/5 aspect-[4/3] md:aspect-auto overflow-hidden")
                .with_child(
                    VNode::element("img")
                        .with_attr("src", &body.image)
                        .with_attr("alt", &body.title)
                        .with_class("w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"),
                ),
        )
        .with_child(
            VNode::element("div")
                .with_class("md:w-3/5 p-6 md:p-8 flex flex-col justify-center")
                .with_child(
                    VNode::element("p")
                        .with_class("text-xs opacity-60 tracking-widest mb-2")
                        .with_child(VNode::text(&body.date)),
                )
                .with_child(
                    VNode::element("h3")
                        .with_class("font-medium tracking-wide mb-4 leading-tight")
                        .with_style("font-size", rem(font_size.section_title))
                        .with_child(VNode::text(&body.title)),
                )
                .with_child(
                    VNode::element("p")
                        .with_class("leading-relaxed font-light opacity-80 whitespace-pre-wrap")
                        .with_style("font-size", rem(font_size.body))
                        .with_child(VNode::text(&body.excerpt)),
                ),
        )
}

fn column_item(col_type: ColumnType, item: &ColumnItem) -> VNode {
    let node = match col_type {
        ColumnType::Card => VNode::element("div")
            .with_class("flex flex-col space-y-4")
            .with_child(
                VNode::element("div")
                    .with_class("aspect-[4/3] w-full overflow-hidden rounded-lg bg-gray-100")
                    .with_child(
                        VNode::element("img")
                            .with_attr("src", &item.image)
                            .with_attr("alt", &item.title)
                            .with_class("w-full h-full object-cover transition-transform duration-500 hover:scale-105"),
                    ),
            )
            .with_child(
                VNode::element("div")
                    .with_child(
                        VNode::element("h4")
                            .with_class("text-lg font-medium mb-1")
                            .with_child(VNode::text(&item.title)),
                    )
                    .with_child(
                        VNode::element("p")
                            .with_class("text-xs opacity-70")
                            .with_child(VNode::text(&item.text)),
                    ),
            ),
        ColumnType::Text => VNode::element("div")
            .with_class("p-6 bg-white/5 rounded-lg border border-current/10 h-full")
            .with_child(
                VNode::element("h4")
                    .with_class("text-lg font-bold mb-2")
                    .with_child(VNode::text(&item.title)),
            )
            .with_child(
                VNode::element("p")
                    .with_class("text-sm opacity-80 leading-relaxed")
                    .with_child(VNode::text(&item.text)),
            ),
        ColumnType::Image => VNode::element("div")
            .with_class("aspect-square w-full overflow-hidden rounded-lg shadow-sm")
            .with_child(
                VNode::element("img")
                    .with_attr("src", &item.image)
                    .with_attr("alt", &item.title)
                    .with_class("w-full h-full object-cover hover:scale-105 transition-transform duration-500"),
            ),
        ColumnType::Video => video_player(
            &item.url,
            "aspect-video w-full rounded-lg overflow-hidden bg-black shadow",
            "w-full h-auto rounded-lg shadow",
        ),
        ColumnType::Social => VNode::element("div")
            .with_class("flex justify-center overflow-hidden")
            .with_child(social_embed(item.platform, &item.url)),
    };
    node.with_key(format!("item-{}", item.id))
}

fn columns(body: &ColumnsBody) -> VNode {
    let grid = match body.column_count {
        3 => "grid grid-cols-1 md:grid-cols-3 gap-8",
        2 => "grid grid-cols-1 md:grid-cols-2 gap-8",
        _ => "grid grid-cols-1 gap-8",
    };

    VNode::element("div")
        .with_class(grid)
        .with_children(body.items.iter().map(|item| column_item(body.col_type, item)))
}

fn links(body: &LinksBody) -> VNode {
    let cards = body.links.iter().map(|link| {
        let subtext = (!link.subtext.is_empty()).then(|| {
            VNode::element("div")
                .with_class("text-xs opacity-60 font-light")
                .with_child(VNode::text(&link.subtext))
        });

        VNode::element("a")
            .with_key(format!("item-{}", link.id))
            .with_attr("href", &link.url)
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener noreferrer")
            .with_class("group relative overflow-hidden bg-white/5 backdrop-blur-sm border border-current/10 rounded-lg p-5 transition-all duration-300 hover:shadow-lg hover:-translate-y-1 block text-left")
            .with_child(
                VNode::element("div")
                    .with_class("flex justify-between items-center relative z-10")
                    .with_child(
                        VNode::element("div")
                            .with_child(
                                VNode::element("div")
                                    .with_class("text-base md:text-lg font-medium tracking-wide mb-1")
                                    .with_child(VNode::text(&link.label)),
                            )
                            .with_optional_child(subtext),
                    )
                    .with_child(
                        VNode::element("div")
                            .with_class("w-8 h-8 rounded-full border border-current/20 flex items-center justify-center group-hover:bg-current group-hover:text-white group-hover:border-transparent transition-all")
                            .with_child(icon(CHEVRON_RIGHT, "14", "2")),
                    ),
            )
            .with_child(VNode::element("div").with_class(
                "absolute inset-0 bg-gradient-to-r from-transparent via-white/10 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500 transform -translate-x-full group-hover:translate-x-full",
            ))
    });

    VNode::element("div")
        .with_class("grid grid-cols-1 gap-4 max-w-md mx-auto")
        .with_children(cards)
}

fn boxed(body: &BoxBody, font_size: &FontSizes) -> VNode {
    VNode::element("div")
        .with_class("max-w-3xl mx-auto text-center")
        .with_child(
            VNode::element("h3")
                .with_class("font-medium tracking-widest mb-6")
                .with_style("font-size", rem(font_size.section_title))
                .with_child(VNode::text(&body.title)),
        )
        .with_child(
            VNode::element("p")
                .with_class("leading-loose whitespace-pre-wrap font-light")
                .with_style("font-size", rem(font_size.body))
                .with_child(VNode::text(&body.content)),
        )
}
