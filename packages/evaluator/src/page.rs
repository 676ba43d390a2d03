//! Page chrome around the sections: header with navigation, the mobile
//! menu overlay, hero, section container and footer.

use crate::decoration::decorate;
use crate::sections::render_body;
use crate::vdom::VNode;
use pagecraft_model::{BackgroundKind, Document, HeroType, MenuLink};

pub const MENU_BUTTON_ID: &str = "menu-btn";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const HERO_ID: &str = "hero";
pub const SECTIONS_ID: &str = "sections";
pub const FOOTER_ID: &str = "footer";

/// Root node of the page: `div.relative.min-h-screen` holding everything
pub fn page(document: &Document, year: i32) -> VNode {
    VNode::element("div")
        .with_class(format!(
            "relative min-h-screen flex flex-col {}",
            document.font_family.class()
        ))
        .with_child(header(document))
        .with_child(mobile_menu(&document.menu_items))
        .with_child(hero(document))
        .with_child(sections(document))
        .with_child(footer(document, year))
}

fn menu_list(items: &[MenuLink], class: &str) -> VNode {
    VNode::element("ul")
        .with_class(class)
        .with_children(items.iter().map(|item| {
            VNode::element("li").with_key(format!("menu-{}", item.id)).with_child(
                VNode::element("a")
                    .with_attr("href", &item.url)
                    .with_class("block py-2 md:py-0 md:px-4 hover:opacity-70 transition-opacity")
                    .with_child(VNode::text(&item.label)),
            )
        }))
}

fn header(document: &Document) -> VNode {
    let bar = |width: &str| {
        VNode::element("span").with_class(format!(
            "{} h-0.5 bg-current transition-all duration-300 origin-right",
            width
        ))
    };

    VNode::element("header")
        .with_class("absolute top-0 left-0 w-full z-30 px-6 py-4 text-white")
        .with_child(
            VNode::element("div")
                .with_class("flex justify-between items-center max-w-7xl mx-auto")
                .with_child(
                    VNode::element("div")
                        .with_class("font-bold text-lg tracking-widest uppercase opacity-90 mix-blend-difference relative z-50")
                        .with_child(VNode::text(&document.site_title)),
                )
                .with_child(
                    VNode::element("nav")
                        .with_class("hidden md:block mix-blend-difference")
                        .with_child(menu_list(
                            &document.menu_items,
                            "flex space-x-6 text-sm tracking-widest font-medium",
                        )),
                )
                .with_child(
                    VNode::element("button")
                        .with_attr("id", MENU_BUTTON_ID)
                        .with_attr("aria-label", "Menu")
                        .with_class("md:hidden z-50 relative w-8 h-8 flex flex-col justify-center items-end gap-1.5 group mix-blend-difference")
                        .with_child(bar("w-full"))
                        .with_child(bar("w-2/3"))
                        .with_child(bar("w-full")),
                ),
        )
}

fn mobile_menu(items: &[MenuLink]) -> VNode {
    VNode::element("div")
        .with_attr("id", MOBILE_MENU_ID)
        .with_class("fixed inset-0 bg-black/95 z-40 transform translate-x-full flex items-center justify-center md:hidden")
        .with_child(menu_list(items, "text-center space-y-8 text-white"))
}

fn hero(document: &Document) -> VNode {
    let inset = document.hero_width < 100.0;
    let media = match document.hero_type {
        HeroType::Video => VNode::element("video")
            .with_attr("src", &document.hero_url)
            .with_attr("autoplay", "")
            .with_attr("loop", "")
            .with_attr("muted", "")
            .with_attr("playsinline", "")
            .with_class("w-full h-full object-cover"),
        HeroType::Image => {
            let src = if document.hero_url.is_empty() {
                &document.hero_image_fallback
            } else {
                &document.hero_url
            };
            VNode::element("img")
                .with_attr("src", src)
                .with_attr("alt", "Hero")
                .with_class("hero-media w-full h-full object-cover")
        }
    }
    .with_style("filter", format!("blur({}px)", document.hero_blur))
    .with_style(
        "object-position",
        format!("{}% {}%", document.hero_position_x, document.hero_position_y),
    );

    VNode::element("div")
        .with_attr("id", HERO_ID)
        .with_class("hero-container relative mx-auto overflow-hidden shadow-lg group")
        .with_style("width", format!("{}%", document.hero_width))
        .with_style("height", format!("{}vh", document.hero_height))
        .with_style("margin-top", if inset { "20px" } else { "0" })
        .with_style("border-radius", if inset { "16px" } else { "0" })
        .with_child(
            VNode::element("div")
                .with_class("absolute inset-0 w-full h-full")
                .with_child(media),
        )
        .with_child(
            VNode::element("div")
                .with_class("absolute inset-0 bg-black transition-opacity duration-300")
                .with_style("opacity", document.hero_overlay_opacity.to_string()),
        )
        .with_child(
            VNode::element("div")
                .with_class("absolute inset-0 flex flex-col items-center justify-center text-center p-6 text-white z-10")
                .with_child(
                    VNode::element("h2")
                        .with_class("font-light leading-tight mb-6 opacity-0 animate-fadeInUp")
                        .with_style("animation-delay", "0.2s")
                        .with_style("font-size", format!("{}rem", document.font_size.hero_title))
                        .with_child(VNode::text(&document.hero_title)),
                )
                .with_child(
                    VNode::element("p")
                        .with_class("uppercase tracking-[0.2em] opacity-0 animate-fadeInUp leading-loose whitespace-pre-wrap")
                        .with_style("animation-delay", "0.4s")
                        .with_style("font-size", format!("{}rem", document.font_size.hero_subtitle))
                        .with_child(VNode::text(&document.hero_subtitle)),
                ),
        )
        .with_child(
            VNode::element("div")
                .with_class("absolute bottom-6 left-1/2 transform -translate-x-1/2 text-white/50 animate-bounce")
                .with_child(VNode::element("div").with_class("w-[1px] h-8 bg-white/50 mx-auto")),
        )
}

/// Container of decorated sections, in document order
pub fn sections(document: &Document) -> VNode {
    VNode::element("div")
        .with_attr("id", SECTIONS_ID)
        .with_class("relative z-10 flex-1 flex flex-col w-full")
        .with_children(document.sections.iter().enumerate().map(|(index, section)| {
            let body = render_body(section, &document.font_size);
            decorate(&section.anchor(), index, &section.decoration, body)
        }))
}

fn footer(document: &Document, year: i32) -> VNode {
    let background = match document.page_bg_type {
        BackgroundKind::Color => document.page_bg_value.as_str(),
        BackgroundKind::Image => "transparent",
    };

    VNode::element("footer")
        .with_attr("id", FOOTER_ID)
        .with_class("py-8 text-center border-t border-current/10 opacity-60 mt-auto")
        .with_style("background-color", background)
        .with_child(
            VNode::element("p")
                .with_class("text-[10px] uppercase tracking-widest")
                .with_child(VNode::text(format!(
                    "\u{a9} {} {}. All Rights Reserved.",
                    year, document.site_title
                ))),
        )
}
