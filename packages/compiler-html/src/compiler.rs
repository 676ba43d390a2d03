use pagecraft_evaluator::{
    evaluate, EmbedScript, RenderContext, VNode, VirtualDomDocument, ERROR_MARKER_CLASS,
};
use pagecraft_model::Document;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

/// File name of the exported page
pub const EXPORT_FILENAME: &str = "index.html";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options for static export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Year printed in the footer copyright line
    pub year: i32,
    /// Indent the markup; compact output otherwise
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl ExportOptions {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            year: RenderContext::current().year,
            pretty: false,
            indent: "  ".to_string(),
        }
    }
}

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const TAILWIND_CONFIG: &[&str] = &[
    "tailwind.config = {",
    "  theme: {",
    "    extend: {",
    "      keyframes: {",
    "        fadeInUp: {",
    "          '0%': { opacity: '0', transform: 'translateY(20px)' },",
    "          '100%': { opacity: '1', transform: 'translateY(0)' },",
    "        }",
    "      },",
    "      animation: {",
    "        fadeInUp: 'fadeInUp 0.5s ease-out forwards',",
    "      }",
    "    }",
    "  }",
    "}",
];

const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Cormorant+Garamond:ital,wght@0,300;0,400;0,600;1,400&family=Noto+Sans+JP:wght@300;400;500;700&display=swap";

const STYLESHEET: &[&str] = &[
    ".font-serif { font-family: 'Cormorant Garamond', 'Noto Sans JP', serif; }",
    ".font-sans { font-family: 'Noto Sans JP', sans-serif; }",
    "@keyframes fadeInUp { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: translateY(0); } }",
    ".animate-fadeInUp { animation: fadeInUp 1s cubic-bezier(0.16, 1, 0.3, 1) forwards; }",
    ".hero-media { transition: transform 20s linear; transform: scale(1); }",
    ".hero-container:hover .hero-media { transform: scale(1.1); }",
    "#mobile-menu { transition: transform 0.3s ease-in-out; }",
    "html { scroll-behavior: smooth; }",
    "summary::-webkit-details-marker { display: none; }",
    ".scrollbar-hide::-webkit-scrollbar { display: none; }",
    ".scrollbar-hide { -ms-overflow-style: none; scrollbar-width: none; }",
];

const MENU_SCRIPT: &[&str] = &[
    "const menuBtn = document.getElementById('menu-btn');",
    "const mobileMenu = document.getElementById('mobile-menu');",
    "if (menuBtn && mobileMenu) {",
    "  const spans = menuBtn.querySelectorAll('span');",
    "  let isOpen = false;",
    "  const setOpen = (open) => {",
    "    isOpen = open;",
    "    mobileMenu.classList.toggle('translate-x-full', !open);",
    "    spans[0].style.transform = open ? 'rotate(45deg) translate(5px, 6px)' : 'none';",
    "    spans[1].style.opacity = open ? '0' : '1';",
    "    spans[2].style.transform = open ? 'rotate(-45deg) translate(5px, -6px)' : 'none';",
    "  };",
    "  menuBtn.addEventListener('click', () => setOpen(!isOpen));",
    "  mobileMenu.querySelectorAll('a').forEach(link => link.addEventListener('click', () => setOpen(false)));",
    "}",
];

/// Attributes written without a value when their value is empty
const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autoplay",
    "controls",
    "crossorigin",
    "loop",
    "muted",
    "open",
    "playsinline",
];

struct Context {
    options: ExportOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: ExportOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_lines(&mut self, lines: &[&str]) {
        for line in lines {
            self.add_line(line);
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Export a document as a standalone HTML page for the current year
pub fn export(document: &Document) -> String {
    export_with(document, &ExportOptions::default())
}

/// Export a document as a standalone HTML page
#[instrument(skip(document, options), fields(sections = document.sections.len(), year = options.year))]
pub fn export_with(document: &Document, options: &ExportOptions) -> String {
    let vdoc = evaluate(document, RenderContext::new(options.year));
    let html = compile_vdocument(&vdoc, options);
    info!(bytes = html.len(), "Exported page");
    html
}

/// Write the exported page into `out_dir`, returning the written path
pub fn export_to_dir(
    document: &Document,
    options: &ExportOptions,
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let path = out_dir.join(EXPORT_FILENAME);
    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;
    std::fs::write(&path, export_with(document, options)).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "Wrote export");
    Ok(path)
}

/// Serialize an evaluated document to a complete HTML page
pub fn compile_vdocument(vdoc: &VirtualDomDocument, options: &ExportOptions) -> String {
    let mut ctx = Context::new(options.clone());

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"ja\">");
    ctx.indent();

    compile_head(vdoc, &mut ctx);

    ctx.add_line(&format!(
        "<body class=\"antialiased\" style=\"{}\">",
        escape_html(&style_attribute(&vdoc.page_styles))
    ));
    ctx.indent();

    for node in &vdoc.nodes {
        compile_node(node, &mut ctx);
    }

    ctx.add_line("<script>");
    ctx.indent();
    ctx.add_lines(MENU_SCRIPT);
    ctx.dedent();
    ctx.add_line("</script>");

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

/// Serialize a single subtree in compact form
pub fn compile_fragment(node: &VNode) -> String {
    let mut ctx = Context::new(ExportOptions {
        year: 0,
        pretty: false,
        indent: String::new(),
    });
    compile_node(node, &mut ctx);
    ctx.get_output()
}

fn compile_head(vdoc: &VirtualDomDocument, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&vdoc.title)));
    ctx.add_line(&format!("<script src=\"{}\"></script>", TAILWIND_CDN));

    ctx.add_line("<script>");
    ctx.indent();
    ctx.add_lines(TAILWIND_CONFIG);
    ctx.dedent();
    ctx.add_line("</script>");

    ctx.add_line("<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">");
    ctx.add_line("<link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>");
    ctx.add_line(&format!(
        "<link href=\"{}\" rel=\"stylesheet\">",
        escape_html(FONT_STYLESHEET)
    ));

    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_lines(STYLESHEET);
    ctx.dedent();
    ctx.add_line("</style>");

    for embed in &vdoc.embeds {
        compile_embed_script(*embed, ctx);
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_embed_script(embed: EmbedScript, ctx: &mut Context) {
    let charset = match embed {
        EmbedScript::Twitter => " charset=\"utf-8\"",
        EmbedScript::Instagram => "",
    };
    ctx.add_line(&format!(
        "<script async src=\"{}\"{}></script>",
        embed.src(),
        charset
    ));
}

fn compile_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
            ..
        } => compile_tag(tag, attributes, styles, children, ctx),

        VNode::Text { content } => ctx.add(&escape_html(content)),

        VNode::Comment { content } => {
            ctx.add_line(&format!("<!-- {} -->", content.replace("--", "- -")))
        }

        VNode::Error { message, .. } => ctx.add_line(&format!(
            "<div class=\"{}\">{}</div>",
            ERROR_MARKER_CLASS,
            escape_html(message)
        )),
    }
}

fn compile_tag(
    name: &str,
    attributes: &BTreeMap<String, String>,
    styles: &BTreeMap<String, String>,
    children: &[VNode],
    ctx: &mut Context,
) {
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", name));

    for (attr_name, value) in attributes {
        ctx.add(" ");
        compile_attribute(attr_name, value, ctx);
    }

    if !styles.is_empty() {
        ctx.add(&format!(
            " style=\"{}\"",
            escape_html(&style_attribute(styles))
        ));
    }

    if is_void(name) {
        ctx.add(">");
        if ctx.options.pretty {
            ctx.add("\n");
        }
        return;
    }

    ctx.add(">");

    if !children.is_empty() {
        let block = has_element_children(children);
        if ctx.options.pretty && block {
            ctx.add("\n");
        }
        ctx.indent();

        for child in children {
            compile_node(child, ctx);
        }

        ctx.dedent();
        if ctx.options.pretty && block {
            ctx.add_indent();
        }
    }

    ctx.add(&format!("</{}>", name));
    if ctx.options.pretty {
        ctx.add("\n");
    }
}

fn compile_attribute(name: &str, value: &str, ctx: &mut Context) {
    ctx.add(name);
    if value.is_empty() && BOOLEAN_ATTRIBUTES.contains(&name) {
        return;
    }
    ctx.add("=\"");
    ctx.add(&escape_html(value));
    ctx.add("\"");
}

/// Inline style declarations in key order
fn style_attribute(styles: &BTreeMap<String, String>) -> String {
    styles
        .iter()
        .map(|(key, value)| format!("{}: {};", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| !matches!(child, VNode::Text { .. }))
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "img" | "input" | "br" | "hr" | "meta" | "link" | "source" | "track" | "wbr"
    )
}
