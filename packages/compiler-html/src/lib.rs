//! Static export: serializes the evaluated page into one standalone HTML
//! document that needs no runtime besides the CDN utility-CSS engine.

mod compiler;

pub use compiler::{
    compile_fragment, compile_vdocument, escape_html, export, export_to_dir, export_with,
    ExportError, ExportOptions, EXPORT_FILENAME,
};

#[cfg(test)]
mod tests;
