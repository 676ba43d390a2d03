pub mod export;
pub mod init;
pub mod preview;

pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use preview::{preview, PreviewArgs};

use colored::Colorize;
use pagecraft_model::{load_document, Document};
use std::path::Path;

/// Load the page config, falling back to the default page with a warning
fn load_page(path: &Path) -> (Document, Option<String>) {
    let loaded = load_document(path);
    if let Some(diagnostic) = &loaded.diagnostic {
        eprintln!("{} {}", "⚠️".yellow(), diagnostic.yellow());
    }
    (loaded.document, loaded.diagnostic)
}
