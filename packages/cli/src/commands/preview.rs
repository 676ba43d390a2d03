use super::load_page;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use pagecraft_evaluator::RenderContext;
use pagecraft_preview::{Preview, PreviewOptions, ViewMode};
use std::path::Path;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Device frame (desktop, mobile)
    #[arg(short, long, default_value = "desktop")]
    pub mode: ViewMode,

    /// Section id to scroll into view
    #[arg(short, long)]
    pub focus: Option<u64>,

    /// Page config file (overrides config)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Copyright year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,
}

/// Render one interactive frame and print it as JSON
pub fn preview(args: PreviewArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = args
        .input
        .as_ref()
        .map(|input| cwd.join(input))
        .unwrap_or_else(|| config.get_input(cwd));

    let (document, diagnostic) = load_page(&input);
    let context = args.year.map(RenderContext::new).unwrap_or_default();

    let mut options = PreviewOptions::desktop().with_view_mode(args.mode);
    if let Some(id) = args.focus {
        options = options.with_focus(id);
    }
    if let Some(diagnostic) = diagnostic {
        options = options.with_diagnostic(diagnostic);
    }

    let frame = Preview::new(context).render(&document, &options);
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
