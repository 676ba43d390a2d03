use super::load_page;
use crate::config::Config;
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use pagecraft_compiler_html::ExportOptions;
use pagecraft_editor::{Artifact, DirectoryDownloader, EditSession};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// Standalone index.html
    Html,
    /// Normalized config.json
    Config,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(short, long, value_enum, default_value = "html")]
    pub target: ExportTarget,

    /// Page config file (overrides config)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Copyright year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Indent exported HTML
    #[arg(long)]
    pub pretty: bool,
}

pub fn export(args: ExportArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = args
        .input
        .as_ref()
        .map(|input| cwd.join(input))
        .unwrap_or_else(|| config.get_input(cwd));
    let out_dir = args
        .out_dir
        .as_ref()
        .map(|dir| cwd.join(dir))
        .unwrap_or_else(|| config.get_out_dir(cwd));

    let (document, _) = load_page(&input);
    let session = EditSession::new(document);

    let mut options = ExportOptions::default().pretty(args.pretty || config.pretty);
    if let Some(year) = args.year {
        options.year = year;
    }

    if args.stdout {
        let artifact = match args.target {
            ExportTarget::Html => Artifact::html_with(session.document(), &options),
            ExportTarget::Config => Artifact::config(session.document())?,
        };
        std::io::stdout().write_all(&artifact.bytes)?;
        return Ok(());
    }

    println!("{}", "🔨 Exporting page...".bright_blue().bold());

    let mut downloader = DirectoryDownloader::new(&out_dir);
    let artifact = match args.target {
        ExportTarget::Html => session.export_html(&options, &mut downloader)?,
        ExportTarget::Config => session.export_config(&mut downloader)?,
    };

    let written: PathBuf = out_dir.join(&artifact.suggested_filename);
    println!(
        "  {} {} → {} ({} bytes)",
        "✓".green(),
        input.strip_prefix(cwd).unwrap_or(&input).display(),
        written.strip_prefix(cwd).unwrap_or(&written).display(),
        artifact.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{parse_config, to_config_string, Document};
    use std::fs;

    fn args(target: ExportTarget) -> ExportArgs {
        ExportArgs {
            target,
            input: None,
            out_dir: None,
            stdout: false,
            year: Some(2024),
            pretty: false,
        }
    }

    #[test]
    fn test_export_html_to_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::default();
        doc.site_title = "LUMEN".to_string();
        fs::write(dir.path().join("config.json"), to_config_string(&doc).unwrap()).unwrap();

        export(args(ExportTarget::Html), dir.path()).unwrap();

        let html = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(html.contains("<title>LUMEN</title>"));
        assert!(html.contains("2024 LUMEN. All Rights Reserved."));
    }

    #[test]
    fn test_export_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), "{ not json").unwrap();

        export(args(ExportTarget::Config), dir.path()).unwrap();

        let written = fs::read_to_string(dir.path().join("dist/config.json")).unwrap();
        assert_eq!(parse_config(&written).unwrap(), Document::default());
    }
}
