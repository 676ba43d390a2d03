use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_model::{to_config_string, Document};
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Page config file to create
    #[arg(short, long, default_value = "config.json")]
    pub input: String,

    /// Output directory for exports
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagecraft page...".bright_blue().bold());

    let config = Config {
        input: args.input.clone(),
        out_dir: args.out_dir.clone(),
        pretty: false,
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let page_path = config.get_input(cwd);
    if page_path.exists() && !args.force {
        println!("  {} Kept existing {}", "•".bright_black(), args.input);
    } else {
        if let Some(parent) = page_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&page_path, to_config_string(&Document::default())?)?;
        println!("  {} Created {}", "✓".green(), args.input);
    }

    println!();
    println!("{}", "✅ Page initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", args.input);
    println!("  2. Run: pagecraft export");
    println!("  3. Open {}/index.html", args.out_dir);

    Ok(())
}
