use clap::{Parser, Subcommand};
use std::path::Path;

use chapter_namer_core::config::{
    config_path, load_config, load_config_from, render_options_from_config, template_for,
    NamingConfig,
};
use chapter_namer_core::format::OutputFormat;
use chapter_namer_core::sample::DataSource;
use chapter_namer_core::template::{render, TargetKind};
use chapter_namer_core::variables::{variables_for, VariableContext};

#[derive(Parser)]
#[command(name = "chapter-namer")]
#[command(about = "Naming-template rendering and preview for downloaded chapters")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to ~/.config/chapter-namer/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the configured templates against the sample dataset
    Preview {
        /// File-name template (overrides the config file)
        #[arg(long)]
        file_template: Option<String>,

        /// Folder template (overrides the config file)
        #[arg(long)]
        folder_template: Option<String>,

        /// Chapter padding token (auto, 0, 00, 000, 0000)
        #[arg(long)]
        chapter_padding: Option<String>,

        /// Volume padding token (0, 00, 000)
        #[arg(long)]
        volume_padding: Option<String>,

        /// Output format (cbz, pdf)
        #[arg(long)]
        format: Option<String>,

        /// Drop the chapter title from rendered names
        #[arg(long)]
        no_title: bool,

        /// Width used when chapter padding is auto
        #[arg(long, default_value = "4")]
        auto_width: usize,

        /// Sample-data override as KEY=VALUE (repeatable)
        #[arg(long = "set")]
        set: Vec<String>,
    },

    /// List the template variables available in a context
    Variables {
        /// Context (file, folder)
        #[arg(long, default_value = "file")]
        context: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Show the config file path
    Path,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = match &cli.config {
        Some(path) => load_config_from(Path::new(path)),
        None => load_config(),
    };

    let result = match &cli.command {
        Commands::Preview {
            file_template,
            folder_template,
            chapter_padding,
            volume_padding,
            format,
            no_title,
            auto_width,
            set,
        } => run_preview(
            cfg,
            file_template.as_deref(),
            folder_template.as_deref(),
            chapter_padding.as_deref(),
            volume_padding.as_deref(),
            format.as_deref(),
            *no_title,
            *auto_width,
            set,
            cli.json,
        ),
        Commands::Variables { context } => run_variables(context, cli.json),
        Commands::Config { action } => run_config(&cfg, action, cli.json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_preview(
    mut cfg: NamingConfig,
    file_template: Option<&str>,
    folder_template: Option<&str>,
    chapter_padding: Option<&str>,
    volume_padding: Option<&str>,
    format: Option<&str>,
    no_title: bool,
    auto_width: usize,
    set: &[String],
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Some(t) = file_template {
        cfg.file_name_template = t.to_string();
    }
    if let Some(t) = folder_template {
        cfg.folder_template = t.to_string();
    }
    if let Some(token) = chapter_padding {
        cfg.chapter_padding = token.to_string();
    }
    if let Some(token) = volume_padding {
        cfg.volume_padding = token.to_string();
    }
    if let Some(name) = format {
        cfg.output_format = parse_format(name)
            .ok_or_else(|| format!("Unknown output format: {}", name))?
            .code();
    }

    let mut options = render_options_from_config(&cfg)?;
    options.auto_pad_width = auto_width;
    if no_title {
        options.include_title = false;
    }

    let mut data = DataSource::sample();
    for pair in set {
        data.set_pair(pair)?;
    }

    let folder = render(
        template_for(&cfg, TargetKind::Folder),
        &data,
        TargetKind::Folder,
        &options,
    );
    let file_name = render(
        template_for(&cfg, TargetKind::FileName),
        &data,
        TargetKind::FileName,
        &options,
    );

    if json {
        let out = serde_json::json!({
            "folder": folder,
            "file_name": file_name,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Folder:    {}", folder);
        println!("File name: {}", file_name);
    }
    Ok(())
}

fn run_variables(
    context: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let context = match context.to_lowercase().as_str() {
        "file" | "filename" | "file-name" => VariableContext::FileName,
        "folder" => VariableContext::Folder,
        other => return Err(format!("Unknown context: {} (expected file or folder)", other).into()),
    };

    let variables = variables_for(context);
    if json {
        let out: Vec<serde_json::Value> = variables
            .iter()
            .map(|v| {
                serde_json::json!({
                    "name": v.name,
                    "description": v.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for v in variables {
            println!("{{{}}}  {}", v.name, v.description);
        }
    }
    Ok(())
}

fn run_config(
    cfg: &NamingConfig,
    action: &ConfigAction,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match action {
        ConfigAction::Show => {
            if json {
                println!("{}", serde_json::to_string_pretty(cfg)?);
            } else {
                print!("{}", toml::to_string(cfg)?);
            }
        }
        ConfigAction::Path => match config_path() {
            Some(p) => println!("{}", p.display()),
            None => return Err("Could not determine config directory".into()),
        },
    }
    Ok(())
}

fn parse_format(name: &str) -> Option<OutputFormat> {
    match name.to_lowercase().as_str() {
        "cbz" => Some(OutputFormat::Cbz),
        "pdf" => Some(OutputFormat::Pdf),
        _ => None,
    }
}
