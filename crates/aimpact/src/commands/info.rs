//! Info command — version, config sources, and effective settings.

use aimpact_core::config::{Config, ConfigSources};
use aimpact_core::generator::{ContentType, TemplateSet};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

/// Everything `info` reports.
#[derive(Serialize)]
struct InfoReport<'a> {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    sources: &'a ConfigSources,
    config: EffectiveSettings,
    templates: Vec<TemplateSummary>,
}

/// Settings after all config layers are merged.
#[derive(Serialize)]
struct EffectiveSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    /// `None` means the limit is disabled.
    max_input_bytes: Option<usize>,
    debounce_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_readability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_templates: Option<Vec<String>>,
}

#[derive(Serialize)]
struct TemplateSummary {
    name: String,
    origin: TemplateOrigin,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
enum TemplateOrigin {
    Builtin,
    Custom,
}

impl EffectiveSettings {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let custom_templates = config.templates.as_ref().map(|t| {
            let mut names: Vec<String> = t.keys().cloned().collect();
            names.sort();
            names
        });
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
            debounce_ms: config.debounce().as_millis() as u64,
            min_readability: config.min_readability,
            custom_templates,
        }
    }
}

fn summarize_templates(config: &Config) -> Vec<TemplateSummary> {
    let custom = config.templates.as_ref();
    TemplateSet::with_custom(custom)
        .names()
        .map(|name| {
            let is_custom = custom.is_some_and(|c| c.contains_key(name))
                || !ContentType::ALL.iter().any(|ct| ct.as_str() == name);
            TemplateSummary {
                name: name.to_string(),
                origin: if is_custom {
                    TemplateOrigin::Custom
                } else {
                    TemplateOrigin::Builtin
                },
            }
        })
        .collect()
}

/// Print the version, where configuration came from, and the settings in effect.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let report = InfoReport {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        repository: env!("CARGO_PKG_REPOSITORY"),
        sources,
        config: EffectiveSettings::from_config(config, sources),
        templates: summarize_templates(config),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn heading(title: &str) {
    println!("\n{}", title.bold().underline());
}

fn print_report(report: &InfoReport<'_>) {
    println!("{} {}", report.name.bold(), report.version.green());
    if !report.description.is_empty() {
        println!("{}", report.description);
    }
    if !report.repository.is_empty() {
        println!("{} {}", "Repository:".dimmed(), report.repository.cyan());
    }

    heading("Config sources");
    let sources = report.sources;
    if sources.primary_file().is_none() {
        println!("  {}", "no config files found; using defaults".yellow());
    }
    if let Some(ref user) = sources.user_file {
        println!("  {} {user}", "user".dimmed());
    }
    for file in &sources.project_files {
        println!("  {} {file}", "project".dimmed());
    }
    for file in &sources.explicit_files {
        println!("  {} {file}", "--config".dimmed());
    }

    let settings = &report.config;
    heading("Logging");
    println!("  {} {}", "level".dimmed(), settings.log_level);
    match settings.log_dir {
        Some(ref dir) => println!("  {} {dir}", "directory".dimmed()),
        None => println!("  {} {}", "directory".dimmed(), "stderr only".dimmed()),
    }

    heading("Analysis");
    match settings.max_input_bytes {
        Some(max) => println!("  {} {max} bytes", "input limit".dimmed()),
        None => println!("  {} {}", "input limit".dimmed(), "disabled".yellow()),
    }
    match settings.min_readability {
        Some(min) => println!("  {} {min:.0}", "min readability".dimmed()),
        None => println!("  {} {}", "min readability".dimmed(), "(not set)".dimmed()),
    }
    println!("  {} {} ms", "watch debounce".dimmed(), settings.debounce_ms);

    heading("Templates");
    for template in &report.templates {
        match template.origin {
            TemplateOrigin::Builtin => println!("  {}", template.name),
            TemplateOrigin::Custom => {
                println!("  {} {}", template.name, "(custom)".yellow());
            }
        }
    }
}
