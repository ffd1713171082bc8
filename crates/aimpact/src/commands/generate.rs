//! Generate command — fill a content template from a prompt.

use std::collections::HashMap;

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use aimpact_core::generator::{ContentType, TemplateSet};

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// What the content should be about.
    #[arg(required_unless_present = "list")]
    pub prompt: Option<String>,

    /// Template name (built-in or from configuration).
    #[arg(long, short, default_value = "blog")]
    pub template: String,

    /// List available templates and exit.
    #[arg(long, conflicts_with = "prompt")]
    pub list: bool,
}

#[derive(Serialize)]
struct TemplateEntry<'a> {
    name: &'a str,
    builtin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
}

/// Generate content, or list the available templates.
#[instrument(name = "cmd_generate", skip_all, fields(template = %args.template))]
pub fn cmd_generate(
    args: GenerateArgs,
    global_json: bool,
    custom_templates: Option<&HashMap<String, String>>,
) -> anyhow::Result<()> {
    let templates = TemplateSet::with_custom(custom_templates);

    if args.list {
        return list_templates(&templates, custom_templates, global_json);
    }

    let Some(prompt) = args.prompt else {
        bail!("a prompt is required unless --list is given");
    };
    debug!(prompt_len = prompt.len(), "executing generate command");

    let generated = templates.generate(&prompt, &args.template)?;
    if global_json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        println!("{}", generated.content);
    }
    Ok(())
}

fn list_templates(
    templates: &TemplateSet,
    custom: Option<&HashMap<String, String>>,
    global_json: bool,
) -> anyhow::Result<()> {
    let entries: Vec<TemplateEntry<'_>> = templates
        .names()
        .map(|name| {
            let overridden = custom.is_some_and(|c| c.contains_key(name));
            let builtin = builtin_type(name).filter(|_| !overridden);
            TemplateEntry {
                name,
                builtin: builtin.is_some(),
                description: builtin.map(|ct| ct.description()),
            }
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        match builtin_type(entry.name).filter(|_| entry.builtin) {
            Some(ct) => println!(
                "{:<10} {} {}",
                entry.name.bold(),
                ct.display_name(),
                format!("({})", ct.description()).dimmed()
            ),
            None => println!("{:<10} {}", entry.name.bold(), "custom".yellow()),
        }
    }
    Ok(())
}

fn builtin_type(name: &str) -> Option<ContentType> {
    ContentType::ALL.into_iter().find(|ct| ct.as_str() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(prompt: Option<&str>, template: &str, list: bool) -> GenerateArgs {
        GenerateArgs {
            prompt: prompt.map(str::to_string),
            template: template.to_string(),
            list,
        }
    }

    #[test]
    fn generate_builtin_succeeds() {
        assert!(cmd_generate(args(Some("AI in schools"), "email", false), false, None).is_ok());
    }

    #[test]
    fn unknown_template_fails() {
        let err = cmd_generate(args(Some("topic"), "poem", false), false, None).unwrap_err();
        assert!(err.to_string().contains("unknown template: poem"));
    }

    #[test]
    fn empty_prompt_fails() {
        let err = cmd_generate(args(Some("  "), "blog", false), true, None).unwrap_err();
        assert!(err.to_string().contains("prompt is empty"));
    }

    #[test]
    fn custom_template_is_available() {
        let custom = HashMap::from([("memo".to_string(), "Memo on AI".to_string())]);
        assert!(cmd_generate(args(Some("budget"), "memo", false), true, Some(&custom)).is_ok());
    }

    #[test]
    fn list_succeeds() {
        assert!(cmd_generate(args(None, "blog", true), false, None).is_ok());
        assert!(cmd_generate(args(None, "blog", true), true, None).is_ok());
    }

    #[test]
    fn builtin_type_lookup() {
        assert_eq!(builtin_type("social"), Some(ContentType::Social));
        assert_eq!(builtin_type("memo"), None);
    }
}
