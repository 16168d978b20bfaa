//! Catalog inspection commands: list, show, schema

use std::path::Path;

use colored::Colorize;
use tmpl_core::TemplateKind;

use crate::context::CatalogOptions;
use crate::error::Result;

/// Run the list command
pub fn run_list(root: &Path, options: &CatalogOptions, kind_filter: Option<&str>) -> Result<()> {
    let catalog = options.load(root)?;
    let filter: Option<TemplateKind> = kind_filter.map(str::parse).transpose()?;

    println!("{}", "Available Templates".bold());
    println!();

    for kind in TemplateKind::ALL {
        if filter.is_some_and(|f| f != kind) {
            continue;
        }

        let names = catalog.templates().by_kind(kind);
        if names.is_empty() {
            continue;
        }

        println!("{}:", kind.to_string().cyan().bold());
        for name in names {
            let template = catalog.templates().get(name)?;
            let tool = template.meta.tool.as_deref().unwrap_or("-");
            println!(
                "  {:<26} {:<8} {}",
                name.green(),
                template.meta.version,
                tool.dimmed()
            );
        }
        println!();
    }

    println!(
        "{} {} templates available. Use {} to render one.",
        "Total:".dimmed(),
        catalog.templates().len(),
        "tmpl materialize <name>".cyan()
    );

    Ok(())
}

/// Run the show command
pub fn run_show(root: &Path, options: &CatalogOptions, name: &str) -> Result<()> {
    let catalog = options.load(root)?;
    let template = catalog.templates().get(name)?;

    println!("{} {}", "Template:".bold(), template.name().green());
    println!("  kind:        {}", template.kind());
    println!("  version:     {}", template.meta.version);
    if let Some(tool) = &template.meta.tool {
        println!("  tool:        {}", tool);
    }
    if let Some(description) = &template.meta.description {
        println!("  description: {}", description);
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&template.values)?);

    Ok(())
}

/// Run the schema command
pub fn run_schema(root: &Path, options: &CatalogOptions, kind: &str) -> Result<()> {
    let kind: TemplateKind = kind.parse()?;
    let catalog = options.load(root)?;
    let schema = catalog.schemas().lookup(kind)?;

    println!("{} {}", "Schema:".bold(), kind.to_string().cyan());
    println!();
    for (key, opt) in &schema.options {
        let required = if opt.required {
            "required".red().to_string()
        } else {
            "optional".dimmed().to_string()
        };
        let default = opt
            .default
            .as_ref()
            .map(|v| format!("default {}", v))
            .unwrap_or_default();
        println!(
            "  {:<28} {:<8} {} {}",
            key.green(),
            opt.expected_type,
            required,
            default.dimmed()
        );
    }

    Ok(())
}
