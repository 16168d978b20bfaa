//! Built-in schemas and templates
//!
//! The lint schema follows the remark configuration file (`.remarkrc`),
//! the test-runner schema follows the karma configuration object. Defaults
//! mirror the consuming tools' own defaults.

use serde_json::json;

use crate::{OptionDescriptor, SchemaEntry, Template, TemplateKind, ValueType};

/// Number of built-in templates.
pub const BUILTIN_TEMPLATE_COUNT: usize = 3;

/// Returns the built-in schema entries, one per kind.
pub fn builtin_schemas() -> Vec<SchemaEntry> {
    vec![lint_schema(), test_runner_schema()]
}

/// Returns all built-in templates.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        remark_template(),
        remark_consistent_template(),
        karma_chromium_headless_template(),
    ]
}

fn lint_schema() -> SchemaEntry {
    SchemaEntry::new(TemplateKind::Lint)
        .with_option(
            "frail",
            OptionDescriptor::optional(ValueType::Boolean)
                .with_default(false)
                .with_description("Treat warnings as errors"),
        )
        .with_option(
            "plugins",
            OptionDescriptor::required(ValueType::Object)
                .with_description("Plugin names mapped to their options"),
        )
        .with_option(
            "settings",
            OptionDescriptor::optional(ValueType::Object)
                .with_default(json!({}))
                .with_description("Markdown stringify settings"),
        )
}

fn test_runner_schema() -> SchemaEntry {
    SchemaEntry::new(TemplateKind::TestRunner)
        .with_option(
            "basePath",
            OptionDescriptor::optional(ValueType::String).with_default(""),
        )
        .with_option(
            "files",
            OptionDescriptor::required(ValueType::Array)
                .with_description("Files or patterns loaded into the browser"),
        )
        .with_option(
            "browsers",
            OptionDescriptor::optional(ValueType::Array).with_default(json!([])),
        )
        .with_option(
            "browserDisconnectTimeout",
            OptionDescriptor::optional(ValueType::Integer).with_default(2000),
        )
        .with_option(
            "browserDisconnectTolerance",
            OptionDescriptor::optional(ValueType::Integer).with_default(0),
        )
        .with_option(
            "browserNoActivityTimeout",
            OptionDescriptor::optional(ValueType::Integer).with_default(30000),
        )
        .with_option(
            "customLaunchers",
            OptionDescriptor::optional(ValueType::Object).with_default(json!({})),
        )
        .with_option(
            "frameworks",
            OptionDescriptor::optional(ValueType::Array).with_default(json!([])),
        )
        .with_option("plugins", OptionDescriptor::optional(ValueType::Array))
        .with_option(
            "colors",
            OptionDescriptor::optional(ValueType::Boolean).with_default(true),
        )
        .with_option(
            "logLevel",
            OptionDescriptor::optional(ValueType::String)
                .with_default("INFO")
                .with_description("One of DISABLE, ERROR, WARN, INFO, DEBUG"),
        )
        .with_option(
            "client",
            OptionDescriptor::optional(ValueType::Object)
                .with_description("Options passed through to the in-browser client"),
        )
        .with_option(
            "singleRun",
            OptionDescriptor::optional(ValueType::Boolean).with_default(false),
        )
        .with_option(
            "retryLimit",
            OptionDescriptor::optional(ValueType::Integer).with_default(2),
        )
}

fn remark_plugins() -> serde_json::Value {
    json!({
        "toc": { "tight": true },
        "remark-gfm": true
    })
}

fn remark_consistent_plugins() -> serde_json::Value {
    json!({
        "remark-gfm": true,
        "remark-preset-lint-consistent": true
    })
}

fn remark_settings() -> serde_json::Value {
    json!({
        "bullet": "*",
        "incrementListMarker": false,
        "listItemIndent": "1"
    })
}

fn remark_template() -> Template {
    Template::new("remark", TemplateKind::Lint)
        .with_tool("remark")
        .with_description("GitHub-flavored markdown with a tight table of contents")
        .with_value("frail", true)
        .with_value("plugins", remark_plugins())
        .with_value("settings", remark_settings())
}

// Swaps the toc plugin for the consistency lint preset
fn remark_consistent_template() -> Template {
    Template::new("remark-consistent", TemplateKind::Lint)
        .with_tool("remark")
        .with_description("GitHub-flavored markdown with the consistency lint preset")
        .with_value("frail", true)
        .with_value("plugins", remark_consistent_plugins())
        .with_value("settings", remark_settings())
}

fn karma_chromium_headless_template() -> Template {
    Template::new("karma-chromium-headless", TemplateKind::TestRunner)
        .with_tool("karma")
        .with_description("Single-run ClojureScript tests in headless Chromium")
        .with_value("basePath", "target/karma")
        .with_value("files", json!(["test.js"]))
        .with_value("browsers", json!(["JesiChromiumHeadless"]))
        .with_value("browserDisconnectTimeout", 10000)
        .with_value("browserDisconnectTolerance", 5)
        .with_value("browserNoActivityTimeout", 60000)
        .with_value(
            "customLaunchers",
            json!({
                "JesiChromiumHeadless": {
                    "base": "ChromiumHeadless",
                    "displayName": "ChromiumHeadless",
                    "flags": [
                        "--disable-dev-shm-usage",
                        "--disable-gpu",
                        "--disk-cache-size=0",
                        "--headless"
                    ]
                }
            }),
        )
        .with_value("frameworks", json!(["cljs-test"]))
        .with_value("plugins", json!(["karma-cljs-test", "karma-chrome-launcher"]))
        .with_value("colors", true)
        .with_value("logLevel", "INFO")
        .with_value(
            "client",
            json!({
                "args": ["shadow.test.karma.init"],
                "singleRun": true
            }),
        )
        .with_value("singleRun", true)
        .with_value("retryLimit", 0)
}
