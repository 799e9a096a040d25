//! Embedded `Cairn.toml` template for `cairn init`.
//!
//! The template is compiled into the binary via `include_str!`. Simple
//! `{{variable}}` interpolation is performed at render time.

use std::collections::BTreeMap;

/// Default Android multi-project manifest: Java 17, compile SDK 35,
/// build-tools 35.0.0, NDK 28.2.13676358, shared `../../build` output,
/// every subproject evaluated after `app`.
pub const ANDROID_TEMPLATE: &str = include_str!("../templates/android.toml");

/// Variables available for `{{variable}}` interpolation in template content.
pub struct TemplateContext {
    vars: BTreeMap<String, String>,
}

impl TemplateContext {
    /// Create a context with the standard project variables.
    pub fn new(project_name: &str, group: &str) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert("project_name".to_string(), project_name.to_string());
        vars.insert("group".to_string(), group.to_string());
        Self { vars }
    }

    /// Add a custom variable to the context.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

/// Replace all `{{key}}` placeholders in `input` with values from `ctx`.
/// Unknown placeholders are left intact.
pub fn interpolate(input: &str, ctx: &TemplateContext) -> String {
    let mut result = input.to_string();
    for (key, value) in &ctx.vars {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

/// Render the default manifest for a project.
///
/// Values are written as TOML strings, quoted and escaped, so any name or
/// group yields a manifest that parses back to the same value.
pub fn render_manifest(ctx: &TemplateContext) -> String {
    let quoted = TemplateContext {
        vars: ctx
            .vars
            .iter()
            .map(|(k, v)| (k.clone(), toml::Value::String(v.clone()).to_string()))
            .collect(),
    };
    interpolate(ANDROID_TEMPLATE, &quoted)
}
