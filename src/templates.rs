//! Template registry setup.

use handlebars::Handlebars;
use tracing::info;

/// Name the index template is registered under.
pub const INDEX_TEMPLATE: &str = "index";

const INDEX_TEMPLATE_FILE: &str = "./views/index.hbs";

/// Builds the Handlebars registry with every template the routes render.
/// A missing or unparsable template file is a startup error.
pub fn build_registry() -> Result<Handlebars<'static>, String> {
    let mut registry = Handlebars::new();
    registry
        .register_template_file(INDEX_TEMPLATE, INDEX_TEMPLATE_FILE)
        .map_err(|e| format!("Failed to register template '{}': {}", INDEX_TEMPLATE_FILE, e))?;

    info!("Registered {} template(s).", registry.get_templates().len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// The shipped index template renders and interpolates the client id.
    #[test]
    fn test_index_template_renders_client_id() {
        let registry = build_registry().expect("registry should build");
        let html = registry
            .render(INDEX_TEMPLATE, &json!({ "client_id": "client-abc-1" }))
            .expect("template should render");

        assert!(html.contains("client-abc-1"));
    }
}
