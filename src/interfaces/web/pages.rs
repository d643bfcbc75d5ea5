use super::embedded_assets::{WALLPAPER_TEMPLATE, WebAssets};
use crate::domain::wallpaper::RenderContext;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

const WALLPAPER: &str = "wallpaper.html";

/// JSON for embedding inside a `<script>` element. `<`, `>` and `&` are
/// written as unicode escapes so no string can close the element.
fn script_json(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let json = serde_json::to_string(value)
        .map_err(|e| tera::Error::msg(format!("script_json: {e}")))?;
    let escaped = json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026");
    Ok(Value::String(escaped))
}

/// HTML templates compiled once at startup from the embedded assets.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let template = WebAssets::get(WALLPAPER_TEMPLATE)
            .ok_or_else(|| anyhow::anyhow!("{WALLPAPER_TEMPLATE} is not embedded"))?;
        let source = std::str::from_utf8(&template.data)?;

        let mut tera = Tera::default();
        tera.register_filter("script_json", script_json);
        tera.add_raw_template(WALLPAPER, source)?;
        Ok(Self { tera })
    }

    pub fn render_wallpaper(&self, context: &RenderContext) -> Result<String, tera::Error> {
        let context = Context::from_serialize(context)?;
        self.tera.render(WALLPAPER, &context)
    }
}
