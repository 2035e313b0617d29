use common::StudioConfig;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` block holding
/// studio settings.
pub const CONFIG_ELEMENT_ID: &str = "memoryphoto-config";

/// Reads the page's config block. A missing block means defaults; a broken
/// one is reported and ignored.
pub fn load_config(document: &Document) -> StudioConfig {
    let text = match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(text) => text,
        None => return StudioConfig::default(),
    };

    parse_config(&text)
}

fn parse_config(text: &str) -> StudioConfig {
    if text.trim().is_empty() {
        return StudioConfig::default();
    }

    match StudioConfig::from_json(text) {
        Ok(config) => {
            log::info!("Loaded studio config: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Ignoring studio config: {}", e);
            StudioConfig::default()
        }
    }
}
