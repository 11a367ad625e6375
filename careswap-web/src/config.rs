use careswap_prefs::constants::CONFIG_ELEMENT_ID;
use careswap_prefs::{PrefsConfig, Result};
use web_sys::Document;

/// Parse the optional page config block; a missing or blank block means defaults.
///
/// # Errors
///
/// Returns an error when the block is present but is not a valid config.
pub fn config_from_block(block: Option<&str>) -> Result<PrefsConfig> {
    match block.map(str::trim) {
        None | Some("") => Ok(PrefsConfig::default()),
        Some(json) => PrefsConfig::from_json(json),
    }
}

/// Read `<script type="application/json" id="careswap-prefs-config">` from the page.
///
/// An invalid block is reported on the console and replaced by defaults.
#[must_use]
pub fn load_page_config(document: &Document) -> PrefsConfig {
    let block = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    config_from_block(block.as_deref()).unwrap_or_else(|err| {
        crate::dom::console_error(&format!("careswap: ignoring page config: {err}"));
        PrefsConfig::default()
    })
}
