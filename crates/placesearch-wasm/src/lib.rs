//! placesearch-wasm — WebAssembly bindings for placesearch-core
//!
//! This crate exposes the destination autocomplete to JavaScript. It is
//! shaped for an async "load options" dropdown: every keystroke calls
//! `load_page(query, loadedOptions, additional)` and gets back a Promise of
//! `{ options, hasMore, additional: { page } }`.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//!   from the sample catalog embedded in the binary
//! - `init_catalog(json)` to swap in your own array of places
//! - `load_page(query, loaded, additional)` for the dropdown
//! - `search(query)`, `correct(word)`, `get_stats()`
//! - `begin_request()` / `is_current_request(id)` to drop stale responses
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { load_page, begin_request, is_current_request } from 'placesearch-wasm';
//!
//! await init();
//! async function loadOptions(query, loaded, additional) {
//!   const id = begin_request();
//!   const page = await load_page(query, loaded, additional);
//!   return is_current_request(id) ? page : { options: [], hasMore: false, additional };
//! }
//! ```
use std::sync::{Arc, RwLock};

use placesearch_core::{
    Additional, Catalog, LoadController, PlaceSearch, RequestTracker, SearchEngine,
};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

// Sample catalog shipped with the core crate.
static EMBEDDED_CATALOG: &str = include_str!("../../placesearch-core/data/places.json");

static ENGINE: RwLock<Option<Arc<SearchEngine>>> = RwLock::new(None);
static REQUESTS: RequestTracker = RequestTracker::new();

fn console_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    log::info!("{msg}");
}

fn install(catalog: Catalog) -> Arc<SearchEngine> {
    let engine = SearchEngine::new(catalog).into_shared();
    let stats = engine.stats();
    console_log(&format!(
        "✓ Loaded {} places ({} vocabulary terms)",
        stats.places, stats.vocabulary
    ));
    if let Ok(mut slot) = ENGINE.write() {
        *slot = Some(Arc::clone(&engine));
    }
    engine
}

fn engine() -> Result<Arc<SearchEngine>, JsValue> {
    if let Some(engine) = ENGINE.read().ok().and_then(|slot| slot.clone()) {
        return Ok(engine);
    }
    let catalog = Catalog::from_json_str(EMBEDDED_CATALOG).map_err(to_js_error)?;
    Ok(install(catalog))
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log("Initializing placesearch WASM module...");
    if let Err(e) = engine() {
        web_sys::console::error_1(&e);
    }
}

/* --------------------------------------------------------------------------
   Catalog
-------------------------------------------------------------------------- */

/// Replace the active catalog with a JSON array of places.
/// Returns the number of places kept.
#[wasm_bindgen]
pub fn init_catalog(json: &str) -> Result<usize, JsValue> {
    let catalog = Catalog::from_json_str(json).map_err(to_js_error)?;
    Ok(install(catalog).catalog().len())
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let stats = engine()?.stats();
    to_value(&stats).map_err(JsValue::from)
}

/* --------------------------------------------------------------------------
   Dropdown loading
-------------------------------------------------------------------------- */

/// Load one page of options. `additional` is the cursor returned by the
/// previous call (`{ page }`), or `undefined` for the first page.
#[wasm_bindgen]
pub fn load_page(
    query: Option<String>,
    _loaded: JsValue,
    additional: JsValue,
) -> Result<js_sys::Promise, JsValue> {
    let additional: Additional = from_value::<Option<Additional>>(additional)
        .map_err(JsValue::from)?
        .unwrap_or_default();
    let controller = LoadController::new(engine()?);
    let page = controller.load_page(query.as_deref().unwrap_or(""), &[], additional);
    let value = to_value(&page).map_err(JsValue::from)?;
    Ok(js_sys::Promise::resolve(&value))
}

/// First page of matches for `query`, as an array of places.
#[wasm_bindgen]
pub fn search(query: Option<String>) -> Result<JsValue, JsValue> {
    let options = engine()?.search(query.as_deref().unwrap_or(""));
    to_value(&options).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn correct(word: &str) -> Result<String, JsValue> {
    Ok(engine()?.correct(word))
}

/* --------------------------------------------------------------------------
   Stale response handling
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn begin_request() -> f64 {
    REQUESTS.begin() as f64
}

#[wasm_bindgen]
pub fn is_current_request(id: f64) -> bool {
    REQUESTS.is_current(id as u64)
}
