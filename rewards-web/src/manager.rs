//! `RewardsManager`, the object the host page calls into.
//!
//! ```js
//! import init, { RewardsManager } from "./rewards_web.js";
//! await init();
//! RewardsManager.init({{ user_points }});
//! ```
use crate::dom;
use crate::listeners::{self, ListenerSet, SharedController};
use crate::paths;
use crate::rewards::{
    InitError, RewardsConfig, RewardsController, TriggerRegistry, WebCatalogError,
    WebConfigError, catalog_from_js, config_from_js, points_from_js,
};
use crate::surface::DomSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("no document available; rewards manager needs a browser page")]
    NoDocument,
    #[error(transparent)]
    Init(#[from] InitError),
    #[error(transparent)]
    Catalog(#[from] WebCatalogError),
    #[error(transparent)]
    Config(#[from] WebConfigError),
    #[error("failed to attach listeners: {0}")]
    Listener(String),
}

impl From<ManagerError> for JsValue {
    fn from(err: ManagerError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

struct Installation {
    controller: SharedController,
    _listeners: ListenerSet,
}

thread_local! {
    static INSTALLED: RefCell<Option<Installation>> = const { RefCell::new(None) };
}

/// Entry point for the server-rendered rewards page.
#[wasm_bindgen]
pub struct RewardsManager {
    _private: (),
}

#[wasm_bindgen]
impl RewardsManager {
    /// Wire the page for a viewer holding `points`.
    ///
    /// Returns `true` when listeners were installed and `false` when the page
    /// was already initialized, in which case nothing is registered twice.
    ///
    /// # Errors
    ///
    /// Fails when there is no document or the browser refuses a listener.
    pub fn init(points: JsValue) -> Result<bool, JsValue> {
        install(
            points_from_js(&points),
            TriggerRegistry::new(),
            RewardsConfig::default(),
        )
        .map_err(report)
    }

    /// Like [`RewardsManager::init`], with a structured reward catalog that
    /// takes precedence over the trigger data attributes.
    ///
    /// # Errors
    ///
    /// Also fails when `catalog` is not an array of rewards with unique ids.
    #[wasm_bindgen(js_name = initWithCatalog)]
    pub fn init_with_catalog(points: JsValue, catalog: JsValue) -> Result<bool, JsValue> {
        let registry = catalog_from_js(catalog)
            .map_err(|err| report(err.into()))?
            .into_registry();
        install(points_from_js(&points), registry, RewardsConfig::default()).map_err(report)
    }

    /// Like [`RewardsManager::init_with_catalog`], with config overrides given
    /// as a JSON string or a plain object. Pass `undefined` for either to keep
    /// its default.
    ///
    /// ```js
    /// RewardsManager.initWithConfig(points, undefined, { points_suffix: " points" });
    /// ```
    ///
    /// # Errors
    ///
    /// Also fails when `config` cannot be decoded or breaks a config invariant,
    /// such as a redeem path prefix without surrounding slashes.
    #[wasm_bindgen(js_name = initWithConfig)]
    pub fn init_with_config(
        points: JsValue,
        catalog: JsValue,
        config: JsValue,
    ) -> Result<bool, JsValue> {
        let registry = catalog_from_js(catalog)
            .map_err(|err| report(err.into()))?
            .into_registry();
        let config = config_from_js(config).map_err(|err| report(err.into()))?;
        install(points_from_js(&points), registry, config).map_err(report)
    }

    #[wasm_bindgen(js_name = isInitialized)]
    #[must_use]
    pub fn is_initialized() -> bool {
        INSTALLED.with(|slot| slot.borrow().is_some())
    }

    /// Balance the page was initialized with, if any.
    #[wasm_bindgen(js_name = userPoints)]
    #[must_use]
    pub fn user_points() -> Option<f64> {
        INSTALLED.with(|slot| {
            slot.borrow().as_ref().and_then(|installed| {
                let points = installed.controller.try_borrow().ok()?.user_points();
                #[allow(clippy::cast_precision_loss)]
                let points = points as f64;
                Some(points)
            })
        })
    }

    /// Detach every listener so the page can be initialized again.
    pub fn teardown() {
        let previous = INSTALLED.with(|slot| slot.borrow_mut().take());
        if previous.is_some() {
            log::debug!("rewards manager torn down");
        }
    }
}

fn report(err: ManagerError) -> JsValue {
    dom::report_to_console(&err.to_string());
    err.into()
}

fn install(
    user_points: i64,
    registry: TriggerRegistry,
    config: RewardsConfig,
) -> Result<bool, ManagerError> {
    if RewardsManager::is_initialized() {
        log::warn!("RewardsManager.init called twice; keeping the first installation");
        return Ok(false);
    }
    let document = dom::document().ok_or(ManagerError::NoDocument)?;
    let config = RewardsConfig {
        redeem_path_prefix: paths::redeem_prefix(&config.redeem_path_prefix),
        ..config
    };

    let mut controller =
        RewardsController::with_config(DomSurface::new(document.clone()), user_points, config)
            .with_registry(registry);
    controller.init()?;

    let controller = Rc::new(RefCell::new(controller));
    let listeners = listeners::install(&document, &controller)
        .map_err(|err| ManagerError::Listener(dom::describe_js_error(&err)))?;
    log::debug!("rewards manager ready for {user_points} points");

    INSTALLED.with(|slot| {
        *slot.borrow_mut() = Some(Installation {
            controller,
            _listeners: listeners,
        });
    });
    Ok(true)
}
