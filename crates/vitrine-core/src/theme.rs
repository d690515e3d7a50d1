//! Theme facade
//!
//! Owns the catalog client and the carousel engine, and walks page markup
//! upgrading defined elements: slider hosts mount the engine, tab hosts
//! yield controllers. After any activation the slider pass runs again so a
//! freshly rendered panel's nested slider initializes on its own.

use parking_lot::Mutex;

use vitrine_catalog::CatalogClient;
use vitrine_dom::{Document, Element, Node};
use vitrine_slider::{SliderAdapter, SliderEngine};
use vitrine_tabs::{Key, KeyAction, TabController};

use crate::config::Config;
use crate::registry::{register_components, ComponentKind, Registry};
use crate::Result;

/// Marker attribute on host elements whose component is already live.
const MOUNTED_ATTR: &str = "data-mounted";

/// What an upgrade pass produced.
#[derive(Default)]
pub struct Upgraded {
    pub sliders_mounted: usize,
    pub controllers: Vec<TabController>,
}

pub struct Theme {
    config: Config,
    registry: Registry,
    client: CatalogClient,
    engine: Mutex<Box<dyn SliderEngine>>,
}

impl Theme {
    /// Build the theme runtime and define the component tags, once.
    pub fn new(config: Config, engine: Box<dyn SliderEngine>) -> Result<Self> {
        let client = CatalogClient::new(
            &config.store_origin,
            config.request_timeout,
            config.image_width,
        )?;

        let mut registry = Registry::new();
        register_components(&mut registry)?;

        tracing::info!(origin = %config.store_origin, "theme initialized");

        Ok(Self {
            config,
            registry,
            client,
            engine: Mutex::new(engine),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Upgrade every defined, not-yet-mounted element in the tree.
    ///
    /// Hosts that were upgraded before carry the mounted marker and are
    /// skipped, so the pass can run after every mutation.
    pub fn upgrade(&self, doc: &mut Document) -> Result<Upgraded> {
        let mut outcome = Upgraded::default();
        self.upgrade_element(doc.root_mut(), &mut outcome)?;

        if outcome.sliders_mounted > 0 || !outcome.controllers.is_empty() {
            tracing::debug!(
                sliders = outcome.sliders_mounted,
                tab_strips = outcome.controllers.len(),
                "upgrade pass"
            );
        }

        Ok(outcome)
    }

    fn upgrade_element(&self, el: &mut Element, outcome: &mut Upgraded) -> Result<()> {
        match self.registry.kind_of(el.tag()) {
            Some(ComponentKind::Slider) if !el.has_attr(MOUNTED_ATTR) => {
                let mut adapter = SliderAdapter::from_element(el)?;
                {
                    let mut engine = self.engine.lock();
                    adapter.mount(el, engine.as_mut())?;
                }
                el.set_attr(MOUNTED_ATTR, "true");
                outcome.sliders_mounted += 1;
            }
            Some(ComponentKind::TabStrip) if !el.has_attr(MOUNTED_ATTR) => {
                outcome.controllers.push(TabController::from_element(el)?);
                el.set_attr(MOUNTED_ATTR, "true");
            }
            _ => {}
        }

        for node in el.children_mut() {
            if let Node::Element(child) = node {
                self.upgrade_element(child, outcome)?;
            }
        }

        Ok(())
    }

    /// Run a controller's initial activation, then mount whatever sliders
    /// the activation rendered.
    pub async fn start_tabs(&self, controller: &mut TabController, doc: &mut Document) -> Result<()> {
        controller.start(doc, &self.client).await?;
        self.upgrade(doc)?;
        Ok(())
    }

    /// Pointer activation of the tab at `index`.
    pub async fn activate_tab(
        &self,
        controller: &mut TabController,
        doc: &mut Document,
        index: usize,
    ) -> Result<()> {
        controller.activate(doc, index, &self.client).await?;
        self.upgrade(doc)?;
        Ok(())
    }

    /// Keyboard input on the tab strip.
    pub async fn handle_key(
        &self,
        controller: &mut TabController,
        doc: &mut Document,
        key: Key,
    ) -> Result<KeyAction> {
        let action = controller.handle_key(doc, key, &self.client).await?;
        if matches!(action, KeyAction::Activated(_)) {
            self.upgrade(doc)?;
        }
        Ok(action)
    }
}
