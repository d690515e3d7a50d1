//! Tab controller
//!
//! Built once from the host element's markup, then driven by pointer and
//! keyboard events. Activation is a fixed sequence: every tab goes inert,
//! the target becomes selected and focused, every panel hides, the target's
//! panel shows, and a remote-bound panel gets its one-time product load.

use vitrine_catalog::{render_products, ProductSource};
use vitrine_dom::{attrs, Document, Element};

use crate::error::TabError;
use crate::key::{Key, KeyAction};
use crate::markup::carousel_markup;
use crate::{Result, TEMPLATE_ID};

pub struct TabController {
    /// Tab element ids in document order.
    tabs: Vec<String>,
    /// Panel element ids in document order.
    panels: Vec<String>,
    /// Per-product template markup, if the tab set declares one.
    template: Option<String>,
    /// Bearer credential forwarded to the catalog on panel loads.
    token: String,
    /// Configured starting tab, already clamped into range.
    initial: usize,
    active: Option<usize>,
}

impl TabController {
    /// Read the tab set out of the host element's markup.
    ///
    /// Tabs and panels are matched later through each tab's
    /// `aria-controls` id, not by position, so the two lists only need to
    /// share document order with the markup.
    pub fn from_element(host: &Element) -> Result<Self> {
        let tab_elements = host.elements_with_role("tab");
        if tab_elements.is_empty() {
            return Err(TabError::NoTabs);
        }

        let mut tabs = Vec::with_capacity(tab_elements.len());
        for el in tab_elements {
            tabs.push(el.id().ok_or(TabError::MissingTabId)?.to_string());
        }

        let panels: Vec<String> = host
            .elements_with_role("tabpanel")
            .iter()
            .filter_map(|el| el.id())
            .map(String::from)
            .collect();

        let template = host.find_by_id(TEMPLATE_ID).map(|el| el.inner_html());
        let token = attrs::string_or(host, "data-token", "");

        // A configured index past the end of the strip falls back to the
        // first tab.
        let configured = attrs::uint_or(host, "data-active-tab", 0) as usize;
        let initial = if configured < tabs.len() { configured } else { 0 };

        tracing::debug!(
            tab_count = tabs.len(),
            panel_count = panels.len(),
            initial,
            "tab controller ready"
        );

        Ok(Self {
            tabs,
            panels,
            template,
            token,
            initial,
            active: None,
        })
    }

    pub fn tab_ids(&self) -> &[String] {
        &self.tabs
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn initial(&self) -> usize {
        self.initial
    }

    /// Run the initial activation.
    pub async fn start(&mut self, doc: &mut Document, source: &dyn ProductSource) -> Result<()> {
        self.activate(doc, self.initial, source).await
    }

    /// Activate the tab at `index` (pointer click, or Enter/Space via
    /// [`Self::handle_key`]).
    pub async fn activate(
        &mut self,
        doc: &mut Document,
        index: usize,
        source: &dyn ProductSource,
    ) -> Result<()> {
        let target_id = self
            .tabs
            .get(index)
            .ok_or(TabError::TabOutOfRange {
                index,
                count: self.tabs.len(),
            })?
            .clone();

        // Every tab: unselected, visually inactive, out of the focus order.
        for id in &self.tabs {
            if let Some(tab) = doc.find_by_id_mut(id) {
                tab.set_attr("aria-selected", "false");
                tab.remove_class("tab-active");
                tab.set_attr("tabindex", "-1");
            }
        }

        // Target tab: selected, visually active, focusable, focused.
        let panel_id = {
            let tab = doc
                .find_by_id_mut(&target_id)
                .ok_or_else(|| TabError::TabNotFound(target_id.clone()))?;
            tab.set_attr("aria-selected", "true");
            tab.add_class("tab-active");
            tab.set_attr("tabindex", "0");
            tab.attr("aria-controls").map(String::from)
        };
        doc.focus(&target_id);

        // Every panel hidden, then the target's panel shown.
        for id in &self.panels {
            if let Some(panel) = doc.find_by_id_mut(id) {
                panel.set_hidden(true);
            }
        }

        let panel_id = panel_id.ok_or_else(|| TabError::ControlTargetMissing {
            tab_id: target_id.clone(),
        })?;

        let collection = {
            let panel = doc
                .find_by_id_mut(&panel_id)
                .ok_or_else(|| TabError::PanelNotFound(panel_id.clone()))?;
            panel.set_hidden(false);

            // One-time load: a panel that already holds a rendered slider
            // is never fetched again.
            if panel.has_descendant_tag(vitrine_slider::ELEMENT_TAG) {
                None
            } else {
                panel.attr("data-collection-url").map(String::from)
            }
        };

        self.active = Some(index);
        tracing::debug!(tab = %target_id, panel = %panel_id, "tab activated");

        if let Some(path) = collection {
            self.populate_panel(doc, &panel_id, &path, source).await;
        }

        Ok(())
    }

    /// Handle a key press on the tab strip.
    pub async fn handle_key(
        &mut self,
        doc: &mut Document,
        key: Key,
        source: &dyn ProductSource,
    ) -> Result<KeyAction> {
        let Some(focused) = doc
            .focused()
            .and_then(|id| self.tabs.iter().position(|tab| tab.as_str() == id))
        else {
            return Ok(KeyAction::Ignored);
        };

        match key {
            Key::Enter | Key::Space => {
                self.activate(doc, focused, source).await?;
                Ok(KeyAction::Activated(focused))
            }
            Key::ArrowLeft | Key::ArrowRight => {
                let count = self.tabs.len();
                let next = match key {
                    Key::ArrowLeft => (focused + count - 1) % count,
                    _ => (focused + 1) % count,
                };
                let next_id = self.tabs[next].clone();
                doc.focus(&next_id);
                Ok(KeyAction::FocusMoved(next))
            }
        }
    }

    /// Fetch the panel's collection and rewrite the panel in one step.
    ///
    /// Failures are logged and swallowed: the panel stays empty and keeps
    /// its collection binding, so the next activation retries.
    async fn populate_panel(
        &self,
        doc: &mut Document,
        panel_id: &str,
        path: &str,
        source: &dyn ProductSource,
    ) {
        match self.fetch_and_render(path, source).await {
            Ok(markup) => {
                if let Some(panel) = doc.find_by_id_mut(panel_id) {
                    panel.set_inner_html(&markup);
                    tracing::info!(panel = panel_id, path, "panel products rendered");
                }
            }
            Err(error) => {
                tracing::error!(panel = panel_id, path, %error, "product load failed");
            }
        }
    }

    async fn fetch_and_render(&self, path: &str, source: &dyn ProductSource) -> Result<String> {
        let template = self.template.as_deref().ok_or(TabError::MissingTemplate)?;
        let products = source.fetch_category(path, &self.token).await?;
        let items = render_products(template, &products);
        Ok(carousel_markup(&items))
    }
}
