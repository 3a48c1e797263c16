use std::any::Any;
use std::collections::HashMap;

use tracing::debug;

use crate::core::PropertyBag;
use crate::error::ViewerResult;
use crate::render::{ChartId, RenderEngine, ViewStateId};

/// Opaque per-plot state produced by `initialize` and consumed by `draw`.
pub type PluginState = Box<dyn Any>;

/// Draw-capable handler for one plot kind.
///
/// `initialize` binds the plot to the shared view-state and chart handle;
/// `draw` paints it. Errors from either phase propagate unmodified to the
/// caller of `api::show` and abort the remainder of that render pass.
pub trait PlotHandler {
    fn initialize(
        &self,
        properties: &PropertyBag,
        view_state: ViewStateId,
        chart: ChartId,
        engine: &mut dyn RenderEngine,
    ) -> ViewerResult<PluginState>;

    fn draw(
        &self,
        state: &mut PluginState,
        properties: &PropertyBag,
        engine: &mut dyn RenderEngine,
    ) -> ViewerResult<()>;
}

/// Kind-keyed table of plot handlers plus a mandatory fallback.
///
/// Populated once per session from the engine's capability table and
/// injected into `api::show`; resolution never fails.
pub struct PlotRegistry {
    handlers: HashMap<String, Box<dyn PlotHandler>>,
    fallback: Box<dyn PlotHandler>,
}

impl PlotRegistry {
    #[must_use]
    pub fn new(fallback: Box<dyn PlotHandler>) -> Self {
        Self {
            handlers: HashMap::new(),
            fallback,
        }
    }

    #[must_use]
    pub fn from_capabilities(
        capabilities: impl IntoIterator<Item = (String, Box<dyn PlotHandler>)>,
        fallback: Box<dyn PlotHandler>,
    ) -> Self {
        let mut registry = Self::new(fallback);
        for (kind, handler) in capabilities {
            registry.register(kind, handler);
        }
        registry
    }

    /// Registers a handler for `kind`, replacing any previous one.
    pub fn register(&mut self, kind: impl Into<String>, handler: Box<dyn PlotHandler>) {
        self.handlers.insert(kind.into(), handler);
    }

    /// Resolves `kind` to a drawable handler, falling back for unknown
    /// kinds. Every kind value resolves to some handler.
    #[must_use]
    pub fn resolve(&self, kind: &str) -> &dyn PlotHandler {
        match self.handlers.get(kind) {
            Some(handler) => handler.as_ref(),
            None => {
                debug!(kind, "unknown plot kind, using fallback handler");
                self.fallback.as_ref()
            }
        }
    }

    #[must_use]
    pub fn has_kind(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    #[must_use]
    pub fn kind_count(&self) -> usize {
        self.handlers.len()
    }
}

/// Handler that accepts any properties and draws nothing.
///
/// Useful as a registry fallback when the engine supplies no dedicated
/// unknown-kind renderer.
#[derive(Debug, Default)]
pub struct NoopHandler;

impl PlotHandler for NoopHandler {
    fn initialize(
        &self,
        _properties: &PropertyBag,
        _view_state: ViewStateId,
        _chart: ChartId,
        _engine: &mut dyn RenderEngine,
    ) -> ViewerResult<PluginState> {
        Ok(Box::new(()))
    }

    fn draw(
        &self,
        _state: &mut PluginState,
        _properties: &PropertyBag,
        _engine: &mut dyn RenderEngine,
    ) -> ViewerResult<()> {
        Ok(())
    }
}
