//! Widget registry used by the host page to resolve widgets by key.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{AddressWidget, SsoWidget, Widget};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::TemplateRenderer;

/// Widgets keyed by [`Widget::identifier`].
#[derive(Default, Clone)]
pub struct WidgetRegistry {
    widgets: BTreeMap<&'static str, Arc<dyn Widget>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the address and SSO widgets.
    pub fn with_defaults(renderer: Arc<dyn TemplateRenderer>) -> AppResult<Self> {
        let mut registry = Self::new();
        registry.register(Arc::new(AddressWidget::new(renderer)))?;
        registry.register(Arc::new(SsoWidget::new()))?;
        Ok(registry)
    }

    /// Register a widget. Identifiers must be unique.
    pub fn register(&mut self, widget: Arc<dyn Widget>) -> AppResult<()> {
        let id = widget.identifier();
        if self.widgets.contains_key(id) {
            return Err(AppError::conflict(format!("Widget '{}'", id)));
        }
        tracing::debug!(widget = id, "Widget registered");
        self.widgets.insert(id, widget);
        Ok(())
    }

    /// Look up a widget by identifier
    pub fn get(&self, identifier: &str) -> AppResult<Arc<dyn Widget>> {
        self.widgets
            .get(identifier)
            .cloned()
            .ok_or_not_found()
    }

    /// Registered widgets in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Widget>> {
        self.widgets.values()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
