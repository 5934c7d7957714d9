//! Address display widget.

use std::sync::Arc;

use minijinja::{context, Value};

use super::{RenderOutcome, Widget, WidgetContext};
use crate::config::{TEMPLATE_ADDRESS, WIDGET_ADDRESS, WIDGET_ADDRESS_HEADER};
use crate::domain::Address;
use crate::errors::{AppError, AppResult};
use crate::infra::TemplateRenderer;

/// Renders an address through the `widgets/address.html` template.
pub struct AddressWidget {
    renderer: Arc<dyn TemplateRenderer>,
}

impl AddressWidget {
    pub fn new(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    /// Render the address, bound as `address` in the template context.
    pub fn render_address(&self, address: &Address) -> AppResult<RenderOutcome> {
        let context = context! { address => Value::from_serialize(address) };
        let html = self.renderer.render(TEMPLATE_ADDRESS, context)?;
        Ok(RenderOutcome::Html(html))
    }
}

impl Widget for AddressWidget {
    fn identifier(&self) -> &'static str {
        WIDGET_ADDRESS
    }

    fn header(&self) -> Option<&'static str> {
        Some(WIDGET_ADDRESS_HEADER)
    }

    fn render(&self, ctx: &WidgetContext) -> AppResult<RenderOutcome> {
        let address = ctx
            .address
            .as_ref()
            .ok_or_else(|| AppError::validation("Address widget requires an address"))?;
        self.render_address(address)
    }
}
