//! Widgets - identifiable UI rendering units for the admin panel.
//!
//! Each widget implements [`Widget`] so the host page can look it up in a
//! [`WidgetRegistry`] and render it with a [`WidgetContext`].

mod address;
mod registry;
mod sso;

pub use address::AddressWidget;
pub use registry::WidgetRegistry;
pub use sso::SsoWidget;

use crate::domain::Address;
use crate::errors::AppResult;

/// Identity of a widget as seen by the hosting page.
pub trait Widget: Send + Sync {
    /// Registry key
    fn identifier(&self) -> &'static str;

    /// Display label, if the widget shows one
    fn header(&self) -> Option<&'static str> {
        None
    }

    /// Render with the page data; each widget reads the fields it needs.
    fn render(&self, ctx: &WidgetContext) -> AppResult<RenderOutcome>;
}

/// Page data handed to widgets at render time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetContext {
    pub address: Option<Address>,
    pub redirect_url: Option<String>,
}

impl WidgetContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }
}

/// Result of a widget render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Rendered markup
    Html(String),
    /// The widget is switched off and produced nothing
    Disabled,
}

impl RenderOutcome {
    /// Markup, if any was produced
    pub fn into_html(self) -> Option<String> {
        match self {
            RenderOutcome::Html(html) => Some(html),
            RenderOutcome::Disabled => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, RenderOutcome::Disabled)
    }
}
