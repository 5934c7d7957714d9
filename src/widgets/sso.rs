//! SSO login widget.
//!
//! Sign-in through the identity provider is switched off; the widget
//! stays registered so pages referencing it keep resolving.

use super::{RenderOutcome, Widget, WidgetContext};
use crate::config::WIDGET_SSO;
use crate::errors::AppResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct SsoWidget;

impl SsoWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for SsoWidget {
    fn identifier(&self) -> &'static str {
        WIDGET_SSO
    }

    /// Always [`RenderOutcome::Disabled`]; the redirect URL is ignored.
    fn render(&self, ctx: &WidgetContext) -> AppResult<RenderOutcome> {
        tracing::trace!(redirect_url = ?ctx.redirect_url, "SSO widget disabled, skipping render");
        Ok(RenderOutcome::Disabled)
    }
}
