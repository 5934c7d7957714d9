//! Widget and Gravatar integration tests using the real template engine.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use admin_panel::errors::AppError;
use admin_panel::infra::{TemplateEngine, TemplateRenderer};
use admin_panel::utils::{hash_email, GravatarHelper};
use admin_panel::{
    Address, AddressWidget, RenderOutcome, SsoWidget, Widget, WidgetContext, WidgetRegistry,
};

fn engine() -> Arc<dyn TemplateRenderer> {
    Arc::new(TemplateEngine::new().unwrap())
}

#[test]
fn test_address_widget_renders_all_parts() {
    let widget = AddressWidget::new(engine());
    let address = Address::new("742 Evergreen Terrace", "Springfield")
        .with_region("OR")
        .with_postal_code("97403")
        .with_country("USA");

    let html = widget.render_address(&address).unwrap().into_html().unwrap();

    assert!(html.contains("widget-address"));
    assert!(html.contains("742 Evergreen Terrace"));
    assert!(html.contains("97403 Springfield, OR"));
    assert!(html.contains("USA"));
}

#[test]
fn test_address_widget_skips_missing_parts() {
    let widget = AddressWidget::new(engine());

    let html = widget
        .render_address(&Address::new("1 Main St", "Shelbyville"))
        .unwrap()
        .into_html()
        .unwrap();

    assert!(html.contains("Shelbyville"));
    assert!(!html.contains("none"));
    assert!(!html.contains(", "));
}

#[test]
fn test_widget_identity() {
    let address = AddressWidget::new(engine());

    assert_eq!(address.identifier(), "address");
    assert_eq!(address.header(), Some("Address"));
    assert_eq!(SsoWidget::new().identifier(), "ssowidget");
}

#[test]
fn test_sso_widget_produces_nothing() {
    let widget = SsoWidget::new();

    assert_eq!(widget.render(&WidgetContext::new()).unwrap(), RenderOutcome::Disabled);
    assert_eq!(
        widget
            .render(&WidgetContext::new().with_redirect_url("https://example.com/"))
            .unwrap(),
        RenderOutcome::Disabled
    );
}

#[test]
fn test_registry_resolves_defaults() {
    let registry = WidgetRegistry::with_defaults(engine()).unwrap();

    assert_eq!(registry.get("address").unwrap().header(), Some("Address"));
    assert!(registry.get("ssowidget").is_ok());
}

#[test]
fn test_registry_renders_each_widget() {
    let registry = WidgetRegistry::with_defaults(engine()).unwrap();
    let ctx = WidgetContext::new()
        .with_address(Address::new("1 Main St", "North Haverbrook"))
        .with_redirect_url("https://admin.example.com/");

    let html = registry
        .get("address")
        .unwrap()
        .render(&ctx)
        .unwrap()
        .into_html()
        .unwrap();
    assert!(html.contains("North Haverbrook"));

    let sso = registry.get("ssowidget").unwrap().render(&ctx).unwrap();
    assert!(sso.is_disabled());
}

#[test]
fn test_registry_address_without_data_fails() {
    let registry = WidgetRegistry::with_defaults(engine()).unwrap();

    let result = registry.get("address").unwrap().render(&WidgetContext::new());

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_template_override_directory() {
    let dir = std::env::temp_dir().join(format!("admin-panel-templates-{}", std::process::id()));
    let widgets_dir: PathBuf = dir.join("widgets");
    fs::create_dir_all(&widgets_dir).unwrap();
    fs::write(widgets_dir.join("address.html"), "custom: {{ address.city }}").unwrap();

    let engine = TemplateEngine::with_overrides(&dir).unwrap();
    let widget = AddressWidget::new(Arc::new(engine));
    let html = widget
        .render(&WidgetContext::new().with_address(Address::new("1 Main St", "Ogdenville")))
        .unwrap()
        .into_html()
        .unwrap();

    fs::remove_dir_all(&dir).ok();
    assert_eq!(html, "custom: Ogdenville");
}

#[test]
fn test_gravatar_default_size() {
    let tag = GravatarHelper::default().process("test@example.com", None);

    assert!(tag.contains("s=40&d=identicon"));
    assert!(tag.contains(&hash_email("test@example.com")));
    assert!(tag.starts_with(r#"<img class="avatar" src="https://www.gravatar.com/avatar/"#));
}

#[test]
fn test_gravatar_custom_size() {
    let tag = GravatarHelper::default().process("test@example.com", Some(200));

    assert!(tag.contains("s=200"));
}

#[test]
fn test_gravatar_hash_is_lowercase_hex() {
    let hash = hash_email("Someone@Example.COM");

    assert_eq!(hash.len(), 32);
    assert!(hash.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}
