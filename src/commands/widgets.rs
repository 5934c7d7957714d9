//! Widgets command - Lists and renders widgets.

use std::sync::Arc;

use crate::cli::args::{WidgetsAction, WidgetsArgs};
use crate::config::{Config, WIDGET_ADDRESS, WIDGET_SSO};
use crate::domain::Address;
use crate::errors::AppResult;
use crate::infra::{TemplateEngine, TemplateRenderer};
use crate::widgets::{RenderOutcome, WidgetContext, WidgetRegistry};

/// Execute the widgets command
pub fn execute(args: WidgetsArgs, mut config: Config) -> AppResult<()> {
    if let Some(dir) = args.template_dir {
        config.template_dir = Some(dir);
    }
    let renderer: Arc<dyn TemplateRenderer> = Arc::new(TemplateEngine::from_config(&config)?);
    let registry = WidgetRegistry::with_defaults(renderer)?;

    let (identifier, ctx) = match args.action {
        WidgetsAction::List => {
            for widget in registry.iter() {
                println!("{}\t{}", widget.identifier(), widget.header().unwrap_or("-"));
            }
            return Ok(());
        }
        WidgetsAction::Address {
            street,
            city,
            region,
            postal_code,
            country,
        } => {
            let address = Address {
                street,
                city,
                region,
                postal_code,
                country,
            };
            (WIDGET_ADDRESS, WidgetContext::new().with_address(address))
        }
        WidgetsAction::Sso { redirect_url } => (
            WIDGET_SSO,
            WidgetContext {
                redirect_url,
                ..WidgetContext::default()
            },
        ),
    };

    print_outcome(registry.get(identifier)?.render(&ctx)?);
    Ok(())
}

fn print_outcome(outcome: RenderOutcome) {
    match outcome {
        RenderOutcome::Html(html) => println!("{}", html),
        RenderOutcome::Disabled => tracing::info!("Widget is disabled, nothing rendered"),
    }
}
