//! One handler per command.
//!
//! Handlers never print directly; they go through the [`Presenter`] so text
//! and JSON output stay in one place.

use anyhow::Context;
use tracing::debug;

use crate::adapters::presenter::Presenter;
use crate::bundle::BundleLayout;
use crate::content;
use crate::content::TemplateKind;
use crate::content::parse_class_name;
use crate::error::SkillError;

pub type HandlerResult = anyhow::Result<()>;

pub struct HandlerContext {
    pub presenter: Box<dyn Presenter>,
    pub bundle: BundleLayout,
}

impl HandlerContext {
    pub fn new(presenter: Box<dyn Presenter>, bundle: BundleLayout) -> Self {
        Self { presenter, bundle }
    }
}

pub fn handle_help(ctx: &HandlerContext) -> HandlerResult {
    ctx.presenter.present_document("help", content::HELP);
    Ok(())
}

pub fn handle_guide(ctx: &HandlerContext) -> HandlerResult {
    let guide = ctx
        .bundle
        .read_guide()
        .context("failed to load testing guide")?;
    ctx.presenter.present_document("guide", &guide);
    Ok(())
}

pub fn handle_quickstart(ctx: &HandlerContext) -> HandlerResult {
    ctx.presenter.present_document("quickstart", content::QUICKSTART);
    Ok(())
}

pub fn handle_examples(ctx: &HandlerContext) -> HandlerResult {
    let examples = ctx
        .bundle
        .list_examples()
        .context("failed to list examples")?;
    debug!(count = ?examples.as_ref().map(Vec::len), "Examples listed");
    ctx.presenter.present_examples(examples.as_deref());
    Ok(())
}

pub fn handle_deps(ctx: &HandlerContext) -> HandlerResult {
    ctx.presenter.present_document("deps", content::DEPS);
    Ok(())
}

pub fn handle_config(ctx: &HandlerContext) -> HandlerResult {
    ctx.presenter.present_document("config", content::CONFIG);
    Ok(())
}

/// Prints a template, or the list of valid templates when `kind` is missing or unknown.
///
/// The class name is only checked once `kind` names a template.
pub fn handle_template(
    ctx: &HandlerContext,
    kind: Option<&str>,
    class_name: Option<&str>,
) -> HandlerResult {
    let Some(kind) = kind.and_then(TemplateKind::from_name) else {
        debug!(requested = ?kind, "No valid template type, listing templates");
        ctx.presenter.present_template_list(&TemplateKind::names());
        return Ok(());
    };

    let class_name = class_name.map(parse_class_name).transpose()?;
    debug!(template = %kind, class_name = ?class_name, "Rendering template");
    let rendered = kind.render(class_name);
    let class_name = class_name.unwrap_or(kind.default_class_name());
    ctx.presenter.present_template(kind, class_name, &rendered);
    Ok(())
}

pub fn handle_unknown(args: &[String]) -> HandlerResult {
    let name = args.first().cloned().unwrap_or_default();
    Err(SkillError::UnknownCommand(name).into())
}
