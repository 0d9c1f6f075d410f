use std::io::Write;

use serde::Serialize;

use super::AppContext;
use crate::render::{IconView, OutputFormat, describe, glyph, write_json};

#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Dish name, e.g. "Grilled Chicken Tacos"
    pub name: String,
    /// Coarse category (fruit, vegetable, grain, protein, dairy, dessert, drink, soup, other)
    #[arg(long, short)]
    pub category: Option<String>,
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    dish: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    tier: &'static str,
    #[serde(flatten)]
    icon: IconView<'a>,
}

pub fn handle_resolve(ctx: &AppContext, args: &ResolveArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let resolution = ctx.resolver.explain(&args.name, args.category.as_deref());
    tracing::debug!(
        dish = %args.name,
        tier = resolution.tier.as_str(),
        "Resolved dish icon"
    );

    match ctx.format {
        OutputFormat::Json => write_json(
            out,
            &ResolveOutput {
                dish: &args.name,
                category: args.category.as_deref(),
                tier: resolution.tier.as_str(),
                icon: IconView::new(&resolution.result, &ctx.config.icons),
            },
        ),
        OutputFormat::Text => {
            writeln!(out, "{} {}", glyph(&resolution.result), args.name)?;
            writeln!(out, "tier: {}", resolution.tier.as_str())?;
            writeln!(out, "{}", describe(&resolution.result, &ctx.config.icons))?;
            Ok(())
        }
    }
}
