use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use smarteats_client::MenuSource;
use smarteats_core::menu::{
    ALL_CATEGORIES, ListRow, category_chips, empty_state, filter_dishes, find_hall,
};
use smarteats_types::DiningHall;

use super::AppContext;
use crate::render::{OutputFormat, write_empty_state, write_json, write_row};

#[derive(Debug, clap::Args)]
pub struct MenuArgs {
    /// Dining hall id; lists the halls when omitted
    #[arg(long)]
    pub hall: Option<u64>,
    /// Only dishes whose name contains this text
    #[arg(long, short, default_value = "")]
    pub search: String,
    /// Category chip to filter by
    #[arg(long, short, default_value = ALL_CATEGORIES)]
    pub category: String,
    /// Read the halls payload from a file instead of the backend
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Serialize)]
struct HallSummary<'a> {
    id: u64,
    name: &'a str,
    location: &'a str,
    dishes: usize,
}

#[derive(Serialize)]
struct HallListing<'a> {
    hall: &'a str,
    categories: Vec<String>,
    rows: Vec<ListRow>,
}

pub async fn handle_menu(
    ctx: &AppContext<'_>,
    source: &dyn MenuSource,
    args: &MenuArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let halls = source
        .halls()
        .await
        .with_context(|| format!("Failed to load menus from {}", source.describe()))?;

    match args.hall {
        None => write_halls(ctx, &halls, out),
        Some(id) => {
            let hall = find_hall(&halls, id).with_context(|| format!("Dining hall {id} not found"))?;
            write_hall(ctx, hall, args, out)
        }
    }
}

fn write_halls(ctx: &AppContext, halls: &[DiningHall], out: &mut impl Write) -> anyhow::Result<()> {
    let summaries: Vec<HallSummary> = halls
        .iter()
        .map(|hall| HallSummary {
            id: hall.id,
            name: &hall.name,
            location: &hall.location,
            dishes: hall.dishes.len(),
        })
        .collect();

    match ctx.format {
        OutputFormat::Json => write_json(out, &summaries),
        OutputFormat::Text => {
            if summaries.is_empty() {
                writeln!(out, "No dining halls found")?;
            }
            for summary in summaries {
                writeln!(
                    out,
                    "{:>4}  {}  ({} dishes)  {}",
                    summary.id, summary.name, summary.dishes, summary.location
                )?;
            }
            Ok(())
        }
    }
}

fn write_hall(
    ctx: &AppContext,
    hall: &DiningHall,
    args: &MenuArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let categories = category_chips(hall);
    let rows: Vec<ListRow> = filter_dishes(hall, &args.search, &args.category)
        .into_iter()
        .map(|dish| ListRow::build(dish, Some(hall.name.as_str()), ctx.resolver))
        .collect();

    tracing::info!(
        hall = %hall.name,
        shown = rows.len(),
        total = hall.dishes.len(),
        "Listing dishes"
    );

    match ctx.format {
        OutputFormat::Json => write_json(
            out,
            &HallListing {
                hall: &hall.name,
                categories,
                rows,
            },
        ),
        OutputFormat::Text => {
            writeln!(out, "{}", hall.name)?;
            let chips: Vec<String> = categories
                .iter()
                .map(|chip| {
                    if *chip == args.category {
                        format!("[{chip}]")
                    } else {
                        chip.clone()
                    }
                })
                .collect();
            writeln!(out, "{}", chips.join("  "))?;
            writeln!(out)?;

            if rows.is_empty() {
                write_empty_state(out, &empty_state(&args.search, &args.category))?;
            }
            for row in &rows {
                write_row(out, row, ctx.config.ui.show_macros)?;
            }
            Ok(())
        }
    }
}
