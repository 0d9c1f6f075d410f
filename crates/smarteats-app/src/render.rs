use std::io::Write;

use serde::Serialize;
use smarteats_config::icons::IconConfig;
use smarteats_core::menu::{EmptyState, ListRow};
use smarteats_types::IconResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Text on a terminal, JSON when piped
    pub fn detect() -> Self {
        if atty::is(atty::Stream::Stdout) {
            OutputFormat::Text
        } else {
            OutputFormat::Json
        }
    }
}

/// Icon result with its asset location and pixel size attached
#[derive(Debug, Serialize)]
pub struct IconView<'a> {
    #[serde(flatten)]
    pub result: &'a IconResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    pub size_px: u32,
}

impl<'a> IconView<'a> {
    pub fn new(result: &'a IconResult, icons: &IconConfig) -> Self {
        Self {
            result,
            src: result.asset_path(&icons.asset_dir, &icons.extension),
            size_px: icons.size.px(),
        }
    }
}

/// Single-line glyph for an icon result, `[1F357]` or `(X)`
pub fn glyph(result: &IconResult) -> String {
    match result {
        IconResult::Icon { code } => format!("[{code}]"),
        IconResult::Pill { letter, .. } if letter.is_empty() => "( )".to_string(),
        IconResult::Pill { letter, .. } => format!("({letter})"),
    }
}

/// Longer description: asset path for icons, colours for pills
pub fn describe(result: &IconResult, icons: &IconConfig) -> String {
    match result {
        IconResult::Icon { .. } => result
            .asset_path(&icons.asset_dir, &icons.extension)
            .unwrap_or_default(),
        IconResult::Pill {
            background,
            foreground,
            ..
        } => format!(
            "pill {}px, font {:.1}px, bg {background}, fg {foreground}",
            icons.size.px(),
            icons.size.pill_font_px()
        ),
    }
}

pub fn write_row(out: &mut impl Write, row: &ListRow, show_macros: bool) -> std::io::Result<()> {
    let mut line = format!("{:<9} {}", glyph(&row.icon), row.title);
    if show_macros {
        line.push_str(&format!("  {}  {}", row.calories, row.protein));
    }
    writeln!(out, "{line}")?;

    if !row.subtitle.is_empty() {
        writeln!(out, "{:<9} {}", "", row.subtitle)?;
    }

    Ok(())
}

pub fn write_empty_state(out: &mut impl Write, state: &EmptyState) -> std::io::Result<()> {
    writeln!(out, "{}", state.message)?;
    writeln!(out, "{}", state.hint)
}

pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
