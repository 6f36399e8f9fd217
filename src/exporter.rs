use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::Chart;

/// Serialize a chart to JSON text.
pub fn to_json(chart: &Chart) -> Result<String> {
    Ok(serde_json::to_string_pretty(chart)?)
}

/// Write a chart as `<dir>/<chart_name>.json`, creating the directory if it
/// does not exist. An existing file with the same name is overwritten.
pub fn write_chart(chart: &Chart, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating charts directory {}", dir.display()))?;

    let dest = dir.join(format!("{}.json", chart.chart_name));
    let text = to_json(chart)?;
    fs::write(&dest, text).with_context(|| format!("writing chart to {}", dest.display()))?;

    Ok(dest)
}
