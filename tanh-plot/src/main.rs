use anyhow::{Context, Result};
use plotlib::{
    Samples,
    figure::{self, OUTPUT_PATH},
    logger,
};
use std::{fs, path::Path};

fn main() -> Result<()> {
    logger::init();

    // 计算 x, tanh(x), tanh(x) / 4
    let samples = Samples::generate()?;

    let figure = figure::tanh_figure(&samples)?;

    // 创建输出目录
    let output = Path::new(OUTPUT_PATH);
    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    figure
        .save(output)
        .with_context(|| format!("Failed to render figure to {}", output.display()))?;

    tracing::info!("figure saved to {}", output.display());

    Ok(())
}
