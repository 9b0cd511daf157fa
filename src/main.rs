use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info};

use svg_template_converter::config::Config;
use svg_template_converter::dom::Document;
use svg_template_converter::transform;

fn main() -> Result<()> {
    // Parse configuration from command line and environment
    let config = Config::from_args_and_env()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let dialect = config.load_dialect()?;
    debug!(
        "markers: slot='{}' group='{}'",
        dialect.slot_attribute, dialect.group_attribute
    );

    let input = fs::read_to_string(&config.input)
        .with_context(|| format!("reading {}", config.input.display()))?;
    let mut doc = Document::parse(&input)
        .with_context(|| format!("parsing {}", config.input.display()))?;

    let report = transform::convert(&mut doc, &dialect)
        .with_context(|| format!("converting {}", config.input.display()))?;
    info!(
        "converted {} slot(s), {} group(s)",
        report.slots.len(),
        report.groups.len()
    );

    let output = doc.to_svg_string(!config.compact);
    match &config.output {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("writing to stdout")?;
        }
    }

    Ok(())
}
