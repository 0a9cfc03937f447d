use crate::build::Build;
use crate::error::{RigError, RigResult};
use crate::format::{format_price, format_specs};
use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::Path;
use tracing::info;

pub const EXPORT_FILE_NAME: &str = "rigvisor-build.txt";
const RULE: &str = "================================";
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Human-readable summary of a build. Not meant to be read back.
pub fn export_build<Tz: TimeZone>(build: &Build, generated_at: &DateTime<Tz>) -> RigResult<String>
where
    Tz::Offset: std::fmt::Display,
{
    if build.is_empty() {
        return Err(RigError::EmptyBuild);
    }

    let mut out = format!("RigVisor - Custom PC Build\n{}\n\n", RULE);
    for (category, part) in build.selected() {
        out.push_str(&format!(
            "[{}]\n{}\nPrice: {}\nSpecs: {}\n\n",
            category.display_name(),
            part.name,
            format_price(part.price),
            format_specs(part)
        ));
    }
    out.push_str(&format!(
        "{rule}\nTotal Price: {}\n{rule}\nGenerated on: {}\n",
        format_price(Some(build.total_price())),
        generated_at.format(TIMESTAMP_FORMAT),
        rule = RULE
    ));
    Ok(out)
}

/// Renders the build with the current local time and writes it to `path`.
pub fn export_to_file<P: AsRef<Path>>(build: &Build, path: P) -> RigResult<()> {
    let text = export_build(build, &Local::now())?;
    fs::write(path.as_ref(), text)?;
    info!("📝 Build exported to {}", path.as_ref().display());
    Ok(())
}
