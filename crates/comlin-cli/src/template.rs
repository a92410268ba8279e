//! Output path templating.
//!
//! Output arguments may carry the placeholders `{desktop}`, `{tmpdir}` and
//! `{tmpfile}`, which expand to the user's desktop directory, the system
//! temporary directory and a freshly created uniquely named temporary file.

use std::path::PathBuf;

pub fn expand_output_path(template: &str) -> anyhow::Result<PathBuf> {
    let mut expanded = template.to_string();

    if expanded.contains("{desktop}") {
        let desktop = dirs::desktop_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine the desktop directory"))?;
        expanded = expanded.replace("{desktop}", &desktop.to_string_lossy());
    }

    if expanded.contains("{tmpdir}") {
        let tmpdir = std::env::temp_dir();
        expanded = expanded.replace("{tmpdir}", &tmpdir.to_string_lossy());
    }

    if expanded.contains("{tmpfile}") {
        // Create the file now so the name cannot be raced.
        let tmpfile = tempfile::Builder::new()
            .prefix("comlin-")
            .suffix(".out")
            .tempfile()?
            .into_temp_path()
            .keep()?;
        expanded = expanded.replace("{tmpfile}", &tmpfile.to_string_lossy());
    }

    Ok(PathBuf::from(expanded))
}
