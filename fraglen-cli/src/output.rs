use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

///
/// Open the destination for a report: the given file (parent directories are created), or
/// stdout when no path is given or the path is `-`.
///
pub fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        None | Some("-") => Ok(Box::new(BufWriter::new(io::stdout()))),
        Some(p) => {
            let path = Path::new(p);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", p))?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}
