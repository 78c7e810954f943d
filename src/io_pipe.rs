use std::{io::Read, path::PathBuf};

use anyhow::{bail, Context, Result};

use crate::IoArgs;

/// Structure that abstracts the input and output of the report.
///
/// Input is read from a file or stdin, the report goes to a file or stdout.
pub struct IoPipe {
    source: Source,
    dest: PathBuf,
}

impl IoPipe {
    pub fn read_text(&self) -> &str {
        match self.source {
            Source::Stdin(ref content) => content,
            Source::File { ref content, .. } => content,
        }
    }

    pub fn write_text(&self, output: impl AsRef<str>) -> Result<()> {
        if self.dest.to_str() == Some("-") {
            print!("{}", output.as_ref());
        } else if self.dest.is_dir() {
            bail!("Cannot write report to a directory");
        } else {
            std::fs::write(&self.dest, output.as_ref()).with_context(|| {
                format!("failed to write report to {:?}", self.dest)
            })?;
        }
        Ok(())
    }
}

impl TryFrom<&IoArgs> for IoPipe {
    type Error = anyhow::Error;

    fn try_from(value: &IoArgs) -> Result<Self> {
        let source = if value.input.to_str() == Some("-") {
            log::debug!("IoPipe: reading stdin");
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Source::Stdin(input)
        } else if value.input.is_file() {
            log::debug!("IoPipe: reading {:?}", value.input);
            let content = std::fs::read_to_string(&value.input)
                .with_context(|| format!("failed to read {:?}", value.input))?;
            Source::File {
                path: value.input.clone(),
                content,
            }
        } else if value.input.exists() {
            bail!("Input {:?} is not a file", value.input);
        } else {
            bail!("Input file {:?} not found", value.input);
        };

        if let (Source::File { path, .. }, Some(output)) =
            (&source, &value.output)
        {
            // Output paths that don't exist yet can't alias the input.
            if output.exists()
                && std::fs::canonicalize(path)?
                    == std::fs::canonicalize(output)?
            {
                bail!("Refusing to overwrite input file {path:?} with report");
            }
        }

        let dest = value.output.clone().unwrap_or_else(|| PathBuf::from("-"));

        Ok(IoPipe { source, dest })
    }
}

enum Source {
    Stdin(String),
    File {
        path: PathBuf,
        content: String,
    },
}
