pub mod cli;

use crate::core::{ConfigProvider, TransformKind};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use std::path::{Path, PathBuf};

/// Positional arguments shared by both script binaries.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(about = "Transform a text file line by line"))]
pub struct CliConfig {
    /// Source text file
    pub in_path: PathBuf,

    /// Destination file, created or overwritten
    pub out_path: PathBuf,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(skip = TransformKind::Uppercase))]
    pub kind: TransformKind,
}

impl CliConfig {
    pub fn new(kind: TransformKind, in_path: impl Into<PathBuf>, out_path: impl Into<PathBuf>) -> Self {
        Self {
            in_path: in_path.into(),
            out_path: out_path.into(),
            verbose: false,
            kind,
        }
    }

    /// Parses the process arguments for the binary that owns `kind`.
    #[cfg(feature = "cli")]
    pub fn parse_for(kind: TransformKind) -> Self {
        let matches = <Self as clap::CommandFactory>::command()
            .name(kind.command_name())
            .get_matches();
        let mut config = match <Self as clap::FromArgMatches>::from_arg_matches(&matches) {
            Ok(config) => config,
            Err(e) => e.exit(),
        };
        config.kind = kind;
        config
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("in_path", &self.in_path)?;
        validate_path("out_path", &self.out_path)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        &self.in_path
    }

    fn output_path(&self) -> &Path {
        &self.out_path
    }

    fn transform_kind(&self) -> TransformKind {
        self.kind
    }
}
