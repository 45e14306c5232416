//! SoX invocation builder
//!
//! Assembles the full argument vector for one SoX run: global options,
//! input files, the output file and the rendered effect chain. Arguments
//! are kept as separate argv atoms and handed to [`std::process::Command`]
//! directly, never joined into a shell string.

use crate::effects::EffectChain;
use crate::error::{Result, SoxError};
use log::{debug, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Default program name, resolved through `PATH`
pub const DEFAULT_PROGRAM: &str = "sox";

/// Where SoX writes its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    /// `-n`: discard output, useful with analysis effects
    Null,
}

/// One SoX command line
#[derive(Debug, Clone)]
pub struct SoxCommand {
    program: PathBuf,
    global_options: Vec<String>,
    inputs: Vec<PathBuf>,
    destination: Destination,
    chain: EffectChain,
}

impl SoxCommand {
    /// Command writing to `output`
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self::with_destination(Destination::File(output.into()))
    }

    /// Command discarding its output
    pub fn null_output() -> Self {
        Self::with_destination(Destination::Null)
    }

    fn with_destination(destination: Destination) -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            global_options: Vec::new(),
            inputs: Vec::new(),
            destination,
            chain: EffectChain::new(),
        }
    }

    /// Use a specific SoX binary
    pub fn program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Add a global option token (e.g. `--no-show-progress`)
    pub fn global_option(mut self, option: impl Into<String>) -> Self {
        self.global_options.push(option.into());
        self
    }

    /// Add an input file
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Set the effect chain
    pub fn effects(mut self, chain: EffectChain) -> Self {
        self.chain = chain;
        self
    }

    pub fn program_path(&self) -> &Path {
        &self.program
    }

    pub fn chain(&self) -> &EffectChain {
        &self.chain
    }

    pub fn chain_mut(&mut self) -> &mut EffectChain {
        &mut self.chain
    }

    /// Build the argument vector, excluding the program itself
    pub fn args(&self) -> Result<Vec<OsString>> {
        if self.inputs.is_empty() {
            return Err(SoxError::InvalidConfig {
                reason: "at least one input file is required".to_string(),
            });
        }

        let effect_tokens = self.chain.render()?;
        let mut args: Vec<OsString> = Vec::with_capacity(
            self.global_options.len() + self.inputs.len() + 1 + effect_tokens.len(),
        );
        args.extend(self.global_options.iter().map(OsString::from));
        args.extend(self.inputs.iter().map(|p| p.as_os_str().to_owned()));
        match &self.destination {
            Destination::File(path) => args.push(path.as_os_str().to_owned()),
            Destination::Null => args.push(OsString::from("-n")),
        }
        args.extend(effect_tokens.into_iter().map(OsString::from));
        Ok(args)
    }

    /// Build a ready-to-spawn [`Command`]
    pub fn to_command(&self) -> Result<Command> {
        let mut command = Command::new(&self.program);
        command.args(self.args()?);
        Ok(command)
    }

    /// Run SoX to completion
    ///
    /// A missing binary maps to [`SoxError::BinaryNotFound`] and a non-zero
    /// exit to [`SoxError::ProcessFailed`] carrying SoX's stderr.
    pub fn run(&self) -> Result<Output> {
        let mut command = self.to_command()?;
        info!("Running {} with {} effects", self.program.display(), self.chain.len());
        debug!("{:?}", command);

        let output = command.output().map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => SoxError::BinaryNotFound {
                program: self.program.clone(),
                source,
            },
            _ => SoxError::Io(source),
        })?;

        if !output.status.success() {
            return Err(SoxError::ProcessFailed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}
