//! Typed construction and execution of external tool command lines.
//!
//! The builder functions are pure: they map operation parameters to an
//! ordered argument list without touching the process table, so flag handling
//! (offsets, recursion) is unit-testable. Execution is a separate step on the
//! built [`ToolCommand`].

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::constants::DD_BLOCK_SIZE;
use crate::error::ToolError;
use crate::tools::Toolbox;

/// One fully-constructed external command: program plus ordered arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCommand {
    program: String,
    args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: &str) -> Self {
        ToolCommand {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Run the tool and capture its standard output. Non-zero exit is an
    /// error carrying the tool's standard error.
    pub fn capture(&self) -> Result<Vec<u8>, ToolError> {
        debug!("Running: {}", self);
        let output = self
            .command()
            .output()
            .map_err(|err| self.spawn_error(err))?;
        self.check_status(output.status, &output.stderr)?;
        Ok(output.stdout)
    }

    /// Run the tool with its standard output attached directly to `dest`.
    ///
    /// The child process writes into the file itself, so arbitrarily large
    /// output never passes through this process's memory.
    pub fn capture_to_file(&self, dest: &Path) -> Result<(), ToolError> {
        debug!("Running: {} > {}", self, dest.display());
        let file = File::create(dest)?;
        let output = self
            .command()
            .stdout(Stdio::from(file))
            .output()
            .map_err(|err| self.spawn_error(err))?;
        self.check_status(output.status, &output.stderr)
    }

    /// Run the tool with inherited stdio, so its own progress reporting
    /// reaches the operator's terminal.
    pub fn run_interactive(&self) -> Result<(), ToolError> {
        debug!("Running: {}", self);
        let status = self
            .command()
            .status()
            .map_err(|err| self.spawn_error(err))?;
        self.check_status(status, &[])
    }

    /// Run the tool with all output discarded, reporting only whether it
    /// could be launched. Used for presence probes where the exit status is
    /// irrelevant.
    pub fn run_quiet(&self) -> Result<ExitStatus, ToolError> {
        self.command()
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|err| self.spawn_error(err))
    }

    /// Launch the tool without waiting for it to exit.
    pub fn spawn_detached(&self) -> Result<(), ToolError> {
        debug!("Launching detached: {}", self);
        self.command()
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| self.spawn_error(err))?;
        Ok(())
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    fn spawn_error(&self, err: io::Error) -> ToolError {
        if err.kind() == io::ErrorKind::NotFound {
            ToolError::MissingTool(self.program.clone())
        } else {
            ToolError::Io(err)
        }
    }

    fn check_status(&self, status: ExitStatus, stderr: &[u8]) -> Result<(), ToolError> {
        if status.success() {
            Ok(())
        } else {
            Err(ToolError::ExitFailure {
                tool: self.program.clone(),
                status,
                stderr: String::from_utf8_lossy(stderr).trim().to_string(),
            })
        }
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// `mmls <image>`: partition table layout.
pub fn partition_listing(tools: &Toolbox, image: &Path) -> ToolCommand {
    ToolCommand::new(&tools.mmls).arg(image)
}

/// `fsstat [-o offset] <image>`: filesystem metadata.
pub fn filesystem_stats(tools: &Toolbox, image: &Path, offset: Option<u64>) -> ToolCommand {
    with_offset(ToolCommand::new(&tools.fsstat), offset).arg(image)
}

/// `fls [-r] [-o offset] <image>`: plain file listing.
pub fn file_listing(
    tools: &Toolbox,
    image: &Path,
    offset: Option<u64>,
    recursive: bool,
) -> ToolCommand {
    let mut command = ToolCommand::new(&tools.fls);
    if recursive {
        command = command.arg("-r");
    }
    with_offset(command, offset).arg(image)
}

/// `fls -m / -r [-o offset] <image>`: machine-parseable body listing for
/// timeline construction. `-m /` roots every path at the filesystem root so
/// the reconstructed timeline reads naturally.
pub fn body_listing(tools: &Toolbox, image: &Path, offset: Option<u64>) -> ToolCommand {
    let command = ToolCommand::new(&tools.fls).arg("-m").arg("/").arg("-r");
    with_offset(command, offset).arg(image)
}

/// `icat [-o offset] <image> <inode>`: raw file content on stdout.
pub fn extract_by_inode(
    tools: &Toolbox,
    image: &Path,
    offset: Option<u64>,
    inode: u64,
) -> ToolCommand {
    with_offset(ToolCommand::new(&tools.icat), offset)
        .arg(image)
        .arg(inode.to_string())
}

/// `mactime -b <bodyfile>`: chronological timeline from a body file.
pub fn timeline_from_body(tools: &Toolbox, body_file: &Path) -> ToolCommand {
    ToolCommand::new(&tools.mactime).arg("-b").arg(body_file)
}

/// `dd if=<src> of=<dst> bs=4M conv=sync,noerror status=progress`.
///
/// `conv=sync,noerror` keeps the copy going past unreadable blocks, padding
/// them with zeros: a bad sector must not void the whole acquisition.
pub fn block_copy(tools: &Toolbox, source: &Path, dest: &Path) -> ToolCommand {
    ToolCommand::new(&tools.dd)
        .arg(prefixed("if=", source))
        .arg(prefixed("of=", dest))
        .arg(format!("bs={}", DD_BLOCK_SIZE))
        .arg("conv=sync,noerror")
        .arg("status=progress")
}

/// `<program> -V`: version probe used to verify installation.
pub fn version_probe(program: &str) -> ToolCommand {
    ToolCommand::new(program).arg("-V")
}

fn with_offset(command: ToolCommand, offset: Option<u64>) -> ToolCommand {
    match offset {
        Some(offset) => command.arg("-o").arg(offset.to_string()),
        None => command,
    }
}

fn prefixed(prefix: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(prefix);
    arg.push(path);
    arg
}
