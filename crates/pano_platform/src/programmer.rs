//! Device-programmer handles.
//!
//! A programmer writes a bitstream onto the device through an external tool.
//! The handle only records how to invoke that tool; nothing is executed until
//! [`Programmer::load_bitstream`] or [`Programmer::flash`] is called.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Errors raised while invoking an external programming tool.
#[derive(Debug, thiserror::Error)]
pub enum ProgrammerError {
    /// The tool could not be started.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        /// The executable that was invoked.
        tool: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The tool ran and reported failure.
    #[error("{tool} failed ({status}): {stderr}")]
    Failed {
        /// The executable that was invoked.
        tool: String,
        /// The exit status as displayed by the OS.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// Flashing requires a JTAG-to-SPI proxy bitstream that was not configured.
    #[error("flashing requires a flash proxy bitstream")]
    MissingFlashProxy,
}

/// A handle to an external tool that programs the device.
pub trait Programmer {
    /// Loads a bitstream into the device configuration memory (volatile).
    fn load_bitstream(&self, bitstream: &Path) -> Result<(), ProgrammerError>;

    /// Writes a data file into the configuration flash at `address`.
    fn flash(&self, address: u32, data: &Path) -> Result<(), ProgrammerError>;
}

/// OpenOCD over a JTAG adapter described by an interface config file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenOcd {
    executable: String,
    config: PathBuf,
    flash_proxy: Option<PathBuf>,
}

impl OpenOcd {
    /// Creates a handle using the given OpenOCD config file.
    pub fn new(config: impl Into<PathBuf>) -> Self {
        Self {
            executable: "openocd".to_string(),
            config: config.into(),
            flash_proxy: None,
        }
    }

    /// Sets the proxy bitstream used to reach the SPI flash over JTAG.
    pub fn with_flash_proxy(mut self, proxy: impl Into<PathBuf>) -> Self {
        self.flash_proxy = Some(proxy.into());
        self
    }

    /// Overrides the OpenOCD executable (defaults to `openocd` on `PATH`).
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Returns the OpenOCD config file.
    pub fn config(&self) -> &Path {
        &self.config
    }

    /// Returns the flash proxy bitstream, if configured.
    pub fn flash_proxy(&self) -> Option<&Path> {
        self.flash_proxy.as_deref()
    }

    /// Returns the executable that will be invoked.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Arguments for loading a bitstream into the FPGA.
    pub fn load_bitstream_args(&self, bitstream: &Path) -> Vec<String> {
        self.script_args(&[
            "init".to_string(),
            format!("pld load 0 {{{}}}", bitstream.display()),
            "exit".to_string(),
        ])
    }

    /// Arguments for writing `data` into the SPI flash at `address`.
    pub fn flash_args(&self, address: u32, data: &Path) -> Result<Vec<String>, ProgrammerError> {
        let proxy = self
            .flash_proxy
            .as_deref()
            .ok_or(ProgrammerError::MissingFlashProxy)?;
        Ok(self.script_args(&[
            "init".to_string(),
            format!("jtagspi_init 0 {{{}}}", proxy.display()),
            format!("jtagspi_program {{{}}} 0x{address:x}", data.display()),
            "fini".to_string(),
            "exit".to_string(),
        ]))
    }

    fn script_args(&self, script: &[String]) -> Vec<String> {
        vec![
            "-f".to_string(),
            self.config.display().to_string(),
            "-c".to_string(),
            script.join("; "),
        ]
    }

    fn run(&self, args: &[String]) -> Result<(), ProgrammerError> {
        let output = Command::new(&self.executable)
            .args(args)
            .output()
            .map_err(|source| ProgrammerError::Spawn {
                tool: self.executable.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProgrammerError::Failed {
                tool: self.executable.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl Programmer for OpenOcd {
    fn load_bitstream(&self, bitstream: &Path) -> Result<(), ProgrammerError> {
        self.run(&self.load_bitstream_args(bitstream))
    }

    fn flash(&self, address: u32, data: &Path) -> Result<(), ProgrammerError> {
        let args = self.flash_args(address, data)?;
        self.run(&args)
    }
}
