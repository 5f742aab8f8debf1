//! Tracing setup for a fullscreen TUI: events go to a log file when one is
//! configured and are discarded otherwise, so the alternate screen is never
//! corrupted by stray writes.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

/// Environment variable consulted when no `--log` path is given.
pub const LOG_PATH_ENV: &str = "FLOAT_WM_LOG";

#[derive(Clone)]
pub struct LogTarget {
    file: Option<Arc<File>>,
}

pub struct LogWriter {
    file: Option<Arc<File>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.file {
            Some(file) => (&**file).write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.file {
            Some(file) => (&**file).flush(),
            None => Ok(()),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogTarget {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Initialize the global subscriber writing to `path` (appending), or to a
/// sink when `path` is `None`. Safe to call more than once; later calls are
/// no-ops for the global subscriber.
pub fn init(path: Option<&Path>) -> io::Result<()> {
    let file = match path {
        Some(path) => Some(Arc::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(LogTarget { file })
        .with_target(false)
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Initialize from the `FLOAT_WM_LOG` environment variable.
pub fn init_default() -> io::Result<()> {
    match std::env::var_os(LOG_PATH_ENV) {
        Some(path) => init(Some(Path::new(&path))),
        None => init(None),
    }
}
