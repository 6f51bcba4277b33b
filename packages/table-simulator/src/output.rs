//! JSON-lines output for simulation results.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

pub struct OutputWriter {
    writer: Box<dyn Write>,
    path: Option<PathBuf>,
}

impl OutputWriter {
    /// Write to `path`, or to stdout when no path is given.
    pub fn new(path: Option<&Path>) -> io::Result<Self> {
        let (writer, path): (Box<dyn Write>, _) = match path {
            Some(path) => {
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    std::fs::create_dir_all(dir)?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(path)?;
                (Box::new(BufWriter::new(file)), Some(path.to_path_buf()))
            }
            None => (Box::new(BufWriter::new(io::stdout())), None),
        };
        Ok(Self { writer, path })
    }

    pub fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n")
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
