//! Line-oriented formatter for operation results
//!
//! This module provides `TextFormatter`, which renders values, keys, paths
//! and entries one per line. Leaves are printed as compact JSON; paths are
//! printed dotted and colored.

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::ops::Entry;
use crate::tree::Node;

/// Formatter for line-oriented result output.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_values(&mut self, values: &[&Node]) -> io::Result<()> {
        for value in values {
            self.write_compact(value)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    pub fn write_keys(&mut self, keys: &[&str]) -> io::Result<()> {
        for key in keys {
            self.out.set_color(ColorSpec::new().set_bold(true))?;
            write!(self.out, "{}", key)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    pub fn write_paths(&mut self, paths: &[Vec<String>]) -> io::Result<()> {
        for path in paths {
            self.write_path(path)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// One `path = value` line per entry.
    pub fn write_entries(&mut self, entries: &[Entry<'_>]) -> io::Result<()> {
        for entry in entries {
            self.write_path(&entry.path)?;
            write!(self.out, " = ")?;
            self.write_compact(entry.value)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// A whole tree, pretty-printed.
    pub fn write_tree(&mut self, node: &Node) -> io::Result<()> {
        super::json::write_json(&mut self.out, node)
    }

    pub fn write_line(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn write_path(&mut self, path: &[String]) -> io::Result<()> {
        for (i, segment) in path.iter().enumerate() {
            if i > 0 {
                self.out.reset()?;
                write!(self.out, ".")?;
            }
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.out, "{}", segment)?;
        }
        self.out.reset()
    }

    fn write_compact(&mut self, node: &Node) -> io::Result<()> {
        if node.is_container() {
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        serde_json::to_writer(&mut self.out, node).map_err(io::Error::other)?;
        self.out.reset()
    }
}
