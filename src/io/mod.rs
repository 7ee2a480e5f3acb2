/*!
# IO

Utilities for exporting graphs to and importing graphs from plain text.

## Formats

- **Csv**: an edge list with one `u, v` line per unordered edge, optionally preceded by a `from, to` header.
  Vertices are written with their [`Display`](std::fmt::Display) implementation and parsed back with
  [`FromStr`](std::str::FromStr), so any vertex type providing both can be round-tripped.
  Isolated vertices are not represented in an edge list.
- **Text**: the [`Display`](std::fmt::Display) implementation of [`Graph`](crate::repr::Graph) lists the
  sorted vertices followed by the sorted edges. It is meant for humans and cannot be read back.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers of a specific format
  (e.g. [`CsvReader`], [`CsvWriter`]).
- [`CsvRead`] and [`CsvWrite`] are shorthands using the default settings.

All functions in this module return [`std::io::Result`]; invalid input (malformed lines, self-loops) is
reported as [`ErrorKind::InvalidData`].
*/

mod csv;
mod text;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use csv::*;

/// A configured parser turning a text edge list into a graph.
///
/// Vertices are created on first mention, so isolated vertices never appear in the result.
pub trait GraphReader<G> {
    /// Parses every line of `reader` and inserts the edges it describes.
    ///
    /// # Errors
    /// Malformed lines and self-loops yield [`ErrorKind::InvalidData`] naming the offending line;
    /// failures of `reader` itself are passed through.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Opens `path` and parses it with [`GraphReader::try_read_graph`].
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// A configured formatter emitting one line per edge of a graph.
///
/// Output is sorted, so equal graphs are always written identically.
pub trait GraphWriter<G> {
    /// Writes all lines of `graph` to `writer` and flushes it.
    ///
    /// # Errors
    /// Only failures of `writer` are reported.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Creates (or truncates) `path` and writes `graph` into it.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr, $line : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line {} when parsing {}.", $line, $name)
            ));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value `{}` in line {}. Cannot parse {}.", token, $line, $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
