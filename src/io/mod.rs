/*!
# IO

Utilities for reading and writing graphs from and to MatrixMarket files.

## MatrixMarket

The **coordinate** flavour of the [MatrixMarket](https://math.nist.gov/MatrixMarket/formats.html)
format stores a sparse matrix as a header line `rows cols entries`, followed by one line
`row col [value]` per entry. Rows and columns are `1`-indexed, lines starting with `%` are comments.
A square matrix with `n` rows is read as a multigraph with `n` nodes and one edge per entry;
values are ignored.

- [`MtxReader`] / [`MtxRead`] parse such files,
- [`MtxWriter`] / [`MtxWrite`] write a graph as a symmetric pattern matrix,
- [`RangeReducer`] extracts the subgraph induced by a contiguous range of nodes without building
  a graph.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
*/

pub mod mtx;
pub mod reduce;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use mtx::*;
pub use reduce::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
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
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value {next:?} found. Cannot parse {}.", $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;

/// Iterates over the lines of a reader, skipping blank lines and lines starting with
/// `comment_identifier`. Leading and trailing whitespace is removed.
pub(crate) struct ContentLines<'a, R> {
    lines: std::io::Lines<R>,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> ContentLines<'a, R> {
    pub(crate) fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            comment_identifier,
        }
    }
}

impl<R: BufRead> Iterator for ContentLines<'_, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Err(err) => return Some(Err(err)),
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty()
                        || (!self.comment_identifier.is_empty()
                            && trimmed.starts_with(self.comment_identifier))
                    {
                        continue;
                    }
                    return Some(Ok(trimmed.to_string()));
                }
            }
        }
    }
}
