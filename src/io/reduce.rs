//! # Range Reduction
//!
//! Extracts the subgraph induced by the contiguous `1`-indexed node range `start..=end` from a
//! MatrixMarket file without building a graph. Kept entries are shifted so that `start` becomes
//! node `1`, values are dropped and the output is a pattern matrix with `end - start + 1` rows.

use std::{fs::File, io::BufReader};

use smallvec::SmallVec;
use tracing::debug;

use super::*;

/// Writes the subgraph of a MatrixMarket file induced by a node range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeReducer {
    start: Node,
    end: Node,
}

impl RangeReducer {
    /// Creates a reducer for the inclusive, `1`-indexed range `start..=end`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `start == 0 || end < start`.
    pub fn new(start: Node, end: Node) -> Result<Self> {
        raise_error_unless!(
            start > 0 && end >= start,
            ErrorKind::InvalidInput,
            format!("invalid range: start={start} end={end}")
        );
        Ok(Self { start, end })
    }

    /// Number of nodes in the reduced graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.end - self.start + 1
    }

    /// Maps a `1`-indexed node of the input to its `1`-indexed node in the output
    fn remap(&self, u: Node) -> Option<Node> {
        (self.start..=self.end).contains(&u).then(|| u - self.start + 1)
    }

    /// Reads a MatrixMarket file from `reader` and writes the reduced file to `writer`.
    ///
    /// The `%%MatrixMarket` banner of the input is kept (a pattern banner is written if there is
    /// none), all other comments are dropped. The first non-comment line is the header of the
    /// input and is replaced by `k k m` for the reduced graph. Lines that do not start with two
    /// integers are skipped.
    ///
    /// Returns the number of entries written.
    pub fn reduce<R, W>(&self, reader: R, writer: W) -> Result<u64>
    where
        R: BufRead,
        W: Write,
    {
        let mut banner = None;
        let mut header_seen = false;
        let mut edges = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.starts_with('%') {
                if line.starts_with("%%MatrixMarket") {
                    banner = Some(line.to_string());
                }
                continue;
            }

            let tokens: SmallVec<[&str; 2]> = line.split_whitespace().take(2).collect();
            let [u, v] = tokens.as_slice() else {
                continue;
            };
            let (Ok(u), Ok(v)) = (u.parse::<Node>(), v.parse::<Node>()) else {
                continue;
            };

            if !header_seen {
                header_seen = true;
                continue;
            }

            if let (Some(u), Some(v)) = (self.remap(u), self.remap(v)) {
                edges.push(Edge(u - 1, v - 1));
            }
        }

        debug!(
            start = self.start,
            end = self.end,
            entries = edges.len(),
            "range reduction finished"
        );

        let k = self.number_of_nodes();
        let entries = edges.len() as u64;
        MtxWriter::new()
            .banner(banner.unwrap_or_else(|| MTX_PATTERN_BANNER.to_string()))
            .comment(format!(
                "Reduced to vertices from {} to {}",
                self.start, self.end
            ))
            .try_write_entries(writer, MtxHeader::square(k, entries), edges)?;

        Ok(entries)
    }

    /// Reduces the file at `input` and writes the result to `output`
    pub fn reduce_file<P, Q>(&self, input: P, output: Q) -> Result<u64>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let reader = BufReader::new(File::open(input)?);
        let writer = BufWriter::new(File::create(output)?);
        self.reduce(reader, writer)
    }
}
