//! # MatrixMarket
//!
//! A MatrixMarket coordinate file starts with an optional `%%MatrixMarket` banner and further
//! `%`-comments, followed by a header `rows cols entries` and `entries` lines `row col [value]`.
//! An entry `(i, j)` is read as the edge `Edge(i - 1, j - 1)`; values are ignored, duplicate
//! entries become parallel edges and diagonal entries become self-loops.

use std::{fs::File, io::BufReader};

use smallvec::SmallVec;
use tracing::warn;

use super::*;

/// Banner written in front of every generated file
pub const MTX_PATTERN_BANNER: &str = "%%MatrixMarket matrix coordinate pattern symmetric";

/// Sizes announced in the header line of a MatrixMarket file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MtxHeader {
    /// Number of rows
    pub rows: NumNodes,
    /// Number of columns
    pub cols: NumNodes,
    /// Number of entries
    pub entries: u64,
}

impl MtxHeader {
    /// Header of a square matrix with `n` rows
    pub fn square(n: NumNodes, entries: u64) -> Self {
        Self {
            rows: n,
            cols: n,
            entries,
        }
    }

    /// Parses a header line `rows cols entries`; further tokens are ignored
    pub fn try_parse(line: &str) -> Result<Self> {
        let tokens: SmallVec<[&str; 4]> = line.split_whitespace().collect();
        raise_error_unless!(
            tokens.len() >= 3,
            ErrorKind::InvalidData,
            format!("Unexpected header format: {line:?}")
        );

        let mut tokens = tokens.into_iter();
        Ok(Self {
            rows: parse_next_value!(tokens, "number of rows"),
            cols: parse_next_value!(tokens, "number of columns"),
            entries: parse_next_value!(tokens, "number of entries"),
        })
    }

    /// Returns *true* if the matrix has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Writes the header line
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{} {} {}", self.rows, self.cols, self.entries)
    }
}

/// A GraphReader for MatrixMarket coordinate files
#[derive(Debug, Clone)]
pub struct MtxReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for MtxReader {
    fn default() -> Self {
        Self {
            comment_identifier: "%".to_string(),
        }
    }
}

impl MtxReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> MtxReader {
        self.comment_identifier = c.into();
        self
    }

    /// Parses the header and all entries of a square matrix.
    /// Returned edges are `0`-indexed and in file order.
    ///
    /// # Errors
    /// - `NotFound` if there is no header line,
    /// - `InvalidData` if the header is malformed, the matrix is not square, or an entry cannot
    ///   be parsed or lies outside of `1..=n`.
    ///
    /// Lines with fewer than two tokens are skipped. Fewer entries than announced only cause a
    /// warning.
    pub fn try_read_entries<R: BufRead>(&self, reader: R) -> Result<(MtxHeader, Vec<Edge>)> {
        let mut lines = ContentLines::new(reader, &self.comment_identifier);

        let header = match lines.next() {
            Some(line) => MtxHeader::try_parse(&line?)?,
            None => return Err(io_error!(ErrorKind::NotFound, "Header not found")),
        };
        raise_error_unless!(
            header.is_square(),
            ErrorKind::InvalidData,
            format!("matrix is not square ({} x {})", header.rows, header.cols)
        );

        let n = header.rows;
        let mut edges = Vec::with_capacity(header.entries.min(1 << 20) as usize);
        for line in lines {
            let line = line?;
            let tokens: SmallVec<[&str; 2]> = line.split_whitespace().take(2).collect();
            if tokens.len() < 2 {
                continue;
            }

            let mut tokens = tokens.into_iter();
            let u: Node = parse_next_value!(tokens, "row index");
            let v: Node = parse_next_value!(tokens, "column index");

            raise_error_unless!(
                (1..=n).contains(&u) && (1..=n).contains(&v),
                ErrorKind::InvalidData,
                format!("Entry ({u}, {v}) out of range for a {n} x {n} matrix")
            );

            edges.push(Edge(u - 1, v - 1));
        }

        if (edges.len() as u64) < header.entries {
            warn!(
                expected = header.entries,
                read = edges.len(),
                "fewer entries than announced in header"
            );
        }

        Ok((header, edges))
    }
}

impl<G: GraphFromScratch> GraphReader<G> for MtxReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let (header, edges) = self.try_read_entries(reader)?;
        Ok(G::try_from_edges(header.rows, edges)?)
    }
}

/// Trait for creating graphs from an MtxReader.
/// Used as shorthand for default MtxReader settings
pub trait MtxRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_mtx<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_mtx_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_mtx(BufReader::new(File::open(path)?))
    }
}

impl<G> MtxRead for G
where
    G: GraphFromScratch,
{
    fn try_read_mtx<R: BufRead>(reader: R) -> Result<Self> {
        MtxReader::default().try_read_graph(reader)
    }
}

/// A writer for MatrixMarket coordinate files.
///
/// Writes the banner, optional comment lines, the header `n n m` and one `1`-indexed line per
/// edge. Edges are written as stored, so parallel edges and self-loops survive a round trip.
#[derive(Debug, Clone)]
pub struct MtxWriter {
    banner: String,
    comments: Vec<String>,
}

impl Default for MtxWriter {
    fn default() -> Self {
        Self {
            banner: MTX_PATTERN_BANNER.to_string(),
            comments: Vec::new(),
        }
    }
}

impl MtxWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the `%%MatrixMarket` banner
    pub fn banner<S: Into<String>>(mut self, banner: S) -> MtxWriter {
        self.banner = banner.into();
        self
    }

    /// Adds a comment line written directly after the banner; the leading `%` is added
    pub fn comment<S: Into<String>>(mut self, comment: S) -> MtxWriter {
        self.comments.push(comment.into());
        self
    }

    /// Writes a complete file from a header and `0`-indexed edges
    pub fn try_write_entries<W, I>(&self, mut writer: W, header: MtxHeader, edges: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        writeln!(writer, "{}", self.banner)?;
        for comment in &self.comments {
            writeln!(writer, "% {comment}")?;
        }

        header.write(&mut writer)?;
        for Edge(u, v) in edges {
            writeln!(writer, "{} {}", u + 1, v + 1)?;
        }

        writer.flush()
    }
}

impl<G: EdgeList> GraphWriter<G> for MtxWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, writer: W) -> Result<()> {
        let header = MtxHeader::square(graph.number_of_nodes(), graph.number_of_edges() as u64);
        self.try_write_entries(writer, header, graph.edges())
    }
}

/// Trait to write a graph in MatrixMarket format with default settings
pub trait MtxWrite {
    /// Tries to write the graph to a given writer
    fn try_write_mtx<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a given file
    fn try_write_mtx_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_mtx(BufWriter::new(File::create(path)?))
    }
}

impl<G: EdgeList> MtxWrite for G {
    fn try_write_mtx<W: Write>(&self, writer: W) -> Result<()> {
        MtxWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, gens::*};
    use itertools::Itertools;

    fn read(data: &str) -> Result<MultiGraph> {
        MultiGraph::try_read_mtx(data.as_bytes())
    }

    fn read_err(data: &str) -> ErrorKind {
        read(data).unwrap_err().kind()
    }

    #[test]
    fn read_comments_weights_and_blank_lines() {
        let data = "%%MatrixMarket matrix coordinate real symmetric\n\
                    % a comment\n\
                    \n\
                    4 4 5\n\
                    1 2 0.5\n\
                    2 3\n\
                    \n\
                    % between entries\n\
                    3 4 1e3\n   4 1   \n\
                    1 3\n";

        let graph = read(data).unwrap();
        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0), Edge(0, 2)]
        );
        assert_eq!(graph.edge_connectivity_stoer_wagner(), 2);
    }

    #[test]
    fn duplicates_and_loops_pass_through() {
        let graph = read("3 3 5\n1 2\n2 1\n2 2\n3 3\n2 3\n").unwrap();
        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(graph.number_of_self_loops(), 2);
        assert_eq!(graph.degrees(), vec![2, 3, 1]);
        assert_eq!(graph.edge_connectivity_max_flow(), 1);
    }

    #[test]
    fn short_lines_are_skipped() {
        let graph = read("3 3 2\n1 2\n7\n2 3\n").unwrap();
        assert_eq!(graph.edges().collect_vec(), vec![Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn fewer_entries_than_announced() {
        let graph = read("5 5 10\n1 2\n").unwrap();
        assert_eq!(graph.number_of_nodes(), 5);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn rejects_malformed_files() {
        assert_eq!(read_err(""), ErrorKind::NotFound);
        assert_eq!(read_err("% only comments\n\n"), ErrorKind::NotFound);

        assert_eq!(read_err("3 3\n1 2\n"), ErrorKind::InvalidData);
        assert_eq!(read_err("3 x 2\n1 2\n"), ErrorKind::InvalidData);
        assert_eq!(read_err("3 3 2\n1 b\n"), ErrorKind::InvalidData);
        assert_eq!(read_err("3 3 2\n-1 2\n"), ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_non_square_matrix() {
        let err = read("3 4 1\n1 2\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("not square"));
    }

    #[test]
    fn rejects_out_of_range_entries() {
        assert_eq!(read_err("3 3 1\n0 2\n"), ErrorKind::InvalidData);
        assert_eq!(read_err("3 3 1\n1 4\n"), ErrorKind::InvalidData);
        assert_eq!(read_err("0 0 1\n1 1\n"), ErrorKind::InvalidData);
        assert_eq!(read("0 0 0\n").unwrap().number_of_nodes(), 0);
    }

    #[test]
    fn custom_comment_identifier() {
        let data = "# comment\n2 2 1\n# another\n1 2\n";
        let graph: MultiGraph = MtxReader::new()
            .comment_identifier("#")
            .try_read_graph(data.as_bytes())
            .unwrap();
        assert_eq!(graph.edges().collect_vec(), vec![Edge(0, 1)]);
    }

    #[test]
    fn write_then_read() {
        let mut graph = MultiGraph::two_cycles_with_bridge(3, 4);
        graph.add_edges([(1, 1), (5, 6)]);

        let mut buffer = Vec::new();
        graph.try_write_mtx(&mut buffer).unwrap();

        let text = String::from_utf8(buffer.clone()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(MTX_PATTERN_BANNER));
        assert_eq!(lines.next(), Some("7 7 10"));
        assert_eq!(lines.next(), Some("1 2"));

        let read_back = MultiGraph::try_read_mtx(buffer.as_slice()).unwrap();
        assert_eq!(read_back, graph);
    }

    #[test]
    fn writer_comments() {
        let mut buffer = Vec::new();
        MtxWriter::new()
            .comment("generated")
            .try_write_entries(&mut buffer, MtxHeader::square(2, 1), [Edge(0, 1)])
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            format!("{MTX_PATTERN_BANNER}\n% generated\n2 2 1\n1 2\n")
        );
    }
}
