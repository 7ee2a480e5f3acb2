//! # Csv
//!
//! The Csv-Format consists of an optional header line `from, to`, followed by one
//! non-comment-line `u, v` per unordered edge `{u, v}`.
//! When writing, every edge is emitted exactly once in normalized form and the lines are sorted,
//! so the output is deterministic.

use std::{fmt::Display, str::FromStr};

use tracing::debug;

use super::*;

/// A GraphReader for the Csv-Format
#[derive(Debug, Clone)]
pub struct CsvReader {
    /// Character separating the two endpoints of an edge
    separator: char,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// If *true*, the first non-comment-line is skipped
    header: bool,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            separator: ',',
            comment_identifier: "#".to_string(),
            header: false,
        }
    }
}

impl CsvReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator
    pub fn separator(mut self, separator: char) -> CsvReader {
        self.separator = separator;
        self
    }

    /// Updates the comment identifier. An empty identifier disables comments.
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> CsvReader {
        self.comment_identifier = c.into();
        self
    }

    /// Updates whether the input starts with a header line
    pub fn header(mut self, header: bool) -> CsvReader {
        self.header = header;
        self
    }

    /// Returns *true* if the (trimmed) line carries no edge
    fn is_skipped(&self, line: &str) -> bool {
        line.is_empty()
            || (!self.comment_identifier.is_empty() && line.starts_with(&self.comment_identifier))
    }
}

impl<G> GraphReader<G> for CsvReader
where
    G: GraphFromScratch + GraphEdgeOrder,
    G::Vertex: FromStr,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut graph = G::new();
        let mut header_pending = self.header;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;

            let content = line.trim();
            if self.is_skipped(content) {
                continue;
            }
            if header_pending {
                header_pending = false;
                continue;
            }

            let mut parts = content.split(self.separator).map(str::trim);
            let u: G::Vertex = parse_next_value!(parts, "source vertex", line_no);
            let v: G::Vertex = parse_next_value!(parts, "target vertex", line_no);
            raise_error_unless!(
                parts.next().is_none(),
                ErrorKind::InvalidData,
                format!("Too many values in line {line_no}.")
            );

            graph.add_edge(u, v).map_err(|err| {
                io_error!(ErrorKind::InvalidData, format!("Line {line_no}: {err}"))
            })?;
        }

        debug!(
            n = graph.number_of_vertices(),
            m = graph.number_of_edges(),
            "read csv edge list"
        );
        Ok(graph)
    }
}

/// Trait for creating graphs from a CsvReader.
/// Used as shorthand for default CsvReader settings
pub trait CsvRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_csv<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_csv_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_csv(BufReader::new(File::open(path)?))
    }
}

impl<G> CsvRead for G
where
    G: GraphFromScratch + GraphEdgeOrder,
    G::Vertex: FromStr,
{
    fn try_read_csv<R: BufRead>(reader: R) -> Result<Self> {
        CsvReader::default().try_read_graph(reader)
    }
}

/// A writer for the Csv-Format
#[derive(Debug, Clone)]
pub struct CsvWriter {
    /// Text placed between the two endpoints of an edge
    separator: String,
    /// If *true*, a header line is written first
    header: bool,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            header: false,
        }
    }
}

impl CsvWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator
    pub fn separator<S: Into<String>>(mut self, separator: S) -> CsvWriter {
        self.separator = separator.into();
        self
    }

    /// Updates whether a `from, to` header line is written
    pub fn header(mut self, header: bool) -> CsvWriter {
        self.header = header;
        self
    }

    /// Returns the lines (without line breaks) representing `graph`
    fn lines<G>(&self, graph: &G) -> Vec<String>
    where
        G: AdjacencyList,
        G::Vertex: Display,
    {
        let header = self.header.then(|| format!("from{}to", self.separator));
        let edges = graph
            .ordered_edges()
            .into_iter()
            .map(|Edge(u, v)| format!("{u}{}{v}", self.separator));

        header.into_iter().chain(edges).collect()
    }

    /// Returns the Csv-representation of `graph` with a line break after every line
    pub fn format<G>(&self, graph: &G) -> String
    where
        G: AdjacencyList,
        G::Vertex: Display,
    {
        let mut csv = String::new();
        for line in self.lines(graph) {
            csv.push_str(&line);
            csv.push('\n');
        }
        csv
    }
}

impl<G> GraphWriter<G> for CsvWriter
where
    G: AdjacencyList,
    G::Vertex: Display,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for line in self.lines(graph) {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

/// Trait for writing a graph in the Csv-Format.
/// Shorthand for default settings.
pub trait CsvWrite {
    /// Returns one `u, v` line per edge, normalized and sorted
    ///
    /// # Examples
    /// ```
    /// use graphstats::{prelude::*, io::*};
    ///
    /// let g: Graph = Graph::from_edges([], [(2, 1), (0, 1)]).unwrap();
    /// assert_eq!(g.to_csv(), "0, 1\n1, 2\n");
    /// ```
    fn to_csv(&self) -> String;

    /// Tries to write the graph to a writer
    fn try_write_csv<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_csv(writer)
    }
}

impl<G> CsvWrite for G
where
    G: AdjacencyList,
    G::Vertex: Display,
{
    fn to_csv(&self) -> String {
        CsvWriter::default().format(self)
    }

    fn try_write_csv<W: Write>(&self, writer: W) -> Result<()> {
        CsvWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use crate::gens::*;

    use super::*;

    fn sample_graph() -> Graph {
        Graph::from_edges(0..6, [(0, 1), (1, 2), (1, 3), (3, 4), (4, 0)]).unwrap()
    }

    #[test]
    fn csv_lines() {
        let g = sample_graph();
        assert_eq!(g.to_csv(), "0, 1\n0, 4\n1, 2\n1, 3\n3, 4\n");
        assert_eq!(Graph::<u32>::new().to_csv(), "");
    }

    #[test]
    fn round_trip() {
        let mut g: Graph = Graph::from_vertices(0..40);
        g.make_regular(4).unwrap();

        let mut buffer = Vec::new();
        g.try_write_csv(&mut buffer).unwrap();
        let read: Graph = Graph::try_read_csv(buffer.as_slice()).unwrap();

        assert_eq!(read, g);
        assert_eq!(read.to_csv(), g.to_csv());
    }

    #[test]
    fn round_trip_drops_isolated_vertices() {
        let g = sample_graph();
        let read: Graph = Graph::try_read_csv(g.to_csv().as_bytes()).unwrap();

        assert_eq!(read.number_of_vertices(), 5);
        assert_eq!(read.ordered_edges(), g.ordered_edges());
    }

    #[test]
    fn header_and_separator() {
        let g = sample_graph();
        let writer = CsvWriter::new().header(true).separator(";");
        let csv = writer.format(&g);
        assert!(csv.starts_with("from;to\n0;1\n"));

        let reader = CsvReader::new().header(true).separator(';');
        let read: Graph = reader.try_read_graph(csv.as_bytes()).unwrap();
        assert_eq!(read.ordered_edges(), g.ordered_edges());
    }

    #[test]
    fn comments_and_whitespace() {
        let input = "# generated\n\n  0 ,1\n\t2,  1  \n# done\n";
        let g: Graph = Graph::try_read_csv(input.as_bytes()).unwrap();
        assert_eq!(g.ordered_edges(), vec![Edge(0, 1), Edge(1, 2)]);

        let reader = CsvReader::new().comment_identifier("");
        let res: Result<Graph> = reader.try_read_graph(input.as_bytes());
        assert_eq!(res.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn duplicate_lines_are_absorbed() {
        let g: Graph = Graph::try_read_csv("0, 1\n1, 0\n0, 1\n".as_bytes()).unwrap();
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn invalid_input() {
        for input in ["0, 1\n2\n", "0, x\n", "0, 1, 2\n", "from, to\n0, 1\n", "3, 3\n"] {
            let res: Result<Graph> = Graph::try_read_csv(input.as_bytes());
            assert_eq!(res.unwrap_err().kind(), ErrorKind::InvalidData, "{input:?}");
        }
    }

    #[test]
    fn string_vertices() {
        let g: Graph<String> = Graph::try_read_csv("b, a\na, c\n".as_bytes()).unwrap();
        assert_eq!(g.to_csv(), "a, b\na, c\n");
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("graphstats-{}.csv", std::process::id()));
        let g = sample_graph();

        CsvWriter::new()
            .header(true)
            .try_write_graph_file(&g, &path)
            .unwrap();
        let read: Graph = CsvReader::new()
            .header(true)
            .try_read_graph_file(&path)
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read.ordered_edges(), g.ordered_edges());
    }
}
