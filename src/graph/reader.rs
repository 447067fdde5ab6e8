//! Reader for the line-oriented graph record format
//!
//! A file is a sequence of `Node` records followed by a sequence of `Edge`
//! records. Every record starts with its keyword on a line of its own; the
//! following lines carry one `name value` field each:
//!
//! ```text
//! Node
//! id 14
//! Edge
//! source 14
//! target 5
//! length 3.5
//! oneway false
//! ```
//!
//! Field names are not checked, only their order matters. The last `Edge` field
//! (the one-way flag) is skipped since graphs are undirected. Reading stops at
//! the first line that starts neither kind of record.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use crate::graph::{Graph, MutableGraph, UndirectedGraph};
use crate::{Error, Result};

/// Graph produced by the reader: node ids as labels, float lengths as weights
pub type RoadGraph = UndirectedGraph<u64, f64>;

/// Reads a graph from a file in the record format
pub fn read_graph_file<P: AsRef<Path>>(path: P) -> Result<RoadGraph> {
    let path = path.as_ref();
    debug!("Reading graph from {}", path.display());
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}

/// Reads a graph in the record format from any buffered reader
pub fn read_graph<R: BufRead>(reader: R) -> Result<RoadGraph> {
    let mut records = RecordReader::new(reader);
    let mut graph = RoadGraph::new();

    let mut entry = records.next_keyword()?;
    while entry.as_deref() == Some("Node") {
        let id: u64 = records.field()?;
        graph.add_vertex(id);
        entry = records.next_keyword()?;
    }
    info!("Read {} vertices", graph.vertex_count());

    let mut edges = 0;
    while entry.as_deref() == Some("Edge") {
        let source: u64 = records.field()?;
        let target: u64 = records.field()?;
        let length: f64 = records.field()?;
        records.skip_line()?;

        if length < 0.0 || length.is_nan() {
            return Err(Error::NegativeWeight(length));
        }
        if !graph.add_edge(source, target, length) {
            return Err(Error::InvalidEdge(source.to_string(), target.to_string()));
        }
        edges += 1;
        entry = records.next_keyword()?;
    }
    info!("Read {} edges", edges);

    Ok(graph)
}

struct RecordReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> RecordReader<R> {
    fn new(reader: R) -> Self {
        RecordReader {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.line += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }

    fn next_keyword(&mut self) -> Result<Option<String>> {
        Ok(self.next_line()?.map(|line| line.trim().to_string()))
    }

    fn skip_line(&mut self) -> Result<()> {
        self.next_line().map(|_| ())
    }

    /// Parses the value of the next `name value` line
    fn field<T: FromStr>(&mut self) -> Result<T> {
        let line = self.next_line()?.ok_or_else(|| self.error("unexpected end of input"))?;
        let value = line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| self.error(format!("expected `name value`, found {:?}", line)))?;
        value
            .parse()
            .map_err(|_| self.error(format!("cannot parse {:?}", value)))
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::Parse {
            line: self.line,
            message: message.into(),
        }
    }
}
