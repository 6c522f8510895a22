use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{GraphError, Result};

/// A directed graph stored as an adjacency list. Vertices are dense
/// indices in `[0, num_vertices)`; each vertex owns a bag of the vertices
/// reachable by one outgoing edge. Space is proportional to V + E, adding
/// an edge is constant time, and iterating the neighbours of a vertex
/// costs time proportional to its outdegree.
///
/// Edges are one-directional: `add_edge(u, v)` records `v` in the list of
/// `u` only. Self-loops and parallel edges are permitted and counted
/// individually.
#[derive(Debug, Clone)]
pub struct Digraph {
    num_vertices: usize,              // fixed at construction
    num_edges: usize,                 // incremented per insertion
    adjacency_lists: Vec<Vec<usize>>, // adjacency_lists[u] = heads of edges leaving u
}

impl Digraph {
    /// Creates a graph with `num_vertices` vertices and zero edges.
    pub fn new(num_vertices: usize) -> Digraph {
        Digraph {
            num_vertices,
            num_edges: 0,
            adjacency_lists: vec![Vec::new(); num_vertices],
        }
    }

    /// Creates a graph by reading a serialized edge list from a file.
    ///
    /// The expected format is whitespace-separated integers: the vertex
    /// count, then a pair count, then that many `<u> <v>` pairs. For
    /// example:
    ///
    /// ```text
    /// 250
    /// 1273
    /// 244 246
    /// 239 240
    /// ...
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Digraph> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|err| GraphError::load(&name, err.to_string()))?;
        Digraph::from_reader(BufReader::new(file), &name)
    }

    /// Creates a graph by reading a serialized edge list from any reader.
    /// `source` identifies the input in error reports.
    ///
    /// The declared pair count only bounds how many pairs are consumed;
    /// the stored edge count is derived from the insertions themselves. A
    /// source with fewer tokens than declared fails rather than silently
    /// yielding a smaller graph.
    pub fn from_reader<R: Read>(mut reader: R, source: &str) -> Result<Digraph> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|err| GraphError::load(source, err.to_string()))?;
        let mut tokens = text.split_whitespace();

        let num_vertices = next_token(&mut tokens, source, "vertex count")?;
        let declared_edges: usize = next_token(&mut tokens, source, "edge count")?;

        let mut graph = Digraph::new(num_vertices);
        for _ in 0..declared_edges {
            let u = next_token(&mut tokens, source, "edge tail")?;
            let v = next_token(&mut tokens, source, "edge head")?;
            graph
                .add_edge(u, v)
                .map_err(|err| GraphError::load(source, err.to_string()))?;
        }

        Ok(graph)
    }

    /// The number of vertices in this graph.
    pub fn vertex_count(&self) -> usize {
        self.num_vertices
    }

    /// The number of edges in this graph.
    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    fn validate_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.num_vertices {
            return Err(GraphError::OutOfRangeVertex {
                vertex,
                num_vertices: self.num_vertices,
            });
        }
        Ok(())
    }

    /// Adds a directed edge from vertex `u` to vertex `v`. Both endpoints
    /// are validated before anything is mutated.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.validate_vertex(u)?;
        self.validate_vertex(v)?;
        self.push_edge(u, v);
        Ok(())
    }

    // Endpoints already validated.
    fn push_edge(&mut self, u: usize, v: usize) {
        self.adjacency_lists[u].push(v);
        self.num_edges += 1;
    }

    /// The vertices adjacent to `vertex`, in insertion order.
    pub fn adjacent_to(&self, vertex: usize) -> Result<&[usize]> {
        self.validate_vertex(vertex)?;
        Ok(&self.adjacency_lists[vertex])
    }

    /// The number of edges leaving `vertex`.
    pub fn outdegree(&self, vertex: usize) -> Result<usize> {
        self.validate_vertex(vertex)?;
        Ok(self.adjacency_lists[vertex].len())
    }

    /// Creates the reverse of this graph: every head->tail edge becomes a
    /// tail->head edge in the result.
    pub fn reverse(&self) -> Digraph {
        let mut reversed = Digraph::new(self.num_vertices);
        for head in 0..self.num_vertices {
            for &tail in &self.adjacency_lists[head] {
                reversed.push_edge(tail, head);
            }
        }
        reversed
    }
}

impl fmt::Display for Digraph {
    /// Renders the graph in the following format:
    ///
    /// ```text
    /// V vertices, E edges
    /// 0: e e e
    /// 1: e e
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.num_vertices, self.num_edges)?;
        for v in 0..self.num_vertices {
            write!(f, "{}: ", v)?;
            for w in &self.adjacency_lists[v] {
                write!(f, "{} ", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn next_token<'a, I>(tokens: &mut I, source: &str, what: &str) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| GraphError::load(source, format!("unexpected end of input reading {}", what)))?;
    token
        .parse()
        .map_err(|_| GraphError::load(source, format!("invalid {} '{}'", what, token)))
}
