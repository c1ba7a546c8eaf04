//! Graphs with named nodes, and directed or undirected edges.
//!
//! Every edge connects two existing, distinct nodes, and the same connection is never
//! stored twice. An undirected edge `A - B` counts as a connection in both directions,
//! so it conflicts with both `A -> B` and `B -> A`.
//!
//! Like the other structures, a [`Graph`] is a persistent value: cloning it takes `O(1)`
//! time, and operations return a new graph while the old one stays as it was.

use crate::error::OpError;
use crate::message::{Message, Outcome};
use std::rc::Rc;

pub mod layout;
pub use layout::{LayoutConfig, Position};

/// A node: its identifier and where it is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    id: String,
    pub position: Position,
}

impl GraphNode {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// An edge between two node identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub directed: bool,
}

impl Edge {
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// Whether this edge, as stored, is the connection `source -> target`.
    /// An undirected edge also matches the reversed pair.
    pub fn connects(&self, source: &str, target: &str) -> bool {
        (self.source == source && self.target == target)
            || (!self.directed && self.source == target && self.target == source)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    nodes: Rc<Vec<GraphNode>>,
    edges: Rc<Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// The nodes reachable from `id` over one edge. Directed edges are only
    /// followed forward; undirected edges both ways.
    pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges.iter().filter_map(move |edge| {
            if edge.source == id {
                Some(edge.target.as_str())
            } else if !edge.directed && edge.target == id {
                Some(edge.source.as_str())
            } else {
                None
            }
        })
    }

    /// Number of edges touching `id`, in any direction.
    pub fn degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|edge| edge.touches(id)).count()
    }

    /// Adds a node at the given display position.
    pub fn add_node(&self, id: impl Into<String>, position: Position) -> Outcome<Graph> {
        let id = id.into();
        let res = if self.contains_node(&id) {
            Err(OpError::DuplicateIdentity(format!(
                "Node \"{}\" already exists.",
                id
            )))
        } else {
            let text = format!("Added node \"{}\".", id);
            let mut graph = self.clone();
            Rc::make_mut(&mut graph.nodes).push(GraphNode { id, position });
            Ok((graph, (), Message::success(text)))
        };
        Outcome::from_result(res, || (self.clone(), ()))
    }

    /// Adds a node at a random position inside `config`'s area.
    #[cfg(feature = "random-layout")]
    pub fn add_node_at_random<R: rand::Rng>(
        &self,
        id: impl Into<String>,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> Outcome<Graph> {
        self.add_node(id, layout::random_position(config, rng))
    }

    /// Removes a node and every edge touching it. The output is the number of removed edges.
    pub fn remove_node(&self, id: &str) -> Outcome<Graph, usize> {
        let res = if self.contains_node(id) {
            let mut graph = self.clone();
            Rc::make_mut(&mut graph.nodes).retain(|node| node.id != id);
            let before = graph.edges.len();
            Rc::make_mut(&mut graph.edges).retain(|edge| !edge.touches(id));
            let removed = before - graph.edges.len();
            let text = format!("Removed node \"{}\" and all connected edges.", id);
            Ok((graph, removed, Message::success(text)))
        } else {
            Err(missing_node(id))
        };
        Outcome::from_result(res, || (self.clone(), 0))
    }

    /// Adds an edge between two existing, distinct nodes.
    ///```
    /// use classic_structures::graph::{Graph, Position};
    /// use classic_structures::ErrorKind;
    ///
    /// let graph = Graph::new()
    ///     .add_node("A", Position::default()).state
    ///     .add_node("B", Position::default()).state;
    /// let graph = graph.add_edge("A", "B", false).state;
    ///
    /// let outcome = graph.add_edge("B", "A", false);
    /// assert_eq!(outcome.error(), Some(ErrorKind::DuplicateIdentity));
    /// assert_eq!(outcome.message.text, "This edge already exists.");
    ///```
    pub fn add_edge(&self, source: &str, target: &str, directed: bool) -> Outcome<Graph> {
        Outcome::from_result(self.try_add_edge(source, target, directed), || {
            (self.clone(), ())
        })
    }

    fn try_add_edge(
        &self,
        source: &str,
        target: &str,
        directed: bool,
    ) -> Result<(Graph, (), Message), OpError> {
        if source == target {
            return Err(OpError::InvalidOperationForState(
                "Self-loops are not supported.".to_string(),
            ));
        }
        for id in [source, target] {
            if !self.contains_node(id) {
                return Err(missing_node(id));
            }
        }
        // a new directed edge only conflicts with the same ordered pair,
        // a new undirected edge with either ordering.
        let exists = self.edges.iter().any(|edge| {
            (edge.source == source && edge.target == target)
                || (!directed && edge.source == target && edge.target == source)
        });
        if exists {
            return Err(OpError::DuplicateIdentity(
                "This edge already exists.".to_string(),
            ));
        }

        let mut graph = self.clone();
        Rc::make_mut(&mut graph.edges).push(Edge {
            source: source.to_string(),
            target: target.to_string(),
            directed,
        });
        let text = format!(
            "Added {} edge from \"{}\" to \"{}\".",
            if directed { "directed" } else { "undirected" },
            source,
            target
        );
        Ok((graph, (), Message::success(text)))
    }

    /// Removes the first edge that is stored as `source -> target`, or that is undirected
    /// and stored as `target - source`. The output is the removed edge.
    pub fn remove_edge(&self, source: &str, target: &str) -> Outcome<Graph, Option<Edge>> {
        let res = match self.edges.iter().position(|edge| edge.connects(source, target)) {
            Some(ix) => {
                let mut graph = self.clone();
                let removed = Rc::make_mut(&mut graph.edges).remove(ix);
                let text = format!("Removed edge between \"{}\" and \"{}\".", source, target);
                Ok((graph, Some(removed), Message::success(text)))
            }
            None => Err(OpError::NotFound("This edge does not exist.".to_string())),
        };
        Outcome::from_result(res, || (self.clone(), None))
    }

    pub fn reset(&self) -> Outcome<Graph> {
        Outcome::new(Graph::new(), (), Message::warning("Graph has been reset."))
    }
}

fn missing_node(id: &str) -> OpError {
    OpError::NotFound(format!("Node \"{}\" does not exist.", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn graph_of(ids: &[&str]) -> Graph {
        ids.iter().fold(Graph::new(), |graph, id| {
            graph.add_node(*id, Position::default()).state
        })
    }

    #[test]
    fn duplicate_node() {
        let graph = graph_of(&["A"]);
        let outcome = graph.add_node("A", Position::new(1., 1.));
        assert_eq!(outcome.error(), Some(ErrorKind::DuplicateIdentity));
        assert_eq!(outcome.message.text, "Node \"A\" already exists.");
        assert_eq!(outcome.state.nodes().len(), 1);
    }

    #[test]
    fn edge_rules() {
        let graph = graph_of(&["A", "B"]);

        let outcome = graph.add_edge("A", "A", true);
        assert_eq!(outcome.error(), Some(ErrorKind::InvalidOperationForState));

        let outcome = graph.add_edge("A", "C", true);
        assert_eq!(outcome.error(), Some(ErrorKind::NotFound));
        assert_eq!(outcome.message.text, "Node \"C\" does not exist.");

        let outcome = graph.add_edge("A", "B", true);
        assert_eq!(outcome.message.text, "Added directed edge from \"A\" to \"B\".");
        let directed = outcome.state;
        // the reversed directed edge is a different connection
        let both = directed.add_edge("B", "A", true);
        assert!(both.is_ok());
        assert_eq!(both.state.edges().len(), 2);
        // but an undirected edge conflicts with either direction
        let outcome = directed.add_edge("B", "A", false);
        assert_eq!(outcome.error(), Some(ErrorKind::DuplicateIdentity));
        assert_eq!(outcome.state, directed);
    }

    #[test]
    fn remove_edge_respects_direction() {
        let graph = graph_of(&["A", "B", "C"]);
        let graph = graph.add_edge("A", "B", true).state;
        let graph = graph.add_edge("B", "C", false).state;

        // directed edges are only found in their own direction
        let outcome = graph.remove_edge("B", "A");
        assert_eq!(outcome.error(), Some(ErrorKind::NotFound));
        assert_eq!(outcome.message.text, "This edge does not exist.");

        // undirected edges are found both ways
        let outcome = graph.remove_edge("C", "B");
        assert_eq!(outcome.message.text, "Removed edge between \"C\" and \"B\".");
        assert_eq!(
            outcome.output,
            Some(Edge {
                source: "B".into(),
                target: "C".into(),
                directed: false
            })
        );
        assert_eq!(outcome.state.edges().len(), 1);
        assert_eq!(graph.edges().len(), 2);
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let graph = graph_of(&["A", "B", "C", "D"]);
        let graph = graph.add_edge("A", "B", true).state;
        let graph = graph.add_edge("C", "A", false).state;
        let graph = graph.add_edge("C", "D", true).state;
        assert_eq!(graph.degree("A"), 2);

        let outcome = graph.remove_node("A");
        assert_eq!(outcome.output, 2);
        assert_eq!(
            outcome.message.text,
            "Removed node \"A\" and all connected edges."
        );
        let removed = outcome.state;
        assert!(!removed.contains_node("A"));
        assert_eq!(removed.edges().len(), 1);
        assert!(removed.edges().iter().all(|edge| !edge.touches("A")));

        let outcome = removed.remove_node("A");
        assert_eq!(outcome.error(), Some(ErrorKind::NotFound));
    }

    #[test]
    fn neighbors_follow_direction() {
        let graph = graph_of(&["A", "B", "C"]);
        let graph = graph.add_edge("A", "B", true).state;
        let graph = graph.add_edge("C", "A", false).state;
        assert_eq!(graph.neighbors("A").collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(graph.neighbors("B").count(), 0);
        assert_eq!(graph.neighbors("C").collect::<Vec<_>>(), vec!["A"]);
    }

    #[cfg(feature = "random-layout")]
    #[test]
    fn random_node_inside_layout() {
        let config = LayoutConfig::default();
        let outcome = Graph::new().add_node_at_random("A", &config, &mut rand::thread_rng());
        let position = outcome.state.node("A").map(|node| node.position);
        assert!(position.map_or(false, |p| config.contains(p)));
    }
}
