//! User-flow graphs attached to business templates.
//!
//! A flow describes the journey a template supports (screens, actions,
//! decision points) as a directed graph. It is descriptive collaborator
//! data: the builder reads it to show a flow diagram, nothing in the
//! interaction engine depends on it.

use crate::error::ModelError;
use crate::model::Point;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Nodes ───────────────────────────────────────────────────────────────

/// What a flow step represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStepKind {
    Screen,
    Action,
    Decision,
}

/// One step in a user flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    pub kind: FlowStepKind,
    pub label: String,
    /// Diagram position — viewer layout hint, not canvas geometry.
    pub position: Point,
}

// ─── Links ───────────────────────────────────────────────────────────────

/// Arrow head placement on a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowKind {
    None,
    Start,
    #[default]
    End,
    Both,
}

/// How the link path is drawn between two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    #[default]
    Straight,
    Smooth,
    Step,
}

/// A directed connection between two flow steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLink {
    pub label: Option<String>,
    #[serde(default)]
    pub curve: CurveKind,
    #[serde(default)]
    pub arrow: ArrowKind,
    #[serde(default)]
    pub animated: bool,
}

impl Default for FlowLink {
    fn default() -> Self {
        Self {
            label: None,
            curve: CurveKind::default(),
            arrow: ArrowKind::default(),
            animated: false,
        }
    }
}

// ─── Declarative form ────────────────────────────────────────────────────

/// The serialized shape of a flow: flat node and edge lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSpec {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdgeSpec>,
}

/// One edge in the declarative list, referencing nodes by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowEdgeSpec {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub link: FlowLink,
}

// ─── Graph ───────────────────────────────────────────────────────────────

/// A validated user flow, backed by a directed graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FlowSpec", into = "FlowSpec")]
pub struct UserFlow {
    graph: StableDiGraph<FlowNode, FlowLink>,
    /// Index from step id → graph index for fast lookup.
    id_index: HashMap<String, NodeIndex>,
    /// Edge ids in declarative order, kept for round-tripping.
    edge_ids: Vec<String>,
}

impl UserFlow {
    /// Build a flow from declarative lists. Every edge endpoint must name
    /// a declared node.
    pub fn from_spec(spec: FlowSpec) -> Result<Self, ModelError> {
        let mut graph = StableDiGraph::new();
        let mut id_index = HashMap::new();

        for node in spec.nodes {
            let id = node.id.clone();
            let idx = graph.add_node(node);
            id_index.insert(id, idx);
        }

        let mut edge_ids = Vec::with_capacity(spec.edges.len());
        for edge in spec.edges {
            let lookup = |endpoint: &str| {
                id_index
                    .get(endpoint)
                    .copied()
                    .ok_or_else(|| ModelError::DanglingFlowLink {
                        link: edge.id.clone(),
                        endpoint: endpoint.to_string(),
                    })
            };
            let source = lookup(&edge.source)?;
            let target = lookup(&edge.target)?;
            graph.add_edge(source, target, edge.link);
            edge_ids.push(edge.id);
        }

        Ok(Self {
            graph,
            id_index,
            edge_ids,
        })
    }

    pub fn step_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up a step by its id.
    pub fn get(&self, id: &str) -> Option<&FlowNode> {
        self.id_index.get(id).map(|idx| &self.graph[*idx])
    }

    /// Steps reachable in one hop from `id`, in insertion order.
    pub fn successors(&self, id: &str) -> Vec<&FlowNode> {
        let Some(&idx) = self.id_index.get(id) else {
            return Vec::new();
        };
        let mut out: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .collect();
        out.sort();
        out.into_iter().map(|i| &self.graph[i]).collect()
    }

    /// All steps of a given kind, in insertion order.
    pub fn steps_of_kind(&self, kind: FlowStepKind) -> Vec<&FlowNode> {
        let mut indices: Vec<NodeIndex> = self.graph.node_indices().collect();
        indices.sort();
        indices
            .into_iter()
            .map(|i| &self.graph[i])
            .filter(|n| n.kind == kind)
            .collect()
    }
}

impl TryFrom<FlowSpec> for UserFlow {
    type Error = ModelError;

    fn try_from(spec: FlowSpec) -> Result<Self, Self::Error> {
        Self::from_spec(spec)
    }
}

impl From<UserFlow> for FlowSpec {
    fn from(flow: UserFlow) -> Self {
        let mut indices: Vec<NodeIndex> = flow.graph.node_indices().collect();
        indices.sort();
        let nodes = indices.iter().map(|&i| flow.graph[i].clone()).collect();

        let mut edge_indices: Vec<_> = flow.graph.edge_indices().collect();
        edge_indices.sort();
        let edges = edge_indices
            .into_iter()
            .enumerate()
            .filter_map(|(n, e)| {
                let (source, target) = flow.graph.edge_endpoints(e)?;
                Some(FlowEdgeSpec {
                    id: flow
                        .edge_ids
                        .get(n)
                        .cloned()
                        .unwrap_or_else(|| format!("e{n}")),
                    source: flow.graph[source].id.clone(),
                    target: flow.graph[target].id.clone(),
                    link: flow.graph[e].clone(),
                })
            })
            .collect();

        FlowSpec { nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_flow_spec() -> FlowSpec {
        FlowSpec {
            nodes: vec![
                FlowNode {
                    id: "login".into(),
                    kind: FlowStepKind::Screen,
                    label: "Login".into(),
                    position: Point::new(0.0, 0.0),
                },
                FlowNode {
                    id: "submit".into(),
                    kind: FlowStepKind::Action,
                    label: "Submit credentials".into(),
                    position: Point::new(0.0, 120.0),
                },
                FlowNode {
                    id: "home".into(),
                    kind: FlowStepKind::Screen,
                    label: "Home".into(),
                    position: Point::new(0.0, 240.0),
                },
            ],
            edges: vec![
                FlowEdgeSpec {
                    id: "e1".into(),
                    source: "login".into(),
                    target: "submit".into(),
                    link: FlowLink::default(),
                },
                FlowEdgeSpec {
                    id: "e2".into(),
                    source: "submit".into(),
                    target: "home".into(),
                    link: FlowLink {
                        label: Some("success".into()),
                        curve: CurveKind::Smooth,
                        arrow: ArrowKind::End,
                        animated: true,
                    },
                },
            ],
        }
    }

    #[test]
    fn builds_and_indexes_steps() {
        let flow = UserFlow::from_spec(login_flow_spec()).unwrap();
        assert_eq!(flow.step_count(), 3);
        assert_eq!(flow.link_count(), 2);
        assert_eq!(flow.get("submit").unwrap().kind, FlowStepKind::Action);
    }

    #[test]
    fn successors_follow_link_direction() {
        let flow = UserFlow::from_spec(login_flow_spec()).unwrap();
        let next: Vec<&str> = flow
            .successors("login")
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(next, vec!["submit"]);
        assert!(flow.successors("home").is_empty());
    }

    #[test]
    fn dangling_endpoint_is_rejected() {
        let mut spec = login_flow_spec();
        spec.edges.push(FlowEdgeSpec {
            id: "bad".into(),
            source: "home".into(),
            target: "nowhere".into(),
            link: FlowLink::default(),
        });
        let err = UserFlow::from_spec(spec).unwrap_err();
        assert!(matches!(
            err,
            ModelError::DanglingFlowLink { link, endpoint }
                if link == "bad" && endpoint == "nowhere"
        ));
    }

    #[test]
    fn serde_roundtrip_preserves_structure() {
        let flow = UserFlow::from_spec(login_flow_spec()).unwrap();
        let json = serde_json::to_string(&flow).unwrap();
        let back: UserFlow = serde_json::from_str(&json).unwrap();
        assert_eq!(back.step_count(), 3);
        assert_eq!(back.link_count(), 2);
        let next: Vec<&str> = back
            .successors("submit")
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(next, vec!["home"]);
    }
}
