//! Cash-flow graph support for the Sankey view.
//!
//! The Sankey geometry itself (node/link positioning, path routing) is owned
//! by an external layout collaborator. This module covers what the system
//! owns: deriving the node list from the edge list, validating that the graph
//! is acyclic, computing per-node throughput, and building the tooltip text
//! shown on hover.

use num_format::{Locale, ToFormattedString};

use crate::models::{DataError, FlowEdge};

/// One category in the cash-flow graph.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub name: String,
    /// Money passing through the node: max(total inflow, total outflow),
    /// which is the value a Sankey layout assigns to it.
    pub throughput: f64,
}

/// One edge, with endpoints resolved to node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

/// The derived cash-flow graph.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl FlowGraph {
    /// Build the graph from the raw edge list.
    ///
    /// Nodes appear in first-appearance order (each edge's `from` before its
    /// `to`), matching the order a viewer sees them in. Self-loops and cycles
    /// are rejected: the layout assumes a directed acyclic graph.
    pub fn from_edges(edges: &[FlowEdge]) -> Result<Self, DataError> {
        fn index_of(name: &str, names: &mut Vec<String>) -> usize {
            match names.iter().position(|n| n == name) {
                Some(i) => i,
                None => {
                    names.push(name.to_string());
                    names.len() - 1
                }
            }
        }

        let mut names: Vec<String> = Vec::new();
        let mut links = Vec::with_capacity(edges.len());
        for edge in edges {
            let source = index_of(&edge.from, &mut names);
            let target = index_of(&edge.to, &mut names);
            if source == target {
                return Err(DataError::CyclicFlow(edge.from.clone()));
            }
            links.push(FlowLink {
                source,
                target,
                value: edge.value,
            });
        }

        let mut inflow = vec![0.0f64; names.len()];
        let mut outflow = vec![0.0f64; names.len()];
        for link in &links {
            outflow[link.source] += link.value;
            inflow[link.target] += link.value;
        }

        let graph = FlowGraph {
            nodes: names
                .into_iter()
                .zip(inflow.iter().zip(&outflow))
                .map(|(name, (fin, fout))| FlowNode {
                    name,
                    throughput: fin.max(*fout),
                })
                .collect(),
            links,
        };
        graph.check_acyclic()?;
        Ok(graph)
    }

    /// Kahn-style topological pass; any leftover node sits on a cycle.
    fn check_acyclic(&self) -> Result<(), DataError> {
        let mut indegree = vec![0usize; self.nodes.len()];
        for link in &self.links {
            indegree[link.target] += 1;
        }
        let mut queue: Vec<usize> = indegree
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == 0)
            .map(|(i, _)| i)
            .collect();
        let mut seen = 0usize;
        while let Some(node) = queue.pop() {
            seen += 1;
            for link in self.links.iter().filter(|l| l.source == node) {
                indegree[link.target] -= 1;
                if indegree[link.target] == 0 {
                    queue.push(link.target);
                }
            }
        }
        if seen != self.nodes.len() {
            let stuck = indegree
                .iter()
                .position(|d| *d > 0)
                .map(|i| self.nodes[i].name.clone())
                .unwrap_or_default();
            return Err(DataError::CyclicFlow(stuck));
        }
        Ok(())
    }

    /// Tooltip text for a hovered node.
    pub fn node_tooltip(&self, node: usize) -> String {
        let n = &self.nodes[node];
        format!("{}\n{}", n.name, format_usd(n.throughput))
    }

    /// Tooltip text for a hovered link.
    pub fn link_tooltip(&self, link: usize) -> String {
        let l = &self.links[link];
        format!(
            "{} → {}\n{}",
            self.nodes[l.source].name,
            self.nodes[l.target].name,
            format_usd(l.value)
        )
    }
}

/// Grouped dollar amount, e.g. `$12,500`. Cents are shown only when present.
pub fn format_usd(value: f64) -> String {
    let cents = (value.fract().abs() * 100.0).round() as u64;
    if cents == 0 || cents >= 100 {
        let whole = value.round() as i64;
        format!("${}", whole.to_formatted_string(&Locale::en))
    } else {
        let whole = value.trunc() as i64;
        format!("${}.{cents:02}", whole.to_formatted_string(&Locale::en))
    }
}
