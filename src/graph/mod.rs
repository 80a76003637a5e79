//! Read-only graph view of a configuration, for visualization tools.
//!
//! A [`Graph`] is a plain snapshot of the state/transition table: every
//! declared state and one edge per permit. It can be serialized with serde
//! or rendered as Graphviz DOT.

use crate::builder::Config;
use crate::core::{State, Trigger};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A labelled edge `from --trigger--> to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<S, T> {
    pub from: S,
    pub trigger: T,
    pub to: S,
}

/// Snapshot of a configuration's states and transitions.
///
/// States are listed in order, edges by source state then trigger.
///
/// # Example
///
/// ```rust
/// use statum::builder::{with_permit, Config};
///
/// let config: Config<&str, &str> = Config::new()
///     .add_state("opened", [with_permit("close", "closed")])
///     .add_state("closed", [with_permit("open", "opened")]);
///
/// let graph = config.graph();
/// assert_eq!(graph.states, vec!["closed", "opened"]);
/// assert_eq!(graph.edges.len(), 2);
///
/// let dot = graph.to_dot("door");
/// assert!(dot.contains("\"opened\" -> \"closed\" [label=\"close\"];"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph<S, T> {
    pub states: Vec<S>,
    pub edges: Vec<Edge<S, T>>,
}

impl<S: State, T: Trigger> Graph<S, T> {
    /// Build a snapshot of `config`.
    pub fn from_config<C>(config: &Config<S, T, C>) -> Self {
        let states: Vec<S> = config.states().cloned().collect();
        let edges = states
            .iter()
            .flat_map(|from| {
                config.transitions(from).map(move |(trigger, to)| Edge {
                    from: from.clone(),
                    trigger: trigger.clone(),
                    to: to.clone(),
                })
            })
            .collect();

        Graph { states, edges }
    }

    /// Edges leaving `state`.
    pub fn edges_from<'a>(
        &'a self,
        state: &'a S,
    ) -> impl Iterator<Item = &'a Edge<S, T>> + 'a {
        self.edges.iter().filter(move |edge| &edge.from == state)
    }
}

impl<S: Display, T: Display> Graph<S, T> {
    /// Graphviz view of this graph as a `digraph` named `name`.
    pub fn dot<'a>(&'a self, name: &'a str) -> Dot<'a, S, T> {
        Dot { graph: self, name }
    }

    /// Render as a Graphviz `digraph` named `name`.
    pub fn to_dot(&self, name: &str) -> String {
        self.dot(name).to_string()
    }
}

/// [`Display`] adapter writing a [`Graph`] in Graphviz DOT syntax.
pub struct Dot<'a, S, T> {
    graph: &'a Graph<S, T>,
    name: &'a str,
}

impl<S: Display, T: Display> Display for Dot<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph \"{}\" {{", escape(&self.name))?;
        for state in &self.graph.states {
            writeln!(f, "    \"{}\";", escape(state))?;
        }
        for edge in &self.graph.edges {
            writeln!(
                f,
                "    \"{}\" -> \"{}\" [label=\"{}\"];",
                escape(&edge.from),
                escape(&edge.to),
                escape(&edge.trigger)
            )?;
        }
        f.write_str("}\n")
    }
}

impl<S: Serialize, T: Serialize> Graph<S, T> {
    /// Serialize the graph as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn escape(value: &impl Display) -> String {
    value.to_string().replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::with_permit;
    use crate::fsm_enum;

    fsm_enum! {
        enum Phase {
            Solid,
            Liquid,
            Gas,
        }
    }

    fsm_enum! {
        enum Action {
            Melt,
            Freeze,
            Vaporize,
            Condense,
        }
    }

    fn matter() -> Config<Phase, Action> {
        Config::new()
            .add_state(
                Phase::Liquid,
                [
                    with_permit(Action::Freeze, Phase::Solid),
                    with_permit(Action::Vaporize, Phase::Gas),
                ],
            )
            .add_state(Phase::Gas, [with_permit(Action::Condense, Phase::Liquid)])
            .add_state(Phase::Solid, [with_permit(Action::Melt, Phase::Liquid)])
    }

    #[test]
    fn graph_lists_states_and_edges_in_order() {
        let graph = matter().graph();

        assert_eq!(graph.states, vec![Phase::Solid, Phase::Liquid, Phase::Gas]);
        assert_eq!(
            graph.edges,
            vec![
                Edge {
                    from: Phase::Solid,
                    trigger: Action::Melt,
                    to: Phase::Liquid
                },
                Edge {
                    from: Phase::Liquid,
                    trigger: Action::Freeze,
                    to: Phase::Solid
                },
                Edge {
                    from: Phase::Liquid,
                    trigger: Action::Vaporize,
                    to: Phase::Gas
                },
                Edge {
                    from: Phase::Gas,
                    trigger: Action::Condense,
                    to: Phase::Liquid
                },
            ]
        );
    }

    #[test]
    fn graph_includes_implicit_targets() {
        let config: Config<&str, &str> =
            Config::new().add_state("gas", [with_permit("ionize", "plasma")]);

        let graph = config.graph();
        assert_eq!(graph.states, vec!["gas", "plasma"]);
        assert_eq!(graph.edges_from(&"plasma").count(), 0);
        assert_eq!(graph.edges_from(&"gas").count(), 1);
    }

    #[test]
    fn dot_output_has_nodes_and_labelled_edges() {
        let dot = matter().graph().to_dot("matter");

        assert!(dot.starts_with("digraph \"matter\" {\n"));
        assert!(dot.contains("    \"Gas\";\n"));
        assert!(dot.contains("    \"Liquid\" -> \"Gas\" [label=\"Vaporize\"];\n"));
        assert!(dot.ends_with("}\n"));
        assert_eq!(dot.matches("->").count(), 4);
    }

    #[test]
    fn dot_output_escapes_quotes() {
        let config: Config<&str, &str> =
            Config::new().add_state("say \"hi\"", [with_permit("wave", "done")]);

        let dot = config.graph().to_dot("greeting");
        assert!(dot.contains("\"say \\\"hi\\\"\" -> \"done\""));
    }

    #[test]
    fn dot_adapter_writes_into_any_formatter() {
        use std::fmt::Write;

        let graph = matter().graph();

        let rendered = format!("{}", graph.dot("matter"));
        assert_eq!(rendered, graph.to_dot("matter"));

        let mut out = String::from("// generated\n");
        write!(out, "{}", graph.dot("matter")).unwrap();
        assert!(out.starts_with("// generated\ndigraph \"matter\" {\n"));
    }

    #[test]
    fn empty_config_renders_empty_digraph() {
        let config: Config<&str, &str> = Config::new();
        assert_eq!(config.graph().to_dot("empty"), "digraph \"empty\" {\n}\n");
    }

    #[test]
    fn graph_serializes_correctly() {
        let graph = matter().graph();

        let json = graph.to_json().unwrap();
        let deserialized: Graph<Phase, Action> = serde_json::from_str(&json).unwrap();

        assert_eq!(graph, deserialized);
        assert!(json.contains("\"Vaporize\""));
    }
}
