//! Unit tests for the breadth-first search driver.

#![expect(clippy::expect_used, reason = "test assertions")]

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, HashMap},
};

use rstest::{fixture, rstest};

use super::*;
use crate::{
    invariant::Invariant,
    model::fingerprint,
    report::InvariantReport,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Node(u32);

impl Variables for Node {
    fn state_hash(&self) -> u64 { fingerprint(&self.0) }
}

/// An explicit directed graph used as the model constants.
#[derive(Debug, Default)]
struct Graph {
    initial: Vec<u32>,
    edges: BTreeMap<u32, Vec<u32>>,
}

impl Graph {
    fn new(initial: &[u32], edges: &[(u32, u32)]) -> Self {
        let mut graph = Self {
            initial: initial.to_vec(),
            edges: BTreeMap::new(),
        };
        for &(from, to) in edges {
            graph.edges.entry(from).or_default().push(to);
        }
        graph
    }
}

fn roots(graph: &Graph) -> Vec<Node> { graph.initial.iter().copied().map(Node).collect() }

/// Follows the graph's edges and counts expansions per node.
#[derive(Default)]
struct Edges {
    expansions: RefCell<HashMap<u32, usize>>,
}

impl NextStateRelation<Graph, Node> for Edges {
    fn is_enabled(&self, graph: &Graph, current: &Node) -> bool { graph.edges.contains_key(&current.0) }

    fn next_states(&self, graph: &Graph, current: &Node) -> Vec<Node> {
        *self.expansions.borrow_mut().entry(current.0).or_default() += 1;
        graph
            .edges
            .get(&current.0)
            .map(|targets| targets.iter().copied().map(Node).collect())
            .unwrap_or_default()
    }
}

/// Invariant "the node is not `forbidden`" that counts its evaluations.
struct Avoid {
    forbidden: u32,
    checked: RefCell<Vec<u32>>,
}

impl Avoid {
    fn new(forbidden: u32) -> Self {
        Self {
            forbidden,
            checked: RefCell::new(Vec::new()),
        }
    }
}

impl SafetyInvariant<Graph, Node> for Avoid {
    fn name(&self) -> &str { "avoid" }

    fn is_safe(&self, _graph: &Graph, state: &Node) -> InvariantReport {
        self.checked.borrow_mut().push(state.0);
        InvariantReport::check(self.name(), state.0 != self.forbidden, || {
            format!("reached node {}", state.0)
        })
    }
}

/// 1 -> 2 -> 4, 1 -> 3 -> 4, 4 -> 5, 5 -> 1.
#[fixture]
fn diamond() -> Graph { Graph::new(&[1], &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5), (5, 1)]) }

#[rstest]
fn success_counts_edges_and_unique_states(diamond: Graph) {
    let edges = Edges::default();
    let report = check_model(&diamond, &roots, &edges, &[]).expect("search runs");

    assert!(report.is_success());
    assert_eq!(report.initial_state_count(), 1);
    assert_eq!(report.unique_state_count(), 5);
    // One initial state plus every edge traversed once.
    assert_eq!(report.total_state_count(), 1 + 6);
    assert!(report.unsafe_state().is_none());
}

#[rstest]
fn every_reachable_state_is_checked_once(diamond: Graph) {
    let edges = Edges::default();
    let avoid = Avoid::new(99);
    let report = check_model(&diamond, &roots, &edges, &[&avoid]).expect("search runs");

    assert!(report.is_success());
    let mut checked = avoid.checked.borrow().clone();
    checked.sort_unstable();
    assert_eq!(checked, vec![1, 2, 3, 4, 5]);
    assert!(edges.expansions.borrow().values().all(|&count| count == 1));
}

#[test]
fn counterexample_is_shortest_path() {
    // Long way round: 1 -> 2 -> 3 -> 4 -> 9; short cut: 1 -> 5 -> 9.
    let graph = Graph::new(&[1], &[(1, 2), (2, 3), (3, 4), (4, 9), (1, 5), (5, 9)]);
    let edges = Edges::default();
    let avoid = Avoid::new(9);
    let report = check_model(&graph, &roots, &edges, &[&avoid]).expect("search runs");

    assert!(!report.is_success());
    assert_eq!(report.execution_trace(), &[Node(1), Node(5), Node(9)]);
    assert_eq!(report.unsafe_state(), Some(&Node(9)));
    let [violation] = report.safety_invariants_violated() else {
        panic!("expected one violation");
    };
    assert_eq!(violation.description(), Some("reached node 9"));
}

#[test]
fn search_stops_at_first_violation() {
    // Breadth-first order is 1, 2, 3, 4, 5; node 3 fails.
    let graph = Graph::new(&[1], &[(1, 2), (1, 3), (2, 4), (3, 5)]);
    let edges = Edges::default();
    let avoid = Avoid::new(3);
    let report = check_model(&graph, &roots, &edges, &[&avoid]).expect("search runs");

    assert!(!report.is_success());
    assert_eq!(*avoid.checked.borrow(), vec![1, 2, 3]);
    assert!(!edges.expansions.borrow().contains_key(&3));
    assert_eq!(report.unique_state_count(), 4);
}

#[test]
fn initial_states_are_checked() {
    let graph = Graph::new(&[7, 8], &[(7, 1)]);
    let edges = Edges::default();
    let avoid = Avoid::new(8);
    let report = check_model(&graph, &roots, &edges, &[&avoid]).expect("search runs");

    assert_eq!(report.initial_state_count(), 2);
    assert_eq!(report.execution_trace(), &[Node(8)]);
    assert_eq!(
        report.counterexample().map(crate::report::Counterexample::transition_count),
        Some(0)
    );
}

#[test]
fn all_violated_invariants_are_reported() {
    let graph = Graph::new(&[1], &[(1, 2)]);
    let edges = Edges::default();
    let avoid = Avoid::new(2);
    let small = Invariant::new("small", |_: &Graph, node: &Node| {
        if node.0 < 2 {
            Ok(())
        } else {
            Err(format!("{} is too big", node.0))
        }
    });
    let report = check_model(&graph, &roots, &edges, &[&avoid, &small]).expect("search runs");

    let names: Vec<_> = report
        .safety_invariants_violated()
        .iter()
        .map(InvariantReport::invariant)
        .collect();
    assert_eq!(names, vec!["avoid", "small"]);
}

#[test]
fn empty_initial_set_succeeds_trivially() {
    let graph = Graph::new(&[], &[(1, 2)]);
    let edges = Edges::default();
    let report = check_model(&graph, &roots, &edges, &[]).expect("search runs");

    assert!(report.is_success());
    assert_eq!(report.stats(), crate::report::SearchStats::default());
}

#[test]
fn duplicate_initial_states_are_explored_once() {
    let graph = Graph::new(&[1, 1], &[(1, 2)]);
    let edges = Edges::default();
    let report = check_model(&graph, &roots, &edges, &[]).expect("search runs");

    assert_eq!(report.initial_state_count(), 2);
    assert_eq!(report.total_state_count(), 3);
    assert_eq!(report.unique_state_count(), 2);
    assert_eq!(edges.expansions.borrow().get(&1), Some(&1));
}

#[test]
fn colliding_hashes_merge_states() {
    #[derive(Debug)]
    struct Bucket(u32);

    impl Variables for Bucket {
        fn state_hash(&self) -> u64 { u64::from(self.0.div_euclid(10)) }
    }

    let init = |_: &()| vec![Bucket(0)];
    let next = crate::relation::Action::new(
        "spread",
        |_: &(), _: &Bucket| true,
        |_: &(), bucket: &Bucket| {
            if bucket.0 == 0 {
                vec![Bucket(11), Bucket(12), Bucket(21)]
            } else {
                Vec::new()
            }
        },
    );
    let report = check_model(&(), &init, &next, &[]).expect("search runs");

    // 11 and 12 share a hash, so only three states are distinct.
    assert_eq!(report.unique_state_count(), 3);
    assert_eq!(report.total_state_count(), 4);
}

#[rstest]
#[case(ModelCheck::new(), "constants")]
#[case(ModelCheck::new().constants(&GRAPH), "init")]
#[case(ModelCheck::new().constants(&GRAPH).initial_states(&roots), "next_state_relation")]
fn missing_arguments_are_rejected(
    #[case] builder: ModelCheck<'static, Graph, Node>,
    #[case] argument: &'static str,
) {
    assert_eq!(
        builder.check().map(|report| report.unique_state_count()),
        Err(CheckError::MissingArgument(argument))
    );
}

static GRAPH: Graph = Graph {
    initial: Vec::new(),
    edges: BTreeMap::new(),
};

#[rstest]
fn state_limit_aborts_search(diamond: Graph) {
    let edges = Edges::default();
    let outcome = ModelCheck::new()
        .constants(&diamond)
        .initial_states(&roots)
        .next_state_relation(&edges)
        .limits(SearchLimits::with_max_unique_states(2))
        .check()
        .map(|report| report.unique_state_count());

    assert_eq!(
        outcome,
        Err(CheckError::StateLimitExceeded {
            limit: 2,
            explored: 3
        })
    );
}

#[rstest]
fn generous_limit_does_not_interfere(diamond: Graph) {
    let edges = Edges::default();
    let report = ModelCheck::new()
        .constants(&diamond)
        .initial_states(&roots)
        .next_state_relation(&edges)
        .limits(SearchLimits::with_max_unique_states(5))
        .check()
        .expect("search runs");

    assert!(report.is_success());
    assert_eq!(report.unique_state_count(), 5);
}

#[test]
fn nondeterministic_relation_fails_replay() {
    /// Emits a fresh successor numbering on every call.
    struct Drift {
        calls: Cell<u32>,
    }

    impl NextStateRelation<(), Node> for Drift {
        fn is_enabled(&self, _constants: &(), _current: &Node) -> bool { true }

        fn next_states(&self, _constants: &(), current: &Node) -> Vec<Node> {
            let calls = self.calls.get() + 1;
            self.calls.set(calls);
            if current.0 == 0 {
                vec![Node(calls * 100)]
            } else {
                Vec::new()
            }
        }
    }

    let init = |_: &()| vec![Node(0)];
    let drift = Drift {
        calls: Cell::new(0),
    };
    let never_nonzero = Invariant::new("zero", |_: &(), node: &Node| {
        if node.0 == 0 {
            Ok(())
        } else {
            Err(format!("node {}", node.0))
        }
    });
    let outcome = ModelCheck::new()
        .constants(&())
        .initial_states(&init)
        .next_state_relation(&drift)
        .invariant(&never_nonzero)
        .check()
        .map(|report| report.unique_state_count());

    assert_eq!(
        outcome,
        Err(CheckError::TraceReplayDiverged {
            depth: 1,
            hash: fingerprint(&100_u32)
        })
    );
}
