use aoa_network::{
    ActivityRecord, AoaGraph, NetworkConfig, ProjectNetwork, build_aoa_graph,
};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};

// Acyclic by construction: activity N may only depend on activities 0..N-1.
// The records are optionally reversed so resolution cannot follow input order.
fn network_strategy(max_activities: usize) -> impl Strategy<Value = Vec<ActivityRecord>> {
    (1..=max_activities).prop_flat_map(|count| {
        (
            proptest::collection::vec(proptest::collection::vec(any::<usize>(), 0..4), count),
            proptest::collection::vec(0..20i64, count),
            any::<bool>(),
        )
            .prop_map(move |(raw_deps, durations, reverse)| {
                let mut records: Vec<ActivityRecord> = raw_deps
                    .into_iter()
                    .zip(durations)
                    .enumerate()
                    .map(|(i, (deps, duration))| {
                        let preds: BTreeSet<usize> = if i == 0 {
                            BTreeSet::new()
                        } else {
                            deps.into_iter().map(|d| d % i).collect()
                        };
                        let spec = if preds.is_empty() {
                            "-".to_string()
                        } else {
                            preds
                                .iter()
                                .map(|p| format!("t{p}"))
                                .collect::<Vec<_>>()
                                .join(",")
                        };
                        ActivityRecord::new(format!("t{i}"), spec, duration)
                    })
                    .collect();
                if reverse {
                    records.reverse();
                }
                records
            })
    })
}

fn predecessors(records: &[ActivityRecord]) -> HashMap<String, Vec<String>> {
    records
        .iter()
        .map(|r| {
            let preds = if r.predecessors == "-" {
                Vec::new()
            } else {
                r.predecessors.split(',').map(String::from).collect()
            };
            (r.name.clone(), preds)
        })
        .collect()
}

fn transitive_predecessors(
    name: &str,
    preds: &HashMap<String, Vec<String>>,
) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut stack: Vec<&str> = vec![name];
    while let Some(current) = stack.pop() {
        for pred in &preds[current] {
            if seen.insert(pred.clone()) {
                stack.push(pred);
            }
        }
    }
    seen
}

/// Real activities that must be finished before each event is reached.
fn completed_before(graph: &AoaGraph) -> HashMap<usize, BTreeSet<String>> {
    let mut done: HashMap<usize, BTreeSet<String>> =
        graph.nodes.iter().map(|&n| (n, BTreeSet::new())).collect();
    loop {
        let mut changed = false;
        for edge in &graph.edges {
            let mut arriving = done[&edge.from].clone();
            if !edge.is_dummy {
                arriving.insert(edge.label.clone());
            }
            let target = done.get_mut(&edge.to).unwrap();
            for name in arriving {
                changed |= target.insert(name);
            }
        }
        if !changed {
            return done;
        }
    }
}

fn dummy_target(label: &str) -> Option<&str> {
    label
        .strip_prefix("Dummy(")?
        .strip_suffix(')')?
        .split_once("->")
        .map(|(_, activity)| activity)
}

proptest! {
    #[test]
    fn graph_structure_holds(records in network_strategy(12)) {
        let graph = build_aoa_graph(&records, &NetworkConfig::default()).unwrap();
        let preds = predecessors(&records);

        // Dense numbering.
        prop_assert_eq!(&graph.nodes, &(1..=graph.nodes.len()).collect::<Vec<_>>());
        let referenced: BTreeSet<usize> =
            graph.edges.iter().flat_map(|e| [e.from, e.to]).collect();
        prop_assert_eq!(referenced.len(), graph.nodes.len());

        // One real edge per activity.
        prop_assert_eq!(graph.real_edges().count(), records.len());
        for record in &records {
            prop_assert!(graph.edge_for(&record.name).is_some());
        }

        // Final activities share the terminal node.
        let has_successor: HashSet<&String> = preds.values().flatten().collect();
        for record in records.iter().filter(|r| !has_successor.contains(&r.name)) {
            prop_assert_eq!(graph.edge_for(&record.name).unwrap().to, graph.terminal_node().unwrap());
        }

        // Dummies only serve activities with at least two predecessors.
        for label in &graph.dummy_activity_labels {
            let target = dummy_target(label).unwrap();
            prop_assert!(preds[target].len() >= 2, "{} -> {}", label, target);
        }

        // d distinct predecessor ends induce 0, d - 1 or d dummies; d == 1 induces none.
        for record in &records {
            let ends: BTreeSet<usize> = preds[&record.name]
                .iter()
                .map(|p| graph.edge_for(p).unwrap().to)
                .collect();
            let dummies = graph
                .dummy_activity_labels
                .iter()
                .filter(|label| dummy_target(label) == Some(record.name.as_str()))
                .count();
            if ends.len() <= 1 {
                prop_assert_eq!(dummies, 0);
            } else {
                prop_assert!(dummies == 0 || dummies == ends.len() - 1 || dummies == ends.len());
            }
        }

        // Stable presentation order.
        for pair in graph.edges.windows(2) {
            prop_assert!((pair[0].from, pair[0].to) <= (pair[1].from, pair[1].to));
        }
    }

    #[test]
    fn diagram_encodes_exactly_the_precedence_relation(
        records in network_strategy(12),
        split in any::<bool>(),
    ) {
        let config = NetworkConfig::default().with_split_parallel_activities(split);
        let graph = build_aoa_graph(&records, &config).unwrap();
        let preds = predecessors(&records);
        let done = completed_before(&graph);

        for record in &records {
            let start = graph.edge_for(&record.name).unwrap().from;
            prop_assert_eq!(
                &done[&start],
                &transitive_predecessors(&record.name, &preds),
                "activity {}", &record.name
            );
        }

        if split {
            let pairs: Vec<(usize, usize)> = graph.real_edges().map(|e| (e.from, e.to)).collect();
            let unique: HashSet<&(usize, usize)> = pairs.iter().collect();
            prop_assert_eq!(unique.len(), pairs.len());
        }
    }

    #[test]
    fn schedule_and_paths_agree(records in network_strategy(10)) {
        let network = ProjectNetwork::from_records(&records, NetworkConfig::default()).unwrap();
        let analysis = network.analyze().unwrap();
        let schedule = &analysis.schedule;

        let max_ef = schedule.activities.iter().map(|t| t.early_finish).max().unwrap_or(0);
        prop_assert_eq!(schedule.project_duration, max_ef);

        for times in &schedule.activities {
            prop_assert_eq!(times.late_start - times.early_start, times.slack);
            prop_assert_eq!(times.late_finish - times.early_finish, times.slack);
            prop_assert!(times.slack >= 0);
        }

        // The critical chain runs from a start activity to a final one.
        let preds = predecessors(&records);
        let chain = schedule.critical_path();
        prop_assert!(!chain.is_empty());
        prop_assert!(preds[chain[0]].is_empty());
        let last = chain[chain.len() - 1];
        prop_assert!(preds.values().all(|p| !p.iter().any(|name| name == last)));
        for pair in chain.windows(2) {
            prop_assert!(preds[pair[1]].iter().any(|p| p == pair[0]));
        }

        prop_assert!(analysis.is_consistent());
        prop_assert_eq!(analysis.paths[0].duration, schedule.project_duration);
    }
}
