use super::{AoaEdge, AoaGraph};
use crate::activity::{ActivityRecord, ActivityTable};
use crate::config::NetworkConfig;
use crate::error::{NetworkError, NetworkResult};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Provisional event identity used while the diagram is assembled.
///
/// The derived ordering puts the project start first and the shared terminal
/// event last, with every other event in allocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum EventKey {
    Start,
    Event(u32),
    Terminal,
}

#[derive(Debug, Clone)]
struct PendingEdge {
    from: EventKey,
    to: EventKey,
    label: String,
    duration: i64,
    is_dummy: bool,
}

impl PendingEdge {
    fn real(from: EventKey, to: EventKey, label: &str, duration: i64) -> Self {
        Self {
            from,
            to,
            label: label.to_string(),
            duration,
            is_dummy: false,
        }
    }

    fn dummy(from: EventKey, to: EventKey, label: String) -> Self {
        Self {
            from,
            to,
            label,
            duration: 0,
            is_dummy: true,
        }
    }
}

pub fn build_aoa_graph(
    records: &[ActivityRecord],
    config: &NetworkConfig,
) -> NetworkResult<AoaGraph> {
    let table = ActivityTable::from_records(records, config)?;
    AoaBuilder::new(&table, config).build()
}

pub struct AoaBuilder<'a> {
    table: &'a ActivityTable,
    config: &'a NetworkConfig,
}

impl<'a> AoaBuilder<'a> {
    pub fn new(table: &'a ActivityTable, config: &'a NetworkConfig) -> Self {
        Self { table, config }
    }

    pub fn build(&self) -> NetworkResult<AoaGraph> {
        // Step 1: Resolve activities wave by wave
        let order = self.resolution_order()?;

        // Step 2: Lay out events and arrows
        let mut construction = Construction::new(self.table, self.config);
        for idx in order {
            construction.place(idx);
        }

        // Step 3: Dense numbering and stable edge order
        Ok(Self::renumber(construction.edges))
    }

    /// Topological order grouped in waves: a wave holds every activity whose
    /// predecessors all belong to earlier waves, in input order.
    fn resolution_order(&self) -> NetworkResult<Vec<usize>> {
        let count = self.table.len();
        let mut pending: Vec<usize> = (0..count)
            .map(|idx| self.table.predecessors_of(idx).len())
            .collect();
        let mut order = Vec::with_capacity(count);
        let mut wave: Vec<usize> = (0..count).filter(|&idx| pending[idx] == 0).collect();

        while !wave.is_empty() {
            let mut next = Vec::new();
            for &idx in &wave {
                for &succ in self.table.successors_of(idx) {
                    pending[succ] -= 1;
                    if pending[succ] == 0 {
                        next.push(succ);
                    }
                }
            }
            next.sort_unstable();
            order.append(&mut wave);
            wave = next;
        }

        if order.len() < count {
            let resolved: HashSet<usize> = order.iter().copied().collect();
            let unresolved = (0..count)
                .filter(|idx| !resolved.contains(idx))
                .map(|idx| self.table.name(idx).to_string())
                .collect();
            return Err(NetworkError::CyclicGraph { unresolved });
        }

        Ok(order)
    }

    fn renumber(pending: Vec<PendingEdge>) -> AoaGraph {
        let referenced: BTreeSet<EventKey> = pending
            .iter()
            .flat_map(|edge| [edge.from, edge.to])
            .collect();
        let numbering: BTreeMap<EventKey, usize> = referenced
            .iter()
            .enumerate()
            .map(|(position, key)| (*key, position + 1))
            .collect();

        let mut edges: Vec<AoaEdge> = pending
            .into_iter()
            .map(|edge| AoaEdge {
                from: numbering[&edge.from],
                to: numbering[&edge.to],
                label: edge.label,
                duration: edge.duration,
                is_dummy: edge.is_dummy,
            })
            .collect();

        edges.sort_by(|a, b| {
            a.from
                .cmp(&b.from)
                .then(a.to.cmp(&b.to))
                .then(a.is_dummy.cmp(&b.is_dummy))
                .then_with(|| a.label.cmp(&b.label))
        });

        let dummy_activity_labels = edges
            .iter()
            .filter(|edge| edge.is_dummy)
            .map(|edge| edge.label.clone())
            .collect();

        AoaGraph {
            nodes: (1..=referenced.len()).collect(),
            edges,
            dummy_activity_labels,
        }
    }
}

/// Mutable state of one construction run.
struct Construction<'a> {
    table: &'a ActivityTable,
    config: &'a NetworkConfig,
    next_event: u32,
    edges: Vec<PendingEdge>,
    /// Activities sharing a successor set share their end event.
    group_events: HashMap<Vec<usize>, EventKey>,
    completed_at: HashMap<EventKey, Vec<usize>>,
    /// Sorted distinct predecessor end events -> start event already built for them.
    convergence: HashMap<Vec<EventKey>, EventKey>,
    real_pairs: HashSet<(EventKey, EventKey)>,
    sorted_predecessors: Vec<Vec<usize>>,
}

impl<'a> Construction<'a> {
    fn new(table: &'a ActivityTable, config: &'a NetworkConfig) -> Self {
        let sorted_predecessors = (0..table.len())
            .map(|idx| {
                let mut preds = table.predecessors_of(idx).to_vec();
                preds.sort_unstable();
                preds
            })
            .collect();

        Self {
            table,
            config,
            next_event: 0,
            edges: Vec::with_capacity(table.len()),
            group_events: HashMap::new(),
            completed_at: HashMap::new(),
            convergence: HashMap::new(),
            real_pairs: HashSet::new(),
            sorted_predecessors,
        }
    }

    fn allocate(&mut self) -> EventKey {
        self.next_event += 1;
        EventKey::Event(self.next_event)
    }

    fn place(&mut self, idx: usize) {
        let table = self.table;
        let start = self.start_event(idx);
        let shared_end = self.end_event(idx);

        let name = table.name(idx);
        let arrow_end = if self.config.split_parallel_activities
            && self.real_pairs.contains(&(start, shared_end))
        {
            let detached = self.allocate();
            self.edges.push(PendingEdge::dummy(
                detached,
                shared_end,
                self.config.parallel_label(name),
            ));
            detached
        } else {
            shared_end
        };

        self.real_pairs.insert((start, arrow_end));
        self.edges.push(PendingEdge::real(
            start,
            arrow_end,
            name,
            table.duration(idx),
        ));
        self.completed_at.entry(shared_end).or_default().push(idx);
    }

    fn start_event(&mut self, idx: usize) -> EventKey {
        let table = self.table;
        let preds = table.predecessors_of(idx);
        if preds.is_empty() {
            return EventKey::Start;
        }

        // Distinct end events, each remembered with the first predecessor ending there.
        // A predecessor's end event depends only on its successor set.
        let mut sources: Vec<(EventKey, usize)> = Vec::with_capacity(preds.len());
        for &pred in preds {
            let event = self.end_event(pred);
            if !sources.iter().any(|(seen, _)| *seen == event) {
                sources.push((event, pred));
            }
        }

        if let [(event, _)] = sources.as_slice() {
            return *event;
        }

        let mut key: Vec<EventKey> = sources.iter().map(|(event, _)| *event).collect();
        key.sort_unstable();
        if let Some(&event) = self.convergence.get(&key) {
            return event;
        }

        let target = match self.reusable_event(idx, &key) {
            Some(event) => event,
            None => self.allocate(),
        };
        let activity = table.name(idx);
        for (source, pred) in &sources {
            if *source == target {
                continue;
            }
            let label = self.config.convergence_label(table.name(*pred), activity);
            self.edges.push(PendingEdge::dummy(*source, target, label));
        }

        self.convergence.insert(key, target);
        target
    }

    /// A predecessor end event can absorb the others when every activity that
    /// starts from it needs exactly the same predecessors as `idx`.
    fn reusable_event(&self, idx: usize, candidates: &[EventKey]) -> Option<EventKey> {
        let wanted = &self.sorted_predecessors[idx];
        candidates.iter().copied().find(|event| {
            let Some(finished) = self.completed_at.get(event) else {
                return false;
            };
            finished.iter().all(|&done| {
                self.table
                    .successors_of(done)
                    .iter()
                    .all(|&succ| self.sorted_predecessors[succ] == *wanted)
            })
        })
    }

    fn end_event(&mut self, idx: usize) -> EventKey {
        if self.table.is_final(idx) {
            return EventKey::Terminal;
        }

        let successors = self.table.successors_of(idx).to_vec();
        if let Some(&event) = self.group_events.get(&successors) {
            return event;
        }
        let event = self.allocate();
        self.group_events.insert(successors, event);
        event
    }
}
