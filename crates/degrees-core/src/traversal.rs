//! Shortest-path search over the cast graph

use crate::error::{Error, Result};
use crate::graph::{CastGraph, PathStep};
use crate::limits::validate_expansion_budget;
use crate::movie::MovieId;
use crate::person::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Path query builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathQuery {
    /// Person the chain starts from
    pub source: PersonId,

    /// Person the chain must reach
    pub target: PersonId,

    /// Maximum number of node expansions (None = unbounded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,

    /// Stop as soon as the target is discovered as a neighbor instead of
    /// waiting for it to be dequeued
    #[serde(default = "default_early_exit")]
    pub early_exit: bool,
}

fn default_early_exit() -> bool {
    true
}

impl PathQuery {
    pub fn new(source: impl Into<PersonId>, target: impl Into<PersonId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            max_expansions: None,
            early_exit: default_early_exit(),
        }
    }

    /// Bound the number of expanded nodes
    pub fn with_budget(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Only accept the target when it is dequeued
    pub fn without_early_exit(mut self) -> Self {
        self.early_exit = false;
        self
    }
}

/// A chain of (movie, person) steps leading away from the source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub steps: Vec<PathStep>,
}

impl Path {
    /// Degrees of separation
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Pair every step with the person it starts from
    pub fn hops<'a>(
        &'a self,
        source: &'a PersonId,
    ) -> impl Iterator<Item = (&'a PersonId, &'a PathStep)> + 'a {
        std::iter::once(source)
            .chain(self.steps.iter().map(|step| &step.person))
            .zip(self.steps.iter())
    }
}

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "path", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A shortest path was found (empty when source equals target)
    Connected(Path),
    /// The frontier emptied without reaching the target
    NotConnected,
    /// The expansion budget ran out first
    BudgetExceeded,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Connected(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Connected(path) => Some(path),
            _ => None,
        }
    }
}

/// Search statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes_expanded: usize,
    pub edges_examined: usize,
    pub frontier_peak: usize,
    pub max_depth_reached: u32,
}

/// Result of a path query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    pub source: PersonId,
    pub target: PersonId,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Node of the search tree, stored in an arena and linked to its parent by index
#[derive(Debug)]
struct SearchNode {
    state: PersonId,
    action: Option<MovieId>,
    parent: Option<usize>,
    depth: u32,
}

/// FIFO frontier that also tracks which states it currently holds
#[derive(Debug, Default)]
struct QueueFrontier {
    queue: VecDeque<usize>,
    states: HashSet<PersonId>,
}

impl QueueFrontier {
    fn add(&mut self, node: usize, state: PersonId) {
        self.queue.push_back(node);
        self.states.insert(state);
    }

    fn remove(&mut self, nodes: &[SearchNode]) -> Option<usize> {
        let node = self.queue.pop_front()?;
        self.states.remove(&nodes[node].state);
        Some(node)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.states.contains(state)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Breadth-first path finder over any [`CastGraph`]
pub struct PathFinder<'g, G: CastGraph> {
    graph: &'g G,
}

impl<'g, G: CastGraph> PathFinder<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Shortest chain of (movie, person) steps from source to target
    pub fn find_shortest_path(
        &self,
        source: &PersonId,
        target: &PersonId,
    ) -> Result<SearchOutcome> {
        let query = PathQuery::new(source.clone(), target.clone());
        Ok(self.execute(&query)?.outcome)
    }

    /// Execute a path query
    pub fn execute(&self, query: &PathQuery) -> Result<PathResult> {
        if let Some(budget) = query.max_expansions {
            validate_expansion_budget(budget)?;
        }
        for id in [&query.source, &query.target] {
            if !self.graph.contains_person(id) {
                return Err(Error::UnknownPerson(id.clone()));
            }
        }

        tracing::debug!(
            "Executing path search: source={}, target={}, budget={:?}, early_exit={}",
            query.source,
            query.target,
            query.max_expansions,
            query.early_exit
        );

        let mut stats = SearchStats::default();

        if query.source == query.target {
            return Ok(Self::finish(
                query,
                SearchOutcome::Connected(Path::default()),
                stats,
            ));
        }

        let mut nodes = vec![SearchNode {
            state: query.source.clone(),
            action: None,
            parent: None,
            depth: 0,
        }];
        let mut frontier = QueueFrontier::default();
        frontier.add(0, query.source.clone());
        stats.frontier_peak = frontier.len();
        let mut explored: HashSet<PersonId> = HashSet::new();

        while let Some(index) = frontier.remove(&nodes) {
            let state = nodes[index].state.clone();
            let depth = nodes[index].depth;
            stats.max_depth_reached = stats.max_depth_reached.max(depth);

            if state == query.target {
                let path = Self::reconstruct_path(&nodes, index, None);
                return Ok(Self::finish(query, SearchOutcome::Connected(path), stats));
            }

            if let Some(budget) = query.max_expansions {
                if stats.nodes_expanded >= budget {
                    tracing::debug!("Expansion budget of {} exhausted", budget);
                    return Ok(Self::finish(query, SearchOutcome::BudgetExceeded, stats));
                }
            }

            stats.nodes_expanded += 1;
            explored.insert(state.clone());

            for step in self.graph.neighbors(&state) {
                stats.edges_examined += 1;

                if explored.contains(&step.person) || frontier.contains_state(&step.person) {
                    continue;
                }

                if query.early_exit && step.person == query.target {
                    stats.max_depth_reached = depth + 1;
                    let path = Self::reconstruct_path(&nodes, index, Some(step));
                    return Ok(Self::finish(query, SearchOutcome::Connected(path), stats));
                }

                frontier.add(nodes.len(), step.person.clone());
                stats.frontier_peak = stats.frontier_peak.max(frontier.len());
                nodes.push(SearchNode {
                    state: step.person,
                    action: Some(step.movie),
                    parent: Some(index),
                    depth: depth + 1,
                });
            }
        }

        Ok(Self::finish(query, SearchOutcome::NotConnected, stats))
    }

    /// Walk parent links from `index` back to the root.
    ///
    /// `tail` is a step discovered from `index` but never pushed as a node.
    fn reconstruct_path(nodes: &[SearchNode], index: usize, tail: Option<PathStep>) -> Path {
        let mut steps: Vec<PathStep> = tail.into_iter().collect();
        let mut cursor = Some(index);

        while let Some(current) = cursor {
            let node = &nodes[current];
            if let Some(movie) = &node.action {
                steps.push(PathStep {
                    movie: movie.clone(),
                    person: node.state.clone(),
                });
            }
            cursor = node.parent;
        }

        steps.reverse();
        Path { steps }
    }

    fn finish(query: &PathQuery, outcome: SearchOutcome, stats: SearchStats) -> PathResult {
        match &outcome {
            SearchOutcome::Connected(path) => {
                tracing::debug!("Path found with {} degrees", path.degrees())
            }
            SearchOutcome::NotConnected => tracing::debug!("Frontier exhausted, not connected"),
            SearchOutcome::BudgetExceeded => tracing::debug!("Search stopped by budget"),
        }
        tracing::debug!(
            "Search expanded {} nodes, examined {} edges",
            stats.nodes_expanded,
            stats.edges_examined
        );

        PathResult {
            source: query.source.clone(),
            target: query.target.clone(),
            outcome,
            stats,
        }
    }
}
