use crate::search::{
    search_engines::{AStar, SearchStatistics, TerminationCondition, BFS},
    Heuristic, Plan, TaxiProblem,
};
use clap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Plan),
    /// The search exhausted the frontier without reaching a goal
    ProvablyUnsolvable,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

pub trait SearchEngine {
    fn search(
        &mut self,
        problem: &TaxiProblem,
        heuristic: Box<dyn Heuristic>,
        termination: TerminationCondition,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "astar", help = "A* on f = g + h; optimal whenever the \
        heuristic never overestimates.")]
    AStar,
    #[clap(name = "bfs", help = "Breadth-first search. Ignores the heuristic; \
        optimal because every joint step costs one.")]
    BFS,
}

impl SearchEngineName {
    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::AStar => Box::new(AStar::new()),
            SearchEngineName::BFS => Box::new(BFS::new()),
        }
    }
}
