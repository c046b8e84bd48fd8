mod astar;
mod bfs;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

use astar::AStar;
use bfs::BFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_space::{SearchSpace, StateId, NO_STATE};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
