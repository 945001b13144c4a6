pub mod best_first;
pub mod common;
pub mod level_order;
pub mod search_tree;

pub use best_first::BestFirst;
pub use common::{SearchAlgorithm, SearchOutcome, Strategy};
pub use level_order::LevelOrder;
pub use search_tree::{NodeId, SearchNode, SearchTree};
