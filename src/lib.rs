//! # Hoptable
//!
//! Computes shortest-path distance tables between every ordered pair of
//! vertices in a directed graph. The graph arrives as a flat edge list
//! (`"BRU->AMS,AMS->CDG"`); the result is one record per ordered pair of
//! distinct vertices, with `-1` marking pairs that no directed path connects.
//!
//! ## Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), hoptable::GraphError> {
//! let records = hoptable::distance_table_from_text("BRU->AMS,AMS->CDG")?;
//! assert_eq!(records.len(), 6);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod frontier;
pub mod graph;
pub mod parse;
pub mod solve;
pub mod table;

pub use error::{GraphError, Result};
pub use frontier::PriorityFrontier;
pub use graph::CityGraph;
pub use parse::parse_edge_list;
pub use solve::shortest_distances;
pub use table::{build_distance_table, distance_table_from_text, DistanceRecord, UNREACHABLE};
