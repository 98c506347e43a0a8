mod graph;
mod graph_info;
mod json_export;
mod network;

pub use graph::ReachGraph;
pub use graph_info::{get_graph_info, GraphInfo};
pub use json_export::{get_json_data, to_json_data, JsonData, JsonEdge, JsonNode};
pub use network::ReachNetwork;
