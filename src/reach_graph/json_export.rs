use bimap::BiMap;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Direction, Position};
use crate::reach_graph::ReachGraph;

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonData {
    pub nodes: Vec<JsonNode>,
    pub links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonNode {
    pub id: usize,
    pub row: i32,
    pub col: i32,
    pub tile: char,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonEdge {
    pub source: usize,
    pub target: usize,
    pub direction: Direction,
}

pub fn to_json_data(graph: &ReachGraph, board: &Board) -> JsonData {
    let ids: BiMap<Position, usize> = graph
        .cells()
        .enumerate()
        .map(|(id, (pos, _))| (pos, id))
        .collect();

    let nodes = graph
        .cells()
        .filter_map(|(pos, _)| {
            let id = *ids.get_by_left(&pos)?;
            Some(JsonNode {
                id,
                row: pos.row,
                col: pos.col,
                tile: board.tile(&pos)?.symbol(),
            })
        })
        .collect();

    let links = graph
        .cells()
        .flat_map(|(pos, _)| graph.neighbors(pos).map(move |(d, next)| (pos, d, next)))
        .filter_map(|(pos, direction, next)| {
            Some(JsonEdge {
                source: *ids.get_by_left(&pos)?,
                target: *ids.get_by_left(&next)?,
                direction,
            })
        })
        .collect();

    JsonData { nodes, links }
}

pub fn get_json_data(graph: &ReachGraph, board: &Board) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_json_data(graph, board))
}
