//! Offline solver for ladder-and-rope platform levels.
//!
//! A level is parsed into a [`core::Board`], every cell's legal moves are
//! collected into a [`reach_graph::ReachGraph`], and the [`solver`] searches
//! for the shortest plan that collects every gold bag before reaching the
//! exit. A [`player::Session`] then hands that plan out one command per turn.

pub mod console_interface;
pub mod core;
pub mod error;
pub mod models;
pub mod player;
pub mod reach_graph;
pub mod solver;

#[cfg(test)]
mod test;
