//! Flight route planner.
//!
//! Keeps a catalog of directed flight connections, admitted only when a
//! safety gate clears both ends, and answers: "what is the cheapest (or
//! fastest) way to get from here to there, and what are all the others?"

pub mod cache;
pub mod catalog;
pub mod domain;
pub mod gate;
pub mod network;
pub mod planner;
pub mod report;
pub mod weather;
