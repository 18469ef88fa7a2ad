//! Domain types for the flight planner.
//!
//! This module contains the core domain model: locations, connections and
//! routes. Input is validated at construction time, so code that receives
//! these types can trust their validity.

mod connection;
mod error;
mod location;
mod route;

pub use connection::{Connection, ConnectionRequest};
pub use error::DomainError;
pub use location::{InvalidLocation, Location};
pub use route::Route;
