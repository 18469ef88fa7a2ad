//! Seed schedules for the catalog.
//!
//! Seeding is the caller's job; this module just provides a fluent way to
//! write connection lists down, plus the default domestic schedule the
//! command-line front end starts from.

use std::collections::HashSet;

use crate::domain::{ConnectionRequest, Location};

/// Builder for lists of connection requests.
///
/// Nothing is validated here; requests are checked on admission.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    requests: Vec<ConnectionRequest>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection.
    pub fn flight(
        mut self,
        origin: &str,
        destination: &str,
        operator: &str,
        cost: i64,
        minutes: i64,
        flight_no: &str,
    ) -> Self {
        self.requests.push(ConnectionRequest::new(
            origin,
            destination,
            operator,
            cost,
            minutes,
            flight_no,
        ));
        self
    }

    /// Build the request list, in the order flights were added.
    pub fn build(self) -> Vec<ConnectionRequest> {
        self.requests
    }
}

/// The default domestic schedule.
///
/// Ten cities, 31 flights. Note the parallel Mumbai and Pune flights (same
/// city pair, different airline or fare) and the reused flight number
/// AI810 on two different Pune routes.
pub fn sample_network() -> Vec<ConnectionRequest> {
    NetworkBuilder::new()
        .flight("Chennai", "Delhi", "Spice Jet", 10000, 180, "SG801")
        .flight("Chennai", "Kolkata", "Air India", 6000, 120, "AI801")
        .flight("Delhi", "Kolkata", "Air India", 6000, 150, "AI802")
        .flight("Delhi", "Mumbai", "Indigo", 6000, 120, "6E801")
        .flight("Delhi", "Pune", "Air India", 8000, 120, "AI803")
        .flight("Delhi", "Hyderabad", "Indigo", 7000, 180, "6E802")
        .flight("Kolkata", "Bangalore", "Air India", 6000, 120, "AI804")
        .flight("Kolkata", "Hyderabad", "Indigo", 7000, 90, "6E803")
        .flight("Bhubaneswar", "Mumbai", "Air India", 6000, 150, "AI805")
        .flight("Bhubaneswar", "Kolkata", "Indigo", 5000, 90, "6E804")
        .flight("Jaipur", "Kolkata", "Air India", 6000, 90, "AI806")
        .flight("Jaipur", "Bhopal", "Indigo", 5000, 60, "6E805")
        .flight("Bhopal", "Hyderabad", "Spice Jet", 5000, 120, "SG802")
        .flight("Bhopal", "Mumbai", "Spice Jet", 7000, 120, "SG803")
        .flight("Mumbai", "Delhi", "Spice Jet", 5000, 120, "SG804")
        .flight("Mumbai", "Bhopal", "Air India", 4000, 120, "AI807")
        .flight("Mumbai", "Jaipur", "Indigo", 5000, 90, "6E806")
        .flight("Mumbai", "Delhi", "Air India", 8000, 120, "AI808")
        .flight("Mumbai", "Bhopal", "Indigo", 3000, 120, "6E807")
        .flight("Mumbai", "Jaipur", "Air India", 7000, 90, "AI809")
        .flight("Pune", "Hyderabad", "Spice Jet", 5000, 120, "SG805")
        .flight("Pune", "Bangalore", "Air India", 6000, 120, "AI810")
        .flight("Pune", "Hyderabad", "Air India", 5000, 120, "AI810")
        .flight("Pune", "Bangalore", "Spice Jet", 3000, 120, "SG806")
        .flight("Pune", "Mumbai", "Indigo", 2000, 20, "6E808")
        .flight("Hyderabad", "Delhi", "Spice Jet", 7000, 150, "SG806")
        .flight("Hyderabad", "Bangalore", "Air India", 3000, 45, "AI811")
        .flight("Hyderabad", "Chennai", "Indigo", 2000, 45, "6E809")
        .flight("Bangalore", "Bhubaneswar", "Spice Jet", 7000, 75, "SG807")
        .flight("Bangalore", "Mumbai", "Air India", 7000, 90, "AI812")
        .flight("Bangalore", "Delhi", "Indigo", 5000, 120, "6E810")
        .build()
}

/// Every distinct location named by `requests`, in first-mention order.
///
/// Useful for asking a gate about a whole schedule up front. Blank names
/// are skipped.
pub fn locations_of(requests: &[ConnectionRequest]) -> Vec<Location> {
    let mut seen = HashSet::new();
    let mut locations = Vec::new();

    for name in requests
        .iter()
        .flat_map(|r| [r.origin.as_str(), r.destination.as_str()])
    {
        if let Ok(location) = Location::parse(name) {
            if seen.insert(location.clone()) {
                locations.push(location);
            }
        }
    }

    locations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_order() {
        let requests = NetworkBuilder::new()
            .flight("A", "B", "Op", 1, 2, "F1")
            .flight("B", "C", "Op", 3, 4, "F2")
            .build();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].flight_no, "F1");
        assert_eq!(requests[1].origin, "B");
        assert_eq!(requests[1].cost, 3);
        assert_eq!(requests[1].minutes, 4);
    }

    #[test]
    fn sample_network_is_well_formed() {
        let requests = sample_network();

        assert_eq!(requests.len(), 31);
        assert!(requests.iter().all(|r| r.validate().is_ok()));
    }

    #[test]
    fn sample_network_has_ten_cities() {
        let locations = locations_of(&sample_network());
        assert_eq!(locations.len(), 10);
        assert_eq!(locations[0].as_str(), "Chennai");
        assert_eq!(locations[1].as_str(), "Delhi");
    }

    #[test]
    fn locations_of_skips_blank_names() {
        let requests = NetworkBuilder::new()
            .flight("A", " ", "Op", 1, 1, "F1")
            .flight("A", "B", "Op", 1, 1, "F2")
            .build();

        let names: Vec<String> = locations_of(&requests)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
