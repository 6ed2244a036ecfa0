use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored latitude/longitude pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub lat: f64,
    pub long: f64,
}

impl Location {
    /// Create a new location with a freshly generated, time-ordered ID.
    pub fn new(lat: f64, long: f64) -> Self {
        Self {
            id: Uuid::now_v7(),
            lat,
            long,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = Location::new(40.7, -74.0);
        let b = Location::new(40.7, -74.0);

        assert_ne!(a.id, b.id);
        assert_eq!(a.lat, 40.7);
        assert_eq!(a.long, -74.0);
    }

    #[test]
    fn test_ids_sort_in_creation_order() {
        let first = Location::new(0.0, 0.0);
        let second = Location::new(1.0, 1.0);

        assert!(first.id < second.id);
    }
}
