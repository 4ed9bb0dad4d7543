//! Geocoding port
//!
//! Defines the interface for converting a free-text address into
//! geographic coordinates.

use async_trait::async_trait;
use domain::GeoPoint;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Outcome of geocoding one address
///
/// A service timeout is indistinguishable from "not found" for the
/// pipeline, so adapters fold it into `NotFound` rather than `Err`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeocodeOutcome {
    /// The address geocoded to a valid position
    Located(GeoPoint),
    /// The service found no position for the address
    NotFound,
}

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Geocode a free-text address
    async fn geocode(&self, address: &str) -> Result<GeocodeOutcome, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }

    #[test]
    fn located_carries_the_point() {
        let point = GeoPoint::new(20.0, 0.0).expect("valid coordinates");
        match GeocodeOutcome::Located(point) {
            GeocodeOutcome::Located(p) => assert!((p.latitude() - 20.0).abs() < f64::EPSILON),
            GeocodeOutcome::NotFound => unreachable!("expected Located"),
        }
    }
}
