//! SolarAI orientation estimator.
//!
//! The address is not geocoded. Every valid request gets the same south-facing
//! recommendation and fixed reference coordinates; only the label changes.

use crate::errors::ValidationError;
use crate::models::orientation::{AddressInput, Coordinates, OrientationResult};

pub const REFERENCE_COORDINATES: Coordinates = Coordinates { lat: 37.7749, lng: -122.4194 };

pub fn estimate(input: &AddressInput) -> Result<OrientationResult, ValidationError> {
    let address = input.address.as_deref().map(str::trim).unwrap_or_default();
    if address.is_empty() {
        return Err(ValidationError::AddressRequired);
    }

    Ok(OrientationResult {
        location: address.to_string(),
        coordinates: REFERENCE_COORDINATES,
        optimal_tilt: 34.0,
        optimal_azimuth: 180.0,
        peak_sun_hours: 5.4,
        efficiency: 92.0,
        energy_potential: 8500.0,
        carbon_offset: 6.2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(s: &str) -> AddressInput {
        AddressInput { address: Some(s.to_string()) }
    }

    #[test]
    fn test_figures_ignore_the_address() {
        let a = estimate(&address("1 Market St, San Francisco")).unwrap();
        let b = estimate(&address("Via Roma 1, Torino")).unwrap();
        assert_eq!(a.location, "1 Market St, San Francisco");
        assert_eq!(b.location, "Via Roma 1, Torino");
        assert_eq!(a.coordinates, b.coordinates);
        assert_eq!((a.optimal_tilt, a.optimal_azimuth), (34.0, 180.0));
        assert_eq!((a.peak_sun_hours, a.efficiency), (5.4, 92.0));
        assert_eq!((a.energy_potential, a.carbon_offset), (8500.0, 6.2));
        assert_eq!(a.carbon_offset, b.carbon_offset);
    }

    #[test]
    fn test_idempotent() {
        let a = address("221B Baker Street");
        assert_eq!(estimate(&a), estimate(&a));
    }

    #[test]
    fn test_address_is_trimmed() {
        assert_eq!(estimate(&address("  Denver \n")).unwrap().location, "Denver");
    }

    #[test]
    fn test_blank_or_missing_address_is_rejected() {
        assert_eq!(estimate(&address("   ")), Err(ValidationError::AddressRequired));
        assert_eq!(estimate(&AddressInput::default()), Err(ValidationError::AddressRequired));
    }
}
