use crate::models::{Coordinates, Place};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates using the haversine formula.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Return the places ordered by ascending distance from `origin`.
///
/// The sort is stable, so places at equal distance keep their relative order.
/// Without an origin the catalog is returned in its original order.
pub fn sort_by_distance(places: &[Place], origin: Option<Coordinates>) -> Vec<Place> {
    let Some(origin) = origin else {
        return places.to_vec();
    };

    let mut ranked: Vec<(f64, &Place)> = places
        .iter()
        .map(|p| (distance_km(origin, p.coordinates()), p))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.into_iter().map(|(_, p)| p.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceImage;

    fn place(id: &str, lat: f64, lng: f64) -> Place {
        Place {
            id: id.to_string(),
            title: id.to_uppercase(),
            image: PlaceImage {
                src: format!("{id}.jpg"),
                alt: String::new(),
            },
            description: String::new(),
            lat,
            lng,
        }
    }

    fn ids(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.id.as_str()).collect()
    }

    const ORIGIN: Coordinates = Coordinates { lat: 0.0, lng: 0.0 };

    #[test]
    fn test_distance_same_point_is_zero() {
        let p = Coordinates { lat: 51.5, lng: -0.12 };
        assert!(distance_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinates { lat: 48.85, lng: 2.35 };
        let b = Coordinates { lat: 40.71, lng: -74.0 };
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_one_degree_of_latitude() {
        let b = Coordinates { lat: 1.0, lng: 0.0 };
        // 2 * pi * 6371 / 360
        assert!((distance_km(ORIGIN, b) - 111.195).abs() < 0.01);
    }

    #[test]
    fn test_distance_antipodes() {
        let b = Coordinates { lat: 0.0, lng: 180.0 };
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance_km(ORIGIN, b) - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_sort_nearest_first() {
        let catalog = vec![place("b", 10.0, 10.0), place("a", 0.0, 0.0)];
        let sorted = sort_by_distance(&catalog, Some(ORIGIN));
        assert_eq!(ids(&sorted), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_already_ordered_catalog() {
        let catalog = vec![place("a", 0.0, 0.0), place("b", 10.0, 10.0)];
        let sorted = sort_by_distance(&catalog, Some(ORIGIN));
        assert_eq!(ids(&sorted), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let catalog = vec![place("far", 50.0, 50.0), place("near", 1.0, 1.0)];
        let before = catalog.clone();
        let _ = sort_by_distance(&catalog, Some(ORIGIN));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_sort_is_stable_for_equal_distances() {
        let catalog = vec![
            place("east", 0.0, 5.0),
            place("north", 5.0, 0.0),
            place("east-again", 0.0, 5.0),
            place("near", 0.0, 1.0),
        ];
        let sorted = sort_by_distance(&catalog, Some(ORIGIN));
        assert_eq!(ids(&sorted), vec!["near", "east", "north", "east-again"]);
    }

    #[test]
    fn test_sort_without_origin_keeps_order() {
        let catalog = vec![place("z", 80.0, 80.0), place("a", 0.0, 0.0)];
        let sorted = sort_by_distance(&catalog, None);
        assert_eq!(ids(&sorted), vec!["z", "a"]);
    }

    #[test]
    fn test_sort_empty_catalog() {
        assert!(sort_by_distance(&[], Some(ORIGIN)).is_empty());
        assert!(sort_by_distance(&[], None).is_empty());
    }

    #[test]
    fn test_sort_is_permutation_and_monotonic() {
        let catalog = vec![
            place("tokyo", 35.68, 139.69),
            place("lima", -12.05, -77.04),
            place("oslo", 59.91, 10.75),
            place("cairo", 30.04, 31.24),
            place("quito", -0.18, -78.47),
            place("perth", -31.95, 115.86),
        ];
        let origin = Coordinates { lat: 41.9, lng: 12.5 };
        let sorted = sort_by_distance(&catalog, Some(origin));

        let mut before = ids(&catalog);
        let mut after = ids(&sorted);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);

        let distances: Vec<f64> = sorted
            .iter()
            .map(|p| distance_km(origin, p.coordinates()))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_is_idempotent() {
        let catalog = vec![
            place("c", 30.0, 30.0),
            place("a", 1.0, 1.0),
            place("b", -10.0, 5.0),
            place("d", 1.0, -1.0),
        ];
        let once = sort_by_distance(&catalog, Some(ORIGIN));
        let twice = sort_by_distance(&once, Some(ORIGIN));
        assert_eq!(once, twice);
    }
}
