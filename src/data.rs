//! Reference coastline: named landmarks along the Black Sea coast.
//!
//! A coarse, fixed sampling of the coast at city/cape resolution. The core
//! geometry functions accept any point sequence; this is just the default
//! demo input.

use crate::geo::GeoPoint;

/// A named coastal landmark
#[derive(Clone, Copy, Debug)]
pub struct Landmark {
    pub name: &'static str,
    pub point: GeoPoint,
}

const fn landmark(name: &'static str, lat: f64, lon: f64) -> Landmark {
    Landmark {
        name,
        point: GeoPoint::new(lat, lon),
    }
}

/// Black Sea coastal landmarks in no particular order
pub const BLACK_SEA_COASTLINE: [Landmark; 24] = [
    landmark("Sulina (Danube delta)", 45.16, 29.65),
    landmark("Constanța", 44.17, 28.65),
    landmark("Varna", 43.20, 27.92),
    landmark("Burgas", 42.50, 27.47),
    landmark("Bosphorus mouth", 41.22, 29.11),
    landmark("Zonguldak", 41.45, 31.79),
    landmark("Sinop", 42.03, 35.15),
    landmark("Samsun", 41.29, 36.33),
    landmark("Ordu", 40.98, 37.88),
    landmark("Trabzon", 41.00, 39.73),
    landmark("Rize", 41.02, 40.52),
    landmark("Batumi", 41.65, 41.63),
    landmark("Poti", 42.15, 41.67),
    landmark("Sukhumi", 43.00, 41.02),
    landmark("Sochi", 43.59, 39.73),
    landmark("Tuapse", 44.10, 39.07),
    landmark("Novorossiysk", 44.72, 37.77),
    landmark("Anapa", 44.89, 37.32),
    landmark("Kerch", 45.36, 36.47),
    landmark("Feodosia", 45.03, 35.38),
    landmark("Yalta", 44.50, 34.17),
    landmark("Sevastopol", 44.62, 33.53),
    landmark("Yevpatoria", 45.20, 33.37),
    landmark("Odesa", 46.48, 30.73),
];

/// Landmarks ordered west to east by longitude (the reporting order)
pub fn sorted_landmarks() -> Vec<Landmark> {
    let mut landmarks = BLACK_SEA_COASTLINE.to_vec();
    landmarks.sort_by(|a, b| a.point.lon.total_cmp(&b.point.lon));
    landmarks
}

/// The base polyline: landmark points, west to east
pub fn base_polyline() -> Vec<GeoPoint> {
    sorted_landmarks().iter().map(|l| l.point).collect()
}
