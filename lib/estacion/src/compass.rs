use std::fmt;

use serde::Serialize;

/// Eight-point compass rose used for wind direction labels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    /// Maps a heading in degrees to its 45°-wide bucket. The N bucket wraps
    /// across 0°, lower bounds are inclusive and NW is the fallback arm, so
    /// every input lands in exactly one bucket.
    pub fn from_degrees(degrees: f64) -> CompassPoint {
        if degrees >= 337.5 || degrees < 22.5 {
            Self::N
        } else if degrees < 67.5 {
            Self::NE
        } else if degrees < 112.5 {
            Self::E
        } else if degrees < 157.5 {
            Self::SE
        } else if degrees < 202.5 {
            Self::S
        } else if degrees < 247.5 {
            Self::SW
        } else if degrees < 292.5 {
            Self::W
        } else {
            Self::NW
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn test_cardinal_and_intercardinal_centers() {
        assert_eq!(CompassPoint::from_degrees(0.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(45.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_degrees(90.0), CompassPoint::E);
        assert_eq!(CompassPoint::from_degrees(135.0), CompassPoint::SE);
        assert_eq!(CompassPoint::from_degrees(180.0), CompassPoint::S);
        assert_eq!(CompassPoint::from_degrees(225.0), CompassPoint::SW);
        assert_eq!(CompassPoint::from_degrees(270.0), CompassPoint::W);
        assert_eq!(CompassPoint::from_degrees(315.0), CompassPoint::NW);
        assert_eq!(CompassPoint::from_degrees(359.9), CompassPoint::N);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(CompassPoint::from_degrees(22.49), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(22.5), CompassPoint::NE);
        assert_eq!(CompassPoint::from_degrees(67.5), CompassPoint::E);
        assert_eq!(CompassPoint::from_degrees(112.5), CompassPoint::SE);
        assert_eq!(CompassPoint::from_degrees(157.5), CompassPoint::S);
        assert_eq!(CompassPoint::from_degrees(202.5), CompassPoint::SW);
        assert_eq!(CompassPoint::from_degrees(247.5), CompassPoint::W);
        assert_eq!(CompassPoint::from_degrees(292.5), CompassPoint::NW);
        assert_eq!(CompassPoint::from_degrees(337.49), CompassPoint::NW);
        assert_eq!(CompassPoint::from_degrees(337.5), CompassPoint::N);
    }

    #[test]
    fn test_every_heading_gets_a_label() {
        let labels = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

        let mut degrees = 0.0;
        while degrees < 360.0 {
            let point = CompassPoint::from_degrees(degrees);
            assert!(labels.contains(&point.as_str()), "no label for {degrees}");
            degrees += 0.1;
        }
    }

    #[test]
    fn test_serializes_to_short_label() {
        assert_eq!(to_value(CompassPoint::N).unwrap(), json!("N"));
        assert_eq!(to_value(CompassPoint::SW).unwrap(), json!("SW"));
    }
}
