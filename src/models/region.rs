//! Coarse geographic buckets from fixed lat/lng bounding boxes.
//!
//! Boxes are tested in a fixed order and the first match wins. All bounds are
//! exclusive, so a point sitting exactly on an edge belongs to neither side.
//! Asia and Australia overlap (roughly lat -45..-10, lng 110..150); points
//! there classify as Asia because it is tested first.

/// Label used when counting distinct regions and nothing matched
pub const AGGREGATE_FALLBACK: &str = "Other";

/// Label used when displaying a single pin and nothing matched
pub const DISPLAY_FALLBACK: &str = "Ocean";

const DISPLAY_FALLBACK_EMOJI: &str = "🌊";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Europe,
    NorthAmerica,
    Africa,
    Asia,
    Australia,
    SouthAmerica,
}

/// Open interval box: (lat_min, lat_max, lng_min, lng_max)
type Bounds = (f64, f64, f64, f64);

impl Region {
    /// Priority order for classification
    pub const ALL: &'static [Region] = &[
        Region::Europe,
        Region::NorthAmerica,
        Region::Africa,
        Region::Asia,
        Region::Australia,
        Region::SouthAmerica,
    ];

    fn bounds(self) -> Bounds {
        match self {
            Self::Europe => (35.0, 70.0, -10.0, 40.0),
            Self::NorthAmerica => (25.0, 50.0, -125.0, -65.0),
            Self::Africa => (-35.0, 35.0, -20.0, 50.0),
            Self::Asia => (-45.0, 35.0, 60.0, 150.0),
            Self::Australia => (-50.0, -10.0, 110.0, 180.0),
            Self::SouthAmerica => (-60.0, 15.0, -85.0, -35.0),
        }
    }

    fn contains(self, lat: f64, lng: f64) -> bool {
        let (lat_min, lat_max, lng_min, lng_max) = self.bounds();
        lat > lat_min && lat < lat_max && lng > lng_min && lng < lng_max
    }

    /// First region whose box strictly contains the point
    pub fn classify(lat: f64, lng: f64) -> Option<Region> {
        Self::ALL.iter().copied().find(|r| r.contains(lat, lng))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Australia => "Australia",
            Self::SouthAmerica => "South America",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Europe => "🇪🇺",
            Self::NorthAmerica => "🇺🇸",
            Self::Africa => "🌍",
            Self::Asia => "🌏",
            Self::Australia => "🇦🇺",
            Self::SouthAmerica => "🌎",
        }
    }
}

/// Region label for aggregate counting, "Other" when unmatched
pub fn region_label(lat: f64, lng: f64) -> &'static str {
    Region::classify(lat, lng)
        .map(Region::name)
        .unwrap_or(AGGREGATE_FALLBACK)
}

/// Display info for one pin in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInfo {
    pub name: &'static str,
    pub emoji: &'static str,
}

/// Region name and icon for per-pin display, "Ocean" when unmatched
pub fn region_info(lat: f64, lng: f64) -> RegionInfo {
    match Region::classify(lat, lng) {
        Some(region) => RegionInfo {
            name: region.name(),
            emoji: region.emoji(),
        },
        None => RegionInfo {
            name: DISPLAY_FALLBACK,
            emoji: DISPLAY_FALLBACK_EMOJI,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cities() {
        assert_eq!(Region::classify(51.5, -0.1), Some(Region::Europe));
        assert_eq!(Region::classify(40.7, -74.0), Some(Region::NorthAmerica));
        assert_eq!(Region::classify(-1.3, 36.8), Some(Region::Africa));
        assert_eq!(Region::classify(28.6, 77.2), Some(Region::Asia));
        assert_eq!(Region::classify(-41.3, 174.8), Some(Region::Australia));
        assert_eq!(Region::classify(-23.5, -46.6), Some(Region::SouthAmerica));
    }

    #[test]
    fn test_origin_is_unmatched() {
        assert_eq!(Region::classify(0.0, 0.0), None);
        assert_eq!(region_label(0.0, 0.0), "Other");
        assert_eq!(region_info(0.0, 0.0).name, "Ocean");
        assert_eq!(region_info(0.0, 0.0).emoji, "🌊");
    }

    #[test]
    fn test_bounds_are_exclusive() {
        assert_eq!(Region::classify(35.0, -10.0), None);
        assert_eq!(region_label(35.0, -10.0), "Other");
        // On Europe's lower lat edge but inside Africa's lng range: Africa's
        // upper lat bound is also 35, so neither matches.
        assert_eq!(Region::classify(35.0, 10.0), None);
        assert_eq!(Region::classify(70.0, 10.0), None);
        assert_eq!(Region::classify(50.0, 40.0), None);
        assert_eq!(Region::classify(35.0001, -9.9999), Some(Region::Europe));
    }

    #[test]
    fn test_overlap_resolves_by_priority() {
        // Inside both the Asia and Australia boxes
        assert_eq!(Region::classify(-25.0, 133.0), Some(Region::Asia));
        // Australia box only (east of Asia's lng bound)
        assert_eq!(Region::classify(-30.0, 160.0), Some(Region::Australia));
    }

    #[test]
    fn test_region_info_uses_region_names() {
        let info = region_info(51.5, -0.1);
        assert_eq!(info, RegionInfo { name: "Europe", emoji: "🇪🇺" });
        assert_eq!(region_label(51.5, -0.1), "Europe");
    }

    #[test]
    fn test_far_outside_is_unmatched() {
        assert_eq!(Region::classify(89.0, 0.0), None);
        assert_eq!(Region::classify(-80.0, 0.0), None);
        assert_eq!(Region::classify(10.0, -150.0), None);
    }
}
