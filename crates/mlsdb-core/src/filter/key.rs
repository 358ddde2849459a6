use serde::{Serialize, Serializer};

///
/// ValueShape
///
/// The value shape a filter key expects. Ingestion drops entries whose
/// payload does not coerce to the key's shape, which is what keeps the
/// engine resilient to partial or malformed client state.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueShape {
    Number,
    Text,
    TextSet,
    Flag,
}

// Expand the filter-key registry into the enum, the wire-name mapping, and
// the expected value shape in one place.
macro_rules! filter_keys {
    ( $( $variant:ident => ($key:literal, $shape:ident) ),* $(,)? ) => {
        ///
        /// FilterKey
        ///
        /// Closed enum over the recognized client filter keys. `as_str`
        /// yields the wire name clients send; anything else in a client
        /// payload is ignored, never an error.
        ///

        #[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
        pub enum FilterKey {
            $( $variant, )*
        }

        impl FilterKey {
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )* ];

            /// The wire name for this key.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )*
                }
            }

            /// The value shape this key expects.
            #[must_use]
            pub const fn shape(self) -> ValueShape {
                match self {
                    $( Self::$variant => ValueShape::$shape, )*
                }
            }

            /// Resolve a wire name; unrecognized names yield `None`.
            #[must_use]
            pub fn parse(raw: &str) -> Option<Self> {
                match raw {
                    $( $key => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

filter_keys! {
    City => ("City", TextSet),
    BuildingName => ("Building Name", TextSet),
    MlsAreaMajor => ("MLS Area Major", TextSet),
    MlsAreaMinor => ("MLS Area Minor", TextSet),
    PostalCode => ("Postal Code", TextSet),
    StreetName => ("Street Name", TextSet),
    MlsNumber => ("MLS Number", TextSet),
    Address => ("Address", TextSet),
    PropertyType => ("PropertyType", Text),
    PriceMin => ("price_min", Number),
    PriceMax => ("price_max", Number),
    Beds => ("beds", TextSet),
    BathsMin => ("baths_min", Number),
    HomeType => ("home_type", TextSet),
    Status => ("status", TextSet),
    SqftMin => ("sqft_min", Number),
    SqftMax => ("sqft_max", Number),
    LotSizeMin => ("lot_size_min", Number),
    LotSizeMax => ("lot_size_max", Number),
    YearBuiltMin => ("year_built_min", Number),
    YearBuiltMax => ("year_built_max", Number),
    EntryLevelMin => ("entry_level_min", Number),
    EntryLevelMax => ("entry_level_max", Number),
    GarageSpacesMin => ("garage_spaces_min", Number),
    ParkingTotalMin => ("parking_total_min", Number),
    StructureType => ("structure_type", TextSet),
    ArchitecturalStyle => ("architectural_style", TextSet),
    SpaYn => ("SpaYN", Flag),
    WaterfrontYn => ("WaterfrontYN", Flag),
    ViewYn => ("ViewYN", Flag),
    WaterviewFlag => ("MLSPIN_WATERVIEW_FLAG", Flag),
    PropertyAttachedYn => ("PropertyAttachedYN", Flag),
    LenderOwned => ("MLSPIN_LENDER_OWNED", Flag),
    AvailableNow => ("MLSPIN_AvailableNow", Flag),
    SeniorCommunityYn => ("SeniorCommunityYN", Flag),
    OutdoorSpace => ("MLSPIN_OUTDOOR_SPACE_AVAILABLE", Flag),
    DprFlag => ("MLSPIN_DPR_Flag", Flag),
    CoolingYn => ("CoolingYN", Flag),
    AvailableBy => ("available_by", Text),
    OpenHouseOnly => ("open_house_only", Flag),
}

impl Serialize for FilterKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
