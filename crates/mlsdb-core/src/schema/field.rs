///
/// Field
///
/// Closed enum over the queryable columns of the listing table, plus the
/// derived composite `Address`. `as_str` yields the upstream feed's column
/// identifier, which is also the key into the display field catalog.
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Field {
    ListingId,
    Latitude,
    Longitude,
    ListPrice,
    OriginalListPrice,
    StandardStatus,
    PropertyType,
    PropertySubType,
    StreetNumber,
    StreetName,
    UnitNumber,
    City,
    StateOrProvince,
    PostalCode,
    BuildingName,
    MlsAreaMajor,
    MlsAreaMinor,
    BedroomsTotal,
    BathroomsFull,
    BathroomsHalf,
    BathroomsTotalInteger,
    LivingArea,
    LotSizeAcres,
    LotSizeSquareFeet,
    YearBuilt,
    EntryLevel,
    GarageSpaces,
    ParkingTotal,
    StructureType,
    ArchitecturalStyle,
    AvailabilityDate,
    ModificationTimestamp,
    Media,
    OpenHouseData,
    AssociationFee,
    AssociationFeeFrequency,
    SpaYn,
    WaterfrontYn,
    ViewYn,
    WaterviewFlag,
    PropertyAttachedYn,
    LenderOwned,
    AvailableNow,
    SeniorCommunityYn,
    OutdoorSpace,
    DprFlag,
    CoolingYn,
    /// Derived: `StreetNumber StreetName , City`, non-null parts joined
    /// with single spaces, then trimmed.
    Address,
}

impl Field {
    /// The upstream column identifier for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListingId => "ListingId",
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
            Self::ListPrice => "ListPrice",
            Self::OriginalListPrice => "OriginalListPrice",
            Self::StandardStatus => "StandardStatus",
            Self::PropertyType => "PropertyType",
            Self::PropertySubType => "PropertySubType",
            Self::StreetNumber => "StreetNumber",
            Self::StreetName => "StreetName",
            Self::UnitNumber => "UnitNumber",
            Self::City => "City",
            Self::StateOrProvince => "StateOrProvince",
            Self::PostalCode => "PostalCode",
            Self::BuildingName => "BuildingName",
            Self::MlsAreaMajor => "MLSAreaMajor",
            Self::MlsAreaMinor => "MLSAreaMinor",
            Self::BedroomsTotal => "BedroomsTotal",
            Self::BathroomsFull => "BathroomsFull",
            Self::BathroomsHalf => "BathroomsHalf",
            Self::BathroomsTotalInteger => "BathroomsTotalInteger",
            Self::LivingArea => "LivingArea",
            Self::LotSizeAcres => "LotSizeAcres",
            Self::LotSizeSquareFeet => "LotSizeSquareFeet",
            Self::YearBuilt => "YearBuilt",
            Self::EntryLevel => "EntryLevel",
            Self::GarageSpaces => "GarageSpaces",
            Self::ParkingTotal => "ParkingTotal",
            Self::StructureType => "StructureType",
            Self::ArchitecturalStyle => "ArchitecturalStyle",
            Self::AvailabilityDate => "AvailabilityDate",
            Self::ModificationTimestamp => "ModificationTimestamp",
            Self::Media => "Media",
            Self::OpenHouseData => "OpenHouseData",
            Self::AssociationFee => "AssociationFee",
            Self::AssociationFeeFrequency => "AssociationFeeFrequency",
            Self::SpaYn => "SpaYN",
            Self::WaterfrontYn => "WaterfrontYN",
            Self::ViewYn => "ViewYN",
            Self::WaterviewFlag => "MLSPIN_WATERVIEW_FLAG",
            Self::PropertyAttachedYn => "PropertyAttachedYN",
            Self::LenderOwned => "MLSPIN_LENDER_OWNED",
            Self::AvailableNow => "MLSPIN_AvailableNow",
            Self::SeniorCommunityYn => "SeniorCommunityYN",
            Self::OutdoorSpace => "MLSPIN_OUTDOOR_SPACE_AVAILABLE",
            Self::DprFlag => "MLSPIN_DPR_Flag",
            Self::CoolingYn => "CoolingYN",
            Self::Address => "Address",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Field {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
