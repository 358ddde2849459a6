use crate::{schema::Field, value::Value};
use serde::{Deserialize, Serialize};

///
/// Listing
///
/// A row of the listing table as fed by the upstream MLS sync. The engine
/// only ever reads listings; ingestion and persistence live elsewhere.
///
/// Legacy multi-value columns (`structure_type`, `architectural_style`)
/// keep their raw encoded form here; `schema::decode_multi_value` is the
/// one place that turns them into tokens. Embedded JSON blobs (media,
/// open-house data) stay raw strings for the same reason.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Listing {
    #[serde(rename = "ListingId")]
    pub listing_id: String,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "ListPrice")]
    pub list_price: Option<f64>,
    #[serde(rename = "OriginalListPrice")]
    pub original_list_price: Option<f64>,
    #[serde(rename = "StandardStatus")]
    pub standard_status: Option<String>,
    #[serde(rename = "PropertyType")]
    pub property_type: Option<String>,
    #[serde(rename = "PropertySubType")]
    pub property_sub_type: Option<String>,
    #[serde(rename = "StreetNumber")]
    pub street_number: Option<String>,
    #[serde(rename = "StreetName")]
    pub street_name: Option<String>,
    #[serde(rename = "UnitNumber")]
    pub unit_number: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "StateOrProvince")]
    pub state_or_province: Option<String>,
    #[serde(rename = "PostalCode")]
    pub postal_code: Option<String>,
    #[serde(rename = "BuildingName")]
    pub building_name: Option<String>,
    #[serde(rename = "MLSAreaMajor")]
    pub mls_area_major: Option<String>,
    #[serde(rename = "MLSAreaMinor")]
    pub mls_area_minor: Option<String>,
    #[serde(rename = "BedroomsTotal")]
    pub bedrooms_total: Option<i64>,
    #[serde(rename = "BathroomsFull")]
    pub bathrooms_full: Option<i64>,
    #[serde(rename = "BathroomsHalf")]
    pub bathrooms_half: Option<i64>,
    #[serde(rename = "BathroomsTotalInteger")]
    pub bathrooms_total_integer: Option<i64>,
    #[serde(rename = "LivingArea")]
    pub living_area: Option<f64>,
    #[serde(rename = "LotSizeAcres")]
    pub lot_size_acres: Option<f64>,
    #[serde(rename = "LotSizeSquareFeet")]
    pub lot_size_square_feet: Option<f64>,
    #[serde(rename = "YearBuilt")]
    pub year_built: Option<i64>,
    #[serde(rename = "EntryLevel")]
    pub entry_level: Option<i64>,
    #[serde(rename = "GarageSpaces")]
    pub garage_spaces: Option<i64>,
    #[serde(rename = "ParkingTotal")]
    pub parking_total: Option<i64>,
    #[serde(rename = "StructureType")]
    pub structure_type: Option<String>,
    #[serde(rename = "ArchitecturalStyle")]
    pub architectural_style: Option<String>,
    #[serde(rename = "AvailabilityDate")]
    pub availability_date: Option<String>,
    #[serde(rename = "ModificationTimestamp")]
    pub modification_timestamp: String,
    #[serde(rename = "Media")]
    pub media: Option<String>,
    #[serde(rename = "OpenHouseData")]
    pub open_house_data: Option<String>,
    #[serde(rename = "AssociationFee")]
    pub association_fee: Option<f64>,
    #[serde(rename = "AssociationFeeFrequency")]
    pub association_fee_frequency: Option<String>,
    #[serde(rename = "SpaYN")]
    pub spa_yn: Option<bool>,
    #[serde(rename = "WaterfrontYN")]
    pub waterfront_yn: Option<bool>,
    #[serde(rename = "ViewYN")]
    pub view_yn: Option<bool>,
    #[serde(rename = "MLSPIN_WATERVIEW_FLAG")]
    pub waterview_flag: Option<bool>,
    #[serde(rename = "PropertyAttachedYN")]
    pub property_attached_yn: Option<bool>,
    #[serde(rename = "MLSPIN_LENDER_OWNED")]
    pub lender_owned: Option<bool>,
    #[serde(rename = "MLSPIN_AvailableNow")]
    pub available_now: Option<bool>,
    #[serde(rename = "SeniorCommunityYN")]
    pub senior_community_yn: Option<bool>,
    #[serde(rename = "MLSPIN_OUTDOOR_SPACE_AVAILABLE")]
    pub outdoor_space: Option<bool>,
    #[serde(rename = "MLSPIN_DPR_Flag")]
    pub dpr_flag: Option<bool>,
    #[serde(rename = "CoolingYN")]
    pub cooling_yn: Option<bool>,
}

impl Listing {
    /// Read a field as a predicate operand. Absent values read as Null.
    #[must_use]
    pub fn value(&self, field: Field) -> Value {
        match field {
            Field::ListingId => Value::Text(self.listing_id.clone()),
            Field::Latitude => self.latitude.into(),
            Field::Longitude => self.longitude.into(),
            Field::ListPrice => self.list_price.into(),
            Field::OriginalListPrice => self.original_list_price.into(),
            Field::StandardStatus => self.standard_status.clone().into(),
            Field::PropertyType => self.property_type.clone().into(),
            Field::PropertySubType => self.property_sub_type.clone().into(),
            Field::StreetNumber => self.street_number.clone().into(),
            Field::StreetName => self.street_name.clone().into(),
            Field::UnitNumber => self.unit_number.clone().into(),
            Field::City => self.city.clone().into(),
            Field::StateOrProvince => self.state_or_province.clone().into(),
            Field::PostalCode => self.postal_code.clone().into(),
            Field::BuildingName => self.building_name.clone().into(),
            Field::MlsAreaMajor => self.mls_area_major.clone().into(),
            Field::MlsAreaMinor => self.mls_area_minor.clone().into(),
            Field::BedroomsTotal => self.bedrooms_total.into(),
            Field::BathroomsFull => self.bathrooms_full.into(),
            Field::BathroomsHalf => self.bathrooms_half.into(),
            Field::BathroomsTotalInteger => self.bathrooms_total_integer.into(),
            Field::LivingArea => self.living_area.into(),
            Field::LotSizeAcres => self.lot_size_acres.into(),
            Field::LotSizeSquareFeet => self.lot_size_square_feet.into(),
            Field::YearBuilt => self.year_built.into(),
            Field::EntryLevel => self.entry_level.into(),
            Field::GarageSpaces => self.garage_spaces.into(),
            Field::ParkingTotal => self.parking_total.into(),
            Field::StructureType => self.structure_type.clone().into(),
            Field::ArchitecturalStyle => self.architectural_style.clone().into(),
            Field::AvailabilityDate => self.availability_date.clone().into(),
            Field::ModificationTimestamp => Value::Text(self.modification_timestamp.clone()),
            Field::Media => self.media.clone().into(),
            Field::OpenHouseData => self.open_house_data.clone().into(),
            Field::AssociationFee => self.association_fee.into(),
            Field::AssociationFeeFrequency => self.association_fee_frequency.clone().into(),
            Field::SpaYn => self.spa_yn.into(),
            Field::WaterfrontYn => self.waterfront_yn.into(),
            Field::ViewYn => self.view_yn.into(),
            Field::WaterviewFlag => self.waterview_flag.into(),
            Field::PropertyAttachedYn => self.property_attached_yn.into(),
            Field::LenderOwned => self.lender_owned.into(),
            Field::AvailableNow => self.available_now.into(),
            Field::SeniorCommunityYn => self.senior_community_yn.into(),
            Field::OutdoorSpace => self.outdoor_space.into(),
            Field::DprFlag => self.dpr_flag.into(),
            Field::CoolingYn => self.cooling_yn.into(),
            Field::Address => Value::Text(self.composite_address()),
        }
    }

    /// The listing's position, when both coordinates are present.
    #[must_use]
    pub const fn position(&self) -> Option<crate::geo::GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(crate::geo::GeoPoint::new(lat, lon)),
            _ => None,
        }
    }

    /// Derived composite address: street number, street name, a literal
    /// comma, and city, non-null parts joined with spaces, then trimmed.
    #[must_use]
    pub fn composite_address(&self) -> String {
        let parts = [
            self.street_number.as_deref(),
            self.street_name.as_deref(),
            Some(","),
            self.city.as_deref(),
        ];

        parts
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}
