use convert_case::{Case, Casing};
use std::collections::BTreeMap;

///
/// Static label table for listing schema fields.
///
/// Keys are the upstream feed's field identifiers. Fields absent from the
/// table get a derived label (see `FieldCatalog::label`).
///

const LABELS: &[(&str, &str)] = &[
    ("ListingKey", "ListingKey"),
    ("ListingId", "MLS#"),
    ("ModificationTimestamp", "Last Updated"),
    ("CreationTimestamp", "Date Of Listings Creation"),
    ("StatusChangeTimestamp", "Status Change Date"),
    ("CloseDate", "Close Date"),
    ("PurchaseContractDate", "Date Under Contract"),
    ("ListingContractDate", "Listing agreement date"),
    ("OriginalEntryTimestamp", "List Date"),
    ("OffMarketDate", "Off Market Date"),
    ("StandardStatus", "Status"),
    ("MlsStatus", "MLS Status"),
    ("PropertyType", "Listing Type"),
    ("PropertySubType", "Property Type"),
    ("BusinessType", "Business Type"),
    ("ListPrice", "List Price"),
    ("OriginalListPrice", "Original List Price"),
    ("ClosePrice", "Sold Price"),
    ("PublicRemarks", "Description"),
    ("PrivateRemarks", "Private Remarks"),
    ("Disclosures", "Disclosures"),
    ("ShowingInstructions", "Showing Instructions"),
    ("UnparsedAddress", "Full Address"),
    ("StreetNumber", "Street number"),
    ("StreetDirPrefix", "Street prefix"),
    ("StreetName", "Street name"),
    ("StreetDirSuffix", "Street suffix"),
    ("StreetNumberNumeric", "Numeric street #"),
    ("UnitNumber", "Unit or Apt #"),
    ("EntryLevel", "Unit Level"),
    ("EntryLocation", "Unit Placement"),
    ("City", "City"),
    ("StateOrProvince", "State"),
    ("PostalCode", "Postal code"),
    ("PostalCodePlus4", "Fill Zip Code"),
    ("CountyOrParish", "County"),
    ("Country", "Country code"),
    ("MLSAreaMajor", "Area"),
    ("MLSAreaMinor", "Neighborhood"),
    ("SubdivisionName", "Subdivision"),
    ("Latitude", "Latitude"),
    ("Longitude", "Longitude"),
    ("Coordinates", "Geo point"),
    ("BedroomsTotal", "Bedrooms"),
    ("BathroomsTotalInteger", "Total baths"),
    ("BathroomsFull", "Full baths"),
    ("BathroomsHalf", "Half baths"),
    ("LivingArea", "Living Area"),
    ("AboveGradeFinishedArea", "Living Area Above Grade"),
    ("BelowGradeFinishedArea", "Living Area Below Grade"),
    ("LivingAreaUnits", "Living Area Units"),
    ("BuildingAreaTotal", "Building Area"),
    ("LotSizeAcres", "Lot size (acres)"),
    ("LotSizeSquareFeet", "Lot size (sq ft)"),
    ("LotSizeArea", "Lot size"),
    ("YearBuilt", "Year built"),
    ("YearBuiltEffective", "Effective year built"),
    ("YearBuiltDetails", "Notes on year built"),
    ("StructureType", "Structure type"),
    ("ArchitecturalStyle", "Style"),
    ("StoriesTotal", "Number of stories"),
    ("Levels", "Levels description"),
    ("PropertyAttachedYN", "Property Attached"),
    ("AttachedGarageYN", "Garage Attached"),
    ("Basement", "Basement details"),
    ("MLSPIN_MARKET_TIME_PROPERTY", "Days on market"),
    ("PropertyCondition", "Property Condition"),
    ("MLSPIN_COMPLEX_COMPLET", "Complex Complete"),
    ("MLSPIN_UNIT_BUILDING", "Unit building ID"),
    ("MLSPIN_COLOR", "Exterior color"),
    ("HomeWarrantyYN", "Home warranty"),
    ("ConstructionMaterials", "Materials used"),
    ("FoundationDetails", "Foundation type"),
    ("FoundationArea", "Foundation area"),
    ("Roof", "Roof"),
    ("Heating", "Heating system"),
    ("Cooling", "Cooling system"),
    ("Utilities", "Utilities"),
    ("Sewer", "Sewer type"),
    ("WaterSource", "Water source"),
    ("Electric", "Electric system"),
    ("ElectricOnPropertyYN", "Electricity on property?"),
    ("MLSPIN_COOLING_UNITS", "Number of cooling units"),
    ("MLSPIN_COOLING_ZONES", "Cooling zones"),
    ("MLSPIN_HEAT_ZONES", "Heat zones"),
    ("MLSPIN_HEAT_UNITS", "Heating units"),
    ("MLSPIN_HOT_WATER", "Hot water type"),
    ("MLSPIN_INSULATION_FEATUR", "Insulation details"),
    ("WaterSewerExpense", "Water/sewer expense"),
    ("ElectricExpense", "Electric expense"),
    ("InsuranceExpense", "Insurance expense"),
    ("InteriorFeatures", "Interior notes"),
    ("Flooring", "Flooring types"),
    ("Appliances", "Appliances"),
    ("FireplaceFeatures", "Fireplace features"),
    ("FireplacesTotal", "Fireplace count"),
    ("FireplaceYN", "Fireplace present?"),
    ("RoomsTotal", "Number of rooms"),
    ("WindowFeatures", "Window details"),
    ("DoorFeatures", "Door details"),
    ("LaundryFeatures", "Laundry notes"),
    ("SecurityFeatures", "Security systems"),
    ("SpaYN", "Spa Present"),
    ("SpaFeatures", "Spa Features"),
    ("ExteriorFeatures", "Exterior details"),
    ("PatioAndPorchFeatures", "Patio/porch details"),
    ("LotFeatures", "Lot details"),
    ("RoadSurfaceType", "Road surface type"),
    ("RoadFrontageType", "Road frontage type"),
    ("RoadResponsibility", "Road Responsibilty"),
    ("FrontageLength", "Frontage length"),
    ("FrontageType", "Frontage type"),
    ("Fencing", "Fencing details"),
    ("OtherStructures", "Other structures"),
    ("OtherEquipment", "Other equipment"),
    ("PastureArea", "Pasture area"),
    ("CultivatedArea", "Cultivated area"),
    ("WaterfrontYN", "Waterfront"),
    ("WaterfrontFeatures", "Waterfront features"),
    ("View", "View description"),
    ("ViewYN", "Has View"),
    ("CommunityFeatures", "Community features"),
    ("MLSPIN_WATERVIEW_FLAG", "Water view?"),
    ("MLSPIN_WATERVIEW_FEATUF", "Water view features"),
    ("GreenIndoorAirQuality", "Green air quality"),
    ("GreenEnergyGeneration", "Green energy generation"),
    ("HorseYN", "Horse property?"),
    ("HorseAmenities", "Horse amenities"),
    ("GarageSpaces", "Garage spaces"),
    ("GarageYN", "Garage present?"),
    ("CoveredSpaces", "Covered parking spaces"),
    ("ParkingTotal", "Non-garage parking spaces"),
    ("ParkingFeatures", "Parking features"),
    ("CarportYN", "Carport present?"),
    ("AssociationYN", "HOA present?"),
    ("AssociationFee", "HOA fee"),
    ("AssociationFeeFrequency", "HOA fee frequency"),
    ("AssociationName", "HOA name"),
    ("AssociationAmenities", "HOA amenities"),
    ("AssociationFeeIncludes", "HOA fee includes"),
    ("MLSPIN_OPTIONAL_FEE", "Optional HOA fee"),
    ("MLSPIN_OPT_FEE_INCLUDES", "Optional HOA fee includes"),
    ("MLSPIN_REQD_OWN_ASSOCI", "Ownership required?"),
    ("MLSPIN_NO_UNITS_OWNER", "Owner-occupied units"),
    ("MLSPIN_DPR_Flag", "Down payment resource eligible?"),
    ("MLSPIN_LENDER_OWNED", "Foreclosure"),
    ("GrossIncome", "Gross income"),
    ("GrossScheduledIncome", "Scheduled income"),
    ("NetOperatingIncome", "Net operating income"),
    ("OperatingExpense", "Operating expenses"),
    ("TotalActualRent", "Actual rent"),
    ("MLSPIN_SELLER_DISCOUNT", "Seller discount points"),
    ("FinancialDataSource", "Financial data source"),
    ("CurrentFinancing", "Current financing"),
    ("DevelopmentStatus", "Development status"),
    ("ExistingLeaseType", "Lease type"),
    ("AvailabilityDate", "Availability date"),
    ("MLSPIN_AvailableNow", "Available now?"),
    ("LeaseTerm", "Lease term"),
    ("RentIncludes", "Rent includes"),
    ("MLSPIN_SEC_DEPOSIT", "Security deposit"),
    ("MLSPIN_DEPOSIT_REQD", "Deposit required?"),
    ("MLSPIN_INSURANCE_REQD", "Insurance required?"),
    ("MLSPIN_LAST_MON_REQD", "Last month required?"),
    ("MLSPIN_FIRST_MON_REQD", "First month required?"),
    ("MLSPIN_REFERENCES_REQD", "References required?"),
    ("ElementarySchool", "Elementary school"),
    ("MiddleOrJuniorSchool", "Middle/junior school"),
    ("HighSchool", "High school"),
    ("SchoolDistrict", "School district"),
    ("Media", "Media assets"),
    ("PhotosCount", "Photo count"),
    ("VirtualTourURLUnbranded", "Unbranded tour URL"),
    ("VirtualTourURLBranded", "Branded tour URL"),
    ("ListAgentMlsId", "Listing agent ID"),
    ("BuyerAgentMlsId", "Buyer agent ID"),
    ("ListOfficeMlsId", "Listing office ID"),
    ("BuyerOfficeMlsId", "Buyer office ID"),
    ("MLSPIN_MAIN_SO", "Selling office ID"),
    ("MLSPIN_MAIN_LO", "Listing office ID"),
    ("MLSPIN_MSE", "Selling agent ID"),
    ("MLSPIN_MGF", "Buyer office ID"),
    ("MLSPIN_DEQE", "Buyer agent ID"),
    ("MLSPIN_SOLD_VS_RENT", "Sold or rented"),
    ("MLSPIN_TEAM_MEMBER", "Team member IDs"),
    ("OfficeRemarks", "Private Office Remarks"),
    ("BuyerAgencyCompensation", "Buyer compensation"),
    ("MLSPIN_BUYER_COMP_OFFE", "Buyer comp offered?"),
    ("MLSPIN_SHOWINGS_DEFERR", "Showings deferral date"),
    ("MLSPIN_ALERT_COMMENTS", "Alert comments"),
    ("MLSPIN_DISCLOSURE", "Disclosure info"),
    ("MLSPIN_COMP_BASED_ON", "Comp based on"),
    ("ListingExpirationDate", "Listing expiration"),
    ("TaxMapNumber", "Tax map number"),
    ("TaxBookNumber", "Tax book"),
    ("TaxBlock", "Tax block"),
    ("TaxLot", "Tax lot"),
    ("ParcelNumber", "Parcel number"),
    ("Zoning", "Zoning code"),
    ("ZoningDescription", "Zoning description"),
    ("MLSPIN_MASTER_PAGE", "Master deed page"),
    ("MLSPIN_MASTER_BOOK", "Master deed book"),
    ("MLSPIN_PAGE", "Deed page"),
    ("MLSPIN_SEWAGE_DISTRICT", "Sewage district"),
    ("ListAgentData", "Listing agent JSON"),
    ("ListOfficeData", "Listing office JSON"),
    ("BuyerAgentData", "Buyer agent JSON"),
    ("BuyerOfficeData", "Buyer office JSON"),
    ("OpenHouseData", "Open house JSON"),
    ("AdditionalData", "Extra data"),
];

///
/// Per-field admin notes.
///
/// Notes containing "visible to Admin Only" drive the visibility flag
/// consumed by the rendering layer.
///

const NOTES: &[(&str, &str)] = &[
    (
        "BusinessType",
        "Used as PropertySubType when Property Type Business Opportunity is selected",
    ),
    ("PrivateRemarks", "This field should be visible to Admin Only"),
    (
        "ShowingInstructions",
        "This field should be visible to Admin Only",
    ),
    ("EntryLevel", "Add as a filter in the modal"),
    ("LotSizeSquareFeet", "Add as filter in modal"),
    ("StructureType", "Add as dynamic filter in modal"),
    ("ArchitecturalStyle", "Add as dynamic filter in modal"),
    ("PropertyAttachedYN", "Add a filter in the modal"),
    ("SpaYN", "Add as checkbox in the filters modal"),
    ("WaterfrontYN", "Add as checkbox in the filters modal"),
    ("ViewYN", "Add as checkbox in the filters modal"),
    ("MLSPIN_WATERVIEW_FLAG", "Add as checkbox in the filters modal"),
    ("GarageSpaces", "Add as filter in the modal"),
    ("ParkingTotal", "Add as filter in the modal"),
    ("MLSPIN_LENDER_OWNED", "Add as checkbox in the filters modal"),
    (
        "MLSPIN_AvailableNow",
        "Add as checkbox in the filters modal next to the date-available filter",
    ),
    ("OfficeRemarks", "This field should be visible to Admin Only"),
    (
        "BuyerAgencyCompensation",
        "This field should be visible to Admin Only",
    ),
    (
        "MLSPIN_BUYER_COMP_OFFE",
        "This field should be visible to Admin Only",
    ),
    (
        "MLSPIN_SHOWINGS_DEFERR",
        "This field should be visible to Admin Only",
    ),
    (
        "MLSPIN_ALERT_COMMENTS",
        "This field should be visible to Admin Only",
    ),
    ("MLSPIN_DISCLOSURE", "This field should be visible to Admin Only"),
    (
        "MLSPIN_COMP_BASED_ON",
        "This field should be visible to Admin Only",
    ),
    (
        "ListingExpirationDate",
        "This field should be visible to Admin Only",
    ),
];

///
/// FieldCatalog
///
/// Read-only display metadata for listing schema fields: labels, admin
/// notes, and the admin-only visibility flag. Built once at startup and
/// injected into whatever needs it; never mutated afterwards.
///

#[derive(Clone, Debug)]
pub struct FieldCatalog {
    labels: BTreeMap<&'static str, &'static str>,
    notes: BTreeMap<&'static str, &'static str>,
}

impl FieldCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: LABELS.iter().copied().collect(),
            notes: NOTES.iter().copied().collect(),
        }
    }

    /// Display label for a field identifier.
    ///
    /// Unknown fields get a derived label: the vendor prefix and `YN`
    /// suffix are stripped and the remainder is title-cased.
    #[must_use]
    pub fn label(&self, field_id: &str) -> String {
        match self.labels.get(field_id) {
            Some(label) => (*label).to_string(),
            None => derive_label(field_id),
        }
    }

    /// Admin note for a field, or `""` when none exists.
    #[must_use]
    pub fn notes(&self, field_id: &str) -> &'static str {
        self.notes.get(field_id).copied().unwrap_or("")
    }

    /// Whether the field is restricted to admin screens.
    #[must_use]
    pub fn admin_only(&self, field_id: &str) -> bool {
        self.notes(field_id).contains("Admin Only")
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a human label from a raw field identifier.
fn derive_label(field_id: &str) -> String {
    let stripped = field_id.strip_prefix("MLSPIN_").unwrap_or(field_id);
    let stripped = stripped.strip_suffix("YN").unwrap_or(stripped);

    stripped.replace('_', " ").to_case(Case::Title)
}
