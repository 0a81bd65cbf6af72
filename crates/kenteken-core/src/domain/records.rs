//! RDW open-data record shapes.
//!
//! Field names mirror the upstream dataset columns verbatim. Every field
//! except the plate itself is optional: absence means "unknown", not
//! "empty". Unknown upstream columns are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// One row of the licensed-vehicles collection (`m9d7-ebf2`).
/// At most one registration record is expected for an active plate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub kenteken: String,
    pub merk: Option<String>,
    pub handelsbenaming: Option<String>,
    pub tellerstandoordeel: Option<String>,
    pub api_geimporteerd: Option<String>,
    pub voertuigsoort: Option<String>,
    pub eerste_kleur: Option<String>,
    pub tweede_kleur: Option<String>,
    pub aantal_cilinders: Option<String>,
    pub cilinderinhoud: Option<String>,
    pub massa_ledig_voertuig: Option<String>,
    pub toegestane_maximum_massa_voertuig: Option<String>,
    pub datum_eerste_toelating: Option<String>,
    pub datum_eerste_tenaamstelling_in_nederland: Option<String>,
    pub wam_verzekerd: Option<String>,
    pub aantal_deuren: Option<String>,
    pub europese_voertuigcategorie: Option<String>,
    pub taxi_indicator: Option<String>,
    pub zuinigheidsclassificatie: Option<String>,
    pub vervaldatum_apk: Option<String>,
    pub inrichting: Option<String>,
    pub aantal_zitplaatsen: Option<String>,
    pub massa_rijklaar: Option<String>,
    pub maximum_massa_trekken_ongeremd: Option<String>,
    pub maximum_trekken_massa_geremd: Option<String>,
    pub catalogusprijs: Option<String>,
    pub aantal_wielen: Option<String>,
    pub wielbasis: Option<String>,
    pub vermogen_massarijklaar: Option<String>,
    pub typegoedkeuringsnummer: Option<String>,
    pub variant: Option<String>,
    pub uitvoering: Option<String>,
    pub export_indicator: Option<String>,
    pub openstaande_terugroepactie_indicator: Option<String>,
    pub tenaamstellen_mogelijk: Option<String>,
    pub jaar_laatste_registratie_tellerstand: Option<String>,
}

/// One row of the fuel/emissions collection (`8ys7-d773`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelRecord {
    pub kenteken: Option<String>,
    pub brandstof_volgnummer: Option<String>,
    pub brandstof_omschrijving: Option<String>,
    pub brandstofverbruik_buiten: Option<String>,
    pub brandstofverbruik_gecombineerd: Option<String>,
    pub brandstofverbruik_stad: Option<String>,
    pub co2_uitstoot_gecombineerd: Option<String>,
    pub geluidsniveau_rijdend: Option<String>,
    pub geluidsniveau_stationair: Option<String>,
    pub emissiecode_omschrijving: Option<String>,
    pub milieuklasse_eg_goedkeuring_licht: Option<String>,
    pub nettomaximumvermogen: Option<String>,
    pub toerental_geluidsniveau: Option<String>,
    pub uitlaatemissieniveau: Option<String>,
}

/// One row of the axles collection (`3huj-srit`). A vehicle has zero or
/// more of these; upstream axle numbering order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxleRecord {
    pub kenteken: Option<String>,
    pub as_nummer: Option<String>,
    pub aantal_assen: Option<String>,
    pub spoorbreedte: Option<String>,
    pub wettelijk_toegestane_maximum_aslast: Option<String>,
    pub technisch_toegestane_maximum_aslast: Option<String>,
}

/// The merged result of one lookup across the three collections. This is
/// the value type stored in the response cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleData {
    pub vehicle: Option<VehicleRecord>,
    pub fuel: Option<FuelRecord>,
    pub axles: Vec<AxleRecord>,
}
