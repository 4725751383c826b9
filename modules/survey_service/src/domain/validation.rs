//! Per-step payload validation
//!
//! Each step has an explicit validator producing either success or a
//! structured list of field errors. Selection values are checked for
//! membership in their fixed option set; the province/district/municipality
//! hierarchy is NOT cross-validated (each level is checked independently).

use crate::contract::{
    DemographicSubmission, FieldError, HorticulturalSubmission, Registration, ScreeningAnswers,
    SurveyError,
};

/// Province codes
pub const PROVINCES: &[&str] = &["wc", "ec", "nc", "gp", "kzn", "fs", "lp", "mp", "nw"];

/// District/metropolitan municipality codes
pub const DISTRICTS: &[&str] = &[
    "cape_town",
    "cape_winelands",
    "central_karoo",
    "eden",
    "overberg",
    "west_coast",
];

/// Local municipality codes
pub const MUNICIPALITIES: &[&str] = &[
    // Cape Winelands District
    "breede_valley",
    "drakenstein",
    "langeberg",
    "stellenbosch",
    "witzenberg",
    // Central Karoo District
    "beaufort_west",
    "laingsburg",
    "prince_albert",
    // Garden Route District
    "bitou",
    "george",
    "knysna",
    "mossel_bay",
    "oudtshoorn",
    // Overberg District
    "cape_agulhas",
    "overstrand",
    "swellendam",
    "theewaterskloof",
    // West Coast District
    "bergrivier",
    "cederberg",
    "matzikama",
    "saldanha_bay",
    "swartland",
];

/// Agricultural activity codes for the demographics multi-select
pub const AGRICULTURAL_ACTIVITIES: &[&str] = &[
    "farming",
    "services",
    "wild_farming",
    "hunting",
    "organic_fertiliser",
    "forestry",
    "fishing",
    "fish_farming",
    "processing",
    "other",
];

/// Farm activity codes for the demographics multi-select
pub const FARM_ACTIVITIES: &[&str] = &[
    "field_crops",
    "vegetables",
    "flowers",
    "fruits",
    "tree_nuts",
    "spices",
    "honey",
    "animal_farming",
    "seed",
];

/// Farming practice options for the horticultural detail step
pub const FARMING_PRACTICES: &[&str] = &[
    "Irrigation",
    "Dry land/rain-fed",
    "Both irrigation and dry land/rain-fed",
];

/// Water supply options for the horticultural detail step
pub const WATER_SUPPLIES: &[&str] = &[
    "Municipal water supply",
    "Groundwater/boreholes",
    "Both surface water and groundwater",
    "River",
    "Dam",
    "Water boards/schemes",
    "Treated wastewater",
    "Rainwater harvesting",
];

/// Irrigation system options for the horticultural detail step
pub const IRRIGATION_SYSTEMS: &[&str] = &[
    "Sprinklers",
    "Micro-irrigation",
    "Drip irrigation",
    "Pivots",
    "Canals",
    "Flood irrigation",
    "Draglines, quick-coupling lines",
    "Other",
];

/// Declaration value a registrant must submit
pub const DECLARATION_AGREE: &str = "agree";

fn require(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "This field is required"));
    }
}

fn check_members(errors: &mut Vec<FieldError>, field: &str, values: &[String], options: &[&str]) {
    for value in values {
        if !options.contains(&value.as_str()) {
            errors.push(FieldError::new(
                field,
                format!("'{}' is not a valid choice", value),
            ));
        }
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), SurveyError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SurveyError::Validation { errors })
    }
}

/// Minimal structural email check: something@something with no whitespace
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Validate registration input, including the declaration checkbox
pub fn validate_registration(
    registration: &Registration,
    declaration: &str,
) -> Result<(), SurveyError> {
    let mut errors = Vec::new();

    require(&mut errors, "first_name", &registration.first_name);
    require(&mut errors, "surname", &registration.surname);
    require(&mut errors, "email", &registration.email);
    require(&mut errors, "phone_number", &registration.phone_number);
    require(&mut errors, "address", &registration.address);

    if registration.password.is_empty() {
        errors.push(FieldError::new("password", "This field is required"));
    } else if registration.password != registration.confirm_password {
        errors.push(FieldError::new("confirm_password", "Passwords do not match"));
    }

    if !registration.email.trim().is_empty() && !is_plausible_email(&registration.email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }

    if declaration != DECLARATION_AGREE {
        errors.push(FieldError::new(
            "declaration",
            "You must agree to the declaration to register",
        ));
    }

    finish(errors)
}

/// Validate screening answers; both fields are required
pub fn validate_screening(answers: &ScreeningAnswers) -> Result<(), SurveyError> {
    let mut errors = Vec::new();
    require(&mut errors, "province", &answers.province);
    require(&mut errors, "is_farmer", &answers.is_farmer);
    finish(errors)
}

/// Validate a demographics submission against the fixed code lists
pub fn validate_demographics(submission: &DemographicSubmission) -> Result<(), SurveyError> {
    let mut errors = Vec::new();

    require(&mut errors, "registered_name", &submission.registered_name);

    if !PROVINCES.contains(&submission.province.as_str()) {
        errors.push(FieldError::new("province", "Not a valid province"));
    }
    if !DISTRICTS.contains(&submission.district.as_str()) {
        errors.push(FieldError::new("district", "Not a valid district"));
    }
    if !MUNICIPALITIES.contains(&submission.municipality.as_str()) {
        errors.push(FieldError::new("municipality", "Not a valid municipality"));
    }

    check_members(
        &mut errors,
        "agricultural_activities",
        &submission.agricultural_activities,
        AGRICULTURAL_ACTIVITIES,
    );
    check_members(
        &mut errors,
        "farm_activities",
        &submission.farm_activities,
        FARM_ACTIVITIES,
    );

    finish(errors)
}

/// Validate a horticultural detail submission against its option sets
pub fn validate_horticultural_detail(
    submission: &HorticulturalSubmission,
) -> Result<(), SurveyError> {
    let mut errors = Vec::new();

    check_members(
        &mut errors,
        "farming_practices",
        &submission.farming_practices,
        FARMING_PRACTICES,
    );
    check_members(
        &mut errors,
        "water_supplies",
        &submission.water_supplies,
        WATER_SUPPLIES,
    );
    check_members(
        &mut errors,
        "irrigation_systems",
        &submission.irrigation_systems,
        IRRIGATION_SYSTEMS,
    );

    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            first_name: "John".to_string(),
            surname: "Smith".to_string(),
            email: "john@example.com".to_string(),
            phone_number: "0211234567".to_string(),
            address: "1 Farm Road".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(validate_registration(&registration(), DECLARATION_AGREE).is_ok());
    }

    #[test]
    fn declaration_must_be_agree() {
        let result = validate_registration(&registration(), "disagree");
        let Err(SurveyError::Validation { errors }) = result else {
            panic!("expected validation error");
        };
        assert!(errors.iter().any(|e| e.field == "declaration"));
    }

    #[test]
    fn password_mismatch_is_reported_on_confirm_field() {
        let mut reg = registration();
        reg.confirm_password = "different".to_string();
        let Err(SurveyError::Validation { errors }) =
            validate_registration(&reg, DECLARATION_AGREE)
        else {
            panic!("expected validation error");
        };
        assert!(errors.iter().any(|e| e.field == "confirm_password"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["not-an-email", "a@b", "a b@example.com", "@example.com"] {
            let mut reg = registration();
            reg.email = bad.to_string();
            assert!(
                validate_registration(&reg, DECLARATION_AGREE).is_err(),
                "accepted: {bad}"
            );
        }
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let reg = Registration {
            first_name: String::new(),
            surname: String::new(),
            email: String::new(),
            phone_number: String::new(),
            address: String::new(),
            password: String::new(),
            confirm_password: String::new(),
        };
        let Err(SurveyError::Validation { errors }) =
            validate_registration(&reg, DECLARATION_AGREE)
        else {
            panic!("expected validation error");
        };
        assert!(errors.len() >= 6);
    }

    fn demographics() -> DemographicSubmission {
        DemographicSubmission {
            registered_name: "Green Acres Pty Ltd".to_string(),
            province: "wc".to_string(),
            district: "cape_winelands".to_string(),
            municipality: "stellenbosch".to_string(),
            agricultural_activities: vec!["farming".to_string()],
            other_agricultural_activity: None,
            farm_activities: vec!["vegetables".to_string(), "fruits".to_string()],
        }
    }

    #[test]
    fn valid_demographics_passes() {
        assert!(validate_demographics(&demographics()).is_ok());
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let mut sub = demographics();
        sub.province = "narnia".to_string();
        sub.agricultural_activities.push("mining".to_string());
        let Err(SurveyError::Validation { errors }) = validate_demographics(&sub) else {
            panic!("expected validation error");
        };
        assert!(errors.iter().any(|e| e.field == "province"));
        assert!(errors.iter().any(|e| e.field == "agricultural_activities"));
    }

    #[test]
    fn hierarchy_is_not_cross_validated() {
        // A Central Karoo municipality under the Cape Winelands district is
        // accepted; each level is only checked against its own list
        let mut sub = demographics();
        sub.municipality = "laingsburg".to_string();
        assert!(validate_demographics(&sub).is_ok());
    }

    #[test]
    fn empty_multi_selects_are_allowed() {
        let mut sub = demographics();
        sub.agricultural_activities.clear();
        sub.farm_activities.clear();
        assert!(validate_demographics(&sub).is_ok());
    }

    #[test]
    fn horticultural_options_are_checked() {
        let sub = HorticulturalSubmission {
            farming_practices: vec!["Irrigation".to_string()],
            water_supplies: vec!["River".to_string(), "Dam".to_string()],
            irrigation_systems: vec!["Sprinklers".to_string()],
        };
        assert!(validate_horticultural_detail(&sub).is_ok());

        let bad = HorticulturalSubmission {
            farming_practices: vec!["Hydroponics".to_string()],
            ..Default::default()
        };
        assert!(validate_horticultural_detail(&bad).is_err());
    }
}
