//! Survey step navigation
//!
//! A linear flow with one conditional fork, expressed as pure transition
//! functions. Each forward transition is taken only after the current step's
//! payload validated and persisted; there are no backward transitions.

use crate::contract::SurveyStep;

/// Activity code that routes the flow through the horticultural detail step
pub const ACTIVITY_FARMING: &str = "farming";
/// Activity code that continues the survey without the horticultural step
pub const ACTIVITY_FORESTRY: &str = "forestry";

/// Route after the screening step. The province answer is matched by exact
/// string equality against the configured target province; no case or
/// whitespace normalization.
pub fn after_screening(province: &str, target_province: &str) -> SurveyStep {
    if province == target_province {
        SurveyStep::Demographics
    } else {
        SurveyStep::NotTargeted
    }
}

/// Route after the demographics step and decide the carried-forward fork.
///
/// "farming" wins over "forestry" when both are selected. When neither is
/// selected the flow exits to home and no fork flag is recorded.
pub fn after_demographics(activities: &[String]) -> (SurveyStep, Option<bool>) {
    if activities.iter().any(|a| a == ACTIVITY_FARMING) {
        (SurveyStep::LandUse, Some(true))
    } else if activities.iter().any(|a| a == ACTIVITY_FORESTRY) {
        (SurveyStep::LandUse, Some(false))
    } else {
        (SurveyStep::Home, None)
    }
}

/// Route after the land-use step. A session that never recorded the fork
/// reads as not-farming.
pub fn after_land_use(farming_selected: bool) -> SurveyStep {
    if farming_selected {
        SurveyStep::HorticulturalDetail
    } else {
        SurveyStep::ThankYou
    }
}

/// Route after the horticultural detail step
pub fn after_horticultural_detail() -> SurveyStep {
    SurveyStep::ThankYou
}
