//! DTO to contract conversions

use crate::contract::{
    DemographicSubmission, HorticulturalSubmission, LandUseSubmission, Registration,
    ScreeningAnswers, SurveyStep, TenureAreas, User,
};
use super::dto::*;

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            surname: user.surname,
            email: user.email,
        }
    }
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            first_name: req.first_name,
            surname: req.surname,
            email: req.email,
            phone_number: req.phone_number,
            address: req.address,
            password: req.password,
            confirm_password: req.confirm_password,
        }
    }
}

impl From<ScreeningRequest> for ScreeningAnswers {
    fn from(req: ScreeningRequest) -> Self {
        Self {
            province: req.province,
            is_farmer: req.is_farmer,
        }
    }
}

impl From<DemographicRequest> for DemographicSubmission {
    fn from(req: DemographicRequest) -> Self {
        Self {
            registered_name: req.registered_name,
            province: req.province,
            district: req.district,
            municipality: req.municipality,
            agricultural_activities: req.agricultural_activity,
            other_agricultural_activity: req.other_agricultural_activity,
            farm_activities: req.farm_activity,
        }
    }
}

impl From<TenureAreasDto> for TenureAreas {
    fn from(dto: TenureAreasDto) -> Self {
        Self {
            own: dto.own,
            govt: dto.govt,
            traditional: dto.traditional,
            other: dto.other,
        }
    }
}

impl From<LandUseRequest> for LandUseSubmission {
    fn from(req: LandUseRequest) -> Self {
        Self {
            crops: req.crops.into(),
            pastures: req.pastures.into(),
            greenhouses: req.greenhouses.into(),
            natural_forest: req.natural_forest.into(),
            woodland: req.woodland.into(),
        }
    }
}

impl From<HorticulturalRequest> for HorticulturalSubmission {
    fn from(req: HorticulturalRequest) -> Self {
        Self {
            farming_practices: req.farming_practice,
            water_supplies: req.water_supply,
            irrigation_systems: req.irrigation_system,
        }
    }
}

impl From<SurveyStep> for NextStepResponse {
    fn from(step: SurveyStep) -> Self {
        Self {
            next_step: step.as_str().to_string(),
        }
    }
}
