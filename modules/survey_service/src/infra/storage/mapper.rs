//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Multi-select
//! answers are stored pipe-joined and split back on read; an empty column
//! reads as an empty selection. Option labels may contain commas
//! ("Draglines, quick-coupling lines"), so a comma separator would not
//! round-trip.

use crate::contract::{Demographic, HorticulturalDetail, LandUseSurvey, TenureAreas, User};
use super::entity;

const SELECTION_SEPARATOR: &str = "|";

fn join_selection(values: &[String]) -> String {
    values.join(SELECTION_SEPARATOR)
}

fn split_selection(joined: &str) -> Vec<String> {
    joined
        .split(SELECTION_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ===== User Conversions =====

impl From<entity::Model> for User {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            first_name: entity.first_name,
            surname: entity.surname,
            email: entity.email,
            phone_number: entity.phone_number,
            address: entity.address,
            password_hash: entity.password_hash,
            latitude: entity.latitude,
            longitude: entity.longitude,
            created_at: entity.created_at,
        }
    }
}

impl From<&User> for entity::ActiveModel {
    fn from(model: &User) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            username: Set(model.username.clone()),
            first_name: Set(model.first_name.clone()),
            surname: Set(model.surname.clone()),
            email: Set(model.email.clone()),
            phone_number: Set(model.phone_number.clone()),
            address: Set(model.address.clone()),
            password_hash: Set(model.password_hash.clone()),
            latitude: Set(model.latitude),
            longitude: Set(model.longitude),
            created_at: Set(model.created_at),
        }
    }
}

// ===== Demographic Conversions =====

impl From<entity::demographic::Model> for Demographic {
    fn from(entity: entity::demographic::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            registered_name: entity.registered_name,
            province: entity.province,
            district: entity.district,
            municipality: entity.municipality,
            agricultural_activities: split_selection(&entity.agricultural_activity),
            other_agricultural_activity: entity.other_agricultural_activity,
            farm_activities: split_selection(&entity.farm_activity),
            created_at: entity.created_at,
        }
    }
}

impl From<&Demographic> for entity::demographic::ActiveModel {
    fn from(model: &Demographic) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            user_id: Set(model.user_id),
            registered_name: Set(model.registered_name.clone()),
            province: Set(model.province.clone()),
            district: Set(model.district.clone()),
            municipality: Set(model.municipality.clone()),
            agricultural_activity: Set(join_selection(&model.agricultural_activities)),
            other_agricultural_activity: Set(model.other_agricultural_activity.clone()),
            farm_activity: Set(join_selection(&model.farm_activities)),
            created_at: Set(model.created_at),
        }
    }
}

// ===== Land-Use Survey Conversions =====

impl From<entity::land_use::Model> for LandUseSurvey {
    fn from(entity: entity::land_use::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            crops: TenureAreas {
                own: entity.crops_own,
                govt: entity.crops_govt,
                traditional: entity.crops_traditional,
                other: entity.crops_other,
            },
            pastures: TenureAreas {
                own: entity.pastures_own,
                govt: entity.pastures_govt,
                traditional: entity.pastures_traditional,
                other: entity.pastures_other,
            },
            greenhouses: TenureAreas {
                own: entity.greenhouses_own,
                govt: entity.greenhouses_govt,
                traditional: entity.greenhouses_traditional,
                other: entity.greenhouses_other,
            },
            natural_forest: TenureAreas {
                own: entity.natural_forest_own,
                govt: entity.natural_forest_govt,
                traditional: entity.natural_forest_traditional,
                other: entity.natural_forest_other,
            },
            woodland: TenureAreas {
                own: entity.woodland_own,
                govt: entity.woodland_govt,
                traditional: entity.woodland_traditional,
                other: entity.woodland_other,
            },
            created_at: entity.created_at,
        }
    }
}

impl From<&LandUseSurvey> for entity::land_use::ActiveModel {
    fn from(model: &LandUseSurvey) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            user_id: Set(model.user_id),
            crops_own: Set(model.crops.own),
            crops_govt: Set(model.crops.govt),
            crops_traditional: Set(model.crops.traditional),
            crops_other: Set(model.crops.other),
            pastures_own: Set(model.pastures.own),
            pastures_govt: Set(model.pastures.govt),
            pastures_traditional: Set(model.pastures.traditional),
            pastures_other: Set(model.pastures.other),
            greenhouses_own: Set(model.greenhouses.own),
            greenhouses_govt: Set(model.greenhouses.govt),
            greenhouses_traditional: Set(model.greenhouses.traditional),
            greenhouses_other: Set(model.greenhouses.other),
            natural_forest_own: Set(model.natural_forest.own),
            natural_forest_govt: Set(model.natural_forest.govt),
            natural_forest_traditional: Set(model.natural_forest.traditional),
            natural_forest_other: Set(model.natural_forest.other),
            woodland_own: Set(model.woodland.own),
            woodland_govt: Set(model.woodland.govt),
            woodland_traditional: Set(model.woodland.traditional),
            woodland_other: Set(model.woodland.other),
            created_at: Set(model.created_at),
        }
    }
}

// ===== Horticultural Detail Conversions =====

impl From<entity::horticultural_detail::Model> for HorticulturalDetail {
    fn from(entity: entity::horticultural_detail::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            farming_practices: split_selection(&entity.farming_practice),
            water_supplies: split_selection(&entity.water_supply),
            irrigation_systems: split_selection(&entity.irrigation_system),
            created_at: entity.created_at,
        }
    }
}

impl From<&HorticulturalDetail> for entity::horticultural_detail::ActiveModel {
    fn from(model: &HorticulturalDetail) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: Set(model.id),
            user_id: Set(model.user_id),
            farming_practice: Set(join_selection(&model.farming_practices)),
            water_supply: Set(join_selection(&model.water_supplies)),
            irrigation_system: Set(join_selection(&model.irrigation_systems)),
            created_at: Set(model.created_at),
        }
    }
}
