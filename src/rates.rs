// Seasonal price resolution for a single night.

use chrono::NaiveDate;

use crate::model::{MealPlan, RateSeason};

// Seasons may overlap in storage. The policy decides which one prices a
// night; the legacy tariff tables rely on stored order, so FirstMatchWins
// is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeasonMatchPolicy {
    // First season in stored order whose bounds contain the date.
    #[default]
    FirstMatchWins,
    // Season with the shortest date span containing the date; stored order
    // breaks ties.
    MostSpecificWins,
}

pub fn season_for_date(
    seasons: &[RateSeason],
    date: NaiveDate,
    policy: SeasonMatchPolicy,
) -> Option<&RateSeason> {
    match policy {
        SeasonMatchPolicy::FirstMatchWins => {
            seasons.iter().find(|season| season.contains(date))
        }
        SeasonMatchPolicy::MostSpecificWins => seasons
            .iter()
            .filter(|season| season.contains(date))
            .min_by_key(|season| (season.end_date - season.start_date).num_days()),
    }
}

// Nightly price for one date: the matched season's base price, replaced by
// the season's meal-plan override when one is requested and defined, or the
// room's base price when no season matches.
pub fn resolve_nightly_price(
    seasons: &[RateSeason],
    date: NaiveDate,
    meal_plan: Option<MealPlan>,
    base_price: f64,
    policy: SeasonMatchPolicy,
) -> f64 {
    match season_for_date(seasons, date, policy) {
        Some(season) => meal_plan
            .and_then(|plan| {
                season
                    .meal_plan_pricing
                    .as_ref()
                    .and_then(|pricing| pricing.price_for(plan))
            })
            .unwrap_or(season.base_price),
        None => base_price,
    }
}
