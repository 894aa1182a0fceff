use crate::models::{
    activity::Activity,
    generation::{GeneratedItinerary, GenerationRequest, Preferences, Weather},
};
use log::debug;

const DEFAULT_CATEGORY_WEIGHT: i64 = 25;
const INDOOR_BONUS: f64 = 1.5;
const MAX_ACTIVITIES_PER_DAY: usize = 5;

/// Longest trip the engine will plan. Every requested day becomes a bucket in the
/// response, so the count has to be bounded before anything is allocated.
pub const MAX_DAYS_COUNT: i64 = 365;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("days must be between 1 and {max}, got {days_count}", max = MAX_DAYS_COUNT)]
    InvalidArgument { days_count: i64 },
}

#[derive(Debug, Clone)]
pub struct ItineraryGenerationConfig {
    pub default_weight: i64,
    pub indoor_bonus: f64,
    pub max_activities_per_day: usize,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_CATEGORY_WEIGHT,
            indoor_bonus: INDOOR_BONUS,
            max_activities_per_day: MAX_ACTIVITIES_PER_DAY,
        }
    }
}

/// An activity paired with its ranking score. Lives only for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub activity: &'a Activity,
    pub score: f64,
}

/// Activities assigned to one day, in allocation order.
#[derive(Debug, Clone)]
pub struct DayPlan<'a> {
    pub day_index: usize,
    pub activities: Vec<&'a Activity>,
}

/// Weighted ranking and round-robin day allocation over a catalog snapshot.
///
/// The generator is pure: it never mutates the activities it is given and keeps
/// no state between runs.
#[derive(Debug, Clone, Default)]
pub struct ItineraryGenerator {
    config: ItineraryGenerationConfig,
}

impl ItineraryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ItineraryGenerationConfig) -> Self {
        Self { config }
    }

    /// Build a day-partitioned itinerary from `activities`.
    ///
    /// Rejects a non-positive day count before doing any work. An empty or short
    /// candidate pool is not an error; it just yields short or empty days.
    pub fn generate_itinerary(
        &self,
        activities: &[Activity],
        request: &GenerationRequest,
    ) -> Result<GeneratedItinerary, AllocationError> {
        let days_count = validate_days_count(request.days_count)?;

        let eligible = filter_by_weather(activities, &request.weather);
        let ranked = self.rank_candidates(&eligible, &request.preferences);
        let plans = self.allocate(ranked, days_count);

        debug!(
            "Allocated {} of {} activities ({} eligible) across {} days",
            plans.iter().map(|plan| plan.activities.len()).sum::<usize>(),
            activities.len(),
            eligible.len(),
            days_count
        );

        Ok(assemble(plans))
    }

    /// Score for one activity: category weight times the indoor bonus.
    ///
    /// The bonus applies in every weather, so indoor venues are always mildly favoured.
    pub fn score_activity(&self, activity: &Activity, preferences: &Preferences) -> f64 {
        let weight = preferences
            .get(activity.category.as_str())
            .copied()
            .unwrap_or(self.config.default_weight);
        let indoor_bonus = if activity.indoor {
            self.config.indoor_bonus
        } else {
            1.0
        };

        weight as f64 * indoor_bonus
    }

    /// Score every candidate and sort by descending score.
    ///
    /// `sort_by` is stable, so equal scores keep catalog order.
    pub fn rank_candidates<'a>(
        &self,
        candidates: &[&'a Activity],
        preferences: &Preferences,
    ) -> Vec<ScoredCandidate<'a>> {
        let mut scored: Vec<ScoredCandidate<'a>> = candidates
            .iter()
            .map(|&activity| ScoredCandidate {
                activity,
                score: self.score_activity(activity, preferences),
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Cap the ranked list at `days_count * max_activities_per_day` and deal the
    /// survivors round-robin, so every day gets a first pick before any gets a second.
    pub fn allocate<'a>(
        &self,
        ranked: Vec<ScoredCandidate<'a>>,
        days_count: usize,
    ) -> Vec<DayPlan<'a>> {
        let mut plans: Vec<DayPlan<'a>> = (0..days_count)
            .map(|day_index| DayPlan {
                day_index,
                activities: Vec::new(),
            })
            .collect();

        if days_count == 0 {
            return plans;
        }

        let cap = days_count.saturating_mul(self.config.max_activities_per_day);
        for (rank, candidate) in ranked.into_iter().take(cap).enumerate() {
            plans[rank % days_count].activities.push(candidate.activity);
        }

        plans
    }
}

/// Check the requested day count and convert it to a bucket count.
pub fn validate_days_count(days_count: i64) -> Result<usize, AllocationError> {
    if !(1..=MAX_DAYS_COUNT).contains(&days_count) {
        return Err(AllocationError::InvalidArgument { days_count });
    }
    usize::try_from(days_count).map_err(|_| AllocationError::InvalidArgument { days_count })
}

/// Rainy weather keeps only indoor activities; anything else passes everything.
pub fn filter_by_weather<'a>(activities: &'a [Activity], weather: &Weather) -> Vec<&'a Activity> {
    activities
        .iter()
        .filter(|activity| !weather.is_rainy() || activity.indoor)
        .collect()
}

/// Turn day buckets into the caller-facing itinerary. Scores never leave the generator.
///
/// `plans` must already be in day order, as `allocate` builds them.
pub fn assemble(plans: Vec<DayPlan<'_>>) -> GeneratedItinerary {
    GeneratedItinerary {
        days: plans
            .into_iter()
            .map(|plan| plan.activities.into_iter().cloned().collect())
            .collect(),
    }
}

/// Run the generator with the default weights and caps.
pub fn generate_itinerary(
    activities: &[Activity],
    request: &GenerationRequest,
) -> Result<GeneratedItinerary, AllocationError> {
    ItineraryGenerator::new().generate_itinerary(activities, request)
}
