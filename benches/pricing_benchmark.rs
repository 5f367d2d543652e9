use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{thread_rng, Rng};

use hospitality_engine::{
    nights_between, resolve_nightly_price, MealPlan, MealPlanPricing, RateSeason,
    SeasonMatchPolicy,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// Build a season table covering a year in consecutive blocks of random
// length, the shape a venue with detailed seasonal pricing produces.
fn season_table(count: usize) -> Vec<RateSeason> {
    let mut rng = thread_rng();
    let mut seasons = Vec::with_capacity(count);
    let mut cursor = d(2025, 1, 1);
    for i in 0..count {
        let span = rng.gen_range(5..20);
        let end = cursor + chrono::Duration::days(span - 1);
        seasons.push(RateSeason {
            id: format!("season{i}"),
            rate_plan_id: "plan1".to_string(),
            season_name: format!("Season {i}"),
            start_date: cursor,
            end_date: end,
            base_price: rng.gen_range(80.0..300.0),
            currency: "EUR".to_string(),
            meal_plan_pricing: Some(MealPlanPricing {
                half_board: Some(rng.gen_range(100.0..350.0)),
                ..Default::default()
            }),
            minimum_stay: None,
            maximum_stay: None,
            closed_to_arrival: None,
            closed_to_departure: None,
            advance_purchase_days: None,
            cutoff_hours: None,
        });
        cursor = end + chrono::Duration::days(1);
    }
    seasons
}

pub fn pricing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stay_pricing");

    for season_count in [4, 16, 64].iter() {
        let seasons = season_table(*season_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(season_count),
            season_count,
            |b, _| {
                let mut rng = thread_rng();
                b.iter(|| {
                    let offset = rng.gen_range(0..300);
                    let check_in = d(2025, 1, 1) + chrono::Duration::days(offset);
                    let check_out = check_in + chrono::Duration::days(rng.gen_range(1..14));

                    let mut total = 0.0;
                    for night in nights_between(check_in, check_out) {
                        total += resolve_nightly_price(
                            &seasons,
                            night,
                            Some(MealPlan::HalfBoard),
                            100.0,
                            SeasonMatchPolicy::FirstMatchWins,
                        );
                    }
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, pricing_benchmark);
criterion_main!(benches);
