use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use gym_pricing::cli::ui::{breakdown_lines, render_plain};
use pricing_config::Config;
use pricing_core::{FixedClock, PricingService, PricingSession};
use pricing_domain::{BillingPeriod, DiscountInputs, DiscountTarget, PlanCatalog, PricingRules};

fn bench_breakdowns(c: &mut Criterion) {
    let catalog = PlanCatalog::standard();
    let rules = PricingRules::default();
    let period = BillingPeriod::new(31, 17).unwrap();
    let discounts = DiscountInputs::none()
        .with_flat(25.0)
        .with_percentage(10.0, DiscountTarget::Membership);

    c.bench_function("breakdown_full_catalog", |b| {
        b.iter(|| {
            for tier in catalog.tiers() {
                for count in [1, 2, 3, 6] {
                    let breakdown = PricingService::compute_breakdown(
                        tier,
                        &period,
                        black_box(count),
                        &discounts,
                        &rules,
                    )
                    .expect("breakdown");
                    black_box(breakdown);
                }
            }
        })
    });

    let session = PricingSession::with_period(catalog.clone(), rules.clone(), period, Some(50.0))
        .expect("session");
    c.bench_function("quote_and_render", |b| {
        b.iter(|| {
            let quote = session
                .quote(black_box(0), 1, DiscountInputs::none())
                .expect("quote");
            let text = render_plain(&breakdown_lines(&quote.breakdown, rules.card_fee_rate));
            black_box(text);
        })
    });
}

fn bench_session_start(c: &mut Criterion) {
    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    let config = Config::default();

    c.bench_function("session_start_default_config", |b| {
        b.iter_batched(
            || config.clone(),
            |config| {
                let session = PricingSession::start(
                    config.catalog(),
                    config.rules.clone(),
                    &clock,
                    config.saved_enrollment_discount,
                )
                .expect("session");
                black_box(session);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_breakdowns, bench_session_start);
criterion_main!(benches);
