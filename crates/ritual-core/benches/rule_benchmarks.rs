use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ritual_core::guard::RecurrenceGuard;
use ritual_core::materializer::Materializer;
use ritual_core::models::{FixedEventTemplate, TaskKind};
use ritual_core::rule::RecurrenceRule;

fn fixed_event(id: usize) -> FixedEventTemplate {
    FixedEventTemplate {
        id: format!("evt-{id}"),
        name: format!("Event {id}"),
        start_time: "09:00".to_string(),
        duration_minutes: 30,
        rule: RecurrenceRule::Weekdays { days: vec![1, 2, 3, 4, 5] },
        enabled: true,
    }
}

fn bench_rule_matching(c: &mut Criterion) {
    let rules = vec![
        RecurrenceRule::Weekdays { days: vec![1, 3, 5] },
        RecurrenceRule::IntervalDays { n: 3 },
        RecurrenceRule::NthWeekday { week: 2, weekday: 1 },
        RecurrenceRule::MonthlyDate { day: 15 },
    ];
    let date = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();

    c.bench_function("rule_matching_all_variants", |b| {
        b.iter(|| {
            for rule in &rules {
                black_box(rule.matches(black_box(date)));
            }
        })
    });
}

fn bench_materialization_pass(c: &mut Criterion) {
    let materializer = Materializer::new(chrono_tz::UTC);
    let life: Vec<FixedEventTemplate> = (0..100).map(fixed_event).collect();
    let date = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
    let guard = RecurrenceGuard::new();

    c.bench_function("materialize_100_fixed_events", |b| {
        b.iter(|| {
            let drafts = materializer.materialize(black_box(date), &life, &[], &guard);
            assert!(drafts.iter().all(|d| d.kind == TaskKind::FixedEvent));
            black_box(drafts)
        })
    });
}

criterion_group!(benches, bench_rule_matching, bench_materialization_pass);
criterion_main!(benches);
