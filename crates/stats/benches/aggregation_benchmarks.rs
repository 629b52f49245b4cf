use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use billsplit_bills::{Bill, BillDate, Category, NewBill, Payer};
use billsplit_core::{Amount, BillId};
use billsplit_stats::{ReportFilter, StatisticsReport, by_category, by_day, summarize};
use chrono::NaiveDate;

fn snapshot(size: usize) -> Vec<Bill> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..size)
        .map(|i| {
            let category = Category::all()[i % Category::all().len()].id;
            let paid_by = if i % 3 == 0 { Payer::Partner2 } else { Payer::Partner1 };
            let day = start + chrono::Days::new((i % 365) as u64);
            Bill::new(
                BillId::from_sequence(i as u64 + 1),
                NewBill {
                    category,
                    amount: Amount::from_minor(100 + (i as i64 * 37) % 10_000),
                    description: format!("bill {i}"),
                    date: BillDate::from_date(day),
                    paid_by,
                },
            )
        })
        .collect()
}

fn bench_aggregations(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregations");

    for size in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let bills = snapshot(*size);

        group.bench_with_input(BenchmarkId::new("summarize", size), &bills, |b, bills| {
            b.iter(|| black_box(summarize(bills)));
        });
        group.bench_with_input(BenchmarkId::new("by_category", size), &bills, |b, bills| {
            b.iter(|| black_box(by_category(bills)));
        });
        group.bench_with_input(BenchmarkId::new("by_day", size), &bills, |b, bills| {
            b.iter(|| black_box(by_day(bills)));
        });
    }

    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics_report");
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    for size in [1_000, 10_000].iter() {
        let bills = snapshot(*size);
        group.bench_with_input(BenchmarkId::new("build_all", size), &bills, |b, bills| {
            b.iter(|| {
                black_box(StatisticsReport::build(
                    bills,
                    &ReportFilter::everything(),
                    today,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregations, bench_full_report);
criterion_main!(benches);
