// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};
use topsnack::application::port::{HostBinding, LayoutStatus, Placement};
use topsnack::diagnostics::DiagnosticsHandle;
use topsnack::domain::snackbar::{OwnerId, Style};
use topsnack::ui::snackbar::{Banner, Scheduler, SchedulerSettings};

/// Host that accepts everything and keeps no state.
struct NullHost {
    attached: Option<u64>,
}

impl HostBinding for NullHost {
    fn is_owner_valid(&self, _owner: OwnerId) -> bool {
        true
    }

    fn attach(&mut self, banner: &Banner, _placement: Placement) -> bool {
        self.attached = Some(banner.id().raw());
        true
    }

    fn is_attached(&self, banner: &Banner) -> bool {
        self.attached == Some(banner.id().raw())
    }

    fn request_layout(&mut self, _banner: &Banner) -> LayoutStatus {
        LayoutStatus::Ready
    }

    fn detach(&mut self, _banner: &Banner) {
        self.attached = None;
    }
}

fn drain_queue(count: usize) -> usize {
    let mut scheduler = Scheduler::new(
        NullHost { attached: None },
        SchedulerSettings::default(),
        DiagnosticsHandle::disabled(),
    );
    let owner = OwnerId::new(1);
    let start = Instant::now();
    for i in 0..count {
        scheduler.enqueue(Banner::text(owner, format!("banner {i}"), Style::info()), start);
    }

    let mut dispatched = 0;
    while let Some(deadline) = scheduler.next_deadline() {
        dispatched += scheduler.run_due(deadline);
    }
    dispatched
}

fn scheduler_throughput_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler_throughput");
    group.measurement_time(Duration::from_secs(5));

    for count in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("drain_queue", count), &count, |b, &count| {
            b.iter(|| black_box(drain_queue(black_box(count))));
        });
    }

    group.bench_function("cancel_for_owner_1000", |b| {
        b.iter(|| {
            let mut scheduler = Scheduler::new(
                NullHost { attached: None },
                SchedulerSettings::default(),
                DiagnosticsHandle::disabled(),
            );
            let owner = OwnerId::new(2);
            let now = Instant::now();
            for i in 0..1000 {
                scheduler.enqueue(Banner::text(owner, format!("banner {i}"), Style::info()), now);
            }
            scheduler.clear_owner(owner, now);
            black_box(scheduler.queue_len())
        });
    });

    group.finish();
}

criterion_group!(benches, scheduler_throughput_benchmark);
criterion_main!(benches);
