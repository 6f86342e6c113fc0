use std::thread;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nexus_queue_core_rs::{make, QueueConfig};

const BURST: usize = 1_024;

fn fill_drain_benchmark(c: &mut Criterion) {
  let mut group = c.benchmark_group("fill_drain");
  group.throughput(Throughput::Elements(BURST as u64));

  for (name, config) in [
    ("exclusive", QueueConfig::default().non_concurrent()),
    ("guarded", QueueConfig::default()),
  ] {
    group.bench_function(BenchmarkId::new(name, BURST), |b| {
      let mut queue = make::<u64>(Some(&config)).expect("queue");
      b.iter(|| {
        for i in 0..BURST as u64 {
          queue.enqueue(i);
        }
        while let Some(value) = queue.dequeue() {
          criterion::black_box(value);
        }
      });
    });
  }
  group.finish();
}

fn contended_benchmark(c: &mut Criterion) {
  let mut group = c.benchmark_group("contended");
  let per_writer = 10_000;

  for writers in [1usize, 2, 4] {
    group.throughput(Throughput::Elements((writers * per_writer) as u64));
    group.bench_function(BenchmarkId::new("guarded", writers), |b| {
      b.iter_custom(|iters| {
        let mut total = Duration::ZERO;
        for _ in 0..iters {
          let queue = make::<usize>(None).expect("queue").into_guarded().expect("guarded");
          let start = Instant::now();
          let handles = (0..writers)
            .map(|_| {
              let queue = queue.clone();
              thread::spawn(move || {
                for i in 0..per_writer {
                  queue.enqueue(i);
                }
              })
            })
            .collect::<Vec<_>>();
          let mut drained = 0;
          while drained < writers * per_writer {
            match queue.dequeue() {
              Some(_) => drained += 1,
              None => thread::yield_now(),
            }
          }
          for handle in handles {
            handle.join().expect("writer");
          }
          total += start.elapsed();
        }
        total
      })
    });
  }
  group.finish();
}

criterion_group!(benches, fill_drain_benchmark, contended_benchmark);
criterion_main!(benches);
