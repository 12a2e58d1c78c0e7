//! Luhn benchmarks.
//!
//! Run: `cargo bench -p luhn`
//!
//! This benchmarks:
//! - the fixed-width `u64` engine
//! - the text API at lengths either side of the fixed/chunked transition
//! - each forced engine on the same inputs
//! - the streaming accumulator

use core::hint::black_box;
use std::sync::Once;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use luhn::{CheckDigit, Luhn, LuhnForce, compute_check_digit, compute_check_digit_from_text_with, engine_for};

/// Digit-string lengths: card numbers, the u64 edge, chunk multiples, long tails.
const LENGTHS: [usize; 8] = [15, 19, 20, 36, 37, 64, 256, 4096];

fn make_digits(len: usize) -> String {
  (0..len)
    .map(|i| char::from(b'0' + ((i.strict_mul(7)).strict_add(i.strict_shr(3)) % 10) as u8))
    .collect()
}

/// Print engine selection once at benchmark start.
fn print_engine_info() {
  static ONCE: Once = Once::new();
  ONCE.call_once(|| {
    eprintln!("luhn engine selection (auto):");
    for len in LENGTHS {
      let text = make_digits(len);
      match engine_for(&text, LuhnForce::Auto) {
        Ok(engine) => eprintln!("  {len:>5} digits: {engine}"),
        Err(err) => eprintln!("  {len:>5} digits: {err}"),
      }
    }
  });
}

fn bench_fixed(c: &mut Criterion) {
  let mut group = c.benchmark_group("luhn/fixed");
  for value in [0u64, 37_828_224_631_000, 4_222_222_222_222_222, u64::MAX] {
    group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, &value| {
      b.iter(|| black_box(compute_check_digit(black_box(value))));
    });
  }
  group.finish();
}

fn bench_text(c: &mut Criterion) {
  print_engine_info();

  for force in LuhnForce::ALL {
    let mut group = c.benchmark_group(format!("luhn/text/{force}"));
    for len in LENGTHS {
      let text = make_digits(len);
      group.throughput(Throughput::Bytes(len as u64));
      group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
        b.iter(|| black_box(compute_check_digit_from_text_with(black_box(text), force)));
      });
    }
    group.finish();
  }
}

fn bench_stream(c: &mut Criterion) {
  let mut group = c.benchmark_group("luhn/stream");
  for len in LENGTHS {
    let text = make_digits(len);
    group.throughput(Throughput::Bytes(len as u64));
    group.bench_with_input(BenchmarkId::from_parameter(len), text.as_bytes(), |b, data| {
      b.iter(|| black_box(Luhn::check_digit(black_box(data))));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_fixed, bench_text, bench_stream);
criterion_main!(benches);
