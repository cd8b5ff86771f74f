// benches/view_bench.rs
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rawview::prelude::*;
use rawview::reinterp;
use std::hint::black_box;

// Only `age` is accessed; the neighbors give the record realistic padding.
#[allow(dead_code)]
#[repr(C)]
struct Telemetry {
    id: u32,
    age: i64,
    score: f64,
}

// Copying counterparts of the zero-copy conversions. They exist only here,
// to quantify what the aliasing versions save.
fn text_to_bytes_copying(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

fn bytes_to_text_copying(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn bench_text_to_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_to_bytes");

    for len in [32, 128, 512, 2048].iter() {
        let text = "X".repeat(*len);

        group.bench_with_input(BenchmarkId::new("copying", len), &text, |b, text| {
            b.iter(|| {
                let _ = black_box(text_to_bytes_copying(black_box(text)));
            });
        });

        group.bench_with_input(BenchmarkId::new("zero_copy", len), &text, |b, text| {
            b.iter(|| {
                let _ = black_box(reinterp::text_as_bytes(black_box(text)));
            });
        });
    }

    group.finish();
}

fn bench_bytes_to_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes_to_text");

    for len in [32, 128, 512, 2048].iter() {
        let bytes = vec![b'X'; *len];

        group.bench_with_input(BenchmarkId::new("copying", len), &bytes, |b, bytes| {
            b.iter(|| {
                let _ = black_box(bytes_to_text_copying(black_box(bytes)));
            });
        });

        group.bench_with_input(
            BenchmarkId::new("checked_zero_copy", len),
            &bytes,
            |b, bytes| {
                b.iter(|| {
                    let _ = black_box(reinterp::bytes_as_text(black_box(bytes)).unwrap());
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("unchecked_zero_copy", len),
            &bytes,
            |b, bytes| {
                b.iter(|| {
                    // SAFETY: the input is ASCII.
                    let _ =
                        black_box(unsafe { reinterp::bytes_as_text_unchecked(black_box(bytes)) });
                });
            },
        );
    }

    group.finish();
}

fn bench_field_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_vs_unchecked_fields");

    group.bench_function("checked_view", |b| {
        let layout = RecordLayout::new(&[
            ("id", PrimitiveKind::U32),
            ("age", PrimitiveKind::I64),
            ("score", PrimitiveKind::F64),
        ]);
        let mut bytes = vec![0u8; layout.size()];
        let mut view = RecordViewMut::new(&mut bytes, &layout).unwrap();

        b.iter(|| {
            for i in 0..100 {
                view.write::<i64>(1, black_box(i)).unwrap();
                let _ = black_box(view.read::<i64>(1).unwrap());
            }
        });
    });

    group.bench_function("unchecked_handle", |b| {
        let mut record = Telemetry {
            id: 0,
            age: 0,
            score: 0.0,
        };
        let region = RawRegion::of_mut(&mut record);

        b.iter(|| {
            for i in 0..100 {
                // SAFETY: the offset comes from offset_of! on a live record.
                unsafe {
                    let age = region.field::<i64>(std::mem::offset_of!(Telemetry, age));
                    age.write(black_box(i));
                    let _ = black_box(age.read());
                }
            }
        });
    });

    group.bench_function("native_field", |b| {
        let mut record = Telemetry {
            id: 0,
            age: 0,
            score: 0.0,
        };

        b.iter(|| {
            for i in 0..100 {
                record.age = black_box(i);
                let _ = black_box(record.age);
            }
        });
    });

    group.finish();
}

fn bench_element_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_walk");

    let values: Vec<u64> = (0..1024).collect();

    group.bench_function("element_handles", |b| {
        let region = RawRegion::of(&values[..]);

        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..values.len() {
                // SAFETY: i stays below the slice length.
                sum = sum.wrapping_add(unsafe { region.element::<u64>(i).read() });
            }
            black_box(sum)
        });
    });

    group.bench_function("native_iter", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for v in &values {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_text_to_bytes,
    bench_bytes_to_text,
    bench_field_access,
    bench_element_walk
);

criterion_main!(benches);
