use basex::{Codec, CodecKind};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    for kind in CodecKind::ALL {
        let codec: &dyn Codec = kind.codec();
        let mut group = c.benchmark_group(format!("encode_{}", codec.name()));

        for size in SIZES {
            group.throughput(Throughput::Bytes(size as u64));
            let data = sample(size);

            group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
                b.iter(|| codec.encode(black_box(data)));
            });
        }
        group.finish();
    }
}

fn bench_decode(c: &mut Criterion) {
    for kind in CodecKind::ALL {
        let codec: &dyn Codec = kind.codec();
        let mut group = c.benchmark_group(format!("decode_{}", codec.name()));

        for size in SIZES {
            let encoded = codec.encode(&sample(size));

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
                b.iter(|| codec.decode(black_box(encoded)).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_encode_into(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_into");
    let size = 4096;
    let data = sample(size);
    group.throughput(Throughput::Bytes(size as u64));

    for kind in CodecKind::ALL {
        let codec: &dyn Codec = kind.codec();
        let mut buf = vec![0u8; 2 * codec.encode_len(size)];

        group.bench_function(codec.name(), |b| {
            b.iter(|| codec.encode_into(black_box(&data), &mut buf).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_encode_into);
criterion_main!(benches);
