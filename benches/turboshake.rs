use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use turboshake::{create_turbo_shake128, create_turbo_shake256, turboshake128, turboshake256};

fn absorb_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("absorb");
    for &size in &[1024usize, 64 * 1024, 1024 * 1024] {
        g.throughput(Throughput::Bytes(size as u64));
        let input = vec![0u8; size];
        g.bench_with_input("TurboSHAKE128", &input, |b, block| {
            b.iter(|| turboshake128(block, 0x1F, 32))
        });
        g.bench_with_input("TurboSHAKE256", &input, |b, block| {
            b.iter(|| turboshake256(block, 0x1F, 32))
        });
    }
    g.finish();
}

fn squeeze_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("squeeze");
    for &size in &[32usize, 1024, 64 * 1024] {
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_with_input("TurboSHAKE128", &size, |b, &len| {
            b.iter(|| {
                let mut ctx = create_turbo_shake128(0x1F);
                ctx.update(b"fixed input").unwrap();
                ctx.squeeze(len)
            })
        });
        g.bench_with_input("TurboSHAKE256", &size, |b, &len| {
            b.iter(|| {
                let mut ctx = create_turbo_shake256(0x1F);
                ctx.update(b"fixed input").unwrap();
                ctx.squeeze(len)
            })
        });
    }
    g.finish();
}

criterion_group!(benches, absorb_benchmarks, squeeze_benchmarks);
criterion_main!(benches);
