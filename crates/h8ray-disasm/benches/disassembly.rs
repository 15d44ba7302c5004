//! Benchmarks for H8S/2000 disassembly performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use h8ray_disasm::{render, render_line, H8Disassembler};

/// Sample H8S code: a small function with a realistic mix of moves,
/// arithmetic, bit tests, branches, and stack traffic.
const H8S_CODE: &[u8] = &[
    // Prologue
    0x01, 0x00, 0x6D, 0xF6, // mov.l er6, @-sp
    0x0F, 0xF6, // mov.l sp, er6
    0x7A, 0x37, 0x00, 0x00, 0x00, 0x10, // sub.l #16, sp
    // Load, arithmetic, store
    0x69, 0x62, // mov.w @er6, r2
    0x79, 0x13, 0x00, 0x01, // add.w #1, r3
    0x0B, 0x05, // adds #1, er5
    0x69, 0xE2, // mov.w r2, @er6
    0x6A, 0x08, 0xFF, 0x00, // mov.b @0xff00:16, r0l
    // Poll loop
    0x73, 0x70, // btst #7, r0h
    0x47, 0x04, // beq .done
    0x0B, 0x75, // inc.l #1, er5
    0x40, 0xF4, // bra .poll
    // .done: epilogue
    0x17, 0x88, // neg.b r0l
    0x0B, 0x97, // adds #4, sp
    0x01, 0x00, 0x6D, 0x76, // mov.l @sp+, er6
    0x54, 0x70, // rts
];

/// Larger code block for throughput testing (repeated pattern).
fn generate_code_block(size: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        let to_copy = remaining.min(H8S_CODE.len());
        result.extend_from_slice(&H8S_CODE[..to_copy]);
    }
    result
}

fn bench_decode(c: &mut Criterion) {
    let disasm = H8Disassembler::new();

    let mut group = c.benchmark_group("h8s_decode");

    // Benchmark single instruction decode
    group.bench_function("single_instruction", |b| {
        b.iter(|| {
            let _ = disasm.decode(black_box(&H8S_CODE[..2]), 0x1000);
        })
    });

    // Benchmark small function
    group.bench_function("small_function", |b| {
        b.iter(|| {
            let _ = disasm.split(black_box(H8S_CODE), 0x1000);
        })
    });

    // Benchmark various sizes for throughput
    for size in [1024, 4096, 16384, 65536] {
        let code = generate_code_block(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("throughput", size), &code, |b, code| {
            b.iter(|| {
                let _ = disasm.split(black_box(code), 0x1000);
            })
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let disasm = H8Disassembler::new();
    let records = disasm.split(H8S_CODE, 0x1000).unwrap();

    let mut group = c.benchmark_group("h8s_render");

    group.bench_function("render_function", |b| {
        b.iter(|| {
            for rec in &records {
                let _ = render(black_box(rec));
            }
        })
    });

    group.bench_function("render_listing", |b| {
        b.iter(|| {
            for rec in &records {
                let _ = render_line(black_box(rec));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_render);
criterion_main!(benches);
