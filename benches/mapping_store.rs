//! MappingStore 性能基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shortmap::interfaces::{LoopStats, execute_line};
use shortmap::storage::{MappingStore, StoreOptions};
use shortmap::utils::{IdGenerator, UuidIdGenerator, derive_id};
use std::hint::black_box;

// ============== id 生成 ==============

fn bench_generate_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/uuid_id_generator");

    group.bench_function("generate", |b| {
        let mut generator = UuidIdGenerator;
        b.iter(|| black_box(generator.generate()));
    });

    group.bench_function("derive_id_uri", |b| {
        b.iter(|| black_box(derive_id(black_box("http://short.ly/a/b/c/deadbeef"))));
    });

    group.finish();
}

// ============== create / resolve ==============

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage/mapping_store");

    for size in [1_000usize, 100_000] {
        let mut store = MappingStore::in_memory();
        let ids: Vec<String> = (0..size)
            .map(|i| store.create(&format!("http://example.com/{}", i)).unwrap())
            .collect();

        group.bench_with_input(BenchmarkId::new("resolve_hit", size), &size, |b, _| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % ids.len();
                black_box(store.resolve(&ids[i]).unwrap().len())
            });
        });

        group.bench_with_input(BenchmarkId::new("resolve_miss", size), &size, |b, _| {
            b.iter(|| black_box(store.resolve("http://short.ly/zzzzzzzz").is_err()));
        });
    }

    group.bench_function("create_in_memory", |b| {
        let mut store = MappingStore::in_memory();
        b.iter(|| black_box(store.create("http://example.com/page").unwrap()));
    });

    group.bench_function("create_persistent", |b| {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("bench.log");
        let mut store = MappingStore::open(Some(path.as_path()), &StoreOptions::default()).unwrap();
        b.iter(|| black_box(store.create("http://example.com/page").unwrap()));
    });

    group.finish();
}

// ============== 协议解析 ==============

fn bench_execute_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("interfaces/execute_line");

    let mut store = MappingStore::in_memory();
    let id = store.create("http://example.com/page1").unwrap();
    let get_line = format!("get http://short.ly/{}", id);
    let mut stats = LoopStats::default();

    group.bench_function("get_hit", |b| {
        b.iter(|| black_box(execute_line(&mut store, &get_line, &mut stats).unwrap()));
    });

    group.bench_function("malformed", |b| {
        b.iter(|| black_box(execute_line(&mut store, "garbage", &mut stats).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_generate_id, bench_store, bench_execute_line);
criterion_main!(benches);
