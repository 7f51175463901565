use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::ffi::OsStr;
use std::fs;
use tempfile::TempDir;

use fcmd::{DirectoryScanner, PatternOptions, RunContext, StringList, compile, tokenize};

fn create_bin_dir(file_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..file_count {
        fs::write(dir.path().join(format!("tool-{i:05}")), "").unwrap();
    }
    dir
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_directory");
    let ctx = RunContext::default();
    let pattern = compile(r"^tool-0+[1-9]$", PatternOptions::default()).unwrap();

    for count in [100, 1_000, 5_000] {
        let dir = create_bin_dir(count);
        let path = dir.path().as_os_str().to_owned();
        let scanner = DirectoryScanner::new(&ctx, &pattern);

        group.bench_with_input(BenchmarkId::from_parameter(count), &path, |b, path| {
            b.iter(|| scanner.scan_detailed(black_box(path.as_os_str())).unwrap())
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_sort");

    for count in [10, 100, 1_000] {
        let list: StringList = (0..count).rev().map(|i| format!("name-{i:05}")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &list, |b, list| {
            b.iter(|| list.to_sorted().unwrap())
        });
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let path = (0..200)
        .map(|i| format!("/opt/pkg-{i}/bin"))
        .collect::<Vec<_>>()
        .join(":");

    c.bench_function("tokenize_path", |b| {
        b.iter(|| tokenize(black_box(OsStr::new(&path)), ":"))
    });
}

criterion_group!(benches, bench_scan, bench_sort, bench_tokenize);
criterion_main!(benches);
