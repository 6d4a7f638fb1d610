use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Import the crate functions we want to benchmark
use wp_plugin_build::copier::{copy_file, copy_tree};
use wp_plugin_build::exclude::ExclusionSet;
use wp_plugin_build::fingerprint::fingerprint;

/// Create a test directory structure with N files
fn create_test_files(dir: &TempDir, count: usize) -> PathBuf {
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();

    for i in 0..count {
        let subdir = src.join(format!("dir{}", i % 10));
        fs::create_dir_all(&subdir).unwrap();
        let file = subdir.join(format!("file{}.php", i));
        fs::write(&file, format!("<?php // content {}", i)).unwrap();
    }

    src
}

/// Benchmark file copy operations
fn bench_copy_file(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("source.php");
    let dst = temp.path().join("dest.php");

    // Create a 1KB file
    fs::write(&src, vec![b'x'; 1024]).unwrap();

    c.bench_function("copy_file_1kb", |b| {
        b.iter(|| {
            let _ = fs::remove_file(&dst);
            copy_file(black_box(&src), black_box(&dst)).unwrap()
        })
    });

    // Create a 1MB file
    fs::write(&src, vec![b'x'; 1024 * 1024]).unwrap();

    c.bench_function("copy_file_1mb", |b| {
        b.iter(|| {
            let _ = fs::remove_file(&dst);
            copy_file(black_box(&src), black_box(&dst)).unwrap()
        })
    });
}

/// Benchmark tree copy with different file counts
fn bench_copy_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_tree");

    for file_count in [100, 500, 1000].iter() {
        let temp = TempDir::new().unwrap();
        let src = create_test_files(&temp, *file_count);
        let dst = temp.path().join("dst");
        let files: Vec<String> = (0..10).map(|i| format!("dir{i}")).collect();
        let exclusions = ExclusionSet::new(vec!["Test.php".to_string()]);

        group.throughput(Throughput::Elements(*file_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            file_count,
            |b, _| {
                b.iter(|| {
                    let _ = fs::remove_dir_all(&dst);
                    fs::create_dir_all(&dst).unwrap();
                    copy_tree(
                        black_box(&src),
                        black_box(&dst),
                        black_box(&files),
                        black_box(&exclusions),
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

/// Benchmark directory fingerprinting
fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");

    for file_count in [100, 500].iter() {
        let temp = TempDir::new().unwrap();
        let src = create_test_files(&temp, *file_count);

        group.throughput(Throughput::Elements(*file_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            file_count,
            |b, _| b.iter(|| fingerprint(black_box(&src)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_copy_file, bench_copy_tree, bench_fingerprint,);
criterion_main!(benches);
