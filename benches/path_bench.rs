use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathmode::{
    contains_path_component, directory_name, is_same_directory_or_child_of, is_valid_file_path,
    PlatformMode, RootDescriptor,
};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for (name, path) in [
        ("drive_absolute", r"C:\temp\goo.txt"),
        ("drive_relative", r"C:temp\goo.txt"),
        ("unc_share", r"\\server\share\dir\goo.txt"),
        ("relative", r"goo\temp\goo.txt"),
    ] {
        group.bench_with_input(BenchmarkId::new("windows", name), &path, |b, &path| {
            b.iter(|| RootDescriptor::of(black_box(path), PlatformMode::WindowsLike));
        });
    }

    group.bench_function("unix_rooted", |b| {
        b.iter(|| RootDescriptor::of(black_box("/temp/goo.txt"), PlatformMode::UnixLike));
    });

    group.finish();
}

fn bench_directory_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_name");

    group.bench_function("windows_absolute", |b| {
        b.iter(|| directory_name(black_box(r"C:\temp\dir\goo.txt"), PlatformMode::WindowsLike));
    });

    group.bench_function("windows_unc", |b| {
        b.iter(|| {
            directory_name(
                black_box(r"\\server\share\dir\goo.txt"),
                PlatformMode::WindowsLike,
            )
        });
    });

    group.bench_function("unix_relative", |b| {
        b.iter(|| directory_name(black_box("goo/temp/goo.txt"), PlatformMode::UnixLike));
    });

    group.finish();
}

fn bench_relation(c: &mut Criterion) {
    let mut group = c.benchmark_group("relation");

    let ancestor = r"C:\users\test\projects";
    let descendant = r"C:\users\test\projects\pathmode\src";
    let unrelated = r"C:\users\test\other";

    group.bench_function("child", |b| {
        b.iter(|| {
            is_same_directory_or_child_of(
                black_box(descendant),
                black_box(ancestor),
                PlatformMode::WindowsLike,
            )
        });
    });

    group.bench_function("same", |b| {
        b.iter(|| {
            is_same_directory_or_child_of(
                black_box(ancestor),
                black_box(ancestor),
                PlatformMode::WindowsLike,
            )
        });
    });

    group.bench_function("unrelated", |b| {
        b.iter(|| {
            is_same_directory_or_child_of(
                black_box(unrelated),
                black_box(ancestor),
                PlatformMode::WindowsLike,
            )
        });
    });

    group.finish();
}

fn bench_component(c: &mut Criterion) {
    let mut group = c.benchmark_group("component");

    group.bench_function("hit_ordinal", |b| {
        b.iter(|| {
            contains_path_component(
                black_box(r"c:\packages\temp\x"),
                black_box("packages"),
                false,
                PlatformMode::WindowsLike,
            )
        });
    });

    group.bench_function("miss_ignore_case", |b| {
        b.iter(|| {
            contains_path_component(
                black_box(r"c:\packages1\temp\x"),
                black_box("Packages"),
                true,
                PlatformMode::WindowsLike,
            )
        });
    });

    group.finish();
}

fn bench_validity(c: &mut Criterion) {
    let mut group = c.benchmark_group("validity");

    group.bench_function("windows_valid", |b| {
        b.iter(|| is_valid_file_path(black_box(r"test\data1.txt"), PlatformMode::WindowsLike));
    });

    group.bench_function("windows_reserved_char", |b| {
        b.iter(|| is_valid_file_path(black_box("path/*.txt"), PlatformMode::WindowsLike));
    });

    group.bench_function("unix_valid", |b| {
        b.iter(|| is_valid_file_path(black_box("test/data1.txt"), PlatformMode::UnixLike));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_directory_name,
    bench_relation,
    bench_component,
    bench_validity
);
criterion_main!(benches);
