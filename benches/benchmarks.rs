//! Performance benchmarks for sprig

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sprig::test_utils::TestTree;
use sprig::{ExcludeSet, TreeOutput, TreeWalker};
use std::io;

/// Sink that counts entries without formatting them.
struct CountingSink {
    entries: usize,
}

impl TreeOutput for CountingSink {
    fn entry(&mut self, prefix: &str, name: &str, _is_dir: bool) -> io::Result<()> {
        black_box((prefix, name));
        self.entries += 1;
        Ok(())
    }
}

fn build_tree(dirs: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.add_file(&format!("dir_{d}/file_{f}.txt"), "contents");
        }
        // Noise that the walker must skip
        tree.add_file(&format!("dir_{d}/node_modules/dep/index.js"), "");
    }
    tree
}

fn bench_walk(c: &mut Criterion) {
    let small = build_tree(5, 10);
    let large = build_tree(50, 50);

    c.bench_function("walk_small_tree", |b| {
        b.iter(|| {
            let mut sink = CountingSink { entries: 0 };
            TreeWalker::new(ExcludeSet::standard())
                .walk(small.path(), &mut sink)
                .unwrap();
            black_box(sink.entries)
        })
    });

    c.bench_function("walk_large_tree", |b| {
        b.iter(|| {
            let mut sink = CountingSink { entries: 0 };
            TreeWalker::new(ExcludeSet::standard())
                .walk(large.path(), &mut sink)
                .unwrap();
            black_box(sink.entries)
        })
    });

    c.bench_function("walk_minimal_excludes", |b| {
        b.iter(|| {
            let mut sink = CountingSink { entries: 0 };
            TreeWalker::new(ExcludeSet::node_modules_only())
                .walk(large.path(), &mut sink)
                .unwrap();
            black_box(sink.entries)
        })
    });
}

criterion_group!(benches, bench_walk);
criterion_main!(benches);
