use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use unbalanced_bst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting keys in ascending order. Nothing rebalances so this is a single
/// chain as tall as the number of keys.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..).take(num_nodes_in_full_tree(num_levels)).collect()
}

/// Builds a tree by inserting keys so that the tree comes out full, with `num_levels` levels.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Each iteration gets a fresh clone of the tree so
/// mutations don't leak into the next one.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Sorted inserts are quadratic so the chains stay shorter than the full trees.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree as i32));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _found = black_box(tree.iterative_search(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete_key(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _found = black_box(tree.iterative_search(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete_key(&(i + 1));
    });

    bench_helper(c, "inorder-recursive", |tree, _| {
        tree.inorder_walk(|key| {
            black_box(key);
        });
    });
    bench_helper(c, "inorder-iterative", |tree, _| {
        tree.iterative_inorder_walk(|key| {
            black_box(key);
        });
    });
    bench_helper(c, "levels", |tree, _| {
        tree.walk_by_levels(|key| {
            black_box(key);
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
