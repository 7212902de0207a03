use std::time::Duration;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use hrsw::Stopwatch;
use human_duration::human_duration;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use reach::algorithms::cost_ordered::CostOrderedSearch;
use reach::algorithms::unordered::BreadthFirstSearch;
use reach::algorithms::unordered::DepthFirstSearch;
use reach::config::CostOrder;
use reach::problems::crossing;
use reach::problems::family;
use reach::problems::family::CostProfile;
use reach::problems::random_graph::GraphNode;
use reach::problems::random_graph::RandomGraphSpace;
use reach::problems::random_graph::Toll;

const NUM_INSTANCES: u64 = 3;
/// Maximum time willing to wait for a single benchmark instance.
const MAX_INSTANCE_TIME: Duration = Duration::from_secs(1);

fn bfs(space: &RandomGraphSpace, goal: usize) -> usize {
    BreadthFirstSearch::new(GraphNode::default(), space, |n: &GraphNode| n.id == goal).count()
}

fn dfs(space: &RandomGraphSpace, goal: usize) -> usize {
    DepthFirstSearch::new(GraphNode::default(), space, |n: &GraphNode| n.id == goal).count()
}

fn cost_ordered(space: &RandomGraphSpace, goal: usize) -> usize {
    CostOrderedSearch::new(
        GraphNode::default(),
        Toll::default(),
        CostOrder::Ascending,
        space,
        |n: &GraphNode| n.id == goal,
    )
    .count()
}

fn compare_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random graph search");

    for nodes in [1_000, 10_000, 100_000] {
        for i in 0..NUM_INSTANCES {
            let mut rng = ChaCha8Rng::seed_from_u64(i);
            let space = RandomGraphSpace::new(&mut rng, nodes, 4);
            let goal = nodes - 1;
            let instance_name = format!("{nodes}:{i}");

            let mut stopwatch = Stopwatch::new_started();
            let mut search = CostOrderedSearch::new(
                GraphNode::default(),
                Toll::default(),
                CostOrder::Ascending,
                &space,
                |n: &GraphNode| n.id == goal,
            );
            let solutions = search.find_all().len();
            stopwatch.stop();
            let elapsed = stopwatch.elapsed();
            println!("{instance_name}: {solutions} goal paths");
            search.print_memory_stats();
            if elapsed > MAX_INSTANCE_TIME {
                log::warn!(
                    "Skipping {instance_name} as it takes too long ({})",
                    human_duration(&elapsed)
                );
                continue;
            }

            group.bench_with_input(BenchmarkId::new("BFS", &instance_name), &space, |b, s| {
                b.iter(|| bfs(s, goal))
            });
            group.bench_with_input(BenchmarkId::new("DFS", &instance_name), &space, |b, s| {
                b.iter(|| dfs(s, goal))
            });
            group.bench_with_input(
                BenchmarkId::new("Cost-ordered", &instance_name),
                &space,
                |b, s| b.iter(|| cost_ordered(s, goal)),
            );
        }
    }
    group.finish();
}

fn puzzles(c: &mut Criterion) {
    let mut group = c.benchmark_group("Puzzles");

    let space = crossing::state_space();
    for order in [
        reach::config::SearchOrder::BreadthFirst,
        reach::config::SearchOrder::DepthFirst,
    ] {
        group.bench_function(BenchmarkId::new("Crossing", order), |b| {
            b.iter(|| space.check(crossing::goal, order).len())
        });
    }

    for profile in CostProfile::ALL {
        let space = family::state_space(profile);
        group.bench_function(BenchmarkId::new("Family", profile), |b| {
            b.iter(|| space.check(family::goal).len())
        });
    }
    group.finish();
}

criterion_group!(benches, compare_random_graphs, puzzles);
criterion_main!(benches);
