use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use ip_network_table_deps_treebitmap::IpLookupTable;
use ipnet::Ipv4Net;
use nested_interval_map::*;
use rand::prelude::*;
use std::net::Ipv4Addr;

const NUM_NETS: usize = 50_000;
const NUM_ALLOCATIONS: usize = 5_000;
const NUM_LOOKUPS: usize = 100_000;

/// Random CIDR network between /8 and /32, with the host bits cleared.
fn random_net(rng: &mut StdRng) -> Ipv4Net {
    let len = rng.gen_range(8..=32);
    Ipv4Net::new(Ipv4Addr::from(rng.gen::<u32>()), len)
        .unwrap()
        .trunc()
}

/// Non-conflicting explicit ranges, like the allocations of a registry: each range is cut out of
/// a randomly chosen earlier range (or out of the whole space), at arbitrary boundaries.
fn random_allocations(rng: &mut StdRng) -> Vec<IpRange> {
    let mut bounds: Vec<(u32, u32)> = vec![(0, u32::MAX)];
    while bounds.len() <= NUM_ALLOCATIONS {
        let (start, end) = bounds[rng.gen_range(0..bounds.len())];
        if end - start < 4 {
            continue;
        }
        let a = rng.gen_range(start..=end);
        let b = rng.gen_range(start..=end);
        let (a, b) = (a.min(b), a.max(b));
        // skip ranges that partially overlap an earlier one
        if bounds
            .iter()
            .any(|&(s, e)| s <= b && a <= e && !(s <= a && b <= e) && !(a <= s && e <= b))
        {
            continue;
        }
        bounds.push((a, b));
    }
    bounds.remove(0);
    bounds.shuffle(rng);
    bounds
        .into_iter()
        .map(|(a, b)| IpRange::new(Address::v4(a), Address::v4(b)).unwrap())
        .collect()
}

fn random_hosts(rng: &mut StdRng) -> Vec<Ipv4Addr> {
    (0..NUM_LOOKUPS)
        .map(|_| Ipv4Addr::from(rng.gen::<u32>()))
        .collect()
}

fn build_nets(nets: &[Ipv4Net]) -> IntervalMap<Ipv4Net, u32> {
    let mut map = IntervalMap::new();
    for (i, net) in nets.iter().enumerate() {
        // CIDR networks never conflict
        map.insert(*net, i as u32).unwrap();
    }
    map
}

fn build_treebitmap(nets: &[Ipv4Net]) -> IpLookupTable<Ipv4Addr, u32> {
    let mut table = IpLookupTable::new();
    for (i, net) in nets.iter().enumerate() {
        table.insert(net.network(), net.prefix_len() as u32, i as u32);
    }
    table
}

fn build_allocations(ranges: &[IpRange]) -> IpRangeMap<u32> {
    let mut map = IpRangeMap::new();
    for (i, range) in ranges.iter().enumerate() {
        map.insert(*range, i as u32).unwrap();
    }
    map
}

pub fn cidr_insert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let nets: Vec<Ipv4Net> = (0..NUM_NETS).map(|_| random_net(&mut rng)).collect();

    let mut group = c.benchmark_group("cidr insert");
    group.bench_function("IntervalMap", |b| b.iter(|| build_nets(&nets)));
    group.bench_function("TreeBitMap", |b| b.iter(|| build_treebitmap(&nets)));
    group.finish();
}

pub fn cidr_lookup(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let nets: Vec<Ipv4Net> = (0..NUM_NETS).map(|_| random_net(&mut rng)).collect();
    let hosts = random_hosts(&mut rng);
    let map = build_nets(&nets);
    let table = build_treebitmap(&nets);

    let mut group = c.benchmark_group("cidr host lookup");
    group.bench_function("IntervalMap", |b| {
        b.iter(|| {
            for host in &hosts {
                let host = Ipv4Net::from(*host);
                criterion::black_box(map.find_exact_or_first_less_specific(&host));
            }
        })
    });
    group.bench_function("TreeBitMap", |b| {
        b.iter(|| {
            for host in &hosts {
                criterion::black_box(table.longest_match(*host));
            }
        })
    });
    group.finish();
}

pub fn range_insert_remove(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let ranges = random_allocations(&mut rng);

    let mut group = c.benchmark_group("explicit ranges");
    group.bench_function("insert", |b| b.iter(|| build_allocations(&ranges)));
    group.bench_function("remove", |b| {
        b.iter_batched(
            || build_allocations(&ranges),
            |mut map| {
                for range in &ranges {
                    criterion::black_box(map.remove(range));
                }
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

pub fn range_queries(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let ranges = random_allocations(&mut rng);
    let hosts: Vec<IpRange> = random_hosts(&mut rng)
        .into_iter()
        .map(|h| IpRange::single(h.into()))
        .collect();
    let map = build_allocations(&ranges);

    let mut group = c.benchmark_group("explicit range queries");
    group.bench_function("first less specific", |b| {
        b.iter(|| {
            for host in &hosts {
                criterion::black_box(map.find_exact_or_first_less_specific(host));
            }
        })
    });
    group.bench_function("all less specific", |b| {
        b.iter(|| {
            for host in &hosts {
                criterion::black_box(map.find_all_less_specific(host));
            }
        })
    });
    group.sample_size(10);
    group.bench_function("first more specific", |b| {
        b.iter(|| {
            for range in ranges.iter().take(1000) {
                criterion::black_box(map.find_first_more_specific(range));
            }
        })
    });
    group.bench_function("all more specific", |b| {
        b.iter(|| {
            for range in ranges.iter().take(1000) {
                criterion::black_box(map.more_specific(range).count());
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    cidr_insert,
    cidr_lookup,
    range_insert_remove,
    range_queries
);
criterion_main!(benches);
