use benchmark_simple::*;
use chained_hash::*;
use core::hash::Hasher;
use fnv::*;
use fxhash::*;
use xxhash_rust::xxh3::xxh3_64;

fn options() -> Options {
    Options {
        iterations: 100_000,
        warmup_iterations: 1_000,
        min_samples: 5,
        max_samples: 10,
        max_rsd: 1.0,
        ..Default::default()
    }
}

fn bench_djb2() {
    println!("\n* DJB2\n");

    let bench = Bench::new();
    let options = &options();

    let mut size = 1;
    loop {
        let m = vec![0u8; size];
        let res = bench.run(options, || djb2(&m));
        println!("{} bytes:\t{}", size, res.throughput(m.len() as _));
        if size >= 65536 {
            break;
        }
        size *= 2;
    }
}

fn bench_fnv() {
    println!("\n* FNV Hash\n");

    let bench = Bench::new();
    let options = &options();

    let mut size = 1;
    loop {
        let m = vec![0u8; size];
        let res = bench.run(options, || {
            let mut hasher = FnvHasher::default();
            hasher.write(&m);
            hasher.finish()
        });
        println!("{} bytes:\t{}", size, res.throughput(m.len() as _));
        if size >= 65536 {
            break;
        }
        size *= 2;
    }
}

fn bench_fxhash() {
    println!("\n* FxHash\n");

    let bench = Bench::new();
    let options = &options();

    let mut size = 1;
    loop {
        let m = vec![0u8; size];
        let res = bench.run(options, || {
            let mut hasher = FxHasher::default();
            hasher.write(&m);
            hasher.finish()
        });
        println!("{} bytes:\t{}", size, res.throughput(m.len() as _));
        if size >= 65536 {
            break;
        }
        size *= 2;
    }
}

fn bench_xxh3() {
    println!("\n* XXH3\n");

    let bench = Bench::new();
    let options = &options();

    let mut size = 1;
    loop {
        let m = vec![0u8; size];
        let res = bench.run(options, || xxh3_64(&m));
        println!("{} bytes:\t{}", size, res.throughput(m.len() as _));
        if size >= 65536 {
            break;
        }
        size *= 2;
    }
}

fn bench_table() {
    println!("\n* ChainedHashTable (5000 buckets)\n");

    let bench = Bench::new();
    let options = &Options {
        iterations: 100,
        warmup_iterations: 10,
        ..options()
    };

    let names: Vec<String> = (0..5000).map(|i| format!("NAME{}", i)).collect();

    let res = bench.run(options, || {
        let mut table = ChainedHashTable::new(5000).ok()?;
        table.load_all(&names).ok()?;
        Some(table.destroy())
    });
    println!("load_all {} keys:\t{}", names.len(), res.throughput(names.len() as _));

    let mut table = match ChainedHashTable::new(5000) {
        Ok(table) => table,
        Err(_) => return,
    };
    if table.load_all(&names).is_err() {
        return;
    }
    let res = bench.run(options, || names.iter().filter_map(|n| table.get(n)).count());
    println!("find {} keys:\t{}", names.len(), res.throughput(names.len() as _));
}

fn main() {
    bench_xxh3();
    bench_fxhash();
    bench_djb2();
    bench_fnv();
    bench_table();
}
