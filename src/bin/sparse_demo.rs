use clap::Parser;
use log::info;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use sparsearray::{SparseFactory, SparseError};

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    /// logical length of the vector
    #[clap(long, default_value = "1000000")]
    len: u64,
    /// number of random entries to set
    #[clap(short = 'n', default_value = "100")]
    n: usize,
    #[clap(long, default_value = "7")]
    initial_capacity: usize,
    #[clap(long, default_value = "0")]
    seed: u64,
    /// number of leading positions to print densely
    #[clap(long, default_value = "20")]
    head: u64,
}

fn main() -> Result<(), SparseError> {
    env_logger::init();
    let opts: Opts = Opts::parse();
    println!("# opts={:?}", opts);

    let factory = SparseFactory::primitive().with_initial_capacity(opts.initial_capacity)?;
    let mut v = factory.make(opts.len);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(opts.seed);
    for _ in 0..opts.n {
        let i: u64 = rng.gen_range(0..opts.len.max(1));
        let x: f64 = rng.gen_range(-1.0..1.0);
        v.try_set(i, x)?;
    }
    info!("occupied={} capacity={}", v.occupied(), v.capacity());

    println!("count={}", v.count());
    println!("occupied={}", v.occupied());
    println!("capacity={}", v.capacity());
    match v.index_of_largest(0, v.count(), 1) {
        Some(i) => println!("largest={}@{}", v.get(i), i),
        None => println!("largest=none"),
    }
    for i in 0..opts.head.min(v.count()) {
        println!("{}\t{}", i, v.get(i));
    }
    Ok(())
}
