//
// Copyright 2018 yvt, all rights reserved.
//
// This source code is a part of Nightingales.
//
use bencher::{benchmark_group, benchmark_main, Bencher};

use zfft::{Env, Options, Setup};

// To convert the result into a BenchFFT MFLOPS, use the following formula:
//
//   mflops = 5000 N log2(N) / (time for one FFT in nanoseconds)

fn run_single_benchmark(size: usize, b: &mut Bencher) {
    let setup: Setup<f32> = Setup::new(&Options {
        len: size,
        inverse: false,
    })
    .unwrap();
    let mut env = Env::new(&setup);
    let mut re = vec![0f32; size];
    let mut im = vec![0f32; size];
    b.iter(move || {
        env.transform(re.as_mut_slice(), im.as_mut_slice());
    })
}

fn simple_benchmark_00064(b: &mut Bencher) {
    run_single_benchmark(64, b);
}

fn simple_benchmark_01024(b: &mut Bencher) {
    run_single_benchmark(1024, b);
}

fn simple_benchmark_16384(b: &mut Bencher) {
    run_single_benchmark(16384, b);
}

benchmark_group!(
    benches,
    simple_benchmark_00064,
    simple_benchmark_01024,
    simple_benchmark_16384
);
benchmark_main!(benches);
