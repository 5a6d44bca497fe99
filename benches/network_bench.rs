use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lexinet::dictionary::WordIndex;
use lexinet::network::{ExpansionConfig, NetworkExpander, find_adjacent, is_adjacent};

fn generate_words(count: usize) -> Vec<String> {
    let alphabet: Vec<char> = "etaoinshrdlu".chars().collect();
    let mut words = Vec::with_capacity(count);
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..count {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let len = 2 + (seed % 6) as usize;
        let word: String = (0..len)
            .map(|i| alphabet[((seed >> (i * 5)) % alphabet.len() as u64) as usize])
            .collect();
        words.push(word);
    }
    words
}

fn bench_adjacency(c: &mut Criterion) {
    let words = generate_words(1000);
    let index = WordIndex::from_lines(&words);

    let mut group = c.benchmark_group("adjacency");

    group.bench_function("is_adjacent", |b| {
        b.iter(|| {
            for pair in words.windows(2) {
                black_box(is_adjacent(black_box(&pair[0]), black_box(&pair[1])));
            }
        })
    });

    group.bench_function("find_adjacent", |b| {
        let exclude = Default::default();
        b.iter(|| black_box(find_adjacent(black_box(&words[..50]), &index, &exclude)))
    });

    group.finish();
}

fn bench_expansion(c: &mut Criterion) {
    let words = generate_words(20_000);
    let index = WordIndex::from_lines(&words);
    let origin = words[0].clone();

    let sequential = NetworkExpander::new(&index);
    let parallel = NetworkExpander::with_config(&index, ExpansionConfig::parallel()).unwrap();

    let mut group = c.benchmark_group("expansion");

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(sequential.expand(black_box(&origin)).unwrap()))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(parallel.expand(black_box(&origin)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_adjacency, bench_expansion);
criterion_main!(benches);
