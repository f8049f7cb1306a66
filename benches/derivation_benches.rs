use RustedLieThe::lie::derivations::{derivations, derivations_parametric};
use RustedLieThe::lie::gl::GL;
use RustedLieThe::lie::lie_algebra::LieAlgebra;
use RustedLieThe::lie::study::{ReportStyle, study_group};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_derivations_filiform(c: &mut Criterion) {
    let G = LieAlgebra::from_structure_constants("0,0,12,13,14,15").unwrap();
    let gl = GL::new(G.dimension());
    c.bench_function("derivations of a 6-dimensional filiform", |b| {
        b.iter(|| derivations(black_box(&G), &gl).unwrap())
    });
}

fn bench_derivations_parametric(c: &mut Criterion) {
    let G = LieAlgebra::with_parameters("0,0,0,12,[lambda]*13,14", &["lambda"]).unwrap();
    let gl = GL::new(G.dimension());
    c.bench_function("derivation bounds of a one-parameter family", |b| {
        b.iter(|| derivations_parametric(black_box(&G), &gl).unwrap())
    });
}

fn bench_study_heisenberg(c: &mut Criterion) {
    let G = LieAlgebra::from_structure_constants("0,0,0,0,12+34").unwrap();
    c.bench_function("study of the 5-dimensional Heisenberg algebra", |b| {
        b.iter(|| study_group(black_box(&G), ReportStyle::Plain).unwrap())
    });
}

criterion_group!(
    benches,
    bench_derivations_filiform,
    bench_derivations_parametric,
    bench_study_heisenberg
);
criterion_main!(benches);
