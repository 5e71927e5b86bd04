use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use soil_dem::container::{Container, ContainerConfig, ParticleGroupSpec};
use soil_dem::particles::Mineral;

/// Container filled with sand and clay from a fixed seed
fn populated_container(quantity: usize) -> Container {
    let config = ContainerConfig::builder(200_000.0, 200_000.0)
        .with_group(ParticleGroupSpec::new(Mineral::Quartz, 8_000.0, 10_000.0, quantity))
        .with_group(ParticleGroupSpec::new(Mineral::Kaolinite, 1_000.0, 2_000.0, quantity * 4).with_segments(2))
        .with_seed(17)
        .build()
        .expect("benchmark configuration is valid");
    let mut container = Container::new(config).expect("benchmark container builds");
    container.generate_particles().expect("benchmark generation succeeds");
    container
}

fn bench_contact_maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("contact_maps");

    for quantity in [25, 100] {
        let mut container = populated_container(quantity);

        group.bench_with_input(BenchmarkId::new("mechanical_boxes", quantity), &quantity, |b, _| {
            b.iter(|| black_box(&mut container).update_mechanical_boxes())
        });
        group.bench_with_input(BenchmarkId::new("mechanical_contacts", quantity), &quantity, |b, _| {
            b.iter(|| black_box(&mut container).update_mechanical_contacts_dictionary())
        });
        group.bench_with_input(BenchmarkId::new("chemical_contacts", quantity), &quantity, |b, _| {
            b.iter(|| black_box(&mut container).update_chemical_contacts_dictionary())
        });
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate_100_grains_400_plates", |b| {
        b.iter(|| populated_container(black_box(100)))
    });
}

criterion_group!(benches, bench_contact_maps, bench_generation);
criterion_main!(benches);
