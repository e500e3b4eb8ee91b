use allele::chromosome::{Chromosome, ChromosomeTemplate};
use allele::engine::{EngineConfig, GeneticEngine};
use allele::fitness::FitnessFunction;
use allele::gene::BoolGene;
use allele::mutation::UniformMutation;
use allele::selection::{EliteSelection, TournamentSelection};
use allele::termination::MaxGenerations;
use criterion::{criterion_group, criterion_main, Criterion};

struct OnesCount;

impl FitnessFunction<BoolGene> for OnesCount {
    fn evaluate(&self, chromosome: &Chromosome<BoolGene>) -> f64 {
        chromosome.genes().iter().filter(|g| g.value()).count() as f64
    }
}

fn ones_config(generations: u64) -> EngineConfig<BoolGene> {
    EngineConfig::builder()
        .population_size(100)
        .template(ChromosomeTemplate::fixed(BoolGene::new(false), 64))
        .fitness_function(OnesCount)
        .parent_selection(TournamentSelection::new(3, 1.0).unwrap())
        .elite_selection(EliteSelection::new(1).unwrap())
        .crossover(allele::crossover::UniformCrossover::new(), 0.9)
        .mutation(UniformMutation::new(), 0.01)
        .terminate(MaxGenerations::new(generations))
        .seed(42)
        .build()
        .unwrap()
}

fn bench_engine_generations(c: &mut Criterion) {
    c.bench_function("engine_50_generations", |b| {
        b.iter(|| {
            let mut engine = GeneticEngine::new(ones_config(50));
            engine.run().unwrap()
        })
    });
}

criterion_group!(benches, bench_engine_generations);
criterion_main!(benches);
