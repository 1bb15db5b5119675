//! Scores a few candidates and prints a validation report over an in-memory store.

use anyhow::Result;

#[cfg(feature = "mock")]
#[tokio::main]
async fn main() -> Result<()> {
    use relevance::{Config, Embedding, MockSignalStore, RelevanceEngine};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    const DIM: usize = 32;
    let axis = |i: usize, wobble: f32| {
        let mut v = vec![wobble; DIM];
        v[i] = 1.0;
        Embedding::new(v)
    };

    let mut config = Config::from_env()?;
    config.dims.embedding_dim = DIM;
    config.validate()?;

    let user_id = 1;
    let store = MockSignalStore::with_sample_seed(7);
    for id in 0..12u64 {
        store.insert_saved(user_id, id, Some(axis(0, 0.01 * id as f32)))?;
    }
    for id in 100..160u64 {
        store.insert_chunk(id, Some(axis(1 + id as usize % (DIM - 1), 0.0)));
    }
    store.insert_chunk(200, Some(axis(0, 0.02)));
    store.insert_chunk(201, None);

    let engine = RelevanceEngine::new(config, store);

    let mut scores = Vec::new();
    for chunk_id in [200, 101, 102, 201] {
        match engine.present_candidate(user_id, chunk_id).await {
            Ok(scored) => {
                println!("{scored}");
                scores.push(scored.score);
            }
            Err(e) => println!("chunk {chunk_id}: {e}"),
        }
    }

    let report = engine.validation_report(user_id).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    for (label, count) in engine.score_distribution(&scores).iter() {
        println!("{label:>8} {count}");
    }
    println!(
        "missing-embedding rejections: {}",
        engine.missing_embedding_rejections()
    );

    Ok(())
}

#[cfg(not(feature = "mock"))]
fn main() {
    eprintln!("Run with: cargo run --example validation_report --features mock");
}
