use happyteeth::{config::Config, db, gallery::Gallery};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_pool = db::connect(&config.database_url, 1).await?;
    let seeded = Gallery::new(db_pool.clone()).seed_defaults().await;
    db_pool.close().await;

    match seeded {
        Ok(0) => println!("Gallery already has images. Skipping seed."),
        Ok(n) => println!("Successfully seeded {n} gallery images!"),
        Err(err) => anyhow::bail!("seeding gallery failed: {err}"),
    }
    Ok(())
}
