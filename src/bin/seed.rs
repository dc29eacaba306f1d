use rbac_dashboard::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;
    seed::run(&orm).await?;

    println!("Seed completed.");
    Ok(())
}
