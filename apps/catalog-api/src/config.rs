use core_config::{
    AppInfo, ConfigError, Environment, FromEnv, app_info, env_parse_or, env_required,
    server::ServerConfig,
};
use database::postgres::PostgresConfig;

const DEV_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Comma-separated origins for the CORS layer
    pub cors_origins: String,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
    /// Insert the sample catalog when the products table is empty
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        // Production must name its origins explicitly
        let cors_origins = if environment.is_production() {
            env_required("CORS_ALLOWED_ORIGIN")?
        } else {
            core_config::env_or_default("CORS_ALLOWED_ORIGIN", DEV_CORS_ORIGINS)
        };

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            cors_origins,
            run_migrations: env_parse_or("RUN_MIGRATIONS", true)?,
            seed_sample_data: env_parse_or("SEED_SAMPLE_DATA", false)?,
        })
    }
}
