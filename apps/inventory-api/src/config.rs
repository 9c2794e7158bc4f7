use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, server::ServerConfig};

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 unless set
        let cors = CorsConfig::from_env()?; // Disabled when CORS_ALLOWED_ORIGIN is unset

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
        })
    }
}
