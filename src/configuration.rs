use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    // Path to the SQLite file. Also served as-is by /download-db.
    pub path: String,
    pub max_connections: u32,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .set_default("app_host", "0.0.0.0")?
        .set_default("app_port", 3000_i64)?
        .set_default("database.path", "./conversations.db")?
        .set_default("database.max_connections", 5_i64)?
        // .json, .toml, .yaml, .yml
        .add_source(config::File::with_name("configuration").required(false))
        .set_override_option("app_port", std::env::var("PORT").ok())?
        .set_override_option("database.path", std::env::var("DB_FILE").ok())?
        .build()?;

    settings.try_deserialize()
}
