/// Runtime configuration, read once at startup. `.env` is honored for local
/// development; nothing here is hardcoded into the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let database_url = dotenvy::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let host = dotenvy::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = dotenvy::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a number");
        Config {
            database_url,
            host,
            port,
        }
    }
}
