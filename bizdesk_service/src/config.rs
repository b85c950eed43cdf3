use anyhow::Context;
use bizdesk_middleware::auth::bearer_token::ApiAuthToken;
pub use bizdesk_env::Environment;

pub struct Config {
    /// port number of service
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// The connection URL for the Postgres database this application should use.
    pub database_url: String,
    /// The shared secret API callers must present as a bearer token
    pub api_auth_token: ApiAuthToken,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;

        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;

        let api_auth_token = ApiAuthToken::from_env()?;

        let environment = Environment::new_or_prod();

        Ok(Config {
            port,
            environment,
            database_url,
            api_auth_token,
        })
    }

    /// A config for router tests; nothing in it reaches a real backend
    pub fn new_testing() -> Self {
        Config {
            port: 0,
            environment: Environment::Local,
            database_url: "".to_string(),
            api_auth_token: ApiAuthToken::new("test-token"),
        }
    }
}
