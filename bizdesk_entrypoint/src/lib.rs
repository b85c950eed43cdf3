#![deny(missing_docs)]
//! This crate provides a standardized initialization process that should be used across entrypoint crates.
//! This is used to provide consistent behaviour with e.g. tracing configurations

use bizdesk_env::Environment;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

/// Set this variable to a nesting depth to get hierarchical tree output in local runs
const TREE_LOG_VAR: &str = "BIZDESK_TREE_LOG";

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct BizdeskEntrypoint {
    env: Environment,
}

impl Default for BizdeskEntrypoint {
    fn default() -> Self {
        BizdeskEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [BizdeskEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl BizdeskEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let tree_depth = std::env::var(TREE_LOG_VAR)
            .ok()
            .and_then(|v| v.parse::<usize>().ok());

        match (self.env, tree_depth) {
            (Environment::Local, Some(depth)) => {
                let subscriber = Registry::default().with(HierarchicalLayer::new(depth));
                tracing::subscriber::set_global_default(subscriber).unwrap();
            }
            (Environment::Local, None) => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            (Environment::Production | Environment::Develop, _) => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}
