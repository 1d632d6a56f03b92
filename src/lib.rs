pub mod config;
pub mod demo;
pub mod logging;
pub mod walker;

// Re-export the main types for easy access
pub use config::{Config, LogOutput, LoggingConfig};
pub use demo::Demo;
pub use logging::{init_logging, ConditionalLocationFormatter};
pub use walker::for_each;
