//! Runtime configuration.
//!
//! Settings are layered: built-in defaults, then the optional INI file
//! (`~/.opensky-live/config.ini`), then environment variables. Missing
//! credentials are not an error; the tools simply run anonymously.
//!
//! ```ini
//! [opensky]
//! client_id = my-client
//! client_secret = my-secret
//! timeout = 20
//!
//! [summary]
//! top_n = 5
//! ```

mod file;
mod parser;
mod settings;

pub use file::{config_directory, config_file_path, ConfigError};
pub use settings::{
    Settings, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_URL, ENV_CLIENT_ID, ENV_CLIENT_SECRET,
    ENV_TIMEOUT_SECS,
};
