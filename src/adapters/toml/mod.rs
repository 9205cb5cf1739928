//! TOML scenario files
//!
//! - [`parser`] - Read and deserialize scenario files
//! - [`writer`] - Create scenario files

pub mod parser;
pub mod writer;

pub use parser::{ScenarioError, load_scenario, parse_scenario};
pub use writer::{example_scenario, format_scenario, write_scenario};
