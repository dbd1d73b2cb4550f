//! CLI command implementations

mod config_gen;
mod helpers;
mod invoke;
mod records;
mod verify;

pub use config_gen::{config_generate, config_show};
pub use helpers::parse_code;
pub use invoke::{InvokeRequest, invoke};
pub use records::{add_url, get_url, get_url_info, shortener_url};
pub use verify::verify;
