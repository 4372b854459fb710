//! Library side of the OSM wrangler CLI: logging setup and the streaming
//! passes behind each subcommand.

pub mod logging;
pub mod pipeline;
