//! Built-in tools

mod calculator;
mod search;

pub use calculator::{calculator, evaluate, CALCULATOR_TOOL_NAME};
pub use search::{SerpApiSearch, SERPAPI_DEFAULT_BASE_URL, SERPAPI_TOOL_NAME};
