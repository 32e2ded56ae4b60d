pub mod number;
pub mod style;
pub mod text;
pub mod time;

pub use number::{format_delay, format_percent, format_score, format_usd};
pub use style::{paint, tier_style};
pub use text::{solscan_tx_url, truncate_hash};
pub use time::{format_timestamp, format_unix};
