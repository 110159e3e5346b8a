//! Date filter option matcher
//!
//! Maps a stored date filter back onto the option the UI shows as selected,
//! synthesizing an invisible virtual preset when nothing configured fits.

mod compare;
mod matching;

pub use compare::option_matches_value;
pub use matching::{match_date_filter_option, DateFilterOptionMatch};
