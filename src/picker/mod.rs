//! Picking tracks: grouping, line formatting and selection handling

pub mod config;
pub mod format;
mod group;
pub mod pipeline;
mod selection;

pub use config::PickerConfig;
pub use format::{LineFormatter, DELIMITER, FIELD_COUNT};
pub use group::group_by_artist;
pub use pipeline::PickerPipeline;
pub use selection::{path_from_line, select, SelectAction};
