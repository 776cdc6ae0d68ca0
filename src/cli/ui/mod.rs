pub mod banner;
pub mod breakdown;
pub mod formatting;
pub mod style;

pub use banner::Banner;
pub use breakdown::{breakdown_lines, print_breakdown, render_plain, BreakdownLine};
pub use formatting::Formatter;
pub use style::{apply_config, style, UiStyle};
