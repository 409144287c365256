//! View-state orchestration for the folio page.
//!
//! Nothing here touches the DOM. The web front-end feeds browser events in
//! (scroll, resize, intersection ratios, clicks) together with the current
//! time in milliseconds, and applies the commands and signals that come out.

pub mod config;
pub mod constants;
pub mod hue;
pub mod overlay;
pub mod page;
pub mod project;
pub mod scroll;
pub mod section;
pub mod timer;
pub mod viewport;
pub mod visibility;
pub mod visual;

pub use config::*;
pub use hue::*;
pub use overlay::*;
pub use page::*;
pub use project::*;
pub use scroll::*;
pub use section::*;
pub use timer::*;
pub use viewport::*;
pub use visibility::*;
pub use visual::*;
