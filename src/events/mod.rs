pub mod pointer;
pub mod scroll;

pub use pointer::{wire_overlay_close, wire_project_clicks, wire_touch_isolation};
pub use scroll::{wire_resize, wire_scroll};
