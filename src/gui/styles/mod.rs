pub mod theme;

pub use theme::{get_embedded_css, CssClasses};
