mod colorscheme;
mod rc;

pub use colorscheme::ColorScheme;
pub use rc::RcConfig;
