pub mod date_extractor;
pub mod export;
pub mod pipeline;
pub mod renderer;
pub mod site_layout;
pub mod static_scraper;

pub use date_extractor::*;
pub use export::*;
pub use pipeline::*;
pub use renderer::*;
pub use site_layout::*;
pub use static_scraper::*;
