pub mod check;
pub mod error;
pub mod models;
pub mod parse;
pub mod sampler;
pub mod series;
pub mod slider;
pub mod testutil;
pub mod traits;

pub use check::CheckService;
pub use error::AppError;
pub use models::{CheckOptions, CheckReport, SeriesStats};
pub use traits::PageProbe;
