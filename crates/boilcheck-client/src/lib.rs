pub mod browser;

pub use browser::{BrowserProbe, BrowserSession};
