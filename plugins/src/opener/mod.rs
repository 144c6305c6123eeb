pub mod browser;

pub use browser::BrowserOpener;
