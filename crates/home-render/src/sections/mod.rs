//! Section renderers for the home page.

mod blog;
mod newsletter;
mod products;
mod tabs;

pub use blog::*;
pub use newsletter::*;
pub use products::*;
pub use tabs::*;
