//! HTML renderers for the Home Essentials page.
//!
//! Every renderer is a pure function from a record to an HTML fragment, so
//! fragments can be checked without a browser:
//! - `sections` - product cards, star ratings, blog teasers, tabs, newsletter
//! - `Shell` / `HeadContent` - the page document around the sections
//! - `HomePage` - the assembled single page

mod escape;
mod page;
mod shell;

pub mod sections;

pub use escape::html_escape;
pub use page::HomePage;
pub use shell::{HeadContent, Shell};
