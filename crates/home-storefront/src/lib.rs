//! Interactive behaviour of the Home Essentials page.
//!
//! - [`CategorySelector`] - active tab state and the delayed product render
//! - [`load_blog_posts`] - blog teaser render
//! - [`ClickHandler`] - affiliate decoration, click tracking, navigation
//! - [`NewsletterSignup`] - form submission and confirmation
//! - [`render_home_page`] - server-side render of the whole page
//!
//! Rendering goes through a [`RenderTarget`]; when none is attached the
//! render operations return early.

mod blog;
mod click;
mod newsletter;
mod page;
mod selector;
mod target;

pub use blog::load_blog_posts;
pub use click::{ClickHandler, Navigation, NavigationTarget};
pub use newsletter::{NewsletterSignup, CONFIRMATION_MESSAGE};
pub use page::{render_home_page, PageLinks};
pub use selector::{CardHref, CategorySelector};
pub use target::{Container, RenderTarget};
