//! The assembled home page.

use crate::escape::html_escape;
use crate::shell::{HeadContent, Shell};

const PAGE_STYLES: &str = r#"
.products-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; }
.product-image { position: relative; }
.trending-badge { position: absolute; top: 10px; right: 10px; background: #ff6b6b; color: white; padding: 5px 10px; border-radius: 15px; font-size: 0.8rem; font-weight: 600; }
.tab-btn.active { border-bottom: 2px solid #2563eb; }
.loading { display: flex; justify-content: center; padding: 2rem; }
.spinner { width: 32px; height: 32px; border: 3px solid #e5e7eb; border-top-color: #2563eb; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

/// Rendered sections of the single page, ready to be placed in the shell.
#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub site_name: String,
    /// Category tab bar.
    pub tabs: String,
    /// Product cards (or the loading indicator).
    pub products: String,
    /// Blog teaser cards.
    pub blog: String,
    /// Newsletter form or confirmation.
    pub newsletter: String,
}

impl HomePage {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            ..Default::default()
        }
    }

    pub fn with_tabs(mut self, html: String) -> Self {
        self.tabs = html;
        self
    }

    pub fn with_products(mut self, html: String) -> Self {
        self.products = html;
        self
    }

    pub fn with_blog(mut self, html: String) -> Self {
        self.blog = html;
        self
    }

    pub fn with_newsletter(mut self, html: String) -> Self {
        self.newsletter = html;
        self
    }

    /// Shell carrying the site header and footer.
    pub fn shell(&self) -> Shell {
        let name = html_escape(&self.site_name);
        let head = HeadContent::new(self.site_name.clone())
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta(
                "description",
                "Curated home essentials and market insights for Virginia homeowners.",
            )
            .with_style(PAGE_STYLES);

        Shell::new(head)
            .with_body_start(format!(
                r##"<body>
<header class="site-header">
    <nav class="nav-container">
        <a href="/" class="logo">{name}</a>
        <div class="nav-links">
            <a href="#products">Products</a>
            <a href="#blog">Blog</a>
            <a href="#newsletter">Newsletter</a>
        </div>
    </nav>
</header>
<main>
"##
            ))
            .with_body_end(format!(
                r#"</main>
<footer class="site-footer">
    <p>&copy; {name}. As an Amazon Associate we earn from qualifying purchases.</p>
</footer>
</body>
"#
            ))
    }

    /// Render the full document.
    pub fn render(&self) -> String {
        let products = format!(
            r#"<section class="products" id="products" data-section="products">
    <h2>Essentials for Your New Home</h2>
    {}
    <div id="products-container" class="products-grid">
{}
    </div>
</section>"#,
            self.tabs, self.products
        );
        let blog = format!(
            r#"<section class="blog" id="blog" data-section="blog">
    <h2>From the Blog</h2>
    <div id="blog-container" class="blog-grid">
{}
    </div>
</section>"#,
            self.blog
        );

        self.shell()
            .render(&[products, blog, self.newsletter.clone()])
    }
}
