//! Server-side render of the whole page.

use home_core::{AppContext, Category, Product};
use home_render::sections::{
    render_blog_teasers, render_category_tabs, render_newsletter, render_product_grid,
};
use home_render::HomePage;

/// Link scheme for a rendered page.
pub struct PageLinks<'a> {
    /// Buy button target for a product.
    pub card: &'a dyn Fn(&Product) -> String,
    /// Tab target for a category.
    pub tab: &'a dyn Fn(Category) -> String,
    /// Newsletter form action.
    pub newsletter_action: &'a str,
}

/// Render the page with `active`'s products already drawn (no loading delay).
///
/// `newsletter` replaces the signup form when given, e.g. with a confirmation.
pub fn render_home_page(
    ctx: &AppContext,
    active: &str,
    links: &PageLinks<'_>,
    newsletter: Option<String>,
) -> String {
    let categories = ctx.catalog.categories();
    let products = ctx.catalog.get_by_category(active);

    HomePage::new(ctx.config.site.name.clone())
        .with_tabs(render_category_tabs(&categories, active, links.tab))
        .with_products(render_product_grid(products, links.card))
        .with_blog(render_blog_teasers(
            ctx.blog.posts(),
            ctx.config.site.blog_teaser_count,
        ))
        .with_newsletter(newsletter.unwrap_or_else(|| render_newsletter(links.newsletter_action)))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use home_core::SiteConfig;

    #[test]
    fn test_page_draws_active_category() {
        let ctx = AppContext::new(SiteConfig::default());
        let card = |p: &Product| format!("/go/{}", p.id);
        let tab = |c: Category| format!("/?category={}", c);
        let links = PageLinks {
            card: &card,
            tab: &tab,
            newsletter_action: "/api/newsletter",
        };

        let html = render_home_page(&ctx, "security", &links, None);

        assert!(html.contains(r#"<a class="tab-btn active" data-category="security""#));
        assert_eq!(html.matches(r#"class="product-card""#).count(), 3);
        assert!(html.contains(r#"href="/go/5""#));
        assert_eq!(html.matches(r#"class="blog-card""#).count(), 3);
        assert!(html.contains(r#"action="/api/newsletter""#));
    }
}
