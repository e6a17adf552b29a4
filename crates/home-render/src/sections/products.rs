//! Product cards and star ratings.

use home_core::Product;

use crate::escape::html_escape;

/// Glyph for each whole rating point.
pub const FULL_STAR: &str = "⭐";
/// Glyph appended when the rating has a fractional part.
pub const HALF_STAR: &str = "☆";
/// Badge shown on trending products.
pub const TRENDING_BADGE: &str = r#"<span class="trending-badge">🔥 Trending</span>"#;
/// Placeholder shown while the product grid loads.
pub const LOADING_INDICATOR: &str = r#"<div class="loading"><div class="spinner"></div></div>"#;

/// Star glyphs for a rating.
///
/// One full star per whole point, plus a single half star whenever the
/// rating is not a whole number. There is no rounding tolerance: `4.01` gets
/// a half star.
pub fn render_stars(rating: f64) -> String {
    let full = rating.floor().max(0.0) as usize;
    let mut stars = FULL_STAR.repeat(full);
    if rating.fract() != 0.0 {
        stars.push_str(HALF_STAR);
    }
    stars
}

/// Render one product card. `href` is the target of the buy button.
pub fn render_product_card(product: &Product, href: &str) -> String {
    let badge = if product.trending { TRENDING_BADGE } else { "" };

    format!(
        r#"<div class="product-card" data-product-id="{id}" data-category="{category}">
    <div class="product-image">
        <img src="{image}" alt="{title}" loading="lazy">
        {badge}
    </div>
    <div class="product-info">
        <h3 class="product-title">{title}</h3>
        <p class="product-description">{description}</p>
        <div class="product-price">{price}</div>
        <div class="product-rating">
            <div class="stars">{stars}</div>
            <span class="rating-text">{rating} ({reviews} reviews)</span>
        </div>
        <a class="product-btn" href="{href}" target="_blank" rel="noopener sponsored">View on Amazon</a>
    </div>
</div>"#,
        id = product.id,
        category = product.category,
        image = html_escape(&product.image),
        title = html_escape(&product.title),
        badge = badge,
        description = html_escape(&product.description),
        price = html_escape(&product.price),
        stars = render_stars(product.rating),
        rating = product.rating,
        reviews = html_escape(&product.reviews),
        href = html_escape(href),
    )
}

/// Render cards for `products` in order.
pub fn render_product_grid(products: &[Product], href: impl Fn(&Product) -> String) -> String {
    products
        .iter()
        .map(|p| render_product_card(p, &href(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Skeleton shown before the first grid render.
pub fn render_loading() -> String {
    LOADING_INDICATOR.to_string()
}
