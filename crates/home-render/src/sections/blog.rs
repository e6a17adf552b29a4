//! Blog teaser cards.

use home_core::BlogPost;

use crate::escape::html_escape;

/// Render one blog teaser card.
pub fn render_blog_card(post: &BlogPost) -> String {
    format!(
        r#"<div class="blog-card">
    <div class="blog-image">
        <img src="{image}" alt="{title}" loading="lazy">
    </div>
    <div class="blog-content">
        <div class="blog-meta">
            <span><i class="fas fa-calendar"></i> {date}</span>
            <span><i class="fas fa-tag"></i> {category}</span>
            <span><i class="fas fa-clock"></i> {read_time}</span>
        </div>
        <h3 class="blog-title">{title}</h3>
        <p class="blog-excerpt">{excerpt}</p>
        <a href="{url}" class="btn-primary">Read More</a>
    </div>
</div>"#,
        image = html_escape(&post.image),
        title = html_escape(&post.title),
        date = html_escape(&post.date),
        category = html_escape(&post.category),
        read_time = html_escape(&post.read_time),
        excerpt = html_escape(&post.excerpt),
        url = html_escape(&post.url),
    )
}

/// Render at most `limit` teaser cards from the front of `posts`.
pub fn render_blog_teasers(posts: &[BlogPost], limit: usize) -> String {
    posts
        .iter()
        .take(limit)
        .map(render_blog_card)
        .collect::<Vec<_>>()
        .join("\n")
}
