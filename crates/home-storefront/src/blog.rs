use home_core::AppContext;
use home_render::sections::render_blog_teasers;

use crate::RenderTarget;

/// Draw the blog teasers into `target`. No-op without a target.
pub fn load_blog_posts(ctx: &AppContext, target: Option<&dyn RenderTarget>) {
    let Some(target) = target else {
        return;
    };
    target.replace(render_blog_teasers(
        ctx.blog.posts(),
        ctx.config.site.blog_teaser_count,
    ));
}
