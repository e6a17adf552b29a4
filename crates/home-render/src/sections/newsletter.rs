//! Newsletter signup section.

use crate::escape::html_escape;

/// Render the newsletter signup form posting to `action`.
pub fn render_newsletter(action: &str) -> String {
    format!(
        r#"<section class="newsletter" id="newsletter" data-section="newsletter">
    <div class="newsletter-content">
        <h2>Stay in the loop</h2>
        <p>Weekly Virginia real estate insights and home essentials, straight to your inbox.</p>
        <form class="newsletter-form" action="{}" method="POST">
            <input type="email" name="email" placeholder="Enter your email" required aria-label="Email address">
            <button type="submit">Subscribe</button>
        </form>
    </div>
</section>"#,
        html_escape(action)
    )
}

/// Render the confirmation shown after a signup.
pub fn render_newsletter_confirmation(message: &str) -> String {
    format!(
        r#"<section class="newsletter" id="newsletter" data-section="newsletter">
    <div class="newsletter-success">
        <span class="success-icon">✓</span>
        <p>{}</p>
    </div>
</section>"#,
        html_escape(message)
    )
}
