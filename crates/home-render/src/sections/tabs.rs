//! Category tabs.

use home_core::Category;

use crate::escape::html_escape;

/// Render the category tab bar. The tab whose key equals `active` is marked.
pub fn render_category_tabs(
    categories: &[Category],
    active: &str,
    href: impl Fn(Category) -> String,
) -> String {
    let tabs: String = categories
        .iter()
        .map(|category| {
            let class = if category.as_str() == active {
                "tab-btn active"
            } else {
                "tab-btn"
            };
            format!(
                r#"
    <a class="{class}" data-category="{key}" href="{href}">{label}</a>"#,
                class = class,
                key = category.as_str(),
                href = html_escape(&href(*category)),
                label = category.label(),
            )
        })
        .collect();

    format!(r#"<nav class="category-tabs">{}
</nav>"#, tabs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_marked() {
        let html = render_category_tabs(&Category::ALL, "kitchen", |c| format!("/?category={}", c));

        assert_eq!(html.matches("tab-btn active").count(), 1);
        assert!(html.contains(r#"<a class="tab-btn active" data-category="kitchen" href="/?category=kitchen">Kitchen</a>"#));
        assert!(html.contains(r#"<a class="tab-btn" data-category="smart-home""#));
    }

    #[test]
    fn test_unknown_active_marks_nothing() {
        let html = render_category_tabs(&Category::ALL, "garden", |_| "#".to_string());
        assert!(!html.contains("tab-btn active"));
        assert_eq!(html.matches("tab-btn").count(), 5);
    }
}
