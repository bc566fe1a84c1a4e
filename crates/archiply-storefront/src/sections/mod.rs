//! HTML renderers for the storefront page regions.

mod cart_panel;
mod newsletter;
mod notification;
mod product_grid;
mod testimonials;

pub use cart_panel::*;
pub use newsletter::*;
pub use notification::*;
pub use product_grid::*;
pub use testimonials::*;

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
        );
    }
}
