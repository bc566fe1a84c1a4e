//! Newsletter signup section.

use crate::newsletter::NewsletterForm;

use super::html_escape;

/// Render the newsletter form, keeping whatever is typed in the field.
pub fn render_newsletter(form: &NewsletterForm) -> String {
    format!(
        r#"<section class="newsletter" id="newsletter">
    <div class="newsletter-content">
        <h2>Subscribe to Our Newsletter</h2>
        <p>Get design inspiration, new arrivals, and exclusive offers delivered to your inbox.</p>
        <form class="newsletter-form">
            <input type="email" placeholder="Enter your email" aria-label="Email address" value="{}">
            <button type="submit" class="btn">Subscribe</button>
        </form>
    </div>
</section>"#,
        html_escape(form.input())
    )
}
