//! Testimonial slider section.

use crate::data::TestimonialsContent;

use super::html_escape;

/// Render the testimonial slider with `active` marking the current slide
/// and its dot.
pub fn render_testimonials(content: &TestimonialsContent, active: usize) -> String {
    let slides: String = content
        .testimonials
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let avatar = t
                .avatar_url
                .as_ref()
                .map(|url| {
                    format!(
                        r#"<img src="{}" alt="{}" class="testimonial-avatar">"#,
                        html_escape(url),
                        html_escape(&t.author_name)
                    )
                })
                .unwrap_or_else(|| {
                    format!(
                        r#"<div class="testimonial-avatar placeholder">{}</div>"#,
                        html_escape(&t.initials())
                    )
                });

            format!(
                r#"<div class="testimonial{}">
            <p class="testimonial-quote">"{}"</p>
            <div class="testimonial-author">
                {}
                <div class="author-info">
                    <h4 class="author-name">{}</h4>
                    <p class="author-location">{}</p>
                </div>
            </div>
        </div>"#,
                active_class(i, active),
                html_escape(&t.quote),
                avatar,
                html_escape(&t.author_name),
                html_escape(&t.location)
            )
        })
        .collect();

    let dots: String = (0..content.len())
        .map(|i| format!(r#"<span class="slider-dot{}" data-index="{i}"></span>"#, active_class(i, active)))
        .collect();

    format!(
        r#"<section class="testimonials" id="testimonials">
    <h2 class="section-title">{}</h2>
    <div class="testimonial-slider">
        {}
    </div>
    <div class="slider-dots">{}</div>
</section>"#,
        html_escape(&content.section_title),
        slides,
        dots
    )
}

fn active_class(index: usize, active: usize) -> &'static str {
    if index == active {
        " active"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_active_slide_and_dot() {
        let html = render_testimonials(&TestimonialsContent::default(), 1);

        assert_eq!(html.matches(r#"<div class="testimonial active">"#).count(), 1);
        assert_eq!(html.matches(r#"class="slider-dot""#).count(), 2);
        assert!(html.contains(r#"<span class="slider-dot active" data-index="1"></span>"#));
        assert!(html.contains(r#"<div class="testimonial-avatar placeholder">MC</div>"#));
    }

    #[test]
    fn test_no_testimonials() {
        let content = TestimonialsContent::default().truncated(0);
        let html = render_testimonials(&content, 0);
        assert!(!html.contains("slider-dot active"));
        assert!(html.contains(r#"<div class="slider-dots"></div>"#));
    }
}
