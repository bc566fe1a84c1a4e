//! Customer testimonials shown in the slider.

use serde::{Deserialize, Serialize};

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author_name: String,
    /// Where the customer is from, shown under the name.
    pub location: String,
    pub avatar_url: Option<String>,
}

impl Testimonial {
    pub fn new(quote: &str, name: &str, location: &str) -> Self {
        Self {
            quote: quote.to_string(),
            author_name: name.to_string(),
            location: location.to_string(),
            avatar_url: None,
        }
    }

    /// Up to two initials for the placeholder avatar.
    pub fn initials(&self) -> String {
        self.author_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect()
    }
}

/// Testimonials section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub section_title: String,
    pub testimonials: Vec<Testimonial>,
}

impl TestimonialsContent {
    /// Keep at most `count` testimonials.
    pub fn truncated(mut self, count: usize) -> Self {
        self.testimonials.truncate(count);
        self
    }

    pub fn len(&self) -> usize {
        self.testimonials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.testimonials.is_empty()
    }
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            section_title: "What Our Customers Say".to_string(),
            testimonials: vec![
                Testimonial::new(
                    "The Modern Sofa transformed our living room. Solid build, and delivery was faster than promised.",
                    "Sarah Johnson",
                    "Portland, OR",
                ),
                Testimonial::new(
                    "I work from home every day and the Ergonomic Chair has made a real difference to my back.",
                    "Michael Chen",
                    "Austin, TX",
                ),
                Testimonial::new(
                    "Our dining table is the centerpiece of every family dinner now. Beautiful craftsmanship.",
                    "Emily Rodriguez",
                    "Denver, CO",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let t = Testimonial::new("Great", "Emily Rose Rodriguez", "Denver, CO");
        assert_eq!(t.initials(), "ER");
    }

    #[test]
    fn test_truncated() {
        let content = TestimonialsContent::default();
        assert_eq!(content.len(), 3);
        assert_eq!(content.clone().truncated(2).len(), 2);
        assert_eq!(content.truncated(10).len(), 3);
    }
}
