//! Page renderer: the marketing page as terminal text

use crate::output::banner::StatusBanner;
use colored::Colorize;
use hvac_domain::{
    ContactField, ContactMessage, QuoteField, QuoteRequest, SiteContent, SubmitStatus,
    Testimonial,
};

const WIDTH: usize = 60;

/// Formats the site page and its pieces for console display
pub struct PageRenderer;

impl PageRenderer {
    /// Render the whole page
    pub fn render(
        content: &SiteContent,
        testimonials: &[Testimonial],
        status: &SubmitStatus,
    ) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header(content.business_name));
        output.push_str(&format!("{}\n", content.nav.join("  |  ").dimmed()));

        // Hero
        output.push_str(&format!(
            "\n{}\n{}\n",
            content.headline.bold(),
            content.tagline
        ));

        // Services
        output.push_str(&Self::section_header("Expert HVAC Services"));
        for service in content.services {
            output.push_str(&format!(
                "  {} - {}\n",
                service.title.yellow().bold(),
                service.description
            ));
        }

        // Brands
        output.push_str(&Self::section_header("Brands We Service"));
        output.push_str(&format!("  {}\n", content.brands.join(", ")));

        // Contact
        output.push_str(&Self::section_header("Contact Us"));
        for line in content.contact_lines {
            output.push_str(&format!("  * {}\n", line));
        }
        if let Some(banner) = StatusBanner::render(status) {
            output.push_str(&format!("\n  {}\n", banner));
        }

        // Testimonials
        output.push_str(&Self::section_header(content.testimonials_heading));
        output.push_str(&Self::render_testimonials(testimonials));

        // Footer
        output.push_str(&Self::footer(content));

        output
    }

    /// Render the testimonial cards. An empty list renders nothing.
    pub fn render_testimonials(testimonials: &[Testimonial]) -> String {
        let mut output = String::new();
        for testimonial in testimonials {
            output.push_str(&format!(
                "  {}\n  {}\n  {}\n\n",
                Self::stars(testimonial).yellow(),
                testimonial.comment,
                testimonial.name.bold()
            ));
        }
        output
    }

    /// One star per rating point
    pub fn stars(testimonial: &Testimonial) -> String {
        "*".repeat(testimonial.star_count())
    }

    /// Current values of the quote form
    pub fn render_quote_form(form: &QuoteRequest) -> String {
        let rows: Vec<(&str, &str)> = QuoteField::ALL
            .iter()
            .map(|f| (f.as_str(), form.value(*f)))
            .collect();
        Self::form_block("Request a Quote", &rows)
    }

    /// Current values of the contact form
    pub fn render_contact_form(form: &ContactMessage) -> String {
        let rows: Vec<(&str, &str)> = ContactField::ALL
            .iter()
            .map(|f| (f.as_str(), form.value(*f)))
            .collect();
        Self::form_block("Send a Message", &rows)
    }

    fn form_block(title: &str, rows: &[(&str, &str)]) -> String {
        let mut output = format!("{}\n", title.cyan().bold());
        for (field, value) in rows {
            let shown = if value.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                value.to_string()
            };
            output.push_str(&format!("  {:<14}{}\n", field, shown));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{:^width$}\n{}\n",
            line.cyan(),
            title.bold(),
            line.cyan(),
            width = WIDTH
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer(content: &SiteContent) -> String {
        let mut output = format!("\n{}\n", "=".repeat(WIDTH).cyan());
        output.push_str(&format!(
            "{}: {}\n",
            content.business_name.bold(),
            content.footer_blurb
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Services:".dimmed(),
            content.footer_services.join(", ")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Contact:".dimmed(),
            content.footer_links.join(", ")
        ));
        output.push_str(&format!("{}\n", content.copyright.dimmed()));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvac_domain::ServiceType;

    fn testimonial(rating: i32) -> Testimonial {
        Testimonial {
            id: 1,
            name: "Dana R.".to_string(),
            rating,
            comment: "Installed a new mini-split in a day".to_string(),
        }
    }

    #[test]
    fn test_page_contains_static_content() {
        let page = PageRenderer::render(
            SiteContent::continental(),
            &[],
            &SubmitStatus::default(),
        );
        assert!(page.contains("Continental HVAC"));
        assert!(page.contains("Troubleshooting & Repair"));
        assert!(page.contains("Mitsubishi"));
        assert!(page.contains("info@continentalhvac.com"));
        assert!(page.contains("What Our Customers Say"));
    }

    #[test]
    fn test_page_shows_banner_only_when_visible() {
        let content = SiteContent::continental();
        let hidden = PageRenderer::render(content, &[], &SubmitStatus::default());
        let shown = PageRenderer::render(content, &[], &SubmitStatus::error("Invalid email"));
        assert!(!hidden.contains("Invalid email"));
        assert!(shown.contains("Invalid email"));
    }

    #[test]
    fn test_stars_follow_rating() {
        assert_eq!(PageRenderer::stars(&testimonial(3)), "***");
        assert_eq!(PageRenderer::stars(&testimonial(12)), "*****");
    }

    #[test]
    fn test_empty_testimonials_render_nothing() {
        assert!(PageRenderer::render_testimonials(&[]).is_empty());
        let rendered = PageRenderer::render_testimonials(&[testimonial(5)]);
        assert!(rendered.contains("Dana R."));
    }

    #[test]
    fn test_quote_form_shows_service_type() {
        let form = QuoteRequest {
            name: "A".to_string(),
            service_type: ServiceType::Maintenance,
            ..QuoteRequest::default()
        };
        let rendered = PageRenderer::render_quote_form(&form);
        assert!(rendered.contains("service_type"));
        assert!(rendered.contains("maintenance"));
        assert!(rendered.contains("(empty)"));
    }
}
