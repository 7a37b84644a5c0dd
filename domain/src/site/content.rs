//! Marketing copy rendered around the forms and testimonials

/// One service card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteService {
    pub title: &'static str,
    pub description: &'static str,
}

/// All static text of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteContent {
    pub business_name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub nav: &'static [&'static str],
    pub services: &'static [SiteService],
    pub brands: &'static [&'static str],
    pub contact_lines: &'static [&'static str],
    pub testimonials_heading: &'static str,
    pub footer_blurb: &'static str,
    pub footer_services: &'static [&'static str],
    pub footer_links: &'static [&'static str],
    pub copyright: &'static str,
}

static CONTINENTAL_HVAC: SiteContent = SiteContent {
    business_name: "Continental HVAC",
    headline: "Expert Heating and Cooling Solutions for Year Round Comfort",
    tagline: "Specializing in all forms of air conditioning",
    nav: &["Services", "About", "Contact"],
    services: &[
        SiteService {
            title: "Installation",
            description: "Expert HVAC system installation",
        },
        SiteService {
            title: "Troubleshooting & Repair",
            description: "Fast, reliable repair service",
        },
        SiteService {
            title: "Maintenance",
            description: "Regular maintenance plans",
        },
    ],
    brands: &[
        "Tosot",
        "Daikin",
        "Mitsubishi",
        "LG",
        "Trane",
        "Goodman",
        "Carrier",
        "GREE",
    ],
    contact_lines: &[
        "24/7 Emergency Service Available",
        "info@continentalhvac.com",
        "Serving NYC & Tri-State Area",
        "Mon-Fri: 8am-6pm",
    ],
    testimonials_heading: "What Our Customers Say",
    footer_blurb: "Expert heating and cooling solutions for year-round comfort",
    footer_services: &["Installation", "Repair", "Maintenance", "Commercial HVAC"],
    footer_links: &["Emergency Service", "Request Quote", "Service Areas", "FAQ"],
    copyright: "© 2024 Continental HVAC. All rights reserved.",
};

impl SiteContent {
    /// The Continental HVAC site copy
    pub fn continental() -> &'static SiteContent {
        &CONTINENTAL_HVAC
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        CONTINENTAL_HVAC
    }
}
