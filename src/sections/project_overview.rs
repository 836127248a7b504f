use crate::document::{Document, TableStyle};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("PROJECT OVERVIEW", 1)?;

    doc.add_heading("Business Purpose", 2)?;
    doc.add_paragraph(
        "VibeLink Ghana addresses a critical need in the Ghanaian event planning ecosystem by \
         digitizing the invitation process. Traditional paper invitations are costly, time-consuming, \
         and environmentally unfriendly. VibeLink Ghana provides an eco-friendly, cost-effective, \
         and efficient alternative that allows event organizers to create beautiful digital \
         invitations, track RSVPs, and manage guest lists seamlessly.",
    );

    doc.add_heading("Target Market", 2)?;
    doc.add_labeled_list_spaced(
        &[
            (
                "Individual Event Planners",
                "Couples planning weddings, families organizing funerals, \
                 parents hosting naming ceremonies and graduations",
            ),
            (
                "Corporate Clients",
                "Companies organizing product launches, conferences, team building \
                 events, and corporate celebrations",
            ),
            (
                "Event Planning Agencies",
                "Professional event planners managing multiple clients and \
                 events simultaneously",
            ),
            (
                "Educational Institutions",
                "Schools and universities for graduation ceremonies, \
                 award nights, and institutional events",
            ),
        ],
        1.15,
    );

    doc.add_heading("Unique Value Proposition", 2)?;
    doc.add_bullets_spaced(
        &[
            "Culturally Relevant: Designed specifically for Ghanaian events with appropriate templates \
             and cultural considerations",
            "Affordable Pricing: Competitive pricing structure accessible to various market segments",
            "Easy to Use: Intuitive interface requiring no technical expertise",
            "Instant Delivery: Digital invitations delivered immediately via email and WhatsApp",
            "Track Engagement: Real-time tracking of invitation views and RSVP responses",
            "Professional Templates: Beautifully designed templates for all event types",
            "Secure Payments: Integrated with Paystack for safe and reliable payment processing",
            "Customer Support: AI-powered chatbot for 24/7 assistance",
        ],
        1.15,
    );

    doc.add_heading("Website Access", 2)?;
    doc.add_table_from_rows(
        TableStyle::LightGridAccent1,
        &[
            &["Website URL", "https://vibelinkgh.com/"],
            &["GitHub Repository", "https://github.com/xboggg/vibe-link-ghana-3e5cfc20"],
            &["Production Server", "/var/www/vibelinkgh.com/"],
        ],
    )?;

    doc.add_page_break();
    Ok(())
}
