use crate::document::Document;
use crate::errors::DocumentError;
use crate::sections::SectionContext;

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("EXECUTIVE SUMMARY", 1)?;

    doc.add_paragraph(
        "VibeLink Ghana is a comprehensive digital event invitation platform designed specifically \
         for the Ghanaian market. The platform revolutionizes how Ghanaians create, manage, and \
         distribute invitations for various events including weddings, funerals, naming ceremonies, \
         graduations, and corporate events.",
    );

    doc.add_heading("Key Achievements", 2)?;
    doc.add_bullets_spaced(
        &[
            "Fully functional digital invitation creation and management system",
            "Integrated payment processing with Paystack for seamless transactions",
            "Comprehensive admin dashboard with real-time analytics",
            "Customer portal for order tracking and management",
            "AI-powered chatbot using Google Gemini for customer support",
            "Multi-channel communication via email and WhatsApp integration",
            "SEO-optimized with Progressive Web App capabilities",
            "Referral program to drive organic growth",
            "Blog system for content marketing",
            "Professional portfolio showcase",
        ],
        1.15,
    );

    doc.add_heading("Technology Highlights", 2)?;
    doc.add_paragraph(
        "The platform leverages modern web technologies including React 18.3.1 with TypeScript \
         for type safety, Vite for blazing-fast builds, Tailwind CSS with shadcn-ui for beautiful \
         and accessible UI components, and Supabase as a complete backend-as-a-service solution \
         providing PostgreSQL database, authentication, and serverless functions.",
    );
    doc.add_paragraph(
        "The architecture follows a modern three-tier deployment model: development on local PC, \
         version control via GitHub, and production deployment on a dedicated server at \
         /var/www/vibelinkgh.com/.",
    );

    doc.add_page_break();
    Ok(())
}
