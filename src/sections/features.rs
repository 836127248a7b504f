use crate::document::{Document, TableStyle};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("FEATURES & SPECIFICATIONS", 1)?;

    customer_features(doc)?;
    admin_features(doc)?;

    doc.add_heading("Payment Processing", 2)?;
    doc.add_paragraph("Integration with Paystack provides secure and reliable payment processing:");
    doc.add_bullets(&[
        "Paystack payment gateway integration",
        "Support for mobile money (MTN, Vodafone, AirtelTigo)",
        "Card payments (Visa, Mastercard)",
        "Bank transfer option",
        "Secure payment page (PCI DSS compliant)",
        "Automatic payment verification",
        "Payment confirmation emails",
        "Transaction history",
        "Refund processing",
        "Payment webhooks for real-time updates",
        "Multi-currency support (GHS primary)",
        "Test mode for development",
    ]);

    doc.add_heading("AI Chatbot Integration", 2)?;
    doc.add_paragraph("Google Gemini AI powers an intelligent chatbot for customer support:");
    doc.add_bullets(&[
        "Natural language understanding",
        "24/7 availability",
        "Instant responses to common questions",
        "Multi-language support",
        "Contextual conversations",
        "FAQs and knowledge base integration",
        "Escalation to human support",
        "Order status inquiries",
        "Package recommendations",
        "Troubleshooting assistance",
        "Chat history",
        "Feedback collection",
    ]);

    doc.add_heading("SEO Features", 2)?;
    doc.add_bullets(&[
        "React Helmet for dynamic meta tags",
        "SEO-friendly URLs",
        "Open Graph tags for social sharing",
        "Twitter Card integration",
        "Sitemap generation",
        "Robots.txt configuration",
        "Canonical URLs",
        "Structured data (Schema.org)",
        "Image optimization with alt tags",
        "Fast page load times",
        "Mobile responsiveness",
        "HTTPS security",
        "Internal linking structure",
    ]);

    doc.add_heading("Integration Points", 2)?;
    doc.add_table_from_rows(
        TableStyle::LightGridAccent1,
        &[
            &["Integration", "Technology", "Purpose"],
            &["Payment Gateway", "Paystack API", "Process payments securely"],
            &["AI Chatbot", "Google Gemini AI", "Intelligent customer support"],
            &["Email Service", "Supabase Email/SMTP", "Transactional emails"],
            &["WhatsApp", "WhatsApp Business API", "Direct message delivery"],
            &["Analytics", "Custom + Google Analytics", "User behavior tracking"],
        ],
    )?;

    doc.add_page_break();
    Ok(())
}

fn customer_features(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Customer-Facing Features", 2)?;

    doc.add_heading("1. Digital Invitation Creation", 3)?;
    doc.add_paragraph(
        "Customers can create beautiful, customized digital invitations through an intuitive \
         form-based interface:",
    );
    doc.add_bullets(&[
        "Event type selection (Wedding, Funeral, Naming Ceremony, Graduation, Corporate)",
        "Template gallery with culturally appropriate designs",
        "Custom text and messaging",
        "Event details: date, time, venue with map integration",
        "Guest list management",
        "RSVP tracking",
        "Photo upload for personalization",
        "Color scheme customization",
        "Font selection",
        "Preview before finalizing",
    ]);

    doc.add_heading("2. Order Management", 3)?;
    doc.add_bullets(&[
        "Order placement through \"Get Started\" page",
        "Package selection (Basic, Standard, Premium)",
        "Add-on services selection",
        "Real-time price calculation",
        "Order summary review",
        "Secure payment processing",
        "Order confirmation email",
        "Order tracking with unique ID",
        "Order history in customer portal",
        "Invoice generation and download",
    ]);

    doc.add_heading("3. Customer Portal", 3)?;
    doc.add_paragraph("Authenticated customers access a personalized dashboard featuring:");
    doc.add_bullets(&[
        "Overview of all orders",
        "Active orders with status tracking",
        "Completed orders archive",
        "Order details view",
        "Invoice download",
        "Payment history",
        "Profile management",
        "Saved templates",
        "Referral code and earnings",
        "Support ticket system",
    ]);

    doc.add_heading("4. Order Tracking", 3)?;
    doc.add_bullets(&[
        "Track order by Order ID or Email",
        "Real-time status updates",
        "Status stages: Pending, Processing, Design Review, Completed",
        "Estimated completion time",
        "Email notifications on status changes",
        "WhatsApp notifications (optional)",
        "Design preview when ready",
        "Revision request capability",
    ]);

    doc.add_heading("5. Referral Program", 3)?;
    doc.add_paragraph("Customers can earn rewards by referring others to VibeLink Ghana:");
    doc.add_bullets(&[
        "Unique referral code generation",
        "Shareable referral link",
        "Social media sharing buttons",
        "Track referrals and conversions",
        "Earnings dashboard",
        "Automatic commission calculation",
        "Withdrawal request system",
        "Referral leaderboard",
        "Bonus incentives for milestones",
    ]);

    Ok(())
}

fn admin_features(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Admin Features", 2)?;

    doc.add_heading("1. Admin Dashboard", 3)?;
    doc.add_paragraph("Comprehensive admin panel with real-time analytics and management:");
    doc.add_bullets(&[
        "Overview statistics (orders, revenue, customers)",
        "Real-time order notifications",
        "Quick action buttons",
        "Recent orders list",
        "Revenue charts and graphs",
        "Customer growth metrics",
        "Popular packages analysis",
        "Peak usage times",
        "Conversion rate tracking",
    ]);

    doc.add_heading("2. Order Management System", 3)?;
    doc.add_bullets(&[
        "All orders view with filtering",
        "Order status management",
        "Customer information access",
        "Design upload and management",
        "Revision handling",
        "Communication with customers",
        "Order priority setting",
        "Bulk actions",
        "Export to CSV/Excel",
        "Print packing slips",
    ]);

    doc.add_heading("3. Customer Management", 3)?;
    doc.add_bullets(&[
        "Customer database with search",
        "Customer profiles and history",
        "Lifetime value calculation",
        "Customer segmentation",
        "Email customer directly",
        "Add notes to customer profiles",
        "Block/unblock customers",
        "Export customer data",
        "Customer activity logs",
    ]);

    doc.add_heading("4. Content Management", 3)?;
    doc.add_bullets(&[
        "Blog post creation and editing (with TipTap rich text editor)",
        "Portfolio item management",
        "Image upload and gallery",
        "SEO meta data editing",
        "Publish/draft status",
        "Scheduling capabilities",
        "Categories and tags",
        "Featured posts",
        "Analytics per post",
    ]);

    doc.add_heading("5. Analytics & Reports", 3)?;
    doc.add_bullets(&[
        "Revenue reports (daily, weekly, monthly)",
        "Order statistics",
        "Customer acquisition reports",
        "Referral program performance",
        "Popular templates/packages",
        "Conversion funnel analysis",
        "Abandoned cart reports",
        "Traffic source analytics",
        "User behavior tracking",
        "Export reports to PDF/Excel",
    ]);

    Ok(())
}
