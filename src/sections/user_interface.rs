use crate::document::{Document, TableStyle};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

const LINE_SPACING: f32 = 1.15;
const NAV_INDENT: f32 = 0.5;

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("USER INTERFACE", 1)?;

    page_descriptions(doc)?;
    user_journeys(doc)?;
    navigation(doc)?;
    design_system(doc)?;

    doc.add_page_break();
    Ok(())
}

fn page_descriptions(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Page Descriptions", 2)?;

    doc.add_heading("Public Pages", 3)?;
    doc.add_labeled_list_spaced(
        &[
            (
                "Index (Home)",
                "Landing page with hero section, features showcase, testimonials, \
                 pricing preview, call-to-action buttons, and recent portfolio items",
            ),
            ("About", "Company story, mission, vision, team members, and values"),
            (
                "Services",
                "Detailed description of invitation services, event types covered, \
                 customization options, and delivery methods",
            ),
            (
                "Pricing",
                "Package comparison (Basic, Standard, Premium), pricing table, \
                 add-on services, and clear call-to-action",
            ),
            (
                "Portfolio",
                "Gallery of past invitation designs, filterable by event type, \
                 searchable, with pagination",
            ),
            (
                "Portfolio Detail",
                "Full view of individual portfolio items with multiple images, \
                 description, and related items",
            ),
            (
                "How It Works",
                "Step-by-step explanation of the process from order to delivery, \
                 with visual timeline",
            ),
            ("Blog", "Blog listing page with featured posts, categories, search, and pagination"),
            (
                "Blog Detail",
                "Individual blog post with rich content, sharing buttons, comments, \
                 and related posts",
            ),
            ("Contact", "Contact form, office location map, phone numbers, email, social media links"),
            (
                "Get Started",
                "Order form with package selection, event details input, \
                 customization options, and checkout",
            ),
            ("Track Order", "Order tracking by ID or email, status display, timeline view"),
        ],
        LINE_SPACING,
    );

    doc.add_heading("Customer Portal Pages (Authenticated)", 3)?;
    doc.add_labeled_list_spaced(
        &[
            (
                "Customer Portal Dashboard",
                "Overview of orders, recent activity, quick stats, \
                 referral earnings, and navigation to other portal sections",
            ),
            (
                "Order Details",
                "Complete order information, status timeline, design preview, \
                 invoice download, revision request",
            ),
            (
                "Invoice View",
                "Professional invoice with company details, order breakdown, \
                 payment information, printable format",
            ),
        ],
        LINE_SPACING,
    );

    doc.add_heading("Admin Pages (Admin Access Only)", 3)?;
    doc.add_labeled_list_spaced(
        &[
            ("Admin Auth", "Secure admin login with email/password, optional 2FA"),
            (
                "Admin Dashboard",
                "Comprehensive admin overview with analytics, charts, \
                 recent orders, quick actions, and system health",
            ),
        ],
        LINE_SPACING,
    );

    doc.add_heading("Legal & Policy Pages", 3)?;
    doc.add_labeled_list_spaced(
        &[
            ("Privacy Policy", "Data collection, usage, protection, and user rights"),
            ("Terms of Service", "User agreements, service terms, limitations, and disclaimers"),
            ("Cookie Policy", "Cookie usage, types, and user controls"),
            ("Refund Policy", "Refund conditions, process, and timelines"),
        ],
        LINE_SPACING,
    );

    doc.add_heading("Other Pages", 3)?;
    doc.add_labeled_list_spaced(
        &[
            ("Survey", "Customer feedback and satisfaction survey"),
            ("Thank You", "Order confirmation and thank you message"),
            ("Multi-Language Support", "Language selection interface"),
            ("Not Found (404)", "Custom 404 error page with navigation options"),
        ],
        LINE_SPACING,
    );

    Ok(())
}

fn user_journeys(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("User Journeys", 2)?;

    doc.add_heading("Customer Journey: Ordering an Invitation", 3)?;
    doc.add_bullets(&[
        "1. Visitor lands on homepage (Index.tsx)",
        "2. Explores services and views portfolio",
        "3. Checks pricing packages",
        "4. Clicks \"Get Started\" CTA button",
        "5. Fills out order form with event details",
        "6. Selects package and customization options",
        "7. Reviews order summary",
        "8. Proceeds to payment",
        "9. Completes payment via Paystack",
        "10. Receives order confirmation email",
        "11. Gets order tracking ID",
        "12. Can track order status",
        "13. Receives design for review",
        "14. Approves or requests revisions",
        "15. Receives final invitation",
        "16. Downloads invoice from customer portal",
    ]);

    doc.add_heading("Admin Journey: Processing an Order", 3)?;
    doc.add_bullets(&[
        "1. Admin logs in via AdminAuth.tsx",
        "2. Sees new order notification on dashboard",
        "3. Clicks to view order details",
        "4. Reviews customer requirements",
        "5. Changes order status to \"Processing\"",
        "6. Creates invitation design",
        "7. Uploads design to order",
        "8. Changes status to \"Design Review\"",
        "9. Customer receives notification",
        "10. Customer reviews and provides feedback",
        "11. Admin makes revisions if needed",
        "12. Customer approves final design",
        "13. Admin marks order as \"Completed\"",
        "14. System sends final invitation to customer",
        "15. Admin monitors customer satisfaction",
    ]);

    Ok(())
}

fn navigation(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Navigation Structure", 2)?;
    doc.add_paragraph("The site navigation is organized hierarchically:");

    let menus: [(&str, &[&str]); 4] = [
        (
            "Main Navigation:",
            &[
                "Home",
                "About",
                "Services",
                "Portfolio",
                "Pricing",
                "Blog",
                "How It Works",
                "Contact",
                "Get Started",
                "Track Order",
            ],
        ),
        (
            "Footer Navigation:",
            &[
                "About Us",
                "Services",
                "Contact",
                "Privacy Policy",
                "Terms of Service",
                "Cookie Policy",
                "Refund Policy",
                "Blog",
                "FAQ",
            ],
        ),
        (
            "Customer Portal Navigation:",
            &["Dashboard", "My Orders", "Profile", "Referrals", "Support", "Logout"],
        ),
        (
            "Admin Panel Navigation:",
            &["Dashboard", "Orders", "Customers", "Content", "Analytics", "Settings", "Logout"],
        ),
    ];

    for (caption, items) in menus {
        doc.add_bold_line(caption);
        doc.add_bullets_indented(items, NAV_INDENT);
    }

    Ok(())
}

fn design_system(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Design System", 2)?;

    doc.add_heading("Color Palette", 3)?;
    doc.add_table_with_header(
        TableStyle::LightGridAccent1,
        &["Color Name", "Hex Code", "Usage"],
        &[
            &["Navy Blue", "#1A237E", "Primary brand color, headers, CTAs"],
            &["Gold", "#FFD700", "Accent color, highlights, premium features"],
            &["Purple", "#7C3AED", "Secondary accent, interactive elements"],
            &["Mint", "#E8F5E9", "Success states, positive feedback"],
            &["White", "#FFFFFF", "Backgrounds, cards"],
            &["Gray Scale", "#F5F5F5 to #212121", "Text, borders, backgrounds"],
        ],
    )?;

    doc.add_heading("Typography", 3)?;
    doc.add_table_with_header(
        TableStyle::LightGridAccent1,
        &["Font Family", "Usage", "Weights"],
        &[
            &["Poppins", "Primary font for headings and titles", "600-700 weight"],
            &["Inter", "Body text and UI elements", "400-500 weight"],
            &["Playfair Display", "Decorative headings and special sections", "700 weight"],
        ],
    )?;

    doc.add_heading("Spacing System", 3)?;
    doc.add_paragraph("Consistent spacing using Tailwind CSS spacing scale:");
    doc.add_bullets(&[
        "4px (1)",
        "8px (2)",
        "12px (3)",
        "16px (4)",
        "24px (6)",
        "32px (8)",
        "48px (12)",
        "64px (16)",
        "96px (24)",
    ]);

    doc.add_heading("Component Library", 3)?;
    doc.add_paragraph("UI components built with shadcn-ui and Radix UI:");
    doc.add_bullets(&[
        "Buttons (primary, secondary, outline, ghost)",
        "Forms (inputs, selects, textareas, checkboxes, radio buttons)",
        "Cards (content containers with shadows)",
        "Modals and Dialogs",
        "Dropdowns and Popovers",
        "Tables (responsive data tables)",
        "Tabs and Accordions",
        "Toasts and Notifications",
        "Progress Indicators",
        "Avatars and Badges",
        "Navigation (navbar, sidebar, breadcrumbs)",
        "Charts and Graphs (Recharts)",
    ]);

    Ok(())
}
