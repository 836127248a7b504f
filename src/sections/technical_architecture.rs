/*!
 * Technical architecture chapter: system layers, technology stack tables,
 * frontend and backend structure, key tables and deployment environments.
 */

use crate::document::{Document, TableStyle};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("TECHNICAL ARCHITECTURE", 1)?;

    doc.add_heading("System Architecture Overview", 2)?;
    doc.add_paragraph(
        "VibeLink Ghana follows a modern, cloud-based architecture pattern with clear separation \
         of concerns between frontend presentation, backend business logic, and data persistence.",
    );

    doc.add_bold_line("[DIAGRAM: System Architecture]");
    doc.add_paragraph("Create a diagram showing:\n");
    doc.add_bullets_indented(
        &[
            "Client Layer: Web Browser (React SPA)",
            "CDN Layer: Static asset delivery",
            "Application Layer: Vite-built React application",
            "API Layer: Supabase Edge Functions",
            "Database Layer: PostgreSQL (Supabase)",
            "External Integrations: Paystack, WhatsApp, Gemini AI, Email Services",
            "Storage: Supabase Storage for images and documents",
        ],
        0.5,
    );

    doc.add_heading("Technology Stack Breakdown", 2)?;

    doc.add_heading("Frontend Technologies", 3)?;
    doc.add_table_from_rows(
        TableStyle::LightListAccent1,
        &[
            &["Technology", "Version", "Purpose"],
            &["React", "18.3.1", "UI framework for building component-based interfaces"],
            &["TypeScript", "5.8.3", "Type safety and enhanced developer experience"],
            &["Vite", "5.4.19", "Fast build tool and development server"],
            &["Tailwind CSS", "3.4.17", "Utility-first CSS framework"],
            &["shadcn-ui", "Latest", "Accessible UI component library"],
            &["React Router", "6.30.1", "Client-side routing"],
            &["TanStack Query", "5.83.0", "Data fetching and state management"],
            &["Framer Motion", "12.23.26", "Animation library"],
        ],
    )?;

    doc.add_heading("Backend Technologies", 3)?;
    doc.add_table_from_rows(
        TableStyle::LightListAccent1,
        &[
            &["Technology", "Purpose"],
            &["Supabase", "Backend-as-a-Service platform"],
            &["PostgreSQL 14.1", "Relational database"],
            &["Supabase Auth", "Authentication and authorization"],
            &["Supabase Edge Functions", "Serverless functions"],
            &["Supabase Storage", "File storage"],
            &["Row Level Security (RLS)", "Database-level security"],
        ],
    )?;

    doc.add_heading("Third-Party Integrations", 3)?;
    doc.add_table_from_rows(
        TableStyle::LightListAccent1,
        &[
            &["Service", "Purpose"],
            &["Paystack", "Payment processing for Ghana"],
            &["Google Gemini AI", "AI chatbot for customer support"],
            &["Email Service", "Transactional emails and notifications"],
            &["WhatsApp Business API", "Direct WhatsApp invitation delivery"],
        ],
    )?;

    doc.add_heading("Frontend Architecture", 2)?;
    doc.add_paragraph("The frontend follows a component-based architecture with clear separation of concerns:");
    doc.add_labeled_list(&[
        ("Pages (src/pages/)", "32 page components representing different routes"),
        ("Components (src/components/)", "Reusable UI components organized by feature"),
        ("UI Components (src/components/ui/)", "Base shadcn-ui components"),
        ("Hooks (src/hooks/)", "Custom React hooks for shared logic"),
        ("Integrations (src/integrations/)", "Supabase client and type definitions"),
        ("Data (src/data/)", "Static data and configuration"),
        ("Assets (src/assets/)", "Images, icons, and static files"),
    ]);

    doc.add_heading("Backend Architecture (Supabase)", 2)?;
    doc.add_paragraph("Supabase provides a complete backend infrastructure with the following components:");
    doc.add_bullets(&[
        "PostgreSQL Database with 46 migration files for schema versioning",
        "Automatic REST API generation from database schema",
        "Real-time subscriptions for live data updates",
        "Row Level Security (RLS) policies for fine-grained access control",
        "Edge Functions for custom business logic",
        "Storage buckets for file management",
        "Built-in authentication with email, social providers",
    ]);

    doc.add_heading("Database Structure Overview", 2)?;
    doc.add_paragraph(
        "The database consists of multiple interconnected tables (see Database Schema section \
         for details). Key tables include:",
    );
    doc.add_bullets(&[
        "orders: Core order management",
        "customers: Customer information",
        "order_items: Individual items within orders",
        "invitations: Digital invitation data",
        "payments: Payment transaction records",
        "referrals: Referral program tracking",
        "blog_posts: Content management for blog",
        "portfolio_items: Portfolio showcase",
        "surveys: Customer feedback collection",
        "abandoned_carts: Cart abandonment tracking",
        "ai_generated_content: AI-generated content management",
        "analytics_events: User interaction tracking",
    ]);

    doc.add_heading("Deployment Architecture", 2)?;
    doc.add_paragraph("The deployment follows a modern CI/CD pattern with three distinct environments:");
    doc.add_table_from_rows(
        TableStyle::MediumGrid1Accent1,
        &[
            &["Environment", "Location", "Purpose"],
            &[
                "Development",
                "C:\\Users\\CyberAware\\OneDrive\\...\\vibelink\\app\\",
                "Local development and testing",
            ],
            &[
                "Version Control",
                "https://github.com/xboggg/vibe-link-ghana-3e5cfc20",
                "Central repository and collaboration",
            ],
            &["Production", "/var/www/vibelinkgh.com/", "Live production server"],
        ],
    )?;

    doc.add_page_break();
    Ok(())
}
