use crate::document::{Document, TableStyle};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

const FIELD_HEADER: [&str; 3] = ["Field", "Type", "Description"];

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("DATABASE SCHEMA", 1)?;

    doc.add_heading("Database Overview", 2)?;
    doc.add_paragraph(
        "VibeLink Ghana uses PostgreSQL 14.1 via Supabase with 46 migration files tracking \
         schema evolution. The database implements Row Level Security (RLS) for fine-grained \
         access control and uses foreign key constraints to maintain referential integrity.",
    );

    doc.add_heading("Core Tables", 2)?;

    schema_table(
        doc,
        "orders",
        "Core table for managing customer orders.",
        &[
            &["id", "UUID", "Primary key, auto-generated"],
            &["customer_id", "UUID", "Foreign key to customers table"],
            &["order_number", "VARCHAR", "Unique human-readable order ID"],
            &["event_type", "VARCHAR", "Wedding, Funeral, Naming, Graduation, Corporate"],
            &["package_name", "VARCHAR", "Basic, Standard, Premium"],
            &["status", "VARCHAR", "Pending, Processing, Design Review, Completed, Cancelled"],
            &["total_price", "DECIMAL", "Total order amount in GHS"],
            &["payment_status", "VARCHAR", "Pending, Paid, Refunded"],
            &["created_at", "TIMESTAMP", "Order creation timestamp"],
            &["updated_at", "TIMESTAMP", "Last update timestamp"],
            &["completed_at", "TIMESTAMP", "Order completion timestamp"],
            &["notes", "TEXT", "Admin notes and special instructions"],
        ],
    )?;

    schema_table(
        doc,
        "customers",
        "Stores customer account information.",
        &[
            &["id", "UUID", "Primary key, matches Supabase auth.users.id"],
            &["email", "VARCHAR", "Customer email (unique)"],
            &["full_name", "VARCHAR", "Customer full name"],
            &["phone", "VARCHAR", "Phone number"],
            &["created_at", "TIMESTAMP", "Account creation date"],
            &["updated_at", "TIMESTAMP", "Last profile update"],
            &["total_orders", "INTEGER", "Count of orders placed"],
            &["lifetime_value", "DECIMAL", "Total revenue from customer"],
            &["referral_code", "VARCHAR", "Unique referral code"],
            &["referred_by", "UUID", "Foreign key to customers (referrer)"],
        ],
    )?;

    schema_table(
        doc,
        "payments",
        "Tracks all payment transactions.",
        &[
            &["id", "UUID", "Primary key"],
            &["order_id", "UUID", "Foreign key to orders"],
            &["amount", "DECIMAL", "Payment amount"],
            &["currency", "VARCHAR", "GHS, USD, etc."],
            &["status", "VARCHAR", "Success, Pending, Failed"],
            &["payment_method", "VARCHAR", "Card, Mobile Money, Bank Transfer"],
            &["provider_reference", "VARCHAR", "Paystack transaction reference"],
            &["created_at", "TIMESTAMP", "Payment initiation time"],
            &["completed_at", "TIMESTAMP", "Payment completion time"],
        ],
    )?;

    doc.add_heading("Supporting Tables", 2)?;
    doc.add_labeled_list(&[
        ("order_items", "Individual line items within an order (invitation designs, add-ons)"),
        ("invitations", "Stores invitation design data, templates, and customizations"),
        ("referrals", "Tracks referral relationships and commission earnings"),
        ("blog_posts", "Blog content with title, content, author, publish date, SEO data"),
        ("portfolio_items", "Portfolio showcase items with images and descriptions"),
        ("surveys", "Customer feedback surveys and responses"),
        ("abandoned_carts", "Tracks incomplete orders for recovery campaigns"),
        ("ai_generated_content", "AI-generated content for approval workflow"),
        ("analytics_events", "User interaction tracking for behavioral analysis"),
        ("email_templates", "Transactional email templates"),
        ("notifications", "System notifications for customers and admins"),
        ("rate_limits", "API rate limiting data"),
        ("admin_users", "Admin account information and permissions"),
    ]);

    doc.add_heading("Key Relationships", 2)?;
    doc.add_paragraph("Database relationships enforce data integrity:");
    doc.add_bullets(&[
        "customers 1:N orders (one customer can have many orders)",
        "orders 1:N order_items (one order can have multiple items)",
        "orders 1:N payments (one order can have multiple payment attempts)",
        "customers 1:1 referral_code (unique referral code per customer)",
        "customers 1:N referrals (one customer can refer many others)",
        "orders 1:1 invitations (each order has one invitation design)",
        "customers 1:N notifications (one customer receives many notifications)",
        "customers 1:N abandoned_carts (tracking multiple cart abandonment events)",
    ]);

    doc.add_heading("Migration Strategy", 2)?;
    doc.add_paragraph(
        "Database schema changes are managed through Supabase migrations with 46 migration \
         files tracking the evolution of the database schema.",
    );

    doc.add_heading("Migration Process", 3)?;
    doc.add_numbered(&[
        "Create new migration file: supabase migration new migration_name",
        "Write SQL DDL statements in migration file",
        "Test migration in local development environment",
        "Review migration for potential data loss or performance issues",
        "Apply migration to staging environment",
        "Verify migration success and data integrity",
        "Apply migration to production environment",
        "Monitor for errors and performance degradation",
        "Document migration in changelog",
    ]);

    doc.add_heading("Example Migration Files", 3)?;
    doc.add_bullets(&[
        "20241230_order_priority.sql - Added priority field to orders table",
        "20241230_rate_limit_table.sql - Created rate limiting table",
        "20251225000923_*.sql - Various schema enhancements",
    ]);

    doc.add_heading("Row Level Security (RLS)", 3)?;
    doc.add_paragraph("RLS policies ensure users can only access data they are authorized to see:");
    doc.add_bullets(&[
        "Customers can only view their own orders and profile",
        "Admins have full access to all data",
        "Public users can view portfolio and blog posts",
        "Unauthenticated users cannot access customer or order data",
        "Insert policies validate data before allowing creation",
        "Update policies ensure users can only modify their own data",
        "Delete policies restrict data deletion to authorized users",
    ]);

    doc.add_page_break();
    Ok(())
}

// Heading, one-line description and a Field/Type/Description table
fn schema_table(doc: &mut Document, name: &str, description: &str, fields: &[&[&str]]) -> Result<(), DocumentError> {
    doc.add_heading(name, 3)?;
    doc.add_paragraph(description);
    doc.add_table_with_header(TableStyle::MediumGrid1Accent1, &FIELD_HEADER, fields)
}
