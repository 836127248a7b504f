use crate::document::{Document, TableStyle};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("SECURITY", 1)?;

    authentication(doc)?;
    authorization(doc)?;
    data_protection(doc)?;
    payment_security(doc)?;

    doc.add_heading("Security Best Practices", 2)?;
    doc.add_bullets(&[
        "Regular security audits",
        "Keep dependencies up to date (npm audit)",
        "Monitor for security vulnerabilities",
        "Secure server configuration",
        "Regular backups",
        "Incident response plan",
        "Security training for team",
        "Logging and monitoring",
        "Penetration testing (annually)",
        "Bug bounty program (future consideration)",
    ]);

    doc.add_page_break();
    Ok(())
}

fn authentication(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Authentication", 2)?;
    doc.add_paragraph("Supabase Auth provides secure authentication with industry-standard practices.");

    doc.add_heading("Authentication Methods", 3)?;
    doc.add_bullets(&[
        "Email/Password authentication with secure password hashing (bcrypt)",
        "Email verification required for new accounts",
        "Password strength requirements enforced",
        "Rate limiting on login attempts",
        "Account lockout after failed attempts",
        "Session management with JWT tokens",
        "Token expiration and refresh mechanism",
        "Secure password reset flow",
    ]);

    doc.add_heading("Password Requirements", 3)?;
    doc.add_bullets(&[
        "Minimum 8 characters",
        "At least one uppercase letter",
        "At least one lowercase letter",
        "At least one number",
        "At least one special character (recommended)",
        "Not a commonly used password",
        "Not the same as email address",
    ]);

    doc.add_heading("Session Management", 3)?;
    doc.add_bullets(&[
        "JWT tokens stored in httpOnly cookies",
        "Access token expires after 1 hour",
        "Refresh token used to obtain new access token",
        "Logout clears all session data",
        "Automatic logout on token expiration",
        "Session tracking in database",
        "Device/browser fingerprinting (optional)",
    ]);

    Ok(())
}

fn authorization(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Authorization", 2)?;
    doc.add_paragraph("Role-based access control (RBAC) ensures users can only access authorized resources.");

    doc.add_heading("User Roles", 3)?;
    doc.add_table_from_rows(
        TableStyle::MediumGrid1Accent1,
        &[
            &["Role", "Permissions"],
            &["Guest", "View public pages, create account, place order"],
            &["Customer", "View own orders, update profile, access customer portal, track orders"],
            &["Admin", "Full access to all data, manage orders, manage customers, view analytics"],
        ],
    )?;

    doc.add_heading("Row Level Security (RLS)", 3)?;
    doc.add_paragraph("Database-level security ensures users can only access data they own:");
    doc.add_bullets(&[
        "Customers can SELECT only their own orders: auth.uid() = customer_id",
        "Customers can UPDATE only their own profile",
        "Admins bypass RLS with service role key (server-side only)",
        "Public tables (blog, portfolio) allow SELECT for all",
        "INSERT policies validate data before creation",
        "DELETE operations restricted to admin or soft delete only",
    ]);

    Ok(())
}

fn data_protection(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Data Protection", 2)?;

    doc.add_heading("Data Encryption", 3)?;
    doc.add_bullets(&[
        "All data in transit encrypted with TLS 1.3 (HTTPS)",
        "Database connections encrypted",
        "Supabase encrypts data at rest",
        "Sensitive fields (passwords) hashed with bcrypt",
        "Payment data never stored (handled by Paystack)",
        "API keys stored in environment variables, never in code",
    ]);

    doc.add_heading("Data Privacy", 3)?;
    doc.add_bullets(&[
        "GDPR compliance considerations",
        "Privacy policy clearly stated",
        "Cookie consent implementation",
        "User data deletion on request",
        "Data export capability",
        "Minimal data collection",
        "No selling of user data",
        "Third-party data sharing limited to necessary services",
    ]);

    doc.add_heading("Input Validation", 3)?;
    doc.add_bullets(&[
        "Client-side validation with Zod schema",
        "Server-side validation in database constraints",
        "SQL injection prevention via parameterized queries",
        "XSS protection via React's built-in escaping",
        "CSRF protection with token validation",
        "File upload validation (type, size)",
        "Email format validation",
        "Phone number format validation",
    ]);

    Ok(())
}

fn payment_security(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Payment Security", 2)?;
    doc.add_paragraph("Payment processing security is critical for customer trust and regulatory compliance.");

    doc.add_heading("PCI DSS Compliance", 3)?;
    doc.add_bullets(&[
        "No card data stored on VibeLink servers",
        "Paystack handles all card data (PCI DSS Level 1 certified)",
        "Payment form hosted on Paystack domain",
        "Tokenization of payment methods",
        "Secure payment gateway connection",
        "Regular security audits by Paystack",
    ]);

    doc.add_heading("Payment Flow Security", 3)?;
    doc.add_bullets(&[
        "1. Customer initiates payment",
        "2. Frontend calls Paystack API with public key",
        "3. Paystack popup opens (on Paystack domain)",
        "4. Customer enters payment details on Paystack",
        "5. Paystack processes payment",
        "6. Paystack sends webhook to backend with transaction reference",
        "7. Backend verifies transaction with Paystack API using secret key",
        "8. Order status updated only after verification",
        "9. Customer receives confirmation",
    ]);

    doc.add_heading("API Security", 3)?;
    doc.add_bullets(&[
        "API keys stored in environment variables",
        "Supabase RLS policies protect database access",
        "Rate limiting on API endpoints",
        "CORS configured to allow only vibelinkgh.com",
        "API authentication required for sensitive endpoints",
        "Webhook signature verification",
        "IP whitelisting for admin API access (optional)",
    ]);

    Ok(())
}
