use crate::document::Document;
use crate::errors::DocumentError;
use crate::sections::SectionContext;

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("FUTURE ENHANCEMENTS", 1)?;

    doc.add_heading("Planned Features", 2)?;

    doc.add_heading("Short-term (3-6 months)", 3)?;
    doc.add_bullets(&[
        "Mobile app (React Native) for iOS and Android",
        "Advanced invitation editor with drag-and-drop",
        "Video invitations",
        "Live RSVP dashboard for event organizers",
        "Guest list CSV import/export",
        "SMS notifications for events",
        "Integration with calendar apps (Google Calendar, Outlook)",
        "Multi-language expansion (Twi, Ga, Ewe)",
        "Social media auto-posting",
        "Advanced analytics for admins",
    ]);

    doc.add_heading("Medium-term (6-12 months)", 3)?;
    doc.add_bullets(&[
        "Event management features (seating charts, gift registries)",
        "Vendor marketplace (photographers, caterers, decorators)",
        "E-commerce for event supplies",
        "Ticketing system for paid events",
        "Live streaming integration for virtual events",
        "Photo sharing and album creation",
        "Guest check-in app with QR codes",
        "Automated reminder system",
        "Integration with event planning tools",
        "White-label solution for event planners",
    ]);

    doc.add_heading("Long-term (12+ months)", 3)?;
    doc.add_bullets(&[
        "AI-powered design generator",
        "Voice invitations with AI text-to-speech",
        "Augmented Reality (AR) invitations",
        "Blockchain-based digital collectible invitations",
        "International expansion to other African countries",
        "Multi-vendor platform",
        "Franchise model for regional partners",
        "Corporate event management suite",
        "Integration with government event registries",
        "B2B SaaS offering for enterprises",
    ]);

    scalability(doc)?;

    doc.add_page_break();
    Ok(())
}

fn scalability(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Scalability Considerations", 2)?;

    doc.add_heading("Performance Optimization", 3)?;
    doc.add_bullets(&[
        "Implement CDN for static assets (Cloudflare, AWS CloudFront)",
        "Image optimization and lazy loading",
        "Code splitting for faster initial load",
        "Caching strategies (Redis, service workers)",
        "Database query optimization",
        "API response caching",
        "Bundle size reduction",
        "Server-side rendering (SSR) consideration",
    ]);

    doc.add_heading("Infrastructure Scaling", 3)?;
    doc.add_bullets(&[
        "Auto-scaling for traffic spikes",
        "Load balancing across multiple servers",
        "Database read replicas",
        "Horizontal scaling of application servers",
        "Queue system for background jobs (email, notifications)",
        "Microservices architecture for specific features",
        "Containerization with Docker",
        "Kubernetes for orchestration",
    ]);

    doc.add_heading("Database Scaling", 3)?;
    doc.add_bullets(&[
        "Database connection pooling",
        "Query optimization and indexing",
        "Partitioning large tables",
        "Archive old data to separate storage",
        "Consider NoSQL for specific use cases",
        "Implement caching layer (Redis)",
        "Database monitoring and performance tuning",
        "Upgrade to higher Supabase tier or self-hosted PostgreSQL",
    ]);

    doc.add_heading("Business Growth Features", 3)?;
    doc.add_bullets(&[
        "Subscription model for unlimited invitations",
        "Premium templates marketplace",
        "Partnership program with event venues",
        "Affiliate marketing program expansion",
        "Corporate packages with volume discounts",
        "API for third-party integrations",
        "Custom domain for premium customers",
        "Dedicated account manager for enterprise clients",
    ]);

    doc.add_heading("Technology Upgrades", 3)?;
    doc.add_bullets(&[
        "Migrate to Next.js for SSR/SSG capabilities",
        "Implement GraphQL for more efficient data fetching",
        "Add TypeScript strict mode",
        "Upgrade to latest React version with concurrent features",
        "Implement micro-frontends for team autonomy",
        "Add E2E testing with Playwright or Cypress",
        "CI/CD pipeline automation",
        "Feature flags for gradual rollouts",
    ]);

    Ok(())
}
