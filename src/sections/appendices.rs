use crate::document::{Alignment, Document, Paragraph, TableStyle};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

const FILE_STRUCTURE: &str = "
vibelink/app/
├── public/                      # Static assets
│   ├── images/                  # Image files
│   ├── favicon.ico
│   └── robots.txt
├── src/
│   ├── components/              # React components
│   │   ├── admin/               # Admin-specific components
│   │   ├── auth/                # Authentication components
│   │   ├── customer/            # Customer portal components
│   │   ├── layout/              # Layout components (Header, Footer)
│   │   ├── order-form/          # Order form components
│   │   ├── payment/             # Payment components
│   │   ├── ui/                  # Base UI components (shadcn-ui)
│   │   ├── ChatWidget.tsx       # AI chatbot widget
│   │   ├── FloatingWhatsApp.tsx # WhatsApp button
│   │   └── SEO.tsx              # SEO component
│   ├── pages/                   # Page components (32 pages)
│   │   ├── Index.tsx            # Homepage
│   │   ├── About.tsx
│   │   ├── Services.tsx
│   │   ├── GetStarted.tsx       # Order form
│   │   ├── Admin.tsx            # Admin dashboard
│   │   └── ...
│   ├── integrations/
│   │   └── supabase/
│   │       ├── client.ts        # Supabase client
│   │       └── types.ts         # Database type definitions
│   ├── hooks/                   # Custom React hooks
│   ├── data/                    # Static data
│   ├── lib/                     # Utility functions
│   ├── assets/                  # Images, fonts
│   ├── App.tsx                  # Main app component
│   ├── main.tsx                 # Entry point
│   └── index.css                # Global styles
├── supabase/
│   └── migrations/              # 46 database migration files
├── dist/                        # Production build output
├── package.json                 # Dependencies
├── tsconfig.json                # TypeScript config
├── tailwind.config.ts           # Tailwind config
├── vite.config.ts               # Vite config
├── .env                         # Environment variables
└── README.md                    # Project documentation
";

const ENV_HEADER: [&str; 4] = ["Variable Name", "Description", "Required", "Visibility"];

const ENV_VARS: [&[&str]; 10] = [
    &["VITE_SUPABASE_URL", "Supabase project URL", "Required", "Public"],
    &["VITE_SUPABASE_PUBLISHABLE_KEY", "Supabase anon/public key", "Required", "Public"],
    &["VITE_SUPABASE_PROJECT_ID", "Supabase project ID", "Required", "Public"],
    &["PAYSTACK_PUBLIC_KEY", "Paystack public key", "Required", "Public"],
    &["PAYSTACK_SECRET_KEY", "Paystack secret key", "Required", "Secret - Server only"],
    &["GEMINI_API_KEY", "Google Gemini AI key", "Required", "Secret - Server only"],
    &["WHATSAPP_API_KEY", "WhatsApp Business API key", "Optional", "Secret - Server only"],
    &["SMTP_HOST", "Email SMTP host", "Optional", "Server only"],
    &["SMTP_USER", "Email SMTP username", "Optional", "Server only"],
    &["SMTP_PASS", "Email SMTP password", "Optional", "Secret - Server only"],
];

pub const END_MARKER: &str = "--- End of Document ---";

/// Last section; closes the document with a centered end marker instead of a page break
pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("APPENDICES", 1)?;

    dependencies(doc)?;

    doc.add_heading("Appendix B: File Structure", 2)?;
    doc.add_code_block(FILE_STRUCTURE);

    doc.add_heading("Appendix C: Environment Variables", 2)?;
    doc.add_table_with_header(TableStyle::LightGridAccent1, &ENV_HEADER, &ENV_VARS)?;

    checklist(doc)?;
    glossary(doc)?;

    doc.add_paragraph("\n\n");
    doc.push_paragraph(Paragraph::with_text(END_MARKER).align(Alignment::Center));
    Ok(())
}

fn dependencies(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Appendix A: Package Dependencies List", 2)?;

    doc.add_heading("Production Dependencies", 3)?;
    doc.add_bullets(&[
        "@dnd-kit/core: 6.3.1 - Drag and drop functionality",
        "@hookform/resolvers: 3.10.0 - Form validation resolvers",
        "@radix-ui/react-*: Various - Accessible UI components",
        "@supabase/supabase-js: 2.89.0 - Supabase client",
        "@tanstack/react-query: 5.83.0 - Data fetching and state management",
        "@tiptap/react: 3.14.0 - Rich text editor",
        "react: 18.3.1 - UI library",
        "react-dom: 18.3.1 - React DOM renderer",
        "react-router-dom: 6.30.1 - Client-side routing",
        "tailwindcss: 3.4.17 - CSS framework",
        "framer-motion: 12.23.26 - Animation library",
        "recharts: 2.15.4 - Chart library",
        "zod: 3.25.76 - Schema validation",
        "date-fns: 3.6.0 - Date utilities",
        "lucide-react: 0.462.0 - Icon library",
    ]);

    doc.add_heading("Development Dependencies", 3)?;
    doc.add_bullets(&[
        "typescript: 5.8.3 - TypeScript compiler",
        "vite: 5.4.19 - Build tool",
        "@vitejs/plugin-react-swc: 3.11.0 - Vite React plugin",
        "eslint: 9.32.0 - Code linting",
        "autoprefixer: 10.4.21 - CSS autoprefixer",
        "postcss: 8.5.6 - CSS processor",
        "@types/react: 18.3.23 - React TypeScript definitions",
        "@types/node: 22.16.5 - Node.js TypeScript definitions",
    ]);

    Ok(())
}

fn checklist(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Appendix D: Deployment Checklist", 2)?;

    doc.add_heading("Pre-Deployment", 3)?;
    doc.add_bullets(&[
        "☐ All features tested in development",
        "☐ Code reviewed and approved",
        "☐ TypeScript compilation successful (no errors)",
        "☐ All environment variables configured",
        "☐ Database migrations tested",
        "☐ Security audit completed",
        "☐ Performance optimization done",
        "☐ SEO meta tags updated",
        "☐ Backup current production",
        "☐ Notify stakeholders of deployment",
    ]);

    doc.add_heading("During Deployment", 3)?;
    doc.add_bullets(&[
        "☐ Run production build: npm run build",
        "☐ Test build locally: npm run preview",
        "☐ Upload dist/ to server",
        "☐ Apply database migrations if any",
        "☐ Update environment variables on server",
        "☐ Clear server cache",
        "☐ Restart web server if needed",
        "☐ Verify SSL certificate valid",
    ]);

    doc.add_heading("Post-Deployment", 3)?;
    doc.add_bullets(&[
        "☐ Verify website loads (https://vibelinkgh.com)",
        "☐ Test user registration and login",
        "☐ Place test order",
        "☐ Test payment flow",
        "☐ Verify email notifications sent",
        "☐ Check admin dashboard accessible",
        "☐ Test mobile responsiveness",
        "☐ Monitor error logs for 1 hour",
        "☐ Check analytics tracking",
        "☐ Update documentation",
        "☐ Notify team of successful deployment",
    ]);

    Ok(())
}

fn glossary(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Appendix E: Glossary", 2)?;
    doc.add_labeled_list(&[
        ("API", "Application Programming Interface - Set of protocols for software communication"),
        ("CDN", "Content Delivery Network - Distributed server network for fast content delivery"),
        ("CI/CD", "Continuous Integration/Continuous Deployment - Automated software delivery"),
        ("CRUD", "Create, Read, Update, Delete - Basic database operations"),
        ("DNS", "Domain Name System - Translates domain names to IP addresses"),
        ("HMR", "Hot Module Replacement - Live code updates without full page reload"),
        ("JWT", "JSON Web Token - Secure token-based authentication"),
        ("ORM", "Object-Relational Mapping - Database abstraction layer"),
        ("PWA", "Progressive Web App - Web app with native-like features"),
        ("RLS", "Row Level Security - Database-level access control"),
        ("RSVP", "Répondez s'il vous plaît - Please respond (invitation response)"),
        ("SaaS", "Software as a Service - Cloud-based software delivery"),
        ("SEO", "Search Engine Optimization - Improving search visibility"),
        ("SPA", "Single Page Application - Web app that loads once and updates dynamically"),
        ("SQL", "Structured Query Language - Database query language"),
        ("SSL/TLS", "Secure Sockets Layer/Transport Layer Security - Encryption protocols"),
        ("UI/UX", "User Interface/User Experience - Design and usability"),
        ("Webhook", "HTTP callback - Automated message from one system to another"),
    ]);

    Ok(())
}
