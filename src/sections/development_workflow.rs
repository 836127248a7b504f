use crate::document::Document;
use crate::errors::DocumentError;
use crate::sections::SectionContext;

const INITIAL_SETUP: &str = "
1. Clone repository:
   git clone https://github.com/xboggg/vibe-link-ghana-3e5cfc20

2. Navigate to project:
   cd vibe-link-ghana-3e5cfc20/app

3. Install dependencies:
   npm install
   (or: bun install)

4. Configure environment:
   Create .env file with:
   VITE_SUPABASE_URL=your_supabase_url
   VITE_SUPABASE_PUBLISHABLE_KEY=your_supabase_key
   VITE_SUPABASE_PROJECT_ID=your_project_id

5. Start development server:
   npm run dev

6. Open browser to:
   http://localhost:8080
";

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("DEVELOPMENT WORKFLOW", 1)?;

    doc.add_heading("Three-Location Setup", 2)?;
    doc.add_paragraph(
        "The development workflow is organized across three strategic locations, each serving \
         a specific purpose in the software development lifecycle:",
    );

    doc.add_heading("1. Local Development (PC)", 3)?;
    doc.add_bullets(&[
        "Location: C:\\Users\\CyberAware\\OneDrive - Government of Ghana - CAGD\\ZeroTrust\\Visual Studio Code Workspace\\vibelink\\app\\",
        "Purpose: Active development, testing, and debugging",
        "Tools: Visual Studio Code, Node.js, npm/bun, Git",
        "Server: Vite dev server on localhost:8080",
        "Hot Module Replacement (HMR) for instant feedback",
        "Access to .env file for environment configuration",
    ]);

    doc.add_heading("2. Version Control (GitHub)", 3)?;
    doc.add_bullets(&[
        "Repository: https://github.com/xboggg/vibe-link-ghana-3e5cfc20",
        "Purpose: Code versioning, collaboration, and backup",
        "Branch Strategy: Main branch for production-ready code",
        "Commit History: Complete audit trail of changes",
        "Collaboration: Code reviews and team coordination",
        "CI/CD Integration: Automated testing and deployment triggers",
    ]);

    doc.add_heading("3. Production Server", 3)?;
    doc.add_bullets(&[
        "Location: /var/www/vibelinkgh.com/",
        "Purpose: Live production environment",
        "Web Server: Nginx/Apache serving static files",
        "Domain: https://vibelinkgh.com/",
        "SSL Certificate: HTTPS encryption enabled",
        "Optimization: Minified and bundled production build",
    ]);

    doc.add_heading("Git Workflow Diagram", 2)?;
    doc.add_bold_line("[DIAGRAM: Git Workflow]");
    doc.add_paragraph("Create a flowchart showing:\n");
    doc.add_bullets_indented(
        &[
            "1. Developer writes code on Local PC",
            "2. Git add and commit changes locally",
            "3. Git push to GitHub repository",
            "4. GitHub receives and stores code",
            "5. GitHub Actions or deployment script triggers",
            "6. Build process: npm run build creates optimized dist/ folder",
            "7. Deployment script transfers dist/ contents to server",
            "8. Server updates /var/www/vibelinkgh.com/",
            "9. Website live with latest changes",
        ],
        0.5,
    );

    doc.add_heading("Build and Deployment Process", 2)?;

    doc.add_heading("Development Build", 3)?;
    doc.add_paragraph("Command: npm run dev or bun run dev");
    doc.add_bullets(&[
        "Vite starts development server on port 8080",
        "Hot Module Replacement (HMR) enabled",
        "Source maps for debugging",
        "Fast refresh for instant updates",
        "Environment: Development mode",
    ]);

    doc.add_heading("Production Build", 3)?;
    doc.add_paragraph("Command: npm run build or bun run build");
    doc.add_bullets(&[
        "TypeScript compilation and type checking",
        "React component tree shaking",
        "CSS purging and minification",
        "JavaScript minification and uglification",
        "Asset optimization (images, fonts)",
        "Bundle splitting for optimal loading",
        "Output: dist/ directory with production-ready files",
        "Build time: ~30-60 seconds",
    ]);

    doc.add_heading("Deployment Steps", 3)?;
    doc.add_numbered(&[
        "Build the production bundle locally or in CI/CD",
        "Test the build with: npm run preview",
        "Transfer dist/ contents to /var/www/vibelinkgh.com/",
        "Update file permissions on server",
        "Clear server cache if applicable",
        "Verify deployment by visiting vibelinkgh.com",
        "Monitor error logs for any issues",
    ]);

    doc.add_heading("Environment Setup", 2)?;

    doc.add_heading("Prerequisites", 3)?;
    doc.add_bullets(&[
        "Node.js (v18 or higher)",
        "npm or bun package manager",
        "Git for version control",
        "Visual Studio Code (recommended IDE)",
        "Supabase account and project",
        "Paystack merchant account",
    ]);

    doc.add_heading("Initial Setup", 3)?;
    doc.add_code_block(INITIAL_SETUP);

    doc.add_page_break();
    Ok(())
}
