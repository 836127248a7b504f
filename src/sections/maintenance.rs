use crate::document::{Document, TableStyle};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

const MANUAL_BACKUP: &str = r#"
1. Database Backup:
   - Login to Supabase Dashboard
   - Navigate to Database > Backups
   - Click "Create Backup"
   - Download SQL export
   - Store in secure location

2. Code Backup:
   - Ensure all changes committed to Git
   - git push origin main
   - Create tagged release: git tag v1.0.0
   - git push --tags

3. File Storage Backup:
   - Navigate to Supabase Storage
   - Download all buckets
   - Store in external backup location

4. Configuration Backup:
   - Export .env file (securely)
   - Document configuration changes
   - Store in encrypted location
"#;

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("MAINTENANCE & SUPPORT", 1)?;

    updates(doc)?;
    backups(doc)?;
    troubleshooting(doc)?;

    doc.add_heading("Support Channels", 2)?;
    doc.add_labeled_list(&[
        ("Technical Documentation", "This document and inline code comments"),
        ("GitHub Issues", "Track bugs and feature requests"),
        ("Team Communication", "Slack, email, or team chat"),
        ("Supabase Documentation", "https://supabase.com/docs"),
        ("React Documentation", "https://react.dev"),
        ("Community Forums", "Stack Overflow, Reddit, Discord"),
        ("Paystack Support", "https://paystack.com/support"),
        ("Vendor Support", "Contact respective service providers"),
    ]);

    doc.add_heading("Maintenance Schedule", 2)?;
    doc.add_table_from_rows(
        TableStyle::MediumGrid1Accent1,
        &[
            &["Frequency", "Tasks"],
            &["Daily", "Monitor error logs, check uptime, respond to support tickets"],
            &["Weekly", "Review analytics, check for dependency updates, backup database"],
            &["Monthly", "Security audit, performance review, update documentation"],
            &["Quarterly", "Test backup restoration, penetration testing, user feedback review"],
            &["Annually", "Comprehensive security audit, architecture review, renewal of SSL/domains"],
        ],
    )?;

    doc.add_page_break();
    Ok(())
}

fn updates(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Update Procedures", 2)?;

    doc.add_heading("Application Updates", 3)?;
    doc.add_paragraph("Process for updating the VibeLink Ghana application:");
    doc.add_bullets(&[
        "1. Review update requirements and plan changes",
        "2. Create feature branch: git checkout -b feature/update-name",
        "3. Make code changes in development environment",
        "4. Test changes thoroughly locally",
        "5. Commit changes: git commit -m \"Description\"",
        "6. Push to GitHub: git push origin feature/update-name",
        "7. Create pull request for review",
        "8. Merge to main branch after approval",
        "9. Build production: npm run build",
        "10. Test production build: npm run preview",
        "11. Deploy to production server",
        "12. Monitor for issues post-deployment",
        "13. Update documentation as needed",
    ]);

    doc.add_heading("Dependency Updates", 3)?;
    doc.add_bullets(&[
        "Check for updates weekly: npm outdated",
        "Read changelogs before updating",
        "Update patch versions: npm update",
        "Test after each update",
        "Update minor versions with caution",
        "Major version updates require thorough testing",
        "Security updates prioritized",
        "Lock file committed after updates",
    ]);

    doc.add_heading("Database Updates", 3)?;
    doc.add_bullets(&[
        "1. Plan schema changes carefully",
        "2. Create migration file: supabase migration new migration_name",
        "3. Write SQL in migration file",
        "4. Test in development: supabase db reset",
        "5. Review for data loss or performance impact",
        "6. Backup production database",
        "7. Apply to production during low-traffic period",
        "8. Verify migration success",
        "9. Monitor database performance",
        "10. Rollback if issues occur",
    ]);

    Ok(())
}

fn backups(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Backup Procedures", 2)?;

    doc.add_heading("Automated Backups", 3)?;
    doc.add_bullets(&[
        "Supabase daily database backups (automatic)",
        "GitHub commits for code versioning",
        "Weekly database export to external storage",
        "Monthly full system backup",
        "Retention: Keep 7 daily, 4 weekly, 12 monthly backups",
    ]);

    doc.add_heading("Manual Backup Process", 3)?;
    doc.add_code_block(MANUAL_BACKUP);

    doc.add_heading("Restore Procedures", 3)?;
    doc.add_bullets(&[
        "1. Identify scope of restoration needed",
        "2. Retrieve appropriate backup files",
        "3. For database: Use Supabase restore or SQL import",
        "4. For code: git checkout <tag> or deploy from backup",
        "5. For files: Re-upload to Supabase Storage",
        "6. Verify data integrity after restore",
        "7. Test critical functionality",
        "8. Monitor for issues",
        "9. Document incident and restoration",
    ]);

    Ok(())
}

fn troubleshooting(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Troubleshooting", 2)?;

    doc.add_heading("Common Issues and Solutions", 3)?;
    doc.add_table_from_rows(
        TableStyle::LightGridAccent1,
        &[
            &["Issue", "Solution"],
            &["Build fails", "Check for TypeScript errors, run npm install, clear cache"],
            &["Page not loading", "Check browser console, verify API connection, check RLS policies"],
            &["Payment not processing", "Verify Paystack credentials, check webhook configuration"],
            &["Images not displaying", "Check Supabase Storage permissions, verify file paths"],
            &["Slow page load", "Optimize images, check bundle size, enable caching"],
            &["Database connection error", "Verify Supabase credentials, check network, check quota"],
            &["Authentication issues", "Clear cookies, check session expiry, verify auth configuration"],
            &["Deploy fails", "Check server permissions, verify file paths, check disk space"],
        ],
    )?;

    doc.add_heading("Debugging Process", 3)?;
    doc.add_bullets(&[
        "1. Reproduce the issue",
        "2. Check browser console for errors",
        "3. Check network tab for failed requests",
        "4. Review server/database logs",
        "5. Verify configuration settings",
        "6. Test in isolation",
        "7. Search for similar issues online",
        "8. Consult documentation",
        "9. Ask for help if stuck",
        "10. Document solution for future reference",
    ]);

    doc.add_heading("Log Files", 3)?;
    doc.add_bullets(&[
        "Browser Console: Frontend errors and warnings",
        "Network Tab: API requests and responses",
        "Supabase Logs: Database queries and errors",
        "Server Logs: Web server access and error logs (/var/log/nginx/)",
        "Build Logs: Vite build output",
        "Git Logs: Code change history (git log)",
    ]);

    Ok(())
}
