use crate::document::{Document, TableStyle};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

const NGINX_CONFIG: &str = r#"
server {
    listen 80;
    listen [::]:80;
    server_name vibelinkgh.com www.vibelinkgh.com;
    return 301 https://$server_name$request_uri;
}

server {
    listen 443 ssl http2;
    listen [::]:443 ssl http2;
    server_name vibelinkgh.com www.vibelinkgh.com;

    root /var/www/vibelinkgh.com;
    index index.html;

    ssl_certificate /etc/letsencrypt/live/vibelinkgh.com/fullchain.pem;
    ssl_certificate_key /etc/letsencrypt/live/vibelinkgh.com/privkey.pem;

    # Gzip compression
    gzip on;
    gzip_types text/css application/javascript application/json image/svg+xml;
    gzip_comp_level 6;

    # Security headers
    add_header X-Frame-Options "SAMEORIGIN" always;
    add_header X-Content-Type-Options "nosniff" always;
    add_header X-XSS-Protection "1; mode=block" always;

    # Cache static assets
    location ~* \.(js|css|png|jpg|jpeg|gif|svg|ico|woff|woff2)$ {
        expires 1y;
        add_header Cache-Control "public, immutable";
    }

    # SPA routing - redirect all to index.html
    location / {
        try_files $uri $uri/ /index.html;
    }
}
"#;

// The metrics grid is one row taller than its data; the last row stays blank
const METRICS_TABLE_ROWS: usize = 9;

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("DEPLOYMENT & INFRASTRUCTURE", 1)?;

    doc.add_heading("Server Setup", 2)?;
    doc.add_paragraph(
        "The production server hosts the VibeLink Ghana application with optimized \
         configuration for performance and security.",
    );

    doc.add_heading("Server Specifications", 3)?;
    doc.add_bullets(&[
        "Operating System: Linux (Ubuntu/Debian recommended)",
        "Web Server: Nginx or Apache",
        "Node.js: Not required (static site)",
        "SSL/TLS: Let's Encrypt certificate",
        "Document Root: /var/www/vibelinkgh.com/",
        "Gzip Compression: Enabled",
        "Caching: Browser caching headers configured",
    ]);

    doc.add_heading("Nginx Configuration Example", 3)?;
    doc.add_code_block(NGINX_CONFIG);

    doc.add_heading("Domain Configuration", 2)?;
    doc.add_paragraph("DNS records configuration for vibelinkgh.com:");
    doc.add_table_from_rows(
        TableStyle::LightGridAccent1,
        &[
            &["Type", "Name", "Value", "TTL"],
            &["A", "@", "Server IP Address", "3600"],
            &["A", "www", "Server IP Address", "3600"],
            &["CNAME", "www", "vibelinkgh.com", "3600"],
            &["TXT", "@", "SPF/DKIM records", "3600"],
        ],
    )?;

    doc.add_heading("SSL Certificates", 2)?;
    doc.add_paragraph(
        "SSL/TLS certificates are obtained from Let's Encrypt for free, automatically \
         renewed HTTPS encryption.",
    );

    doc.add_heading("SSL Setup Steps", 3)?;
    doc.add_bullets(&[
        "1. Install Certbot: sudo apt install certbot python3-certbot-nginx",
        "2. Run Certbot: sudo certbot --nginx -d vibelinkgh.com -d www.vibelinkgh.com",
        "3. Follow prompts to configure certificate",
        "4. Test renewal: sudo certbot renew --dry-run",
        "5. Auto-renewal cron job: Certbot installs this automatically",
        "6. Verify HTTPS: Visit https://vibelinkgh.com",
        "7. Check SSL rating: Use SSL Labs test",
    ]);

    backups(doc)?;
    monitoring(doc)?;

    doc.add_heading("Deployment Checklist", 2)?;
    doc.add_bullets(&[
        "☐ Code tested in development environment",
        "☐ All tests passing",
        "☐ Environment variables configured",
        "☐ Build production bundle: npm run build",
        "☐ Test production build locally: npm run preview",
        "☐ Backup current production deployment",
        "☐ Backup database",
        "☐ Upload dist/ folder to server",
        "☐ Clear server cache",
        "☐ Verify website loads correctly",
        "☐ Test critical user flows (order, payment)",
        "☐ Check all integrations working",
        "☐ Monitor error logs for 1 hour",
        "☐ Update documentation",
        "☐ Notify team of deployment",
    ]);

    doc.add_page_break();
    Ok(())
}

fn backups(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Backup Strategy", 2)?;
    doc.add_paragraph("Comprehensive backup strategy ensures data protection and disaster recovery.");

    doc.add_heading("Database Backups", 3)?;
    doc.add_bullets(&[
        "Supabase automatic daily backups (retained for 7 days on free tier)",
        "Manual backups before major migrations",
        "Export database to SQL file weekly",
        "Store backups in separate location (cloud storage)",
        "Test backup restoration quarterly",
        "Point-in-time recovery available (paid tier)",
    ]);

    doc.add_heading("Code Backups", 3)?;
    doc.add_bullets(&[
        "GitHub repository serves as primary code backup",
        "Local git repository on development PC",
        "Tagged releases for version milestones",
        "Branch protection on main branch",
        "Regular commits with meaningful messages",
    ]);

    doc.add_heading("File Storage Backups", 3)?;
    doc.add_bullets(&[
        "Supabase Storage automatic replication",
        "Export uploaded files monthly",
        "Store backups in AWS S3 or similar",
        "Verify file integrity periodically",
    ]);

    Ok(())
}

fn monitoring(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Monitoring", 2)?;
    doc.add_paragraph("Proactive monitoring ensures system health and quick issue detection.");

    doc.add_heading("Application Monitoring", 3)?;
    doc.add_bullets(&[
        "Supabase Dashboard: Database performance, API usage",
        "Error tracking: Console errors logged",
        "Performance metrics: Page load times, API response times",
        "User analytics: Google Analytics or similar",
        "Real-time user activity",
        "Uptime monitoring: UptimeRobot or Pingdom",
    ]);

    doc.add_heading("Server Monitoring", 3)?;
    doc.add_bullets(&[
        "CPU and memory usage",
        "Disk space utilization",
        "Network bandwidth",
        "Web server logs (access and error logs)",
        "SSL certificate expiration",
        "Security scan alerts",
    ]);

    doc.add_heading("Key Metrics to Monitor", 3)?;
    let metrics = doc.add_table(METRICS_TABLE_ROWS, 3, TableStyle::LightListAccent1)?;
    metrics.fill_rows(
        0,
        &[
            &["Metric", "Target", "Alert Threshold"],
            &["Uptime", ">99.5%", "<99%"],
            &["Page Load Time", "<2 seconds", ">3 seconds"],
            &["API Response Time", "<500ms", ">1000ms"],
            &["Error Rate", "<0.1%", ">1%"],
            &["Database Connections", "Normal range", ">80% capacity"],
            &["Disk Space", ">20% free", "<10% free"],
            &["SSL Expiry", ">30 days", "<14 days"],
        ],
    )?;

    Ok(())
}
