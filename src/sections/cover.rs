use crate::document::{Alignment, Document, Paragraph, Rgb, TextRun};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

// @section: Title page built from the configured cover metadata
pub fn build(doc: &mut Document, ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    let cover = ctx.cover;

    doc.push_paragraph(
        Paragraph::new().align(Alignment::Center).run(
            TextRun::new(format!("{}\n", cover.title))
                .size(36)
                .bold()
                .color(Rgb::NAVY),
        ),
    );

    doc.push_paragraph(
        Paragraph::new()
            .align(Alignment::Center)
            .run(TextRun::new(format!("{}\n\n", cover.subtitle)).size(24).color(Rgb::INDIGO)),
    );

    doc.push_paragraph(
        Paragraph::new()
            .align(Alignment::Center)
            .run(TextRun::new(format!("{}\n\n\n\n", cover.tagline)).size(18).italic()),
    );

    doc.push_paragraph(
        Paragraph::new()
            .align(Alignment::Center)
            .run(TextRun::new(format!("Version {}\n", cover.version)).size(14))
            .run(TextRun::new(format!("{}\n\n", cover.formatted_date())).size(14))
            .run(TextRun::new("[Logo Placeholder]\n\n").size(12).italic())
            .run(TextRun::new(cover.website.as_str()).size(12).color(Rgb::LINK_BLUE)),
    );

    doc.add_page_break();
    Ok(())
}
