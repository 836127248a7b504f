use crate::document::{Alignment, Document, Paragraph, TextRun};
use crate::errors::DocumentError;
use crate::sections::SectionContext;

// Word builds the real table of contents; this is the placeholder and instructions
pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading_aligned("TABLE OF CONTENTS", 1, Alignment::Center)?;

    doc.push_paragraph(Paragraph::with_text("[Table of Contents - Auto-generated in Word]\n\n").spacing(1.15));

    doc.push_paragraph(Paragraph::new().run(
        TextRun::new(
            "Note: In Microsoft Word, place cursor here and go to References > Table of Contents > Automatic Table 1",
        )
        .italic()
        .size(10),
    ));

    doc.add_page_break();
    Ok(())
}
