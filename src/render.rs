use crate::document::Document;
use crate::info::Info;
use crate::resume::Resume;
use crate::templates::{FontIds, Template};
use crate::theme::{FontFamilies, Theme};
use crate::RenderError;

/// Turns resumes into documents. A renderer holds no per-render state, so one can be
/// shared and reused for any number of resumes.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
    fonts: FontFamilies,
}

impl Renderer {
    /// A renderer setting text in the standard PDF fonts
    pub fn new(theme: Theme) -> Renderer {
        Renderer::with_fonts(theme, FontFamilies::default())
    }

    pub fn with_fonts(theme: Theme, fonts: FontFamilies) -> Renderer {
        Renderer { theme, fonts }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Lay `resume` out with the template named `template_id`. Unknown templates fail with
    /// [RenderError::UnsupportedTemplate] before anything is laid out.
    pub fn render(&self, resume: &Resume, template_id: &str) -> Result<Document, RenderError> {
        let template: Template = template_id.parse()?;
        log::info!("rendering {template} resume for {:?}", resume.full_name);

        let mut document = Document::default();
        let fonts = FontIds::register(&self.fonts, &mut document);
        let laid_out = template.layout(resume, &self.theme, &fonts, &document.fonts);

        for page in laid_out.pages {
            document.add_page(page);
        }
        for bookmark in laid_out.bookmarks {
            document.add_bookmark(bookmark.title, bookmark.page_index, bookmark.top);
        }
        document.set_info(Info::from(resume));

        log::info!(
            "rendered {template} resume: {} page(s), {} bookmark(s)",
            document.page_count(),
            document.outline.entries.len()
        );
        Ok(document)
    }

    /// Render straight to PDF bytes
    pub fn render_to_vec(
        &self,
        resume: &Resume,
        template_id: &str,
    ) -> Result<Vec<u8>, RenderError> {
        self.render(resume, template_id)?.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_templates_produce_no_document() {
        let renderer = Renderer::new(Theme::default());
        assert!(matches!(
            renderer.render(&Resume::default(), "creative"),
            Err(RenderError::UnsupportedTemplate(_))
        ));
    }
}
