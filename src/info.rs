use crate::refs::{ObjectReferences, RefType};
use crate::resume::Resume;
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// Document metadata: title, author, subject, and keywords
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The author(s) of the document. No prescribed format.
    pub author: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// Keywords for the document; a comma separated list by convention
    pub keywords: Option<String>,
}

/// Resume metadata as it appears in a PDF viewer's document properties
impl From<&Resume> for Info {
    fn from(resume: &Resume) -> Info {
        let name = non_blank(&resume.full_name);
        let skills = resume.skill_items();
        Info {
            title: Some(match name {
                Some(name) => format!("{name} — Resume"),
                None => "Resume".to_string(),
            }),
            author: name.map(str::to_string),
            subject: non_blank(&resume.title).map(str::to_string),
            keywords: (!skills.is_empty()).then(|| skills.join(", ")),
        }
    }
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|value| !value.is_empty())
}

impl Info {
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(creation_date());
    }
}

fn creation_date() -> PDate {
    use chrono::prelude::*;

    let now = Local::now();
    let offset = now.offset().local_minus_utc();
    let offset_hours = offset / (60 * 60);
    let offset_minutes = ((offset - offset_hours * 60 * 60) / 60).abs();
    PDate::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_comes_from_the_resume() {
        let resume = Resume {
            full_name: " Ada Lovelace ".into(),
            title: "Analyst".into(),
            skills: vec!["Mathematics".into(), " ".into(), "Poetry".into()],
            ..Resume::default()
        };
        let info = Info::from(&resume);
        assert_eq!(info.title.as_deref(), Some("Ada Lovelace — Resume"));
        assert_eq!(info.author.as_deref(), Some("Ada Lovelace"));
        assert_eq!(info.subject.as_deref(), Some("Analyst"));
        assert_eq!(info.keywords.as_deref(), Some("Mathematics, Poetry"));
    }

    #[test]
    fn an_anonymous_resume_is_just_a_resume() {
        let info = Info::from(&Resume::default());
        assert_eq!(info.title.as_deref(), Some("Resume"));
        assert_eq!(info.author, None);
        assert_eq!(info.subject, None);
        assert_eq!(info.keywords, None);
    }
}
