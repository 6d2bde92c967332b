use crate::RenderError;
use serde::Deserialize;

/// Everything a resume says. Layout only ever reads it.
///
/// Resumes are usually read from the JSON the editor saves, where every field is
/// optional and keys are camelCase:
///
/// ```
/// use resume_layout::Resume;
///
/// let resume = Resume::from_json(r#"{
///     "fullName": "Ada Lovelace",
///     "title": "Analyst",
///     "experience": [{ "role": "Programmer", "startDate": "1842", "current": true }]
/// }"#).expect("resume parses");
/// assert_eq!(resume.experience[0].dates(), "1842 – Present");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    /// Still in the role; the end date is shown as "Present"
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub link: String,
    pub description: String,
}

impl Resume {
    pub fn from_json(json: &str) -> Result<Resume, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Contact details that were filled in, in display order
    pub fn contact_items(&self) -> Vec<&str> {
        [
            &self.email,
            &self.phone,
            &self.location,
            &self.website,
            &self.linkedin,
        ]
        .into_iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect()
    }

    /// Skills that were filled in
    pub fn skill_items(&self) -> Vec<&str> {
        self.skills
            .iter()
            .map(|skill| skill.trim())
            .filter(|skill| !skill.is_empty())
            .collect()
    }

    pub fn experience_entries(&self) -> impl Iterator<Item = &Experience> {
        self.experience.iter().filter(|entry| !entry.is_blank())
    }

    pub fn education_entries(&self) -> impl Iterator<Item = &Education> {
        self.education.iter().filter(|entry| !entry.is_blank())
    }

    pub fn project_entries(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|entry| !entry.is_blank())
    }
}

impl Experience {
    pub fn dates(&self) -> String {
        date_range(&self.start_date, &self.end_date, self.current)
    }

    fn is_blank(&self) -> bool {
        [&self.role, &self.company, &self.description]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

impl Education {
    pub fn dates(&self) -> String {
        date_range(&self.start_date, &self.end_date, false)
    }

    fn is_blank(&self) -> bool {
        self.school.trim().is_empty() && self.degree.trim().is_empty()
    }
}

impl Project {
    fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.description.trim().is_empty()
    }
}

/// Format a date range as "start – end", leaving out whichever side is missing
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let start = start.trim();
    let end = if current { "Present" } else { end.trim() };
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} – {end}"),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (true, true) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_ranges_drop_missing_ends() {
        assert_eq!(date_range("2019", "2021", false), "2019 – 2021");
        assert_eq!(date_range("2019", "2021", true), "2019 – Present");
        assert_eq!(date_range(" 2019 ", "", false), "2019");
        assert_eq!(date_range("", "2021", false), "2021");
        assert_eq!(date_range("", "", false), "");
    }

    #[test]
    fn blank_fields_are_left_out() {
        let resume = Resume {
            email: "ada@example.com".into(),
            location: "  ".into(),
            linkedin: "linkedin.com/in/ada".into(),
            skills: vec!["Rust".into(), " ".into()],
            experience: vec![Experience::default()],
            ..Resume::default()
        };
        assert_eq!(resume.contact_items(), vec!["ada@example.com", "linkedin.com/in/ada"]);
        assert_eq!(resume.skill_items(), vec!["Rust"]);
        assert_eq!(resume.experience_entries().count(), 0);
    }

    #[test]
    fn reads_camel_case_json() {
        let resume = Resume::from_json(
            r#"{"fullName": "Grace Hopper", "education": [{"school": "Yale", "endDate": "1934"}]}"#,
        )
        .expect("parses");
        assert_eq!(resume.full_name, "Grace Hopper");
        assert_eq!(resume.education[0].dates(), "1934");
        assert!(Resume::from_json("[]").is_err());
    }
}
