use resume_layout::{Renderer, Resume, Template, Theme};
use std::path::PathBuf;

fn main() {
    let mut args = std::env::args().skip(1);
    let template = args.next().unwrap_or_else(|| "modern".to_string());
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("resume-{}.pdf", template.trim())));

    if !Template::is_supported(&template) {
        eprintln!(
            "template {template:?} has no vector layout; try one of: {}",
            Template::ALL.map(|t| t.id()).join(", ")
        );
        std::process::exit(1);
    }

    let resume =
        Resume::from_json(include_str!("sample-resume.json")).expect("sample resume parses");
    let document = Renderer::new(Theme::default())
        .render(&resume, &template)
        .expect("can render resume");
    println!("{} page(s)", document.page_count());

    let out = std::fs::File::create(&output).expect("can create output file");
    document.write(out).expect("can write PDF");
    println!("wrote {}", output.display());
}
