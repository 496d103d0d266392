use studbud_core::{LearningStyle, Subject, MAX_HOURS, MIN_HOURS};

use crate::form::StudyForm;

/// What to show under the form.
pub enum Outcome<'a> {
    Plan(&'a str),
    Failed(&'a str),
    Invalid(&'a str),
}

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem;font-weight:bold}\
fieldset{margin-top:1rem}fieldset label{display:inline;font-weight:normal;margin-right:1rem}\
input[type=text],textarea{width:100%}\
pre.plan{white-space:pre-wrap;background:#f6f6f6;padding:1rem}\
.error{color:#a00;background:#fee;padding:.75rem}";

/// Render the single page: form, then the outcome of the last submission.
pub fn render_page(form: &StudyForm, outcome: Option<Outcome<'_>>) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Studbud: AI Study Planner</title>\n");
    page.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    page.push_str("<h1>&#127891; Studbud: AI Study Planner</h1>\n");
    page.push_str("<h3>Free Academic Planning Tool</h3>\n");

    append_form(&mut page, form);

    match outcome {
        None => {}
        Some(Outcome::Plan(text)) => append_plan(&mut page, text),
        Some(Outcome::Failed(message)) | Some(Outcome::Invalid(message)) => {
            page.push_str(&format!(
                "<p class=\"error\" role=\"alert\">{}</p>\n",
                escape(message)
            ));
        }
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn append_form(page: &mut String, form: &StudyForm) {
    page.push_str("<form method=\"post\" action=\"/plan\">\n");

    page.push_str(&format!(
        "<label for=\"name\">Student Name</label>\n\
         <input type=\"text\" id=\"name\" name=\"name\" value=\"{}\">\n",
        escape(&form.name)
    ));

    page.push_str("<fieldset>\n<legend>Subjects</legend>\n");
    for &subject in Subject::ALL {
        append_checkbox(
            page,
            "subjects",
            subject.as_str(),
            subject.display_name(),
            form.has_subject(subject),
        );
    }
    page.push_str("</fieldset>\n");

    page.push_str(&format!(
        "<label for=\"hours\">Daily Study Hours</label>\n\
         <input type=\"range\" id=\"hours\" name=\"hours\" min=\"{MIN_HOURS}\" max=\"{MAX_HOURS}\" \
         step=\"1\" value=\"{}\">\n",
        escape(&form.hours_value())
    ));

    page.push_str(&format!(
        "<label for=\"goals\">Learning Objectives</label>\n\
         <textarea id=\"goals\" name=\"goals\" rows=\"4\">\n{}</textarea>\n",
        escape(&form.goals)
    ));
    page.push_str(&format!(
        "<label for=\"strengths\">Strong Areas</label>\n\
         <input type=\"text\" id=\"strengths\" name=\"strengths\" value=\"{}\">\n",
        escape(&form.strengths)
    ));
    page.push_str(&format!(
        "<label for=\"weaknesses\">Weak Areas</label>\n\
         <input type=\"text\" id=\"weaknesses\" name=\"weaknesses\" value=\"{}\">\n",
        escape(&form.weaknesses)
    ));

    page.push_str("<fieldset>\n<legend>Learning Styles</legend>\n");
    for &style in LearningStyle::ALL {
        append_checkbox(
            page,
            "preferences",
            style.as_str(),
            style.display_name(),
            form.has_preference(style),
        );
    }
    page.push_str("</fieldset>\n");

    page.push_str("<p><button type=\"submit\">Generate Plan</button></p>\n</form>\n");
}

fn append_checkbox(page: &mut String, name: &str, value: &str, label: &str, checked: bool) {
    let id = format!("{name}-{value}");
    page.push_str(&format!(
        "<input type=\"checkbox\" id=\"{id}\" name=\"{name}\" value=\"{value}\"{}>\
         <label for=\"{id}\">{label}</label>\n",
        if checked { " checked" } else { "" }
    ));
}

fn append_plan(page: &mut String, text: &str) {
    let escaped = escape(text);
    page.push_str("<h2>Your Study Plan</h2>\n");
    page.push_str(&format!("<pre class=\"plan\">{escaped}</pre>\n"));
    // The leading newline is eaten by the HTML parser, so the textarea keeps
    // the plan's own first character.
    page.push_str(&format!(
        "<form method=\"post\" action=\"/plan/download\">\n\
         <textarea name=\"plan\" hidden>\n{escaped}</textarea>\n\
         <button type=\"submit\">Download Plan</button>\n</form>\n"
    ));
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn blank_page_lists_every_option() {
        let page = render_page(&StudyForm::default(), None);
        for &s in Subject::ALL {
            assert!(page.contains(s.display_name()));
        }
        for &p in LearningStyle::ALL {
            assert!(page.contains(p.display_name()));
        }
        assert!(page.contains("min=\"1\" max=\"8\""));
        assert!(page.contains("value=\"2\""));
        assert!(page.contains("Generate Plan"));
        assert!(!page.contains("Your Study Plan"));
        assert!(!page.contains(" checked"));
    }

    #[test]
    fn selections_are_rechecked() {
        let form = StudyForm {
            name: "Ann".into(),
            subjects: vec!["science".into()],
            hours: "5".into(),
            preferences: vec!["audio".into()],
            ..Default::default()
        };
        let page = render_page(&form, None);
        assert!(page.contains("value=\"science\" checked"));
        assert!(page.contains("value=\"audio\" checked"));
        assert!(!page.contains("value=\"math\" checked"));
        assert!(page.contains("value=\"5\""));
        assert!(page.contains("value=\"Ann\""));
    }

    #[test]
    fn plan_section_is_escaped() {
        let page = render_page(&StudyForm::default(), Some(Outcome::Plan("<b>Week 1</b>")));
        assert!(page.contains("Your Study Plan"));
        assert!(page.contains("&lt;b&gt;Week 1&lt;/b&gt;"));
        assert!(!page.contains("<b>Week 1</b>"));
        assert!(page.contains("Download Plan"));
        assert!(page.contains("action=\"/plan/download\""));
    }

    #[test]
    fn failure_renders_alert() {
        let page = render_page(
            &StudyForm::default(),
            Some(Outcome::Failed("Please try again. Error: boom")),
        );
        assert!(page.contains("role=\"alert\">Please try again. Error: boom</p>"));
        assert!(!page.contains("Your Study Plan"));
    }
}
