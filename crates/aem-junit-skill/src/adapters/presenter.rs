#![expect(clippy::print_stdout, reason = "CLI output is emitted here")]
#![expect(clippy::print_stderr, reason = "CLI output is emitted here")]

use serde::Serialize;
use serde_json::Value;

use crate::app::commands::OutputFormat;
use crate::common::Colors;
use crate::content::PROGRAM_NAME;
use crate::content::TemplateKind;
use crate::error::SkillError;

/// Trait for presenting command output to the user.
///
/// Handlers describe what to show; the presenter decides between
/// human-readable text and JSON.
pub trait Presenter {
    /// Present a static document (help, guide, deps, config, quickstart).
    fn present_document(&self, command: &str, content: &str);

    /// Present a rendered test template.
    fn present_template(&self, kind: TemplateKind, class_name: &str, content: &str);

    /// Present the valid template names, shown when no valid type was given.
    fn present_template_list(&self, names: &[&str]);

    /// Present the bundled example projects. `None` means no examples directory.
    fn present_examples(&self, examples: Option<&[String]>);

    /// Present a known error with its suggestion.
    fn present_skill_error(&self, error: &SkillError);

    /// Present any other error.
    fn present_error(&self, message: &str);
}

/// Text presenter for human-readable output.
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn present_document(&self, _command: &str, content: &str) {
        println!("{}", content);
    }

    fn present_template(&self, _kind: TemplateKind, _class_name: &str, content: &str) {
        println!("{}", content);
    }

    fn present_template_list(&self, names: &[&str]) {
        println!("Available templates: {}", names.join(", "));
        println!("Usage: {} template <type>", PROGRAM_NAME);
        println!("Example: {} template model", PROGRAM_NAME);
    }

    fn present_examples(&self, examples: Option<&[String]>) {
        match examples {
            Some(names) => {
                println!("{}", Colors::bold("Available examples:"));
                for name in names {
                    println!("  - {}", name);
                }
            }
            None => println!("No examples found"),
        }
    }

    fn present_skill_error(&self, error: &SkillError) {
        if let SkillError::UnknownCommand(_) = error {
            println!("{}", error);
            println!("{}", error.suggestion());
            return;
        }
        eprintln!("{} {}", Colors::error("Error:"), error);
        if let Some(path) = error.path() {
            eprintln!("  {} {}", Colors::dim("Expected at:"), path.display());
        }
        eprintln!("{}", Colors::dim(&error.suggestion()));
    }

    fn present_error(&self, message: &str) {
        eprintln!("{} {}", Colors::error("Error:"), message);
    }
}

/// JSON presenter for machine-readable output.
pub struct JsonPresenter;

#[derive(Serialize)]
struct DocumentOutput<'a> {
    command: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct TemplateOutput<'a> {
    command: &'static str,
    template: &'static str,
    class_name: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct TemplateListOutput<'a> {
    templates: &'a [&'a str],
}

#[derive(Serialize)]
struct ExamplesOutput<'a> {
    examples: &'a [String],
}

#[derive(Serialize)]
struct ErrorOutput<'a> {
    success: bool,
    error: &'a str,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn document_json(command: &str, content: &str) -> String {
    to_json(&DocumentOutput { command, content })
}

fn template_json(kind: TemplateKind, class_name: &str, content: &str) -> String {
    to_json(&TemplateOutput {
        command: "template",
        template: kind.name(),
        class_name,
        content,
    })
}

fn examples_json(examples: Option<&[String]>) -> String {
    to_json(&ExamplesOutput {
        examples: examples.unwrap_or(&[]),
    })
}

impl Presenter for JsonPresenter {
    fn present_document(&self, command: &str, content: &str) {
        println!("{}", document_json(command, content));
    }

    fn present_template(&self, kind: TemplateKind, class_name: &str, content: &str) {
        println!("{}", template_json(kind, class_name, content));
    }

    fn present_template_list(&self, names: &[&str]) {
        println!("{}", to_json(&TemplateListOutput { templates: names }));
    }

    fn present_examples(&self, examples: Option<&[String]>) {
        println!("{}", examples_json(examples));
    }

    fn present_skill_error(&self, error: &SkillError) {
        let value: Value = error.to_json();
        eprintln!("{}", to_json(&value));
    }

    fn present_error(&self, message: &str) {
        eprintln!(
            "{}",
            to_json(&ErrorOutput {
                success: false,
                error: message,
            })
        );
    }
}

pub fn create_presenter(format: OutputFormat) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Json => Box::new(JsonPresenter),
        OutputFormat::Text => Box::new(TextPresenter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_json() {
        let value: Value = serde_json::from_str(&document_json("deps", "<dependencies/>")).unwrap();
        assert_eq!(value["command"], "deps");
        assert_eq!(value["content"], "<dependencies/>");
    }

    #[test]
    fn test_template_json() {
        let value: Value =
            serde_json::from_str(&template_json(TemplateKind::Servlet, "SearchServlet", "class X"))
                .unwrap();
        assert_eq!(value["template"], "servlet");
        assert_eq!(value["class_name"], "SearchServlet");
        assert_eq!(value["content"], "class X");
    }

    #[test]
    fn test_examples_json_absent_is_empty_array() {
        let value: Value = serde_json::from_str(&examples_json(None)).unwrap();
        assert_eq!(value["examples"], serde_json::json!([]));
    }

    #[test]
    fn test_examples_json_lists_names() {
        let names = vec!["aem-test-verified".to_string()];
        let value: Value = serde_json::from_str(&examples_json(Some(&names))).unwrap();
        assert_eq!(value["examples"][0], "aem-test-verified");
    }
}
