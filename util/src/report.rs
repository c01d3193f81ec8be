use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use std::io::{self, Write};

/// Renders parse errors as annotated source snippets.
pub struct Reporter {
    source_id: &'static str,
    color: bool,
}

impl Reporter {
    pub const fn new(source_id: &'static str, color: bool) -> Self {
        Self { source_id, color }
    }

    pub fn write(
        &self,
        source: &str,
        errors: &[Simple<char>],
        mut w: impl Write,
    ) -> io::Result<()> {
        for err in errors {
            let span = err.span();
            let mut report = Report::build(ReportKind::Error, (self.source_id, span.clone()))
                .with_config(Config::default().with_color(self.color))
                .with_message(message(err))
                .with_label(
                    Label::new((self.source_id, span))
                        .with_message(expected(err))
                        .with_color(Color::Red),
                );

            if let SimpleReason::Unclosed { span, .. } = err.reason() {
                report = report.with_label(
                    Label::new((self.source_id, span.clone()))
                        .with_message("opened here")
                        .with_color(Color::Yellow),
                );
            }

            report
                .finish()
                .write((self.source_id, Source::from(source)), &mut w)?;
        }
        Ok(())
    }

    pub fn eprint(&self, source: &str, errors: &[Simple<char>]) -> io::Result<()> {
        self.write(source, errors, io::stderr().lock())
    }
}

fn message(err: &Simple<char>) -> String {
    match err.reason() {
        SimpleReason::Unclosed { delimiter, .. } => format!("Unclosed delimiter '{delimiter}'"),
        SimpleReason::Unexpected => match err.found() {
            Some(c) => format!("Unexpected '{c}'"),
            None => "Unexpected end of input".to_string(),
        },
        SimpleReason::Custom(msg) => msg.clone(),
    }
}

fn expected(err: &Simple<char>) -> String {
    if let Some(label) = err.label() {
        return format!("expected {label}");
    }

    let mut expected = err
        .expected()
        .map(|e| match e {
            Some(c) => format!("'{c}'"),
            None => "end of input".to_string(),
        })
        .collect::<Vec<_>>();
    expected.sort();

    if expected.is_empty() {
        "not expected here".to_string()
    } else {
        format!("expected {}", expected.join(", "))
    }
}
