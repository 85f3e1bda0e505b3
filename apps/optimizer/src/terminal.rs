//! Line-oriented rendering of the calculator modal.

use std::io::{self, BufRead, Write};

use client_core::{ModalView, RequestLifecycleController, SubmitOutcome};
use shared::domain::ParameterField;

const TITLE: &str = "Energy Optimizer";
const INTRO: &str = "Enter your device parameters below to receive optimization recommendations.";

pub fn render(view: &ModalView<'_>, out: &mut impl Write) -> io::Result<()> {
    match view {
        ModalView::Hidden => Ok(()),
        ModalView::Recommendation(result) => {
            let marker = if result.is_charge() { "+" } else { "=" };
            writeln!(out, "== {TITLE} ==")?;
            writeln!(out, "[{marker}] RECOMMENDATION: {}", result.decision)?;
            writeln!(out, "    {}", result.message)
        }
        ModalView::InputCollection {
            fields,
            error,
            loading,
        } => {
            writeln!(out, "== {TITLE} ==")?;
            writeln!(out, "{INTRO}")?;
            if let Some(error) = error {
                writeln!(out, "! {error}")?;
            }
            for (field, value) in fields {
                writeln!(out, "  {}: {value}", field.label())?;
            }
            if *loading {
                writeln!(out, "Optimizing...")?;
            }
            Ok(())
        }
    }
}

/// Stores whole values, stopping at the first one that is not a decimal
/// number. Fields after the rejected one are left untouched.
pub fn apply_values(
    controller: &mut RequestLifecycleController,
    values: &[(ParameterField, &str)],
) -> Result<(), ParameterField> {
    for (field, value) in values {
        if !controller.update_field(*field, value.trim()) {
            return Err(*field);
        }
    }
    Ok(())
}

/// Validates, shows the loading view, then sends the request.
pub async fn submit_and_render(
    controller: &mut RequestLifecycleController,
    out: &mut impl Write,
) -> io::Result<SubmitOutcome> {
    let request = match controller.begin_submit() {
        Ok(request) => request,
        Err(err) => return Ok(SubmitOutcome::Invalid(err)),
    };
    render(&controller.view(), out)?;
    out.flush()?;

    let outcome = controller.transport().predict(&request).await;
    Ok(controller.finish_submit(outcome))
}

enum Prompt {
    Line(String),
    Quit,
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<Prompt> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Prompt::Quit);
    }
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Ok(Prompt::Quit);
    }
    Ok(Prompt::Line(line.to_string()))
}

/// Prompts until `field` holds an accepted value or the user keeps the
/// current one. Returns false when the user quits.
fn read_field(
    controller: &mut RequestLifecycleController,
    field: ParameterField,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<bool> {
    loop {
        let current = controller.field(field);
        let label = if current.is_empty() {
            format!("{} ({})", field.label(), field.placeholder())
        } else {
            format!("{} [{current}]", field.label())
        };
        match prompt(input, out, &label)? {
            Prompt::Quit => return Ok(false),
            Prompt::Line(line) if line.is_empty() => return Ok(true),
            Prompt::Line(line) => {
                if controller.update_field(field, &line) {
                    return Ok(true);
                }
                writeln!(out, "  '{line}' is not a number")?;
            }
        }
    }
}

/// Runs the modal until the user quits or input ends. A blank answer keeps
/// the field's current value.
pub async fn run_interactive(
    controller: &mut RequestLifecycleController,
    mut input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    loop {
        let view = controller.view();
        if view == ModalView::Hidden {
            return Ok(());
        }
        render(&view, &mut out)?;

        if controller.result().is_some() {
            match prompt(&mut input, &mut out, "[b]ack to calculator or [q]uit")? {
                Prompt::Quit => controller.close(),
                Prompt::Line(_) => controller.reset(),
            }
            continue;
        }

        for field in ParameterField::ALL {
            if !read_field(controller, field, &mut input, &mut out)? {
                controller.close();
                return Ok(());
            }
        }

        submit_and_render(controller, &mut out).await?;
    }
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
