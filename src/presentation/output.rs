//! Output Rendering
//!
//! Renders compilation results as text or JSON. Renderers build strings; the
//! caller decides where they go.

use std::fmt::Write as _;

use crate::domain::entities::CompilationResult;
use crate::domain::kind::ObjectKind;
use crate::domain::value_objects::{CompileWarning, ConfigWarning, Environment};
use crate::error::StackdefResult;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Pretty JSON array of compiled objects
    Json,
}

/// Trait for rendering compiled plans
pub trait PlanRenderer {
    fn render(&self, result: &CompilationResult, environment: &Environment)
        -> StackdefResult<String>;
}

/// Text renderer for compiled plans
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    /// Verbosity level; above zero every effective config is listed
    pub verbose: u8,
}

impl PlanRenderer for TextRenderer {
    fn render(
        &self,
        result: &CompilationResult,
        environment: &Environment,
    ) -> StackdefResult<String> {
        let mut out = String::new();
        let protection = if environment.protect() {
            " (protected)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "Compiled {} objects for environment '{}'{}",
            result.len(),
            environment,
            protection
        );

        if !result.is_empty() {
            let rows: Vec<[&str; 3]> = result
                .objects
                .iter()
                .map(|o| {
                    [
                        o.kind.as_str(),
                        o.external_name.as_str(),
                        o.resource_identifier.as_str(),
                    ]
                })
                .collect();
            let header = ["KIND", "NAME", "IDENTIFIER"];
            let widths = column_widths(&header, &rows);

            out.push('\n');
            write_row(&mut out, &header, &widths);
            for (row, object) in rows.iter().zip(&result.objects) {
                write_row(&mut out, row, &widths);
                if self.verbose > 0 {
                    let fields: Vec<String> = object
                        .effective_config
                        .iter()
                        .map(|(name, value)| format!("{}={}", name, value))
                        .collect();
                    let _ = writeln!(out, "    {}", fields.join(" "));
                }
            }
        }

        out.push_str(&render_warnings(&result.warnings));
        Ok(out)
    }
}

/// JSON renderer for compiled plans
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl PlanRenderer for JsonRenderer {
    fn render(
        &self,
        result: &CompilationResult,
        _environment: &Environment,
    ) -> StackdefResult<String> {
        let mut json = result.to_json_pretty()?;
        json.push('\n');
        Ok(json)
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, verbose: u8) -> Box<dyn PlanRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Per-kind counts, the plan fingerprint and any warnings.
pub fn render_check_summary(
    result: &CompilationResult,
    environment: &Environment,
) -> StackdefResult<String> {
    let mut out = String::new();
    let _ = writeln!(out, "✓ Definitions OK (environment: {})", environment);
    out.push('\n');

    for kind in ObjectKind::ALL {
        let _ = writeln!(
            out,
            "  {:<18} {}",
            format!("{}:", kind),
            result.objects_of(kind).count()
        );
    }
    let _ = writeln!(out, "  {:<18} {}", "total:", result.len());
    let _ = writeln!(out, "  {:<18} {}", "protect:", environment.protect());
    let _ = writeln!(out, "  {:<18} {}", "fingerprint:", result.fingerprint()?);

    out.push_str(&render_warnings(&result.warnings));
    Ok(out)
}

/// Warning block appended to text output; empty when there are none.
pub fn render_warnings(warnings: &[CompileWarning]) -> String {
    if warnings.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push('\n');
    let _ = writeln!(out, "  Warnings ({}):", warnings.len());
    for warning in warnings {
        let _ = writeln!(out, "    [!] {}", warning);
    }
    out
}

pub fn format_config_warning(warning: &ConfigWarning) -> String {
    let mut line = match warning.line {
        Some(line) => format!(
            "⚠ Unknown config key '{}' in {}:{}",
            warning.key,
            warning.file.display(),
            line
        ),
        None => format!(
            "⚠ Unknown config key '{}' in {}",
            warning.key,
            warning.file.display()
        ),
    };

    if let Some(suggestion) = &warning.suggestion {
        let _ = write!(line, "\n   Did you mean '{}'?", suggestion);
    }
    line
}

fn column_widths(header: &[&str; 3], rows: &[[&str; 3]]) -> [usize; 3] {
    let mut widths = header.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn write_row(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let _ = writeln!(
        out,
        "  {:<w0$}  {:<w1$}  {}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1]
    );
}
