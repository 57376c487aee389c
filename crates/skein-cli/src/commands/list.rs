//! Implementation of the `skein list` command.

use skein_core::domain::ServiceDependencyView;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let manifest = super::manifest_path(&global, &config);
    let service = super::dependency_service();

    let views = service
        .list(&manifest, args.service.as_deref())
        .map_err(CliError::Core)?;

    match args.format {
        ListFormat::Table => render_table(&views, &output)?,

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json =
                serde_json::to_string_pretty(&views).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("service,dependsOn,requiredBy");
            for view in &views {
                println!(
                    "{},{},{}",
                    view.service,
                    view.depends_on.join(";"),
                    view.required_by.join(";")
                );
            }
        }
    }

    Ok(())
}

// ── table rendering ───────────────────────────────────────────────────────────

/// Render views as aligned columns: SERVICE / DEPENDS ON / REQUIRED BY.
fn render_table(views: &[ServiceDependencyView], output: &OutputManager) -> CliResult<()> {
    let rows: Vec<(String, String, String)> = views
        .iter()
        .map(|v| {
            (
                v.service.clone(),
                cell(&v.depends_on),
                cell(&v.required_by),
            )
        })
        .collect();

    let service_width = column_width("SERVICE", rows.iter().map(|r| r.0.as_str()));
    let depends_width = column_width("DEPENDS ON", rows.iter().map(|r| r.1.as_str()));

    output.header(&format!(
        "{:<service_width$}  {:<depends_width$}  {}",
        "SERVICE", "DEPENDS ON", "REQUIRED BY"
    ))?;

    for (service, depends_on, required_by) in &rows {
        output.print(&format!(
            "{service:<service_width$}  {depends_on:<depends_width$}  {required_by}"
        ))?;
    }

    Ok(())
}

/// A list cell: comma-joined names, `-` when empty.
fn cell(names: &[String]) -> String {
    if names.is_empty() {
        "-".into()
    } else {
        names.join(", ")
    }
}

fn column_width<'a>(heading: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(str::len)
        .chain(std::iter::once(heading.len()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_is_a_dash() {
        assert_eq!(cell(&[]), "-");
    }

    #[test]
    fn cell_joins_with_comma() {
        assert_eq!(cell(&["api".into(), "db".into()]), "api, db");
    }

    #[test]
    fn column_width_covers_heading_and_values() {
        let values = ["a", "longer-name"];
        assert_eq!(
            column_width("SERVICE", values.iter().copied()),
            "longer-name".len()
        );
        assert_eq!(column_width("SERVICE", std::iter::empty()), "SERVICE".len());
    }
}
