use crate::infra::build_mapper;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::warn;
use visa_forms::config::AppConfig;
use visa_forms::error::AppError;
use visa_forms::forms::{
    fill_form, AnswersTree, FillReport, InMemoryForm, MappingOutcome, TemplateInventory,
};
use visa_forms::telemetry;

#[derive(Args, Debug)]
pub(crate) struct MapArgs {
    /// Answers JSON exported from the wizard
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// CSV field inventory of the target template (`Field Name,Field Type`)
    #[arg(long)]
    pub(crate) template_fields: Option<PathBuf>,
    /// Print the assignments on one line
    #[arg(long)]
    pub(crate) compact: bool,
    /// Fill an in-memory copy of the template and print the fill report instead
    #[arg(long, requires = "template_fields")]
    pub(crate) preview: bool,
}

pub(crate) fn run_map(args: MapArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let template_fields = args.template_fields.or(config.forms.template_fields);
    let outcome = map_file(&args.answers, template_fields.as_deref())?;

    for name in &outcome.rejected_overrides {
        warn!(field = %name, "override skipped: field not in template");
    }

    match template_fields.as_deref() {
        Some(inventory) if args.preview => {
            let report = preview_fill(inventory, &outcome)?;
            for failed in &report.failed {
                warn!(field = %failed.name, reason = %failed.reason, "field not filled");
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => println!("{}", render(&outcome, args.compact)?),
    }
    Ok(())
}

pub(crate) fn map_file(
    answers: &Path,
    template_fields: Option<&Path>,
) -> Result<MappingOutcome, AppError> {
    let mapper = build_mapper(template_fields)?;
    let raw = std::fs::read_to_string(answers)?;
    let answers: AnswersTree = serde_json::from_str(&raw)?;
    Ok(mapper.map_with_report(&answers))
}

/// Write the assignments into an in-memory form shaped by the template inventory.
pub(crate) fn preview_fill(
    template_fields: &Path,
    outcome: &MappingOutcome,
) -> Result<FillReport, AppError> {
    let inventory = TemplateInventory::from_path(template_fields)?;
    let mut form = InMemoryForm::from_inventory(&inventory);
    Ok(fill_form(&mut form, &outcome.assignments)?)
}

fn render(outcome: &MappingOutcome, compact: bool) -> Result<String, AppError> {
    let rendered = if compact {
        serde_json::to_string(&outcome.assignments)?
    } else {
        serde_json::to_string_pretty(&outcome.assignments)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FAMILY_NAME: &str = "form1[0].#subform[0].Pt1Line6a_FamilyName[0]";

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write input file");
        path
    }

    fn inventory(dir: &TempDir) -> PathBuf {
        write_file(
            dir,
            "fields.csv",
            &format!("Field Name,Field Type\n{FAMILY_NAME},Text\n"),
        )
    }

    #[test]
    fn maps_answers_file_with_template_inventory() {
        let dir = TempDir::new().expect("temp dir");
        let answers = write_file(
            &dir,
            "answers.json",
            r#"{
                "petitioner": { "name": { "last": "Rivera" } },
                "other": { "Unknown_Field[0]": "x" }
            }"#,
        );
        let inventory = inventory(&dir);

        let outcome = map_file(&answers, Some(inventory.as_path())).expect("maps");
        assert_eq!(outcome.assignments.text(FAMILY_NAME), Some("Rivera"));
        assert_eq!(outcome.rejected_overrides, vec!["Unknown_Field[0]".to_string()]);
        assert_eq!(
            render(&outcome, true).expect("renders"),
            format!(r#"{{"{FAMILY_NAME}":"Rivera"}}"#)
        );
    }

    #[test]
    fn preview_fills_the_template_copy() {
        let dir = TempDir::new().expect("temp dir");
        let answers = write_file(
            &dir,
            "answers.json",
            r#"{ "petitioner": { "name": { "last": "Rivera", "first": "Ana" } } }"#,
        );
        let inventory = inventory(&dir);

        let outcome = map_file(&answers, None).expect("maps");
        let report = preview_fill(&inventory, &outcome).expect("fills");
        assert_eq!(report.applied, 1);
        assert!(report.failed.is_empty());
        assert!(!report.skipped_unknown.is_empty());
    }

    #[test]
    fn invalid_answers_json_is_reported() {
        let dir = TempDir::new().expect("temp dir");
        let answers = write_file(&dir, "broken.json", "{ not json");
        let error = map_file(&answers, None).expect_err("invalid json rejected");
        assert!(matches!(error, AppError::Json(_)));
    }
}
