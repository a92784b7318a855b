use crate::infra::parse_cutoffs;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use wellbeing::error::AppError;
use wellbeing::scoring::{
    CompletenessPolicy, CutoffPreset, ScoreReport, ScoringConfig, ScoringEngine,
};
use wellbeing::survey::{
    Dimension, QuestionCatalogue, ResponseExportImporter, ResponseLedger, SurveyAttempt,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding an answer ledger, e.g. {"1":"4","2":"3"}
    #[arg(long, conflicts_with = "responses", required_unless_present = "responses")]
    pub(crate) answers: Option<PathBuf>,
    /// CSV export of the response table (survey_id,question_id,answer,created_at)
    #[arg(long)]
    pub(crate) responses: Option<PathBuf>,
    /// Only import rows for this survey id from the CSV export
    #[arg(long)]
    pub(crate) survey_id: Option<String>,
    /// Cutoff table used for zone classification (unified or dashboard)
    #[arg(long, value_parser = parse_cutoffs, default_value = "unified")]
    pub(crate) cutoffs: CutoffPreset,
    /// Score even when some questions are unanswered
    #[arg(long)]
    pub(crate) allow_partial: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogueArgs {
    /// Print the catalogue as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Answer pattern of the synthetic respondent
    #[arg(long, value_enum, default_value_t = DemoProfile::Strained)]
    pub(crate) profile: DemoProfile,
    /// Cutoff table used for zone classification (unified or dashboard)
    #[arg(long, value_parser = parse_cutoffs, default_value = "unified")]
    pub(crate) cutoffs: CutoffPreset,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoProfile {
    Thriving,
    #[default]
    Strained,
    BurnedOut,
}

impl DemoProfile {
    fn answer_for(self, dimension: Option<Dimension>) -> &'static str {
        match (self, dimension) {
            (DemoProfile::Thriving, _) => "1",
            (DemoProfile::Strained, Some(Dimension::Exhaustion)) => "4",
            (DemoProfile::Strained, Some(Dimension::Cognitive)) => "3",
            (DemoProfile::Strained, _) => "2",
            (DemoProfile::BurnedOut, Some(Dimension::Emotional)) => "3",
            (DemoProfile::BurnedOut, _) => "5",
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        responses,
        survey_id,
        cutoffs,
        allow_partial,
        json,
    } = args;

    let catalogue = QuestionCatalogue::bat12();
    let ledger = load_ledger(&catalogue, answers, responses, survey_id)?;

    let completeness = if allow_partial {
        CompletenessPolicy::AllowPartial
    } else {
        CompletenessPolicy::RequireAll
    };
    let engine = ScoringEngine::new(ScoringConfig::new(cutoffs.table(), completeness));
    let report = engine.score(&ledger, &catalogue)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_score_report(&report);
    }

    Ok(())
}

pub(crate) fn run_catalogue(args: CatalogueArgs) -> Result<(), AppError> {
    let catalogue = QuestionCatalogue::bat12();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalogue)?);
        return Ok(());
    }

    println!("{} ({} questions)", catalogue.survey_id(), catalogue.len());
    for question in catalogue.questions() {
        let dimension = question
            .dimension
            .map(Dimension::label)
            .unwrap_or("Unscored");
        println!("- [{}] {} ({})", question.id, question.text, dimension);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { profile, cutoffs } = args;
    let catalogue = Arc::new(QuestionCatalogue::bat12());
    let mut attempt = SurveyAttempt::linear(catalogue.clone());

    println!("Burnout assessment demo ({profile:?} respondent)");
    while let Some(current) = attempt.current_question() {
        let dimension = catalogue.get(current).and_then(|question| question.dimension);
        let answer = profile.answer_for(dimension);
        attempt.record_answer(current, answer)?;
        println!(
            "- answered question {} with {} ({:.0}% shown)",
            current,
            answer,
            attempt.progress()
        );
    }

    // Step back and revise the final answer to show edits do not inflate progress.
    let revisited = attempt.go_to_previous()?;
    attempt.record_answer(revisited, profile.answer_for(None))?;
    println!(
        "- revised question {} | progress still {:.0}% | state {}",
        revisited,
        attempt.progress(),
        attempt.state().label()
    );

    let ledger = attempt.submit()?;
    let engine = ScoringEngine::new(ScoringConfig::new(
        cutoffs.table(),
        CompletenessPolicy::RequireAll,
    ));
    let report = engine.score(&ledger, &catalogue)?;
    println!();
    render_score_report(&report);

    Ok(())
}

fn load_ledger(
    catalogue: &QuestionCatalogue,
    answers: Option<PathBuf>,
    responses: Option<PathBuf>,
    survey_id: Option<String>,
) -> Result<ResponseLedger, AppError> {
    if let Some(path) = responses {
        let importer = ResponseExportImporter::new(catalogue);
        let importer = match survey_id {
            Some(id) => importer.for_survey(id),
            None => importer,
        };
        return importer.from_path(path).map_err(AppError::from);
    }

    // clap requires one of the two sources, so this only fails for hand-built args.
    let path = answers.ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "either --answers or --responses is required",
        )
    })?;
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn render_score_report(report: &ScoreReport) {
    println!("Assessment results ({})", report.survey_id);
    println!(
        "Overall: {:.2} [{}] {}",
        report.overall.score, report.overall.zone_label, report.overall.advice.headline
    );
    println!("  {}", report.overall.advice.text);

    println!("\nDimensions");
    for assessment in &report.dimensions {
        println!(
            "- {}: {:.1} [{}] ({} answered)",
            assessment.label, assessment.score, assessment.zone_label, assessment.answered
        );
        println!("  {}", assessment.advice.headline);
    }

    if !report.skipped.is_empty() {
        let skipped: Vec<String> = report.skipped.iter().map(ToString::to_string).collect();
        println!(
            "\nSkipped answers (not a 1-5 value): questions {}",
            skipped.join(", ")
        );
    }

    println!(
        "\nCutoffs: At Risk from {:.2}, High Risk from {:.2}",
        report.cutoffs.at_risk_from(),
        report.cutoffs.high_risk_from()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellbeing::survey::{QuestionId, RawAnswer};

    #[test]
    fn demo_profiles_answer_every_dimension_on_the_likert_scale() {
        for profile in [
            DemoProfile::Thriving,
            DemoProfile::Strained,
            DemoProfile::BurnedOut,
        ] {
            for dimension in Dimension::ALL {
                let answer = RawAnswer::from(profile.answer_for(Some(dimension)));
                assert!(answer.likert_value().is_some(), "{profile:?} {dimension:?}");
            }
        }
    }

    #[test]
    fn load_ledger_reads_answer_json() {
        let path = std::env::temp_dir().join(format!(
            "wellbeing-answers-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"1":"4","7":"2"}"#).expect("writes answers");

        let catalogue = QuestionCatalogue::bat12();
        let ledger = load_ledger(&catalogue, Some(path.clone()), None, None).expect("loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(QuestionId(7)), Some(&RawAnswer::from("2")));
    }

    #[test]
    fn load_ledger_prefers_the_response_export() {
        let export = PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../crates/wellbeing/tests/fixtures/bat12_responses.csv"
        ));
        let catalogue = QuestionCatalogue::bat12();
        let ledger = load_ledger(&catalogue, None, Some(export), Some("bat-12".to_string()))
            .expect("imports export");

        assert_eq!(ledger.len(), 12);
        assert_eq!(ledger.get(QuestionId(3)), Some(&RawAnswer::from("3")));
    }

    #[test]
    fn score_args_require_a_ledger_source() {
        use clap::Parser;

        #[derive(Parser)]
        struct Harness {
            #[command(flatten)]
            args: ScoreArgs,
        }

        assert!(Harness::try_parse_from(["score"]).is_err());
        assert!(Harness::try_parse_from(["score", "--answers", "a.json", "--responses", "b.csv"])
            .is_err());
        let parsed = Harness::try_parse_from(["score", "--answers", "a.json", "--json"])
            .expect("answers alone parse");
        assert_eq!(parsed.args.answers, Some(PathBuf::from("a.json")));
        assert!(parsed.args.json);
    }

    #[test]
    fn load_ledger_propagates_missing_files() {
        let catalogue = QuestionCatalogue::bat12();
        let error = load_ledger(
            &catalogue,
            Some(PathBuf::from("./missing-answers.json")),
            None,
            None,
        )
        .expect_err("missing file");
        assert!(matches!(error, AppError::Io(_)));
    }

    #[test]
    fn run_demo_completes_for_each_profile() {
        for profile in [DemoProfile::Thriving, DemoProfile::BurnedOut] {
            run_demo(DemoArgs {
                profile,
                cutoffs: CutoffPreset::Unified,
            })
            .expect("demo runs");
        }
    }
}
