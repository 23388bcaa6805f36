use log::{debug, info};

use pair_tally::*;
use snafu::Snafu;

use std::path::PathBuf;

use crate::args::Args;
use crate::survey::xlsx_export::{ExportOutcome, SheetExporter};

pub mod console;
pub mod io_json;
pub mod summary;
pub mod xlsx_export;

#[derive(Debug, Snafu)]
pub enum SurveyError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing the JSON content of {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error opening the spreadsheet {path}"))]
    OpeningExcel {
        source: Box<dyn std::error::Error>,
        path: String,
    },
    #[snafu(display("The spreadsheet {path} does not contain any worksheet"))]
    EmptyExcel { path: String },
    #[snafu(display("Error writing the spreadsheet {path}"))]
    WritingExcel {
        source: Box<dyn std::error::Error>,
        path: String,
    },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error serializing the summary"))]
    SerializingSummary { source: serde_json::Error },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type SurveyResult<T> = Result<T, SurveyError>;

/// The locations used by one run.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SurveySettings {
    pub input: PathBuf,
    /// Where to write the JSON summary: a file path or "stdout".
    pub summary_out: Option<String>,
    pub reference: Option<String>,
}

impl From<&Args> for SurveySettings {
    fn from(args: &Args) -> Self {
        SurveySettings {
            input: PathBuf::from(&args.input),
            summary_out: args.out.clone().filter(|s| !s.is_empty()),
            reference: args.reference.clone(),
        }
    }
}

/// Runs the whole evaluation: reads the submissions, prints the report,
/// fills the spreadsheet and writes or checks the summary.
pub fn run_survey(
    settings: &SurveySettings,
    exporter: &dyn SheetExporter,
) -> SurveyResult<SurveyTally> {
    info!("Reading submissions from {:?}", settings.input);
    let submissions = io_json::read_submissions(&settings.input)?;
    debug!("run_survey: {} submissions", submissions.len());

    let tally = run_tally(&submissions);

    print!("{}", console::render_report(&tally));

    match exporter.export(&tally)? {
        ExportOutcome::Written(path) => {
            println!("\nExcel export written to '{}'.", path.display());
        }
        ExportOutcome::MissingTemplate(path) => {
            println!(
                "\n[WARN] Could not find Excel template at '{}'. Skipping Excel export.",
                path.display()
            );
        }
        ExportOutcome::Unavailable => {
            println!(
                "\n[INFO] answerfinder was built without spreadsheet support; skipping Excel export. \
                 Build it with the 'xlsx' feature and run it again."
            );
        }
    }

    if settings.summary_out.is_some() || settings.reference.is_some() {
        let summary_js = summary::build_summary_js(&tally);
        if let Some(out) = &settings.summary_out {
            summary::write_summary(&summary_js, out)?;
        }
        if let Some(reference_p) = &settings.reference {
            summary::check_reference(&summary_js, reference_p)?;
        }
    }

    Ok(tally)
}
