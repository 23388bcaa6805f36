// Export of the counts into the spreadsheet template.
//
// Spreadsheet support is an optional capability (cargo feature "xlsx"). Without
// it, the export is skipped and the rest of the evaluation runs as usual.

use log::{debug, info};

use std::path::PathBuf;

use crate::args::Args;
use crate::survey::*;

/// Name of the template, looked up next to the executable by default.
pub const TEMPLATE_FILE_NAME: &str = "Mappe1.xlsx";

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ExportOutcome {
    /// The filled spreadsheet was written at this location.
    Written(PathBuf),
    /// No template at this location, nothing was written.
    MissingTemplate(PathBuf),
    /// Spreadsheet support is not available in this build.
    Unavailable,
}

pub trait SheetExporter {
    fn export(&self, tally: &SurveyTally) -> SurveyResult<ExportOutcome>;
}

/// The exporter used when spreadsheet support is not compiled in.
#[cfg_attr(feature = "xlsx", allow(dead_code))]
#[derive(Debug, Clone, Default)]
pub struct UnavailableExporter;

impl SheetExporter for UnavailableExporter {
    fn export(&self, _tally: &SurveyTally) -> SurveyResult<ExportOutcome> {
        info!("Spreadsheet support not available, skipping export");
        Ok(ExportOutcome::Unavailable)
    }
}

/// `Mappe1.xlsx` in the directory of the running executable.
#[cfg_attr(not(feature = "xlsx"), allow(dead_code))]
pub fn default_template_path() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| dir.join(TEMPLATE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(TEMPLATE_FILE_NAME)),
        Err(e) => {
            debug!("default_template_path: no executable path: {:?}", e);
            PathBuf::from(TEMPLATE_FILE_NAME)
        }
    }
}

#[cfg(feature = "xlsx")]
pub fn default_exporter(args: &Args) -> Box<dyn SheetExporter> {
    let template = args
        .template
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_template_path);
    Box::new(template_exporter::TemplateExporter::new(
        template,
        PathBuf::from(&args.xlsx_out),
    ))
}

#[cfg(not(feature = "xlsx"))]
pub fn default_exporter(_args: &Args) -> Box<dyn SheetExporter> {
    Box::new(UnavailableExporter)
}

#[cfg(feature = "xlsx")]
pub mod template_exporter {
    use log::warn;
    use pair_tally::layout::{cell_name, template_cells, TemplateFill};
    use snafu::prelude::*;
    use std::path::Path;
    use umya_spreadsheet::{Spreadsheet, Worksheet};

    use super::*;

    /// Fills the counts into the template and saves the result under a new name.
    ///
    /// The workbook is edited in place: styles, number formats, merged cells
    /// and the other sheets are saved as they were loaded.
    #[derive(Eq, PartialEq, Debug, Clone)]
    pub struct TemplateExporter {
        template: PathBuf,
        output: PathBuf,
    }

    impl TemplateExporter {
        pub fn new(template: PathBuf, output: PathBuf) -> TemplateExporter {
            TemplateExporter { template, output }
        }
    }

    impl SheetExporter for TemplateExporter {
        fn export(&self, tally: &SurveyTally) -> SurveyResult<ExportOutcome> {
            if !self.template.is_file() {
                warn!("Template not found: {:?}", self.template);
                return Ok(ExportOutcome::MissingTemplate(self.template.clone()));
            }
            // The template itself is never written.
            ensure_whatever!(
                !same_file(&self.template, &self.output),
                "Refusing to overwrite the template {}",
                display_path(&self.template)
            );
            info!("Reading template {:?}", self.template);
            let mut book = read_template(&self.template)?;
            let fill = template_cells(tally);
            let sheet = book.get_sheet_mut(&0).context(EmptyExcelSnafu {
                path: display_path(&self.template),
            })?;
            apply_fill(sheet, &fill);
            write_workbook(&book, &self.output)?;
            Ok(ExportOutcome::Written(self.output.clone()))
        }
    }

    fn boxed<E: std::error::Error + 'static>(e: E) -> Box<dyn std::error::Error> {
        Box::new(e)
    }

    fn display_path(path: &Path) -> String {
        path.display().to_string()
    }

    fn same_file(a: &Path, b: &Path) -> bool {
        match (a.canonicalize(), b.canonicalize()) {
            (Ok(x), Ok(y)) => x == y,
            _ => a == b,
        }
    }

    /// Writes the counts into the sheet. Only the value of the target cells changes.
    pub fn apply_fill(sheet: &mut Worksheet, fill: &TemplateFill) {
        for cw in fill.cells.iter() {
            debug!(
                "apply_fill: {}!{} = {}",
                sheet.get_name(),
                cell_name(cw.row, cw.col),
                cw.value
            );
            // umya coordinates are (column, row), starting at 1.
            sheet
                .get_cell_mut((cw.col as u32 + 1, cw.row + 1))
                .set_value_number(cw.value as f64);
        }
    }

    pub fn read_template(path: &Path) -> SurveyResult<Spreadsheet> {
        umya_spreadsheet::reader::xlsx::read(path)
            .map_err(boxed)
            .context(OpeningExcelSnafu {
                path: display_path(path),
            })
    }

    pub fn write_workbook(book: &Spreadsheet, path: &Path) -> SurveyResult<()> {
        info!("Writing spreadsheet {:?}", path);
        umya_spreadsheet::writer::xlsx::write(book, path)
            .map_err(boxed)
            .context(WritingExcelSnafu {
                path: display_path(path),
            })
    }

}
