use clap::Parser;

/// Evaluation of the listening test: prints the answer counts of every comparison
/// and fills them into the spreadsheet template.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, default jsonfile.txt) The JSON export of the survey submissions.
    #[clap(short, long, value_parser, default_value = "jsonfile.txt")]
    pub input: String,

    /// (file path, optional) The spreadsheet template to fill. By default, Mappe1.xlsx
    /// next to the answerfinder executable.
    #[clap(short, long, value_parser)]
    pub template: Option<String>,

    /// (file path, default Mappe1_filled.xlsx) Where the filled spreadsheet is written.
    /// The template itself is never modified.
    #[clap(long, value_parser, default_value = "Mappe1_filled.xlsx")]
    pub xlsx_out: String,

    /// (file path, 'stdout' or empty) If specified, a summary of the counts will be written
    /// in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference summary in JSON format. If provided, answerfinder will
    /// check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
