// Machine-readable summary of the counts, and comparison with a reference summary.

use log::{info, warn};
use serde_json::json;
use serde_json::Value as JSValue;
use snafu::prelude::*;
use text_diff::print_diff;

use std::fs;

use pair_tally::catalog::{audio_info, PairAudio};

use crate::survey::*;

pub fn build_summary_js(tally: &SurveyTally) -> JSValue {
    let pairs: Vec<JSValue> = display_order(tally)
        .iter()
        .map(|pair_id| {
            let counts = tally.counts(pair_id);
            let audio = audio_info(pair_id).unwrap_or(PairAudio::UNKNOWN);
            json!({
                "pairId": pair_id,
                "v1": audio.first,
                "v2": audio.second,
                "n": counts.total(),
                "counts": counts.as_array(),
            })
        })
        .collect();
    json!({
        "averageDurationSeconds": tally.average_duration,
        "submissions": tally.num_submissions,
        "pairs": pairs,
    })
}

/// Writes the summary to a file, or to the standard output if the location is "stdout".
pub fn write_summary(summary_js: &JSValue, out: &str) -> SurveyResult<()> {
    let pretty = serde_json::to_string_pretty(summary_js).context(SerializingSummarySnafu {})?;
    if out == "stdout" {
        println!("{}", pretty);
    } else {
        info!("Writing summary to {:?}", out);
        fs::write(out, pretty).context(WritingSummarySnafu { path: out })?;
    }
    Ok(())
}

pub fn read_summary(path: &str) -> SurveyResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(js)
}

/// Fails if the summary differs from the reference summary stored at the given path.
/// The differences are printed.
pub fn check_reference(summary_js: &JSValue, reference_path: &str) -> SurveyResult<()> {
    let summary_ref = read_summary(reference_path)?;
    let pretty_ref = serde_json::to_string_pretty(&summary_ref).context(SerializingSummarySnafu {})?;
    let pretty = serde_json::to_string_pretty(summary_js).context(SerializingSummarySnafu {})?;
    if pretty_ref != pretty {
        warn!("Found differences with the reference summary {:?}", reference_path);
        print_diff(pretty_ref.as_str(), pretty.as_str(), "\n");
        whatever!("Difference detected between the computed summary and the reference summary")
    }
    info!("Summary matches the reference {:?}", reference_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn small_tally() -> SurveyTally {
        let mut pairs: BTreeMap<String, PairCounts> = BTreeMap::new();
        pairs.insert("comparison_2".to_string(), PairCounts::new(0, 0, 1));
        pairs.insert("conan_orig_vs_128".to_string(), PairCounts::new(2, 1, 0));
        SurveyTally {
            num_submissions: 3,
            average_duration: 42.5,
            pairs,
        }
    }

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("answerfinder-{}-{}", std::process::id(), name))
            .display()
            .to_string()
    }

    #[test]
    fn summary_content() {
        let js = build_summary_js(&small_tally());
        assert_eq!(
            js,
            json!({
                "averageDurationSeconds": 42.5,
                "submissions": 3,
                "pairs": [
                    {"pairId": "conan_orig_vs_128", "v1": "orig", "v2": "128k", "n": 3, "counts": [2, 1, 0]},
                    {"pairId": "comparison_2", "v1": "?", "v2": "?", "n": 1, "counts": [0, 0, 1]},
                ]
            })
        );
    }

    #[test]
    fn reference_check() {
        let js = build_summary_js(&small_tally());
        let p = temp_path("summary-ref.json");
        write_summary(&js, p.as_str()).unwrap();
        assert!(check_reference(&js, p.as_str()).is_ok());

        let mut other = small_tally();
        other.num_submissions = 4;
        let res = check_reference(&build_summary_js(&other), p.as_str());
        assert!(matches!(res, Err(SurveyError::Whatever { .. })));
        let _ = fs::remove_file(p);
    }

    #[test]
    fn missing_reference() {
        let res = check_reference(&json!({}), temp_path("no-such-ref.json").as_str());
        assert!(matches!(res, Err(SurveyError::OpeningJson { .. })));
    }
}
