// Reading of the survey export.

use log::debug;
use serde::Deserialize;
use serde_json::Value as JSValue;
use snafu::ResultExt;

use std::fs;
use std::path::Path;

use crate::survey::*;

#[derive(PartialEq, Debug, Clone, Deserialize)]
struct SubmissionRecord {
    #[serde(rename = "durationSeconds")]
    duration_seconds: Option<f64>,
    #[serde(default)]
    answers: Vec<AnswerRecord>,
}

// The answer entries are kept loose: legacy exports have no pair identifier,
// and keys or codes of an unexpected type must not fail the whole file.
#[derive(PartialEq, Debug, Clone, Deserialize)]
struct AnswerRecord {
    #[serde(rename = "pairId")]
    pair_id: Option<JSValue>,
    comparison: Option<JSValue>,
    answer: Option<JSValue>,
}

impl From<AnswerRecord> for Answer {
    fn from(rec: AnswerRecord) -> Self {
        Answer {
            pair_id: rec.pair_id.as_ref().and_then(read_pair_id),
            comparison: rec.comparison.as_ref().and_then(read_comparison),
            code: rec.answer.as_ref().and_then(read_code),
        }
    }
}

impl From<SubmissionRecord> for Submission {
    fn from(rec: SubmissionRecord) -> Self {
        Submission {
            duration_seconds: rec.duration_seconds,
            answers: rec.answers.into_iter().map(Answer::from).collect(),
        }
    }
}

// Keys are rendered the way the survey tooling prints them: booleans as
// True/False, numbers and strings verbatim, other values as JSON text.
fn render_key(js: &JSValue) -> Option<String> {
    match js {
        JSValue::Null => None,
        JSValue::Bool(true) => Some("True".to_string()),
        JSValue::Bool(false) => Some("False".to_string()),
        JSValue::Number(n) => Some(n.to_string()),
        JSValue::String(s) => Some(s.clone()),
        x => Some(x.to_string()),
    }
}

fn is_blank(js: &JSValue) -> bool {
    match js {
        JSValue::Null | JSValue::Bool(false) => true,
        JSValue::Number(n) => n.as_f64() == Some(0.0),
        JSValue::String(s) => s.is_empty(),
        JSValue::Array(a) => a.is_empty(),
        JSValue::Object(o) => o.is_empty(),
        _ => false,
    }
}

// A blank identifier (null, false, 0, "", [] or {}) falls back to the comparison index.
fn read_pair_id(js: &JSValue) -> Option<String> {
    if is_blank(js) {
        return None;
    }
    render_key(js)
}

fn read_comparison(js: &JSValue) -> Option<String> {
    render_key(js)
}

// Integral numbers are codes, 1.0 is accepted as 1. Booleans count as 0 and 1.
fn read_code(js: &JSValue) -> Option<i64> {
    match js {
        JSValue::Bool(b) => Some(*b as i64),
        JSValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

/// Parses the content of a survey export: a JSON array of submissions.
pub fn parse_submissions(contents: &str, path: &str) -> SurveyResult<Vec<Submission>> {
    let records: Vec<SubmissionRecord> =
        serde_json::from_str(contents).context(ParsingJsonSnafu { path })?;
    Ok(records.into_iter().map(Submission::from).collect())
}

pub fn read_submissions(path: &Path) -> SurveyResult<Vec<Submission>> {
    let path_s = path.display().to_string();
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu {
        path: path_s.clone(),
    })?;
    let res = parse_submissions(contents.as_str(), path_s.as_str())?;
    debug!("read_submissions: {:?}: {} submissions", path_s, res.len());
    Ok(res)
}
