// Console report: the average duration, then one row per pair with the counts
// and shares of each answer.

use std::fmt::Write;

use pair_tally::catalog::{audio_info, PairAudio, PAIRS_PER_SONG};
use pair_tally::*;

fn header_line() -> String {
    format!(
        "{:<28}  {:<6}{:<6}{:>5} | {:>5} {:>6} | {:>5} {:>6} | {:>5} {:>6}",
        "Pair ID", "v1", "v2", "n", "a0", "%", "a1", "%", "a2", "%"
    )
}

fn rule_line() -> String {
    let cell = format!("{}-{}", "-".repeat(5), "-".repeat(6));
    format!(
        "{}  {}{}{}-+-{}-+-{}-+-{}",
        "-".repeat(28),
        "-".repeat(6),
        "-".repeat(6),
        "-".repeat(5),
        cell,
        cell,
        cell
    )
}

fn pair_line(pair_id: &str, audio: PairAudio, counts: &PairCounts) -> String {
    let mut line = format!(
        "{:<28}  {:<6}{:<6}{:>5}",
        pair_id,
        audio.first,
        audio.second,
        counts.total()
    );
    for code in AnswerCode::ALL {
        // Writing into a String does not fail.
        let _ = write!(
            line,
            " | {:>5} {:>5.1}%",
            counts.get(code),
            counts.percentage(code)
        );
    }
    line
}

/// Renders the table of all the pairs, in display order.
///
/// A rule separates the songs: it is inserted before the 7th and the 13th
/// entries of the display order. Entries without answers are skipped but still
/// take a position, so the rules only line up with the songs when every pair
/// has answers.
pub fn render_table(tally: &SurveyTally) -> String {
    let mut out = String::new();
    out.push_str(&header_line());
    out.push('\n');
    out.push_str(&rule_line());
    out.push('\n');
    for (idx, pair_id) in display_order(tally).iter().enumerate() {
        if idx == PAIRS_PER_SONG || idx == 2 * PAIRS_PER_SONG {
            out.push_str(&rule_line());
            out.push('\n');
        }
        let counts = tally.counts(pair_id);
        if counts.total() == 0 {
            continue;
        }
        let audio = audio_info(pair_id).unwrap_or(PairAudio::UNKNOWN);
        out.push_str(&pair_line(pair_id, audio, &counts));
        out.push('\n');
    }
    out
}

pub fn render_report(tally: &SurveyTally) -> String {
    format!(
        "Average duration: {:.2} seconds\n\n{}",
        tally.average_duration,
        render_table(tally)
    )
}
