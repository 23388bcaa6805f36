pub mod catalog;
pub mod layout;
mod model;

use log::debug;

use std::collections::BTreeMap;

pub use crate::model::*;

/// Mean duration of the submissions that recorded one.
///
/// Returns 0.0 when no submission has a duration.
pub fn average_duration(submissions: &[Submission]) -> f64 {
    let durations: Vec<f64> = submissions
        .iter()
        .filter_map(|s| s.duration_seconds)
        .collect();
    if durations.is_empty() {
        return 0.0;
    }
    durations.iter().sum::<f64>() / durations.len() as f64
}

/// The identifier under which an answer is counted.
///
/// The stable pair identifier is preferred. Answers from older exports only
/// carry the index of the comparison, in which case a synthetic identifier
/// `comparison_<index>` is used.
pub fn resolve_pair_id(answer: &Answer) -> String {
    match &answer.pair_id {
        Some(pid) if !pid.is_empty() => pid.clone(),
        _ => format!(
            "comparison_{}",
            answer.comparison.as_deref().unwrap_or("None")
        ),
    }
}

/// Counts the answer codes of every pair, in a single pass over the answers.
///
/// Answers with a code outside of 0, 1, 2 are dropped.
pub fn tally_pairs(submissions: &[Submission]) -> BTreeMap<String, PairCounts> {
    let mut pairs: BTreeMap<String, PairCounts> = BTreeMap::new();
    for submission in submissions.iter() {
        for answer in submission.answers.iter() {
            let pair_id = resolve_pair_id(answer);
            match answer.code.and_then(AnswerCode::from_code) {
                Some(code) => pairs.entry(pair_id).or_default().record(code),
                None => {
                    debug!(
                        "tally_pairs: dropping answer {:?} for pair {:?}",
                        answer.code, pair_id
                    );
                }
            }
        }
    }
    pairs
}

pub fn run_tally(submissions: &[Submission]) -> SurveyTally {
    let tally = SurveyTally {
        num_submissions: submissions.len(),
        average_duration: average_duration(submissions),
        pairs: tally_pairs(submissions),
    };
    debug!("run_tally: {:?}", tally);
    tally
}

/// The order in which the pairs are reported.
///
/// The known pairs come first, in catalog order, then any other identifier in
/// lexicographic order.
pub fn display_order(tally: &SurveyTally) -> Vec<String> {
    let mut res: Vec<String> = catalog::PAIR_ORDER
        .iter()
        .filter(|pid| tally.pairs.contains_key(**pid))
        .map(|pid| pid.to_string())
        .collect();
    // The map is already sorted.
    res.extend(
        tally
            .pairs
            .keys()
            .filter(|pid| !catalog::is_known_pair(pid))
            .cloned(),
    );
    res
}

/// The known pairs that received answers, in catalog order.
pub fn exported_pairs(tally: &SurveyTally) -> Vec<(&'static str, PairCounts)> {
    catalog::PAIR_ORDER
        .iter()
        .map(|pid| (*pid, tally.counts(pid)))
        .filter(|(_, counts)| counts.total() > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn answer(pair_id: &str, code: i64) -> Answer {
        Answer {
            pair_id: Some(pair_id.to_string()),
            comparison: None,
            code: Some(code),
        }
    }

    fn submission(duration: Option<f64>, answers: Vec<Answer>) -> Submission {
        Submission {
            duration_seconds: duration,
            answers,
        }
    }

    #[test]
    fn average_without_durations() {
        init();
        let subs = vec![
            submission(None, vec![answer("conan_320_vs_orig", 1)]),
            submission(None, vec![]),
        ];
        assert_eq!(average_duration(&subs), 0.0);
        assert_eq!(average_duration(&[]), 0.0);
    }

    #[test]
    fn average_ignores_missing_durations() {
        init();
        let subs = vec![
            submission(Some(100.0), vec![]),
            submission(None, vec![]),
            submission(Some(50.0), vec![]),
        ];
        assert_eq!(average_duration(&subs), 75.0);
    }

    #[test]
    fn two_submissions_same_pair() {
        init();
        let subs = vec![
            submission(Some(10.0), vec![answer("bohemian_orig_vs_orig", 0)]),
            submission(Some(20.0), vec![answer("bohemian_orig_vs_orig", 1)]),
        ];
        let tally = run_tally(&subs);
        let counts = tally.counts("bohemian_orig_vs_orig");
        assert_eq!(counts, PairCounts::new(1, 1, 0));
        assert_eq!(counts.percentage(AnswerCode::Tie), 50.0);
        assert_eq!(counts.percentage(AnswerCode::FirstBetter), 50.0);
        assert_eq!(counts.percentage(AnswerCode::SecondBetter), 0.0);
        assert_eq!(tally.average_duration, 15.0);
        assert_eq!(tally.num_submissions, 2);
    }

    #[test]
    fn legacy_comparison_index() {
        let a = Answer {
            pair_id: None,
            comparison: Some("3".to_string()),
            code: Some(2),
        };
        assert_eq!(resolve_pair_id(&a), "comparison_3");
        let empty_id = Answer {
            pair_id: Some("".to_string()),
            ..a.clone()
        };
        assert_eq!(resolve_pair_id(&empty_id), "comparison_3");
        let nothing = Answer::default();
        assert_eq!(resolve_pair_id(&nothing), "comparison_None");
    }

    #[test]
    fn totals_match_number_of_answers() {
        init();
        let subs = vec![
            submission(
                None,
                vec![
                    answer("conan_orig_vs_64", 0),
                    answer("conan_orig_vs_64", 2),
                    answer("conan_32_vs_orig", 2),
                ],
            ),
            submission(
                None,
                vec![answer("conan_orig_vs_64", 2), answer("conan_orig_vs_64", 1)],
            ),
        ];
        let tally = run_tally(&subs);
        assert_eq!(tally.counts("conan_orig_vs_64"), PairCounts::new(1, 1, 2));
        assert_eq!(tally.counts("conan_orig_vs_64").total(), 4);
        assert_eq!(tally.counts("conan_32_vs_orig").total(), 1);
    }

    #[test]
    fn invalid_codes_are_dropped() {
        init();
        let subs = vec![submission(
            None,
            vec![
                answer("conan_orig_vs_64", 3),
                answer("conan_orig_vs_64", -1),
                Answer {
                    pair_id: Some("conan_orig_vs_64".to_string()),
                    comparison: None,
                    code: None,
                },
                answer("tomsdiner_320_vs_orig", 7),
                answer("tomsdiner_320_vs_orig", 2),
            ],
        )];
        let tally = run_tally(&subs);
        // A pair that never received a valid answer is not present at all.
        assert!(!tally.pairs.contains_key("conan_orig_vs_64"));
        assert_eq!(tally.counts("conan_orig_vs_64"), PairCounts::EMPTY);
        assert_eq!(
            tally.counts("tomsdiner_320_vs_orig"),
            PairCounts::new(0, 0, 1)
        );
        assert!(exported_pairs(&tally)
            .iter()
            .all(|(pid, _)| *pid != "conan_orig_vs_64"));
    }

    #[test]
    fn display_order_puts_unknown_pairs_last() {
        init();
        let subs = vec![submission(
            None,
            vec![
                answer("zeta_pair", 0),
                answer("tomsdiner_orig_vs_32", 1),
                Answer {
                    pair_id: None,
                    comparison: Some("4".to_string()),
                    code: Some(0),
                },
                answer("bohemian_orig_vs_64", 2),
                answer("alpha_pair", 0),
            ],
        )];
        let tally = run_tally(&subs);
        assert_eq!(
            display_order(&tally),
            vec![
                "bohemian_orig_vs_64",
                "tomsdiner_orig_vs_32",
                "alpha_pair",
                "comparison_4",
                "zeta_pair"
            ]
        );
        let exported: Vec<&str> = exported_pairs(&tally).iter().map(|(p, _)| *p).collect();
        assert_eq!(exported, vec!["bohemian_orig_vs_64", "tomsdiner_orig_vs_32"]);
    }
}
