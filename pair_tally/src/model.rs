// ********* Input data structures ***********

use std::collections::BTreeMap;

/// One respondent's session.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Submission {
    /// Time spent on the whole test. Older sessions did not record it.
    pub duration_seconds: Option<f64>,
    pub answers: Vec<Answer>,
}

/// One comparison judgment, as stored in a submission.
///
/// Nothing is validated at this level: an answer may lack an identifier or
/// carry a code that is not understood. Such answers are handled during the
/// tally.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Answer {
    /// Stable identifier of the pair.
    pub pair_id: Option<String>,
    /// Legacy index of the comparison, used when there is no pair identifier.
    pub comparison: Option<String>,
    pub code: Option<i64>,
}

/// The judgment made by the respondent on a pair.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum AnswerCode {
    /// Both clips sound equally good (code 0).
    Tie,
    /// The first clip sounds better (code 1).
    FirstBetter,
    /// The second clip sounds better (code 2).
    SecondBetter,
}

impl AnswerCode {
    pub const ALL: [AnswerCode; 3] = [
        AnswerCode::Tie,
        AnswerCode::FirstBetter,
        AnswerCode::SecondBetter,
    ];

    pub fn from_code(code: i64) -> Option<AnswerCode> {
        match code {
            0 => Some(AnswerCode::Tie),
            1 => Some(AnswerCode::FirstBetter),
            2 => Some(AnswerCode::SecondBetter),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            AnswerCode::Tie => 0,
            AnswerCode::FirstBetter => 1,
            AnswerCode::SecondBetter => 2,
        }
    }
}

// ******** Output data structures *********

/// Number of answers of each code for one pair.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Hash)]
pub struct PairCounts {
    counts: [u64; 3],
}

impl PairCounts {
    pub const EMPTY: PairCounts = PairCounts { counts: [0; 3] };

    pub fn new(tie: u64, first_better: u64, second_better: u64) -> PairCounts {
        PairCounts {
            counts: [tie, first_better, second_better],
        }
    }

    pub fn get(&self, code: AnswerCode) -> u64 {
        self.counts[code.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of the answers with this code, between 0 and 100.
    /// An empty pair has a share of 0 for every code.
    pub fn percentage(&self, code: AnswerCode) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(code) as f64 / total as f64 * 100.0
    }

    /// The counts, indexed by answer code.
    pub fn as_array(&self) -> [u64; 3] {
        self.counts
    }

    pub(crate) fn record(&mut self, code: AnswerCode) {
        self.counts[code.index()] += 1;
    }
}

/// Everything computed from a set of submissions.
#[derive(PartialEq, Debug, Clone)]
pub struct SurveyTally {
    pub num_submissions: usize,
    /// Mean duration over the submissions that recorded one, 0 if none did.
    pub average_duration: f64,
    /// Counts per pair identifier. Only pairs with at least one counted answer
    /// are present.
    pub pairs: BTreeMap<String, PairCounts>,
}

impl SurveyTally {
    pub fn counts(&self, pair_id: &str) -> PairCounts {
        self.pairs.get(pair_id).cloned().unwrap_or(PairCounts::EMPTY)
    }
}
