// ********* Known comparisons ***********

// The listening test plays the same three songs to every respondent. Each song
// is compared six times: the unprocessed original against itself, then the
// original against encodings from the highest bitrate (320k) down to the
// lowest (32k). The channel holding the original varies between pairs.

/// Number of comparisons played for every song.
pub const PAIRS_PER_SONG: usize = 6;

/// The songs of the test, in the order of their blocks in `PAIR_ORDER`.
pub const SONGS: [&str; 3] = ["Bohemian Rhapsody", "Detective Conan Theme", "Tom's Diner"];

/// Canonical ordering of the pairs, used both for the console and the export.
pub const PAIR_ORDER: [&str; 18] = [
    // Bohemian Rhapsody
    "bohemian_orig_vs_orig",
    "bohemian_320_vs_orig",
    "bohemian_224_vs_orig",
    "bohemian_128_vs_orig",
    "bohemian_orig_vs_64",
    "bohemian_orig_vs_32",
    // Detective Conan Theme
    "conan_orig_vs_orig",
    "conan_320_vs_orig",
    "conan_224_vs_orig",
    "conan_orig_vs_128",
    "conan_orig_vs_64",
    "conan_32_vs_orig",
    // Tom's Diner
    "tomsdiner_orig_vs_orig",
    "tomsdiner_320_vs_orig",
    "tomsdiner_orig_vs_224",
    "tomsdiner_128_vs_orig",
    "tomsdiner_64_vs_orig",
    "tomsdiner_orig_vs_32",
];

/// What was played in each channel of a pair: "orig" or a bitrate such as "320k".
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct PairAudio {
    pub first: &'static str,
    pub second: &'static str,
}

impl PairAudio {
    /// Labels shown for pairs that are not part of the catalog.
    pub const UNKNOWN: PairAudio = PairAudio {
        first: "?",
        second: "?",
    };

    const fn new(first: &'static str, second: &'static str) -> PairAudio {
        PairAudio { first, second }
    }
}

pub static PAIR_AUDIO_INFO: [(&str, PairAudio); 18] = [
    // Bohemian Rhapsody
    ("bohemian_orig_vs_orig", PairAudio::new("orig", "orig")),
    ("bohemian_320_vs_orig", PairAudio::new("320k", "orig")),
    ("bohemian_224_vs_orig", PairAudio::new("224k", "orig")),
    ("bohemian_128_vs_orig", PairAudio::new("128k", "orig")),
    ("bohemian_orig_vs_64", PairAudio::new("orig", "64k")),
    ("bohemian_orig_vs_32", PairAudio::new("orig", "32k")),
    // Detective Conan Theme
    ("conan_orig_vs_orig", PairAudio::new("orig", "orig")),
    ("conan_320_vs_orig", PairAudio::new("320k", "orig")),
    ("conan_224_vs_orig", PairAudio::new("224k", "orig")),
    ("conan_orig_vs_128", PairAudio::new("orig", "128k")),
    ("conan_orig_vs_64", PairAudio::new("orig", "64k")),
    ("conan_32_vs_orig", PairAudio::new("32k", "orig")),
    // Tom's Diner
    ("tomsdiner_orig_vs_orig", PairAudio::new("orig", "orig")),
    ("tomsdiner_320_vs_orig", PairAudio::new("320k", "orig")),
    ("tomsdiner_orig_vs_224", PairAudio::new("orig", "224k")),
    ("tomsdiner_128_vs_orig", PairAudio::new("128k", "orig")),
    ("tomsdiner_64_vs_orig", PairAudio::new("64k", "orig")),
    ("tomsdiner_orig_vs_32", PairAudio::new("orig", "32k")),
];

/// The channel labels of a pair, if the pair is known.
pub fn audio_info(pair_id: &str) -> Option<PairAudio> {
    PAIR_AUDIO_INFO
        .iter()
        .find(|(pid, _)| *pid == pair_id)
        .map(|(_, audio)| *audio)
}

/// Position of the pair in `PAIR_ORDER`.
pub fn canonical_index(pair_id: &str) -> Option<usize> {
    PAIR_ORDER.iter().position(|pid| *pid == pair_id)
}

pub fn is_known_pair(pair_id: &str) -> bool {
    canonical_index(pair_id).is_some()
}
