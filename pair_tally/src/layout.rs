//! Placement of the counts in the spreadsheet template.
//!
//! The first sheet of the template has one block per song: six rows (one per
//! comparison, rows 2 to 7) of three columns (the counts for the answer codes
//! 0, 1 and 2). The blocks start at columns B, G and L. The number of answers
//! per pair goes into S2.
//!
//! Coordinates are zero-based, as used by the spreadsheet libraries: B2 is
//! row 1, column 1.

use log::{debug, warn};

use crate::catalog::PAIRS_PER_SONG;
use crate::*;

/// Row of the first comparison of every song (row 2).
pub const FIRST_ROW: u32 = 1;

/// First column of each song block: B, G and L.
pub const SONG_BLOCK_COLUMNS: [u16; 3] = [1, 6, 11];

/// Cell receiving the number of answers per pair (S2).
pub const TOTAL_CELL: (u32, u16) = (1, 18);

/// A count to write in a cell of the template.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct CellWrite {
    pub row: u32,
    pub col: u16,
    pub value: u64,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct TemplateFill {
    pub cells: Vec<CellWrite>,
    /// The pairs that were placed, in placement order.
    pub placed_pairs: Vec<String>,
    /// True when the placed pairs do not all have the same number of answers.
    /// The total cell only reflects the first pair in that case.
    pub uneven_totals: bool,
}

/// Computes the cells to fill from a tally.
///
/// The known pairs with answers are placed by position: the first six go into
/// the first song block, the next six into the second one and so on. Pairs that
/// come after the last block are left out. Note that placement does not look at
/// which song a pair belongs to: if a pair is missing, the following ones shift
/// up into its slot.
pub fn template_cells(tally: &SurveyTally) -> TemplateFill {
    let mut cells: Vec<CellWrite> = Vec::new();
    let mut placed_pairs: Vec<String> = Vec::new();
    let pairs = exported_pairs(tally);
    for (idx, (pair_id, counts)) in pairs.iter().enumerate() {
        let song_index = idx / PAIRS_PER_SONG;
        // The catalog holds exactly one block per song, so this only cuts off
        // pairs if the catalog grows without the template.
        let base_col = match SONG_BLOCK_COLUMNS.get(song_index) {
            Some(c) => *c,
            None => break,
        };
        let row = FIRST_ROW + (idx % PAIRS_PER_SONG) as u32;
        for code in AnswerCode::ALL {
            cells.push(CellWrite {
                row,
                col: base_col + code.index() as u16,
                value: counts.get(code),
            });
        }
        debug!(
            "template_cells: {} -> {}",
            pair_id,
            cell_name(row, base_col)
        );
        placed_pairs.push(pair_id.to_string());
    }

    let mut uneven_totals = false;
    if let Some((first_id, first_counts)) = pairs.first() {
        let n = first_counts.total();
        uneven_totals = pairs.iter().any(|(_, c)| c.total() != n);
        if uneven_totals {
            warn!(
                "template_cells: pairs have different numbers of answers, {} only holds the count of {} ({})",
                cell_name(TOTAL_CELL.0, TOTAL_CELL.1),
                first_id,
                n
            );
        }
        cells.push(CellWrite {
            row: TOTAL_CELL.0,
            col: TOTAL_CELL.1,
            value: n,
        });
    }

    TemplateFill {
        cells,
        placed_pairs,
        uneven_totals,
    }
}

/// The A1-style name of a cell.
pub fn cell_name(row: u32, col: u16) -> String {
    let mut letters: Vec<char> = Vec::new();
    let mut c = col as u32 + 1;
    while c > 0 {
        let rem = (c - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        c = (c - 1) / 26;
    }
    letters.reverse();
    format!("{}{}", letters.iter().collect::<String>(), row + 1)
}
