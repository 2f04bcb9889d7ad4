//! Smith-Waterman local alignment with affine gap scoring.
//!
//! The aligner fills score and pointer matrices over two sequences and
//! records the best-scoring cell. Gap affinity is approximated in a
//! single matrix: a horizontal or vertical step pays the extension
//! penalty only when the neighbor it extends already points the same
//! direction, and the opening penalty otherwise. This is not the
//! two-matrix Gotoh formulation and can miss the cheapest affine path;
//! the behavior is pinned by the tests below.
//!
//! [`Aligner::align`] performs the full fill and returns an
//! [`Alignment`] ready for [`Alignment::tracepath`]. [`Aligner::probe`]
//! answers only "are these two sequences significantly similar?" and
//! abandons the fill as soon as the running best score crosses the
//! significance threshold.
//!
//! ## Examples
//!
//! ```rust
//! use estclust_core::alignment::{AlignParams, Aligner};
//! use estclust_core::sequence::Sequence;
//!
//! let x = Sequence::from_raw("x", "ACGTACGTGGCA");
//! let y = Sequence::from_raw("y", "TTACGTACGTGG");
//! let aligner = Aligner::new(AlignParams::default());
//! let mut result = aligner.align(&x, &y);
//! result.tracepath()?;
//! assert_eq!(result.top().len(), result.path_length());
//! # Ok::<(), estclust_core::EstError>(())
//! ```

use crate::constants::{
    DEFAULT_GAP_EXTEND, DEFAULT_GAP_OPEN, DEFAULT_MATCH, DEFAULT_MISMATCH, DEFAULT_SIGNIFICANCE,
};
use crate::sequence::Sequence;
use crate::types::EstError;

/// Rewards and penalties for local alignment, plus the significance
/// length.
///
/// Rewards are positive, penalties negative. The significance length is
/// the number of consecutive matching nucleotides that makes an
/// alignment significant; the score threshold derived from it allows a
/// 5% mismatch rate over that length.
#[derive(Debug, Clone, Copy)]
pub struct AlignParams {
    /// Reward for a full-strength match
    pub match_reward: f64,
    /// Penalty for a mismatch
    pub mismatch_penalty: f64,
    /// Penalty for opening a gap
    pub gap_open: f64,
    /// Penalty for extending an existing gap
    pub gap_extend: f64,
    /// Minimal aligned length considered significant
    pub significance_length: usize,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            match_reward: DEFAULT_MATCH,
            mismatch_penalty: DEFAULT_MISMATCH,
            gap_open: DEFAULT_GAP_OPEN,
            gap_extend: DEFAULT_GAP_EXTEND,
            significance_length: DEFAULT_SIGNIFICANCE,
        }
    }
}

impl AlignParams {
    /// Minimum best-cell score for an alignment to count as significant.
    pub fn significance_threshold(&self) -> f64 {
        self.significance_length as f64 * (self.match_reward + 0.05 * self.mismatch_penalty)
    }
}

/// Traceback pointer stored per matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Null,
    Left,
    Up,
    Diag,
}

/// Outcome of a matrix fill, before any traceback.
struct Fill {
    score: f64,
    x_end: usize,
    y_end: usize,
    ptr: Vec<Pointer>,
    aligned: bool,
    probe_hit: bool,
}

/// Local-alignment engine configured with one set of parameters.
#[derive(Debug, Clone, Default)]
pub struct Aligner {
    params: AlignParams,
}

impl Aligner {
    pub fn new(params: AlignParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AlignParams {
        &self.params
    }

    /// Aligns two sequences and returns the full result.
    ///
    /// The result carries the pointer matrix, so [`Alignment::tracepath`]
    /// can reconstruct the aligned columns later. Aligning against an
    /// empty sequence yields an unaligned zero-score result.
    pub fn align<'a>(&self, x: &'a Sequence, y: &'a Sequence) -> Alignment<'a> {
        let fill = self.fill(x, y, false);
        Alignment {
            x,
            y,
            params: self.params,
            score: fill.score,
            x_begin: 0,
            y_begin: 0,
            x_end: fill.x_end,
            y_end: fill.y_end,
            path_length: 0,
            top: String::new(),
            bottom: String::new(),
            align: String::new(),
            aligned: fill.aligned,
            traced: false,
            ptr: fill.ptr,
        }
    }

    /// Answers whether two sequences align significantly.
    ///
    /// The fill stops the moment the running best score reaches the
    /// significance threshold; a completed fill never reached it, so the
    /// verdict is exactly "did we exit early".
    pub fn probe(&self, x: &Sequence, y: &Sequence) -> bool {
        self.fill(x, y, true).probe_hit
    }

    fn fill(&self, x: &Sequence, y: &Sequence, probe: bool) -> Fill {
        let p = &self.params;
        let (xlen, ylen) = (x.len(), y.len());

        if xlen == 0 || ylen == 0 {
            return Fill {
                score: 0.0,
                x_end: 0,
                y_end: 0,
                ptr: Vec::new(),
                aligned: false,
                probe_hit: false,
            };
        }

        let threshold = p.significance_threshold();
        let idx = |i: usize, j: usize| i * ylen + j;

        let mut score = vec![0.0_f64; xlen * ylen];
        let mut ptr = vec![Pointer::Null; xlen * ylen];

        // First row and column of a local alignment carry no gap terms.
        for i in 0..xlen {
            score[idx(i, 0)] = (x[i].match_strength(y[0]) * p.match_reward).max(0.0);
        }
        for j in 1..ylen {
            score[idx(0, j)] = (x[0].match_strength(y[j]) * p.match_reward).max(0.0);
        }

        let mut best = 0.0_f64;
        let (mut x_end, mut y_end) = (0, 0);

        for j in 1..ylen {
            for i in 1..xlen {
                let left = score[idx(i - 1, j)]
                    + if ptr[idx(i - 1, j)] == Pointer::Left {
                        p.gap_extend
                    } else {
                        p.gap_open
                    };
                let up = score[idx(i, j - 1)]
                    + if ptr[idx(i, j - 1)] == Pointer::Up {
                        p.gap_extend
                    } else {
                        p.gap_open
                    };
                let strength = x[i].match_strength(y[j]);
                let diag = score[idx(i - 1, j - 1)]
                    + if strength > 0.0 {
                        strength * p.match_reward
                    } else {
                        p.mismatch_penalty
                    };

                // On ties the later candidate wins: DIAG over UP over
                // LEFT over NULL.
                let mut cell = 0.0;
                let mut dir = Pointer::Null;
                if left >= cell {
                    cell = left;
                    dir = Pointer::Left;
                }
                if up >= cell {
                    cell = up;
                    dir = Pointer::Up;
                }
                if diag >= cell {
                    cell = diag;
                    dir = Pointer::Diag;
                }
                score[idx(i, j)] = cell;
                ptr[idx(i, j)] = dir;

                if cell > best {
                    best = cell;
                    x_end = i;
                    y_end = j;
                    if probe && best >= threshold {
                        return Fill {
                            score: best,
                            x_end,
                            y_end,
                            ptr,
                            aligned: false,
                            probe_hit: true,
                        };
                    }
                }
            }
        }

        Fill {
            score: best,
            x_end,
            y_end,
            ptr,
            aligned: true,
            probe_hit: false,
        }
    }
}

/// Result of a full alignment fill.
///
/// Holds the best score, the end coordinates of the best-scoring cell,
/// and the pointer matrix. [`Alignment::tracepath`] materializes the
/// begin coordinates, path length, and the three display strings; until
/// then those read as zero/empty.
#[derive(Debug)]
pub struct Alignment<'a> {
    x: &'a Sequence,
    y: &'a Sequence,
    params: AlignParams,
    score: f64,
    x_begin: usize,
    y_begin: usize,
    x_end: usize,
    y_end: usize,
    path_length: usize,
    top: String,
    bottom: String,
    align: String,
    aligned: bool,
    traced: bool,
    ptr: Vec<Pointer>,
}

impl<'a> Alignment<'a> {
    /// The top (x) sequence of the alignment.
    pub fn x(&self) -> &'a Sequence {
        self.x
    }

    /// The bottom (y) sequence of the alignment.
    pub fn y(&self) -> &'a Sequence {
        self.y
    }

    /// Best local alignment score found.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Whether the fill ran to completion.
    pub fn is_aligned(&self) -> bool {
        self.aligned
    }

    /// Whether the alignment meets the significance threshold.
    pub fn significant(&self) -> bool {
        self.aligned && self.score >= self.params.significance_threshold()
    }

    pub fn x_begin(&self) -> usize {
        self.x_begin
    }

    pub fn y_begin(&self) -> usize {
        self.y_begin
    }

    pub fn x_end(&self) -> usize {
        self.x_end
    }

    pub fn y_end(&self) -> usize {
        self.y_end
    }

    /// Length of the traced path, gaps included; 0 before traceback.
    pub fn path_length(&self) -> usize {
        self.path_length
    }

    /// Aligned region of the x sequence, with `-` at gaps.
    pub fn top(&self) -> &str {
        &self.top
    }

    /// Aligned region of the y sequence, with `-` at gaps.
    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    /// Match line: `|` identity, `:` partial match, space otherwise.
    pub fn align(&self) -> &str {
        &self.align
    }

    /// Traces the aligned region back from the best-scoring cell.
    ///
    /// Fills the begin coordinates, the path length, and the three
    /// display strings. Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// [`EstError::NotAligned`] if the fill did not run to completion
    /// (a probe result, or an empty input sequence).
    pub fn tracepath(&mut self) -> Result<(), EstError> {
        if !self.aligned {
            return Err(EstError::NotAligned);
        }
        if self.traced {
            return Ok(());
        }

        let ylen = self.y.len();
        let ptr = &self.ptr;
        let at = |i: usize, j: usize| ptr[i * ylen + j];

        // First pass: walk to the path origin, counting the terminal
        // cell as part of the path.
        let (mut i, mut j) = (self.x_end, self.y_end);
        let mut path_length = 1;
        while at(i, j) != Pointer::Null {
            match at(i, j) {
                Pointer::Diag => {
                    i -= 1;
                    j -= 1;
                }
                Pointer::Left => i -= 1,
                Pointer::Up => j -= 1,
                Pointer::Null => unreachable!(),
            }
            path_length += 1;
        }
        let (x_begin, y_begin) = (i, j);

        // Second pass: emit columns right to left.
        let mut top = vec![0_u8; path_length];
        let mut bottom = vec![0_u8; path_length];
        let mut align = vec![0_u8; path_length];

        let match_char = |strength: f64| -> u8 {
            if strength == 1.0 {
                b'|'
            } else if strength == 0.0 {
                b' '
            } else {
                b':'
            }
        };

        let (mut i, mut j) = (self.x_end, self.y_end);
        for k in (0..path_length).rev() {
            match at(i, j) {
                Pointer::Diag => {
                    top[k] = self.x.letter(i) as u8;
                    bottom[k] = self.y.letter(j) as u8;
                    align[k] = match_char(self.x[i].match_strength(self.y[j]));
                    i -= 1;
                    j -= 1;
                }
                Pointer::Left => {
                    top[k] = self.x.letter(i) as u8;
                    bottom[k] = b'-';
                    align[k] = b' ';
                    i -= 1;
                }
                Pointer::Up => {
                    top[k] = b'-';
                    bottom[k] = self.y.letter(j) as u8;
                    align[k] = b' ';
                    j -= 1;
                }
                // The path origin: emitted like a diagonal step.
                Pointer::Null => {
                    top[k] = self.x.letter(i) as u8;
                    bottom[k] = self.y.letter(j) as u8;
                    align[k] = match_char(self.x[i].match_strength(self.y[j]));
                }
            }
        }

        self.x_begin = x_begin;
        self.y_begin = y_begin;
        self.path_length = path_length;
        self.top = String::from_utf8(top).expect("alignment strings are ASCII");
        self.bottom = String::from_utf8(bottom).expect("alignment strings are ASCII");
        self.align = String::from_utf8(align).expect("alignment strings are ASCII");
        self.traced = true;
        Ok(())
    }
}
