// e2e/support.rs — hand-rolled LZ4 block writer shared by the test suites
// and benchmarks (pulled in with `include!`).
//
// The crate only decodes, so tests build their inputs with this small greedy
// encoder.  It emits valid block-format sequences; compression ratio is
// irrelevant.

#[allow(dead_code)]
pub mod lz4_writer {
    /// Minimum match the block format can express.
    pub const MIN_MATCH: usize = 4;

    fn push_length(out: &mut Vec<u8>, mut n: usize) {
        while n >= 255 {
            out.push(255);
            n -= 255;
        }
        out.push(n as u8);
    }

    /// Byte positions in a written stream where input may end cleanly.
    #[derive(Debug, Default, Clone)]
    pub struct CleanCuts(pub Vec<usize>);

    /// Appends one sequence.  `matched` is `(offset, total match length)`;
    /// `None` writes a literals-only final sequence.
    ///
    /// Returns the stream position right after the literals (where the
    /// block may end).
    pub fn push_sequence(out: &mut Vec<u8>, literals: &[u8], matched: Option<(u16, usize)>) -> usize {
        let lit = literals.len();
        let field = matched.map(|(_, len)| len - MIN_MATCH).unwrap_or(0);
        out.push(((lit.min(15) as u8) << 4) | field.min(15) as u8);
        if lit >= 15 {
            push_length(out, lit - 15);
        }
        out.extend_from_slice(literals);
        let after_literals = out.len();
        if let Some((offset, _)) = matched {
            out.extend_from_slice(&offset.to_le_bytes());
            if field >= 15 {
                push_length(out, field - 15);
            }
        }
        after_literals
    }

    /// Greedy encoder searching back `window` bytes for the longest match.
    /// Also returns every position where the stream may be cut cleanly.
    pub fn encode_with_cuts(data: &[u8], window: usize) -> (Vec<u8>, CleanCuts) {
        let mut out = Vec::new();
        let mut cuts = CleanCuts::default();
        let mut anchor = 0;
        let mut i = 0;
        while i + MIN_MATCH <= data.len() {
            let mut best = (0usize, 0usize);
            let lowest = i.saturating_sub(window.min(65_535));
            for j in (lowest..i).rev() {
                let mut len = 0;
                while i + len < data.len() && data[j + len] == data[i + len] {
                    len += 1;
                }
                if len > best.1 {
                    best = (i - j, len);
                }
            }
            if best.1 >= MIN_MATCH {
                cuts.0.push(out.len());
                let after = push_sequence(&mut out, &data[anchor..i], Some((best.0 as u16, best.1)));
                cuts.0.push(after);
                i += best.1;
                anchor = i;
            } else {
                i += 1;
            }
        }
        cuts.0.push(out.len());
        let after = push_sequence(&mut out, &data[anchor..], None);
        cuts.0.push(after);
        (out, cuts)
    }

    pub fn encode(data: &[u8]) -> Vec<u8> {
        encode_with_cuts(data, 1024).0
    }
}
