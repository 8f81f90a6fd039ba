//! Stroke-font text layout.
//!
//! Glyph strokes come from the classic Hershey single-stroke fonts, decoded
//! by the `hershey` crate; this module walks a message along a cursor, scales
//! it to a requested cap height, and hands back bare polylines. The strokes
//! are skeletons only; fattening them to a printable width is the job of
//! [`crate::text`].
//!
//! Characters the font has no glyph for advance the cursor and contribute no
//! strokes, the usual policy for missing glyphs in stroke-font engines.

use csgrs::float_types::Real;
use hershey::{Glyph, Vector};
use nalgebra::Point2;

/// Gap inserted between consecutive glyphs, in font units
const LETTER_GAP: Real = 3.0;

/// Advance used for characters without a glyph, in font units
const FALLBACK_ADVANCE: Real = 16.0;

/// Futural (simplex sans) face, one pen-program record per glyph starting
/// at ASCII space; extracted from the public-domain Hershey `futural.jhf`.
const FUTURAL_DATA: &[&str] = &[
    "JZ",
    "MWRFRT RRYQZR[SZRY",
    "JZNFNM RVFVM",
    "H]SBLb RYBRb RLOZO RKUYU",
    "H\\PBP_ RTBT_ RYIWGTFPFMGKIKKLMMNOOUQWRXSYUYXWZT[P[MZKX",
    "F^[FI[ RNFPHPJOLMMKMIKIIJGLFNFPGSHVHYG[F RWTUUTWTYV[X[ZZ[X[VYTWT",
    "E_\\O\\N[MZMYNXPVUTXRZP[L[JZIYHWHUISJRQNRMSKSIRGPFNGMIMKNNPQUXWZY[[[\\Z\\Y",
    "MWRHQGRFSGSIRKQL",
    "KYVBTDRGPKOPOTPYR]T`Vb",
    "KYNBPDRGTKUPUTTYR]P`Nb",
    "JZRLRX RMOWU RWOMU",
    "E_RIR[ RIR[R",
    "NVSWRXQWRVSWSYQ[",
    "E_IR[R",
    "NVRVQWRXSWRV",
    "G][BIb",
    "H\\QFNGLJKOKRLWNZQ[S[VZXWYRYOXJVGSFQF",
    "H\\NJPISFS[",
    "H\\LKLJMHNGPFTFVGWHXJXLWNUQK[Y[",
    "H\\MFXFRNUNWOXPYSYUXXVZS[P[MZLYKW",
    "H\\UFKTZT RUFU[",
    "H\\WFMFLOMNPMSMVNXPYSYUXXVZS[P[MZLYKW",
    "H\\XIWGTFRFOGMJLOLTMXOZR[S[VZXXYUYTXQVOSNRNOOMQLT",
    "H\\YFO[ RKFYF",
    "H\\PFMGLILKMMONSOVPXRYTYWXYWZT[P[MZLYKWKTLRNPQOUNWMXKXIWGTFPF",
    "H\\XMWPURRSQSNRLPKMKLLINGQFRFUGWIXMXRWWUZR[P[MZLX",
    "NVROQPRQSPRO RRVQWRXSWRV",
    "NVROQPRQSPRO RSWRXQWRVSWSYQ[",
    "F^ZIJRZ[",
    "E_IO[O RIU[U",
    "F^JIZRJ[",
    "I[LKLJMHNGPFTFVGWHXJXLWNVORQRT RRYQZR[SZRY",
    "E`WNVLTKQKOLNMMPMSNUPVSVUUVS RQKOMNPNSOUPV RWKVSVUXVZV\\T]Q]O\\L[JYHWGTFQFNGLHJJILHOHRIUJWLYNZQ[T[WZYYZX RXKWSWUXV",
    "I[RFJ[ RRFZ[ RMTWT",
    "G\\KFK[ RKFTFWGXHYJYLXNWOTP RKPTPWQXRYTYWXYWZT[K[",
    "H]ZKYIWGUFQFOGMILKKNKSLVMXOZQ[U[WZYXZV",
    "G\\KFK[ RKFRFUGWIXKYNYSXVWXUZR[K[",
    "H[LFL[ RLFYF RLPTP RL[Y[",
    "HZLFL[ RLFYF RLPTP",
    "H]ZKYIWGUFQFOGMILKKNKSLVMXOZQ[U[WZYXZVZS RUSZS",
    "G]KFK[ RYFY[ RKPYP",
    "NVRFR[",
    "JZVFVVUYTZR[P[NZMYLVLT",
    "G\\KFK[ RYFKT RPOY[",
    "HYLFL[ RL[X[",
    "F^JFJ[ RJFR[ RZFR[ RZFZ[",
    "G]KFK[ RKFY[ RYFY[",
    "G]PFNGLIKKJNJSKVLXNZP[T[VZXXYVZSZNYKXIVGTFPF",
    "G\\KFK[ RKFTFWGXHYJYMXOWPTQKQ",
    "G]PFNGLIKKJNJSKVLXNZP[T[VZXXYVZSZNYKXIVGTFPF RSWY]",
    "G\\KFK[ RKFTFWGXHYJYLXNWOTPKP RRPY[",
    "H\\YIWGTFPFMGKIKKLMMNOOUQWRXSYUYXWZT[P[MZKX",
    "JZRFR[ RKFYF",
    "G]KFKULXNZQ[S[VZXXYUYF",
    "I[JFR[ RZFR[",
    "F^HFM[ RRFM[ RRFW[ R\\FW[",
    "H\\KFY[ RYFK[",
    "I[JFRPR[ RZFRP",
    "H\\YFK[ RKFYF RK[Y[",
    "KYOBOb RPBPb ROBVB RObVb",
    "KYKFY^",
    "KYTBTb RUBUb RNBUB RNbUb",
    "JZRDJR RRDZR",
    "I[Ib[b",
    "NVSKQMQORPSORNQO",
    "I\\XMX[ RXPVNTMQMONMPLSLUMXOZQ[T[VZXX",
    "H[LFL[ RLPNNPMSMUNWPXSXUWXUZS[P[NZLX",
    "I[XPVNTMQMONMPLSLUMXOZQ[T[VZXX",
    "I\\XFX[ RXPVNTMQMONMPLSLUMXOZQ[T[VZXX",
    "I[LSXSXQWOVNTMQMONMPLSLUMXOZQ[T[VZXX",
    "MYWFUFSGRJR[ ROMVM",
    "I\\XMX]W`VaTbQbOa RXPVNTMQMONMPLSLUMXOZQ[T[VZXX",
    "I\\MFM[ RMQPNRMUMWNXQX[",
    "NVQFRGSFREQF RRMR[",
    "MWRFSGTFSERF RSMS^RaPbNb",
    "IZMFM[ RWMMW RQSX[",
    "NVRFR[",
    "CaGMG[ RGQJNLMOMQNRQR[ RRQUNWMZM\\N]Q][",
    "I\\MMM[ RMQPNRMUMWNXQX[",
    "I\\QMONMPLSLUMXOZQ[T[VZXXYUYSXPVNTMQM",
    "H[LMLb RLPNNPMSMUNWPXSXUWXUZS[P[NZLX",
    "I\\XMXb RXPVNTMQMONMPLSLUMXOZQ[T[VZXX",
    "KXOMO[ ROSPPRNTMWM",
    "J[XPWNTMQMNNMPNRPSUTWUXWXXWZT[Q[NZMX",
    "MYRFRWSZU[W[ ROMVM",
    "I\\MMMWNZP[S[UZXW RXMX[",
    "JZLMR[ RXMR[",
    "G]JMN[ RRMN[ RRMV[ RZMV[",
    "J[MMX[ RXMM[",
    "JZLMR[ RXMR[P_NaLbKb",
    "J[XMM[ RMMXM RM[X[",
    "KYTBRCQDPFPHQJRKSMSOQQ RRCQEQGRISJTLTNSPORSTTVTXSZR[Q]Q_Ra RQSSUSWRYQZP\\P^Q`RaTb",
    "NVRBRb",
    "KYPBRCSDTFTHSJRKQMQOSQ RRCSESGRIQJPLPNQPURQTPVPXQZR[S]S_Ra RSSQUQWRYSZT\\T^S`RaPb",
    "F^IUISJPLONOPPTSVTXTZS[Q RISJQLPNPPQTTVUXUZT[Q[O",
    "JZJFJ[K[KFLFL[M[MFNFN[O[OFPFP[Q[QFRFR[S[SFTFT[U[UFVFV[W[WFXFX[Y[YFZFZ[",
];

/// Cap height of the simplex face, in font units; glyphs are scaled so this
/// spans the requested height.
const CAP_HEIGHT: Real = 21.0;

/// Splits one glyph's pen program into polylines, one per pen-down run.
///
/// Font coordinates grow downward; y is flipped here so the result is y-up.
fn glyph_strokes(glyph: &Glyph) -> Vec<Vec<[Real; 2]>> {
    let mut strokes: Vec<Vec<[Real; 2]>> = Vec::new();
    let mut current: Vec<[Real; 2]> = Vec::new();
    for vector in &glyph.vectors {
        match vector {
            Vector::MoveTo { x, y } => {
                if !current.is_empty() {
                    strokes.push(current);
                }
                current = vec![[*x as Real, -(*y as Real)]];
            }
            Vector::LineTo { x, y } => current.push([*x as Real, -(*y as Real)]),
        }
    }
    if !current.is_empty() {
        strokes.push(current);
    }
    strokes
}

/// Lays out `message` as scaled stroke polylines, one entry per stroke.
///
/// `height` is the cap height of the rendered glyphs. The result is centered
/// on x = 0; vertical placement follows the font's design coordinates, so
/// callers wanting a particular vertical anchor re-center the rendered solid.
/// An empty message (or one made entirely of unmapped characters) yields no
/// strokes.
pub fn vector_text(message: &str, height: Real) -> Vec<Vec<Point2<Real>>> {
    let scale = height / CAP_HEIGHT;
    let font = &hershey::Font::new(FUTURAL_DATA, ' ');

    let mut polylines: Vec<Vec<Point2<Real>>> = Vec::new();
    let mut cursor: Real = 0.0; // font units

    for c in message.chars() {
        match font.glyph(c) {
            Ok(glyph) => {
                let left = glyph.min_x as Real;
                for stroke in glyph_strokes(&glyph) {
                    polylines.push(
                        stroke
                            .iter()
                            .map(|[x, y]| Point2::new((cursor + x - left) * scale, y * scale))
                            .collect(),
                    );
                }
                cursor += (glyph.max_x as Real) - left + LETTER_GAP;
            },
            Err(_) => cursor += FALLBACK_ADVANCE + LETTER_GAP,
        }
    }

    // drop the trailing gap, then center the whole message on x = 0
    let width = (cursor - LETTER_GAP).max(0.0) * scale;
    for line in &mut polylines {
        for point in line {
            point.x -= width / 2.0;
        }
    }
    polylines
}
