use hanzi_core::{Segmenter, is_han};
use hanzi_types::Token;

/// Word segmentation for mixed Chinese text
///
/// Han runs go through the `chinese_segmenter` model. Everything else is kept
/// verbatim: Latin words and numbers as whole runs, punctuation one mark per
/// token. Whitespace never becomes a token.
pub struct ChineseSegmenter;

impl ChineseSegmenter {
    pub fn new() -> Self {
        chinese_segmenter::initialize();
        Self
    }
}

impl Default for ChineseSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Han,
    Word,
    Mark,
    Space,
}

fn classify(c: char) -> RunKind {
    if is_han(c) {
        RunKind::Han
    } else if c.is_whitespace() {
        RunKind::Space
    } else if c.is_alphanumeric() {
        RunKind::Word
    } else {
        RunKind::Mark
    }
}

/// Maximal runs of one kind; marks never join
fn runs(line: &str) -> Vec<(RunKind, &str)> {
    let mut out = Vec::new();
    let mut current: Option<(RunKind, usize)> = None;

    for (i, c) in line.char_indices() {
        let kind = classify(c);
        match current {
            Some((k, _)) if k == kind && kind != RunKind::Mark => {}
            Some((k, start)) => {
                out.push((k, &line[start..i]));
                current = Some((kind, i));
            }
            None => current = Some((kind, i)),
        }
    }

    if let Some((k, start)) = current {
        out.push((k, &line[start..]));
    }
    out
}

/// Split a Han-only run into words. Characters the model leaves out become
/// single-character words so the run is covered exactly.
fn split_han(run: &str, out: &mut Vec<String>) {
    let mut rest = run;

    for piece in chinese_segmenter::tokenize(run) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let Some(at) = rest.find(piece) else {
            continue;
        };

        out.extend(rest[..at].chars().map(String::from));
        out.push(piece.to_string());
        rest = &rest[at + piece.len()..];
    }

    out.extend(rest.chars().map(String::from));
}

impl Segmenter for ChineseSegmenter {
    fn segment(&self, text: &str) -> Vec<Token> {
        let mut surfaces = Vec::new();

        // The model works per sentence; line breaks carry no word content
        for line in text.lines() {
            for (kind, run) in runs(line) {
                match kind {
                    RunKind::Han => split_han(run, &mut surfaces),
                    RunKind::Word | RunKind::Mark => surfaces.push(run.to_string()),
                    RunKind::Space => {}
                }
            }
        }

        surfaces
            .into_iter()
            .enumerate()
            .map(|(position, surface)| Token::new(surface, position))
            .collect()
    }
}
