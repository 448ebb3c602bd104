//! Text notation: cleaning, validation and tokenizing.

use super::Algorithm;
use crate::error::AlgorithmError;
use crate::moves::{Amount, Category, Layer, Move};

impl Algorithm {
    /// Parses an algorithm from text notation.
    ///
    /// Unknown characters are discarded, `Rw` style wide moves fold to `r`,
    /// `X`/`Y`/`Z` fold to `x`/`y`/`z` and `2'`/`'2` collapse to `2`.
    ///
    /// # Errors
    ///
    /// Fails on unbalanced grouping or when nothing is left to tokenize.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubesearch_core::{Algorithm, Move};
    ///
    /// let alg = Algorithm::parse("Rw U2' (R)2").unwrap();
    /// assert_eq!(alg.moves(), &[Move::Rw, Move::U2, Move::Open, Move::R, Move::Close2]);
    /// assert!(Algorithm::parse("R U)").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, AlgorithmError> {
        let cleaned = clean(text);
        if !grouping_balanced(&cleaned) {
            return Err(AlgorithmError::UnbalancedGrouping(text.to_string()));
        }
        let moves = tokenize_cleaned(&cleaned);
        if moves.is_empty() {
            return Err(AlgorithmError::NoMoves(text.to_string()));
        }
        Ok(Algorithm { moves })
    }

    /// Parses `text` and appends it raw. On error nothing is appended.
    pub fn append_str(&mut self, text: &str) -> Result<(), AlgorithmError> {
        let parsed = Algorithm::parse(text)?;
        self.moves.extend(parsed.moves);
        Ok(())
    }

    /// Cleans and tokenizes without any validation.
    pub(crate) fn tokenize(text: &str) -> Vec<Move> {
        tokenize_cleaned(&clean(text))
    }
}

fn is_face_letter(c: char) -> bool {
    matches!(c, 'U' | 'D' | 'F' | 'B' | 'R' | 'L')
}

fn is_allowed(c: char) -> bool {
    matches!(
        c,
        'U' | 'D'
            | 'F'
            | 'B'
            | 'R'
            | 'L'
            | 'u'
            | 'd'
            | 'f'
            | 'b'
            | 'r'
            | 'l'
            | 'E'
            | 'S'
            | 'M'
            | 'x'
            | 'y'
            | 'z'
            | 'w'
            | '\''
            | '('
            | ')'
    ) || c.is_ascii_digit()
}

/// Normalizes raw notation into the canonical character stream.
pub(crate) fn clean(text: &str) -> String {
    let chars: Vec<char> = text
        .chars()
        .map(|c| match c {
            '’' | '`' | '´' => '\'',
            'X' => 'x',
            'Y' => 'y',
            'Z' => 'z',
            other => other,
        })
        .filter(|&c| is_allowed(c))
        .collect();

    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        if is_face_letter(c) && next == Some('w') {
            out.push(c.to_ascii_lowercase());
            i += 2;
            continue;
        }
        if c == 'w' {
            i += 1;
            continue;
        }
        // Half-turn spelled with a redundant prime on either side.
        if (c == '2' && next == Some('\'')) || (c == '\'' && next == Some('2')) {
            out.push('2');
            i += 2;
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}

fn grouping_balanced(cleaned: &str) -> bool {
    let mut depth: i32 = 0;
    for c in cleaned.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn letter_move(c: char, amount: Amount) -> Option<Move> {
    let (layer, category) = match c {
        'U' => (Layer::U, Category::Single),
        'D' => (Layer::D, Category::Single),
        'F' => (Layer::F, Category::Single),
        'B' => (Layer::B, Category::Single),
        'R' => (Layer::R, Category::Single),
        'L' => (Layer::L, Category::Single),
        'u' => (Layer::U, Category::Wide),
        'd' => (Layer::D, Category::Wide),
        'f' => (Layer::F, Category::Wide),
        'b' => (Layer::B, Category::Wide),
        'r' => (Layer::R, Category::Wide),
        'l' => (Layer::L, Category::Wide),
        'E' => (Layer::E, Category::Slice),
        'S' => (Layer::S, Category::Slice),
        'M' => (Layer::M, Category::Slice),
        'x' => (Layer::X, Category::Rotation),
        'y' => (Layer::Y, Category::Rotation),
        'z' => (Layer::Z, Category::Rotation),
        _ => return None,
    };
    Move::from_parts(layer, category, amount)
}

fn tokenize_cleaned(cleaned: &str) -> Vec<Move> {
    let chars: Vec<char> = cleaned.chars().collect();
    let mut moves = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        i += 1;
        match c {
            '(' => moves.push(Move::Open),
            ')' => {
                let repetitions = next
                    .and_then(|n| n.to_digit(10))
                    .filter(|&d| (1..=9).contains(&d));
                match repetitions {
                    Some(d) => {
                        moves.extend(Move::close(d as u8));
                        i += 1;
                    }
                    None => moves.push(Move::Close1),
                }
            }
            _ => {
                let amount = match next {
                    Some('\'') => Some(Amount::Ccw),
                    Some('2') => Some(Amount::Half),
                    _ => None,
                };
                if let Some(m) = letter_move(c, amount.unwrap_or(Amount::Cw)) {
                    moves.push(m);
                    if amount.is_some() {
                        i += 1;
                    }
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_wide_alias() {
        assert_eq!(clean("Rw U Lw'"), "rUl'");
    }

    #[test]
    fn test_clean_rotation_alias() {
        assert_eq!(clean("X Y2 z'"), "xy2z'");
    }

    #[test]
    fn test_clean_half_turn_spellings() {
        assert_eq!(clean("R2' U'2"), "R2U2");
    }

    #[test]
    fn test_clean_drops_noise() {
        assert_eq!(clean("R, U; [F]  // comment"), "RUF");
        assert_eq!(clean("R’"), "R'");
    }

    #[test]
    fn test_grouping_balanced() {
        assert!(grouping_balanced("(U(R)2)3"));
        assert!(!grouping_balanced("U)"));
        assert!(!grouping_balanced(")("));
        assert!(!grouping_balanced("(("));
        assert!(grouping_balanced(""));
    }

    #[test]
    fn test_tokenize_stray_digits_are_skipped() {
        assert_eq!(tokenize_cleaned("R3U"), vec![Move::R, Move::U]);
        assert_eq!(tokenize_cleaned("5R"), vec![Move::R]);
    }

    #[test]
    fn test_tokenize_close_repetitions() {
        assert_eq!(
            tokenize_cleaned("(R)(U)9"),
            vec![Move::Open, Move::R, Move::Close1, Move::Open, Move::U, Move::Close9]
        );
    }
}
