use crate::error::{DiffError, Result};
use crate::matcher::SequenceMatcher;

/// Returns up to `n` of `possibilities` that look most like `word`, best
/// first.
///
/// A candidate is kept when its [`ratio`](SequenceMatcher::ratio) against
/// `word` reaches `cutoff`; the cheaper upper bounds are checked first so
/// hopeless candidates never pay for a full match. Equal scores are ordered
/// by the candidate itself, greatest first.
///
/// # Examples
///
/// ```
/// use seqdiff::close::close_matches;
///
/// let found = close_matches("appel", ["ape", "apple", "peach", "puppy"], 3, 0.6).unwrap();
/// assert_eq!(found, vec!["apple", "ape"]);
/// ```
pub fn close_matches<'p, I>(word: &str, possibilities: I, n: usize, cutoff: f64) -> Result<Vec<&'p str>>
where
    I: IntoIterator<Item = &'p str>,
{
    if n == 0 {
        return Err(DiffError::InvalidArgument(format!("n must be > 0, got {n}")));
    }
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(DiffError::InvalidArgument(format!(
            "cutoff must be in [0.0, 1.0], got {cutoff}"
        )));
    }

    let word: Vec<char> = word.chars().collect();
    let mut scored: Vec<(f64, &'p str)> = vec![];
    for candidate in possibilities {
        let chars: Vec<char> = candidate.chars().collect();
        let matcher = SequenceMatcher::new(&chars, &word);
        if matcher.real_quick_ratio() < cutoff || matcher.quick_ratio() < cutoff {
            continue;
        }
        let score = matcher.ratio();
        if score >= cutoff {
            scored.push((score, candidate));
        }
    }

    scored.sort_by(|x, y| y.0.total_cmp(&x.0).then_with(|| y.1.cmp(x.1)));
    scored.truncate(n);
    Ok(scored.into_iter().map(|(_, candidate)| candidate).collect())
}
