//! Plurality vote over classifier outputs.

use smallvec::SmallVec;

/// Combine classifier outputs by plurality
///
/// `votes[0]` is the preferred model. Absent outputs do not vote. The most
/// frequent label wins, earliest first among equal counts. When every present
/// label is distinct and there is more than one of them, the preferred model's
/// output is returned as-is, even if that output is absent.
#[must_use]
pub fn plurality_vote<'a>(votes: &[Option<&'a str>]) -> Option<&'a str> {
    let mut counts: SmallVec<[(&'a str, usize); 3]> = SmallVec::new();
    for &label in votes.iter().flatten() {
        match counts.iter().position(|(seen, _)| *seen == label) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut best: Option<(&'a str, usize)> = None;
    for &(label, count) in &counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((label, count));
        }
    }

    match best {
        None => None,
        Some((_, 1)) if counts.len() > 1 => votes.first().copied().flatten(),
        Some((label, _)) => Some(label),
    }
}
