use rand::Rng;

use crate::error::RotationError;

/// Draw the next moderator uniformly at random from `candidates`, excluding
/// `previous` whenever more than one candidate is available.
///
/// A single candidate is returned directly even when it matches `previous`;
/// there is nobody else to hand the meeting to.
pub fn pick_next<R: Rng>(
    rng: &mut R,
    previous: Option<&str>,
    candidates: &[String],
) -> Result<String, RotationError> {
    if candidates.is_empty() {
        return Err(RotationError::InvalidInput(
            "select at least one team member".to_string(),
        ));
    }
    if candidates.len() == 1 {
        return Ok(candidates[0].clone());
    }

    let pool: Vec<&String> = candidates
        .iter()
        .filter(|name| previous.map_or(true, |prev| name.as_str() != prev))
        .collect();
    // every candidate equals `previous`: the exclusion has nothing left to do
    if pool.is_empty() {
        return Ok(candidates[0].clone());
    }

    let idx = rng.gen_range(0..pool.len());
    Ok(pool[idx].clone())
}
