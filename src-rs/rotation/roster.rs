use crate::error::RotationError;

use super::types::RosterOp;

/// Apply a roster edit and return the updated, alphabetically sorted list.
/// Added names are title-cased; removals match the stored name exactly.
pub fn edit_roster(
    roster: &[String],
    op: RosterOp,
    name: &str,
) -> Result<Vec<String>, RotationError> {
    match op {
        RosterOp::Add => {
            let name = title_case(name.trim());
            if name.is_empty() {
                return Err(RotationError::InvalidInput(
                    "moderator name is empty".to_string(),
                ));
            }
            if roster.iter().any(|existing| existing == &name) {
                return Err(RotationError::InvalidInput(format!(
                    "{} is already on the roster",
                    name
                )));
            }
            let mut updated = roster.to_vec();
            updated.push(name);
            updated.sort();
            Ok(updated)
        }
        RosterOp::Remove => {
            let pos = roster
                .iter()
                .position(|existing| existing.as_str() == name)
                .ok_or_else(|| {
                    RotationError::NotFound(format!("{} is not on the roster", name))
                })?;
            let mut updated = roster.to_vec();
            updated.remove(pos);
            Ok(updated)
        }
    }
}

fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
