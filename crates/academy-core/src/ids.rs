//! Identity prefixes for every entity family.
//!
//! Minted identities look like `"ses-3fa8b2c1"`: a three-letter prefix naming the
//! family, a dash, then the generator-specific suffix. The prefix keeps ids
//! self-describing in logs and JSONL files.

pub const PREFIX_TEAM: &str = "tem";
pub const PREFIX_POSITION: &str = "pos";
pub const PREFIX_PLAYER: &str = "ply";
pub const PREFIX_TASK_TYPE: &str = "tty";
pub const PREFIX_MATERIAL: &str = "mat";
pub const PREFIX_LIBRARY_TASK: &str = "ltk";
pub const PREFIX_TASK_MATERIAL: &str = "tmt";
pub const PREFIX_ATTRIBUTE: &str = "att";
pub const PREFIX_EVALUATION: &str = "evl";
pub const PREFIX_EVALUATION_DETAIL: &str = "evd";
pub const PREFIX_SESSION: &str = "ses";
pub const PREFIX_SESSION_TASK: &str = "stk";
pub const PREFIX_ATTENDANCE: &str = "atd";
pub const PREFIX_PLAYER_LOAD: &str = "pld";
pub const PREFIX_COMPETITION: &str = "cmp";
pub const PREFIX_MATCH: &str = "mch";
pub const PREFIX_PLAYER_MATCH_STATS: &str = "pms";
pub const PREFIX_MATCH_EVENT: &str = "mev";
pub const PREFIX_LINEUP_TEMPLATE: &str = "ltp";
pub const PREFIX_LINEUP: &str = "lnp";
pub const PREFIX_DUE: &str = "due";
pub const PREFIX_USER: &str = "usr";
pub const PREFIX_ROLE: &str = "rol";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_TEAM,
    PREFIX_POSITION,
    PREFIX_PLAYER,
    PREFIX_TASK_TYPE,
    PREFIX_MATERIAL,
    PREFIX_LIBRARY_TASK,
    PREFIX_TASK_MATERIAL,
    PREFIX_ATTRIBUTE,
    PREFIX_EVALUATION,
    PREFIX_EVALUATION_DETAIL,
    PREFIX_SESSION,
    PREFIX_SESSION_TASK,
    PREFIX_ATTENDANCE,
    PREFIX_PLAYER_LOAD,
    PREFIX_COMPETITION,
    PREFIX_MATCH,
    PREFIX_PLAYER_MATCH_STATS,
    PREFIX_MATCH_EVENT,
    PREFIX_LINEUP_TEMPLATE,
    PREFIX_LINEUP,
    PREFIX_DUE,
    PREFIX_USER,
    PREFIX_ROLE,
];

/// Composite identity for join records that have no surrogate id.
#[must_use]
pub fn composite_id(left: &str, right: &str) -> String {
    format!("{left}:{right}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prefixes_are_unique_and_three_chars() {
        let mut seen = HashSet::new();
        for prefix in ALL_PREFIXES {
            assert_eq!(prefix.len(), 3, "prefix '{prefix}' should be 3 chars");
            assert!(seen.insert(*prefix), "duplicate prefix '{prefix}'");
        }
        assert_eq!(seen.len(), 23);
    }

    #[test]
    fn composite_id_joins_with_colon() {
        assert_eq!(composite_id("ltk-1", "mat-2"), "ltk-1:mat-2");
    }
}
