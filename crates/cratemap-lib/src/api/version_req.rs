//! Version-requirement normalization
//!
//! Collapses a registry requirement string (`^1.2`, `~0.3,<0.4`, `=2.0`)
//! into the single version token used as a graph-node identity. This is
//! string surgery, not resolution: the token is whatever the requirement
//! names first, and no attempt is made to validate it against published
//! versions. Divergence from cargo's real resolver is expected and
//! accepted.

/// Characters that may prefix a requirement as operators
const OPERATOR_PREFIX: [char; 3] = ['^', '~', '='];

/// Normalize a raw requirement string into one concrete version token
///
/// Strips the leading operator run, then truncates at the first comma of
/// a compound requirement. Pure and idempotent; garbage in, garbage out.
pub fn normalize_requirement(req: &str) -> String {
    let stripped = req.trim().trim_start_matches(OPERATOR_PREFIX);
    let first = match stripped.split_once(',') {
        Some((head, _)) => head,
        None => stripped,
    };
    first.trim().to_string()
}

#[cfg(test)]
mod tests {
    include!("version_req.test.rs");
}
