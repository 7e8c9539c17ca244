use std::collections::HashSet;

use crate::domain::Product;

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolves `candidate` to a name no product in `existing` already uses.
///
/// Names are compared trimmed and case-insensitively. On collision a counter
/// is appended directly to the trimmed candidate (`Widget` becomes `Widget1`,
/// then `Widget2`, ...) until the result is free within this snapshot.
pub fn uniquify(candidate: &str, existing: &[Product]) -> String {
    let candidate = candidate.trim();
    let taken: HashSet<String> = existing.iter().map(|p| normalize(&p.name)).collect();

    if !taken.contains(&normalize(candidate)) {
        return candidate.to_string();
    }

    let mut suffix: u64 = 1;
    loop {
        let name = format!("{candidate}{suffix}");
        if !taken.contains(&normalize(&name)) {
            return name;
        }
        suffix += 1;
    }
}
