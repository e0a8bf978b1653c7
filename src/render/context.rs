//! Per-request render state.

/// Wrapper-id uniqueness set, owned by the caller and scoped to one
/// render pass or logical request. Replaces the original design's
/// process-global slug list.
#[derive(Debug, Default)]
pub struct RenderContext {
    used_wrap_ids: Vec<String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a wrapper id. Collisions with previously claimed ids get
    /// a numeric suffix appended or incremented until unique.
    pub fn claim_wrap_id(&mut self, candidate: &str) -> String {
        let mut wrap_id = candidate.to_string();
        while self.used_wrap_ids.iter().any(|used| *used == wrap_id) {
            wrap_id = bump_suffix(&wrap_id);
        }
        self.used_wrap_ids.push(wrap_id.clone());
        wrap_id
    }
}

fn bump_suffix(wrap_id: &str) -> String {
    match wrap_id.rsplit_once('-') {
        Some((stem, digits))
            if !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()) =>
        {
            match digits.parse::<u64>() {
                Ok(n) => format!("{stem}-{}", n + 1),
                Err(_) => format!("{stem}-1"),
            }
        }
        _ => format!("{wrap_id}-1"),
    }
}
