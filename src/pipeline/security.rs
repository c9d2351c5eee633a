// Input screening - rejects oversized or injection-looking command text

/// Substrings that never appear in a spoken command but do in shell or
/// script injection attempts. Compared case-insensitively.
pub const INJECTION_MARKERS: &[&str] = &[
    "<script",
    "javascript:",
    "cmd.exe",
    "powershell",
    "rm -rf",
    "&&",
    "||",
    "`",
    "$(",
];

/// Why input was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("Input is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },
    #[error("Input contains forbidden sequence '{0}'")]
    InjectionMarker(&'static str),
}

/// Front-door check run before any resolver sees the text
#[derive(Debug, Clone)]
pub struct InputScreen {
    max_chars: usize,
}

impl InputScreen {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn check(&self, text: &str) -> Result<(), RejectReason> {
        let len = text.chars().count();
        if len > self.max_chars {
            return Err(RejectReason::TooLong {
                len,
                max: self.max_chars,
            });
        }

        let lowered = text.to_lowercase();
        match INJECTION_MARKERS.iter().find(|m| lowered.contains(*m)) {
            Some(marker) => Err(RejectReason::InjectionMarker(*marker)),
            None => Ok(()),
        }
    }
}

impl Default for InputScreen {
    fn default() -> Self {
        Self::new(500)
    }
}

#[cfg(test)]
#[path = "security_test.rs"]
mod tests;
