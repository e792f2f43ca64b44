/// Cap on the number of search nodes a single call may visit.
///
/// Subset enumeration is exponential in the pool size, so hosts can bound it.
/// Running out is not an error: the search stops and keeps what it found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepBudget {
    limit: Option<u64>,
    used: u64,
}

impl StepBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn limited(max_steps: u64) -> Self {
        StepBudget {
            limit: Some(max_steps),
            used: 0,
        }
    }

    /// Spends one step. Returns false once the limit has been reached.
    pub fn tick(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.used += 1;
        true
    }

    pub fn is_exhausted(&self) -> bool {
        self.limit.is_some_and(|limit| self.used >= limit)
    }

    pub fn used(&self) -> u64 {
        self.used
    }
}
