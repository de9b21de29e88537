#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Stats {
    requests: u64,
    continuations: u64,
    parts: u64,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_request(&mut self, continuation: bool, parts: usize) {
        self.requests += 1;
        if continuation {
            self.continuations += 1;
        }
        self.parts += parts as u64;
    }

    pub fn requests(&self) -> u64 {
        self.requests
    }

    pub fn continuations(&self) -> u64 {
        self.continuations
    }

    pub fn parts(&self) -> u64 {
        self.parts
    }
}
