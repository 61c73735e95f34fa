use rand::Rng;

/// Produces fresh widget identity tokens.
///
/// A host widget that caches by identity only discards its internal edit
/// state when the identity changes, so "reset to identical-looking
/// contents" needs a token that differs from the last one. What the token
/// looks like is irrelevant as long as consecutive tokens differ.
pub trait TokenSource {
    fn next_token(&mut self) -> String;
}

/// Default source: six random decimal digits.
#[derive(Debug, Default)]
pub struct RandomTokenSource;

impl RandomTokenSource {
    pub fn new() -> Self {
        Self
    }
}

impl TokenSource for RandomTokenSource {
    fn next_token(&mut self) -> String {
        format!("{:06}", rand::thread_rng().gen_range(0..1_000_000))
    }
}

/// Deterministic counter source for tests.
#[derive(Debug, Default)]
pub struct SequentialTokenSource {
    next: u64,
}

impl SequentialTokenSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenSource for SequentialTokenSource {
    fn next_token(&mut self) -> String {
        let token = format!("{:06}", self.next);
        self.next += 1;
        token
    }
}
