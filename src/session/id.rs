use uuid::Uuid;

/// Source of the stable user id sent with every exchange.
pub trait UserIdProvider: Send + Sync {
    fn generate(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProvider;

impl UserIdProvider for UuidProvider {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Always hands out the same id. Used for `--user-id` and in tests.
#[derive(Debug, Clone)]
pub struct FixedIdProvider(String);

impl FixedIdProvider {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl UserIdProvider for FixedIdProvider {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
