use uuid::Uuid;

pub struct RedisKey;

impl RedisKey {
    pub fn user(user_id: Uuid) -> String {
        format!("user:{user_id}")
    }

    pub fn user_pattern() -> &'static str {
        "user:*"
    }

    pub fn extract_user_id_from_user_key(key: &str) -> Option<Uuid> {
        key.strip_prefix("user:")
            .and_then(|id| Uuid::parse_str(id).ok())
    }

    /// Local date of the last daily baseline reset, `%Y-%m-%d`.
    pub fn last_baseline_reset() -> &'static str {
        "stats:last_baseline_reset"
    }
}
