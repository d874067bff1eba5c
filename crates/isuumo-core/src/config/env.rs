#[must_use]
pub(super) fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(super) fn read_env_u16(name: &str) -> Option<u16> {
    read_non_empty_env(name).and_then(|raw| raw.parse::<u16>().ok())
}

#[must_use]
pub(super) fn read_env_u64(name: &str) -> Option<u64> {
    read_non_empty_env(name).and_then(|raw| raw.parse::<u64>().ok())
}
