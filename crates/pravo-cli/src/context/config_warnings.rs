use pravo_config::PravoConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PravoConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PravoConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.upload.is_configured() && has_env_prefix(&env_keys, "PRAVO_UPLOAD") {
        warnings.push(
            "Upload config appears default while PRAVO_UPLOAD* env vars exist. Use double underscores (example: PRAVO_UPLOAD__CLOUD_NAME)."
                .to_string(),
        );
    }

    if config.device.fix().is_none() && has_env_prefix(&env_keys, "PRAVO_DEVICE") {
        warnings.push(
            "Device location appears unset while PRAVO_DEVICE* env vars exist. Set both PRAVO_DEVICE__LATITUDE and PRAVO_DEVICE__LONGITUDE."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
