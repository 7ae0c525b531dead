use gs_config::GenScriptConfig;

pub fn warn_unconfigured(config: &GenScriptConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &GenScriptConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured() {
        if has_env_prefix(&env_keys, "GENSCRIPT_GEMINI") {
            warnings.push(
                "Gemini config appears default while GENSCRIPT_GEMINI* env vars exist. Use double underscores (example: GENSCRIPT_GEMINI__API_KEY)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "Gemini API key is not set (GEMINI_API_KEY or GENSCRIPT_GEMINI__API_KEY); idea generation will fail."
                    .to_string(),
            );
        }
    }

    if config.database.is_remote() && config.database.auth_token.is_empty() {
        warnings.push(format!(
            "Remote database {} has no auth token (DATABASE_AUTH_TOKEN or GENSCRIPT_DATABASE__AUTH_TOKEN).",
            config.database.url
        ));
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
