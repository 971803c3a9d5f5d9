use folio_config::FolioConfig;

const ENV_PREFIX: &str = "FOLIO_";
const SECTIONS: [&str; 3] = ["CONTENT", "CONTACT", "GENERAL"];
/// `FOLIO_*` variables read directly rather than through figment.
const NON_CONFIG_VARS: [&str; 1] = ["FOLIO_LOG"];

/// Warn about `FOLIO_*` env vars that figment silently ignores, and about
/// contact delivery left unconfigured.
pub fn warn_unconfigured(config: &FolioConfig) {
    for warning in collect_env_warnings(std::env::vars().map(|(key, _)| key)) {
        tracing::warn!("{warning}");
    }
    if !config.contact.is_configured() {
        tracing::debug!("contact.to_email is empty; contact submissions will be refused");
    }
}

fn collect_env_warnings<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut keys = keys
        .into_iter()
        .filter(|key| key.starts_with(ENV_PREFIX) && !NON_CONFIG_VARS.contains(&key.as_str()))
        .collect::<Vec<_>>();
    keys.sort();
    keys.iter().filter_map(|key| env_warning(key)).collect()
}

fn env_warning(key: &str) -> Option<String> {
    let name = &key[ENV_PREFIX.len()..];

    if let Some((section, field)) = name.split_once("__") {
        if SECTIONS.contains(&section) {
            return field
                .is_empty()
                .then(|| format!("{key} is ignored: no field after the section."));
        }
        return Some(format!(
            "{key} is ignored: unknown config section '{}' (expected content, contact, or general).",
            section.to_ascii_lowercase()
        ));
    }

    let section = SECTIONS.iter().find(|section| {
        name.strip_prefix(**section)
            .is_some_and(|rest| rest.starts_with('_') && rest.len() > 1)
    });
    Some(match section {
        Some(section) => format!(
            "{key} is ignored. Use double underscores (example: {ENV_PREFIX}{section}__{}).",
            &name[section.len() + 1..]
        ),
        None => format!("{key} is not a folio setting and is ignored."),
    })
}
