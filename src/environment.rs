use std::collections::BTreeMap;
use std::ffi::OsString;

/// Process environment as a name -> value mapping
pub type EnvironmentSnapshot = BTreeMap<String, String>;

/// Read the current process environment
///
/// Read fresh on every call. The platform splits each raw `NAME=VALUE`
/// entry on its first `=` and drops entries that have none. Non-UTF-8
/// names or values are converted lossily instead of aborting the whole
/// snapshot.
pub fn snapshot() -> EnvironmentSnapshot {
    from_pairs(std::env::vars_os())
}

fn from_pairs<I>(pairs: I) -> EnvironmentSnapshot
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| {
            (
                name.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        })
        .collect()
}
