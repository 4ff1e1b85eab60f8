//! Noticing that a newer release has been published.
//!
//! Fetching the package metadata is up to the caller; this only reads it.

use std::fmt::{self, Display};

use log::debug;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateNotice {
    pub installed: String,
    pub available: String,
}

impl Display for UpdateNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Version {} is available (installed: {})",
            self.available, self.installed
        )
    }
}

#[derive(Deserialize)]
struct PackageMetadata {
    info: PackageInfo,
}

#[derive(Deserialize)]
struct PackageInfo {
    version: String,
}

/// Compare the installed version with package index metadata.
///
/// Any version other than the installed one counts as an update. Metadata
/// that can't be read never produces a notice.
pub fn newer_release(installed: &str, metadata_json: &str) -> Option<UpdateNotice> {
    let metadata: PackageMetadata = match serde_json::from_str(metadata_json) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!("Ignoring unreadable release metadata: {e}");
            return None;
        }
    };
    let available = metadata.info.version.trim();
    if available.is_empty() || available == installed {
        return None;
    }
    Some(UpdateNotice {
        installed: installed.to_string(),
        available: available.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn newer_version_is_noticed() {
        let notice = newer_release("1.0.0", r#"{"info": {"version": "1.1.0", "name": "x"}}"#);
        assert_eq!(
            notice,
            Some(UpdateNotice {
                installed: "1.0.0".to_string(),
                available: "1.1.0".to_string(),
            })
        );
        assert_eq!(
            notice.unwrap().to_string(),
            "Version 1.1.0 is available (installed: 1.0.0)"
        );
    }

    #[rstest]
    #[case::same_version(r#"{"info": {"version": "1.0.0"}}"#)]
    #[case::not_json("<html>503</html>")]
    #[case::no_info(r#"{"releases": {}}"#)]
    #[case::version_not_a_string(r#"{"info": {"version": 2}}"#)]
    #[case::empty_version(r#"{"info": {"version": ""}}"#)]
    #[case::empty("")]
    fn no_notice(#[case] metadata: &str) {
        assert_eq!(newer_release("1.0.0", metadata), None);
    }
}
