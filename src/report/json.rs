use anyhow::Result;

use crate::models::Finding;

pub fn render(findings: &[Finding]) -> Result<()> {
    println!("{}", to_json(findings)?);
    Ok(())
}

pub fn to_json(findings: &[Finding]) -> Result<String> {
    Ok(serde_json::to_string_pretty(findings)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FindingStatus, PolicyVerdict};

    #[test]
    fn test_field_names_and_enum_casing() {
        let findings = vec![Finding {
            target: "proj".to_string(),
            file: None,
            license: "unknown".to_string(),
            recognized: false,
            status: FindingStatus::NoLicenseFile,
            error: Some("unable to find any license file".to_string()),
            verdict: PolicyVerdict::Warn,
        }];

        let value: serde_json::Value = serde_json::from_str(&to_json(&findings).unwrap()).unwrap();
        let first = &value[0];
        assert_eq!(first["target"], "proj");
        assert_eq!(first["file"], serde_json::Value::Null);
        assert_eq!(first["status"], "no_license_file");
        assert_eq!(first["verdict"], "warn");
        assert_eq!(first["recognized"], false);
    }
}
