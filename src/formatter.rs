use log::{info, warn};

use crate::error::{Error, Result};
use crate::prompt::Confirm;
use crate::records::{
    models::{ALL_TYPES, TTL_AUTO},
    RecordEntry,
};
use crate::restricted::RestrictedList;

#[derive(Debug, Default, PartialEq)]
pub struct CheckReport {
    pub checked: usize,
    /// Names of proxyable records that are not proxied.
    pub unproxied: Vec<String>,
}

#[derive(Debug, Default, PartialEq)]
pub struct NormalizeReport {
    /// Records changed by normalization, removed ones included.
    pub formatted: usize,
    pub removed: usize,
}

/// Validates entries without changing them.
///
/// Fails on the first record with an empty type, name or content, then on any record
/// whose name is restricted. Unproxied A/AAAA/CNAME records only produce warnings.
pub fn check(entries: &[RecordEntry], restricted: &RestrictedList) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for (i, entry) in entries.iter().enumerate() {
        let record = &entry.record;
        let index = i + 1;
        info!(
            "id: {} - {}: {} {}",
            index, record.r#type, record.name, record.content
        );

        if record.is_proxy_type() && !record.proxied {
            warn!("Record #{} ({}) is not proxied, please check it", index, record.name);
            report.unproxied.push(record.name.clone());
        }

        let missing = [
            ("type", &record.r#type),
            ("name", &record.name),
            ("content", &record.content),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty());
        if let Some((field, _)) = missing {
            return Err(Error::Validation { index, field });
        }

        report.checked += 1;
    }

    let names: Vec<String> = entries
        .iter()
        .map(|entry| &entry.record)
        .filter(|record| ALL_TYPES.contains(&record.r#type.as_str()))
        .filter(|record| restricted.is_restricted(&record.name))
        .map(|record| record.name.clone())
        .collect();
    if !names.is_empty() {
        return Err(Error::RestrictedSubdomain { names });
    }

    Ok(report)
}

/// Rewrites entries into their canonical form: proxiable everywhere, A/AAAA/CNAME
/// proxied with automatic TTL. Restricted entries are dropped if `confirm` agrees.
pub fn normalize(
    entries: &mut Vec<RecordEntry>,
    restricted: &RestrictedList,
    confirm: &dyn Confirm,
) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    for entry in entries.iter_mut() {
        let record = &mut entry.record;
        let mut changed = false;
        record.proxiable = true;

        if record.is_proxy_type() && !record.proxied {
            info!("Setting proxied to true for {}", record.name);
            record.proxied = true;
            changed = true;
        }
        if record.is_proxy_type() && record.ttl == 0 {
            info!("Setting TTL to auto for {}", record.name);
            record.ttl = TTL_AUTO;
            changed = true;
        }

        if changed {
            report.formatted += 1;
        }
    }

    let restricted_count = entries
        .iter()
        .filter(|entry| restricted.is_restricted(&entry.record.name))
        .count();
    if restricted_count > 0 {
        warn!("{} record(s) use restricted subdomains", restricted_count);
        if confirm.confirm("Do you want to remove restricted subdomains?") {
            entries.retain(|entry| !restricted.is_restricted(&entry.record.name));
            report.removed = restricted_count;
            report.formatted += restricted_count;
        }
    }

    report
}
