use log::{debug, error, info};

use crate::api::DnsApiClient;
use crate::config::Settings;
use crate::error::Result;
use crate::records::{self, models::TTL_AUTO, Record};
use crate::restricted::RestrictedList;

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    pub dry_run: bool,
    /// Force `proxied = true` on every local record.
    pub force_proxied: bool,
}

/// What a sync would change on the remote side.
#[derive(Debug, Default, PartialEq)]
pub struct SyncPlan {
    pub create: Vec<Record>,
    /// Local records carrying the id of the remote record they replace.
    pub update: Vec<Record>,
    pub delete: Vec<Record>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update.is_empty() && self.delete.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct SyncReport {
    pub created: Vec<Record>,
    pub updated: Vec<Record>,
    pub deleted: Vec<Record>,
    /// Local records dropped because their name is restricted.
    pub restricted: usize,
    pub dry_run: bool,
}

/// Full name of a record under `domain`; `@` is the zone apex.
pub fn qualify_name(name: &str, domain: &str) -> String {
    if name == "@" {
        domain.to_string()
    } else {
        format!("{}.{}", name, domain)
    }
}

/// Brings local records into the shape the API returns: full names, automatic TTL,
/// and optionally proxied.
pub fn prepare_local(records: Vec<Record>, domain: &str, force_proxied: bool) -> Vec<Record> {
    records
        .into_iter()
        .map(|mut record| {
            if force_proxied {
                record.proxied = true;
            }
            record.ttl = TTL_AUTO;
            record.name = qualify_name(&record.name, domain);
            record
        })
        .collect()
}

/// Matches local against remote records by name. The first remote record with the same
/// name wins. TTL differences never trigger an update.
pub fn reconcile(local: &[Record], remote: &[Record]) -> SyncPlan {
    let mut plan = SyncPlan::default();

    for record in local {
        match remote.iter().find(|r| r.name == record.name) {
            Some(existing) => {
                if existing.content != record.content
                    || existing.proxied != record.proxied
                    || existing.name != record.name
                {
                    plan.update.push(Record {
                        id: existing.id.clone(),
                        ..record.clone()
                    });
                }
            }
            None => plan.create.push(record.clone()),
        }
    }

    plan.delete = remote
        .iter()
        .filter(|r| !local.iter().any(|l| l.name == r.name))
        .cloned()
        .collect();

    plan
}

/// Applies a plan in order: creates, updates, deletes. A dry run reports the plan
/// without calling the API; created and deleted records then carry no id.
pub async fn apply<C>(client: &C, plan: SyncPlan, dry_run: bool) -> Result<SyncReport>
where
    C: DnsApiClient + ?Sized,
{
    let mut report = SyncReport {
        dry_run,
        ..Default::default()
    };

    if !plan.create.is_empty() {
        info!("Creating DNS record(s):");
    }
    for record in plan.create {
        let created = if dry_run {
            record
        } else {
            client.create_record(&record).await?
        };
        info!(
            "{} {}: {} {}",
            created.id, created.r#type, created.name, created.content
        );
        report.created.push(created);
    }

    if !plan.update.is_empty() {
        info!("Updating DNS record(s):");
    }
    for record in plan.update {
        let updated = if dry_run {
            record
        } else {
            client.update_record(&record).await?
        };
        info!(
            "{} {}: {} {}",
            updated.id, updated.r#type, updated.name, updated.content
        );
        report.updated.push(updated);
    }

    if !plan.delete.is_empty() {
        info!("Deleting DNS record(s):");
    }
    for record in plan.delete {
        // The reported id is the one Cloudflare confirms, so it stays empty on a dry run.
        let deleted_id = if dry_run {
            String::new()
        } else {
            let deleted_id = client.delete_record(&record.id).await?;
            if deleted_id.is_empty() {
                error!("Failed to delete {}: {}", record.r#type, record.name);
            }
            deleted_id
        };
        info!("{} {}: {} {}", deleted_id, record.r#type, record.name, record.content);
        report.deleted.push(Record {
            id: deleted_id,
            ..record
        });
    }

    Ok(report)
}

/// Reconciles the records file with the zone.
pub async fn run<C>(client: &C, settings: &Settings, options: SyncOptions) -> Result<SyncReport>
where
    C: DnsApiClient + ?Sized,
{
    let domain = settings.require_domain()?;
    let restricted = RestrictedList::load(&settings.restricted_file)?;
    debug!("Loaded {} restricted patterns", restricted.len());

    info!("Gathering DNS records from {}...", settings.record_file.display());
    let local = records::load_records(&settings.record_file, &settings.record_types)?;
    let local = prepare_local(local, domain, options.force_proxied);
    info!("Got {} local DNS records", local.len());

    let (local, removed) = restricted.partition(local);
    info!(
        "Removed {} restricted subdomains, {} local DNS records left",
        removed.len(),
        local.len()
    );

    info!("Gathering DNS records from Cloudflare...");
    let remote = client.list_records(&settings.record_types).await?;
    info!("Got {} registered DNS records on Cloudflare", remote.len());

    let plan = reconcile(&local, &remote);
    info!(
        "Found {} DNS records to create, {} to update, {} to delete",
        plan.create.len(),
        plan.update.len(),
        plan.delete.len()
    );
    if plan.is_empty() {
        info!("Zone is already in sync");
    }

    let mut report = apply(client, plan, options.dry_run).await?;
    report.restricted = removed.len();
    Ok(report)
}
