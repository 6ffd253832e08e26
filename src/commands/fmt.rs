use anyhow::{Context, Result};
use log::{info, warn};

use crate::cli::FmtArgs;
use crate::config::Settings;
use crate::error::Error;
use crate::formatter;
use crate::prompt::{Confirm, FixedAnswer, TerminalConfirm};
use crate::records::{self, RecordEntry};
use crate::restricted::RestrictedList;

pub fn handle_fmt(args: &FmtArgs, settings: &Settings) -> Result<()> {
    let restricted = RestrictedList::load(&settings.restricted_file)?;
    let mut entries = records::load_entries(&settings.record_file)
        .context("Failed to parse local DNS records")?;

    if args.check {
        return check(&entries, &restricted);
    }

    let confirm: Box<dyn Confirm> = if args.yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(TerminalConfirm)
    };
    let report = formatter::normalize(&mut entries, &restricted, confirm.as_ref());
    records::save_entries(&settings.record_file, &entries)
        .context("Failed to write records")?;

    if report.removed > 0 {
        info!("{} record(s) removed", report.removed);
    }
    println!("{} record(s) formatted", report.formatted);
    info!("Formatting records complete");
    Ok(())
}

fn check(entries: &[RecordEntry], restricted: &RestrictedList) -> Result<()> {
    match formatter::check(entries, restricted) {
        Ok(report) => {
            println!();
            println!("{} record(s) found and are valid", report.checked);
            if !report.unproxied.is_empty() {
                warn!(
                    "{} record(s) with warnings, please check: {}",
                    report.unproxied.len(),
                    report.unproxied.join(", ")
                );
            }
            println!("PASS\tok");
            Ok(())
        }
        Err(e) => {
            println!("FAIL\t{}", e);
            if let Error::RestrictedSubdomain { names } = &e {
                for name in names {
                    println!("FAIL\trestricted subdomain: {}", name);
                }
            }
            println!("TEST\tfailed");
            println!("run `zonesync fmt` to fix the errors");
            Err(e.into())
        }
    }
}
