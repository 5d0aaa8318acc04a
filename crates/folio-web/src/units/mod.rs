//! Effect units
//!
//! Every unit is installed independently. A unit whose elements are absent
//! or whose browser capability is missing reports a skip and the rest of the
//! page carries on.

pub mod counter;
pub mod form;
pub mod hover;
pub mod nav;
pub mod notify;
pub mod parallax;
pub mod reading;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod trail;
pub mod typing;

use std::rc::Rc;

use folio_fx::FxError;

use crate::context::UiContext;
use crate::util::{log, warn};

type InstallFn = fn(&Rc<UiContext>) -> Result<(), FxError>;

/// Install order; theme first so the page never flashes the wrong palette
const UNITS: &[(&str, InstallFn)] = &[
    ("theme", theme::install),
    ("menu", nav::install_menu),
    ("active-section", nav::install_active_section),
    ("navbar", nav::install_elevation),
    ("anchors", scroll::install_anchors),
    ("scroll-top", scroll::install_top_button),
    ("reveal", reveal::install_fade),
    ("skill-tags", reveal::install_tags),
    ("skill-fills", reveal::install_fills),
    ("counters", counter::install),
    ("contact-form", form::install),
    ("parallax", parallax::install),
    ("cursor-trail", trail::install),
    ("magnetic", hover::install_magnetic),
    ("spotlight", hover::install_spotlight),
    ("typing", typing::install),
    ("reading-time", reading::install),
    ("carousel", install_carousel),
    ("print", scroll::install_print),
];

/// Outcome of installing every unit
#[derive(Debug, Default)]
pub struct InstallReport {
    pub installed: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

/// Install all units, isolating failures
pub fn install_all(ctx: &Rc<UiContext>) -> InstallReport {
    let mut report = InstallReport::default();
    for (name, install) in UNITS {
        match install(ctx) {
            Ok(()) => report.installed.push(*name),
            Err(e) if e.is_skip() => {
                ctx.debug(&format!("[{}] Skipped: {}", name, e));
                report.skipped.push(*name);
            }
            Err(e) => {
                warn(&format!("[{}] Failed to install: {}", name, e));
                report.failed.push(*name);
            }
        }
    }
    log(&format!(
        "[folio] Installed {} units ({} skipped, {} failed, {} listeners)",
        report.installed.len(),
        report.skipped.len(),
        report.failed.len(),
        ctx.listener_count()
    ));
    report
}

fn install_carousel(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    ctx.carousel.mount(&ctx.config.carousel)?;
    ctx.debug(&format!("[carousel] Mounted with {}", ctx.carousel.name()));
    Ok(())
}
