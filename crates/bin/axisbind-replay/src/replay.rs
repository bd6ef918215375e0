//! Replay loop — feeds configured samples into a [`VirtualInput`] on a fixed
//! tick and reports what each binding observed.

use std::future::Future;
use std::sync::Arc;

use axisbind_adapter_virtual::VirtualInput;
use axisbind_app::AxisBinding;
use axisbind_domain::axis::AxisName;
use tokio::sync::mpsc;

use crate::config::{Config, ConfigError};

/// What one binding saw during a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingReport {
    pub name: AxisName,
    /// Number of change notifications received.
    pub notifications: usize,
    /// Processed value when the replay ended.
    pub value: f32,
    /// Raw value when the replay ended.
    pub raw: f32,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    /// Samples accepted by the input service.
    pub applied: usize,
    /// Samples rejected (non-finite values).
    pub rejected: usize,
    /// Whether the replay stopped before the last sample.
    pub interrupted: bool,
    pub bindings: Vec<BindingReport>,
}

/// Replay `config.samples` until done or until `shutdown` resolves.
///
/// One sample is applied per tick. Every binding logs each notification it
/// receives together with its current value. All bindings are released
/// before the report is returned.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] if `config` fails
/// [`Config::validate`]; nothing is replayed in that case.
pub async fn run(
    config: &Config,
    shutdown: impl Future<Output = ()>,
) -> Result<ReplayReport, ConfigError> {
    config.validate()?;

    let input = Arc::new(VirtualInput::new());
    let (notify_tx, mut notify_rx) = mpsc::unbounded_channel::<usize>();

    let mut bindings: Vec<AxisBinding<Arc<VirtualInput>>> = config
        .bindings
        .0
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let binding = AxisBinding::with_name(Arc::clone(&input), entry.name.clone());
            let tx = notify_tx.clone();
            binding.on_value_changed(move || {
                // The receiver lives until the end of `run`.
                let _ = tx.send(index);
            });
            binding
        })
        .collect();
    let mut notifications = vec![0_usize; bindings.len()];
    let mut report = ReplayReport::default();

    tracing::info!(
        bindings = bindings.len(),
        samples = config.samples.0.len(),
        tick_ms = config.replay.tick_ms,
        "starting replay"
    );

    let mut ticker = tokio::time::interval(config.replay.tick());
    tokio::pin!(shutdown);

    for sample in &config.samples.0 {
        tokio::select! {
            biased;
            () = &mut shutdown => {
                tracing::info!("shutdown requested, stopping replay");
                report.interrupted = true;
                break;
            }
            _ = ticker.tick() => {}
        }

        match input.set_axis(sample.axis.clone(), sample.value, sample.raw()) {
            Ok(_) => report.applied += 1,
            Err(err) => {
                tracing::warn!(error = %err, "sample rejected");
                report.rejected += 1;
            }
        }

        while let Ok(index) = notify_rx.try_recv() {
            notifications[index] += 1;
            let binding = &bindings[index];
            tracing::info!(
                axis = %binding.name(),
                value = binding.value(),
                raw = binding.value_raw(),
                "axis changed"
            );
        }
    }

    for binding in &mut bindings {
        binding.release();
    }

    report.bindings = bindings
        .iter()
        .zip(notifications)
        .map(|(binding, notifications)| BindingReport {
            name: binding.name(),
            notifications,
            value: binding.value(),
            raw: binding.value_raw(),
        })
        .collect();

    for entry in &report.bindings {
        tracing::info!(
            axis = %entry.name,
            notifications = entry.notifications,
            value = entry.value,
            raw = entry.raw,
            "binding summary"
        );
    }
    Ok(report)
}
