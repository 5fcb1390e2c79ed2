// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{TracingConfig, WriterConfig, rolling_file_appender_impl};
use crate::{CmdrError, CmdrResult};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers for `tracing_config`. This does not initialize the tracing
/// system, see [`try_initialize_logging_global`] for that.
///
/// # Errors
///
/// Returns [`CmdrError::InitLogging`] if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> CmdrResult<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    if let Some(layer) = try_create_file_layer(level_filter, &tracing_config.writer_config)? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns [`CmdrError::InitLogging`] if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> CmdrResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(file_path)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None => None,
    })
}

/// Create the layers and install them as the global default subscriber. Does nothing
/// for [`WriterConfig::None`].
///
/// # Errors
///
/// Returns [`CmdrError::InitLogging`] if the log file can't be created, or a global
/// subscriber is already installed.
pub fn try_initialize_logging_global(tracing_config: &TracingConfig) -> CmdrResult<()> {
    if tracing_config.writer_config == WriterConfig::None {
        return Ok(());
    }

    let layers = try_create_layers(tracing_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|error| CmdrError::InitLogging {
            path: match &tracing_config.writer_config {
                WriterConfig::File(it) => it.clone(),
                WriterConfig::None => PathBuf::new(),
            },
            source: Box::new(error),
        })
}
