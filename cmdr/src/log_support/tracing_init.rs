// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

impl TracingConfig {
    /// Install the layers as the global default subscriber, which can't be changed once
    /// set.
    ///
    /// # Errors
    ///
    /// If the log file can't be created, or a global subscriber is already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| miette::miette!("Could not install global logging: {error}"))
    }
}

/// Returns the layers. This does not initialize the tracing system. See
/// [`TracingConfig::install_global`].
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration.
    return_it.push(Box::new(level_filter));

    if let Some(layer) =
        try_create_display_layer(level_filter, tracing_config.get_writer_config())
    {
        return_it.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(level_filter, tracing_config.get_writer_config())?
    {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::Stderr | WriterConfig::StderrAndFile(_) => Some(Box::new(
            create_fmt!()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )),
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::StderrAndFile(log_file_path) | WriterConfig::File(log_file_path) => {
            let file = rolling_file_appender_impl::try_create(log_file_path.as_str())?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Stderr => None,
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn temp_log_file(dir: &tempfile::TempDir) -> String {
        dir.path().join("my_temp_log_file.log").display().to_string()
    }

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, WriterConfig::Stderr);
        assert!(layer.is_some());

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, WriterConfig::None);
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_file_layer() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let writer_config = WriterConfig::File(file_path.clone());
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, writer_config).unwrap();

        assert!(layer.is_some());
        assert!(Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_both_layers() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let tracing_config =
            TracingConfig::from(WriterConfig::StderrAndFile(file_path.clone()));

        let layers = try_create_layers(tracing_config).unwrap();
        assert_eq!(layers.len(), 3);
        assert!(Path::new(&file_path).exists());
    }

    #[test]
    fn test_file_layer_respects_level() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let layers =
            try_create_layers(TracingConfig::from(WriterConfig::File(file_path.clone())))
                .unwrap();
        let subscriber = tracing_subscriber::registry().with(layers);
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(message = "colorconv debug line");
            tracing::trace!(message = "colorconv trace line");
        });

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("colorconv debug line"), "{content}");
        assert!(!content.contains("colorconv trace line"), "{content}");
    }
}
