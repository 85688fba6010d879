use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use devpath_engine::{Catalog, Timing};
use serde::Serialize;
use std::fmt::Display;

/// What every handler needs: the catalog, timing and the output format
pub struct HandlerContext {
    pub catalog: Catalog,
    pub timing: Timing,
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(catalog: Catalog, timing: Timing, format: OutputFormat) -> Self {
        Self {
            catalog,
            timing,
            format,
        }
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json);
        renderer.render(view_model)
    }
}
