// Presentation surface abstraction and chart instance ownership
use crate::domain::chart::ChartConfig;
use maud::Markup;
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SurfaceError {
    #[error("page has no element with id '{0}'")]
    MissingElement(String),
    #[error("canvas '{0}' already has a live chart")]
    CanvasInUse(String),
    #[error("chart {id} on canvas '{canvas}' is not live")]
    StaleChart { id: u64, canvas: String },
}

/// A rendered child of a container element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub class: String,
    pub html: String,
}

impl Node {
    pub fn new(class: &str, markup: Markup) -> Self {
        Self {
            class: class.to_string(),
            html: markup.into_string(),
        }
    }
}

/// Owning token for a live chart instance bound to a canvas.
///
/// Deliberately neither `Clone` nor `Copy`: the holder is the only party that
/// can destroy the instance.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    id: u64,
    canvas: String,
}

impl ChartHandle {
    pub fn new(id: u64, canvas: &str) -> Self {
        Self {
            id,
            canvas: canvas.to_string(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn canvas(&self) -> &str {
        &self.canvas
    }
}

pub trait Surface {
    /// Replace an element's text content
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), SurfaceError>;

    /// Remove every child and all text from an element
    fn clear(&mut self, id: &str) -> Result<(), SurfaceError>;

    /// Append a rendered child to a container element
    fn append(&mut self, id: &str, node: Node) -> Result<(), SurfaceError>;

    /// Bind a new chart instance to a canvas that has none
    fn attach_chart(&mut self, canvas: &str, config: ChartConfig) -> Result<ChartHandle, SurfaceError>;

    /// Tear down a live chart instance, freeing its canvas
    fn destroy_chart(&mut self, handle: ChartHandle) -> Result<(), SurfaceError>;
}

/// Holds at most one chart instance and replaces it destroy-first
#[derive(Debug, Default)]
pub struct ChartSlot {
    handle: Option<ChartHandle>,
}

impl ChartSlot {
    pub fn replace(
        &mut self,
        surface: &mut dyn Surface,
        canvas: &str,
        config: ChartConfig,
    ) -> Result<(), SurfaceError> {
        if let Some(previous) = self.handle.take() {
            surface.destroy_chart(previous)?;
        }
        self.handle = Some(surface.attach_chart(canvas, config)?);
        Ok(())
    }
}

#[cfg(test)]
impl ChartSlot {
    pub fn handle(&self) -> Option<&ChartHandle> {
        self.handle.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }
}
